use ideas_client::SortDirection;
use leptos::prelude::*;

use crate::state::AppState;

const PAGE_SIZE_OPTIONS: [u32; 3] = [10, 20, 50];

#[component]
pub(crate) fn ListingControls(
    state: AppState,
    on_sort: Callback<String>,
    on_page_size: Callback<String>,
) -> impl IntoView {
    view! {
        <div class="controls">
            <p class="controls-counter">{move || state.counter.get()}</p>

            <label>
                "Show per page: "
                <select
                    prop:value=move || state.page_size.get().to_string()
                    on:change=move |ev| on_page_size.run(event_target_value(&ev))
                    disabled=move || state.loading.get()
                >
                    {PAGE_SIZE_OPTIONS
                        .into_iter()
                        .map(|size| view! { <option value=size.to_string()>{size}</option> })
                        .collect_view()}
                </select>
            </label>

            <label>
                "Sort by: "
                <select
                    prop:value=move || state.sort.get().as_str()
                    on:change=move |ev| on_sort.run(event_target_value(&ev))
                    disabled=move || state.loading.get()
                >
                    <option value=SortDirection::Newest.as_str()>"Newest"</option>
                    <option value=SortDirection::Oldest.as_str()>"Oldest"</option>
                </select>
            </label>
        </div>
    }
}
