use ideas_client::{ControlKind, PageAction};
use leptos::prelude::*;

use crate::state::AppState;

#[component]
pub(crate) fn PaginationBar(state: AppState, on_action: Callback<PageAction>) -> impl IntoView {
    view! {
        <nav class="pagination">
            {move || {
                state
                    .controls
                    .get()
                    .into_iter()
                    .map(|control| {
                        let action = control.action;
                        let class = match (control.kind, control.active) {
                            (ControlKind::Page, true) => "page-button active",
                            (ControlKind::Page, false) => "page-button",
                            _ => "page-button nav",
                        };
                        view! {
                            <button
                                class=class
                                on:click=move |_| on_action.run(action)
                                disabled=move || state.loading.get()
                            >
                                {control.label}
                            </button>
                        }
                    })
                    .collect_view()
            }}
        </nav>
    }
}
