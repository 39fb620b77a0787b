use leptos::prelude::*;

use crate::keys::card_key;
use crate::state::AppState;

#[component]
pub(crate) fn PostList(state: AppState) -> impl IntoView {
    view! {
        <div class="post-list">
            <For
                each=move || state.posts.get().into_iter().enumerate()
                key=|(index, post)| card_key(*index, post)
                children=move |(_, post)| {
                    view! {
                        <div class="post-card">
                            <img
                                class="post-card-image"
                                src=post.image_url.clone()
                                alt=post.title.clone()
                                loading="lazy"
                            />
                            <div class="post-card-body">
                                <p class="post-card-date">{post.display_date.clone()}</p>
                                <h3 class="post-card-title">{post.title.clone()}</h3>
                            </div>
                        </div>
                    }
                }
            />
        </div>
    }
}
