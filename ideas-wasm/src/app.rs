use std::cell::RefCell;
use std::rc::Rc;

use ideas_client::{IdeasSource, ListingController, PageAction, SortDirection};
use leptos::prelude::*;

use crate::api::{self, GlooSource};
use crate::components::listing_controls::ListingControls;
use crate::components::pagination_bar::PaginationBar;
use crate::components::post_list::PostList;
use crate::state::AppState;
use crate::storage::LocalStoragePreferences;

type SharedController = Rc<RefCell<ListingController<GlooSource, LocalStoragePreferences>>>;
type ControllerHandle = StoredValue<SharedController, LocalStorage>;

fn log_error(message: &str) {
    web_sys::console::error_1(&message.into());
}

/// Загружает текущую страницу. Ответ устаревшей загрузки отбрасывается
/// контроллером, поэтому индикатор снимает только последняя.
fn reload(state: AppState, controller: ControllerHandle) {
    let (ticket, source) = {
        let shared = controller.get_value();
        let mut ctrl = shared.borrow_mut();
        (ctrl.begin_load(), ctrl.source().clone())
    };
    state.loading.set(true);

    leptos::task::spawn_local(async move {
        let result = source.fetch_ideas(ticket.query()).await;
        if let Err(err) = &result {
            log_error(&format!("Error fetching post data: {err}"));
        }

        let shared = controller.get_value();
        let view = shared.borrow_mut().finish_load(ticket, result);
        if let Some(view) = view {
            state.posts.set(view.posts);
            state.counter.set(view.counter);
            state.controls.set(view.controls);
            state.loading.set(false);
        }
    });
}

#[component]
pub fn App() -> impl IntoView {
    let state = AppState::new();

    let source = GlooSource::new(api::API_BASE_URL);
    let image_base = source.base_url().to_string();
    let controller = ListingController::new(source, LocalStoragePreferences).with_image_base(image_base);
    state.sync_controls(controller.state());
    let controller: ControllerHandle = StoredValue::new_local(Rc::new(RefCell::new(controller)));

    reload(state, controller);

    let on_action = Callback::new(move |action: PageAction| {
        let changed = controller.get_value().borrow_mut().apply_action(action);
        if changed {
            reload(state, controller);
        }
    });

    let on_sort = Callback::new(move |raw: String| {
        let sort = match raw.parse::<SortDirection>() {
            Ok(sort) => sort,
            Err(err) => {
                log_error(&err.to_string());
                return;
            }
        };
        {
            let shared = controller.get_value();
            let mut ctrl = shared.borrow_mut();
            ctrl.set_sort(sort);
            state.sync_controls(ctrl.state());
        }
        reload(state, controller);
    });

    let on_page_size = Callback::new(move |raw: String| {
        let Ok(size) = raw.parse::<u32>() else {
            log_error(&format!("invalid page size: {raw}"));
            return;
        };
        {
            let shared = controller.get_value();
            let mut ctrl = shared.borrow_mut();
            if let Err(err) = ctrl.set_page_size(size) {
                log_error(&err.to_string());
                return;
            }
            state.sync_controls(ctrl.state());
        }
        reload(state, controller);
    });

    view! {
        <main class="page">
            <section class="container">
                <h1>"Ideas"</h1>
                <ListingControls state=state on_sort=on_sort on_page_size=on_page_size />
                <PostList state=state />
                <PaginationBar state=state on_action=on_action />
            </section>
        </main>
    }
}
