use ideas_client::{PaginationControl, PaginationState, PostSummary, SortDirection};
use leptos::prelude::*;

#[derive(Debug, Clone, Copy)]
pub(crate) struct AppState {
    pub(crate) posts: RwSignal<Vec<PostSummary>>,
    pub(crate) counter: RwSignal<String>,
    pub(crate) controls: RwSignal<Vec<PaginationControl>>,
    pub(crate) sort: RwSignal<SortDirection>,
    pub(crate) page_size: RwSignal<u32>,
    pub(crate) loading: RwSignal<bool>,
}

impl AppState {
    pub(crate) fn new() -> Self {
        Self {
            posts: RwSignal::new(Vec::new()),
            counter: RwSignal::new(String::new()),
            controls: RwSignal::new(Vec::new()),
            sort: RwSignal::new(SortDirection::default()),
            page_size: RwSignal::new(10),
            loading: RwSignal::new(false),
        }
    }

    /// Переносит сортировку и размер страницы из контроллера в селекты.
    pub(crate) fn sync_controls(&self, pagination: &PaginationState) {
        self.sort.set(pagination.sort());
        self.page_size.set(pagination.page_size());
    }
}
