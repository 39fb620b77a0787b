use async_trait::async_trait;

use crate::error::IdeasClientResult;
use crate::models::{IdeasPage, ListingQuery};

/// Источник страниц со списком идей.
///
/// Фьючерсы не обязаны быть `Send`: в браузере запросы идут через `gloo-net`.
#[async_trait(?Send)]
pub trait IdeasSource {
    /// Загружает одну страницу.
    async fn fetch_ideas(&self, query: &ListingQuery) -> IdeasClientResult<IdeasPage>;
}
