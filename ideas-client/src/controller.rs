//! Контроллер списка: связывает действия пользователя, загрузку страниц и
//! отображение.

use tracing::{debug, warn};

use crate::error::IdeasClientResult;
use crate::mapping::map_idea;
use crate::models::{IdeasPage, ListingQuery, PostSummary, SortDirection};
use crate::pagination::{PageAction, PaginationState};
use crate::preferences::{PreferenceStore, Preferences};
use crate::source::IdeasSource;
use crate::view::{ListingView, render_listing};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Выданный контроллером номер загрузки и запрос к ней.
pub struct LoadTicket {
    generation: u64,
    query: ListingQuery,
}

impl LoadTicket {
    /// Номер загрузки; растёт с каждой новой загрузкой.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Запрос, который нужно отправить.
    pub fn query(&self) -> &ListingQuery {
        &self.query
    }
}

/// Контроллер списка идей.
///
/// Владеет [`PaginationState`]. Загрузку можно выполнить целиком через
/// [`ListingController::load_page`] или разбить на
/// [`ListingController::begin_load`] и [`ListingController::finish_load`],
/// если запрос отправляется снаружи. Ответ устаревшей загрузки отбрасывается.
pub struct ListingController<S, P> {
    source: S,
    preferences: P,
    state: PaginationState,
    generation: u64,
    image_base: String,
}

impl<S, P> ListingController<S, P>
where
    S: IdeasSource,
    P: PreferenceStore,
{
    /// Создаёт контроллер, восстанавливая сортировку и размер страницы.
    pub fn new(source: S, preferences: P) -> Self {
        let restored = Preferences::restore(&preferences);
        Self {
            source,
            preferences,
            state: PaginationState::new(restored.page_size, restored.sort),
            generation: 0,
            image_base: String::new(),
        }
    }

    /// Префикс для ссылок на картинки через прокси (по умолчанию пустой).
    pub fn with_image_base(mut self, image_base: impl Into<String>) -> Self {
        self.image_base = image_base.into();
        self
    }

    /// Текущее состояние пагинации.
    pub fn state(&self) -> &PaginationState {
        &self.state
    }

    /// Источник страниц.
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Загружает произвольную страницу и обновляет `total_items`.
    ///
    /// При любой ошибке пишет предупреждение в лог и возвращает пустой
    /// список, `total_items` остаётся прежним.
    pub async fn fetch_page(
        &mut self,
        page: u32,
        page_size: u32,
        sort: SortDirection,
    ) -> Vec<PostSummary> {
        let query = match ListingQuery::new(page, page_size, sort) {
            Ok(query) => query,
            Err(err) => {
                warn!(error = %err, "rejected page request");
                return Vec::new();
            }
        };
        let result = self.source.fetch_ideas(&query).await;
        self.absorb(result)
    }

    /// Выдаёт номер новой загрузки для текущего состояния.
    pub fn begin_load(&mut self) -> LoadTicket {
        self.generation += 1;
        LoadTicket {
            generation: self.generation,
            query: self.state.query(),
        }
    }

    /// Применяет результат загрузки.
    ///
    /// Возвращает `None`, если после этой загрузки уже была начата другая.
    pub fn finish_load(
        &mut self,
        ticket: LoadTicket,
        result: IdeasClientResult<IdeasPage>,
    ) -> Option<ListingView> {
        if ticket.generation != self.generation {
            debug!(
                stale = ticket.generation,
                latest = self.generation,
                "discarding stale listing response"
            );
            return None;
        }

        let posts = self.absorb(result);
        Some(render_listing(&self.state, posts))
    }

    /// Загружает текущую страницу и строит отображение.
    pub async fn load_page(&mut self) -> Option<ListingView> {
        let ticket = self.begin_load();
        let result = self.source.fetch_ideas(ticket.query()).await;
        self.finish_load(ticket, result)
    }

    /// Применяет нажатие на кнопку пагинации. `true`, если страница изменилась.
    pub fn apply_action(&mut self, action: PageAction) -> bool {
        self.state.apply(action)
    }

    /// Обрабатывает нажатие по атрибутам кнопки и перезагружает список,
    /// если страница изменилась.
    pub async fn click(&mut self, action: Option<&str>, page: Option<&str>) -> Option<ListingView> {
        let action = PageAction::resolve(action, page)?;
        if !self.apply_action(action) {
            return None;
        }
        self.load_page().await
    }

    /// Сохраняет сортировку и возвращает на первую страницу.
    pub fn set_sort(&mut self, sort: SortDirection) {
        if let Err(err) = Preferences::save_sort(&self.preferences, sort) {
            warn!(error = %err, "failed to persist sort preference");
        }
        self.state.set_sort(sort);
    }

    /// Сохраняет размер страницы и возвращает на первую страницу.
    pub fn set_page_size(&mut self, page_size: u32) -> IdeasClientResult<()> {
        self.state.set_page_size(page_size)?;
        if let Err(err) = Preferences::save_page_size(&self.preferences, page_size) {
            warn!(error = %err, "failed to persist page size preference");
        }
        Ok(())
    }

    /// Меняет сортировку и загружает первую страницу.
    pub async fn change_sort(&mut self, sort: SortDirection) -> Option<ListingView> {
        self.set_sort(sort);
        self.load_page().await
    }

    /// Меняет размер страницы и загружает первую страницу.
    pub async fn change_page_size(&mut self, page_size: u32) -> IdeasClientResult<Option<ListingView>> {
        self.set_page_size(page_size)?;
        Ok(self.load_page().await)
    }

    fn absorb(&mut self, result: IdeasClientResult<IdeasPage>) -> Vec<PostSummary> {
        match result {
            Ok(page) => {
                self.state.set_total_items(page.total());
                page.into_records()
                    .into_iter()
                    .map(|raw| map_idea(raw, &self.image_base))
                    .collect()
            }
            Err(err) => {
                warn!(error = %err, "Error fetching post data");
                Vec::new()
            }
        }
    }
}
