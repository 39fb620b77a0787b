//! Состояние пагинации и разбор действий пользователя.

use std::ops::RangeInclusive;

use crate::error::{IdeasClientError, IdeasClientResult};
use crate::models::{ListingQuery, SortDirection};

/// Размер страницы по умолчанию.
pub const DEFAULT_PAGE_SIZE: u32 = 10;
/// На сколько страниц прыгают кнопки `«` и `»`.
pub const PAGE_SET_SIZE: u32 = 5;
/// Ширина окна с номерами страниц.
pub const WINDOW_WIDTH: u32 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Одно действие на панели пагинации.
pub enum PageAction {
    /// Предыдущая страница.
    Previous,
    /// Следующая страница.
    Next,
    /// Пять страниц назад.
    PreviousSet,
    /// Пять страниц вперёд.
    NextSet,
    /// Переход на конкретную страницу.
    Page(u32),
}

impl PageAction {
    /// Определяет действие по атрибутам нажатой кнопки.
    ///
    /// Именованное действие важнее номера страницы; номер разбирается
    /// последним. Если не подошло ни то ни другое, возвращает `None`.
    pub fn resolve(action: Option<&str>, page: Option<&str>) -> Option<Self> {
        let named = action.and_then(|token| match token.trim() {
            "previous" => Some(Self::Previous),
            "next" => Some(Self::Next),
            "previous-set" => Some(Self::PreviousSet),
            "next-set" => Some(Self::NextSet),
            _ => None,
        });
        if named.is_some() {
            return named;
        }

        page.and_then(|raw| raw.trim().parse::<u32>().ok())
            .filter(|page| *page > 0)
            .map(Self::Page)
    }

    /// Токен действия для разметки (`data-action`); у номера страницы его нет.
    pub fn token(self) -> Option<&'static str> {
        match self {
            Self::Previous => Some("previous"),
            Self::Next => Some("next"),
            Self::PreviousSet => Some("previous-set"),
            Self::NextSet => Some("next-set"),
            Self::Page(_) => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Состояние списка: текущая страница, размер, сортировка и общее количество.
pub struct PaginationState {
    current_page: u32,
    page_size: u32,
    sort: SortDirection,
    total_items: u64,
}

impl Default for PaginationState {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE, SortDirection::default())
    }
}

impl PaginationState {
    /// Начальное состояние: первая страница, записей пока нет.
    pub fn new(page_size: u32, sort: SortDirection) -> Self {
        Self {
            current_page: 1,
            page_size: page_size.max(1),
            sort,
            total_items: 0,
        }
    }

    /// Текущая страница (с единицы).
    pub fn current_page(&self) -> u32 {
        self.current_page
    }

    /// Размер страницы.
    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    /// Порядок сортировки.
    pub fn sort(&self) -> SortDirection {
        self.sort
    }

    /// Общее количество записей по данным последнего успешного запроса.
    pub fn total_items(&self) -> u64 {
        self.total_items
    }

    /// `ceil(total_items / page_size)`.
    pub fn total_pages(&self) -> u32 {
        let pages = self.total_items.div_ceil(u64::from(self.page_size));
        u32::try_from(pages).unwrap_or(u32::MAX)
    }

    /// Последняя допустимая страница; при пустом списке это `1`.
    pub fn last_page(&self) -> u32 {
        self.total_pages().max(1)
    }

    /// Номера страниц, которые показываются кнопками.
    ///
    /// Окно начинается за две страницы до текущей и у конца списка
    /// сдвигается влево, чтобы сохранить ширину. Без записей окно пустое.
    pub fn window(&self) -> RangeInclusive<u32> {
        let start = self.current_page.saturating_sub(2).max(1);
        let end = start
            .saturating_add(WINDOW_WIDTH - 1)
            .min(self.total_pages());
        let start = end.saturating_sub(WINDOW_WIDTH - 1).max(1);
        start..=end
    }

    /// Применяет действие. Возвращает `true`, если страница изменилась.
    ///
    /// `previous`/`next` на границах ничего не делают, прыжки на пять страниц
    /// и переход по номеру прижимаются к `[1, last_page]`.
    pub fn apply(&mut self, action: PageAction) -> bool {
        let total_pages = self.total_pages();
        let before = self.current_page;

        let target = match action {
            PageAction::Previous if self.current_page > 1 => self.current_page - 1,
            PageAction::Next if self.current_page < total_pages => self.current_page + 1,
            PageAction::Previous | PageAction::Next => self.current_page,
            PageAction::PreviousSet => self.current_page.saturating_sub(PAGE_SET_SIZE),
            PageAction::NextSet => self.current_page.saturating_add(PAGE_SET_SIZE),
            PageAction::Page(page) => page,
        };

        self.current_page = target.clamp(1, self.last_page());
        self.current_page != before
    }

    /// Меняет размер страницы и возвращает на первую страницу.
    pub fn set_page_size(&mut self, page_size: u32) -> IdeasClientResult<()> {
        if page_size == 0 {
            return Err(IdeasClientError::InvalidRequest(
                "page_size must be > 0".to_string(),
            ));
        }
        self.page_size = page_size;
        self.current_page = 1;
        Ok(())
    }

    /// Меняет сортировку и возвращает на первую страницу.
    pub fn set_sort(&mut self, sort: SortDirection) {
        self.sort = sort;
        self.current_page = 1;
    }

    /// Обновляет число записей; текущая страница не выходит за последнюю.
    pub(crate) fn set_total_items(&mut self, total_items: u64) {
        self.total_items = total_items;
        self.current_page = self.current_page.clamp(1, self.last_page());
    }

    /// Запрос для текущей страницы.
    pub fn query(&self) -> ListingQuery {
        ListingQuery::clamped(self.current_page, self.page_size, self.sort)
    }

    /// Диапазон показанных записей `(first, last)`, `(0, 0)` для пустой страницы.
    pub fn showing(&self) -> (u64, u64) {
        let page_size = u64::from(self.page_size);
        let first = u64::from(self.current_page - 1) * page_size + 1;
        if self.total_items == 0 || first > self.total_items {
            return (0, 0);
        }
        let last = (first + page_size - 1).min(self.total_items);
        (first, last)
    }

    /// Текст счётчика: `Showing 11 - 20 of 95`.
    pub fn counter_text(&self) -> String {
        let (first, last) = self.showing();
        format!("Showing {first} - {last} of {}", self.total_items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state(current_page: u32, page_size: u32, total_items: u64) -> PaginationState {
        let mut state = PaginationState::new(page_size, SortDirection::Newest);
        state.set_total_items(total_items);
        state.current_page = current_page;
        state
    }

    #[test]
    fn total_pages_rounds_up() {
        assert_eq!(state(1, 10, 0).total_pages(), 0);
        assert_eq!(state(1, 10, 1).total_pages(), 1);
        assert_eq!(state(1, 10, 100).total_pages(), 10);
        assert_eq!(state(1, 10, 101).total_pages(), 11);
    }

    #[test]
    fn window_at_start_is_anchored_left() {
        assert_eq!(state(1, 10, 100).window(), 1..=5);
        assert_eq!(state(3, 10, 100).window(), 1..=5);
    }

    #[test]
    fn window_in_the_middle_centers_current_page() {
        assert_eq!(state(5, 10, 100).window(), 3..=7);
    }

    #[test]
    fn window_at_end_keeps_full_width() {
        assert_eq!(state(10, 10, 100).window(), 6..=10);
        assert_eq!(state(9, 10, 100).window(), 6..=10);
    }

    #[test]
    fn window_with_few_pages_is_truncated() {
        assert_eq!(state(2, 10, 25).window(), 1..=3);
    }

    #[test]
    fn window_without_items_is_empty() {
        assert!(state(1, 10, 0).window().is_empty());
    }

    #[test]
    fn next_on_last_page_is_noop() {
        let mut state = state(10, 10, 100);
        assert!(!state.apply(PageAction::Next));
        assert_eq!(state.current_page(), 10);
    }

    #[test]
    fn previous_on_first_page_is_noop() {
        let mut state = state(1, 10, 100);
        assert!(!state.apply(PageAction::Previous));
        assert_eq!(state.current_page(), 1);
    }

    #[test]
    fn next_set_is_clamped_to_last_page() {
        let mut state = state(8, 10, 100);
        assert!(state.apply(PageAction::NextSet));
        assert_eq!(state.current_page(), 10);
    }

    #[test]
    fn previous_set_is_clamped_to_first_page() {
        let mut state = state(3, 10, 100);
        assert!(state.apply(PageAction::PreviousSet));
        assert_eq!(state.current_page(), 1);
    }

    #[test]
    fn page_jump_is_clamped() {
        let mut state = state(1, 10, 30);
        assert!(state.apply(PageAction::Page(42)));
        assert_eq!(state.current_page(), 3);
    }

    #[test]
    fn every_action_keeps_page_in_range() {
        let actions = [
            PageAction::Previous,
            PageAction::Next,
            PageAction::PreviousSet,
            PageAction::NextSet,
            PageAction::Page(1),
            PageAction::Page(7),
            PageAction::Page(1000),
        ];

        for total_items in [0u64, 1, 9, 10, 11, 55, 100] {
            for page_size in [1u32, 3, 10, 50] {
                for start in 1..=12 {
                    for action in actions {
                        let mut state = state(start, page_size, total_items);
                        state.apply(action);
                        let page = state.current_page();
                        assert!(
                            (1..=state.last_page()).contains(&page),
                            "page {page} out of range after {action:?} (total={total_items}, size={page_size}, start={start})"
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn page_size_change_resets_to_first_page() {
        let mut state = state(4, 10, 100);
        state.set_page_size(20).expect("positive size");
        assert_eq!(state.current_page(), 1);
        assert_eq!(state.page_size(), 20);
        assert!(state.set_page_size(0).is_err());
    }

    #[test]
    fn sort_change_resets_to_first_page() {
        let mut state = state(4, 10, 100);
        state.set_sort(SortDirection::Oldest);
        assert_eq!(state.current_page(), 1);
        assert_eq!(state.sort(), SortDirection::Oldest);
    }

    #[test]
    fn named_action_wins_over_page_number() {
        assert_eq!(
            PageAction::resolve(Some("next"), Some("3")),
            Some(PageAction::Next)
        );
        assert_eq!(
            PageAction::resolve(Some("unknown"), Some("3")),
            Some(PageAction::Page(3))
        );
        assert_eq!(PageAction::resolve(None, Some("abc")), None);
        assert_eq!(PageAction::resolve(None, Some("0")), None);
        assert_eq!(PageAction::resolve(None, None), None);
    }

    #[test]
    fn counter_is_clamped_to_total() {
        assert_eq!(state(1, 10, 95).counter_text(), "Showing 1 - 10 of 95");
        assert_eq!(state(10, 10, 95).counter_text(), "Showing 91 - 95 of 95");
        assert_eq!(state(1, 10, 0).counter_text(), "Showing 0 - 0 of 0");
    }

    #[test]
    fn shrinking_total_pulls_current_page_back_in_range() {
        let mut state = state(10, 10, 100);
        state.set_total_items(30);

        assert_eq!(state.current_page(), 3);
        assert_eq!(state.counter_text(), "Showing 21 - 30 of 30");
        assert!(!state.apply(PageAction::Next));

        state.set_total_items(0);
        assert_eq!(state.current_page(), 1);
    }

    #[test]
    fn query_reflects_state() {
        let state = state(3, 20, 100);
        let query = state.query();
        assert_eq!(query.page(), 3);
        assert_eq!(query.page_size(), 20);
        assert_eq!(query.sort(), SortDirection::Newest);
    }
}
