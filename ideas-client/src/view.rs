//! Описание отображения списка без привязки к DOM.

use crate::models::PostSummary;
use crate::pagination::{PageAction, PaginationState};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Вид кнопки на панели пагинации.
pub enum ControlKind {
    /// `«`
    PreviousSet,
    /// `‹`
    Previous,
    /// Номер страницы.
    Page,
    /// `›`
    Next,
    /// `»`
    NextSet,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Кнопка панели пагинации.
pub struct PaginationControl {
    /// Вид кнопки.
    pub kind: ControlKind,
    /// Подпись.
    pub label: String,
    /// Действие при нажатии.
    pub action: PageAction,
    /// Кнопка текущей страницы.
    pub active: bool,
}

impl PaginationControl {
    fn named(kind: ControlKind, label: &str, action: PageAction) -> Self {
        Self {
            kind,
            label: label.to_string(),
            action,
            active: false,
        }
    }

    fn page(page: u32, current_page: u32) -> Self {
        Self {
            kind: ControlKind::Page,
            label: page.to_string(),
            action: PageAction::Page(page),
            active: page == current_page,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Всё, что нужно нарисовать после загрузки страницы.
pub struct ListingView {
    /// Строки списка.
    pub posts: Vec<PostSummary>,
    /// Текст счётчика.
    pub counter: String,
    /// Кнопки пагинации в порядке отображения.
    pub controls: Vec<PaginationControl>,
}

/// Кнопки пагинации: `«`, `‹`, окно номеров, `›`, `»`.
pub fn render_pagination(state: &PaginationState) -> Vec<PaginationControl> {
    let current_page = state.current_page();
    let mut controls = vec![
        PaginationControl::named(ControlKind::PreviousSet, "«", PageAction::PreviousSet),
        PaginationControl::named(ControlKind::Previous, "‹", PageAction::Previous),
    ];
    controls.extend(
        state
            .window()
            .map(|page| PaginationControl::page(page, current_page)),
    );
    controls.push(PaginationControl::named(ControlKind::Next, "›", PageAction::Next));
    controls.push(PaginationControl::named(ControlKind::NextSet, "»", PageAction::NextSet));
    controls
}

/// Собирает отображение списка из состояния и загруженных строк.
pub fn render_listing(state: &PaginationState, posts: Vec<PostSummary>) -> ListingView {
    ListingView {
        posts,
        counter: state.counter_text(),
        controls: render_pagination(state),
    }
}
