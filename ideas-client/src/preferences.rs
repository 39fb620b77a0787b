//! Настройки пользователя, которые переживают перезагрузку страницы.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::error::IdeasClientResult;
use crate::models::SortDirection;
use crate::pagination::DEFAULT_PAGE_SIZE;

/// Ключ сортировки в хранилище.
pub const SORT_KEY: &str = "sort";
/// Ключ размера страницы в хранилище.
pub const PER_PAGE_KEY: &str = "perPage";

/// Строковое хранилище ключ-значение (`localStorage`, файл, память).
pub trait PreferenceStore {
    /// Читает значение; `None`, если ключа нет или хранилище недоступно.
    fn load(&self, key: &str) -> Option<String>;
    /// Записывает значение.
    fn save(&self, key: &str, value: &str) -> IdeasClientResult<()>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Сохранённые сортировка и размер страницы.
pub struct Preferences {
    /// Порядок сортировки.
    pub sort: SortDirection,
    /// Размер страницы.
    pub page_size: u32,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            sort: SortDirection::Newest,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl Preferences {
    /// Читает настройки; отсутствующие и некорректные значения заменяются
    /// значениями по умолчанию.
    pub fn restore(store: &impl PreferenceStore) -> Self {
        let defaults = Self::default();
        let sort = store
            .load(SORT_KEY)
            .and_then(|raw| raw.parse::<SortDirection>().ok())
            .unwrap_or(defaults.sort);
        let page_size = store
            .load(PER_PAGE_KEY)
            .and_then(|raw| parse_page_size(&raw))
            .unwrap_or(defaults.page_size);

        Self { sort, page_size }
    }

    /// Сохраняет сортировку.
    pub fn save_sort(store: &impl PreferenceStore, sort: SortDirection) -> IdeasClientResult<()> {
        store.save(SORT_KEY, sort.as_str())
    }

    /// Сохраняет размер страницы.
    pub fn save_page_size(store: &impl PreferenceStore, page_size: u32) -> IdeasClientResult<()> {
        store.save(PER_PAGE_KEY, &page_size.to_string())
    }
}

fn parse_page_size(raw: &str) -> Option<u32> {
    raw.trim().parse::<u32>().ok().filter(|size| *size > 0)
}

#[derive(Debug, Clone, Default)]
/// Хранилище в памяти; клоны видят одни и те же значения.
pub struct MemoryPreferenceStore {
    values: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryPreferenceStore {
    /// Хранилище с начальными значениями.
    pub fn with_values<'a>(values: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        let store = Self::default();
        store.values.borrow_mut().extend(
            values
                .into_iter()
                .map(|(key, value)| (key.to_string(), value.to_string())),
        );
        store
    }
}

impl PreferenceStore for MemoryPreferenceStore {
    fn load(&self, key: &str) -> Option<String> {
        self.values.borrow().get(key).cloned()
    }

    fn save(&self, key: &str, value: &str) -> IdeasClientResult<()> {
        self.values
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn restore_uses_defaults_for_empty_store() {
        let prefs = Preferences::restore(&MemoryPreferenceStore::default());
        assert_eq!(prefs, Preferences::default());
        assert_eq!(prefs.page_size, 10);
        assert_eq!(prefs.sort, SortDirection::Newest);
    }

    #[test]
    fn restore_reads_stored_values() {
        let store = MemoryPreferenceStore::with_values([("sort", "oldest"), ("perPage", "20")]);
        let prefs = Preferences::restore(&store);

        assert_eq!(prefs.sort, SortDirection::Oldest);
        assert_eq!(prefs.page_size, 20);
    }

    #[test]
    fn restore_ignores_invalid_values() {
        let store = MemoryPreferenceStore::with_values([("sort", "sideways"), ("perPage", "0")]);
        assert_eq!(Preferences::restore(&store), Preferences::default());

        let store = MemoryPreferenceStore::with_values([("perPage", "ten")]);
        assert_eq!(Preferences::restore(&store).page_size, 10);
    }

    #[test]
    fn save_writes_string_encoded_values() {
        let store = MemoryPreferenceStore::default();
        Preferences::save_sort(&store, SortDirection::Oldest).expect("save sort");
        Preferences::save_page_size(&store, 50).expect("save page size");

        assert_eq!(store.load("sort").as_deref(), Some("oldest"));
        assert_eq!(store.load("perPage").as_deref(), Some("50"));
    }
}
