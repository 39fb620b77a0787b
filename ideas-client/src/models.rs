use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{IdeasClientError, IdeasClientResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
/// Порядок сортировки списка по дате публикации.
pub enum SortDirection {
    /// Сначала новые.
    #[default]
    Newest,
    /// Сначала старые.
    Oldest,
}

impl SortDirection {
    /// Значение для UI и хранилища настроек: `newest` или `oldest`.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Newest => "newest",
            Self::Oldest => "oldest",
        }
    }

    /// Ключ сортировки, который понимает апстрим.
    pub fn sort_key(self) -> &'static str {
        match self {
            Self::Newest => "-published_at",
            Self::Oldest => "published_at",
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortDirection {
    type Err = IdeasClientError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim() {
            "newest" => Ok(Self::Newest),
            "oldest" => Ok(Self::Oldest),
            other => Err(IdeasClientError::InvalidRequest(format!(
                "unknown sort direction: {other}"
            ))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Элемент списка, готовый к отображению.
pub struct PostSummary {
    /// Заголовок как есть.
    pub title: String,
    /// Адрес картинки через прокси или заглушка.
    pub image_url: String,
    /// Дата в виде `15 SEPTEMBER 2023`.
    pub display_date: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
/// Ответ апстрима со страницей идей.
pub struct IdeasPage {
    /// Записи страницы.
    pub data: Option<Vec<RawIdea>>,
    /// Метаданные пагинации.
    pub meta: Option<PageMeta>,
}

impl IdeasPage {
    /// Общее количество записей; `0`, если апстрим его не прислал.
    pub fn total(&self) -> u64 {
        self.meta.as_ref().and_then(|meta| meta.total).unwrap_or(0)
    }

    /// Забирает записи страницы.
    pub fn into_records(self) -> Vec<RawIdea> {
        self.data.unwrap_or_default()
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
/// Метаданные пагинации апстрима.
pub struct PageMeta {
    /// Общее количество записей.
    pub total: Option<u64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
/// Запись апстрима в исходном виде.
pub struct RawIdea {
    /// Заголовок.
    pub title: Option<String>,
    /// Дата публикации.
    pub published_at: Option<String>,
    /// Варианты картинки среднего размера.
    pub medium_image: Option<Vec<RawImage>>,
}

impl RawIdea {
    /// Адрес первого варианта картинки среднего размера.
    pub fn medium_image_url(&self) -> Option<&str> {
        self.medium_image
            .as_deref()?
            .first()?
            .url
            .as_deref()
            .filter(|url| !url.trim().is_empty())
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
/// Вариант картинки.
pub struct RawImage {
    /// Абсолютный адрес файла.
    pub url: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Параметры запроса одной страницы.
pub struct ListingQuery {
    page: u32,
    page_size: u32,
    sort: SortDirection,
}

impl ListingQuery {
    /// Создаёт запрос; `page` и `page_size` должны быть больше нуля.
    pub fn new(page: u32, page_size: u32, sort: SortDirection) -> IdeasClientResult<Self> {
        if page == 0 {
            return Err(IdeasClientError::InvalidRequest(
                "page must be >= 1".to_string(),
            ));
        }
        if page_size == 0 {
            return Err(IdeasClientError::InvalidRequest(
                "page_size must be > 0".to_string(),
            ));
        }
        Ok(Self {
            page,
            page_size,
            sort,
        })
    }

    pub(crate) fn clamped(page: u32, page_size: u32, sort: SortDirection) -> Self {
        Self {
            page: page.max(1),
            page_size: page_size.max(1),
            sort,
        }
    }

    /// Номер страницы (с единицы).
    pub fn page(&self) -> u32 {
        self.page
    }

    /// Размер страницы.
    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    /// Порядок сортировки.
    pub fn sort(&self) -> SortDirection {
        self.sort
    }

    /// Пары query-строки в том виде, в каком их ждёт апстрим.
    ///
    /// `append[]` повторяется: прокси передаёт повторы без изменений.
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        vec![
            ("page[number]", self.page.to_string()),
            ("page[size]", self.page_size.to_string()),
            ("append[]", "small_image".to_string()),
            ("append[]", "medium_image".to_string()),
            ("sort", self.sort.sort_key().to_string()),
        ]
    }

    /// Query-строка, закодированная как `application/x-www-form-urlencoded`.
    pub fn to_query_string(&self) -> String {
        url::form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.query_pairs())
            .finish()
    }
}
