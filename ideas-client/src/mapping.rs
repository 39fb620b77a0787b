//! Преобразование записей апстрима в строки списка.

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime};
use url::form_urlencoded;

use crate::models::{PostSummary, RawIdea};

/// Картинка для записей без варианта среднего размера.
pub const PLACEHOLDER_IMAGE_URL: &str = "https://via.placeholder.com/400x225";

/// Путь эндпоинта прокси для картинок.
pub const PROXY_IMAGE_PATH: &str = "/proxy-image";

const MONTHS: [&str; 12] = [
    "JANUARI",
    "FEBRUARI",
    "MARET",
    "APRIL",
    "MEI",
    "JUNI",
    "JULI",
    "AGUSTUS",
    "SEPTEMBER",
    "OKTOBER",
    "NOVEMBER",
    "DESEMBER",
];

/// Собирает строку списка из записи апстрима.
///
/// `image_base` — адрес прокси без завершающего `/`; пустая строка даёт
/// относительный путь для страницы, которую раздаёт сам прокси.
pub fn map_idea(raw: RawIdea, image_base: &str) -> PostSummary {
    let image_url = match raw.medium_image_url() {
        Some(url) => proxied_image_url(image_base, url),
        None => PLACEHOLDER_IMAGE_URL.to_string(),
    };
    let display_date = raw
        .published_at
        .as_deref()
        .map(format_display_date)
        .unwrap_or_default();

    PostSummary {
        title: raw.title.unwrap_or_default(),
        image_url,
        display_date,
    }
}

/// `"{image_base}/proxy-image?url=<encoded>"`.
pub fn proxied_image_url(image_base: &str, original: &str) -> String {
    let encoded: String = form_urlencoded::byte_serialize(original.as_bytes()).collect();
    format!(
        "{}{PROXY_IMAGE_PATH}?url={encoded}",
        image_base.trim_end_matches('/')
    )
}

/// Форматирует дату как `"<день> <МЕСЯЦ> <год>"`.
///
/// Берётся календарная дата в том виде, в каком она записана, без перевода
/// в другой часовой пояс. Нераспознанная строка возвращается как есть.
pub fn format_display_date(raw: &str) -> String {
    let raw = raw.trim();
    match parse_calendar_date(raw) {
        Some(date) => format!(
            "{} {} {}",
            date.day(),
            MONTHS[date.month0() as usize],
            date.year()
        ),
        None => raw.to_string(),
    }
}

fn parse_calendar_date(raw: &str) -> Option<NaiveDate> {
    if let Ok(value) = DateTime::parse_from_rfc3339(raw) {
        return Some(value.date_naive());
    }
    for format in ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"] {
        if let Ok(value) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(value.date());
        }
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()
}
