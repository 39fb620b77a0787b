//! Клиентская часть списка идей: состояние пагинации, загрузка страниц через
//! прокси `ideas-server` и описание отображения.
//!
//! Основной тип — [`ListingController`]. Он не зависит от DOM: результатом
//! каждой загрузки является [`ListingView`], который рисует терминал
//! (`ideas-cli`) или браузер (`ideas-wasm`).
//!
//! Транспорт задаётся трейтом [`IdeasSource`]:
//! - [`HttpClient`] (`reqwest`) на хосте,
//! - реализация на `gloo-net` в `ideas-wasm`.
#![warn(missing_docs)]

pub mod controller;
mod error;
pub mod mapping;
mod models;
pub mod pagination;
pub mod preferences;
mod source;
pub mod view;

#[cfg(not(target_arch = "wasm32"))]
mod http_client;

pub use controller::{ListingController, LoadTicket};
pub use error::{IdeasClientError, IdeasClientResult};
pub use models::{IdeasPage, ListingQuery, PageMeta, PostSummary, RawIdea, RawImage, SortDirection};
pub use pagination::{PageAction, PaginationState};
pub use preferences::{MemoryPreferenceStore, PreferenceStore, Preferences};
pub use source::IdeasSource;
pub use view::{ControlKind, ListingView, PaginationControl};

#[cfg(not(target_arch = "wasm32"))]
pub use http_client::HttpClient;
