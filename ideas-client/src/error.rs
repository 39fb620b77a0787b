use thiserror::Error;

#[derive(Debug, Error)]
/// Ошибки клиентской библиотеки `ideas-client`.
pub enum IdeasClientError {
    /// Ошибка HTTP-транспорта (`reqwest`).
    #[cfg(not(target_arch = "wasm32"))]
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// Ошибка сети в транспорте без `reqwest` (например, `gloo-net` в браузере).
    #[error("network error: {0}")]
    Network(String),

    /// Прокси ответил неуспешным статусом.
    #[error("http status {status}: {message}")]
    Status {
        /// HTTP-статус ответа.
        status: u16,
        /// Сообщение из тела `{ "error": ... }` или общее описание.
        message: String,
    },

    /// Тело ответа не удалось разобрать.
    #[error("decode error: {0}")]
    Decode(String),

    /// Некорректные параметры запроса.
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// Не удалось сохранить пользовательские настройки.
    #[error("preferences error: {0}")]
    Preferences(String),
}

/// Результат операций `ideas-client`.
pub type IdeasClientResult<T> = Result<T, IdeasClientError>;

impl IdeasClientError {
    pub(crate) fn from_status(status: u16, message: Option<String>) -> Self {
        let message = message.unwrap_or_else(|| format!("http status {status}"));
        Self::Status { status, message }
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub(crate) fn from_reqwest(err: reqwest::Error) -> Self {
        if let Some(status) = err.status() {
            return Self::from_status(status.as_u16(), None);
        }
        if err.is_decode() {
            return Self::Decode(err.to_string());
        }
        Self::Http(err)
    }
}
