use thiserror::Error;

#[derive(Debug, Error)]
pub(crate) enum ProxyError {
    #[error("missing \"{0}\" query parameter")]
    MissingParameter(&'static str),

    #[error("invalid \"{field}\" query parameter: {message}")]
    InvalidParameter {
        field: &'static str,
        message: &'static str,
    },

    #[error("upstream responded with status {0}")]
    UpstreamStatus(u16),

    #[error("upstream transport error: {0}")]
    Transport(String),

    #[error("failed to decode upstream body: {0}")]
    Decode(String),
}
