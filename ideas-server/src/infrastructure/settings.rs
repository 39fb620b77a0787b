use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result, anyhow};

use crate::domain::image::{DEFAULT_USER_AGENT, HeaderProfile};

const DEFAULT_UPSTREAM_BASE_URL: &str = "https://suitmedia-backend.suitdev.com";

#[derive(Debug, Clone)]
pub(crate) struct Settings {
    pub(crate) http_addr: String,
    pub(crate) upstream_base_url: String,
    pub(crate) image_user_agent: String,
    pub(crate) image_referer: String,
    pub(crate) public_dir: PathBuf,
    pub(crate) cors_origins: Vec<String>,
    pub(crate) log_level: String,
    pub(crate) http_request_timeout_secs: u64,
    pub(crate) http_concurrency_limit: usize,
    pub(crate) upstream_connect_timeout_secs: u64,
    pub(crate) upstream_timeout_secs: u64,
}

impl Settings {
    pub(crate) fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let host = non_empty(lookup("HOST")).unwrap_or_else(|| "0.0.0.0".to_string());
        let port: u16 = non_empty(lookup("PORT"))
            .unwrap_or_else(|| "3000".to_string())
            .parse()
            .context("Failed to parse PORT, expecting integer in 0..=65535")?;

        let upstream_base_url = non_empty(lookup("UPSTREAM_BASE_URL"))
            .unwrap_or_else(|| DEFAULT_UPSTREAM_BASE_URL.to_string());
        let image_user_agent =
            non_empty(lookup("IMAGE_USER_AGENT")).unwrap_or_else(|| DEFAULT_USER_AGENT.to_string());
        let image_referer =
            non_empty(lookup("IMAGE_REFERER")).unwrap_or_else(|| upstream_base_url.clone());
        let public_dir =
            PathBuf::from(non_empty(lookup("PUBLIC_DIR")).unwrap_or_else(|| "public".to_string()));
        let cors_origins =
            parse_cors_origins(lookup("CORS_ORIGINS").unwrap_or_else(|| "*".to_string()));
        let log_level = lookup("LOG_LEVEL")
            .or_else(|| lookup("RUST_LOG"))
            .unwrap_or_else(|| "info".to_string());

        let http_request_timeout_secs =
            parse_positive(&lookup, "HTTP_REQUEST_TIMEOUT_SECS", 30u64)?;
        let http_concurrency_limit = parse_positive(&lookup, "HTTP_CONCURRENCY_LIMIT", 256usize)?;
        let upstream_connect_timeout_secs =
            parse_positive(&lookup, "UPSTREAM_CONNECT_TIMEOUT_SECS", 5u64)?;
        let upstream_timeout_secs = parse_positive(&lookup, "UPSTREAM_TIMEOUT_SECS", 30u64)?;

        Ok(Self {
            http_addr: format!("{host}:{port}"),
            upstream_base_url,
            image_user_agent,
            image_referer,
            public_dir,
            cors_origins,
            log_level,
            http_request_timeout_secs,
            http_concurrency_limit,
            upstream_connect_timeout_secs,
            upstream_timeout_secs,
        })
    }

    pub(crate) fn image_header_profile(&self) -> HeaderProfile {
        HeaderProfile::browser(self.image_user_agent.clone(), self.image_referer.clone())
    }

    pub(crate) fn http_request_timeout(&self) -> Duration {
        Duration::from_secs(self.http_request_timeout_secs)
    }

    pub(crate) fn upstream_connect_timeout(&self) -> Duration {
        Duration::from_secs(self.upstream_connect_timeout_secs)
    }

    pub(crate) fn upstream_timeout(&self) -> Duration {
        Duration::from_secs(self.upstream_timeout_secs)
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

fn parse_cors_origins(raw: String) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(str::to_string)
        .collect()
}

fn parse_positive<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> Result<T>
where
    T: std::str::FromStr + std::fmt::Display + PartialEq + Default,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    let value = lookup(key)
        .unwrap_or_else(|| default.to_string())
        .trim()
        .parse::<T>()
        .with_context(|| format!("Failed to parse {key}, expecting positive integer"))?;

    if value == T::default() {
        return Err(anyhow!("{key} must be > 0"));
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::Settings;

    fn settings_from(vars: &[(&str, &str)]) -> anyhow::Result<Settings> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();
        Settings::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_listen_on_port_3000() {
        let settings = settings_from(&[]).expect("defaults must be valid");

        assert_eq!(settings.http_addr, "0.0.0.0:3000");
        assert_eq!(
            settings.upstream_base_url,
            "https://suitmedia-backend.suitdev.com"
        );
        assert_eq!(settings.image_referer, settings.upstream_base_url);
        assert_eq!(settings.cors_origins, vec!["*".to_string()]);
        assert_eq!(settings.http_concurrency_limit, 256);
    }

    #[test]
    fn port_and_host_come_from_env() {
        let settings = settings_from(&[("PORT", "8081"), ("HOST", "127.0.0.1")])
            .expect("settings must parse");
        assert_eq!(settings.http_addr, "127.0.0.1:8081");
    }

    #[test]
    fn invalid_port_is_rejected() {
        let err = settings_from(&[("PORT", "70000")]).expect_err("port out of range");
        assert!(err.to_string().contains("PORT"));
    }

    #[test]
    fn zero_timeout_is_rejected() {
        let err = settings_from(&[("UPSTREAM_TIMEOUT_SECS", "0")]).expect_err("zero timeout");
        assert!(err.to_string().contains("UPSTREAM_TIMEOUT_SECS"));
    }

    #[test]
    fn cors_origins_are_split_and_trimmed() {
        let settings = settings_from(&[(
            "CORS_ORIGINS",
            "http://localhost:8000, http://127.0.0.1:8000,,",
        )])
        .expect("settings must parse");
        assert_eq!(
            settings.cors_origins,
            vec![
                "http://localhost:8000".to_string(),
                "http://127.0.0.1:8000".to_string()
            ]
        );
    }
}
