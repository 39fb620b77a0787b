use url::Url;

use super::error::ProxyError;

pub(crate) const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64)";
pub(crate) const DEFAULT_ACCEPT: &str = "image/webp,image/apng,image/*,*/*;q=0.8";
pub(crate) const DEFAULT_ACCEPT_LANGUAGE: &str = "en-US,en;q=0.9";

/// Адрес картинки, которую нужно проксировать.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ImageSource {
    url: Url,
}

impl ImageSource {
    /// Разбирает значение параметра `url`.
    ///
    /// Пустое значение считается отсутствующим. Допускаются только абсолютные
    /// `http`/`https` адреса.
    pub(crate) fn parse(raw: Option<&str>) -> Result<Self, ProxyError> {
        let raw = raw
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .ok_or(ProxyError::MissingParameter("url"))?;

        let url = Url::parse(raw).map_err(|_| ProxyError::InvalidParameter {
            field: "url",
            message: "must be an absolute URL",
        })?;

        if !matches!(url.scheme(), "http" | "https") {
            return Err(ProxyError::InvalidParameter {
                field: "url",
                message: "scheme must be http or https",
            });
        }

        Ok(Self { url })
    }

    pub(crate) fn as_str(&self) -> &str {
        self.url.as_str()
    }
}

/// Набор заголовков, с которыми прокси ходит за картинками.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct HeaderProfile {
    pub(crate) user_agent: String,
    pub(crate) referer: String,
    pub(crate) accept: String,
    pub(crate) accept_language: String,
    pub(crate) origin: String,
}

impl HeaderProfile {
    pub(crate) fn browser(user_agent: impl Into<String>, referer: impl Into<String>) -> Self {
        let referer = referer.into();
        let origin = origin_of(&referer);

        Self {
            user_agent: user_agent.into(),
            referer,
            accept: DEFAULT_ACCEPT.to_string(),
            accept_language: DEFAULT_ACCEPT_LANGUAGE.to_string(),
            origin,
        }
    }

    pub(crate) fn headers(&self) -> [(&'static str, &str); 5] {
        [
            ("user-agent", self.user_agent.as_str()),
            ("referer", self.referer.as_str()),
            ("accept", self.accept.as_str()),
            ("accept-language", self.accept_language.as_str()),
            ("origin", self.origin.as_str()),
        ]
    }
}

fn origin_of(referer: &str) -> String {
    match Url::parse(referer) {
        Ok(url) => url.origin().ascii_serialization(),
        Err(_) => referer.trim_end_matches('/').to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::{DEFAULT_USER_AGENT, HeaderProfile, ImageSource};
    use crate::domain::error::ProxyError;

    #[test]
    fn parse_rejects_missing_and_blank_url() {
        assert!(matches!(
            ImageSource::parse(None),
            Err(ProxyError::MissingParameter("url"))
        ));
        assert!(matches!(
            ImageSource::parse(Some("   ")),
            Err(ProxyError::MissingParameter("url"))
        ));
    }

    #[test]
    fn parse_rejects_relative_url() {
        let err = ImageSource::parse(Some("/storage/files/a.jpg")).expect_err("must be rejected");
        assert!(matches!(err, ProxyError::InvalidParameter { field: "url", .. }));
    }

    #[test]
    fn parse_rejects_non_http_scheme() {
        let err = ImageSource::parse(Some("file:///etc/passwd")).expect_err("must be rejected");
        assert!(matches!(err, ProxyError::InvalidParameter { field: "url", .. }));
    }

    #[test]
    fn parse_accepts_https_url() {
        let source = ImageSource::parse(Some(" https://assets.example.com/a.jpg "))
            .expect("url should parse");
        assert_eq!(source.as_str(), "https://assets.example.com/a.jpg");
    }

    #[test]
    fn browser_profile_derives_origin_from_referer() {
        let profile =
            HeaderProfile::browser(DEFAULT_USER_AGENT, "https://suitmedia-backend.suitdev.com/");

        assert_eq!(profile.origin, "https://suitmedia-backend.suitdev.com");
        assert_eq!(profile.referer, "https://suitmedia-backend.suitdev.com/");
        let names: Vec<_> = profile.headers().iter().map(|(name, _)| *name).collect();
        assert_eq!(
            names,
            ["user-agent", "referer", "accept", "accept-language", "origin"]
        );
    }
}
