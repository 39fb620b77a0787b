use url::form_urlencoded;

/// Query-параметры запроса списка в исходном порядке.
///
/// Повторяющиеся ключи (`append[]=a&append[]=b`) и ключи со скобками
/// (`page[number]=1`) сохраняются как есть.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct ListingQuery {
    pairs: Vec<(String, String)>,
}

impl ListingQuery {
    pub(crate) fn from_raw(raw: Option<&str>) -> Self {
        let pairs = raw
            .map(|raw| {
                form_urlencoded::parse(raw.as_bytes())
                    .into_owned()
                    .collect::<Vec<_>>()
            })
            .unwrap_or_default();

        Self { pairs }
    }

    pub(crate) fn pairs(&self) -> &[(String, String)] {
        &self.pairs
    }
}
