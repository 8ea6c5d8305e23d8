//! Request parameter access with portal semantics: values are trimmed, missing values
//! read as empty strings, and the literal `null` counts as "no value".

use fxhash::FxHashMap;
use url::form_urlencoded;

/// Returns `true` for missing-equivalent values: empty, blank, or the literal `null`.
#[must_use]
pub fn is_null(value: &str) -> bool {
    let trimmed = value.trim();
    trimmed.is_empty() || trimmed.eq_ignore_ascii_case("null")
}

#[must_use]
pub fn is_not_null(value: &str) -> bool {
    !is_null(value)
}

/// Parses a portal boolean (`true`, `t`, `y`, `yes`, `on`, `1` and their negatives).
#[must_use]
pub fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "t" | "y" | "yes" | "on" | "1" => Some(true),
        "false" | "f" | "n" | "no" | "off" | "0" => Some(false),
        _ => None,
    }
}

/// Read-only view over the parameters of one inbound request.
///
/// Names are case-sensitive. When a name repeats, the first value wins.
#[derive(Debug, Clone, Default)]
pub struct RequestParams {
    values: FxHashMap<String, String>,
}

impl RequestParams {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses an `application/x-www-form-urlencoded` query string.
    #[must_use]
    pub fn from_query(query: &str) -> Self {
        let query = query.strip_prefix('?').unwrap_or(query);
        form_urlencoded::parse(query.as_bytes())
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect()
    }

    /// Adds a parameter, keeping an existing value for the same name.
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.values.entry(name.into()).or_insert_with(|| value.into());
        self
    }

    /// Raw value as sent by the client.
    #[must_use]
    pub fn raw(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    /// Trimmed value, or an empty string when the parameter is missing.
    #[must_use]
    pub fn get_string(&self, name: &str) -> String {
        self.raw(name).map(|v| v.trim().replace("\r\n", "\n")).unwrap_or_default()
    }

    /// Trimmed value, or `None` when the parameter is missing or null-equivalent.
    #[must_use]
    pub fn get_non_null(&self, name: &str) -> Option<String> {
        let value = self.get_string(name);
        is_not_null(&value).then_some(value)
    }

    #[must_use]
    pub fn get_bool(&self, name: &str, default: bool) -> bool {
        self.raw(name).and_then(parse_bool).unwrap_or(default)
    }

    #[must_use]
    pub fn get_int(&self, name: &str, default: i64) -> i64 {
        self.raw(name).and_then(|v| v.trim().parse().ok()).unwrap_or(default)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for RequestParams
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        iter.into_iter().fold(Self::new(), |params, (k, v)| params.with(k, v))
    }
}
