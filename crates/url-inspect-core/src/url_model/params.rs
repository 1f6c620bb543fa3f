//! Query parameter extraction.

use url::form_urlencoded;

/// One `key=value` pair from a query string, in appearance order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryParameter {
    pub key: String,
    pub value: String,
}

impl QueryParameter {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// Splits `query` on `&` and each segment on its first `=`.
///
/// Keys and values are form-decoded (`+` and `%XX`); a segment without `=`
/// yields an empty value. Duplicate keys stay separate entries and empty
/// segments (`a=1&&b=2`) are skipped.
pub fn extract_parameters(query: &str) -> Vec<QueryParameter> {
    form_urlencoded::parse(query.as_bytes())
        .map(|(key, value)| QueryParameter::new(key, value))
        .collect()
}
