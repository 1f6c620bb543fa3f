//! URL validation, normalization and component extraction.
//!
//! The pipeline is pure: raw string → [`parse_absolute`] → [`normalize`] and
//! [`extract_parameters`], bundled into a [`UrlView`] for rendering.
//!
//! Components (path, query, fragment, userinfo) are always kept exactly as
//! received. Only query parameters are percent/`+` decoded.

mod error;
mod normalize;
mod params;
mod split;
mod validate;

pub use error::{ValidationReason, ValidationVerdict};
pub use normalize::{default_port, effective_port, normalize};
pub use params::{extract_parameters, QueryParameter};
pub use split::{split, ParsedUrl};
pub use validate::{is_url_whitespace, parse_absolute, validate};

/// A validated URL together with everything the report shows about it.
#[derive(Debug, Clone)]
pub struct UrlView {
    /// Input exactly as provided by the user.
    pub raw: String,
    pub parsed: ParsedUrl,
    pub normalized: String,
    pub query_params: Vec<QueryParameter>,
}

impl UrlView {
    /// Validates `raw` and derives the normalized form and query parameters.
    ///
    /// # Examples
    ///
    /// - `"HTTPS://Example.COM:443/foo/"` → normalized `"https://example.com/foo"`
    /// - `"example.com"` → `Err(ValidationReason::EmptyScheme)`
    pub fn build(raw: &str) -> Result<Self, ValidationReason> {
        let parsed = parse_absolute(raw)?;
        let normalized = normalize(&parsed);
        let query_params = extract_parameters(&parsed.query);

        tracing::debug!(
            scheme = %parsed.scheme,
            params = query_params.len(),
            "url accepted"
        );

        Ok(Self {
            raw: raw.to_string(),
            parsed,
            normalized,
            query_params,
        })
    }

    /// Lowercased scheme as shown in the components list.
    pub fn scheme(&self) -> String {
        self.parsed.scheme.to_lowercase()
    }

    /// Port shown in the components list; default ports are not displayed.
    pub fn display_port(&self) -> Option<u16> {
        effective_port(&self.scheme(), self.parsed.port)
    }
}
