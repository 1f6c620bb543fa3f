//! `url [URL]` – validate, normalize and describe a single URL.

use url_inspect_core::report::{self, Palette};
use url_inspect_core::url_model::UrlView;

use crate::cli::error::{preview_for_error, CliError};

/// Builds the printable report for `raw`, or the validation error to show.
pub fn run_inspect(raw: &str, color: bool, preview_len: usize) -> Result<String, CliError> {
    let view = UrlView::build(raw).map_err(|reason| {
        tracing::info!(%reason, "input rejected");
        CliError::Validation {
            preview: preview_for_error(raw, preview_len),
            reason,
        }
    })?;

    tracing::info!(
        scheme = %view.scheme(),
        host = %view.parsed.normalized_hostname(),
        params = view.query_params.len(),
        "url inspected"
    );

    Ok(report::render(&view, &Palette::new(color)))
}
