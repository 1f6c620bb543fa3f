//! CLI error type and its exit-code mapping.

use std::io;
use thiserror::Error;
use url_inspect_core::url_model::ValidationReason;

/// Exit code for usage errors (no input, bad arguments, I/O trouble).
pub const EXIT_USAGE: u8 = 1;
/// Exit code for input that is not a valid absolute URL.
pub const EXIT_NOT_URL: u8 = 2;

#[derive(Debug, Error)]
pub enum CliError {
    /// Argument parsing failed; the message is clap's rendered usage text.
    #[error("{0}")]
    Args(String),

    #[error("ERROR: {0}")]
    Usage(String),

    #[error("ERROR: input is not recognized as a valid absolute URL: '{preview}' ({reason})")]
    Validation {
        preview: String,
        reason: ValidationReason,
    },

    #[error("ERROR: failed to write output: {0}")]
    Output(#[source] io::Error),
}

impl CliError {
    pub fn exit_code(&self) -> u8 {
        match self {
            CliError::Validation { .. } => EXIT_NOT_URL,
            CliError::Args(_) | CliError::Usage(_) | CliError::Output(_) => EXIT_USAGE,
        }
    }
}

/// Shortened URL for error messages: at most `max_len` characters, then `...`.
pub fn preview_for_error(url: &str, max_len: usize) -> String {
    match url.char_indices().nth(max_len) {
        Some((cut, _)) => format!("{}...", &url[..cut]),
        None => url.to_string(),
    }
}
