//! Reasons an input string is not accepted as an absolute URL.

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationReason {
    #[error("URL is empty")]
    Empty,
    #[error("URL must not contain whitespace")]
    ContainsWhitespace,
    #[error("URL must have a non-empty scheme (missing scheme)")]
    EmptyScheme,
    #[error("URL must have a network location (host[:port])")]
    EmptyNetloc,
    #[error("URL must have a hostname (missing host)")]
    EmptyHostname,
    /// Port text present but not a decimal number in `0..=65535`.
    #[error("URL port must be an integer in 0..=65535")]
    InvalidPort,
}

/// Outcome of [`validate`](super::validate).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationVerdict {
    Accepted,
    Rejected(ValidationReason),
}

impl ValidationVerdict {
    pub fn is_accepted(&self) -> bool {
        matches!(self, ValidationVerdict::Accepted)
    }
}
