//! Acceptance rules for absolute URLs (strict, heuristic, CLI-oriented).

use super::error::{ValidationReason, ValidationVerdict};
use super::split::{split, ParsedUrl};

/// Checks `raw` against the absolute-URL rules without keeping the parse.
pub fn validate(raw: &str) -> ValidationVerdict {
    match parse_absolute(raw) {
        Ok(_) => ValidationVerdict::Accepted,
        Err(reason) => ValidationVerdict::Rejected(reason),
    }
}

/// Splits and validates `raw`, returning the components only when accepted.
///
/// Rules, in order: non-empty input, no whitespace anywhere, non-empty
/// scheme, non-empty netloc, non-empty hostname, numeric port (if written).
pub fn parse_absolute(raw: &str) -> Result<ParsedUrl, ValidationReason> {
    if raw.is_empty() {
        return Err(ValidationReason::Empty);
    }
    if raw.chars().any(is_url_whitespace) {
        return Err(ValidationReason::ContainsWhitespace);
    }

    let parsed = split(raw);

    if parsed.scheme.is_empty() {
        return Err(ValidationReason::EmptyScheme);
    }
    if parsed.netloc.is_empty() {
        return Err(ValidationReason::EmptyNetloc);
    }
    if parsed.hostname.is_empty() {
        return Err(ValidationReason::EmptyHostname);
    }
    if !parsed.has_valid_port() {
        return Err(ValidationReason::InvalidPort);
    }

    Ok(parsed)
}

/// Unicode whitespace plus the ASCII separators U+001C..=U+001F, which
/// `char::is_whitespace` leaves out.
pub fn is_url_whitespace(c: char) -> bool {
    c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c)
}
