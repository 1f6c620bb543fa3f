//! Generic decomposition of a URL string into its RFC 3986 parts.
//!
//! The split never fails and never rewrites anything: every component is
//! the exact substring found in the input. Validation lives in `validate`.

/// URL components exactly as they appear in the input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedUrl {
    pub scheme: String,
    /// Authority text between `//` and the path (`user:pass@host:port`).
    pub netloc: String,
    pub username: String,
    pub password: String,
    /// Host without IPv6 brackets, case preserved.
    pub hostname: String,
    /// Numeric port; `None` when absent or not a valid `u16`.
    pub port: Option<u16>,
    /// Raw text after the host's `:`; empty when no port was written.
    pub port_text: String,
    pub path: String,
    pub query: String,
    pub fragment: String,
}

impl ParsedUrl {
    /// Hostname lowercased for display and normalization.
    pub fn normalized_hostname(&self) -> String {
        self.hostname.to_lowercase()
    }

    /// True when the port text is empty or a decimal number in `0..=65535`.
    pub fn has_valid_port(&self) -> bool {
        self.port_text.is_empty() || self.port.is_some()
    }
}

/// Splits `raw` into scheme, authority, path, query and fragment.
pub fn split(raw: &str) -> ParsedUrl {
    let (scheme, rest) = split_scheme(raw);

    let (netloc, rest) = match rest.strip_prefix("//") {
        Some(after) => {
            let end = after
                .find(|c: char| matches!(c, '/' | '?' | '#'))
                .unwrap_or(after.len());
            after.split_at(end)
        }
        None => ("", rest),
    };

    let (rest, fragment) = rest.split_once('#').unwrap_or((rest, ""));
    let (path, query) = rest.split_once('?').unwrap_or((rest, ""));

    let authority = Authority::split(netloc);

    ParsedUrl {
        scheme: scheme.to_string(),
        netloc: netloc.to_string(),
        username: authority.username.to_string(),
        password: authority.password.to_string(),
        hostname: authority.host.to_string(),
        port: parse_port(authority.port),
        port_text: authority.port.to_string(),
        path: path.to_string(),
        query: query.to_string(),
        fragment: fragment.to_string(),
    }
}

/// Returns `(scheme, remainder)`; the scheme is empty when the prefix before
/// the first `:` is not a syntactically valid scheme.
fn split_scheme(raw: &str) -> (&str, &str) {
    let Some((candidate, rest)) = raw.split_once(':') else {
        return ("", raw);
    };

    let mut chars = candidate.chars();
    let starts_with_letter = chars.next().is_some_and(|c| c.is_ascii_alphabetic());
    let valid_tail = chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'));

    if starts_with_letter && valid_tail {
        (candidate, rest)
    } else {
        ("", raw)
    }
}

struct Authority<'a> {
    username: &'a str,
    password: &'a str,
    host: &'a str,
    port: &'a str,
}

impl<'a> Authority<'a> {
    fn split(netloc: &'a str) -> Self {
        let (userinfo, hostinfo) = match netloc.rsplit_once('@') {
            Some((userinfo, hostinfo)) => (Some(userinfo), hostinfo),
            None => (None, netloc),
        };

        let (username, password) = userinfo
            .map(|u| u.split_once(':').unwrap_or((u, "")))
            .unwrap_or(("", ""));

        let (host, port) = match hostinfo.strip_prefix('[') {
            // Unterminated IPv6 literal: no usable host.
            Some(bracketed) => match bracketed.split_once(']') {
                Some((host, after)) => (host, after.strip_prefix(':').unwrap_or("")),
                None => ("", ""),
            },
            None => hostinfo.split_once(':').unwrap_or((hostinfo, "")),
        };

        Self {
            username,
            password,
            host,
            port,
        }
    }
}

fn parse_port(text: &str) -> Option<u16> {
    if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    text.parse().ok()
}
