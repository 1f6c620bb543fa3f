//! Canonical compact form of an accepted URL.
//!
//! - Scheme and hostname are lowercased.
//! - Default ports (80 for http, 443 for https) are stripped.
//! - Userinfo, query and fragment are kept verbatim.
//! - Origin-only URLs render without a trailing slash.
//! - Otherwise an empty path becomes `/`, and one trailing `/` is dropped
//!   from any path other than the root.

use super::split::ParsedUrl;

/// Default port for `scheme` (lowercase), if it has one worth stripping.
pub fn default_port(scheme: &str) -> Option<u16> {
    match scheme {
        "http" => Some(80),
        "https" => Some(443),
        _ => None,
    }
}

/// Port that survives normalization: `None` when absent or the scheme default.
pub fn effective_port(scheme: &str, port: Option<u16>) -> Option<u16> {
    port.filter(|p| default_port(scheme) != Some(*p))
}

/// Normalized string form of `parsed`, which must already be validated.
pub fn normalize(parsed: &ParsedUrl) -> String {
    let scheme = parsed.scheme.to_lowercase();
    let authority = build_authority(
        &parsed.username,
        &parsed.password,
        &parsed.normalized_hostname(),
        effective_port(&scheme, parsed.port),
    );

    if parsed.path.is_empty() && parsed.query.is_empty() && parsed.fragment.is_empty() {
        return format!("{scheme}://{authority}");
    }

    let mut out = format!("{scheme}://{authority}{}", compact_path(&parsed.path));
    if !parsed.query.is_empty() {
        out.push('?');
        out.push_str(&parsed.query);
    }
    if !parsed.fragment.is_empty() {
        out.push('#');
        out.push_str(&parsed.fragment);
    }
    out
}

/// `[username[:password]@]host[:port]`; IPv6 hosts get their brackets back.
fn build_authority(username: &str, password: &str, host: &str, port: Option<u16>) -> String {
    let mut out = String::with_capacity(username.len() + password.len() + host.len() + 8);

    if !username.is_empty() {
        out.push_str(username);
        if !password.is_empty() {
            out.push(':');
            out.push_str(password);
        }
        out.push('@');
    }

    if host.contains(':') {
        out.push('[');
        out.push_str(host);
        out.push(']');
    } else {
        out.push_str(host);
    }

    if let Some(port) = port {
        out.push(':');
        out.push_str(&port.to_string());
    }
    out
}

fn compact_path(path: &str) -> &str {
    match path {
        "" => "/",
        "/" => "/",
        _ => path.strip_suffix('/').unwrap_or(path),
    }
}
