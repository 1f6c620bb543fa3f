//! Human-readable rendering of a [`UrlView`].
//!
//! ```text
//! Normalized: https://example.com/search?q=uuid
//!
//! Components:
//!   scheme: https
//!   hostname: example.com
//!   path: /search
//!   query: q=uuid
//!   parameters:
//!     - q = uuid
//! ```

use std::fmt::Write;

use crate::url_model::UrlView;

/// ANSI escape sequences; every field is empty when color is disabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub reset: &'static str,
    pub bold: &'static str,
    pub cyan: &'static str,
    pub magenta: &'static str,
}

impl Palette {
    pub fn new(enabled: bool) -> Self {
        if enabled {
            Self::ansi()
        } else {
            Self::plain()
        }
    }

    pub fn ansi() -> Self {
        Self {
            reset: "\x1b[0m",
            bold: "\x1b[1m",
            cyan: "\x1b[36m",
            magenta: "\x1b[35m",
        }
    }

    pub fn plain() -> Self {
        Self {
            reset: "",
            bold: "",
            cyan: "",
            magenta: "",
        }
    }
}

/// Renders the full report: normalized line, components, parameters.
pub fn render(view: &UrlView, palette: &Palette) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = write_report(&mut out, view, palette);
    out
}

fn write_report(out: &mut String, view: &UrlView, p: &Palette) -> std::fmt::Result {
    write_kv(out, p, 0, "Normalized", &view.normalized)?;
    writeln!(out)?;

    writeln!(out, "{}Components:{}", p.bold, p.reset)?;
    format_components(out, view, p)?;
    writeln!(out)
}

/// Component lines; empty components are omitted, `scheme` is always shown.
pub fn format_components(out: &mut String, view: &UrlView, p: &Palette) -> std::fmt::Result {
    let parsed = &view.parsed;

    write_kv(out, p, 2, "scheme", &view.scheme())?;
    write_opt(out, p, "username", &parsed.username)?;
    write_opt(out, p, "password", &parsed.password)?;
    write_opt(out, p, "hostname", &parsed.normalized_hostname())?;
    if let Some(port) = view.display_port() {
        write_kv(out, p, 2, "port", &port.to_string())?;
    }
    write_opt(out, p, "path", &parsed.path)?;
    write_opt(out, p, "fragment", &parsed.fragment)?;

    if parsed.query.is_empty() {
        return Ok(());
    }
    write_kv(out, p, 2, "query", &parsed.query)?;
    if !view.query_params.is_empty() {
        writeln!(out, "  {}parameters:{}", p.magenta, p.reset)?;
        for param in &view.query_params {
            writeln!(out, "    - {}{}{} = {}", p.cyan, param.key, p.reset, param.value)?;
        }
    }
    Ok(())
}

fn write_kv(out: &mut String, p: &Palette, indent: usize, key: &str, value: &str) -> std::fmt::Result {
    writeln!(out, "{:indent$}{}{key}:{} {value}", "", p.cyan, p.reset)
}

fn write_opt(out: &mut String, p: &Palette, key: &str, value: &str) -> std::fmt::Result {
    if value.is_empty() {
        return Ok(());
    }
    write_kv(out, p, 2, key, value)
}
