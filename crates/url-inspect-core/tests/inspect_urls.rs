//! End-to-end checks of the URL pipeline: validate, normalize, extract, render.

use url_inspect_core::report::{render, Palette};
use url_inspect_core::url_model::{
    normalize, parse_absolute, validate, QueryParameter, UrlView, ValidationReason,
    ValidationVerdict,
};

fn normalized(raw: &str) -> String {
    UrlView::build(raw).expect("valid url").normalized
}

#[test]
fn any_whitespace_is_rejected() {
    for ws in [
        ' ', '\t', '\n', '\r', '\u{000b}', '\u{000c}', '\u{001c}', '\u{001d}', '\u{001e}',
        '\u{001f}', '\u{2003}',
    ] {
        let raw = format!("https://example.com/a{ws}b");
        assert_eq!(
            validate(&raw),
            ValidationVerdict::Rejected(ValidationReason::ContainsWhitespace),
            "{raw:?}"
        );
    }
}

#[test]
fn default_ports_are_omitted_other_ports_kept() {
    assert_eq!(normalized("http://example.com:80/x"), "http://example.com/x");
    assert_eq!(normalized("https://example.com:443/x"), "https://example.com/x");
    assert_eq!(normalized("http://example.com:8080/x"), "http://example.com:8080/x");
    assert_eq!(normalized("https://example.com:8443/x"), "https://example.com:8443/x");
    assert_eq!(normalized("http://example.com:443/x"), "http://example.com:443/x");
}

#[test]
fn normalized_form_is_a_fixed_point() {
    for raw in [
        "HTTPS://Example.COM:443/foo/",
        "http://EXAMPLE.org",
        "http://example.org/",
        "https://example.com/search?q=uuid&lang=en&debug=1",
        "https://a:b@Host:8080?x#y",
        "http://[::1]/v6/",
    ] {
        let once = normalized(raw);
        let twice = normalize(&parse_absolute(&once).expect("normalized url stays valid"));
        assert_eq!(twice, once, "{raw}");
    }
}

#[test]
fn origin_only_urls_have_no_trailing_slash() {
    assert_eq!(normalized("https://Example.com"), "https://example.com");
    assert_eq!(normalized("https://u:p@example.com:9000"), "https://u:p@example.com:9000");
}

#[test]
fn root_path_alone_keeps_its_slash() {
    assert_eq!(normalized("https://example.com/"), "https://example.com/");
    assert_eq!(normalized("http://example.com:80/"), "http://example.com/");
}

#[test]
fn reference_example() {
    assert_eq!(normalized("HTTPS://Example.COM:443/foo/"), "https://example.com/foo");
}

#[test]
fn parameters_in_appearance_order() {
    let view = UrlView::build("https://example.com/search?q=uuid&lang=en&debug=1").unwrap();
    assert_eq!(
        view.query_params,
        vec![
            QueryParameter::new("q", "uuid"),
            QueryParameter::new("lang", "en"),
            QueryParameter::new("debug", "1"),
        ]
    );
}

#[test]
fn bare_host_is_missing_scheme() {
    let err = UrlView::build("example.com").unwrap_err();
    assert_eq!(err, ValidationReason::EmptyScheme);
    assert!(err.to_string().contains("missing scheme"));
}

#[test]
fn flag_parameter_has_empty_value() {
    let view = UrlView::build("https://example.com/?flag").unwrap();
    assert_eq!(view.query_params, vec![QueryParameter::new("flag", "")]);
}

#[test]
fn rendered_report_for_reference_example() {
    let view = UrlView::build("https://example.com/search?q=uuid&lang=en&debug=1").unwrap();
    let expected = "\
Normalized: https://example.com/search?q=uuid&lang=en&debug=1

Components:
  scheme: https
  hostname: example.com
  path: /search
  query: q=uuid&lang=en&debug=1
  parameters:
    - q = uuid
    - lang = en
    - debug = 1

";
    assert_eq!(render(&view, &Palette::plain()), expected);
}

#[test]
fn default_port_is_not_displayed() {
    let view = UrlView::build("HTTPS://Example.COM:443/foo/").unwrap();
    let report = render(&view, &Palette::plain());
    assert!(!report.contains("port:"));
    assert!(report.contains("  path: /foo/\n"));
}
