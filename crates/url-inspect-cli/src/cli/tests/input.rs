//! Stdin handling.

use std::io::Cursor;

use crate::cli::error::{CliError, EXIT_USAGE};
use crate::cli::input::{read_url, trim_one_newline};

#[test]
fn trims_exactly_one_newline() {
    assert_eq!(trim_one_newline("https://x\n"), "https://x");
    assert_eq!(trim_one_newline("https://x\r\n"), "https://x");
    assert_eq!(trim_one_newline("https://x\n\n"), "https://x\n");
    assert_eq!(trim_one_newline("https://x"), "https://x");
    assert_eq!(trim_one_newline(" https://x \n"), " https://x ");
}

#[test]
fn reads_piped_url() {
    let url = read_url(Cursor::new("https://example.com/path?a=1&b=2#frag\n"), false).unwrap();
    assert_eq!(url, "https://example.com/path?a=1&b=2#frag");
}

#[test]
fn empty_stdin_is_usage_error() {
    for data in ["", "\n", "\r\n"] {
        let err = read_url(Cursor::new(data), false).unwrap_err();
        assert!(matches!(err, CliError::Usage(_)), "{data:?}");
        assert_eq!(err.exit_code(), EXIT_USAGE);
        assert_eq!(err.to_string(), "ERROR: stdin is empty; no URL to parse.");
    }
}

#[test]
fn terminal_stdin_is_usage_error() {
    let err = read_url(Cursor::new("https://example.com"), true).unwrap_err();
    assert_eq!(err.exit_code(), EXIT_USAGE);
    assert!(err.to_string().contains("provided as argument or via stdin"));
}

#[test]
fn non_utf8_stdin_is_usage_error() {
    let err = read_url(Cursor::new(vec![0xff, 0xfe, b'\n']), false).unwrap_err();
    assert_eq!(err.exit_code(), EXIT_USAGE);
}
