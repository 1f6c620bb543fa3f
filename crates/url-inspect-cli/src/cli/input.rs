//! Where the URL comes from: the positional argument or standard input.

use std::io::Read;

use super::error::CliError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputSource<'a> {
    Argument(&'a str),
    Stdin,
}

impl<'a> InputSource<'a> {
    /// A missing argument or `-` means stdin.
    pub fn from_arg(arg: Option<&'a str>) -> Self {
        match arg {
            Some(url) if url != "-" => InputSource::Argument(url),
            _ => InputSource::Stdin,
        }
    }
}

/// Reads the whole of `reader` and strips exactly one trailing line break.
///
/// An interactive terminal with nothing piped is a usage error, as is
/// input that is empty once the line break is gone.
pub fn read_url<R: Read>(mut reader: R, is_terminal: bool) -> Result<String, CliError> {
    if is_terminal {
        return Err(CliError::Usage(
            "URL must be provided as argument or via stdin.".to_string(),
        ));
    }

    let mut data = String::new();
    reader
        .read_to_string(&mut data)
        .map_err(|err| CliError::Usage(format!("failed to read stdin: {err}")))?;

    let url = trim_one_newline(&data);
    if url.is_empty() {
        return Err(CliError::Usage(
            "stdin is empty; no URL to parse.".to_string(),
        ));
    }

    tracing::debug!("read {} bytes from stdin", data.len());
    Ok(url.to_string())
}

/// Removes a single trailing `\n` or `\r\n`, nothing else.
pub fn trim_one_newline(data: &str) -> &str {
    data.strip_suffix("\r\n")
        .or_else(|| data.strip_suffix('\n'))
        .unwrap_or(data)
}
