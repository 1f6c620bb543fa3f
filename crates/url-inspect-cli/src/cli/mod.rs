//! CLI for the `url` inspector.

mod commands;
mod error;
mod input;

use clap::error::ErrorKind;
use clap::Parser;
use std::io::{self, IsTerminal, Write};
use url_inspect_core::config;

use commands::run_inspect;
pub use error::CliError;
use input::InputSource;

/// Print out the parts of an absolute URL in a structured way.
#[derive(Debug, Parser)]
#[command(name = "url", version)]
#[command(
    about = "Print out the parts of an absolute URL in a structured way. \
             If URL is omitted or set to '-', it will be read from stdin.",
    long_about = None
)]
pub struct Cli {
    /// The URL to parse. Use '-' or omit to read from stdin.
    pub url: Option<String>,

    /// Disable ANSI colors in output.
    #[arg(long)]
    pub no_color: bool,
}

/// Parse arguments, resolve the input URL and print its report.
pub fn run_from_args() -> Result<(), CliError> {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            // Help/version go to stdout; nothing useful to do if that fails.
            let _ = err.print();
            return Ok(());
        }
        Err(err) => return Err(CliError::Args(err.to_string().trim_end().to_string())),
    };

    let cfg = config::load();
    tracing::debug!("loaded config: {:?}", cfg);

    let raw = match InputSource::from_arg(cli.url.as_deref()) {
        InputSource::Argument(url) => url.to_string(),
        InputSource::Stdin => {
            let stdin = io::stdin();
            let is_terminal = stdin.is_terminal();
            input::read_url(stdin.lock(), is_terminal)?
        }
    };

    let color = cfg.color.enabled(cli.no_color, io::stdout().is_terminal());
    let report = run_inspect(&raw, color, cfg.error_preview_len)?;
    write_stdout(&report)
}

fn write_stdout(report: &str) -> Result<(), CliError> {
    let mut out = io::stdout().lock();
    match out.write_all(report.as_bytes()).and_then(|()| out.flush()) {
        // Downstream closed early (`url ... | head -1`); not an error for us.
        Err(err) if err.kind() == io::ErrorKind::BrokenPipe => Ok(()),
        Err(err) => Err(CliError::Output(err)),
        Ok(()) => Ok(()),
    }
}

#[cfg(test)]
mod tests;
