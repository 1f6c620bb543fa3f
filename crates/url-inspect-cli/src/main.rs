use std::process::ExitCode;

use url_inspect_core::logging;

mod cli;

fn main() -> ExitCode {
    // Initialize logging as early as possible; the stderr fallback stays quiet.
    if logging::init_logging().is_err() {
        logging::init_logging_stderr();
    }

    match cli::run_from_args() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::from(err.exit_code())
        }
    }
}
