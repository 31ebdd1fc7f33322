//! veil: load veil map and fixture documents

use std::process::ExitCode;

use veil::LoadError;

fn main() -> ExitCode {
    match veil::cli::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {:#}", err);
            let code = err.downcast_ref::<LoadError>().map_or(1, LoadError::exit_code);
            ExitCode::from(code)
        }
    }
}
