use std::process::ExitCode;

use anyhow::Result;
use log::error;

use file_gather::prelude::*;

fn run() -> Result<()> {
    let matches = flatten_command().get_matches();

    init_logger(get_verbosity(&matches), get_log_file(&matches)?.as_deref())?;

    let options = flatten_options(&matches)?;
    flatten_files(options)?;

    Ok(())
}

fn main() -> ExitCode {
    human_panic::setup_panic!();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            if log::log_enabled!(log::Level::Error) {
                error!("Error: {e:#}");
            } else {
                eprintln!("Error: {e:#}");
            }
            ExitCode::FAILURE
        }
    }
}
