use std::path::PathBuf;

use clap::{Arg, ArgAction, ArgMatches, Command, crate_authors, crate_version};

use crate::constants::{
    DIRECTORY_HELP, DRY_RUN_HELP, LOCAL_LOGGING_HELP, LOG_FILE_HELP, OUTPUT_DIR_HELP,
    OUTPUT_FILE_HELP, VERBOSE_HELP,
};
use crate::errors::{Result, generic_error};
use crate::logging::LogLevel;
use crate::utils::{expand_path, find_project_folder};
use crate::workflow::{ConcatenationOptions, FlattenOptions};

/// Name of the concatenating binary
pub const CONCAT_COMMAND: &str = "fcat";

/// Name of the flat copy binary
pub const FLATTEN_COMMAND: &str = "fflat";

/// Adds the options shared by both tools
///
/// - `dry`: Run without writing any files
/// - `verbose`: Increase verbosity level
/// - `log_file`: Also log to a file
/// - `log_locally`: Keep the log file in the working directory
fn with_common_args(command: Command) -> Command {
    // define arg for dry run
    let arg_dry = Arg::new("dry")
        .short('n')
        .long("dry")
        .help(DRY_RUN_HELP)
        .action(ArgAction::SetTrue);

    // define arg for verbosity level
    let arg_verbose = Arg::new("verbose")
        .short('v')
        .long("verbose")
        .help(VERBOSE_HELP)
        .action(ArgAction::Count);

    // define arg for log file
    let log_file = Arg::new("log_file")
        .short('l')
        .long("log-file")
        .value_name("NAME")
        .help(LOG_FILE_HELP);

    // define arg for local logging
    let log_locally = Arg::new("log_locally")
        .short('L')
        .long("log-locally")
        .help(LOCAL_LOGGING_HELP)
        .requires("log_file")
        .action(ArgAction::SetTrue);

    command
        .author(crate_authors!())
        .version(crate_version!())
        .arg(arg_dry)
        .arg(log_file)
        .arg(log_locally)
        .arg(arg_verbose)
}

/// Builds the command line of the concatenating tool
///
/// Positional arguments: `directory` and `output_file`.
pub fn concat_command() -> Command {
    let arg_directory = Arg::new("directory").required(true).help(DIRECTORY_HELP);
    let arg_output = Arg::new("output_file")
        .required(true)
        .help(OUTPUT_FILE_HELP);

    with_common_args(
        Command::new(CONCAT_COMMAND)
            .about("Concatenate .java files in a directory")
            .arg(arg_directory)
            .arg(arg_output),
    )
}

/// Builds the command line of the flat copy tool
///
/// Positional arguments: `directory` and `output_dir`.
pub fn flatten_command() -> Command {
    let arg_directory = Arg::new("directory").required(true).help(DIRECTORY_HELP);
    let arg_output = Arg::new("output_dir").required(true).help(OUTPUT_DIR_HELP);

    with_common_args(
        Command::new(FLATTEN_COMMAND)
            .about("Copy .java files flat into a new output directory")
            .arg(arg_directory)
            .arg(arg_output),
    )
}

/// Gets the verbosity level from the number of -v/--verbose flags
pub fn get_verbosity(matches: &ArgMatches) -> LogLevel {
    let verbose_count = matches.get_count("verbose");
    LogLevel::from_occurrences(verbose_count)
}

/// Gets the log file requested on the command line, if any
///
/// Without `--log-locally` the name is resolved inside the per-user
/// configuration directory, which is created when missing.
///
/// # Errors
/// Returns an error if the configuration directory cannot be determined or created
pub fn get_log_file(matches: &ArgMatches) -> Result<Option<PathBuf>> {
    let Some(filename) = matches.get_one::<String>("log_file") else {
        return Ok(None);
    };
    if matches.get_flag("log_locally") {
        Ok(Some(expand_path(filename)))
    } else {
        let folder = find_project_folder()?;
        Ok(Some(folder.config_dir().join(filename)))
    }
}

/// Whether the dry-run flag was given
pub fn is_dry_run(matches: &ArgMatches) -> bool {
    matches.get_flag("dry")
}

fn get_path(matches: &ArgMatches, id: &str) -> Result<PathBuf> {
    matches
        .get_one::<String>(id)
        .map(|value| expand_path(value))
        .ok_or_else(|| generic_error(&format!("Missing argument: {id}")))
}

/// Reads the concatenation options from parsed arguments
pub fn concatenation_options(matches: &ArgMatches) -> Result<ConcatenationOptions> {
    let mut options = ConcatenationOptions::new(
        get_path(matches, "directory")?,
        get_path(matches, "output_file")?,
    );
    options.dry_run = is_dry_run(matches);
    Ok(options)
}

/// Reads the flat copy options from parsed arguments
pub fn flatten_options(matches: &ArgMatches) -> Result<FlattenOptions> {
    let mut options = FlattenOptions::new(
        get_path(matches, "directory")?,
        get_path(matches, "output_dir")?,
    );
    options.dry_run = is_dry_run(matches);
    Ok(options)
}
