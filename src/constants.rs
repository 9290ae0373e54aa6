//! Constants used throughout the application
//!
//! This module centralises all constants used in the application to make
//! them easier to manage and update.

/// Filename suffix both tools search for
pub const JAVA_EXTENSION: &str = ".java";

/// Number of `=` characters in a concatenation separator line
pub const SEPARATOR_WIDTH: usize = 65;

/// Character repeated to form a separator line
pub const SEPARATOR_CHAR: char = '=';

/// Label written before each path in a concatenation header
pub const FILENAME_LABEL: &str = "FileName: ";

/// Qualifier string used for application identification
pub const QUALIFIER: &str = "com";

/// Organisation name used for application identification
pub const ORGANIZATION: &str = "Ondřej Vágner";

/// Application name used for identification
///
/// Used to locate the per-user configuration directory where log files
/// are written unless `--log-locally` is given.
pub const APPLICATION: &str = "file_gather";

/// Help text for the search directory argument
pub const DIRECTORY_HELP: &str = "Directory path to search for .java files";

/// Help text for the concatenation output argument
pub const OUTPUT_FILE_HELP: &str = "Output file name for concatenated content";

/// Help text for the flat copy output argument
pub const OUTPUT_DIR_HELP: &str = "Output directory to copy .java files into (must not exist)";

/// Help text for the dry-run command-line option
pub const DRY_RUN_HELP: &str = "Run without writing any files";

/// Help text for the verbose command-line option
pub const VERBOSE_HELP: &str = "Increase verbosity level (can be used multiple times)";

/// Help text for the log file command-line option
pub const LOG_FILE_HELP: &str = "Also write the log to this file";

/// Help text for the local logging command-line option
pub const LOCAL_LOGGING_HELP: &str =
    "Resolve the log file against the working directory instead of the config directory";
