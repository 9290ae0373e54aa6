//! Gathers the files with a given suffix from a directory tree, either into
//! one concatenated file or flat into one new directory.

pub mod cli;
pub mod constants;
pub mod discovery;
pub mod errors;
pub mod file_ops;
pub mod logging;
pub mod utils;
pub mod workflow;

pub mod prelude {
    pub use crate::cli::{
        concat_command, concatenation_options, flatten_command, flatten_options, get_log_file,
        get_verbosity,
    };
    pub use crate::errors::{
        already_exists_error, directory_not_found_error, file_operation_error, generic_error,
        invalid_filename_error, path_operation_error,
    };
    pub use crate::errors::{Error, Result};
    pub use crate::logging::{LogLevel, format_message, init_logger};
    pub use crate::workflow::{
        ConcatenationOptions, FlattenOptions, WorkflowContext, concatenate_files, flatten_files,
    };
}
