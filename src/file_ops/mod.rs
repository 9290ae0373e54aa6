//! File operations module
//!
//! This module contains the two ways matched files are gathered: into one
//! concatenated file or flat into one directory.

mod concatenator;
mod copier;
mod naming;

pub use concatenator::{ConcatenationResult, concatenate, render_block, separator};
pub use copier::{CopyRecord, copy_all, copy_file, create_output_directory, plan_copies};
pub use naming::{numbered_name, resolve_destination, split_extension};
