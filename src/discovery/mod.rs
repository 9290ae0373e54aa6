//! File discovery module
//!
//! This module contains components for walking a directory tree and
//! finding the files whose names end with a given suffix.

mod matcher;
mod scanner;

pub use matcher::has_suffix;
pub use scanner::{FileMatch, FileMatches, collect_files, ensure_search_root, find_files};
