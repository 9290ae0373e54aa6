//! Filename matching functionality
//!
//! This module contains the suffix filter applied to every entry found
//! during traversal.

use std::path::Path;

/// Checks whether the file name of `path` ends with `suffix`
///
/// The comparison is case-sensitive and made on the raw file name, so names
/// that are not valid Unicode can still match. A path without a file name
/// component (such as `..`) never matches.
pub fn has_suffix(path: &Path, suffix: &str) -> bool {
    path.file_name()
        .is_some_and(|name| name.as_encoded_bytes().ends_with(suffix.as_bytes()))
}
