//! Destination naming functionality
//!
//! This module decides where a file lands in a flat output directory,
//! renaming it to `stem (n).ext` when the plain name is already taken.

use std::path::{Path, PathBuf};

use log::debug;

/// Splits a filename into its stem and extension
///
/// The extension starts at the last `.` and includes it. Leading dots do not
/// start an extension, so `.hidden` has none.
///
/// # Examples
/// ```
/// use file_gather::file_ops::split_extension;
///
/// assert_eq!(split_extension("Main.java"), ("Main", ".java"));
/// assert_eq!(split_extension("archive.tar.gz"), ("archive.tar", ".gz"));
/// assert_eq!(split_extension("Makefile"), ("Makefile", ""));
/// assert_eq!(split_extension(".hidden"), (".hidden", ""));
/// ```
pub fn split_extension(file_name: &str) -> (&str, &str) {
    match file_name.rfind('.') {
        Some(index) if !file_name[..index].chars().all(|c| c == '.') => {
            file_name.split_at(index)
        }
        _ => (file_name, ""),
    }
}

/// Builds the `n`-th alternative for a taken filename
pub fn numbered_name(stem: &str, counter: usize, extension: &str) -> String {
    format!("{stem} ({counter}){extension}")
}

/// Resolves the destination for `file_name` inside `output_dir`
///
/// The plain name is used when `is_taken` reports it free. Otherwise
/// `stem (1).ext`, `stem (2).ext`, ... are tried in order and the first free
/// candidate wins.
///
/// # Arguments
/// * `output_dir` - The flat directory files are collected into
/// * `file_name` - The base filename of the source file
/// * `is_taken` - Reports whether a candidate path is already in use
///
/// # Returns
/// * `PathBuf` - A destination path that `is_taken` reported free
pub fn resolve_destination<F>(output_dir: &Path, file_name: &str, mut is_taken: F) -> PathBuf
where
    F: FnMut(&Path) -> bool,
{
    let candidate = output_dir.join(file_name);
    if !is_taken(&candidate) {
        return candidate;
    }

    let (stem, extension) = split_extension(file_name);
    let mut counter = 1;
    loop {
        let candidate = output_dir.join(numbered_name(stem, counter, extension));
        if !is_taken(&candidate) {
            debug!(
                "Name collision for {file_name}, using {}",
                candidate.display()
            );
            return candidate;
        }
        counter += 1;
    }
}
