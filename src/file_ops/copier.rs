//! Flat copy functionality
//!
//! This module copies matched files into one output directory, keeping
//! file contents, permissions and timestamps, and never overwriting a file
//! that is already there.

use std::collections::HashSet;
use std::fs::{create_dir_all, metadata, set_permissions};
use std::path::{Path, PathBuf};

use colored::Colorize;
use filetime::{FileTime, set_file_times};
use fs_extra::file::{CopyOptions, copy};
use log::{debug, info};

use crate::discovery::FileMatch;
use crate::errors::{Result, already_exists_error, file_operation_error};
use crate::file_ops::naming::resolve_destination;
use crate::logging::format_message;

/// A source file and the place it was (or would be) copied to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CopyRecord {
    /// The source path as found during traversal
    pub source: PathBuf,
    /// The destination path inside the output directory
    pub destination: PathBuf,
}

/// Creates the output directory, refusing to reuse an existing path
///
/// Missing parent directories are created too. The existence check and the
/// creation are two separate steps, so a path created in between by another
/// process is not detected.
///
/// # Errors
/// * Returns an already exists error if anything is present at `path`; nothing is touched then
/// * Returns an error if the directory cannot be created
pub fn create_output_directory(path: &Path) -> Result<()> {
    if path.exists() {
        return Err(already_exists_error(path.to_path_buf()));
    }

    create_dir_all(path)
        .map_err(|e| file_operation_error(e, path.to_path_buf(), "create directory"))?;
    debug!("Created output directory: {}", path.display());

    Ok(())
}

/// Copies one file, keeping its permissions and access/modification times
///
/// # Returns
/// * `Result<u64>` - The number of bytes copied
///
/// # Errors
/// Returns an error if the source cannot be read, the destination already
/// exists or cannot be written, or the metadata cannot be applied
pub fn copy_file(source: &Path, destination: &Path) -> Result<u64> {
    let options = CopyOptions::new();
    let bytes = copy(source, destination, &options).map_err(|e| {
        file_operation_error(std::io::Error::other(e), source.to_path_buf(), "copy")
    })?;

    let source_metadata = metadata(source)
        .map_err(|e| file_operation_error(e, source.to_path_buf(), "read metadata of"))?;
    set_permissions(destination, source_metadata.permissions()).map_err(|e| {
        file_operation_error(e, destination.to_path_buf(), "set permissions on")
    })?;
    set_file_times(
        destination,
        FileTime::from_last_access_time(&source_metadata),
        FileTime::from_last_modification_time(&source_metadata),
    )
    .map_err(|e| file_operation_error(e, destination.to_path_buf(), "set timestamps on"))?;

    Ok(bytes)
}

fn report(verb: &str, record: &CopyRecord) {
    let source = record.source.display().to_string();
    let destination = record.destination.display().to_string();
    let message = format!("{verb}: {source} to {destination}");
    let colored_message = format!(
        "{verb}: {} to {}",
        source.as_str().bold(),
        destination.as_str().bold().green()
    );
    info!("{}", format_message(&message, &colored_message));
}

/// Copies every match into `output_dir`, in order
///
/// The first file with a given name keeps it; later files with the same name
/// become `stem (1).ext`, `stem (2).ext`, ... Each copy is reported as
/// `Copied: <source> to <destination>`.
///
/// # Arguments
/// * `matches` - The files to copy, in traversal order
/// * `output_dir` - The existing flat output directory
///
/// # Returns
/// * `Result<(Vec<CopyRecord>, u64)>` - Where each file went and the total bytes copied
///
/// # Errors
/// Returns the first error encountered; files already copied stay in place
pub fn copy_all(matches: &[FileMatch], output_dir: &Path) -> Result<(Vec<CopyRecord>, u64)> {
    let mut records = Vec::with_capacity(matches.len());
    let mut total_bytes = 0;

    for file_match in matches {
        let file_name = file_match.file_name()?;
        let destination = resolve_destination(output_dir, file_name, |p| p.exists());

        total_bytes += copy_file(file_match.path(), &destination)?;

        let record = CopyRecord {
            source: file_match.path().to_path_buf(),
            destination,
        };
        report("Copied", &record);
        records.push(record);
    }

    Ok((records, total_bytes))
}

/// Key under which a planned destination is claimed
///
/// Windows and macOS file systems are case-insensitive by default, so there
/// `A.java` and `a.java` claim the same name.
fn claim_key(path: &Path) -> PathBuf {
    if cfg!(any(windows, target_os = "macos")) {
        PathBuf::from(path.to_string_lossy().to_lowercase())
    } else {
        path.to_path_buf()
    }
}

/// Works out where every match would be copied without touching the disk
///
/// Names are resolved against the destinations already planned as well as
/// anything present on disk, so the plan matches what [`copy_all`] would do
/// on a fresh output directory. Planned names are compared the way the
/// platform's default file system compares them; a case-sensitive volume
/// mounted on Windows or macOS may still see different names.
pub fn plan_copies(matches: &[FileMatch], output_dir: &Path) -> Result<Vec<CopyRecord>> {
    let mut claimed: HashSet<PathBuf> = HashSet::new();
    let mut records = Vec::with_capacity(matches.len());

    for file_match in matches {
        let file_name = file_match.file_name()?;
        let destination = resolve_destination(output_dir, file_name, |p| {
            claimed.contains(&claim_key(p)) || p.exists()
        });
        claimed.insert(claim_key(&destination));

        let record = CopyRecord {
            source: file_match.path().to_path_buf(),
            destination,
        };
        report("Would copy", &record);
        records.push(record);
    }

    Ok(records)
}
