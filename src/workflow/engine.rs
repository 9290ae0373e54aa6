//! Workflow engine
//!
//! This module contains the engine that orchestrates the workflow steps.

use std::path::PathBuf;

use log::{debug, info, warn};

use crate::constants::JAVA_EXTENSION;
use crate::discovery::{collect_files, ensure_search_root};
use crate::errors::{Result, already_exists_error};
use crate::file_ops::{concatenate, copy_all, create_output_directory, plan_copies};

use super::context::WorkflowContext;

/// Options for concatenating files
#[derive(Debug, Clone)]
pub struct ConcatenationOptions {
    /// Directory to search
    pub directory: PathBuf,
    /// File the concatenated content is written to
    pub output_file: PathBuf,
    /// Filename suffix to search for
    pub extension: String,
    /// Whether to only report what would be written
    pub dry_run: bool,
}

impl ConcatenationOptions {
    /// Creates options for concatenating `.java` files
    pub fn new(directory: impl Into<PathBuf>, output_file: impl Into<PathBuf>) -> Self {
        ConcatenationOptions {
            directory: directory.into(),
            output_file: output_file.into(),
            extension: JAVA_EXTENSION.to_string(),
            dry_run: false,
        }
    }
}

/// Options for copying files flat into a new directory
#[derive(Debug, Clone)]
pub struct FlattenOptions {
    /// Directory to search
    pub directory: PathBuf,
    /// Directory to create and copy into
    pub output_dir: PathBuf,
    /// Filename suffix to search for
    pub extension: String,
    /// Whether to only report what would be copied
    pub dry_run: bool,
}

impl FlattenOptions {
    /// Creates options for copying `.java` files
    pub fn new(directory: impl Into<PathBuf>, output_dir: impl Into<PathBuf>) -> Self {
        FlattenOptions {
            directory: directory.into(),
            output_dir: output_dir.into(),
            extension: JAVA_EXTENSION.to_string(),
            dry_run: false,
        }
    }
}

/// Concatenates every matching file below the search directory
///
/// This function orchestrates the workflow steps:
/// 1. Check that the search directory exists
/// 2. Walk it and collect the matching files
/// 3. Write them, framed by headers, into the output file
///
/// When nothing matches, the output file is left untouched. An output file
/// that lies inside the search directory and carries the suffix is never
/// read back as a source, so repeated runs produce the same output.
///
/// # Errors
/// * Returns a directory not found error if the search directory is missing
/// * Returns the first read or write error; the output is left as far as it got
pub fn concatenate_files(options: ConcatenationOptions) -> Result<WorkflowContext> {
    let mut context = WorkflowContext::new(options.dry_run);

    let mut files = collect_files(&options.directory, &options.extension)?;
    if let Ok(output) = options.output_file.canonicalize() {
        files.retain(|file| {
            let is_output = file.path().canonicalize().is_ok_and(|path| path == output);
            if is_output {
                warn!("Skipping the output file itself: {}", file.path().display());
            }
            !is_output
        });
    }
    context.set_files_matched(files.len());

    if files.is_empty() {
        info!(
            "No {} files found in the specified directory.",
            options.extension
        );
        return Ok(context);
    }

    if options.dry_run {
        for file in &files {
            info!("Would concatenate: {}", file.path().display());
        }
        info!(
            "Would concatenate {} {} files into {}",
            files.len(),
            options.extension,
            options.output_file.display()
        );
        return Ok(context);
    }

    let result = concatenate(&files, &options.output_file)?;
    context.add_written(result.files_written, result.bytes_written);
    debug!("Wrote {} bytes", result.bytes_written);

    info!(
        "Concatenated {} {} files into {}",
        result.files_written,
        options.extension,
        options.output_file.display()
    );

    Ok(context)
}

/// Copies every matching file below the search directory into a new flat directory
///
/// This function orchestrates the workflow steps:
/// 1. Check that the search directory exists
/// 2. Create the output directory, which must not exist yet
/// 3. Walk the search directory and collect the matching files
/// 4. Copy them, renaming on name collisions
///
/// The search directory is checked before the output directory is created,
/// so a missing search directory leaves the filesystem unchanged.
///
/// # Errors
/// * Returns a directory not found error if the search directory is missing
/// * Returns an already exists error if the output directory is present
/// * Returns the first copy error; files already copied are kept
pub fn flatten_files(options: FlattenOptions) -> Result<WorkflowContext> {
    let mut context = WorkflowContext::new(options.dry_run);

    ensure_search_root(&options.directory)?;

    if options.dry_run {
        if options.output_dir.exists() {
            return Err(already_exists_error(options.output_dir));
        }
    } else {
        create_output_directory(&options.output_dir)?;
    }

    let files = collect_files(&options.directory, &options.extension)?;
    context.set_files_matched(files.len());

    if options.dry_run {
        let plan = plan_copies(&files, &options.output_dir)?;
        info!(
            "Would copy {} {} files from {} to {}",
            plan.len(),
            options.extension,
            options.directory.display(),
            options.output_dir.display()
        );
        context.set_copies(plan);
        return Ok(context);
    }

    let (copies, bytes) = copy_all(&files, &options.output_dir)?;
    context.add_written(copies.len(), bytes);

    info!(
        "Copied {} {} files from {} to {}",
        copies.len(),
        options.extension,
        options.directory.display(),
        options.output_dir.display()
    );
    context.set_copies(copies);

    Ok(context)
}
