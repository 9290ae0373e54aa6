//! Workflow context
//!
//! This module defines the state collected while a workflow runs.

use crate::file_ops::CopyRecord;

/// Context for the workflow
///
/// This struct contains the state that is returned to the caller once a
/// workflow has finished.
#[derive(Debug, Clone, Default)]
pub struct WorkflowContext {
    /// Whether file operations were only simulated
    pub dry_run: bool,
    /// Statistics about the processing
    pub stats: WorkflowStats,
    /// Where each file was copied (or would be, in dry-run mode)
    pub copies: Vec<CopyRecord>,
}

/// Statistics about the workflow
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WorkflowStats {
    /// Number of files matching the suffix
    pub files_matched: usize,
    /// Number of files concatenated or copied
    pub files_written: usize,
    /// Number of bytes written to the output
    pub bytes_written: u64,
}

impl WorkflowContext {
    /// Creates a new workflow context
    pub fn new(dry_run: bool) -> Self {
        WorkflowContext {
            dry_run,
            ..Default::default()
        }
    }

    /// Records the number of files found during traversal
    pub fn set_files_matched(&mut self, count: usize) {
        self.stats.files_matched = count;
    }

    /// Records files and bytes written to the output
    pub fn add_written(&mut self, files: usize, bytes: u64) {
        self.stats.files_written += files;
        self.stats.bytes_written += bytes;
    }

    /// Stores the copy records produced by a flat copy
    pub fn set_copies(&mut self, copies: Vec<CopyRecord>) {
        self.copies = copies;
    }
}
