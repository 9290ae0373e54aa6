//! Workflow module
//!
//! This module contains the two workflows exposed by the command-line tools.

mod context;
mod engine;

pub use context::{WorkflowContext, WorkflowStats};
pub use engine::{ConcatenationOptions, FlattenOptions, concatenate_files, flatten_files};
