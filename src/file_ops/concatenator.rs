//! Concatenation functionality
//!
//! This module writes every matched file into a single output file, each one
//! framed by a header naming its path.

use std::fs::{File, read_to_string};
use std::io::{BufWriter, Write};
use std::path::Path;

use log::debug;

use crate::constants::{FILENAME_LABEL, SEPARATOR_CHAR, SEPARATOR_WIDTH};
use crate::discovery::FileMatch;
use crate::errors::{Result, file_operation_error};

/// Result of concatenating files
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConcatenationResult {
    /// Number of files written to the output
    pub files_written: usize,
    /// Number of bytes written to the output
    pub bytes_written: u64,
}

/// Returns one separator line, without the line break
pub fn separator() -> String {
    SEPARATOR_CHAR.to_string().repeat(SEPARATOR_WIDTH)
}

/// Renders the block written for one file
///
/// The block is a separator, a `FileName: <path>` line, a second separator,
/// the file contents and a final line break.
pub fn render_block(path: &Path, contents: &str) -> String {
    let separator = separator();
    format!(
        "{separator}\n{FILENAME_LABEL}{}\n{separator}\n{contents}\n",
        path.display()
    )
}

/// Concatenates `matches` into `output_file` in the given order
///
/// The output file is created or truncated. Sources are read as UTF-8 text
/// and never modified.
///
/// # Arguments
/// * `matches` - The files to concatenate, in output order
/// * `output_file` - The file to write
///
/// # Returns
/// * `Result<ConcatenationResult>` - Counts of what was written
///
/// # Errors
/// * Returns an error if the output file cannot be created or written
/// * Returns an error if a source cannot be read as text; nothing after it is written
pub fn concatenate(matches: &[FileMatch], output_file: &Path) -> Result<ConcatenationResult> {
    let file = File::create(output_file)
        .map_err(|e| file_operation_error(e, output_file.to_path_buf(), "create"))?;
    let mut writer = BufWriter::new(file);
    let mut result = ConcatenationResult::default();

    for file_match in matches {
        let source = file_match.path();
        debug!("Appending {}", source.display());

        let contents = read_to_string(source)
            .map_err(|e| file_operation_error(e, source.to_path_buf(), "read"))?;
        let block = render_block(source, &contents);

        writer
            .write_all(block.as_bytes())
            .map_err(|e| file_operation_error(e, output_file.to_path_buf(), "write"))?;

        result.files_written += 1;
        result.bytes_written += block.len() as u64;
    }

    writer
        .flush()
        .map_err(|e| file_operation_error(e, output_file.to_path_buf(), "write"))?;

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::{read, write};
    use tempfile::tempdir;

    #[test]
    fn test_separator_width() {
        let line = separator();
        assert_eq!(line.len(), 65);
        assert!(line.chars().all(|c| c == '='));
    }

    #[test]
    fn test_render_block() {
        let block = render_block(Path::new("src/Main.java"), "class Main{}");
        let expected = format!(
            "{sep}\nFileName: src/Main.java\n{sep}\nclass Main{{}}\n",
            sep = "=".repeat(65)
        );
        assert_eq!(block, expected);
    }

    #[test]
    fn test_concatenate_truncates_existing_output() {
        let temp_dir = tempdir().unwrap();
        let source = temp_dir.path().join("A.java");
        let output = temp_dir.path().join("out.txt");
        write(&source, "class A{}").unwrap();
        let stale = "stale content that is much longer than the new output ".repeat(20);
        write(&output, stale).unwrap();

        let result = concatenate(&[FileMatch::new(&source)], &output).unwrap();

        let written = read(&output).unwrap();
        assert_eq!(written, render_block(&source, "class A{}").into_bytes());
        assert_eq!(result.files_written, 1);
        assert_eq!(result.bytes_written, written.len() as u64);
    }

    #[test]
    fn test_concatenate_nothing_creates_empty_file() {
        let temp_dir = tempdir().unwrap();
        let output = temp_dir.path().join("out.txt");

        let result = concatenate(&[], &output).unwrap();

        assert_eq!(result, ConcatenationResult::default());
        assert!(read(&output).unwrap().is_empty());
    }

    #[test]
    fn test_concatenate_stops_at_unreadable_source() {
        let temp_dir = tempdir().unwrap();
        let first = temp_dir.path().join("First.java");
        let binary = temp_dir.path().join("Binary.java");
        let last = temp_dir.path().join("Last.java");
        let output = temp_dir.path().join("out.txt");
        write(&first, "class First{}").unwrap();
        write(&binary, [0xff, 0xfe, 0x00, 0xc3]).unwrap();
        write(&last, "class Last{}").unwrap();

        let matches = vec![
            FileMatch::new(&first),
            FileMatch::new(&binary),
            FileMatch::new(&last),
        ];
        let error = concatenate(&matches, &output).unwrap_err();

        assert!(format!("{error}").contains("Binary.java"));
        let written = String::from_utf8(read(&output).unwrap()).unwrap();
        assert!(written.contains("class First{}"));
        assert!(!written.contains("class Last{}"));
    }

    #[test]
    fn test_concatenate_into_missing_directory_fails() {
        let temp_dir = tempdir().unwrap();
        let output = temp_dir.path().join("missing/out.txt");

        let error = concatenate(&[], &output).unwrap_err();
        assert!(format!("{error}").starts_with("Failed to create file"));
    }
}
