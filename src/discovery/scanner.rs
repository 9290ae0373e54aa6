//! Directory scanning functionality
//!
//! This module contains functions for walking a directory tree and finding
//! the files whose names end with a suffix.

use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use log::{debug, trace};
use walkdir::WalkDir;

use crate::discovery::matcher::has_suffix;
use crate::errors::{
    Result, directory_not_found_error, invalid_filename_error, path_operation_error,
};

/// A file found during traversal
///
/// The path is kept exactly as the walk produced it: the search root joined
/// with every directory component below it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileMatch {
    path: PathBuf,
}

impl FileMatch {
    /// Creates a new FileMatch from a path
    pub fn new(path: impl Into<PathBuf>) -> Self {
        FileMatch { path: path.into() }
    }

    /// The path to the file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The final component of the path
    ///
    /// # Errors
    /// Returns an error if the path has no file name or it is not valid Unicode
    pub fn file_name(&self) -> Result<&str> {
        self.path
            .file_name()
            .ok_or_else(|| path_operation_error(self.path.clone(), "get filename"))
            .and_then(|os_str: &OsStr| {
                os_str
                    .to_str()
                    .ok_or_else(|| invalid_filename_error(self.path.clone()))
            })
    }
}

impl AsRef<Path> for FileMatch {
    fn as_ref(&self) -> &Path {
        &self.path
    }
}

/// Lazy iterator over the files below a search root that match a suffix
///
/// Entries are produced in directory-listing order. Directories, including
/// symbolic links that point at directories, are never yielded; symbolic
/// links are not followed during the descent. A directory that cannot be
/// listed is yielded as an error item.
pub struct FileMatches {
    walker: walkdir::IntoIter,
    suffix: String,
}

impl Iterator for FileMatches {
    type Item = Result<FileMatch>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let entry = match self.walker.next()? {
                Ok(entry) => entry,
                Err(e) => return Some(Err(e.into())),
            };

            if entry.file_type().is_dir() {
                continue;
            }

            let path = entry.into_path();
            if path.is_dir() {
                trace!("Skipping linked directory: {}", path.display());
                continue;
            }
            if !has_suffix(&path, &self.suffix) {
                continue;
            }

            trace!("Matched file: {}", path.display());
            return Some(Ok(FileMatch::new(path)));
        }
    }
}

/// Checks that the search root exists and is a directory
///
/// # Errors
/// Returns a directory not found error otherwise
pub fn ensure_search_root(root: &Path) -> Result<()> {
    if root.is_dir() {
        Ok(())
    } else {
        Err(directory_not_found_error(root.to_path_buf()))
    }
}

/// Walks `root` recursively and yields every file whose name ends with `suffix`
///
/// # Arguments
/// * `root` - The directory to search
/// * `suffix` - The case-sensitive filename suffix, e.g. `.java`
///
/// # Returns
/// * `Result<FileMatches>` - A lazy iterator over the matching files
///
/// # Errors
/// Returns an error if `root` does not exist or is not a directory
pub fn find_files(root: &Path, suffix: &str) -> Result<FileMatches> {
    ensure_search_root(root)?;
    debug!("Scanning directory: {}", root.display());

    Ok(FileMatches {
        walker: WalkDir::new(root).into_iter(),
        suffix: suffix.to_string(),
    })
}

/// Collects every matching file below `root`, stopping at the first error
pub fn collect_files(root: &Path, suffix: &str) -> Result<Vec<FileMatch>> {
    let files = find_files(root, suffix)?.collect::<Result<Vec<FileMatch>>>()?;
    debug!("Found {} files ending with {}", files.len(), suffix);
    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;
    use std::fs::{File, create_dir_all};
    use tempfile::tempdir;

    fn touch(path: &Path) {
        if let Some(parent) = path.parent() {
            create_dir_all(parent).unwrap();
        }
        File::create(path).unwrap();
    }

    #[test]
    fn test_find_files_recurses_and_filters() {
        let temp_dir = tempdir().unwrap();
        let root = temp_dir.path();
        touch(&root.join("Top.java"));
        touch(&root.join("a/b/c/Deep.java"));
        touch(&root.join("a/Notes.txt"));
        touch(&root.join("a/Upper.JAVA"));
        touch(&root.join("a/Main.java.orig"));

        let found: BTreeSet<PathBuf> = collect_files(root, ".java")
            .unwrap()
            .into_iter()
            .map(|m| m.path().to_path_buf())
            .collect();

        let expected: BTreeSet<PathBuf> = [root.join("Top.java"), root.join("a/b/c/Deep.java")]
            .into_iter()
            .collect();
        assert_eq!(found, expected);
    }

    #[test]
    fn test_find_files_skips_directories_named_like_matches() {
        let temp_dir = tempdir().unwrap();
        let root = temp_dir.path();
        create_dir_all(root.join("pkg.java")).unwrap();
        touch(&root.join("pkg.java/Inner.java"));

        let found = collect_files(root, ".java").unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].path(), root.join("pkg.java/Inner.java"));
    }

    #[cfg(unix)]
    #[test]
    fn test_find_files_symlinks() {
        use std::os::unix::fs::symlink;

        let temp_dir = tempdir().unwrap();
        let root = temp_dir.path();
        touch(&root.join("real/A.java"));
        symlink(root.join("real"), root.join("link.java")).unwrap();
        symlink(root.join("real/A.java"), root.join("L.java")).unwrap();

        let found: BTreeSet<PathBuf> = collect_files(root, ".java")
            .unwrap()
            .into_iter()
            .map(|m| m.path().to_path_buf())
            .collect();

        // Linked files count, linked directories are neither yielded nor walked.
        let expected: BTreeSet<PathBuf> = [root.join("L.java"), root.join("real/A.java")]
            .into_iter()
            .collect();
        assert_eq!(found, expected);
    }

    #[test]
    fn test_find_files_on_empty_tree() {
        let temp_dir = tempdir().unwrap();
        assert!(collect_files(temp_dir.path(), ".java").unwrap().is_empty());
    }

    #[test]
    fn test_find_files_missing_root() {
        let temp_dir = tempdir().unwrap();
        let missing = temp_dir.path().join("missing");

        let error = find_files(&missing, ".java").err().unwrap();
        assert!(error.is_not_found());
    }

    #[test]
    fn test_find_files_root_is_a_file() {
        let temp_dir = tempdir().unwrap();
        let file = temp_dir.path().join("Main.java");
        touch(&file);

        let error = collect_files(&file, ".java").unwrap_err();
        assert!(error.is_not_found());
    }

    #[test]
    fn test_file_match_file_name() {
        let file_match = FileMatch::new("some/dir/Main.java");
        assert_eq!(file_match.file_name().unwrap(), "Main.java");
        assert_eq!(file_match.path(), Path::new("some/dir/Main.java"));
    }

    #[test]
    fn test_file_match_without_file_name() {
        let file_match = FileMatch::new("..");
        assert!(file_match.file_name().is_err());
    }
}
