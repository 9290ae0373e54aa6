use std::fs::{create_dir_all, read, read_to_string, write};
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::tempdir;

fn write_source(root: &Path, relative: &str, contents: &str) {
    let path = root.join(relative);
    create_dir_all(path.parent().unwrap()).expect("Failed to create source directory");
    write(path, contents).expect("Failed to write source file");
}

#[test]
fn test_fcat_reports_count() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let root = temp_dir.path().join("project");
    let output = temp_dir.path().join("out.txt");
    write_source(&root, "src/Main.java", "class Main{}");
    write_source(&root, "lib/Util.java", "class Util{}");

    Command::cargo_bin("fcat")
        .unwrap()
        .arg(&root)
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::contains(format!(
            "Concatenated 2 .java files into {}",
            output.display()
        )));

    let written = read_to_string(&output).unwrap();
    assert!(written.contains("class Main{}\n"));
    assert!(written.contains("class Util{}\n"));
}

#[test]
fn test_fcat_without_matches() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let output = temp_dir.path().join("out.txt");

    Command::cargo_bin("fcat")
        .unwrap()
        .arg(temp_dir.path())
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "No .java files found in the specified directory.",
        ));

    assert!(!output.exists());
}

#[test]
fn test_fcat_missing_directory_fails() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let missing = temp_dir.path().join("missing");

    Command::cargo_bin("fcat")
        .unwrap()
        .arg(&missing)
        .arg(temp_dir.path().join("out.txt"))
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "The specified directory does not exist",
        ));
}

#[test]
fn test_fflat_copies_and_reports() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let root = temp_dir.path().join("project");
    let dest = temp_dir.path().join("dest");
    write_source(&root, "a/X.java", "class X{} // a");
    write_source(&root, "b/X.java", "class X{} // b");

    Command::cargo_bin("fflat")
        .unwrap()
        .arg(&root)
        .arg(&dest)
        .assert()
        .success()
        .stdout(predicate::str::contains("Copied: "))
        .stdout(predicate::str::contains(format!(
            "to {}",
            dest.join("X (1).java").display()
        )))
        .stdout(predicate::str::contains(format!(
            "Copied 2 .java files from {} to {}",
            root.display(),
            dest.display()
        )));

    let mut copied = vec![
        read(dest.join("X.java")).unwrap(),
        read(dest.join("X (1).java")).unwrap(),
    ];
    copied.sort();
    assert_eq!(copied, vec![b"class X{} // a".to_vec(), b"class X{} // b".to_vec()]);
}

#[test]
fn test_fflat_existing_output_fails() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let root = temp_dir.path().join("project");
    let dest = temp_dir.path().join("dest");
    write_source(&root, "A.java", "class A{}");
    create_dir_all(&dest).unwrap();

    Command::cargo_bin("fflat")
        .unwrap()
        .arg(&root)
        .arg(&dest)
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));

    assert!(!dest.join("A.java").exists());
}

#[test]
fn test_fflat_dry_run() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let root = temp_dir.path().join("project");
    let dest = temp_dir.path().join("dest");
    write_source(&root, "A.java", "class A{}");

    Command::cargo_bin("fflat")
        .unwrap()
        .arg("--dry")
        .arg(&root)
        .arg(&dest)
        .assert()
        .success()
        .stdout(predicate::str::contains("Would copy: "));

    assert!(!dest.exists());
}

#[test]
fn test_local_log_file_is_written() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let root = temp_dir.path().join("project");
    let log_file = temp_dir.path().join("run.log");
    write_source(&root, "A.java", "class A{}");

    Command::cargo_bin("fcat")
        .unwrap()
        .arg("-L")
        .arg("-l")
        .arg(&log_file)
        .arg(&root)
        .arg(temp_dir.path().join("out.txt"))
        .assert()
        .success();

    let log = read_to_string(&log_file).unwrap();
    assert!(log.contains("INFO"));
    assert!(log.contains("Concatenated 1 .java files"));
}

#[test]
fn test_missing_arguments_is_usage_error() {
    Command::cargo_bin("fflat")
        .unwrap()
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("required"));
}
