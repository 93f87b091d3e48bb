//! Exit-code and output-prefix contract for the `mgrep` binary.

use std::io::Write;
use std::process::{Command, Stdio};

use tempfile::tempdir;

fn mgrep() -> Command {
    Command::new(env!("CARGO_BIN_EXE_mgrep"))
}

#[test]
fn stdin_match_exits_zero_with_bare_line() {
    let mut child = mgrep()
        .args(["-E", "cat"])
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .spawn()
        .unwrap();
    child
        .stdin
        .take()
        .unwrap()
        .write_all(b"a cat sat\n")
        .unwrap();
    let output = child.wait_with_output().unwrap();
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(String::from_utf8_lossy(&output.stdout), "a cat sat\n");
}

#[test]
fn stdin_no_match_exits_one_with_no_output() {
    let mut child = mgrep()
        .args(["-E", "dog"])
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .spawn()
        .unwrap();
    child
        .stdin
        .take()
        .unwrap()
        .write_all(b"a cat sat\n")
        .unwrap();
    let output = child.wait_with_output().unwrap();
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
}

#[test]
fn malformed_pattern_exits_two_with_diagnostic() {
    let output = mgrep()
        .args(["-E", "(unclosed"])
        .stdin(Stdio::piped())
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(2));
    assert!(!output.stderr.is_empty());
}

#[test]
fn single_file_output_has_no_path_prefix() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("notes.txt");
    std::fs::write(&path, "a cat sat\nno match here\n").unwrap();

    let output = mgrep().args(["-E", "cat"]).arg(&path).output().unwrap();
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(String::from_utf8_lossy(&output.stdout), "a cat sat\n");
}

#[test]
fn multiple_files_are_prefixed_with_their_path() {
    let dir = tempdir().unwrap();
    let a = dir.path().join("a.txt");
    let b = dir.path().join("b.txt");
    std::fs::write(&a, "cat\n").unwrap();
    std::fs::write(&b, "dog\n").unwrap();

    let output = mgrep().args(["-E", "cat"]).args([&a, &b]).output().unwrap();
    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("cat\n"));
    assert!(stdout.starts_with(&a.display().to_string()) || stdout.contains(&a.display().to_string()));
}

#[test]
fn recursive_search_descends_subdirectories() {
    let dir = tempdir().unwrap();
    std::fs::create_dir(dir.path().join("sub")).unwrap();
    std::fs::write(dir.path().join("sub").join("deep.txt"), "a cat sat\n").unwrap();

    let output = mgrep()
        .args(["-E", "cat", "-r"])
        .arg(dir.path())
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(0));
    assert!(String::from_utf8_lossy(&output.stdout).contains("cat"));
}

#[test]
fn directory_without_recursive_flag_exits_two() {
    let dir = tempdir().unwrap();
    let output = mgrep().args(["-E", "cat"]).arg(dir.path()).output().unwrap();
    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn jobs_flag_preserves_input_order() {
    let dir = tempdir().unwrap();
    let a = dir.path().join("a.txt");
    let b = dir.path().join("b.txt");
    let c = dir.path().join("c.txt");
    std::fs::write(&a, "1 cat\n").unwrap();
    std::fs::write(&b, "2 cat\n").unwrap();
    std::fs::write(&c, "3 cat\n").unwrap();

    let sequential = mgrep().args(["-E", "cat"]).args([&a, &b, &c]).output().unwrap();
    let parallel = mgrep()
        .args(["-E", "cat", "-j", "3"])
        .args([&a, &b, &c])
        .output()
        .unwrap();
    assert_eq!(sequential.stdout, parallel.stdout);
}
