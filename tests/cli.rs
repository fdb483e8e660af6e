//! Running the binary.

use std::fs;
use std::path::Path;
use std::process::{Command, Output};

static FIXTURE: &str = "testdata/TestFamily/TestFamily-Regular.ufo";

fn glyphreg(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_glyphreg")).args(args).output().unwrap()
}

fn copy_master(to: &Path) {
    fs::create_dir_all(to.join("glyphs")).unwrap();
    for file in ["lib.plist", "glyphs/contents.plist"] {
        fs::copy(Path::new(FIXTURE).join(file), to.join(file)).unwrap();
    }
}

#[test]
fn no_arguments_prints_usage() {
    let output = glyphreg(&[]);
    assert!(!output.status.success());
    #[cfg(unix)]
    assert_eq!(output.status.code(), Some(255));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("usage:"));
}

#[test]
fn unknown_command_prints_usage() {
    let output = glyphreg(&["+X", "a"]);
    assert!(!output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Unknown command '+X'."));
    assert!(stdout.contains("usage:"));
}

#[test]
fn ligatures_are_not_implemented() {
    let output = glyphreg(&["+L", "f", "i", "f_i"]);
    assert_eq!(output.status.code(), Some(1));
    let output = glyphreg(&["-L", "f", "i"]);
    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn add_and_remove_glyph() {
    let dir = tempfile::tempdir().unwrap();
    let master = dir.path().join("Regular.ufo");
    copy_master(&master);
    let master_arg = master.to_str().unwrap();
    let original = fs::read(master.join("lib.plist")).unwrap();

    let output = glyphreg(&["--master", master_arg, "+G", "C"]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Done adding glyphs: 2 file(s) rewritten, 0 warning(s)."));
    let lib = fs::read_to_string(master.join("lib.plist")).unwrap();
    assert!(lib.contains("<string>C</string>"));

    let output = glyphreg(&["--master", master_arg, "+G", "C"]);
    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("already found"));

    let output = glyphreg(&["--master", master_arg, "-G", "C"]);
    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("Done removing glyphs: 2 file(s)"));
    assert_eq!(fs::read(master.join("lib.plist")).unwrap(), original);
}

#[test]
fn dry_run_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let master = dir.path().join("Regular.ufo");
    copy_master(&master);
    let original = fs::read(master.join("glyphs/contents.plist")).unwrap();

    let output = glyphreg(&["--dry-run", "--master", master.to_str().unwrap(), "+G", "C"]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("<key>C</key>"));
    assert_eq!(fs::read(master.join("glyphs/contents.plist")).unwrap(), original);
}

#[test]
fn missing_master_fails() {
    let dir = tempfile::tempdir().unwrap();
    let output = glyphreg(&["--root", dir.path().to_str().unwrap(), "+G", "C"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stdout).contains("bad format: no file"));
}
