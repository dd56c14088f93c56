//! End-to-end tests for the dis8080 binary

use std::io::Write;
use std::process::{Command, Output};

use tempfile::NamedTempFile;

fn run(args: &[&std::ffi::OsStr]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_dis8080"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to run dis8080")
}

fn image(bytes: &[u8]) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(bytes).unwrap();
    file
}

#[test]
fn test_prints_listing() {
    let file = image(&[0x00, 0x06, 0x05, 0x01, 0x34, 0x12, 0xC3, 0x00, 0x10, 0x08]);
    let output = run(&[file.path().as_os_str()]);

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(
        String::from_utf8(output.stdout).unwrap(),
        "0000 00       NOP\n\
         0001 06 05    MVI    B,$05\n\
         0003 01 34 12 LXI    B,$1234\n\
         0006 c3 00 10 JMP    $1000\n\
         0009 08       --\n"
    );
}

#[test]
fn test_truncated_tail_exits_cleanly() {
    let file = image(&[0x3E]);
    let output = run(&[file.path().as_os_str()]);

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(String::from_utf8(output.stdout).unwrap(), "0000 3e       MVI    A,$00\n");
}

#[test]
fn test_empty_file_prints_nothing() {
    let file = image(&[]);
    let output = run(&[file.path().as_os_str()]);

    assert_eq!(output.status.code(), Some(0));
    assert!(output.stdout.is_empty());
}

#[test]
fn test_missing_argument() {
    let output = run(&[]);

    assert_eq!(output.status.code(), Some(22));
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8(output.stderr).unwrap().contains("missing argument"));
}

#[test]
fn test_file_not_found() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.bin");
    let output = run(&[path.as_os_str()]);

    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("cannot open"));
    assert!(stderr.contains("absent.bin"));
}
