#![cfg(feature = "cli")]

use std::io::Write;
use std::process::Command;

fn mdfrag() -> Command {
    Command::new(env!("CARGO_BIN_EXE_mdfrag"))
}

#[test]
fn converts_file_to_document() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "# Title\n\nSome *text*.").unwrap();

    let output = mdfrag().arg("-i").arg(file.path()).output().unwrap();
    assert!(output.status.success());
    assert_eq!(
        String::from_utf8(output.stdout).unwrap(),
        "<!DOCTYPE html>\n<html>\n<head>\n    <title>Converted Markdown</title>\n</head>\n<body>\n\
         <h1>Title</h1>\n<p>Some <em>text</em>.</p>\n\
         </body>\n</html>\n"
    );
}

#[test]
fn missing_file_fails() {
    let dir = tempfile::tempdir().unwrap();
    let output = mdfrag()
        .arg("--input")
        .arg(dir.path().join("nope.md"))
        .output()
        .unwrap();

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("error: failed to read"), "{stderr}");
}

#[test]
fn input_flag_is_required() {
    let output = mdfrag().output().unwrap();
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
}
