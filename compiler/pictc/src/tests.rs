use super::*;
use std::io::Write as _;

fn write_program(source: &str) -> (tempfile::TempDir, String) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("prog.pict");
    let mut file = std::fs::File::create(&path).unwrap();
    file.write_all(source.as_bytes()).unwrap();
    (dir, path.to_string_lossy().into_owned())
}

#[test]
fn run_file_succeeds_on_a_valid_program() {
    let (_dir, path) = write_program("🌱 🖨️ 1 ➕ 1 🔚 🌳");
    assert_eq!(run_file(&path), 0);
}

#[test]
fn run_file_reports_runtime_errors() {
    let (_dir, path) = write_program("🌱 🖨️ 1 ➗ 0 🔚 🌳");
    assert_eq!(run_file(&path), 1);
}

#[test]
fn run_file_reports_a_missing_file() {
    assert_eq!(run_file("no-such-file.pict"), 1);
}

#[test]
fn lex_file_rejects_unknown_symbols() {
    let (_dir, path) = write_program("🌱 🦀 🌳");
    assert_eq!(lex_file(&path), 1);
}

#[test]
fn parse_file_accepts_and_rejects() {
    let (_dir, path) = write_program("🌱 🔢 x 👉 1 🔚 🌳");
    assert_eq!(parse_file(&path), 0);
    let (_dir, path) = write_program("🌱 🔢 x 👉 🔚 🌳");
    assert_eq!(parse_file(&path), 1);
}
