//! Import resolution, hoisting, diamonds, and cycles.

use super::run_file;
use pict_diagnostic::ErrorKind;
use pretty_assertions::assert_eq;
use std::path::PathBuf;

fn write(dir: &tempfile::TempDir, name: &str, source: &str) -> PathBuf {
    let path = dir.path().join(name);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).unwrap();
    }
    std::fs::write(&path, source).unwrap();
    path
}

#[test]
fn import_merges_declarations_and_functions() {
    let dir = tempfile::tempdir().unwrap();
    write(
        &dir,
        "lib.pict",
        "🌱 🔢 answer 👉 42 🔚 🧩 double n 📦 🔙 n ✖️ 2 🔚 📦⛔ 🌳",
    );
    let main = write(
        &dir,
        "main.pict",
        "🌱 ⚙️ \"lib.pict\" 🔚 🖨️ answer 🔚 🖨️ double 🤜 21 🤛 🔚 🌳",
    );
    assert_eq!(run_file(&main).unwrap(), "42\n42\n");
}

#[test]
fn imports_run_before_the_importers_statements() {
    let dir = tempfile::tempdir().unwrap();
    write(&dir, "lib.pict", "🌱 🔢 early 👉 1 🔚 🌳");
    // The import appears after the use; hoisting makes it visible anyway.
    let main = write(
        &dir,
        "main.pict",
        "🌱 🖨️ early 🔚 ⚙️ \"lib.pict\" 🔚 🌳",
    );
    assert_eq!(run_file(&main).unwrap(), "1\n");
}

#[test]
fn imported_file_statements_do_not_run() {
    let dir = tempfile::tempdir().unwrap();
    write(
        &dir,
        "lib.pict",
        "🌱 🖨️ \"side effect\" 🔚 🔢 quiet 👉 7 🔚 🌳",
    );
    let main = write(
        &dir,
        "main.pict",
        "🌱 ⚙️ \"lib.pict\" 🔚 🖨️ quiet 🔚 🌳",
    );
    assert_eq!(run_file(&main).unwrap(), "7\n");
}

#[test]
fn imports_resolve_relative_to_the_importing_file() {
    let dir = tempfile::tempdir().unwrap();
    write(&dir, "sub/helper.pict", "🌱 🔢 deep 👉 3 🔚 🌳");
    write(
        &dir,
        "sub/mid.pict",
        "🌱 ⚙️ \"helper.pict\" 🔚 🧩 get 📦 🔙 deep 🔚 📦⛔ 🌳",
    );
    let main = write(
        &dir,
        "main.pict",
        "🌱 ⚙️ \"sub/mid.pict\" 🔚 🖨️ get 🤜 🤛 🔚 🌳",
    );
    assert_eq!(run_file(&main).unwrap(), "3\n");
}

#[test]
fn diamond_imports_load_once() {
    let dir = tempfile::tempdir().unwrap();
    // Both branches import base; a second load would redeclare `shared`.
    write(&dir, "base.pict", "🌱 🔢 shared 👉 1 🔚 🌳");
    write(&dir, "left.pict", "🌱 ⚙️ \"base.pict\" 🔚 🔢 l 👉 2 🔚 🌳");
    write(&dir, "right.pict", "🌱 ⚙️ \"base.pict\" 🔚 🔢 r 👉 3 🔚 🌳");
    let main = write(
        &dir,
        "main.pict",
        "🌱 ⚙️ \"left.pict\" 🔚 ⚙️ \"right.pict\" 🔚 \
         🖨️ shared ➕ l ➕ r 🔚 🌳",
    );
    assert_eq!(run_file(&main).unwrap(), "6\n");
}

#[test]
fn repeated_import_of_the_same_file_is_a_no_op() {
    let dir = tempfile::tempdir().unwrap();
    write(&dir, "lib.pict", "🌱 🔢 once 👉 1 🔚 🌳");
    let main = write(
        &dir,
        "main.pict",
        "🌱 ⚙️ \"lib.pict\" 🔚 ⚙️ \"lib.pict\" 🔚 🖨️ once 🔚 🌳",
    );
    assert_eq!(run_file(&main).unwrap(), "1\n");
}

#[test]
fn import_cycle_is_fatal() {
    let dir = tempfile::tempdir().unwrap();
    write(&dir, "a.pict", "🌱 ⚙️ \"b.pict\" 🔚 🌳");
    write(&dir, "b.pict", "🌱 ⚙️ \"a.pict\" 🔚 🌳");
    let main = write(&dir, "main.pict", "🌱 ⚙️ \"a.pict\" 🔚 🌳");
    let err = run_file(&main).unwrap_err();
    assert_eq!(err.kind, ErrorKind::Import);
    assert!(err.message.contains("cycle"));
}

#[test]
fn self_import_is_a_cycle() {
    let dir = tempfile::tempdir().unwrap();
    let main = write(&dir, "main.pict", "🌱 ⚙️ \"main.pict\" 🔚 🌳");
    let err = run_file(&main).unwrap_err();
    assert_eq!(err.kind, ErrorKind::Import);
}

#[test]
fn missing_import_target_is_an_import_error() {
    let dir = tempfile::tempdir().unwrap();
    let main = write(&dir, "main.pict", "🌱 ⚙️ \"nowhere.pict\" 🔚 🌳");
    let err = run_file(&main).unwrap_err();
    assert_eq!(err.kind, ErrorKind::Import);
}

#[test]
fn errors_in_imported_files_name_the_file() {
    let dir = tempfile::tempdir().unwrap();
    write(&dir, "broken.pict", "🌱 🔢 x 👉 🔚 🌳");
    let main = write(&dir, "main.pict", "🌱 ⚙️ \"broken.pict\" 🔚 🌳");
    let err = run_file(&main).unwrap_err();
    assert_eq!(err.kind, ErrorKind::Parse);
    assert!(err.message.contains("broken.pict"));
}

#[test]
fn conflicting_declarations_across_imports_are_fatal() {
    let dir = tempfile::tempdir().unwrap();
    write(&dir, "one.pict", "🌱 🔢 name 👉 1 🔚 🌳");
    write(&dir, "two.pict", "🌱 🔢 name 👉 2 🔚 🌳");
    let main = write(
        &dir,
        "main.pict",
        "🌱 ⚙️ \"one.pict\" 🔚 ⚙️ \"two.pict\" 🔚 🌳",
    );
    let err = run_file(&main).unwrap_err();
    assert_eq!(err.kind, ErrorKind::Runtime);
}
