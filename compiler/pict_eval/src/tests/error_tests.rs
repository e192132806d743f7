//! Error taxonomy and fatality: every runtime fault stops the program.

use super::{run_err, run_err_with_output};
use pict_diagnostic::ErrorKind;
use pretty_assertions::assert_eq;

#[test]
fn division_by_zero_stops_execution() {
    let source = "🌱 🖨️ \"before\" 🔚 🖨️ 1 ➗ 0 🔚 🖨️ \"after\" 🔚 🌳";
    let (output, err) = run_err_with_output(source);
    assert_eq!(output, "before\n");
    assert_eq!(err.kind, ErrorKind::Runtime);
    assert!(err.message.contains("division by zero"));
}

#[test]
fn undefined_variable_is_a_name_error() {
    let err = run_err("🌱 🖨️ ghost 🔚 🌳");
    assert_eq!(err.kind, ErrorKind::Name);
    assert!(err.message.contains("ghost"));
}

#[test]
fn assigning_an_undeclared_variable_is_a_name_error() {
    let err = run_err("🌱 x 👉 1 🔚 🌳");
    assert_eq!(err.kind, ErrorKind::Name);
}

#[test]
fn redeclaring_in_the_same_scope_is_fatal() {
    let err = run_err("🌱 🔢 x 👉 1 🔚 🔢 x 👉 2 🔚 🌳");
    assert_eq!(err.kind, ErrorKind::Runtime);
    assert!(err.message.contains("already declared"));
}

#[test]
fn operator_type_mismatch_is_a_type_error() {
    let err = run_err("🌱 🖨️ ✅ ➕ 1 🔚 🌳");
    assert_eq!(err.kind, ErrorKind::Type);
}

#[test]
fn comparing_across_categories_is_a_type_error() {
    let err = run_err("🌱 🤔 1 ⚖️ \"1\" 📦 📦⛔ 🌳");
    assert_eq!(err.kind, ErrorKind::Type);
}

#[test]
fn integer_overflow_is_fatal() {
    let source = "🌱 🔢 big 👉 9223372036854775807 🔚 🖨️ big ➕ 1 🔚 🌳";
    let err = run_err(source);
    assert_eq!(err.kind, ErrorKind::Runtime);
    assert!(err.message.contains("overflow"));
}

#[test]
fn runtime_errors_carry_a_span() {
    let err = run_err("🌱 🖨️ ghost 🔚 🌳");
    assert!(err.span.is_some());
}

#[test]
fn expression_errors_point_at_the_offending_expression() {
    let source = "🌱 🖨️ 1 ➕ ghost 🔚 🌳";
    let err = run_err(source);
    let span = err.span.unwrap();
    let offender = &source[span.start as usize..span.end as usize];
    assert_eq!(offender, "ghost");
}

#[test]
fn loop_errors_stop_mid_iteration() {
    let source = "🌱 🔢 n 👉 2 🔚 \
                  🔁 n ⬆️ ➖ 2 📦 🖨️ n 🔚 🖨️ 1 ➗ n 🔚 n 👉 n ➖ 1 🔚 📦⛔ 🌳";
    let (output, err) = run_err_with_output(source);
    // 1/0 dies on the third iteration.
    assert_eq!(output, "2\n0.5\n1\n1.0\n0\n");
    assert_eq!(err.kind, ErrorKind::Runtime);
}
