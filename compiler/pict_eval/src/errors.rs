//! Centralized error constructors for the evaluator.
//!
//! Every runtime failure is built here so messages stay consistent across
//! the interpreter, operators, and coercion code. Constructors return
//! spanless diagnostics; the statement walker attaches the offending
//! statement's span on the way out (`Diagnostic::or_span`), and expression
//! evaluation narrows it where it knows better.

use pict_diagnostic::{Diagnostic, ErrorKind};
use pict_ir::{BinaryOp, DeclType, UnaryOp};

use crate::Value;

// Name errors

pub fn undefined_variable(name: &str) -> Diagnostic {
    Diagnostic::new(ErrorKind::Name, format!("variable '{name}' is not defined"))
}

pub fn undefined_function(name: &str) -> Diagnostic {
    Diagnostic::new(ErrorKind::Name, format!("function '{name}' is not defined"))
}

// Declaration errors

pub fn already_declared(name: &str) -> Diagnostic {
    Diagnostic::new(
        ErrorKind::Runtime,
        format!("'{name}' is already declared in this scope"),
    )
}

/// A typed declaration/cast whose value cannot be coerced to the target.
pub fn coercion_failed(value: &Value, target: DeclType) -> Diagnostic {
    Diagnostic::new(
        ErrorKind::Type,
        format!(
            "cannot coerce {} value '{value}' to {target}",
            value.type_name()
        ),
    )
}

// Operator errors

pub fn binary_type_mismatch(op: BinaryOp, lhs: &Value, rhs: &Value) -> Diagnostic {
    Diagnostic::new(
        ErrorKind::Type,
        format!(
            "'{op}' cannot combine {} and {}",
            lhs.type_name(),
            rhs.type_name()
        ),
    )
}

pub fn unary_type_mismatch(op: UnaryOp, operand: &Value) -> Diagnostic {
    Diagnostic::new(
        ErrorKind::Type,
        format!("'{op}' cannot be applied to {}", operand.type_name()),
    )
}

pub fn logical_operand_not_bool(op: BinaryOp, operand: &Value) -> Diagnostic {
    Diagnostic::new(
        ErrorKind::Type,
        format!("'{op}' requires bool operands, got {}", operand.type_name()),
    )
}

pub fn division_by_zero() -> Diagnostic {
    Diagnostic::new(ErrorKind::Runtime, "division by zero")
}

pub fn integer_overflow(op: BinaryOp) -> Diagnostic {
    Diagnostic::new(ErrorKind::Runtime, format!("integer overflow in '{op}'"))
}

// Control flow errors

pub fn condition_not_bool(value: &Value) -> Diagnostic {
    Diagnostic::new(
        ErrorKind::Type,
        format!("condition must be a bool, got {}", value.type_name()),
    )
}

pub fn return_outside_function() -> Diagnostic {
    Diagnostic::new(ErrorKind::Runtime, "'🔙' outside of a function body")
}

// Function errors

pub fn not_callable(name: &str, value: &Value) -> Diagnostic {
    Diagnostic::new(
        ErrorKind::Type,
        format!("'{name}' is a {}, not a function", value.type_name()),
    )
}

pub fn arity_mismatch(name: &str, expected: usize, got: usize) -> Diagnostic {
    Diagnostic::new(
        ErrorKind::Runtime,
        format!("function '{name}' takes {expected} argument(s), got {got}"),
    )
}

// List errors

pub fn not_a_list(value: &Value) -> Diagnostic {
    Diagnostic::new(
        ErrorKind::Type,
        format!("expected a list, got {}", value.type_name()),
    )
}

pub fn index_not_int(value: &Value) -> Diagnostic {
    Diagnostic::new(
        ErrorKind::Type,
        format!("list index must be an int, got {}", value.type_name()),
    )
}

pub fn index_out_of_bounds(index: i64, len: usize) -> Diagnostic {
    Diagnostic::new(
        ErrorKind::Runtime,
        format!("index {index} out of bounds for list of length {len}"),
    )
}

pub fn foreach_requires_list(value: &Value) -> Diagnostic {
    Diagnostic::new(
        ErrorKind::Type,
        format!("'🔂' requires a list to iterate, got {}", value.type_name()),
    )
}

// Sleep errors

pub fn sleep_requires_number(value: &Value) -> Diagnostic {
    Diagnostic::new(
        ErrorKind::Type,
        format!("'⏱️' duration must be a number, got {}", value.type_name()),
    )
}

pub fn nonfinite_sleep(seconds: f64) -> Diagnostic {
    Diagnostic::new(
        ErrorKind::Runtime,
        format!("'⏱️' duration must be finite, got {seconds}"),
    )
}

pub fn negative_sleep(seconds: f64) -> Diagnostic {
    Diagnostic::new(
        ErrorKind::Runtime,
        format!("'⏱️' duration must not be negative, got {seconds}"),
    )
}

// I/O errors

pub fn path_not_string(value: &Value) -> Diagnostic {
    Diagnostic::new(
        ErrorKind::Type,
        format!("file path must be a string, got {}", value.type_name()),
    )
}

pub fn file_failed(action: &str, path: &str, cause: &std::io::Error) -> Diagnostic {
    Diagnostic::new(
        ErrorKind::File,
        format!("failed to {action} '{path}': {cause}"),
    )
}

pub fn console_read_failed(cause: &str) -> Diagnostic {
    Diagnostic::new(ErrorKind::File, format!("failed to read input: {cause}"))
}

pub fn console_write_failed(cause: &std::io::Error) -> Diagnostic {
    Diagnostic::new(ErrorKind::File, format!("failed to write output: {cause}"))
}

// Import errors

pub fn import_not_found(path: &str, cause: &std::io::Error) -> Diagnostic {
    Diagnostic::new(
        ErrorKind::Import,
        format!("cannot import '{path}': {cause}"),
    )
}

pub fn import_cycle(path: &str) -> Diagnostic {
    Diagnostic::new(
        ErrorKind::Import,
        format!("import cycle detected at '{path}'"),
    )
}

/// Wrap an error raised while loading an imported file, naming the file and
/// dropping the span (which points into the imported source, not the
/// importer's).
pub fn in_imported_file(path: &str, inner: Diagnostic) -> Diagnostic {
    Diagnostic::new(inner.kind, format!("in imported file '{path}': {}", inner.message))
}
