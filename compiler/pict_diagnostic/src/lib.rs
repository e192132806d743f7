//! Diagnostic types for error reporting.
//!
//! Every failure in the pipeline — lexing, parsing, evaluation, I/O,
//! imports — is a [`Diagnostic`]: an [`ErrorKind`] naming the category, a
//! human-readable message, and an optional source span. All Pict errors are
//! fatal: there is no recovery or user-level catch, so a `Diagnostic`
//! propagates straight out of whichever stage raised it and the CLI renders
//! it and exits non-zero.
//!
//! Factory functions for lexer and parser errors live here so both crates
//! construct identical messages; evaluator error factories live in
//! `pict_eval::errors` next to the code that raises them.

mod diagnostic;
pub mod emitter;
pub mod span_utils;

pub use diagnostic::{
    bad_identifier_statement, expected_expression, expected_identifier, expected_token,
    int_literal_too_large, trailing_code, unexpected_token, unrecognized_symbol,
    unterminated_string, Diagnostic, ErrorKind,
};
