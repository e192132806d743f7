//! Core diagnostic types and front-end error constructors.

use pict_ir::{Span, TokenKind};
use std::fmt;

/// The error taxonomy.
///
/// One kind per failure category; the kind appears in the rendered output
/// (`error[parse]: ...`) and drives nothing else — all errors are equally
/// fatal.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorKind {
    /// Unscannable input.
    Lex,
    /// Grammar violation.
    Parse,
    /// Undefined variable or function reference.
    Name,
    /// Operator or coercion type mismatch.
    Type,
    /// Division by zero, bad index, arity mismatch, and other dynamic faults.
    Runtime,
    /// File or console I/O failure.
    File,
    /// Missing import target or import cycle.
    Import,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::Lex => write!(f, "lex"),
            ErrorKind::Parse => write!(f, "parse"),
            ErrorKind::Name => write!(f, "name"),
            ErrorKind::Type => write!(f, "type"),
            ErrorKind::Runtime => write!(f, "runtime"),
            ErrorKind::File => write!(f, "file"),
            ErrorKind::Import => write!(f, "import"),
        }
    }
}

/// A fatal error from any pipeline stage.
#[derive(Clone, Debug, PartialEq)]
pub struct Diagnostic {
    pub kind: ErrorKind,
    pub message: String,
    /// Byte range in the source this error points at, when known.
    pub span: Option<Span>,
}

impl Diagnostic {
    /// Create a diagnostic without a span.
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Diagnostic {
            kind,
            message: message.into(),
            span: None,
        }
    }

    /// Attach a span.
    #[must_use]
    pub fn with_span(mut self, span: Span) -> Self {
        self.span = Some(span);
        self
    }

    /// Attach a span only if none is set yet.
    ///
    /// Inner evaluation code raises spanless errors; the statement walker
    /// fills in the statement's span on the way out.
    #[must_use]
    pub fn or_span(mut self, span: Span) -> Self {
        if self.span.is_none() {
            self.span = Some(span);
        }
        self
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "error[{}]: {}", self.kind, self.message)
    }
}

impl std::error::Error for Diagnostic {}

// Lexer error constructors

/// Input that matches no literal, identifier, or glyph.
pub fn unrecognized_symbol(symbol: &str, span: Span) -> Diagnostic {
    Diagnostic::new(
        ErrorKind::Lex,
        format!("unrecognized symbol '{symbol}'"),
    )
    .with_span(span)
}

/// A string literal with no closing quote before end of input.
pub fn unterminated_string(span: Span) -> Diagnostic {
    Diagnostic::new(ErrorKind::Lex, "unterminated string literal").with_span(span)
}

/// An integer literal that does not fit in an i64.
pub fn int_literal_too_large(literal: &str, span: Span) -> Diagnostic {
    Diagnostic::new(
        ErrorKind::Lex,
        format!("integer literal '{literal}' is too large"),
    )
    .with_span(span)
}

// Parser error constructors

/// The parser required one specific token and found another.
pub fn expected_token(expected: &TokenKind, found: &TokenKind, span: Span) -> Diagnostic {
    Diagnostic::new(
        ErrorKind::Parse,
        format!("expected {expected}, found {found}"),
    )
    .with_span(span)
}

/// A token that cannot begin a statement.
pub fn unexpected_token(found: &TokenKind, span: Span) -> Diagnostic {
    Diagnostic::new(
        ErrorKind::Parse,
        format!("unexpected {found}, expected a statement"),
    )
    .with_span(span)
}

/// A token that cannot begin an expression.
pub fn expected_expression(found: &TokenKind, span: Span) -> Diagnostic {
    Diagnostic::new(
        ErrorKind::Parse,
        format!("expected an expression, found {found}"),
    )
    .with_span(span)
}

/// The parser required an identifier and found something else.
pub fn expected_identifier(found: &TokenKind, span: Span) -> Diagnostic {
    Diagnostic::new(
        ErrorKind::Parse,
        format!("expected an identifier, found {found}"),
    )
    .with_span(span)
}

/// An identifier opened a statement but no statement form followed.
pub fn bad_identifier_statement(found: &TokenKind, span: Span) -> Diagnostic {
    Diagnostic::new(
        ErrorKind::Parse,
        format!("expected '👉', '➕📜', '➖📜', or '🤜' after identifier, found {found}"),
    )
    .with_span(span)
}

/// Tokens left over after the program end marker.
pub fn trailing_code(found: &TokenKind, span: Span) -> Diagnostic {
    Diagnostic::new(
        ErrorKind::Parse,
        format!("found {found} after the program end marker '🌳'"),
    )
    .with_span(span)
}
