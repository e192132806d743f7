//! Pict IR - shared front-end types for the Pict interpreter.
//!
//! This crate holds the data that flows between pipeline stages:
//!
//! - [`Span`]: compact byte-offset source locations
//! - [`Token`] / [`TokenKind`]: the glyph vocabulary produced by the lexer
//! - [`ast`]: the statement/expression tree produced by the parser
//!
//! It has no dependencies so every other crate (lexer, parser, evaluator,
//! diagnostics, CLI) can share these types without pulling anything else in.

pub mod ast;
mod span;
mod token;

pub use ast::{BinaryOp, Block, DeclType, Expr, ExprKind, Program, Stmt, StmtKind, UnaryOp};
pub use span::Span;
pub use token::{Token, TokenKind, COMMENT_GLYPH, GLYPHS};
