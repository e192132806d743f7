//! Token types for the Pict lexer.
//!
//! Pict's vocabulary is a fixed table of emoji glyphs. Several glyphs are
//! composed of more than one Unicode scalar (either a base + `U+FE0F`
//! variation selector, or a two-emoji compound such as the block terminator)
//! and must be treated as atomic: the lexer matches the two-scalar form
//! before the one-scalar form and never splits a compound.

use super::Span;
use std::fmt;

/// A token with its span in the source.
#[derive(Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

impl Token {
    #[inline]
    pub fn new(kind: TokenKind, span: Span) -> Self {
        Token { kind, span }
    }

    /// Create a dummy token for tests/synthesized input.
    pub fn dummy(kind: TokenKind) -> Self {
        Token {
            kind,
            span: Span::DUMMY,
        }
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} @ {}", self.kind, self.span)
    }
}

/// Token kinds for Pict.
#[derive(Clone, Debug, PartialEq)]
pub enum TokenKind {
    /// Integer literal: 42
    Int(i64),
    /// Real literal: 3.14
    Real(f64),
    /// String literal: "hello" (no escape processing)
    Str(String),
    /// Identifier: variable or function name
    Ident(String),

    /// ✅
    True,
    /// ❌
    False,

    /// 🌱
    ProgramStart,
    /// 🌳
    ProgramEnd,
    /// 📦
    BlockOpen,
    /// 📦⛔
    BlockClose,
    /// 🔚
    Terminator,

    /// 🔢
    IntDecl,
    /// 👽
    RealDecl,
    /// 💬
    StrDecl,
    /// 📜
    ListDecl,

    /// 👉
    Assign,
    /// 👀
    Read,
    /// 🖨️
    Print,

    /// ➕
    Plus,
    /// ➖
    Minus,
    /// ✖️
    Star,
    /// ➗
    Slash,

    /// ⚖️
    Equals,
    /// ⬆️
    Greater,
    /// ⬇️
    Less,
    /// 🚫
    Not,
    /// 🤝
    And,
    /// 🙌
    Or,

    /// 🤔
    If,
    /// 🔀
    Elif,
    /// 🤨
    Else,
    /// 🔁
    While,
    /// 🔂
    ForEach,

    /// 🧩
    Fn,
    /// 🔙
    Return,

    /// 🤜
    ParenOpen,
    /// 🤛
    ParenClose,

    /// 🧺
    ListOpen,
    /// 🧺⛔
    ListClose,
    /// ➕📜
    ListAppend,
    /// ➖📜
    ListRemove,
    /// 🔍📜
    ListGet,

    /// ⚙️
    Import,
    /// 💾
    FileSave,
    /// 💾➕
    FileAppend,
    /// 📂
    FileRead,
    /// ⏱️
    Sleep,

    /// End of input
    Eof,
}

/// The full glyph table: `(symbol, kind)` pairs.
///
/// Compounds (two scalars) come first so table scans and docs both reflect
/// longest-match order. `💭` (comment) is absent: the lexer consumes it
/// without producing a token.
pub const GLYPHS: &[(&str, TokenKind)] = &[
    // Two-scalar compounds
    ("📦⛔", TokenKind::BlockClose),
    ("🧺⛔", TokenKind::ListClose),
    ("➕📜", TokenKind::ListAppend),
    ("➖📜", TokenKind::ListRemove),
    ("🔍📜", TokenKind::ListGet),
    ("💾➕", TokenKind::FileAppend),
    // Two-scalar variation-selector forms
    ("🖨️", TokenKind::Print),
    ("✖️", TokenKind::Star),
    ("⚖️", TokenKind::Equals),
    ("⬆️", TokenKind::Greater),
    ("⬇️", TokenKind::Less),
    ("⚙️", TokenKind::Import),
    ("⏱️", TokenKind::Sleep),
    // Single-scalar glyphs
    ("🌱", TokenKind::ProgramStart),
    ("🌳", TokenKind::ProgramEnd),
    ("📦", TokenKind::BlockOpen),
    ("🔚", TokenKind::Terminator),
    ("🔢", TokenKind::IntDecl),
    ("👽", TokenKind::RealDecl),
    ("💬", TokenKind::StrDecl),
    ("📜", TokenKind::ListDecl),
    ("👉", TokenKind::Assign),
    ("👀", TokenKind::Read),
    ("➕", TokenKind::Plus),
    ("➖", TokenKind::Minus),
    ("➗", TokenKind::Slash),
    ("🚫", TokenKind::Not),
    ("🤝", TokenKind::And),
    ("🙌", TokenKind::Or),
    ("✅", TokenKind::True),
    ("❌", TokenKind::False),
    ("🤔", TokenKind::If),
    ("🔀", TokenKind::Elif),
    ("🤨", TokenKind::Else),
    ("🔁", TokenKind::While),
    ("🔂", TokenKind::ForEach),
    ("🧩", TokenKind::Fn),
    ("🔙", TokenKind::Return),
    ("🤜", TokenKind::ParenOpen),
    ("🤛", TokenKind::ParenClose),
    ("🧺", TokenKind::ListOpen),
    ("💾", TokenKind::FileSave),
    ("📂", TokenKind::FileRead),
];

/// The comment introducer. Consumes to end of line; never becomes a token.
pub const COMMENT_GLYPH: &str = "💭";

impl TokenKind {
    /// Look up the token kind for a glyph, if the symbol is in the table.
    pub fn from_symbol(symbol: &str) -> Option<TokenKind> {
        GLYPHS
            .iter()
            .find(|(glyph, _)| *glyph == symbol)
            .map(|(_, kind)| kind.clone())
    }

    /// The glyph for this kind, for fixed-symbol tokens.
    ///
    /// Returns `None` for literals, identifiers, and `Eof`.
    pub fn symbol(&self) -> Option<&'static str> {
        GLYPHS
            .iter()
            .find(|(_, kind)| kind == self)
            .map(|(glyph, _)| *glyph)
    }
}

impl fmt::Display for TokenKind {
    /// Human-readable form used in diagnostics: the glyph itself for symbol
    /// tokens, a description for the rest.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Int(v) => write!(f, "integer literal {v}"),
            TokenKind::Real(v) => write!(f, "real literal {v}"),
            TokenKind::Str(s) => write!(f, "string literal \"{s}\""),
            TokenKind::Ident(name) => write!(f, "identifier '{name}'"),
            TokenKind::Eof => write!(f, "end of input"),
            other => match other.symbol() {
                Some(glyph) => write!(f, "'{glyph}'"),
                None => write!(f, "{other:?}"),
            },
        }
    }
}
