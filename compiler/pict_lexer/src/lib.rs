//! Pict lexer - turns glyph source text into a token stream.
//!
//! The scanner walks the source one Unicode scalar at a time. Literals,
//! identifiers, whitespace, and comments are handled first; everything else
//! is matched against the glyph table with a one-scalar lookahead, trying
//! the two-scalar symbol before the one-scalar symbol so compound glyphs
//! (`📦⛔`, `➕📜`, variation-selector forms like `🖨️`) are never split.
//!
//! Output is the full token vector, terminated by [`TokenKind::Eof`], or the
//! first [`Diagnostic`] encountered (fail-fast, like the rest of the
//! pipeline).

mod cursor;

use cursor::Cursor;
use memchr::memchr;
use pict_diagnostic::{
    int_literal_too_large, unrecognized_symbol, unterminated_string, Diagnostic,
};
use pict_ir::{Span, Token, TokenKind, COMMENT_GLYPH};

/// Tokenize a whole source file.
pub fn tokenize(source: &str) -> Result<Vec<Token>, Diagnostic> {
    let mut cursor = Cursor::new(source);
    let mut tokens = Vec::new();

    while let Some(ch) = cursor.current() {
        if ch.is_whitespace() {
            cursor.advance();
            continue;
        }
        if cursor.starts_with(COMMENT_GLYPH) {
            skip_comment(&mut cursor);
            continue;
        }
        if ch.is_ascii_digit() {
            tokens.push(lex_number(&mut cursor)?);
            continue;
        }
        if ch == '"' {
            tokens.push(lex_string(&mut cursor)?);
            continue;
        }
        if ch.is_alphabetic() || ch == '_' {
            tokens.push(lex_ident(&mut cursor));
            continue;
        }
        tokens.push(lex_glyph(&mut cursor)?);
    }

    let end = Span::new(cursor.pos() as u32, cursor.pos() as u32);
    tokens.push(Token::new(TokenKind::Eof, end));
    Ok(tokens)
}

/// Consume `💭` and everything up to (not including) the next newline.
fn skip_comment(cursor: &mut Cursor<'_>) {
    cursor.advance(); // the 💭 itself
    match memchr(b'\n', cursor.rest().as_bytes()) {
        Some(offset) => cursor.advance_bytes(offset),
        None => cursor.advance_to_end(),
    }
}

/// Lex an integer or real literal: a digit run with at most one `.`.
///
/// A second `.` ends the literal (it is not part of the number), matching
/// the rule that reals carry a single decimal point.
fn lex_number(cursor: &mut Cursor<'_>) -> Result<Token, Diagnostic> {
    let start = cursor.pos();
    let mut seen_dot = false;

    while let Some(ch) = cursor.current() {
        if ch.is_ascii_digit() {
            cursor.advance();
        } else if ch == '.' && !seen_dot {
            seen_dot = true;
            cursor.advance();
        } else {
            break;
        }
    }

    let raw = cursor.slice(start);
    let span = Span::from_range(start..cursor.pos());
    let kind = if seen_dot {
        // Digit-led and at most one dot: f64 parse cannot fail.
        TokenKind::Real(raw.parse().unwrap_or(f64::NAN))
    } else {
        match raw.parse::<i64>() {
            Ok(value) => TokenKind::Int(value),
            Err(_) => return Err(int_literal_too_large(raw, span)),
        }
    };
    Ok(Token::new(kind, span))
}

/// Lex a string literal. No escape processing: the literal runs to the next
/// `"`, and may span embedded spaces but not end-of-input.
fn lex_string(cursor: &mut Cursor<'_>) -> Result<Token, Diagnostic> {
    let start = cursor.pos();
    cursor.advance(); // opening quote

    let body_start = cursor.pos();
    match memchr(b'"', cursor.rest().as_bytes()) {
        Some(offset) => {
            cursor.advance_bytes(offset);
            let value = cursor.slice(body_start).to_string();
            cursor.advance(); // closing quote
            Ok(Token::new(
                TokenKind::Str(value),
                Span::from_range(start..cursor.pos()),
            ))
        }
        None => Err(unterminated_string(Span::from_range(
            start..cursor.source_len(),
        ))),
    }
}

/// Lex an identifier: letter or `_`, then letters, digits, or `_`.
fn lex_ident(cursor: &mut Cursor<'_>) -> Token {
    let start = cursor.pos();
    while let Some(ch) = cursor.current() {
        if ch.is_alphanumeric() || ch == '_' {
            cursor.advance();
        } else {
            break;
        }
    }
    let name = cursor.slice(start).to_string();
    Token::new(TokenKind::Ident(name), Span::from_range(start..cursor.pos()))
}

/// Match the glyph table, longest symbol first.
fn lex_glyph(cursor: &mut Cursor<'_>) -> Result<Token, Diagnostic> {
    let start = cursor.pos();

    // Two scalars, then one. Compounds and VS16 forms only exist as
    // two-scalar table entries, so this ordering is what keeps them atomic.
    if let Some(pair) = cursor.next_two() {
        if let Some(kind) = TokenKind::from_symbol(pair) {
            let len = pair.len();
            cursor.advance_bytes(len);
            return Ok(Token::new(kind, Span::from_range(start..cursor.pos())));
        }
    }
    if let Some(one) = cursor.next_one() {
        if let Some(kind) = TokenKind::from_symbol(one) {
            let len = one.len();
            cursor.advance_bytes(len);
            return Ok(Token::new(kind, Span::from_range(start..cursor.pos())));
        }
    }

    let symbol = cursor.next_one().unwrap_or_default().to_string();
    let end = start + symbol.len().max(1);
    Err(unrecognized_symbol(&symbol, Span::from_range(start..end)))
}
