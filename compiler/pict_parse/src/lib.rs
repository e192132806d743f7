//! Pict parser - recursive descent over the token stream.
//!
//! One pass, fail-fast: the first grammar violation becomes a `Diagnostic`
//! and parsing stops. Statement forms are dispatched on their leading glyph
//! (with one token of lookahead to tell assignment, list mutation, and calls
//! apart, since all three begin with an identifier). Expressions use the
//! usual precedence ladder, lowest binding first:
//!
//! ```text
//! or → and → not → comparison → term (➕➖) → factor (✖️➗) → unary ➖
//!    → postfix 🔍📜 → primary
//! ```

mod expr;
mod stmt;

use pict_diagnostic::{expected_identifier, expected_token, trailing_code, Diagnostic};
use pict_ir::{Program, Span, Token, TokenKind};

/// Parse a token stream (as produced by `pict_lexer::tokenize`) into a
/// program.
pub fn parse(tokens: &[Token]) -> Result<Program, Diagnostic> {
    tracing::trace!(tokens = tokens.len(), "parsing program");
    let mut parser = Parser::new(tokens);

    parser.expect(&TokenKind::ProgramStart)?;
    let stmts = parser.statements_until(&TokenKind::ProgramEnd)?;
    parser.expect(&TokenKind::ProgramEnd)?;

    let current = parser.current();
    if current.kind != TokenKind::Eof {
        return Err(trailing_code(&current.kind, current.span));
    }
    Ok(Program { stmts })
}

/// Parser state: the token slice and a cursor into it.
///
/// The slice always ends with `Eof`, so `current()` never runs off the end —
/// at worst it keeps returning the `Eof` token.
struct Parser<'t> {
    tokens: &'t [Token],
    pos: usize,
}

impl<'t> Parser<'t> {
    fn new(tokens: &'t [Token]) -> Self {
        Parser { tokens, pos: 0 }
    }

    /// The token at the cursor (`Eof` once input is exhausted).
    fn current(&self) -> &'t Token {
        self.tokens
            .get(self.pos)
            .or_else(|| self.tokens.last())
            .unwrap_or(&EOF_FALLBACK)
    }

    /// The token after the cursor.
    fn peek(&self) -> &'t Token {
        self.tokens
            .get(self.pos + 1)
            .or_else(|| self.tokens.last())
            .unwrap_or(&EOF_FALLBACK)
    }

    /// Span of the most recently consumed token.
    fn prev_span(&self) -> Span {
        if self.pos == 0 {
            return self.current().span;
        }
        self.tokens
            .get(self.pos - 1)
            .map_or(Span::DUMMY, |t| t.span)
    }

    fn advance(&mut self) {
        if self.pos < self.tokens.len() {
            self.pos += 1;
        }
    }

    /// Is the current token this exact kind?
    fn at(&self, kind: &TokenKind) -> bool {
        &self.current().kind == kind
    }

    /// Consume the current token if it matches, else fail.
    fn expect(&mut self, kind: &TokenKind) -> Result<Span, Diagnostic> {
        let current = self.current();
        if &current.kind == kind {
            let span = current.span;
            self.advance();
            Ok(span)
        } else {
            Err(expected_token(kind, &current.kind, current.span))
        }
    }

    /// Consume an identifier, returning its name and span.
    fn expect_ident(&mut self) -> Result<(String, Span), Diagnostic> {
        let current = self.current();
        if let TokenKind::Ident(name) = &current.kind {
            let out = (name.clone(), current.span);
            self.advance();
            Ok(out)
        } else {
            Err(expected_identifier(&current.kind, current.span))
        }
    }
}

// `tokens` is never empty in practice (tokenize always appends Eof); this
// exists so `current()` has a total fallback without panicking.
static EOF_FALLBACK: Token = Token {
    kind: TokenKind::Eof,
    span: Span::DUMMY,
};
