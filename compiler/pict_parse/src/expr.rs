//! Expression parsing: the precedence ladder.

use crate::Parser;
use pict_diagnostic::{expected_expression, Diagnostic};
use pict_ir::{BinaryOp, Expr, ExprKind, TokenKind, UnaryOp};

impl Parser<'_> {
    /// Entry point: lowest precedence level.
    pub(crate) fn expression(&mut self) -> Result<Expr, Diagnostic> {
        self.or_expr()
    }

    /// `and (🙌 and)*`
    fn or_expr(&mut self) -> Result<Expr, Diagnostic> {
        let mut lhs = self.and_expr()?;
        while self.at(&TokenKind::Or) {
            self.advance();
            let rhs = self.and_expr()?;
            lhs = binary(BinaryOp::Or, lhs, rhs);
        }
        Ok(lhs)
    }

    /// `not (🤝 not)*`
    fn and_expr(&mut self) -> Result<Expr, Diagnostic> {
        let mut lhs = self.not_expr()?;
        while self.at(&TokenKind::And) {
            self.advance();
            let rhs = self.not_expr()?;
            lhs = binary(BinaryOp::And, lhs, rhs);
        }
        Ok(lhs)
    }

    /// `🚫 not | comparison` — right-recursive so `🚫🚫x` works.
    fn not_expr(&mut self) -> Result<Expr, Diagnostic> {
        if self.at(&TokenKind::Not) {
            let span = self.current().span;
            self.advance();
            let operand = self.not_expr()?;
            let span = span.merge(operand.span);
            return Ok(Expr::new(
                ExprKind::Unary {
                    op: UnaryOp::Not,
                    operand: Box::new(operand),
                },
                span,
            ));
        }
        self.comparison()
    }

    /// `term ((⚖️|⬆️|⬇️) term)*`
    fn comparison(&mut self) -> Result<Expr, Diagnostic> {
        let mut lhs = self.term()?;
        loop {
            let op = match self.current().kind {
                TokenKind::Equals => BinaryOp::Eq,
                TokenKind::Greater => BinaryOp::Gt,
                TokenKind::Less => BinaryOp::Lt,
                _ => break,
            };
            self.advance();
            let rhs = self.term()?;
            lhs = binary(op, lhs, rhs);
        }
        Ok(lhs)
    }

    /// `factor ((➕|➖) factor)*`
    fn term(&mut self) -> Result<Expr, Diagnostic> {
        let mut lhs = self.factor()?;
        loop {
            let op = match self.current().kind {
                TokenKind::Plus => BinaryOp::Add,
                TokenKind::Minus => BinaryOp::Sub,
                _ => break,
            };
            self.advance();
            let rhs = self.factor()?;
            lhs = binary(op, lhs, rhs);
        }
        Ok(lhs)
    }

    /// `unary ((✖️|➗) unary)*`
    fn factor(&mut self) -> Result<Expr, Diagnostic> {
        let mut lhs = self.unary()?;
        loop {
            let op = match self.current().kind {
                TokenKind::Star => BinaryOp::Mul,
                TokenKind::Slash => BinaryOp::Div,
                _ => break,
            };
            self.advance();
            let rhs = self.unary()?;
            lhs = binary(op, lhs, rhs);
        }
        Ok(lhs)
    }

    /// `➖ unary | postfix`
    pub(crate) fn unary(&mut self) -> Result<Expr, Diagnostic> {
        if self.at(&TokenKind::Minus) {
            let span = self.current().span;
            self.advance();
            let operand = self.unary()?;
            let span = span.merge(operand.span);
            return Ok(Expr::new(
                ExprKind::Unary {
                    op: UnaryOp::Neg,
                    operand: Box::new(operand),
                },
                span,
            ));
        }
        self.postfix()
    }

    /// `primary (🔍📜 unary)*` — get-at binds tighter than arithmetic; a
    /// computed index wants parens: `xs 🔍📜 🤜 i ➕ 1 🤛`.
    fn postfix(&mut self) -> Result<Expr, Diagnostic> {
        let mut expr = self.primary()?;
        while self.at(&TokenKind::ListGet) {
            self.advance();
            let index = self.unary()?;
            let span = expr.span.merge(index.span);
            expr = Expr::new(
                ExprKind::Index {
                    list: Box::new(expr),
                    index: Box::new(index),
                },
                span,
            );
        }
        Ok(expr)
    }

    /// Literals, identifiers, calls, list literals, parenthesized groups.
    fn primary(&mut self) -> Result<Expr, Diagnostic> {
        let token = self.current();
        let span = token.span;

        let kind = match &token.kind {
            TokenKind::Int(value) => {
                let value = *value;
                self.advance();
                ExprKind::Int(value)
            }
            TokenKind::Real(value) => {
                let value = *value;
                self.advance();
                ExprKind::Real(value)
            }
            TokenKind::Str(value) => {
                let value = value.clone();
                self.advance();
                ExprKind::Str(value)
            }
            TokenKind::True => {
                self.advance();
                ExprKind::Bool(true)
            }
            TokenKind::False => {
                self.advance();
                ExprKind::Bool(false)
            }
            TokenKind::Ident(name) => {
                let name = name.clone();
                self.advance();
                if self.at(&TokenKind::ParenOpen) {
                    let args = self.call_args()?;
                    let span = span.merge(self.prev_span());
                    return Ok(Expr::new(ExprKind::Call { name, args }, span));
                }
                ExprKind::Ident(name)
            }
            TokenKind::ListOpen => {
                self.advance();
                let mut items = Vec::new();
                while !self.at(&TokenKind::ListClose) && !self.at(&TokenKind::Eof) {
                    items.push(self.expression()?);
                }
                self.expect(&TokenKind::ListClose)?;
                let span = span.merge(self.prev_span());
                return Ok(Expr::new(ExprKind::List(items), span));
            }
            TokenKind::ParenOpen => {
                self.advance();
                let inner = self.expression()?;
                self.expect(&TokenKind::ParenClose)?;
                return Ok(inner);
            }
            other => return Err(expected_expression(other, span)),
        };

        Ok(Expr::new(kind, span))
    }

    /// `🤜 expr* 🤛` — whitespace-separated argument expressions.
    pub(crate) fn call_args(&mut self) -> Result<Vec<Expr>, Diagnostic> {
        self.expect(&TokenKind::ParenOpen)?;
        let mut args = Vec::new();
        while !self.at(&TokenKind::ParenClose) && !self.at(&TokenKind::Eof) {
            args.push(self.expression()?);
        }
        self.expect(&TokenKind::ParenClose)?;
        Ok(args)
    }
}

/// Build a binary node spanning both operands.
fn binary(op: BinaryOp, lhs: Expr, rhs: Expr) -> Expr {
    let span = lhs.span.merge(rhs.span);
    Expr::new(
        ExprKind::Binary {
            op,
            lhs: Box::new(lhs),
            rhs: Box::new(rhs),
        },
        span,
    )
}
