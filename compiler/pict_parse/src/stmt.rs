//! Statement parsing.

use crate::Parser;
use pict_diagnostic::{bad_identifier_statement, expected_token, unexpected_token, Diagnostic};
use pict_ir::{Block, DeclType, Expr, Stmt, StmtKind, TokenKind};

impl Parser<'_> {
    /// Parse statements until `end` (exclusive). Hitting `🌳` or `Eof` first
    /// leaves the error to the caller's `expect(end)`, so an unclosed block
    /// reports the missing `📦⛔` rather than a bogus statement error.
    pub(crate) fn statements_until(
        &mut self,
        end: &TokenKind,
    ) -> Result<Vec<Stmt>, Diagnostic> {
        let mut stmts = Vec::new();
        while !self.at(end) && !self.at(&TokenKind::ProgramEnd) && !self.at(&TokenKind::Eof) {
            stmts.push(self.statement()?);
        }
        Ok(stmts)
    }

    /// Dispatch on the statement's leading token.
    fn statement(&mut self) -> Result<Stmt, Diagnostic> {
        let start = self.current().span;
        tracing::trace!(token = %self.current().kind, "statement");

        let kind = match &self.current().kind {
            TokenKind::IntDecl => self.declare(DeclType::Int)?,
            TokenKind::RealDecl => self.declare(DeclType::Real)?,
            TokenKind::StrDecl => self.declare(DeclType::Str)?,
            TokenKind::ListDecl => self.declare(DeclType::List)?,
            TokenKind::Print => self.print_stmt()?,
            TokenKind::Read => self.read_stmt()?,
            TokenKind::If => self.if_stmt()?,
            TokenKind::While => self.while_stmt()?,
            TokenKind::ForEach => self.foreach_stmt()?,
            TokenKind::BlockOpen => StmtKind::Block(self.block()?),
            TokenKind::Fn => self.function_def()?,
            TokenKind::Return => self.return_stmt()?,
            TokenKind::Import => self.import_stmt()?,
            TokenKind::FileSave => self.file_write(false)?,
            TokenKind::FileAppend => self.file_write(true)?,
            TokenKind::FileRead => self.file_read()?,
            TokenKind::Sleep => self.sleep_stmt()?,
            TokenKind::Ident(_) => self.identifier_stmt()?,
            other => return Err(unexpected_token(other, start)),
        };

        Ok(Stmt::new(kind, start.merge(self.prev_span())))
    }

    /// `📦 statement* 📦⛔`
    pub(crate) fn block(&mut self) -> Result<Block, Diagnostic> {
        self.expect(&TokenKind::BlockOpen)?;
        let stmts = self.statements_until(&TokenKind::BlockClose)?;
        self.expect(&TokenKind::BlockClose)?;
        Ok(Block { stmts })
    }

    /// `<type> name [👉 expr] 🔚`
    fn declare(&mut self, ty: DeclType) -> Result<StmtKind, Diagnostic> {
        self.advance(); // the type glyph
        let (name, _) = self.expect_ident()?;
        let init = if self.at(&TokenKind::Assign) {
            self.advance();
            Some(self.expression()?)
        } else {
            None
        };
        self.expect(&TokenKind::Terminator)?;
        Ok(StmtKind::Declare { ty, name, init })
    }

    /// `🖨️ expr 🔚`
    fn print_stmt(&mut self) -> Result<StmtKind, Diagnostic> {
        self.advance();
        let value = self.expression()?;
        self.expect(&TokenKind::Terminator)?;
        Ok(StmtKind::Print(value))
    }

    /// `👀 name 🔚`
    fn read_stmt(&mut self) -> Result<StmtKind, Diagnostic> {
        self.advance();
        let (name, _) = self.expect_ident()?;
        self.expect(&TokenKind::Terminator)?;
        Ok(StmtKind::Read(name))
    }

    /// `🤔 cond block (🔀 cond block)* [🤨 block]`
    fn if_stmt(&mut self) -> Result<StmtKind, Diagnostic> {
        self.advance();
        let mut arms = Vec::new();

        let cond = self.expression()?;
        let body = self.block()?;
        arms.push((cond, body));

        while self.at(&TokenKind::Elif) {
            self.advance();
            let cond = self.expression()?;
            let body = self.block()?;
            arms.push((cond, body));
        }

        let else_block = if self.at(&TokenKind::Else) {
            self.advance();
            Some(self.block()?)
        } else {
            None
        };

        Ok(StmtKind::If { arms, else_block })
    }

    /// `🔁 cond block`
    fn while_stmt(&mut self) -> Result<StmtKind, Diagnostic> {
        self.advance();
        let cond = self.expression()?;
        let body = self.block()?;
        Ok(StmtKind::While { cond, body })
    }

    /// `🔂 var list-expr block`
    fn foreach_stmt(&mut self) -> Result<StmtKind, Diagnostic> {
        self.advance();
        let (var, _) = self.expect_ident()?;
        let list = self.expression()?;
        let body = self.block()?;
        Ok(StmtKind::ForEach { var, list, body })
    }

    /// `🧩 name param* block` — parameters run until the block opens.
    fn function_def(&mut self) -> Result<StmtKind, Diagnostic> {
        self.advance();
        let (name, _) = self.expect_ident()?;
        let mut params = Vec::new();
        while let TokenKind::Ident(param) = &self.current().kind {
            params.push(param.clone());
            self.advance();
        }
        let body = self.block()?;
        Ok(StmtKind::FunctionDef { name, params, body })
    }

    /// `🔙 [expr] 🔚`
    fn return_stmt(&mut self) -> Result<StmtKind, Diagnostic> {
        self.advance();
        let value = if self.at(&TokenKind::Terminator) {
            None
        } else {
            Some(self.expression()?)
        };
        self.expect(&TokenKind::Terminator)?;
        Ok(StmtKind::Return(value))
    }

    /// `⚙️ "path" 🔚`
    fn import_stmt(&mut self) -> Result<StmtKind, Diagnostic> {
        self.advance();
        let current = self.current();
        let path = if let TokenKind::Str(path) = &current.kind {
            let path = path.clone();
            self.advance();
            path
        } else {
            return Err(expected_token(
                &TokenKind::Str("path".to_string()),
                &current.kind,
                current.span,
            ));
        };
        self.expect(&TokenKind::Terminator)?;
        Ok(StmtKind::Import { path })
    }

    /// `💾 content path 🔚` or `💾➕ content path 🔚`
    fn file_write(&mut self, append: bool) -> Result<StmtKind, Diagnostic> {
        self.advance();
        let content = self.expression()?;
        let path = self.expression()?;
        self.expect(&TokenKind::Terminator)?;
        Ok(if append {
            StmtKind::FileAppend { content, path }
        } else {
            StmtKind::FileSave { content, path }
        })
    }

    /// `📂 path name 🔚`
    fn file_read(&mut self) -> Result<StmtKind, Diagnostic> {
        self.advance();
        let path = self.expression()?;
        let (target, _) = self.expect_ident()?;
        self.expect(&TokenKind::Terminator)?;
        Ok(StmtKind::FileRead { path, target })
    }

    /// `⏱️ expr 🔚`
    fn sleep_stmt(&mut self) -> Result<StmtKind, Diagnostic> {
        self.advance();
        let duration = self.expression()?;
        self.expect(&TokenKind::Terminator)?;
        Ok(StmtKind::Sleep(duration))
    }

    /// An identifier opens an assignment, a list mutation, or a call
    /// statement; one token of lookahead picks the form.
    fn identifier_stmt(&mut self) -> Result<StmtKind, Diagnostic> {
        let next = self.peek();
        match next.kind {
            TokenKind::Assign => {
                let (name, _) = self.expect_ident()?;
                self.advance(); // 👉
                let value = self.expression()?;
                self.expect(&TokenKind::Terminator)?;
                Ok(StmtKind::Assign { name, value })
            }
            TokenKind::ListAppend => {
                let list = self.ident_expr()?;
                self.advance(); // ➕📜
                let item = self.expression()?;
                self.expect(&TokenKind::Terminator)?;
                Ok(StmtKind::ListAppend { list, item })
            }
            TokenKind::ListRemove => {
                let list = self.ident_expr()?;
                self.advance(); // ➖📜
                let index = self.expression()?;
                self.expect(&TokenKind::Terminator)?;
                Ok(StmtKind::ListRemoveAt { list, index })
            }
            TokenKind::ParenOpen => {
                let (name, _) = self.expect_ident()?;
                let args = self.call_args()?;
                self.expect(&TokenKind::Terminator)?;
                Ok(StmtKind::Call { name, args })
            }
            ref other => Err(bad_identifier_statement(other, next.span)),
        }
    }

    /// Consume the current identifier as an expression node.
    fn ident_expr(&mut self) -> Result<Expr, Diagnostic> {
        let (name, span) = self.expect_ident()?;
        Ok(Expr::new(pict_ir::ExprKind::Ident(name), span))
    }
}
