//! `⚙️` resolution.
//!
//! An import runs the whole front end on the referenced file and merges its
//! top-level declarations and function definitions into the importing
//! program's global scope. Paths resolve relative to the importing file.
//! Cycles are fatal; a file reached twice through different routes loads
//! once.

use std::fs;

use tracing::trace;

use pict_diagnostic::Diagnostic;
use pict_ir::{Program, StmtKind};

use crate::interpreter::Interpreter;
use crate::{errors, Env};

impl Interpreter {
    /// Load `path_str` (relative to the current file's directory) into
    /// `globals`. Idempotent per canonical path.
    pub(crate) fn import_file(&self, path_str: &str, globals: &Env) -> Result<(), Diagnostic> {
        let full = self.base_dir.borrow().join(path_str);
        let canonical = full
            .canonicalize()
            .map_err(|e| errors::import_not_found(path_str, &e))?;

        if self.loading.borrow().contains(&canonical) {
            return Err(errors::import_cycle(path_str));
        }
        if self.loaded.borrow().contains(&canonical) {
            return Ok(());
        }

        trace!(path = path_str, "import");
        let source = fs::read_to_string(&canonical)
            .map_err(|e| errors::import_not_found(path_str, &e))?;
        // Front-end errors in the imported file point into its source, not
        // the importer's, so they are reported by file name instead of span.
        let tokens =
            pict_lexer::tokenize(&source).map_err(|e| errors::in_imported_file(path_str, e))?;
        let program =
            pict_parse::parse(&tokens).map_err(|e| errors::in_imported_file(path_str, e))?;

        self.loading.borrow_mut().push(canonical.clone());
        let own_dir = canonical
            .parent()
            .map(|p| p.to_path_buf())
            .unwrap_or_default();
        let saved_dir = std::mem::replace(&mut *self.base_dir.borrow_mut(), own_dir);

        let result = self.load_top_level(&program, globals);

        *self.base_dir.borrow_mut() = saved_dir;
        self.loading.borrow_mut().pop();
        result.map_err(|e| errors::in_imported_file(path_str, e))?;

        self.loaded.borrow_mut().insert(canonical);
        Ok(())
    }

    /// Merge an imported program's bindings: its own imports first, then its
    /// top-level declarations and function definitions. Other statements in
    /// an imported file do not run.
    fn load_top_level(&self, program: &Program, globals: &Env) -> Result<(), Diagnostic> {
        for stmt in &program.stmts {
            if let StmtKind::Import { path } = &stmt.kind {
                self.import_file(path, globals)?;
            }
        }
        for stmt in &program.stmts {
            match &stmt.kind {
                StmtKind::Declare { .. } | StmtKind::FunctionDef { .. } => {
                    self.exec_stmt(stmt, globals)?;
                }
                _ => {}
            }
        }
        Ok(())
    }
}
