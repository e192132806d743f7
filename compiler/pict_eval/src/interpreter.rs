//! The statement walker.
//!
//! Execution is a recursive descent over the AST. `🔙` does not unwind via
//! errors; every statement yields a [`Flow`] and callers propagate
//! `Flow::Return` outward until a function-call boundary consumes it. Errors
//! are raised spanless by the helpers and stamped with the nearest statement
//! or expression span on the way out (`Diagnostic::or_span`).

use std::cell::RefCell;
use std::path::{Path, PathBuf};
use std::thread;
use std::time::Duration;

use rustc_hash::FxHashSet;
use tracing::trace;

use pict_diagnostic::Diagnostic;
use pict_ir::{BinaryOp, Block, Expr, ExprKind, Program, Stmt, StmtKind};

use crate::{coerce, default_value, errors, Console, Env, FunctionValue, Value};

/// How a statement finished.
#[derive(Clone, Debug)]
pub enum Flow {
    /// Fell through; continue with the next statement.
    Normal,
    /// A `🔙` fired; unwind to the enclosing call.
    Return(Value),
}

/// Runs a parsed program against a console.
pub struct Interpreter {
    console: Console,
    /// Directory imports resolve against: the directory of the file whose
    /// statements are currently executing.
    pub(crate) base_dir: RefCell<PathBuf>,
    /// Canonical paths of files whose imports are being resolved right now.
    /// A path reappearing here is an import cycle.
    pub(crate) loading: RefCell<Vec<PathBuf>>,
    /// Canonical paths already merged; repeat imports are no-ops.
    pub(crate) loaded: RefCell<FxHashSet<PathBuf>>,
}

impl Interpreter {
    pub fn new(console: Console) -> Self {
        Interpreter {
            console,
            base_dir: RefCell::new(PathBuf::from(".")),
            loading: RefCell::new(Vec::new()),
            loaded: RefCell::new(FxHashSet::default()),
        }
    }

    /// Execute a whole program. `source_path` anchors relative imports.
    pub fn run(&self, program: &Program, source_path: &Path) -> Result<(), Diagnostic> {
        let canonical = source_path
            .canonicalize()
            .unwrap_or_else(|_| source_path.to_path_buf());
        if let Some(dir) = canonical.parent() {
            *self.base_dir.borrow_mut() = dir.to_path_buf();
        }
        self.loading.borrow_mut().push(canonical.clone());

        let globals = Env::global();

        // Imports run before the importer's own statements, wherever they
        // appear at the top level.
        for stmt in &program.stmts {
            if let StmtKind::Import { path } = &stmt.kind {
                self.import_file(path, &globals)
                    .map_err(|e| e.or_span(stmt.span))?;
            }
        }

        for stmt in &program.stmts {
            if matches!(stmt.kind, StmtKind::Import { .. }) {
                continue;
            }
            let flow = self
                .exec_stmt(stmt, &globals)
                .map_err(|e| e.or_span(stmt.span))?;
            if matches!(flow, Flow::Return(_)) {
                return Err(errors::return_outside_function().with_span(stmt.span));
            }
        }

        self.loading.borrow_mut().pop();
        Ok(())
    }

    /// Run a block's statements in a fresh child scope.
    fn exec_block(&self, block: &Block, env: &Env) -> Result<Flow, Diagnostic> {
        let scope = env.child();
        self.exec_stmts(&block.stmts, &scope)
    }

    fn exec_stmts(&self, stmts: &[Stmt], env: &Env) -> Result<Flow, Diagnostic> {
        for stmt in stmts {
            let flow = self
                .exec_stmt(stmt, env)
                .map_err(|e| e.or_span(stmt.span))?;
            if matches!(flow, Flow::Return(_)) {
                return Ok(flow);
            }
        }
        Ok(Flow::Normal)
    }

    pub(crate) fn exec_stmt(&self, stmt: &Stmt, env: &Env) -> Result<Flow, Diagnostic> {
        match &stmt.kind {
            StmtKind::Declare { ty, name, init } => {
                let value = match init {
                    Some(expr) => self.eval_expr(expr, env)?,
                    None => default_value(*ty),
                };
                let value = coerce(value, *ty)?;
                env.define(name, value)
                    .map_err(|_| errors::already_declared(name))?;
                Ok(Flow::Normal)
            }
            StmtKind::Assign { name, value } => {
                let value = self.eval_expr(value, env)?;
                env.assign(name, value)
                    .map_err(|_| errors::undefined_variable(name))?;
                Ok(Flow::Normal)
            }
            StmtKind::Print(expr) => {
                let value = self.eval_expr(expr, env)?;
                self.console.println(&value.to_string())?;
                Ok(Flow::Normal)
            }
            StmtKind::Read(name) => {
                // The target must exist before any input is consumed.
                if !env.is_bound(name) {
                    return Err(errors::undefined_variable(name));
                }
                let line = self.console.read_line()?;
                env.assign(name, Value::Str(line))
                    .map_err(|_| errors::undefined_variable(name))?;
                Ok(Flow::Normal)
            }
            StmtKind::If { arms, else_block } => {
                for (cond, body) in arms {
                    if self.eval_condition(cond, env)? {
                        return self.exec_block(body, env);
                    }
                }
                match else_block {
                    Some(body) => self.exec_block(body, env),
                    None => Ok(Flow::Normal),
                }
            }
            StmtKind::While { cond, body } => {
                while self.eval_condition(cond, env)? {
                    // One scope per iteration.
                    let flow = self.exec_block(body, env)?;
                    if matches!(flow, Flow::Return(_)) {
                        return Ok(flow);
                    }
                }
                Ok(Flow::Normal)
            }
            StmtKind::ForEach { var, list, body } => {
                let value = self.eval_expr(list, env)?;
                let Value::List(items) = &value else {
                    return Err(errors::foreach_requires_list(&value).with_span(list.span));
                };
                // Iterate over a snapshot so body mutations of the list
                // cannot skip or repeat elements.
                let snapshot: Vec<Value> = items.borrow().clone();
                for item in snapshot {
                    let scope = env.child();
                    env_define_fresh(&scope, var, item)?;
                    let flow = self.exec_stmts(&body.stmts, &scope)?;
                    if matches!(flow, Flow::Return(_)) {
                        return Ok(flow);
                    }
                }
                Ok(Flow::Normal)
            }
            StmtKind::Block(block) => self.exec_block(block, env),
            StmtKind::FunctionDef { name, params, body } => {
                let func = Value::Function(std::rc::Rc::new(FunctionValue {
                    name: name.clone(),
                    params: params.clone(),
                    body: body.clone(),
                    env: env.clone(),
                }));
                env.define(name, func)
                    .map_err(|_| errors::already_declared(name))?;
                Ok(Flow::Normal)
            }
            StmtKind::Return(expr) => {
                let value = match expr {
                    Some(expr) => self.eval_expr(expr, env)?,
                    None => Value::Unit,
                };
                Ok(Flow::Return(value))
            }
            StmtKind::Call { name, args } => {
                self.call_function(name, args, env)?;
                Ok(Flow::Normal)
            }
            StmtKind::ListAppend { list, item } => {
                let target = self.eval_expr(list, env)?;
                let Value::List(items) = &target else {
                    return Err(errors::not_a_list(&target).with_span(list.span));
                };
                let item = self.eval_expr(item, env)?;
                items.borrow_mut().push(item);
                Ok(Flow::Normal)
            }
            StmtKind::ListRemoveAt { list, index } => {
                let target = self.eval_expr(list, env)?;
                let Value::List(items) = &target else {
                    return Err(errors::not_a_list(&target).with_span(list.span));
                };
                let position = self.eval_index(index, env, items)?;
                items.borrow_mut().remove(position);
                Ok(Flow::Normal)
            }
            StmtKind::FileSave { content, path } => {
                let (text, path) = self.eval_file_args(content, path, env)?;
                std::fs::write(&path, text)
                    .map_err(|e| errors::file_failed("write", &path, &e))?;
                Ok(Flow::Normal)
            }
            StmtKind::FileAppend { content, path } => {
                use std::io::Write as _;
                let (text, path) = self.eval_file_args(content, path, env)?;
                let mut file = std::fs::OpenOptions::new()
                    .create(true)
                    .append(true)
                    .open(&path)
                    .map_err(|e| errors::file_failed("open", &path, &e))?;
                file.write_all(text.as_bytes())
                    .map_err(|e| errors::file_failed("append to", &path, &e))?;
                Ok(Flow::Normal)
            }
            StmtKind::FileRead { path, target } => {
                let path_value = self.eval_expr(path, env)?;
                let Value::Str(path_str) = &path_value else {
                    return Err(errors::path_not_string(&path_value).with_span(path.span));
                };
                let content = std::fs::read_to_string(path_str)
                    .map_err(|e| errors::file_failed("read", path_str, &e))?;
                env.assign(target, Value::Str(content))
                    .map_err(|_| errors::undefined_variable(target))?;
                Ok(Flow::Normal)
            }
            // Top-level imports are hoisted by `run`; the loaded set makes
            // re-execution here a no-op.
            StmtKind::Import { path } => {
                self.import_file(path, env)?;
                Ok(Flow::Normal)
            }
            StmtKind::Sleep(expr) => {
                let value = self.eval_expr(expr, env)?;
                let Some(seconds) = value.as_real() else {
                    return Err(errors::sleep_requires_number(&value).with_span(expr.span));
                };
                if !seconds.is_finite() {
                    return Err(errors::nonfinite_sleep(seconds).with_span(expr.span));
                }
                if seconds < 0.0 {
                    return Err(errors::negative_sleep(seconds).with_span(expr.span));
                }
                thread::sleep(Duration::from_secs_f64(seconds));
                Ok(Flow::Normal)
            }
        }
    }

    /// Evaluate an `🤔`/`🔁` condition, which must be a bool.
    fn eval_condition(&self, cond: &Expr, env: &Env) -> Result<bool, Diagnostic> {
        match self.eval_expr(cond, env)? {
            Value::Bool(b) => Ok(b),
            other => Err(errors::condition_not_bool(&other).with_span(cond.span)),
        }
    }

    pub(crate) fn eval_expr(&self, expr: &Expr, env: &Env) -> Result<Value, Diagnostic> {
        match &expr.kind {
            ExprKind::Int(v) => Ok(Value::Int(*v)),
            ExprKind::Real(v) => Ok(Value::Real(*v)),
            ExprKind::Str(s) => Ok(Value::Str(s.clone())),
            ExprKind::Bool(b) => Ok(Value::Bool(*b)),
            ExprKind::Ident(name) => env
                .lookup(name)
                .ok_or_else(|| errors::undefined_variable(name).with_span(expr.span)),
            ExprKind::List(items) => {
                let mut values = Vec::with_capacity(items.len());
                for item in items {
                    values.push(self.eval_expr(item, env)?);
                }
                Ok(Value::list(values))
            }
            ExprKind::Binary { op, lhs, rhs } => match op {
                BinaryOp::And | BinaryOp::Or => self.eval_short_circuit(*op, lhs, rhs, env),
                _ => {
                    let left = self.eval_expr(lhs, env)?;
                    let right = self.eval_expr(rhs, env)?;
                    crate::evaluate_binary(*op, &left, &right).map_err(|e| e.or_span(expr.span))
                }
            },
            ExprKind::Unary { op, operand } => {
                let value = self.eval_expr(operand, env)?;
                crate::evaluate_unary(*op, &value).map_err(|e| e.or_span(expr.span))
            }
            ExprKind::Call { name, args } => self
                .call_function(name, args, env)
                .map_err(|e| e.or_span(expr.span)),
            ExprKind::Index { list, index } => {
                let target = self.eval_expr(list, env)?;
                let Value::List(items) = &target else {
                    return Err(errors::not_a_list(&target).with_span(list.span));
                };
                let position = self.eval_index(index, env, items)?;
                let item = items.borrow()[position].clone();
                Ok(item)
            }
        }
    }

    /// `🤝` and `🙌` skip the right operand when the left decides.
    fn eval_short_circuit(
        &self,
        op: BinaryOp,
        lhs: &Expr,
        rhs: &Expr,
        env: &Env,
    ) -> Result<Value, Diagnostic> {
        let left = self.eval_expr(lhs, env)?;
        let Value::Bool(a) = left else {
            return Err(errors::logical_operand_not_bool(op, &left).with_span(lhs.span));
        };
        let decided = match op {
            BinaryOp::And => !a,
            _ => a,
        };
        if decided {
            return Ok(Value::Bool(a));
        }
        let right = self.eval_expr(rhs, env)?;
        let Value::Bool(b) = right else {
            return Err(errors::logical_operand_not_bool(op, &right).with_span(rhs.span));
        };
        Ok(Value::Bool(b))
    }

    /// Evaluate an index expression for `items`. The index expression can
    /// itself mutate the list (a call that removes elements, say), so the
    /// bound is checked against the length after evaluation, not before.
    fn eval_index(
        &self,
        index: &Expr,
        env: &Env,
        items: &RefCell<Vec<Value>>,
    ) -> Result<usize, Diagnostic> {
        let value = self.eval_expr(index, env)?;
        let Value::Int(i) = value else {
            return Err(errors::index_not_int(&value).with_span(index.span));
        };
        let len = items.borrow().len();
        if i < 0 || i as usize >= len {
            return Err(errors::index_out_of_bounds(i, len).with_span(index.span));
        }
        Ok(i as usize)
    }

    fn eval_file_args(
        &self,
        content: &Expr,
        path: &Expr,
        env: &Env,
    ) -> Result<(String, String), Diagnostic> {
        let text = self.eval_expr(content, env)?.to_string();
        let path_value = self.eval_expr(path, env)?;
        let Value::Str(path_str) = path_value else {
            return Err(errors::path_not_string(&path_value).with_span(path.span));
        };
        Ok((text, path_str))
    }

    /// Invoke a named function. Arguments evaluate in the caller's scope;
    /// the body runs in a child of the closure's captured scope.
    fn call_function(&self, name: &str, args: &[Expr], env: &Env) -> Result<Value, Diagnostic> {
        let callee = env
            .lookup(name)
            .ok_or_else(|| errors::undefined_function(name))?;
        let Value::Function(func) = &callee else {
            return Err(errors::not_callable(name, &callee));
        };
        if args.len() != func.params.len() {
            return Err(errors::arity_mismatch(name, func.params.len(), args.len()));
        }
        let mut values = Vec::with_capacity(args.len());
        for arg in args {
            values.push(self.eval_expr(arg, env)?);
        }
        trace!(function = name, args = args.len(), "call");
        // Deep recursion grows the stack instead of overflowing it.
        stacker::maybe_grow(64 * 1024, 1024 * 1024, || {
            let scope = func.env.child();
            for (param, value) in func.params.iter().zip(values) {
                env_define_fresh(&scope, param, value)?;
            }
            match self.exec_stmts(&func.body.stmts, &scope)? {
                Flow::Return(value) => Ok(value),
                Flow::Normal => Ok(Value::Unit),
            }
        })
    }
}

/// Define into a scope known to be freshly created.
fn env_define_fresh(scope: &Env, name: &str, value: Value) -> Result<(), Diagnostic> {
    scope
        .define(name, value)
        .map_err(|_| errors::already_declared(name))
}
