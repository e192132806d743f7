//! Abstract syntax tree for Pict programs.
//!
//! The tree is strictly owned parent-to-child (no back-edges). Statements and
//! expressions carry the span of their source text so the evaluator can
//! report positions without re-parsing.

use super::Span;
use std::fmt;

/// A complete source file: the statements between `🌱` and `🌳`.
#[derive(Clone, Debug, PartialEq)]
pub struct Program {
    pub stmts: Vec<Stmt>,
}

/// A nested statement sequence delimited by `📦` / `📦⛔`.
#[derive(Clone, Debug, PartialEq)]
pub struct Block {
    pub stmts: Vec<Stmt>,
}

/// Target type of a typed declaration (which doubles as a cast).
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum DeclType {
    /// 🔢
    Int,
    /// 👽
    Real,
    /// 💬
    Str,
    /// 📜
    List,
}

impl fmt::Display for DeclType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeclType::Int => write!(f, "int"),
            DeclType::Real => write!(f, "real"),
            DeclType::Str => write!(f, "string"),
            DeclType::List => write!(f, "list"),
        }
    }
}

/// A statement with its source span.
#[derive(Clone, Debug, PartialEq)]
pub struct Stmt {
    pub kind: StmtKind,
    pub span: Span,
}

impl Stmt {
    pub fn new(kind: StmtKind, span: Span) -> Self {
        Stmt { kind, span }
    }
}

/// Statement kinds.
#[derive(Clone, Debug, PartialEq)]
pub enum StmtKind {
    /// `🔢 name [👉 expr] 🔚` — typed declaration, coercing to the target
    /// type. Omitted initializer uses the type's default value.
    Declare {
        ty: DeclType,
        name: String,
        init: Option<Expr>,
    },
    /// `name 👉 expr 🔚`
    Assign { name: String, value: Expr },
    /// `🖨️ expr 🔚`
    Print(Expr),
    /// `👀 name 🔚` — read one console line into an existing variable.
    Read(String),
    /// `🤔 ... 🔀 ... 🤨 ...` — ordered condition/block arms plus an
    /// optional else block.
    If {
        arms: Vec<(Expr, Block)>,
        else_block: Option<Block>,
    },
    /// `🔁 cond block`
    While { cond: Expr, body: Block },
    /// `🔂 var list-expr block`
    ForEach {
        var: String,
        list: Expr,
        body: Block,
    },
    /// A bare `📦 ... 📦⛔` statement, run in a child scope.
    Block(Block),
    /// `🧩 name params... block`
    FunctionDef {
        name: String,
        params: Vec<String>,
        body: Block,
    },
    /// `🔙 [expr] 🔚`
    Return(Option<Expr>),
    /// `name 🤜 args... 🤛 🔚` — a call whose value is discarded.
    Call { name: String, args: Vec<Expr> },
    /// `name ➕📜 expr 🔚`
    ListAppend { list: Expr, item: Expr },
    /// `name ➖📜 expr 🔚`
    ListRemoveAt { list: Expr, index: Expr },
    /// `💾 content path 🔚` — create-or-truncate write.
    FileSave { content: Expr, path: Expr },
    /// `💾➕ content path 🔚` — create-or-extend write.
    FileAppend { content: Expr, path: Expr },
    /// `📂 path name 🔚` — whole file into an existing variable, as a string.
    FileRead { path: Expr, target: String },
    /// `⚙️ "path" 🔚` — merge another file's top-level bindings.
    Import { path: String },
    /// `⏱️ expr 🔚` — block for the given number of seconds.
    Sleep(Expr),
}

/// An expression with its source span.
#[derive(Clone, Debug, PartialEq)]
pub struct Expr {
    pub kind: ExprKind,
    pub span: Span,
}

impl Expr {
    pub fn new(kind: ExprKind, span: Span) -> Self {
        Expr { kind, span }
    }
}

/// Expression kinds.
#[derive(Clone, Debug, PartialEq)]
pub enum ExprKind {
    Int(i64),
    Real(f64),
    Str(String),
    Bool(bool),
    Ident(String),
    /// `🧺 items... 🧺⛔`
    List(Vec<Expr>),
    Binary {
        op: BinaryOp,
        lhs: Box<Expr>,
        rhs: Box<Expr>,
    },
    Unary {
        op: UnaryOp,
        operand: Box<Expr>,
    },
    /// `name 🤜 args... 🤛`
    Call { name: String, args: Vec<Expr> },
    /// `list-expr 🔍📜 index-expr`
    Index {
        list: Box<Expr>,
        index: Box<Expr>,
    },
}

/// Binary operators, in no particular precedence order (precedence is the
/// parser's concern).
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum BinaryOp {
    /// ➕ — numeric addition, or concatenation when either side is a string
    Add,
    /// ➖
    Sub,
    /// ✖️
    Mul,
    /// ➗ — always yields a real
    Div,
    /// ⚖️
    Eq,
    /// ⬆️
    Gt,
    /// ⬇️
    Lt,
    /// 🤝 — short-circuit
    And,
    /// 🙌 — short-circuit
    Or,
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let glyph = match self {
            BinaryOp::Add => "➕",
            BinaryOp::Sub => "➖",
            BinaryOp::Mul => "✖️",
            BinaryOp::Div => "➗",
            BinaryOp::Eq => "⚖️",
            BinaryOp::Gt => "⬆️",
            BinaryOp::Lt => "⬇️",
            BinaryOp::And => "🤝",
            BinaryOp::Or => "🙌",
        };
        write!(f, "{glyph}")
    }
}

/// Unary operators.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum UnaryOp {
    /// prefix ➖
    Neg,
    /// 🚫
    Not,
}

impl fmt::Display for UnaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UnaryOp::Neg => write!(f, "➖"),
            UnaryOp::Not => write!(f, "🚫"),
        }
    }
}
