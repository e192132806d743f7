//! Runtime values.
//!
//! Pict is dynamically typed at the value level: the static-looking
//! declaration glyphs only coerce at binding time. Scalars (`Int`, `Real`,
//! `Str`, `Bool`) have copy semantics on assignment; `List` and `Function`
//! are reference-like handles, so two variables bound to the same list see
//! each other's appends and removals until one is reassigned.

use pict_ir::Block;
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use crate::Env;

/// A runtime value.
#[derive(Clone, Debug)]
pub enum Value {
    Int(i64),
    Real(f64),
    Str(String),
    Bool(bool),
    /// Shared mutable sequence. Cloning the value clones the handle, not
    /// the backing storage.
    List(Rc<RefCell<Vec<Value>>>),
    /// A closure: parameters, body, and the environment captured at the
    /// definition site.
    Function(Rc<FunctionValue>),
    /// Absence of a value (a function with no `🔙`, or a bare `🔙 🔚`).
    Unit,
}

/// A user-defined function plus its captured environment.
#[derive(Debug)]
pub struct FunctionValue {
    pub name: String,
    pub params: Vec<String>,
    pub body: Block,
    pub env: Env,
}

impl Value {
    /// Build a list value from evaluated items.
    pub fn list(items: Vec<Value>) -> Self {
        Value::List(Rc::new(RefCell::new(items)))
    }

    /// The type name used in error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Int(_) => "int",
            Value::Real(_) => "real",
            Value::Str(_) => "string",
            Value::Bool(_) => "bool",
            Value::List(_) => "list",
            Value::Function(_) => "function",
            Value::Unit => "unit",
        }
    }

    /// Numeric view: ints widen to real, everything else is `None`.
    pub fn as_real(&self) -> Option<f64> {
        match self {
            Value::Int(v) => Some(*v as f64),
            Value::Real(v) => Some(*v),
            _ => None,
        }
    }

    /// Is this an `Int` or a `Real`?
    pub fn is_numeric(&self) -> bool {
        matches!(self, Value::Int(_) | Value::Real(_))
    }
}

/// Loose structural equality, used by `⚖️` once the operands have passed
/// the comparability check, and recursively inside lists (where mismatched
/// element categories compare unequal rather than erroring).
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Str(a), Value::Str(b)) => a == b,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::List(a), Value::List(b)) => list_eq(a, b, &mut Vec::new()),
            (Value::Function(a), Value::Function(b)) => Rc::ptr_eq(a, b),
            (Value::Unit, Value::Unit) => true,
            // Numeric comparison crosses the int/real divide.
            (a, b) => match (a.as_real(), b.as_real()) {
                (Some(x), Some(y)) => x == y,
                _ => false,
            },
        }
    }
}

impl fmt::Display for Value {
    /// The stringification used by `🖨️`, string concatenation, string
    /// casts, and file writes.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(v) => write!(f, "{v}"),
            Value::Real(v) => {
                // Reals always show a decimal point so `8.0` and `8` stay
                // distinguishable in output.
                if v.is_finite() && v.fract() == 0.0 {
                    write!(f, "{v:.1}")
                } else {
                    write!(f, "{v}")
                }
            }
            Value::Str(s) => write!(f, "{s}"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::List(items) => fmt_list(f, items, &mut Vec::new()),
            Value::Function(func) => write!(f, "<function {}>", func.name),
            Value::Unit => write!(f, "unit"),
        }
    }
}

/// Render a list, showing `[...]` where it contains itself. A list can hold
/// a handle to its own storage (`xs ➕📜 xs 🔚`), so rendering tracks the
/// lists currently being printed.
fn fmt_list(
    f: &mut fmt::Formatter<'_>,
    items: &Rc<RefCell<Vec<Value>>>,
    open: &mut Vec<*const RefCell<Vec<Value>>>,
) -> fmt::Result {
    let ptr = Rc::as_ptr(items);
    if open.contains(&ptr) {
        return write!(f, "[...]");
    }
    open.push(ptr);
    write!(f, "[")?;
    for (i, item) in items.borrow().iter().enumerate() {
        if i > 0 {
            write!(f, ", ")?;
        }
        match item {
            Value::List(inner) => fmt_list(f, inner, open)?,
            other => write!(f, "{other}")?,
        }
    }
    write!(f, "]")?;
    open.pop();
    Ok(())
}

/// Elementwise list equality. A pair already under comparison is taken as
/// equal, so mutually or self-referential lists terminate instead of
/// recursing forever.
fn list_eq(
    a: &Rc<RefCell<Vec<Value>>>,
    b: &Rc<RefCell<Vec<Value>>>,
    open: &mut Vec<(*const RefCell<Vec<Value>>, *const RefCell<Vec<Value>>)>,
) -> bool {
    if Rc::ptr_eq(a, b) {
        return true;
    }
    let pair = (Rc::as_ptr(a), Rc::as_ptr(b));
    if open.contains(&pair) {
        return true;
    }
    open.push(pair);
    let (xs, ys) = (a.borrow(), b.borrow());
    let equal = xs.len() == ys.len()
        && xs.iter().zip(ys.iter()).all(|(x, y)| match (x, y) {
            (Value::List(la), Value::List(lb)) => list_eq(la, lb, open),
            _ => x == y,
        });
    open.pop();
    equal
}

#[cfg(test)]
mod tests;
