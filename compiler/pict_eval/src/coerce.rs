//! Coercion rules for typed declarations.
//!
//! A declaration glyph (`🔢`, `👽`, `💬`, `📜`) is also a cast: the
//! initializer is coerced to the target type at binding time. Strings parse
//! into numbers (after trimming), numbers stringify, but a real never
//! silently truncates to an int.

use pict_diagnostic::Diagnostic;
use pict_ir::DeclType;

use crate::{errors, Value};

/// The value a declaration without an initializer binds.
pub fn default_value(ty: DeclType) -> Value {
    match ty {
        DeclType::Int => Value::Int(0),
        DeclType::Real => Value::Real(0.0),
        DeclType::Str => Value::Str(String::new()),
        DeclType::List => Value::list(vec![]),
    }
}

/// Coerce `value` to `ty`, or fail with a type error.
pub fn coerce(value: Value, ty: DeclType) -> Result<Value, Diagnostic> {
    match ty {
        DeclType::Int => match &value {
            Value::Int(_) => Ok(value),
            Value::Str(s) => match s.trim().parse::<i64>() {
                Ok(v) => Ok(Value::Int(v)),
                Err(_) => Err(errors::coercion_failed(&value, ty)),
            },
            // A real does not silently truncate.
            _ => Err(errors::coercion_failed(&value, ty)),
        },
        DeclType::Real => match &value {
            Value::Real(_) => Ok(value),
            Value::Int(v) => Ok(Value::Real(*v as f64)),
            Value::Str(s) => match s.trim().parse::<f64>() {
                Ok(v) => Ok(Value::Real(v)),
                Err(_) => Err(errors::coercion_failed(&value, ty)),
            },
            _ => Err(errors::coercion_failed(&value, ty)),
        },
        DeclType::Str => Ok(Value::Str(value.to_string())),
        // A list declaration binds the handle itself; the new name aliases
        // the same storage.
        DeclType::List => match value {
            Value::List(_) => Ok(value),
            other => Err(errors::coercion_failed(&other, ty)),
        },
    }
}
