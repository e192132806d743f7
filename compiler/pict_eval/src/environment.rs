//! Environment chain for lexical scoping.
//!
//! A scope is a name→value map plus an optional parent handle. Lookup walks
//! innermost to outermost. Scopes are created per block entry, per loop
//! iteration, and per function call; they drop when execution leaves the
//! scope unless a closure captured them.
//!
//! [`Env`] wraps `Rc<RefCell<Scope>>` behind a factory so all scope
//! allocation goes through one place. The interpreter is single-threaded,
//! hence `Rc` rather than `Arc`.

use rustc_hash::FxHashMap;
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use crate::Value;

/// Error from [`Env::define`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DefineError {
    /// The name is already bound in the current (innermost) scope.
    AlreadyDefined,
}

/// Error from [`Env::assign`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AssignError {
    /// The name is not bound in any enclosing scope.
    Undefined,
}

/// Shared handle to a scope in the environment chain.
#[derive(Clone)]
pub struct Env(Rc<RefCell<Scope>>);

struct Scope {
    bindings: FxHashMap<String, Value>,
    parent: Option<Env>,
}

impl Env {
    /// Create an empty root scope.
    pub fn global() -> Self {
        Env(Rc::new(RefCell::new(Scope {
            bindings: FxHashMap::default(),
            parent: None,
        })))
    }

    /// Create a child scope whose lookups fall back to `self`.
    pub fn child(&self) -> Self {
        Env(Rc::new(RefCell::new(Scope {
            bindings: FxHashMap::default(),
            parent: Some(self.clone()),
        })))
    }

    /// Bind a fresh name in this scope. Shadowing an outer scope is fine;
    /// redeclaring within the same scope is not.
    pub fn define(&self, name: &str, value: Value) -> Result<(), DefineError> {
        let mut scope = self.0.borrow_mut();
        if scope.bindings.contains_key(name) {
            return Err(DefineError::AlreadyDefined);
        }
        scope.bindings.insert(name.to_string(), value);
        Ok(())
    }

    /// Rebind the innermost existing binding of `name`.
    pub fn assign(&self, name: &str, value: Value) -> Result<(), AssignError> {
        let mut scope = self.0.borrow_mut();
        if let Some(slot) = scope.bindings.get_mut(name) {
            *slot = value;
            return Ok(());
        }
        match scope.parent.clone() {
            Some(parent) => {
                drop(scope);
                parent.assign(name, value)
            }
            None => Err(AssignError::Undefined),
        }
    }

    /// Look `name` up through the chain, innermost first.
    pub fn lookup(&self, name: &str) -> Option<Value> {
        let scope = self.0.borrow();
        if let Some(value) = scope.bindings.get(name) {
            return Some(value.clone());
        }
        let parent = scope.parent.clone()?;
        drop(scope);
        parent.lookup(name)
    }

    /// Is `name` bound anywhere in the chain?
    pub fn is_bound(&self, name: &str) -> bool {
        self.lookup(name).is_some()
    }
}

impl fmt::Debug for Env {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let scope = self.0.borrow();
        f.debug_struct("Env")
            .field("names", &scope.bindings.keys().collect::<Vec<_>>())
            .field("has_parent", &scope.parent.is_some())
            .finish()
    }
}
