//! Pict eval - tree-walking evaluator for Pict programs.
//!
//! # Architecture
//!
//! - [`Value`]: the runtime value union. Scalars copy; lists and functions
//!   are shared handles, so aliases observe each other's mutations.
//! - [`Env`]: the environment chain. One scope per block entry, loop
//!   iteration, and function call; closures keep their defining scope alive.
//! - [`evaluate_binary`] / [`evaluate_unary`]: enum-dispatched operator
//!   evaluation, independent of the tree walk so it can be tested directly.
//! - [`coerce`]: the typed-declaration/cast rules.
//! - [`Interpreter`]: the statement walker. Non-local `🔙` is modeled as an
//!   explicit [`Flow`] result threaded through blocks and loops and consumed
//!   at the function-call boundary.
//! - [`Console`]: the print/read capability, with a capture variant so
//!   end-to-end tests can assert on program output.
//!
//! Execution is single-threaded and synchronous; `⏱️` blocks the thread.
//! Every error is a fatal `pict_diagnostic::Diagnostic`.

mod coerce;
mod console;
mod environment;
pub mod errors;
mod import;
mod interpreter;
mod operators;
mod value;

#[cfg(test)]
mod tests;

pub use coerce::{coerce, default_value};
pub use console::{CaptureConsole, Console};
pub use environment::{AssignError, DefineError, Env};
pub use interpreter::{Flow, Interpreter};
pub use operators::{evaluate_binary, evaluate_unary};
pub use value::{FunctionValue, Value};
