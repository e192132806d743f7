//! Console abstraction for `🖨️` and `👀`.
//!
//! The interpreter never touches stdin/stdout directly; it goes through a
//! [`Console`], which is either the real standard streams or an in-memory
//! capture used by tests.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::io::{self, BufRead, Write};
use std::rc::Rc;

use pict_diagnostic::Diagnostic;

use crate::errors;

/// Where `🖨️` writes and `👀` reads.
pub enum Console {
    /// The process's standard streams.
    Std,
    /// In-memory capture for tests.
    Capture(CaptureConsole),
}

impl Console {
    /// Print `line` followed by a newline.
    pub fn println(&self, line: &str) -> Result<(), Diagnostic> {
        match self {
            Console::Std => {
                let stdout = io::stdout();
                let mut out = stdout.lock();
                writeln!(out, "{line}").map_err(|e| errors::console_write_failed(&e))?;
                Ok(())
            }
            Console::Capture(capture) => {
                let mut output = capture.output.borrow_mut();
                output.push_str(line);
                output.push('\n');
                Ok(())
            }
        }
    }

    /// Read one line, without the trailing newline.
    pub fn read_line(&self) -> Result<String, Diagnostic> {
        match self {
            Console::Std => {
                let mut line = String::new();
                let read = io::stdin()
                    .lock()
                    .read_line(&mut line)
                    .map_err(|e| errors::console_read_failed(&e.to_string()))?;
                if read == 0 {
                    return Err(errors::console_read_failed("end of input"));
                }
                if line.ends_with('\n') {
                    line.pop();
                    if line.ends_with('\r') {
                        line.pop();
                    }
                }
                Ok(line)
            }
            Console::Capture(capture) => capture
                .input
                .borrow_mut()
                .pop_front()
                .ok_or_else(|| errors::console_read_failed("no scripted input left")),
        }
    }
}

/// Scripted console: queued input lines in, accumulated output text out.
///
/// Clones share the same buffers, so a test can keep a handle while the
/// interpreter owns another.
#[derive(Clone, Default)]
pub struct CaptureConsole {
    output: Rc<RefCell<String>>,
    input: Rc<RefCell<VecDeque<String>>>,
}

impl CaptureConsole {
    pub fn new() -> Self {
        CaptureConsole::default()
    }

    /// Queue a line for the next `👀`.
    pub fn push_input(&self, line: impl Into<String>) {
        self.input.borrow_mut().push_back(line.into());
    }

    /// Everything printed so far.
    pub fn output(&self) -> String {
        self.output.borrow().clone()
    }
}
