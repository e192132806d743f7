//! Terminal rendering for diagnostics.
//!
//! Produces the human-readable report the CLI writes to stderr:
//!
//! ```text
//! error[parse]: expected '🔚', found '🌳'
//!   --> demo.pict:4:9
//!    |
//!  4 | 🖨️ "hi" 🌳
//!    |
//! ```

use crate::span_utils::{line_col, line_text};
use crate::Diagnostic;

/// Render a diagnostic against the source it was raised from.
///
/// `file` is the display path; `source` the full text of that file. When the
/// diagnostic has no span only the headline is produced.
pub fn render(diag: &Diagnostic, file: &str, source: &str) -> String {
    let mut out = format!("error[{}]: {}", diag.kind, diag.message);
    if let Some(span) = diag.span {
        let (line, col) = line_col(source, span.start);
        out.push_str(&format!("\n  --> {file}:{line}:{col}"));
        let text = line_text(source, span.start);
        if !text.trim().is_empty() {
            let gutter = line.to_string();
            let pad = " ".repeat(gutter.len());
            out.push_str(&format!(
                "\n {pad}|\n {gutter} | {}\n {pad}|",
                text.trim_end()
            ));
        }
    }
    out
}
