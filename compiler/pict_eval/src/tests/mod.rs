//! End-to-end tests: source text in, console output or a diagnostic out.

mod error_tests;
mod import_tests;

use std::path::Path;

use pict_diagnostic::Diagnostic;

use crate::{CaptureConsole, Console, Interpreter};

/// Run `source` with scripted console input, returning captured output.
fn run_with_input(source: &str, input: &[&str]) -> Result<String, Diagnostic> {
    let capture = CaptureConsole::new();
    for line in input {
        capture.push_input(*line);
    }
    let interpreter = Interpreter::new(Console::Capture(capture.clone()));
    let tokens = pict_lexer::tokenize(source)?;
    let program = pict_parse::parse(&tokens)?;
    interpreter.run(&program, Path::new("main.pict"))?;
    Ok(capture.output())
}

/// Run a program expected to succeed; panic with the diagnostic otherwise.
fn run(source: &str) -> String {
    match run_with_input(source, &[]) {
        Ok(output) => output,
        Err(err) => panic!("program failed: {err}"),
    }
}

/// Run a program expected to fail; panic with its output otherwise.
fn run_err(source: &str) -> Diagnostic {
    match run_with_input(source, &[]) {
        Ok(output) => panic!("expected an error, got output {output:?}"),
        Err(err) => err,
    }
}

/// Run a failing program but keep whatever it printed before dying.
fn run_err_with_output(source: &str) -> (String, Diagnostic) {
    let capture = CaptureConsole::new();
    let interpreter = Interpreter::new(Console::Capture(capture.clone()));
    let result = pict_lexer::tokenize(source)
        .and_then(|tokens| pict_parse::parse(&tokens))
        .and_then(|program| interpreter.run(&program, Path::new("main.pict")));
    match result {
        Ok(()) => panic!("expected an error, got output {:?}", capture.output()),
        Err(err) => (capture.output(), err),
    }
}

/// Run a program from a real file so relative imports resolve.
fn run_file(path: &Path) -> Result<String, Diagnostic> {
    let capture = CaptureConsole::new();
    let interpreter = Interpreter::new(Console::Capture(capture.clone()));
    let source = std::fs::read_to_string(path).unwrap();
    let tokens = pict_lexer::tokenize(&source)?;
    let program = pict_parse::parse(&tokens)?;
    interpreter.run(&program, path)?;
    Ok(capture.output())
}
