//! Pict CLI commands.
//!
//! Each command reads a source file, drives the pipeline as far as it needs,
//! and reports any diagnostic against the original source. Commands return
//! the process exit code instead of calling `exit` so tests can invoke them.

use std::path::Path;

use pict_diagnostic::{emitter, Diagnostic, ErrorKind};
use pict_eval::{Console, Interpreter};

/// Run a program: lex, parse, evaluate.
pub fn run_file(path: &str) -> i32 {
    let source = match read_source(path) {
        Ok(source) => source,
        Err(diag) => {
            eprintln!("{diag}");
            return 1;
        }
    };
    let result = pict_lexer::tokenize(&source)
        .and_then(|tokens| pict_parse::parse(&tokens))
        .and_then(|program| {
            Interpreter::new(Console::Std).run(&program, Path::new(path))
        });
    report(result, path, &source)
}

/// Tokenize a file and print one token per line.
pub fn lex_file(path: &str) -> i32 {
    let source = match read_source(path) {
        Ok(source) => source,
        Err(diag) => {
            eprintln!("{diag}");
            return 1;
        }
    };
    match pict_lexer::tokenize(&source) {
        Ok(tokens) => {
            for token in &tokens {
                println!("{:<12} {}", format!("{:?}", token.span), token.kind);
            }
            0
        }
        Err(diag) => {
            eprintln!("{}", emitter::render(&diag, path, &source));
            1
        }
    }
}

/// Parse a file and print the tree.
pub fn parse_file(path: &str) -> i32 {
    let source = match read_source(path) {
        Ok(source) => source,
        Err(diag) => {
            eprintln!("{diag}");
            return 1;
        }
    };
    let result = pict_lexer::tokenize(&source).and_then(|tokens| pict_parse::parse(&tokens));
    match result {
        Ok(program) => {
            println!("{program:#?}");
            0
        }
        Err(diag) => {
            eprintln!("{}", emitter::render(&diag, path, &source));
            1
        }
    }
}

fn read_source(path: &str) -> Result<String, Diagnostic> {
    std::fs::read_to_string(path).map_err(|e| {
        Diagnostic::new(ErrorKind::File, format!("cannot read '{path}': {e}"))
    })
}

fn report(result: Result<(), Diagnostic>, path: &str, source: &str) -> i32 {
    match result {
        Ok(()) => 0,
        Err(diag) => {
            eprintln!("{}", emitter::render(&diag, path, source));
            1
        }
    }
}

#[cfg(test)]
mod tests;
