//! Pict interpreter CLI.

use pictc::{lex_file, parse_file, run_file};

fn main() {
    init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        std::process::exit(1);
    }

    let command = &args[1];

    let code = match command.as_str() {
        "run" => {
            if args.len() < 3 {
                eprintln!("Usage: pict run <file.pict>");
                std::process::exit(1);
            }
            run_file(&args[2])
        }
        "lex" => {
            if args.len() < 3 {
                eprintln!("Usage: pict lex <file.pict>");
                std::process::exit(1);
            }
            lex_file(&args[2])
        }
        "parse" => {
            if args.len() < 3 {
                eprintln!("Usage: pict parse <file.pict>");
                std::process::exit(1);
            }
            parse_file(&args[2])
        }
        "help" | "--help" | "-h" => {
            print_usage();
            0
        }
        "version" | "--version" | "-v" => {
            println!("Pict {}", env!("CARGO_PKG_VERSION"));
            0
        }
        _ => {
            // A bare .pict path runs directly.
            if std::path::Path::new(command)
                .extension()
                .is_some_and(|ext| ext.eq_ignore_ascii_case("pict"))
            {
                run_file(command)
            } else {
                eprintln!("Unknown command: {command}");
                eprintln!();
                print_usage();
                1
            }
        }
    };

    std::process::exit(code);
}

/// Opt-in tracing via the PICT_LOG environment variable, e.g.
/// `PICT_LOG=pict_parse=trace pict run main.pict`.
fn init_tracing() {
    use tracing_subscriber::EnvFilter;
    let filter = EnvFilter::try_from_env("PICT_LOG").unwrap_or_else(|_| EnvFilter::new("off"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn print_usage() {
    println!("Pict interpreter");
    println!();
    println!("Usage: pict <command> [options]");
    println!();
    println!("Commands:");
    println!("  run <file.pict>      Run a Pict program");
    println!("  lex <file.pict>      Tokenize and display tokens");
    println!("  parse <file.pict>    Parse and display the syntax tree");
    println!("  help                 Show this help message");
    println!("  version              Show version information");
    println!();
    println!("A bare file path also runs it:");
    println!("  pict main.pict");
    println!();
    println!("Environment:");
    println!("  PICT_LOG=<filter>    Enable tracing output (e.g. pict_parse=trace)");
}
