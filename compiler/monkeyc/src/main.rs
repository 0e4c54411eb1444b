//! Monkey CLI
//!
//! Command-line interface for the Monkey front end.

use monkeyc::commands::lex_command;

fn main() {
    monkeyc::init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    let command = args[1].as_str();
    tracing::debug!(command, "dispatch");

    match command {
        "lex" => {
            if let Err(err) = lex_command(&args[2..]) {
                eprintln!("error: {err}");
                std::process::exit(1);
            }
        }
        "help" | "--help" | "-h" => print_usage(),
        "version" | "--version" | "-V" => {
            println!("monkey {}", env!("CARGO_PKG_VERSION"));
        }
        unknown => {
            eprintln!("Unknown command: {unknown}");
            eprintln!();
            print_usage();
            std::process::exit(1);
        }
    }
}

fn print_usage() {
    println!("Monkey front end");
    println!();
    println!("Usage: monkey <command> [options]");
    println!();
    println!("Commands:");
    println!("  lex <file|->     Print the token stream, one token per line");
    println!("  help             Show this message");
    println!("  version          Show version information");
    println!();
    println!("Lex options:");
    println!("  --with-eof       Also print the final EndOfInput token");
    println!("  --kinds          Print token kinds without literals");
    println!();
    println!("Pass '-' as the file to read from standard input.");
    println!("Set RUST_LOG (e.g. RUST_LOG=monkey_lexer=trace) for debug output.");
}
