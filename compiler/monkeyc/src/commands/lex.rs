//! The `lex` command: print the token stream for a source file.

use std::fmt::Write as _;

use monkey_ir::{Token, TokenKind};
use monkey_lexer::Scanner;

use super::{read_source, CliError};

/// Options for `monkey lex`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LexOptions {
    /// Print the trailing `EndOfInput` token as well.
    pub with_eof: bool,
    /// Print token kinds only, without literals.
    pub kinds_only: bool,
}

/// Parse the arguments following `lex` into a path and options.
///
/// Exactly one positional argument is expected. `-` means standard input.
pub fn parse_lex_options(args: &[String]) -> Result<(String, LexOptions), CliError> {
    let mut options = LexOptions::default();
    let mut path = None;

    for arg in args {
        match arg.as_str() {
            "--with-eof" => options.with_eof = true,
            "--kinds" => options.kinds_only = true,
            flag if flag.starts_with("--") => {
                return Err(CliError::UnknownOption(flag.to_string()));
            }
            positional if path.is_none() => path = Some(positional.to_string()),
            extra => return Err(CliError::UnknownOption(extra.to_string())),
        }
    }

    let path = path.ok_or(CliError::MissingPath)?;
    Ok((path, options))
}

/// Render the token stream for `source`, one token per line.
pub fn lex_source(source: &str, options: &LexOptions) -> String {
    let mut scanner = Scanner::new(source);
    let mut out = String::new();
    let mut illegal = 0usize;

    loop {
        let token = scanner.next_token();
        let done = token.is_eof();
        if token.kind == TokenKind::Illegal {
            illegal += 1;
        }
        if !done || options.with_eof {
            write_token(&mut out, &token, options);
        }
        if done {
            break;
        }
    }

    if illegal > 0 {
        tracing::debug!(illegal, "source contains illegal bytes");
    }
    out
}

fn write_token(out: &mut String, token: &Token, options: &LexOptions) {
    // Writing to a String cannot fail.
    let _ = if options.kinds_only {
        writeln!(out, "{:?}", token.kind)
    } else {
        writeln!(out, "{token}")
    };
}

/// Load `path` and print its tokens to stdout.
#[tracing::instrument(level = "debug", skip(options))]
pub fn lex_file(path: &str, options: &LexOptions) -> Result<(), CliError> {
    let source = read_source(path)?;
    print!("{}", lex_source(&source, options));
    Ok(())
}

/// Entry point for `monkey lex <file|-> [--with-eof] [--kinds]`.
pub fn lex_command(args: &[String]) -> Result<(), CliError> {
    let (path, options) = parse_lex_options(args)?;
    lex_file(&path, &options)
}
