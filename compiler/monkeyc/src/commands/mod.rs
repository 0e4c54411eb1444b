//! Command handlers for the Monkey CLI.
//!
//! Each submodule implements one command. Source loading and the shared
//! error type live here in the module root.

mod lex;

pub use lex::{lex_command, lex_file, lex_source, parse_lex_options, LexOptions};

use std::io;

use thiserror::Error;

/// Path argument that means "read standard input".
pub const STDIN_PATH: &str = "-";

/// Everything a command can fail with.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("cannot find file '{path}'")]
    NotFound { path: String },

    #[error("permission denied reading '{path}'")]
    PermissionDenied { path: String },

    #[error("'{path}' contains invalid UTF-8 data")]
    InvalidUtf8 { path: String },

    #[error("error reading '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("missing file path")]
    MissingPath,

    #[error("unknown option '{0}'")]
    UnknownOption(String),
}

impl CliError {
    fn from_io(path: &str, err: io::Error) -> Self {
        let path = path.to_string();
        match err.kind() {
            io::ErrorKind::NotFound => CliError::NotFound { path },
            io::ErrorKind::PermissionDenied => CliError::PermissionDenied { path },
            io::ErrorKind::InvalidData => CliError::InvalidUtf8 { path },
            _ => CliError::Io { path, source: err },
        }
    }
}

/// Read a source file, or standard input when `path` is [`STDIN_PATH`].
#[tracing::instrument(level = "debug")]
pub fn read_source(path: &str) -> Result<String, CliError> {
    let content = if path == STDIN_PATH {
        io::read_to_string(io::stdin())
    } else {
        std::fs::read_to_string(path)
    }
    .map_err(|err| CliError::from_io(path, err))?;

    tracing::debug!(bytes = content.len(), "source loaded");
    Ok(content)
}
