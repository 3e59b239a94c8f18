//! Error types.
//!
//! The analysis core never surfaces these to its caller: a [`ParseFailure`]
//! only selects the fallback counting path. [`InputError`] belongs to the
//! boundary (runner/CLI) that rejects inputs before they reach the core.

use std::path::PathBuf;
use thiserror::Error;

/// A structural parse that could not produce a trustworthy tree.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseFailure {
    #[error("syntax error at line {line}, column {column}")]
    Syntax { line: usize, column: usize },
    #[error("grammar error: {0}")]
    Grammar(String),
    #[error("no structural parser available for {0}")]
    Unavailable(&'static str),
}

/// Input rejected before analysis.
#[derive(Error, Debug)]
pub enum InputError {
    #[error("content is {len} characters, limit is {limit}")]
    TooLarge { len: usize, limit: usize },
    #[error("reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("{path} is not valid UTF-8")]
    NotUtf8 { path: PathBuf },
}
