//! Results captured from fallible standard-library calls.
//!
//! [`read_snippet`] wraps `fs::read_to_string` so the `io::Error` ends up inside a domain error
//! instead of escaping to the caller. The error keeps the path and chains the OS error as its
//! source, so its `Display` text is the same on every platform.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use miette::Diagnostic;
use thiserror::Error;

/// File the tour tries to read.
pub const TOUR_FILE: &str = "someFile";

/// Errors produced when reading a snippet file.
#[derive(Debug, Error, Diagnostic)]
pub enum ReadError {
    #[error("cannot read snippet file `{}`", path.display())]
    #[diagnostic(code(snippets::capture::unreadable), help("check that the file exists and is UTF-8 text"))]
    Unreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl ReadError {
    /// The underlying I/O error kind.
    pub fn io_kind(&self) -> io::ErrorKind {
        match self {
            ReadError::Unreadable { source, .. } => source.kind(),
        }
    }
}

/// Read `path` to a string, capturing any I/O failure as a [`ReadError`].
#[tracing::instrument(skip_all, fields(path = %path.as_ref().display()))]
pub fn read_snippet(path: impl AsRef<Path>) -> Result<String, ReadError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| ReadError::Unreadable {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(bytes = text.len(), "read snippet file");
    Ok(text)
}

/// Describe a read outcome for display.
pub fn describe_read(outcome: &Result<String, ReadError>) -> String {
    match outcome {
        Ok(text) => format!("{} bytes", text.len()),
        Err(err) => err.to_string(),
    }
}
