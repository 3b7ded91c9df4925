//! Errors for the input surfaces: word-list files and board files.
//!
//! The solver itself never fails; see [`Boggle::solve`](crate::board::boggle::Boggle::solve).

use std::io;
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("line {line}: expected letter tiles separated by spaces, found {content:?}")]
    BoardSyntax { line: usize, content: String },

    #[error("invalid JSON board in {}: {source}", .path.display())]
    BoardJson {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("line {line}: no column {column} in {content:?}")]
    MissingColumn {
        line: usize,
        column: usize,
        content: String,
    },
}
