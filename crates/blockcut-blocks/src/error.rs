//! Error types for blockcut-blocks

use std::path::PathBuf;

use crate::markers::MarkerKind;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Filesystem error: {0}")]
    Fs(#[from] blockcut_fs::Error),

    #[error("The {which} marker must not be empty")]
    EmptyMarker { which: MarkerKind },

    #[error("Start marker {marker:?} not found in {path}")]
    StartMarkerNotFound { path: PathBuf, marker: String },

    #[error("Block starting at line {start_line} in {path} has no end marker {marker:?}")]
    UnterminatedBlock {
        path: PathBuf,
        start_line: usize,
        marker: String,
    },
}
