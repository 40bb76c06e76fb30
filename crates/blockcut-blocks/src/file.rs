//! Block removal against a file on disk.

use blockcut_fs::{NormalizedPath, io};
use tracing::{debug, info, warn};

use crate::error::{Error, Result};
use crate::markers::Markers;
use crate::remover::{RemovedBlock, remove_block_in_text};

/// What to do when the start marker is found but no end marker follows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Unterminated {
    /// Remove everything from the start marker to the end of the file.
    #[default]
    TruncateToEof,
    /// Fail with `Error::UnterminatedBlock` and leave the file untouched.
    Reject,
}

/// Options for [`remove_block_in_file`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RemoveOptions {
    pub unterminated: Unterminated,
    /// Scan and report without writing the file.
    pub dry_run: bool,
}

/// Outcome of a successful removal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemovalReport {
    pub path: NormalizedPath,
    pub block: RemovedBlock,
    /// `false` for dry runs.
    pub written: bool,
}

/// Removes the first marker-delimited block from the file at `path`.
///
/// The whole file is read into memory, filtered, and written back in place
/// through an atomic rename. A symlinked path edits the file it points to.
/// Nothing is written when the start marker is missing, when an
/// unterminated block is rejected, or on a dry run.
///
/// # Errors
/// - `Error::StartMarkerNotFound` if no line contains the start marker
/// - `Error::UnterminatedBlock` if no end marker follows and
///   `options.unterminated` is [`Unterminated::Reject`]
/// - `Error::Fs` if the file cannot be read (missing, unreadable, not UTF-8)
///   or written (read-only, locked by another writer)
pub fn remove_block_in_file(
    path: &NormalizedPath,
    markers: &Markers,
    options: &RemoveOptions,
) -> Result<RemovalReport> {
    let content = io::read_text(path)?;
    let removal = remove_block_in_text(&content, markers);

    let Some(block) = removal.removed else {
        debug!(path = %path, marker = markers.start(), "start marker not found");
        return Err(Error::StartMarkerNotFound {
            path: path.to_native(),
            marker: markers.start().to_string(),
        });
    };

    if !block.terminated {
        if options.unterminated == Unterminated::Reject {
            return Err(Error::UnterminatedBlock {
                path: path.to_native(),
                start_line: block.start_line,
                marker: markers.end().to_string(),
            });
        }
        warn!(
            path = %path,
            start_line = block.start_line,
            marker = markers.end(),
            "end marker not found, removing to end of file"
        );
    }

    let updated = removal.to_text();
    let report = RemovalReport {
        path: path.clone(),
        block,
        written: !options.dry_run,
    };

    if options.dry_run {
        debug!(path = %path, "dry run, file not written");
        return Ok(report);
    }

    io::write_text(path, &updated)?;
    info!(
        path = %path,
        start_line = block.start_line,
        end_line = block.end_line,
        lines = block.line_count(),
        bytes_before = content.len(),
        bytes_after = updated.len(),
        "removed block"
    );

    Ok(report)
}
