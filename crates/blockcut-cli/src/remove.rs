//! The remove operation behind the `blockcut` command.

use blockcut_blocks::{Error, Markers, RemovalReport, remove_block_in_file};
use blockcut_fs::NormalizedPath;

use crate::cli::Cli;
use crate::error::Result;

/// How a run ended, for the status line and exit code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Removed(RemovalReport),
    NotFound { path: NormalizedPath, marker: String },
}

impl Outcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Removed(_))
    }

    /// The human-readable status line.
    pub fn status_line(&self) -> String {
        match self {
            Self::Removed(report) => {
                let verb = if report.written {
                    "Removed"
                } else {
                    "Would remove"
                };
                let range = if report.block.start_line == report.block.end_line {
                    format!("line {}", report.block.start_line)
                } else {
                    format!(
                        "lines {}-{}",
                        report.block.start_line, report.block.end_line
                    )
                };
                let tail = if report.block.terminated {
                    ""
                } else {
                    " (to end of file)"
                };
                format!("{verb} {range} from {}{tail}", report.path)
            }
            Self::NotFound { path, marker } => {
                format!("Start marker {marker:?} not found in {path}; file left unchanged")
            }
        }
    }
}

/// Runs the removal described by the parsed arguments.
///
/// A missing start marker is a normal outcome rather than an error so the
/// caller can report it on stdout; every other failure propagates.
pub fn run_remove(cli: &Cli) -> Result<Outcome> {
    let markers = Markers::new(cli.start.as_str(), cli.end.as_str())?;
    let path = NormalizedPath::new(&cli.path);

    match remove_block_in_file(&path, &markers, &cli.remove_options()) {
        Ok(report) => Ok(Outcome::Removed(report)),
        Err(Error::StartMarkerNotFound { marker, .. }) => Ok(Outcome::NotFound { path, marker }),
        Err(e) => Err(e.into()),
    }
}
