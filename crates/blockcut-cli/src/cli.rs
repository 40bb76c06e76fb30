//! CLI argument parsing using clap derive

use std::path::PathBuf;

use blockcut_blocks::{RemoveOptions, Unterminated};
use clap::Parser;

/// blockcut - Remove a marker-delimited block of lines from a file
///
/// Deletes every line from the first line containing the start marker
/// through the next line containing the end marker, then writes the file
/// back in place.
///
/// Examples:
///   blockcut src/App.tsx --start 'let angle' --end 'updateMatrixWorld();'
///   blockcut notes.md -s '<!-- old -->' -e '<!-- /old -->' --dry-run
#[derive(Parser, Debug)]
#[command(name = "blockcut")]
#[command(author, version, about)]
pub struct Cli {
    /// File to edit in place
    pub path: PathBuf,

    /// Text that marks the first line of the block
    #[arg(short, long, value_name = "TEXT")]
    pub start: String,

    /// Text that marks the last line of the block
    #[arg(short, long, value_name = "TEXT")]
    pub end: String,

    /// Fail instead of removing to end of file when no end marker follows
    #[arg(long)]
    pub require_end: bool,

    /// Report what would be removed without writing the file
    #[arg(long)]
    pub dry_run: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    pub fn remove_options(&self) -> RemoveOptions {
        RemoveOptions {
            unterminated: if self.require_end {
                Unterminated::Reject
            } else {
                Unterminated::TruncateToEof
            },
            dry_run: self.dry_run,
        }
    }
}
