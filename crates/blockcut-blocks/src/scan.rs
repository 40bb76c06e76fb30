//! The line-by-line state machine behind block removal.
//!
//! ```text
//!             start marker              end marker
//! Searching ---------------> Skipping ------------> Finished
//!   | keep                     | drop                 | keep
//!   +--<--+                    +--<--+                +--<--+
//! ```
//!
//! The start marker is only checked while `Searching`, so a second start
//! marker inside the block is an ordinary dropped line. The line that opens
//! the block is not checked for the end marker. Once `Finished`, every
//! remaining line is kept: only the first block is removed.

use crate::markers::Markers;

/// Where the scan is relative to the block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScanState {
    /// No start marker seen yet.
    #[default]
    Searching,
    /// Inside the block; lines are being dropped.
    Skipping,
    /// The block was closed by its end marker.
    Finished,
}

/// What to do with the line that was just scanned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineAction {
    Keep,
    Drop,
}

impl ScanState {
    /// Applies one line to the state machine.
    ///
    /// # Returns
    /// The next state and whether the line is kept in the output.
    ///
    /// # Example
    /// ```
    /// use blockcut_blocks::{LineAction, Markers, ScanState};
    ///
    /// let markers = Markers::new("START", "END").unwrap();
    /// let (state, action) = ScanState::Searching.step("START\n", &markers);
    /// assert_eq!(state, ScanState::Skipping);
    /// assert_eq!(action, LineAction::Drop);
    /// ```
    pub fn step(self, line: &str, markers: &Markers) -> (ScanState, LineAction) {
        match self {
            Self::Searching if markers.is_start(line) => (Self::Skipping, LineAction::Drop),
            Self::Searching => (Self::Searching, LineAction::Keep),
            Self::Skipping if markers.is_end(line) => (Self::Finished, LineAction::Drop),
            Self::Skipping => (Self::Skipping, LineAction::Drop),
            Self::Finished => (Self::Finished, LineAction::Keep),
        }
    }

    /// Whether the start marker has been seen.
    pub fn start_found(&self) -> bool {
        !matches!(self, Self::Searching)
    }
}
