//! Marker-delimited block removal for blockcut.
//!
//! A block is the contiguous run of lines from the first line containing a
//! start marker through the next line containing an end marker, both
//! inclusive:
//!
//! ```text
//! kept
//! let angle = v1.angleTo(v2);        <- start marker line (removed)
//! duplicated code                    <- removed
//! target.updateMatrixWorld();        <- end marker line (removed)
//! kept
//! ```
//!
//! The crate is split into layers:
//!
//! - [`scan`]: the explicit `Searching` / `Skipping` / `Finished` state machine.
//! - [`remover`]: pure filtering over lines or text, no I/O.
//! - [`file`]: the read, filter, write cycle against a path.
//!
//! Only the first block is removed. If the end marker never follows the
//! start marker, the block runs to the end of the file unless
//! [`Unterminated::Reject`] is selected.

pub mod error;
pub mod file;
pub mod markers;
pub mod remover;
pub mod scan;

pub use error::{Error, Result};
pub use file::{RemovalReport, RemoveOptions, Unterminated, remove_block_in_file};
pub use markers::{MarkerKind, Markers};
pub use remover::{Removal, RemovedBlock, remove_block_in_text, remove_block_lines};
pub use scan::{LineAction, ScanState};
