//! Filesystem helpers for blockcut
//!
//! Provides normalized path handling, line-preserving text reads and
//! atomic, locked writes.

pub mod error;
pub mod io;
pub mod lines;
pub mod path;

pub use error::{Error, Result};
pub use lines::split_lines;
pub use path::NormalizedPath;
