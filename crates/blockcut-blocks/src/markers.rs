//! Start and end markers delimiting a block.

use std::fmt;

use crate::error::{Error, Result};

/// Which of the two markers a value refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerKind {
    Start,
    End,
}

impl MarkerKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::End => "end",
        }
    }
}

impl fmt::Display for MarkerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A validated pair of literal, non-empty marker strings.
///
/// Matching is plain substring containment: a line belongs to a marker if
/// the marker text appears anywhere in it, including any leading
/// indentation or trailing terminator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Markers {
    start: String,
    end: String,
}

impl Markers {
    /// Creates a marker pair.
    ///
    /// # Errors
    /// Returns `Error::EmptyMarker` if either marker is empty, since an empty
    /// marker would match every line.
    ///
    /// # Example
    /// ```
    /// use blockcut_blocks::Markers;
    ///
    /// let markers = Markers::new("START", "END").unwrap();
    /// assert!(markers.is_start("  // START here\n"));
    /// assert!(Markers::new("", "END").is_err());
    /// ```
    pub fn new(start: impl Into<String>, end: impl Into<String>) -> Result<Self> {
        let start = start.into();
        let end = end.into();

        if start.is_empty() {
            return Err(Error::EmptyMarker {
                which: MarkerKind::Start,
            });
        }
        if end.is_empty() {
            return Err(Error::EmptyMarker {
                which: MarkerKind::End,
            });
        }

        Ok(Self { start, end })
    }

    pub fn start(&self) -> &str {
        &self.start
    }

    pub fn end(&self) -> &str {
        &self.end
    }

    /// Whether `line` contains the start marker.
    pub fn is_start(&self, line: &str) -> bool {
        line.contains(self.start.as_str())
    }

    /// Whether `line` contains the end marker.
    pub fn is_end(&self, line: &str) -> bool {
        line.contains(self.end.as_str())
    }
}
