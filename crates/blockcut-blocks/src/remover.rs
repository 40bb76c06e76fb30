//! Pure block removal over lines and text.
//!
//! Nothing here touches the filesystem; see [`crate::file`] for that.

use blockcut_fs::split_lines;
use tracing::debug;

use crate::markers::Markers;
use crate::scan::{LineAction, ScanState};

/// Location of a removed block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RemovedBlock {
    /// The 1-based line number of the start marker line.
    pub start_line: usize,
    /// The 1-based line number of the last removed line.
    pub end_line: usize,
    /// `false` when no end marker followed and the block ran to end of input.
    pub terminated: bool,
}

impl RemovedBlock {
    /// Number of lines removed, markers included.
    pub fn line_count(&self) -> usize {
        self.end_line - self.start_line + 1
    }
}

/// The result of filtering a sequence of lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Removal<'a> {
    /// Lines that survive, in their original order and with terminators.
    pub kept: Vec<&'a str>,
    /// The removed block, or `None` if the start marker never occurred.
    pub removed: Option<RemovedBlock>,
}

impl Removal<'_> {
    /// Whether the start marker was found.
    pub fn is_found(&self) -> bool {
        self.removed.is_some()
    }

    /// Joins the kept lines back into text.
    pub fn to_text(&self) -> String {
        self.kept.concat()
    }
}

/// Removes the first marker-delimited block from a sequence of lines.
///
/// Lines are matched by substring containment and copied to the output
/// unchanged, terminators included.
///
/// # Arguments
/// * `lines` - The lines to filter, normally with their terminators
/// * `markers` - The start and end markers
///
/// # Returns
/// The kept lines plus the location of the removed block, if any.
///
/// # Example
/// ```
/// use blockcut_blocks::{Markers, remove_block_lines};
///
/// let markers = Markers::new("START", "END").unwrap();
/// let removal = remove_block_lines(["a\n", "START\n", "b\n", "END\n", "c\n"], &markers);
///
/// assert_eq!(removal.kept, vec!["a\n", "c\n"]);
/// assert_eq!(removal.removed.unwrap().start_line, 2);
/// ```
pub fn remove_block_lines<'a, I>(lines: I, markers: &Markers) -> Removal<'a>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut state = ScanState::Searching;
    let mut kept = Vec::new();
    let mut start_line = None;
    let mut end_line = 0;

    for (idx, line) in lines.into_iter().enumerate() {
        let line_no = idx + 1;
        let (next, action) = state.step(line, markers);

        if state != next {
            debug!(line = line_no, from = ?state, to = ?next, "scan transition");
        }
        if next.start_found() && !state.start_found() {
            start_line = Some(line_no);
        }

        match action {
            LineAction::Keep => kept.push(line),
            LineAction::Drop => end_line = line_no,
        }
        state = next;
    }

    let removed = start_line.map(|start_line| RemovedBlock {
        start_line,
        end_line,
        terminated: state == ScanState::Finished,
    });

    Removal { kept, removed }
}

/// Removes the first marker-delimited block from text.
///
/// The text is split into lines with their terminators kept, so joining
/// the result reproduces every surviving byte exactly.
///
/// # Example
/// ```
/// use blockcut_blocks::{Markers, remove_block_in_text};
///
/// let markers = Markers::new("START", "END").unwrap();
/// let removal = remove_block_in_text("a\r\nSTART\r\nEND\r\nb", &markers);
/// assert_eq!(removal.to_text(), "a\r\nb");
/// ```
pub fn remove_block_in_text<'a>(text: &'a str, markers: &Markers) -> Removal<'a> {
    remove_block_lines(split_lines(text), markers)
}
