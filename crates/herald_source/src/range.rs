//! Positions and ranges within a document, as reported by the analysis host.

use serde::{Deserialize, Serialize};

/// A position within a document.
///
/// Lines and characters are 0-indexed, matching what analysis hosts report
/// on the wire. Display code adds 1 when showing line numbers to users.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub struct Position {
    /// The 0-indexed line number.
    pub line: u32,
    /// The 0-indexed character offset within the line.
    pub character: u32,
}

impl Position {
    /// Creates a new position.
    pub fn new(line: u32, character: u32) -> Self {
        Self { line, character }
    }
}

/// A range within a document, from `start` (inclusive) to `end` (exclusive).
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub struct Range {
    /// The start position of the range.
    pub start: Position,
    /// The end position of the range.
    pub end: Position,
}

impl Range {
    /// Creates a range from start and end coordinates.
    pub fn new(start_line: u32, start_character: u32, end_line: u32, end_character: u32) -> Self {
        Self {
            start: Position::new(start_line, start_character),
            end: Position::new(end_line, end_character),
        }
    }

    /// Creates a zero-length range at a single position.
    pub fn at(line: u32, character: u32) -> Self {
        Self::new(line, character, line, character)
    }
}
