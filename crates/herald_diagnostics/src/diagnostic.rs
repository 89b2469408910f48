//! A single issue reported by the analysis host for one file.

use crate::severity::Severity;
use herald_source::Range;
use serde::{Deserialize, Serialize};

/// One issue reported by the analysis host.
///
/// Equality between diagnostics is deliberately not derived: snapshot
/// diffing compares diagnostics with [`same_as`](Self::same_as), which names
/// exactly the fields that make two reports the same issue.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Diagnostic {
    /// The document range the issue refers to (0-indexed lines).
    pub range: Range,
    /// The severity reported by the host. `None` when the host omitted the
    /// severity or sent a value outside the known set.
    pub severity: Option<Severity>,
    /// The free-text description of the issue.
    pub message: String,
    /// The name of the tool that produced the issue, if reported.
    pub source: Option<String>,
}

impl Diagnostic {
    /// Creates a diagnostic with the given severity.
    pub fn new(range: Range, severity: Severity, message: impl Into<String>) -> Self {
        Self {
            range,
            severity: Some(severity),
            message: message.into(),
            source: None,
        }
    }

    /// Creates a new error diagnostic.
    pub fn error(range: Range, message: impl Into<String>) -> Self {
        Self::new(range, Severity::Error, message)
    }

    /// Creates a new warning diagnostic.
    pub fn warning(range: Range, message: impl Into<String>) -> Self {
        Self::new(range, Severity::Warning, message)
    }

    /// Creates a new information diagnostic.
    pub fn information(range: Range, message: impl Into<String>) -> Self {
        Self::new(range, Severity::Information, message)
    }

    /// Creates a new hint diagnostic.
    pub fn hint(range: Range, message: impl Into<String>) -> Self {
        Self::new(range, Severity::Hint, message)
    }

    /// Sets the producing tool's name.
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Structural equality over every field of the diagnostic.
    ///
    /// Two diagnostics are the same issue iff their range, severity, message,
    /// and source all match.
    pub fn same_as(&self, other: &Diagnostic) -> bool {
        self.range == other.range
            && self.severity == other.severity
            && self.message == other.message
            && self.source == other.source
    }

    /// Returns the 0-indexed line this diagnostic starts at.
    pub fn start_line(&self) -> u32 {
        self.range.start.line
    }
}
