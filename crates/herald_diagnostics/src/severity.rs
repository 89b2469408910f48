//! Diagnostic severity levels ordered from most to least severe.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The severity level of a diagnostic.
///
/// Ordered from most severe (`Error`) to least severe (`Hint`), matching the
/// derived `PartialOrd`/`Ord` implementation based on declaration order.
/// Hosts that transport severities as protocol ordinals use the same order,
/// with `Error` at rank 0.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Serialize, Deserialize)]
pub enum Severity {
    /// A definite problem reported by the analysis host.
    Error,
    /// A potential issue that should be reviewed.
    Warning,
    /// An informational note providing additional context.
    Information,
    /// A hint about a possible improvement.
    Hint,
}

impl Severity {
    /// Returns the display label used in rendered summaries.
    pub fn label(self) -> &'static str {
        match self {
            Severity::Error => "Error",
            Severity::Warning => "Warning",
            Severity::Information => "Information",
            Severity::Hint => "Hint",
        }
    }

    /// Returns the protocol ordinal for this severity (`Error` = 0).
    pub fn rank(self) -> u8 {
        self as u8
    }

    /// Converts a protocol ordinal back to a severity.
    ///
    /// Returns `None` for ordinals outside the known set, leaving the
    /// caller to carry the diagnostic with no severity.
    pub fn from_rank(rank: u8) -> Option<Severity> {
        match rank {
            0 => Some(Severity::Error),
            1 => Some(Severity::Warning),
            2 => Some(Severity::Information),
            3 => Some(Severity::Hint),
            _ => None,
        }
    }

    /// Returns `true` if this severity is [`Error`](Severity::Error).
    pub fn is_error(self) -> bool {
        self == Severity::Error
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
