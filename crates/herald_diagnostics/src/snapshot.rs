//! An ordered set of per-file diagnostic lists at one point in time.

use crate::diagnostic::Diagnostic;
use crate::severity::Severity;
use herald_source::FileUri;
use serde::{Deserialize, Serialize};

/// The full set of diagnostics known for a set of files at one point in
/// time.
///
/// Entries preserve the host's insertion order over files; by convention no
/// file appears twice. Snapshots are plain values: the library holds no
/// state between calls, so a host that wants "new since last check"
/// semantics keeps the prior snapshot itself and passes both to
/// [`new_diagnostics`](crate::new_diagnostics).
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Snapshot {
    entries: Vec<(FileUri, Vec<Diagnostic>)>,
}

impl Snapshot {
    /// Creates an empty snapshot.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a file entry with its diagnostics.
    pub fn push(&mut self, uri: FileUri, diagnostics: Vec<Diagnostic>) {
        self.entries.push((uri, diagnostics));
    }

    /// Returns the diagnostics recorded for `uri`, if any.
    ///
    /// If the URI somehow appears more than once, the last entry wins.
    pub fn get(&self, uri: &FileUri) -> Option<&[Diagnostic]> {
        self.entries
            .iter()
            .rev()
            .find(|(u, _)| u == uri)
            .map(|(_, diags)| diags.as_slice())
    }

    /// Iterates over the file entries in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, (FileUri, Vec<Diagnostic>)> {
        self.entries.iter()
    }

    /// Returns the number of file entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the snapshot has no file entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the total number of diagnostics across all files.
    pub fn total_diagnostics(&self) -> usize {
        self.entries.iter().map(|(_, diags)| diags.len()).sum()
    }

    /// Returns the number of error-severity diagnostics across all files.
    pub fn error_count(&self) -> usize {
        self.count_severity(Severity::Error)
    }

    /// Returns the number of warning-severity diagnostics across all files.
    pub fn warning_count(&self) -> usize {
        self.count_severity(Severity::Warning)
    }

    fn count_severity(&self, severity: Severity) -> usize {
        self.entries
            .iter()
            .flat_map(|(_, diags)| diags.iter())
            .filter(|d| d.severity == Some(severity))
            .count()
    }
}

impl FromIterator<(FileUri, Vec<Diagnostic>)> for Snapshot {
    fn from_iter<I: IntoIterator<Item = (FileUri, Vec<Diagnostic>)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Snapshot {
    type Item = &'a (FileUri, Vec<Diagnostic>);
    type IntoIter = std::slice::Iter<'a, (FileUri, Vec<Diagnostic>)>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
