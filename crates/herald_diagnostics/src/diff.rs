//! Isolates diagnostics that are new relative to a prior snapshot.

use crate::diagnostic::Diagnostic;
use crate::snapshot::Snapshot;
use herald_source::FileUri;
use std::collections::HashMap;

/// Returns the diagnostics present in `new` with no structurally-equal
/// counterpart in `old`, per file.
///
/// Files present only in `old` never appear in the result, and the relative
/// order of retained diagnostics matches their order in `new`. Comparison is
/// pairwise [`Diagnostic::same_as`]; per-file diagnostic lists are small
/// enough that the quadratic scan is not worth indexing.
pub fn new_diagnostics(old: &Snapshot, new: &Snapshot) -> Snapshot {
    // Last write wins if a URI somehow appears twice in `old`.
    let mut old_by_uri: HashMap<&FileUri, &[Diagnostic]> = HashMap::new();
    for (uri, diags) in old.iter() {
        old_by_uri.insert(uri, diags.as_slice());
    }

    let mut result = Snapshot::new();
    for (uri, diags) in new.iter() {
        let previous: &[Diagnostic] = old_by_uri.get(uri).copied().unwrap_or(&[]);
        let fresh: Vec<Diagnostic> = diags
            .iter()
            .filter(|d| !previous.iter().any(|p| p.same_as(d)))
            .cloned()
            .collect();
        if !fresh.is_empty() {
            result.push(uri.clone(), fresh);
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use herald_source::Range;

    fn uri(path: &str) -> FileUri {
        FileUri::new(path)
    }

    #[test]
    fn identical_snapshots_diff_to_empty() {
        let mut snap = Snapshot::new();
        snap.push(
            uri("/work/a.rs"),
            vec![
                Diagnostic::error(Range::at(0, 0), "x"),
                Diagnostic::warning(Range::at(3, 0), "y"),
            ],
        );
        let result = new_diagnostics(&snap, &snap);
        assert!(result.is_empty());
    }

    #[test]
    fn both_empty() {
        let result = new_diagnostics(&Snapshot::new(), &Snapshot::new());
        assert!(result.is_empty());
    }

    #[test]
    fn new_diagnostic_in_known_file_and_new_file() {
        let mut old = Snapshot::new();
        old.push(uri("/work/a.rs"), vec![Diagnostic::error(Range::at(0, 0), "x")]);

        let mut new = Snapshot::new();
        new.push(
            uri("/work/a.rs"),
            vec![
                Diagnostic::error(Range::at(0, 0), "x"),
                Diagnostic::error(Range::at(2, 0), "y"),
            ],
        );
        new.push(uri("/work/b.rs"), vec![Diagnostic::error(Range::at(1, 0), "z")]);

        let result = new_diagnostics(&old, &new);
        assert_eq!(result.len(), 2);

        let a = result.get(&uri("/work/a.rs")).unwrap();
        assert_eq!(a.len(), 1);
        assert_eq!(a[0].message, "y");

        let b = result.get(&uri("/work/b.rs")).unwrap();
        assert_eq!(b.len(), 1);
        assert_eq!(b[0].message, "z");
    }

    #[test]
    fn comparison_is_by_value_not_identity() {
        let diag = Diagnostic::error(Range::new(0, 0, 0, 10), "same issue").with_source("rustc");

        let mut old = Snapshot::new();
        old.push(uri("/work/a.rs"), vec![diag.clone()]);
        let mut new = Snapshot::new();
        new.push(uri("/work/a.rs"), vec![diag.clone()]);

        // A distinct but structurally equal clone must count as seen.
        assert!(new_diagnostics(&old, &new).is_empty());
    }

    #[test]
    fn file_only_in_old_is_absent() {
        let mut old = Snapshot::new();
        old.push(uri("/work/gone.rs"), vec![Diagnostic::error(Range::at(0, 0), "x")]);

        let result = new_diagnostics(&old, &Snapshot::new());
        assert!(result.is_empty());
    }

    #[test]
    fn preserves_new_list_order() {
        let mut old = Snapshot::new();
        old.push(uri("/work/a.rs"), vec![Diagnostic::error(Range::at(5, 0), "kept")]);

        let mut new = Snapshot::new();
        new.push(
            uri("/work/a.rs"),
            vec![
                Diagnostic::warning(Range::at(9, 0), "third"),
                Diagnostic::error(Range::at(5, 0), "kept"),
                Diagnostic::error(Range::at(1, 0), "first"),
                Diagnostic::hint(Range::at(4, 0), "second"),
            ],
        );

        let result = new_diagnostics(&old, &new);
        let messages: Vec<_> = result.get(&uri("/work/a.rs")).unwrap()
            .iter()
            .map(|d| d.message.as_str())
            .collect();
        // Relative order from `new` is untouched; only the seen entry drops out.
        assert_eq!(messages, vec!["third", "first", "second"]);
    }

    #[test]
    fn changed_field_makes_diagnostic_new() {
        let mut old = Snapshot::new();
        old.push(uri("/work/a.rs"), vec![Diagnostic::error(Range::at(0, 0), "x")]);

        let mut new = Snapshot::new();
        new.push(uri("/work/a.rs"), vec![Diagnostic::warning(Range::at(0, 0), "x")]);

        let result = new_diagnostics(&old, &new);
        let diags = result.get(&uri("/work/a.rs")).unwrap();
        assert_eq!(diags.len(), 1);
        assert_eq!(diags[0].severity, Some(crate::Severity::Warning));
    }

    #[test]
    fn duplicate_uri_in_old_last_write_wins() {
        let mut old = Snapshot::new();
        old.push(uri("/work/a.rs"), vec![Diagnostic::error(Range::at(0, 0), "x")]);
        old.push(uri("/work/a.rs"), vec![Diagnostic::error(Range::at(1, 0), "y")]);

        let mut new = Snapshot::new();
        new.push(
            uri("/work/a.rs"),
            vec![
                Diagnostic::error(Range::at(0, 0), "x"),
                Diagnostic::error(Range::at(1, 0), "y"),
            ],
        );

        // Only the second old entry is in effect, so "x" reads as new.
        let result = new_diagnostics(&old, &new);
        let diags = result.get(&uri("/work/a.rs")).unwrap();
        assert_eq!(diags.len(), 1);
        assert_eq!(diags[0].message, "x");
    }
}
