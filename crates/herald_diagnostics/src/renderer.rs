//! Renders diagnostic snapshots as plain-text problem summaries.

use std::collections::HashMap;
use std::path::Path;

use herald_source::{Document, DocumentStore, FileKind, FileUri};
use tracing::debug;

use crate::diagnostic::Diagnostic;
use crate::severity::Severity;
use crate::snapshot::Snapshot;

/// Placeholder line content when a document or line cannot be fetched.
const UNAVAILABLE: &str = "(unavailable)";
/// Placeholder line content when a URI resolves to a directory.
const DIRECTORY: &str = "(directory)";

/// Renders a [`Snapshot`] into a plain-text summary grouped by file.
///
/// Produces output like:
/// ```text
/// src/main.rs
/// - [rustc Error] 3 | let x = foo(); : cannot find function `foo`
/// - [Warning] 7 | let unused = 1; : unused variable
/// ```
///
/// With `max_messages` set, diagnostics are prioritized globally by severity
/// and an omission footer reports how many were dropped.
pub struct ProblemsRenderer {
    /// Whether to render anything at all; `false` yields an empty string
    /// without consulting the document store.
    pub include_messages: bool,
    /// Cap on the number of rendered diagnostics; `None` or `Some(0)` means
    /// unlimited.
    pub max_messages: Option<usize>,
}

impl ProblemsRenderer {
    /// Creates a renderer with no message cap.
    pub fn new() -> Self {
        Self {
            include_messages: true,
            max_messages: None,
        }
    }

    /// Creates a renderer that keeps at most `max_messages` diagnostics.
    pub fn with_limit(max_messages: usize) -> Self {
        Self {
            include_messages: true,
            max_messages: Some(max_messages),
        }
    }

    /// Renders every diagnostic in `snapshot` whose severity is in
    /// `severities`, grouped by file with paths shown relative to `cwd`.
    ///
    /// Line content is fetched through `store` and memoized per URI for the
    /// duration of this call; fetch failures degrade to a placeholder for
    /// the affected line only. Never fails.
    pub async fn render<S: DocumentStore>(
        &self,
        snapshot: &Snapshot,
        severities: &[Severity],
        cwd: &Path,
        store: &S,
    ) -> String {
        if !self.include_messages {
            return String::new();
        }

        let mut cache = DocumentCache::new(store);
        let out = match self.max_messages {
            Some(limit) if limit > 0 => {
                self.render_bounded(snapshot, severities, cwd, limit, &mut cache)
                    .await
            }
            _ => {
                self.render_unbounded(snapshot, severities, cwd, &mut cache)
                    .await
            }
        };
        out.trim().to_string()
    }

    /// Renders every matching diagnostic, file by file in snapshot order,
    /// each file's diagnostics sorted by start line.
    async fn render_unbounded<S: DocumentStore>(
        &self,
        snapshot: &Snapshot,
        severities: &[Severity],
        cwd: &Path,
        cache: &mut DocumentCache<'_, S>,
    ) -> String {
        let mut out = String::new();
        for (uri, diagnostics) in snapshot.iter() {
            let mut matching: Vec<&Diagnostic> = diagnostics
                .iter()
                .filter(|d| matches_severity(d, severities))
                .collect();
            if matching.is_empty() {
                continue;
            }
            matching.sort_by_key(|d| d.start_line());

            out.push_str(&format!("\n\n{}", uri.display_relative(cwd)));
            for diag in matching {
                out.push_str(&cache.format_line(uri, diag).await);
            }
        }
        out
    }

    /// Renders at most `limit` diagnostics, prioritized globally by severity
    /// then start line, re-grouped by file for emission. Unlike unbounded
    /// mode, diagnostics compete across files here: when output is
    /// truncated, errors win the budget.
    async fn render_bounded<S: DocumentStore>(
        &self,
        snapshot: &Snapshot,
        severities: &[Severity],
        cwd: &Path,
        limit: usize,
        cache: &mut DocumentCache<'_, S>,
    ) -> String {
        // Flatten across files so the worst problems win the budget.
        let mut all: Vec<(&FileUri, &Diagnostic)> = Vec::new();
        for (uri, diagnostics) in snapshot.iter() {
            for diag in diagnostics.iter().filter(|d| matches_severity(d, severities)) {
                all.push((uri, diag));
            }
        }
        let total = all.len();

        // Errors first, then earlier lines; the sort is stable so input
        // order breaks ties.
        all.sort_by_key(|&(_, d)| (severity_rank(d), d.start_line()));

        // Format each kept diagnostic once, caching the rendered line.
        let mut taken: Vec<(&FileUri, &Diagnostic, String)> = Vec::new();
        for (uri, diag) in all.into_iter().take(limit) {
            let text = cache.format_line(uri, diag).await;
            taken.push((uri, diag, text));
        }

        // Group by URI in order of first appearance among the kept items.
        let mut groups: Vec<(&FileUri, Vec<usize>)> = Vec::new();
        for (idx, (uri, _, _)) in taken.iter().enumerate() {
            match groups.iter_mut().find(|g| g.0 == *uri) {
                Some(group) => group.1.push(idx),
                None => groups.push((*uri, vec![idx])),
            }
        }

        let mut out = String::new();
        for (uri, mut indices) in groups {
            indices.sort_by_key(|&i| taken[i].1.start_line());
            out.push_str(&format!("\n\n{}", uri.display_relative(cwd)));
            for i in indices {
                out.push_str(&taken[i].2);
            }
        }

        if total > taken.len() {
            out.push_str(&format!(
                "\n\n... {} more problems omitted to prevent context overflow",
                total - taken.len()
            ));
        }
        out
    }
}

impl Default for ProblemsRenderer {
    fn default() -> Self {
        Self::new()
    }
}

/// Returns `true` if the diagnostic's severity is in the requested set.
/// A diagnostic with no recognized severity never matches.
fn matches_severity(diag: &Diagnostic, severities: &[Severity]) -> bool {
    diag.severity.map_or(false, |s| severities.contains(&s))
}

/// Sort rank for bounded-mode prioritization; absent severities sort last.
fn severity_rank(diag: &Diagnostic) -> u8 {
    diag.severity.map(Severity::rank).unwrap_or(u8::MAX)
}

/// Returns the display label for a diagnostic's severity.
fn severity_label(diag: &Diagnostic) -> &'static str {
    match diag.severity {
        Some(s) => s.label(),
        None => "Diagnostic",
    }
}

/// Per-call memoization of file stats and opened documents.
///
/// Created fresh for every render call and never outlives it, so repeated
/// renders stay independent and concurrency-safe.
struct DocumentCache<'a, S: DocumentStore> {
    store: &'a S,
    stats: HashMap<FileUri, FileKind>,
    documents: HashMap<FileUri, Document>,
}

impl<'a, S: DocumentStore> DocumentCache<'a, S> {
    fn new(store: &'a S) -> Self {
        Self {
            store,
            stats: HashMap::new(),
            documents: HashMap::new(),
        }
    }

    /// Formats one summary line for `diag`, fetching (and memoizing) the
    /// source line it points at.
    async fn format_line(&mut self, uri: &FileUri, diag: &Diagnostic) -> String {
        let label = severity_label(diag);
        let source = match &diag.source {
            Some(name) => format!("{name} "),
            None => String::new(),
        };
        let (line, content) = self.resolve_line(uri, diag.start_line()).await;
        format!(
            "\n- [{source}{label}] {line} | {content} : {message}",
            message = diag.message
        )
    }

    /// Resolves the 1-indexed display line number and literal line content
    /// for a diagnostic at 0-indexed `line` in `uri`.
    ///
    /// Directories render as `(directory)` at line 1; any lookup failure
    /// renders as `(unavailable)` at the diagnostic's own line.
    async fn resolve_line(&mut self, uri: &FileUri, line: u32) -> (u32, String) {
        match self.stat(uri).await {
            Some(FileKind::Directory) => (1, DIRECTORY.to_string()),
            Some(FileKind::File) => match self.line_text(uri, line).await {
                Some(text) => (line + 1, text),
                None => (line + 1, UNAVAILABLE.to_string()),
            },
            None => (line + 1, UNAVAILABLE.to_string()),
        }
    }

    async fn stat(&mut self, uri: &FileUri) -> Option<FileKind> {
        if let Some(kind) = self.stats.get(uri) {
            return Some(*kind);
        }
        match self.store.stat(uri).await {
            Ok(kind) => {
                self.stats.insert(uri.clone(), kind);
                Some(kind)
            }
            Err(err) => {
                debug!("stat failed for {}: {err}", uri.path().display());
                None
            }
        }
    }

    async fn line_text(&mut self, uri: &FileUri, line: u32) -> Option<String> {
        if !self.documents.contains_key(uri) {
            match self.store.open(uri).await {
                Ok(doc) => {
                    self.documents.insert(uri.clone(), doc);
                }
                Err(err) => {
                    debug!("open failed for {}: {err}", uri.path().display());
                    return None;
                }
            }
        }
        self.documents
            .get(uri)
            .and_then(|doc| doc.line(line))
            .map(str::to_string)
    }
}
