//! Document content with line-start indexing for per-line text lookup.

/// The text content of one document, with precomputed line-start offsets so
/// individual lines can be fetched without rescanning.
///
/// An empty document still has one (empty) line 0, matching editor
/// semantics.
#[derive(Clone, Debug)]
pub struct Document {
    content: String,
    /// Byte offsets of each line start (the first entry is always 0).
    line_starts: Vec<usize>,
}

impl Document {
    /// Creates a `Document`, precomputing line starts from the content.
    pub fn new(content: impl Into<String>) -> Self {
        let content = content.into();
        let line_starts = compute_line_starts(&content);
        Self {
            content,
            line_starts,
        }
    }

    /// Returns the literal text of the 0-indexed line `line`, without its
    /// trailing line terminator, or `None` when the line is out of range.
    pub fn line(&self, line: u32) -> Option<&str> {
        let idx = line as usize;
        let start = *self.line_starts.get(idx)?;
        let end = self
            .line_starts
            .get(idx + 1)
            .copied()
            .unwrap_or(self.content.len());
        let text = &self.content[start..end];
        let text = text.strip_suffix('\n').unwrap_or(text);
        Some(text.strip_suffix('\r').unwrap_or(text))
    }

    /// Returns the number of lines in the document.
    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    /// Returns the full text content of the document.
    pub fn content(&self) -> &str {
        &self.content
    }
}

/// Computes the byte offsets of each line start in the given content.
fn compute_line_starts(content: &str) -> Vec<usize> {
    let mut starts = vec![0];
    for (i, byte) in content.bytes().enumerate() {
        if byte == b'\n' {
            starts.push(i + 1);
        }
    }
    starts
}
