//! In-memory document store for exercising rendering without a filesystem.

use crate::document::Document;
use crate::file_uri::FileUri;
use crate::store::{DocumentStore, FileKind, StoreError};
use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicUsize, Ordering};

/// A [`DocumentStore`] holding documents in memory.
///
/// Useful for tests: register file contents and directories up front, then
/// inspect [`stat_calls`](Self::stat_calls) and
/// [`open_calls`](Self::open_calls) to verify how often the store was
/// actually consulted.
#[derive(Default, Debug)]
pub struct MemoryDocumentStore {
    files: HashMap<FileUri, String>,
    directories: HashSet<FileUri>,
    stat_calls: AtomicUsize,
    open_calls: AtomicUsize,
}

impl MemoryDocumentStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a file with the given content.
    pub fn insert_file(&mut self, uri: FileUri, content: impl Into<String>) {
        self.files.insert(uri, content.into());
    }

    /// Registers a directory.
    pub fn insert_directory(&mut self, uri: FileUri) {
        self.directories.insert(uri);
    }

    /// Returns how many times [`stat`](DocumentStore::stat) has been called.
    pub fn stat_calls(&self) -> usize {
        self.stat_calls.load(Ordering::Relaxed)
    }

    /// Returns how many times [`open`](DocumentStore::open) has been called.
    pub fn open_calls(&self) -> usize {
        self.open_calls.load(Ordering::Relaxed)
    }
}

impl DocumentStore for MemoryDocumentStore {
    async fn stat(&self, uri: &FileUri) -> Result<FileKind, StoreError> {
        self.stat_calls.fetch_add(1, Ordering::Relaxed);
        if self.files.contains_key(uri) {
            Ok(FileKind::File)
        } else if self.directories.contains(uri) {
            Ok(FileKind::Directory)
        } else {
            Err(StoreError::NotFound(uri.path().display().to_string()))
        }
    }

    async fn open(&self, uri: &FileUri) -> Result<Document, StoreError> {
        self.open_calls.fetch_add(1, Ordering::Relaxed);
        self.files
            .get(uri)
            .map(|content| Document::new(content.as_str()))
            .ok_or_else(|| StoreError::NotFound(uri.path().display().to_string()))
    }
}
