//! Document access capability backed by the filesystem or a test double.

use crate::document::Document;
use crate::file_uri::FileUri;
use serde::{Deserialize, Serialize};

/// Distinguishes regular files from directories when resolving a [`FileUri`].
///
/// Anything that is not a regular file (directories, sockets, devices) is
/// reported as `Directory`; rendering treats those uniformly.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum FileKind {
    /// A regular file whose lines can be read.
    File,
    /// A directory or other non-file filesystem object.
    Directory,
}

/// Errors produced by [`DocumentStore`] implementations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// An I/O error occurred while statting or reading a document.
    #[error("failed to access document: {0}")]
    Io(#[from] std::io::Error),

    /// The URI is not known to the store.
    #[error("unknown document: {0}")]
    NotFound(String),
}

/// Capability trait for resolving file metadata and document content.
///
/// Rendering code is injected with an implementation so it never couples to
/// a concrete host runtime; [`MemoryDocumentStore`](crate::MemoryDocumentStore)
/// stands in during tests.
#[allow(async_fn_in_trait)]
pub trait DocumentStore {
    /// Returns whether the URI resolves to a regular file or a directory.
    async fn stat(&self, uri: &FileUri) -> Result<FileKind, StoreError>;

    /// Opens the document at the URI and returns its content.
    ///
    /// Opening is idempotent; callers may cache the returned [`Document`]
    /// per URI for the duration of one operation.
    async fn open(&self, uri: &FileUri) -> Result<Document, StoreError>;
}

/// A [`DocumentStore`] backed by the real filesystem via `tokio::fs`.
#[derive(Clone, Copy, Default, Debug)]
pub struct FsDocumentStore;

impl DocumentStore for FsDocumentStore {
    async fn stat(&self, uri: &FileUri) -> Result<FileKind, StoreError> {
        let meta = tokio::fs::metadata(uri.path()).await?;
        if meta.is_file() {
            Ok(FileKind::File)
        } else {
            Ok(FileKind::Directory)
        }
    }

    async fn open(&self, uri: &FileUri) -> Result<Document, StoreError> {
        let content = tokio::fs::read_to_string(uri.path()).await?;
        Ok(Document::new(content))
    }
}
