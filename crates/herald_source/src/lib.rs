//! File identity and document access for diagnostic reporting.
//!
//! This crate provides [`FileUri`] for identifying files reported by an
//! analysis host, [`Position`] and [`Range`] for locations within them, and
//! the [`DocumentStore`] capability trait for fetching file metadata and
//! line content. [`FsDocumentStore`] reads the real filesystem;
//! [`MemoryDocumentStore`] stands in during tests.

#![warn(missing_docs)]

pub mod document;
pub mod file_uri;
pub mod memory;
pub mod range;
pub mod store;

pub use document::Document;
pub use file_uri::FileUri;
pub use memory::MemoryDocumentStore;
pub use range::{Position, Range};
pub use store::{DocumentStore, FileKind, FsDocumentStore, StoreError};
