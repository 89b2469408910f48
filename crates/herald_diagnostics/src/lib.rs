//! Diagnostic snapshot tracking and plain-text summary rendering.
//!
//! This crate provides the [`Diagnostic`] and [`Snapshot`] model for issues
//! reported by an external analysis host, [`new_diagnostics`] for isolating
//! reports that are new relative to a prior snapshot, and
//! [`ProblemsRenderer`] for rendering a snapshot as a text summary with each
//! diagnostic's source line inlined.

#![warn(missing_docs)]

pub mod diagnostic;
pub mod diff;
pub mod renderer;
pub mod severity;
pub mod snapshot;

pub use diagnostic::Diagnostic;
pub use diff::new_diagnostics;
pub use renderer::ProblemsRenderer;
pub use severity::Severity;
pub use snapshot::Snapshot;
