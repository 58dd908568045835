//! Internal graph accessors and low-level building blocks.
//!
//! This module is intentionally `pub(crate)` so the traversal algorithms can
//! share scratch state without exposing it as part of the public API surface.

pub(crate) mod visited;
