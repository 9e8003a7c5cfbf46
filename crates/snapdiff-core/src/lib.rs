//! snapdiff-core — shared library for the snapdiff snapshot-diff viewer.
//!
//! Provides:
//! - `domain` — snapshot/diff data model produced by the external backend
//! - `bridge` — backend command abstraction (projects, dumps, diff fetch)
//! - `layout` — pure layout transforms (column widths, no-diff columns, paging)
//! - `view` — UI-agnostic view models and interactive per-table state
//! - `fmt` — shared formatting helpers (digit grouping, unit-aware truncation)
//!
//! The core performs no I/O of its own besides the file-backed bridge; all
//! layout and view-model functions are pure transforms over an immutable
//! [`domain::TableDiff`].

pub mod bridge;
pub mod domain;
pub mod fmt;
pub mod layout;
pub mod view;
