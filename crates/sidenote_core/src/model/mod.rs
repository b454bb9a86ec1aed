//! Sidebar domain model.
//!
//! # Responsibility
//! - Define the canonical item/folder shapes shared by every engine layer.
//! - Define the context-key namespace that names ordered collections.
//!
//! # Invariants
//! - Every sidebar object is identified by a stable, host-supplied `ItemId`.
//! - Context keys and folder ids are separate namespaces; no context key is
//!   ever used as a folder id or vice versa.

pub mod context;
pub mod item;
