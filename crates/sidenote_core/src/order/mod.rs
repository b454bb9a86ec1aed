//! Explicit manual ordering for sidebar collections.
//!
//! # Responsibility
//! - Own the persisted context → ordered-id mapping.
//! - Project raw host item lists through the stored order for rendering.
//!
//! # Invariants
//! - Ids are unique within each stored order list.
//! - Order lists are created lazily on the first explicit reorder inside a
//!   context, never eagerly for every collection.

pub mod store;
