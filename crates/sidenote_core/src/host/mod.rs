//! Host collaborator contracts.
//!
//! # Responsibility
//! - Define the seams through which the engine reads authoritative data and
//!   requests mutations.
//! - Keep the engine decoupled from the host's storage and UI runtime.
//!
//! # Invariants
//! - All trait calls are synchronous and run on the single event-loop
//!   thread; no implementation may block or re-enter the engine.
//! - `MutationSink` writes are infallible from the engine's perspective;
//!   storage failures are an external-store concern.

pub mod memory;

use crate::model::context::ContextKey;
use crate::model::item::{Item, ItemId, ItemKind};

/// Read access to the current authoritative item lists.
pub trait ItemProvider {
    /// Returns the raw (unordered-by-engine) item list for one context, in
    /// the host's current display order.
    fn items_in(&self, context: &ContextKey) -> Vec<Item>;

    /// Returns whether an id still exists in the host store.
    ///
    /// Used to filter stale references picked up from persisted order lists
    /// or from a drag that outlived a concurrent external edit.
    fn item_exists(&self, id: &ItemId) -> bool;

    /// Returns whether a folder row is currently expanded in the sidebar.
    ///
    /// Collapsed folders never accept reorder hovers: the user cannot see
    /// where the item would land.
    fn is_folder_expanded(&self, folder_id: &ItemId) -> bool;
}

/// Read access to the folder forest's parent pointers.
pub trait FolderTree {
    /// Returns the parent folder of `folder_id`, or `None` for root-level
    /// and unknown folders alike (both terminate an ancestor walk).
    fn parent_of(&self, folder_id: &ItemId) -> Option<ItemId>;
}

/// Read/clear access to the host's multi-selection set.
///
/// The selection is kind-homogeneous by construction: selecting an item of
/// a different kind replaces the set, so a drag batch never mixes kinds.
pub trait SelectionView {
    /// Returns the kind of the current selection, or `None` when empty.
    fn selection_kind(&self) -> Option<ItemKind>;

    /// Returns the selected ids in display order.
    fn selected_ids(&self) -> Vec<ItemId>;

    /// Returns whether `id` is part of the current selection.
    fn is_selected(&self, id: &ItemId) -> bool;

    /// Clears the selection.
    ///
    /// Invoked when a drag starts on an unselected item, so the gesture
    /// unambiguously carries the single pressed id.
    fn clear_selection(&mut self);
}

/// Mutation requests against the authoritative store.
pub trait MutationSink {
    /// Reassigns a note to a folder (`None` = uncategorized).
    fn reassign_folder(&mut self, note_id: &ItemId, folder_id: Option<ItemId>);

    /// Re-parents a folder (`None` = root-level).
    ///
    /// Callers must have run cycle validation first; the sink applies the
    /// write without re-checking.
    fn reassign_parent(&mut self, folder_id: &ItemId, parent_id: Option<ItemId>);
}
