//! Item and folder domain model.
//!
//! # Responsibility
//! - Define the canonical record for everything the sidebar can drag.
//! - Define the parent-pointer shape of the folder forest.
//!
//! # Invariants
//! - `id` is stable and never reused for another item.
//! - `kind` determines which context families an item may appear in; two
//!   items of different kinds never share a context.

use serde::{Deserialize, Serialize};

/// Stable identifier for every sidebar object.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
/// Ids are opaque strings minted by the host data store.
pub type ItemId = String;

/// Category of a draggable sidebar item.
///
/// The kind is fixed at creation; a drag batch is always kind-homogeneous.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemKind {
    /// A note row. Leaf: never a drop container.
    Note,
    /// A folder row. The only kind that can contain other items.
    Folder,
    /// A tag row. Leaf: reorders only within its own list.
    Tag,
}

impl ItemKind {
    /// Returns whether items of this kind can hold other items.
    ///
    /// Drives zone classification: only containers expose an `into` zone.
    pub fn is_container(self) -> bool {
        matches!(self, Self::Folder)
    }
}

/// One draggable sidebar entry as seen by the engine.
///
/// The engine never inspects titles, icons, or content; identity and kind
/// are all it needs to order and move items.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Stable host-supplied id.
    pub id: ItemId,
    /// Item category.
    pub kind: ItemKind,
}

impl Item {
    /// Creates an item record.
    pub fn new(id: impl Into<ItemId>, kind: ItemKind) -> Self {
        Self {
            id: id.into(),
            kind,
        }
    }
}

/// One node of the folder forest, as read from the host data store.
///
/// # Invariants
/// - `parent_id == None` means root-level folder.
/// - No node may be its own ancestor; the engine validates this before any
///   re-parenting and never assumes it holds for existing data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FolderNode {
    /// Stable folder id.
    pub id: ItemId,
    /// Parent folder id. `None` means root-level.
    pub parent_id: Option<ItemId>,
}

impl FolderNode {
    /// Creates a folder node record.
    pub fn new(id: impl Into<ItemId>, parent_id: Option<ItemId>) -> Self {
        Self {
            id: id.into(),
            parent_id,
        }
    }
}
