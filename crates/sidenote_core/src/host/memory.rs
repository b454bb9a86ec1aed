//! In-memory reference host.
//!
//! # Responsibility
//! - Provide a self-contained implementation of every host contract for
//!   tests and for embedders that keep sidebar data in process memory.
//! - Mirror the shape of the desktop store: notes carry an optional folder
//!   assignment, folders carry an optional parent and an expanded flag.
//!
//! # Invariants
//! - Display order inside each collection is insertion order; explicit
//!   ordering stays the engine's concern.
//! - Selection is kind-homogeneous: selecting across kinds replaces the set.

use crate::host::{FolderTree, ItemProvider, MutationSink, SelectionView};
use crate::model::context::{ContextKey, ContextScope};
use crate::model::item::{Item, ItemId, ItemKind};
use std::collections::HashMap;

/// One note row of the in-memory store.
#[derive(Debug, Clone)]
struct NoteRow {
    id: ItemId,
    folder_id: Option<ItemId>,
}

/// One folder row of the in-memory store.
#[derive(Debug, Clone)]
struct FolderRow {
    id: ItemId,
    parent_id: Option<ItemId>,
    expanded: bool,
}

/// In-memory sidebar data store implementing all host contracts.
#[derive(Debug, Default)]
pub struct MemorySidebar {
    notes: Vec<NoteRow>,
    folders: Vec<FolderRow>,
    tags: Vec<ItemId>,
    selection: Vec<ItemId>,
    selection_kind: Option<ItemKind>,
}

impl MemorySidebar {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a note with an optional folder assignment.
    pub fn add_note(&mut self, id: impl Into<ItemId>, folder_id: Option<ItemId>) {
        self.notes.push(NoteRow {
            id: id.into(),
            folder_id,
        });
    }

    /// Adds a folder with an optional parent, expanded by default.
    pub fn add_folder(&mut self, id: impl Into<ItemId>, parent_id: Option<ItemId>) {
        self.folders.push(FolderRow {
            id: id.into(),
            parent_id,
            expanded: true,
        });
    }

    /// Adds a tag.
    pub fn add_tag(&mut self, id: impl Into<ItemId>) {
        self.tags.push(id.into());
    }

    /// Sets a folder's expanded flag.
    pub fn set_expanded(&mut self, folder_id: &str, expanded: bool) {
        if let Some(folder) = self.folders.iter_mut().find(|f| f.id == folder_id) {
            folder.expanded = expanded;
        }
    }

    /// Removes a folder row, simulating a concurrent external delete.
    ///
    /// Child rows keep their now-dangling pointers, as the desktop store
    /// does until its own cascade runs.
    pub fn remove_folder(&mut self, folder_id: &str) {
        self.folders.retain(|f| f.id != folder_id);
    }

    /// Replaces the selection with ids of one kind.
    pub fn select(&mut self, kind: ItemKind, ids: &[&str]) {
        self.selection = ids.iter().map(|id| (*id).to_string()).collect();
        self.selection_kind = if self.selection.is_empty() {
            None
        } else {
            Some(kind)
        };
    }

    /// Returns a note's current folder assignment.
    pub fn note_folder(&self, note_id: &str) -> Option<ItemId> {
        self.notes
            .iter()
            .find(|n| n.id == note_id)
            .and_then(|n| n.folder_id.clone())
    }

    /// Returns a folder's current parent.
    pub fn folder_parent(&self, folder_id: &str) -> Option<ItemId> {
        self.folders
            .iter()
            .find(|f| f.id == folder_id)
            .and_then(|f| f.parent_id.clone())
    }
}

impl ItemProvider for MemorySidebar {
    fn items_in(&self, context: &ContextKey) -> Vec<Item> {
        match context.scope() {
            ContextScope::RootFolders => self
                .folders
                .iter()
                .filter(|f| f.parent_id.is_none())
                .map(|f| Item::new(f.id.clone(), ItemKind::Folder))
                .collect(),
            ContextScope::FolderChildren(parent) => self
                .folders
                .iter()
                .filter(|f| f.parent_id.as_deref() == Some(parent.as_str()))
                .map(|f| Item::new(f.id.clone(), ItemKind::Folder))
                .collect(),
            ContextScope::FolderNotes(folder) => self
                .notes
                .iter()
                .filter(|n| n.folder_id.as_deref() == Some(folder.as_str()))
                .map(|n| Item::new(n.id.clone(), ItemKind::Note))
                .collect(),
            ContextScope::UncategorizedNotes => self
                .notes
                .iter()
                .filter(|n| n.folder_id.is_none())
                .map(|n| Item::new(n.id.clone(), ItemKind::Note))
                .collect(),
            ContextScope::TagList => self
                .tags
                .iter()
                .map(|id| Item::new(id.clone(), ItemKind::Tag))
                .collect(),
            // Favourites, daily notes, and unknown contexts hold no items in
            // the reference store.
            _ => Vec::new(),
        }
    }

    fn item_exists(&self, id: &ItemId) -> bool {
        self.notes.iter().any(|n| &n.id == id)
            || self.folders.iter().any(|f| &f.id == id)
            || self.tags.iter().any(|t| t == id)
    }

    fn is_folder_expanded(&self, folder_id: &ItemId) -> bool {
        self.folders
            .iter()
            .find(|f| &f.id == folder_id)
            .map(|f| f.expanded)
            .unwrap_or(false)
    }
}

impl FolderTree for MemorySidebar {
    fn parent_of(&self, folder_id: &ItemId) -> Option<ItemId> {
        self.folders
            .iter()
            .find(|f| &f.id == folder_id)
            .and_then(|f| f.parent_id.clone())
    }
}

impl SelectionView for MemorySidebar {
    fn selection_kind(&self) -> Option<ItemKind> {
        self.selection_kind
    }

    fn selected_ids(&self) -> Vec<ItemId> {
        self.selection.clone()
    }

    fn is_selected(&self, id: &ItemId) -> bool {
        self.selection.iter().any(|s| s == id)
    }

    fn clear_selection(&mut self) {
        self.selection.clear();
        self.selection_kind = None;
    }
}

impl MutationSink for MemorySidebar {
    fn reassign_folder(&mut self, note_id: &ItemId, folder_id: Option<ItemId>) {
        if let Some(note) = self.notes.iter_mut().find(|n| &n.id == note_id) {
            note.folder_id = folder_id;
        }
    }

    fn reassign_parent(&mut self, folder_id: &ItemId, parent_id: Option<ItemId>) {
        if let Some(folder) = self.folders.iter_mut().find(|f| &f.id == folder_id) {
            folder.parent_id = parent_id;
        }
    }
}

/// Builds a parent map snapshot for validator-only call sites.
///
/// Handy when a test wants a [`FolderTree`] without the full store.
#[derive(Debug, Default, Clone)]
pub struct ParentMap {
    parents: HashMap<ItemId, Option<ItemId>>,
}

impl ParentMap {
    /// Creates an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one folder's parent pointer.
    pub fn insert(&mut self, folder_id: impl Into<ItemId>, parent_id: Option<ItemId>) {
        self.parents.insert(folder_id.into(), parent_id);
    }
}

impl FolderTree for ParentMap {
    fn parent_of(&self, folder_id: &ItemId) -> Option<ItemId> {
        self.parents.get(folder_id).cloned().flatten()
    }
}
