//! Context keys for ordered sidebar collections.
//!
//! # Responsibility
//! - Name each ordered collection (folder note list, root folder list,
//!   favourites, buckets) with one stable string key.
//! - Parse keys back into a typed scope for drop-eligibility decisions.
//!
//! # Invariants
//! - Key formats are stable: persisted order blobs reference them verbatim.
//! - An unrecognized key parses to `ContextScope::Other`, never an error;
//!   stale persisted keys must stay loadable.

use crate::model::item::{ItemId, ItemKind};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

const ROOT_FOLDERS: &str = "root-folders";
const UNCATEGORIZED_NOTES: &str = "uncategorized-notes";
const TAG_LIST: &str = "tag-list";
const DAILY_NOTES: &str = "daily-notes";
const FOLDER_NOTES_PREFIX: &str = "folder-notes-";
const FOLDER_CHILDREN_PREFIX: &str = "folder-children-";
const FAVORITES_PREFIX: &str = "favorites-";

/// Opaque string key naming one ordered collection of items.
///
/// Serialized transparently so a persisted order blob is a plain
/// `string → [string]` mapping.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContextKey(String);

impl ContextKey {
    /// The root-level folder list.
    pub fn root_folders() -> Self {
        Self(ROOT_FOLDERS.to_string())
    }

    /// The note list of one folder.
    pub fn folder_notes(folder_id: &str) -> Self {
        Self(format!("{FOLDER_NOTES_PREFIX}{folder_id}"))
    }

    /// The child-folder list of one folder.
    pub fn folder_children(folder_id: &str) -> Self {
        Self(format!("{FOLDER_CHILDREN_PREFIX}{folder_id}"))
    }

    /// Notes assigned to no folder.
    pub fn uncategorized_notes() -> Self {
        Self(UNCATEGORIZED_NOTES.to_string())
    }

    /// The favourites list for one item kind.
    pub fn favorites(kind: ItemKind) -> Self {
        let suffix = match kind {
            ItemKind::Note => "notes",
            ItemKind::Folder => "folders",
            ItemKind::Tag => "tags",
        };
        Self(format!("{FAVORITES_PREFIX}{suffix}"))
    }

    /// The flat tag list.
    pub fn tag_list() -> Self {
        Self(TAG_LIST.to_string())
    }

    /// The daily-notes bucket.
    pub fn daily_notes() -> Self {
        Self(DAILY_NOTES.to_string())
    }

    /// Wraps a raw key loaded from persisted state.
    pub fn from_raw(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// Returns the raw key string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Parses this key into its typed scope.
    pub fn scope(&self) -> ContextScope {
        if self.0 == ROOT_FOLDERS {
            return ContextScope::RootFolders;
        }
        if self.0 == UNCATEGORIZED_NOTES {
            return ContextScope::UncategorizedNotes;
        }
        if self.0 == TAG_LIST {
            return ContextScope::TagList;
        }
        if self.0 == DAILY_NOTES {
            return ContextScope::DailyNotes;
        }
        if let Some(folder_id) = self.0.strip_prefix(FOLDER_NOTES_PREFIX) {
            return ContextScope::FolderNotes(folder_id.to_string());
        }
        if let Some(folder_id) = self.0.strip_prefix(FOLDER_CHILDREN_PREFIX) {
            return ContextScope::FolderChildren(folder_id.to_string());
        }
        if self.0.starts_with(FAVORITES_PREFIX) {
            return ContextScope::Favorites;
        }
        ContextScope::Other
    }
}

impl Display for ContextKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Typed view of a context key, used for drop-eligibility rules.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContextScope {
    /// Root-level folder list.
    RootFolders,
    /// Note list inside the named folder.
    FolderNotes(ItemId),
    /// Child-folder list inside the named folder.
    FolderChildren(ItemId),
    /// Notes with no folder assignment.
    UncategorizedNotes,
    /// A favourites list (any kind).
    Favorites,
    /// The flat tag list.
    TagList,
    /// The daily-notes bucket.
    DailyNotes,
    /// Key minted by a newer host or hand-edited state.
    Other,
}

#[cfg(test)]
mod tests {
    use super::{ContextKey, ContextScope};
    use crate::model::item::ItemKind;

    #[test]
    fn folder_scoped_keys_round_trip_through_scope() {
        let notes = ContextKey::folder_notes("F1");
        assert_eq!(notes.as_str(), "folder-notes-F1");
        assert_eq!(notes.scope(), ContextScope::FolderNotes("F1".to_string()));

        let children = ContextKey::folder_children("F1");
        assert_eq!(
            children.scope(),
            ContextScope::FolderChildren("F1".to_string())
        );
    }

    #[test]
    fn fixed_keys_parse_to_their_scopes() {
        assert_eq!(ContextKey::root_folders().scope(), ContextScope::RootFolders);
        assert_eq!(
            ContextKey::uncategorized_notes().scope(),
            ContextScope::UncategorizedNotes
        );
        assert_eq!(ContextKey::tag_list().scope(), ContextScope::TagList);
        assert_eq!(ContextKey::daily_notes().scope(), ContextScope::DailyNotes);
        assert_eq!(
            ContextKey::favorites(ItemKind::Note).scope(),
            ContextScope::Favorites
        );
    }

    #[test]
    fn unknown_keys_parse_to_other_not_error() {
        let key = ContextKey::from_raw("pinned-searches");
        assert_eq!(key.scope(), ContextScope::Other);
    }
}
