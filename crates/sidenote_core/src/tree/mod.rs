//! Folder hierarchy cycle safety.
//!
//! # Responsibility
//! - Validate folder re-parenting against ancestor cycles before any
//!   mutation is requested.
//!
//! # Invariants
//! - No folder may become its own ancestor; this is enforced here, never
//!   assumed to already hold for existing data.
//! - Ancestor walks terminate even over corrupted parent pointers: a
//!   visited set catches pre-existing cycles and a hard hop cap bounds the
//!   walk unconditionally.

use crate::host::FolderTree;
use crate::model::item::ItemId;
use std::collections::HashSet;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Hard cap on upward parent hops.
///
/// Sidebar hierarchies are shallow in practice; anything deeper than this
/// is treated as corrupted data and the walk stops.
const MAX_PARENT_HOPS: usize = 100;

/// A folder move was rejected because it would create an ancestor cycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CycleError {
    /// The folder being moved.
    pub node: ItemId,
    /// The rejected new parent.
    pub new_parent: ItemId,
}

impl Display for CycleError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "move would create cycle: folder {} under parent {}",
            self.node, self.new_parent
        )
    }
}

impl Error for CycleError {}

/// Cycle detection over a parent-pointer folder forest.
///
/// Stateless; every call reads the current forest through [`FolderTree`].
#[derive(Debug, Default, Clone, Copy)]
pub struct TreeValidator;

impl TreeValidator {
    /// Creates a validator.
    pub fn new() -> Self {
        Self
    }

    /// Returns whether `ancestor_candidate` appears on the parent chain
    /// above `node`.
    ///
    /// Walks upward from `node`, stopping at a root, at a revisited id, or
    /// at the hop cap. A node is not its own descendant under this walk.
    pub fn is_descendant<T: FolderTree>(
        &self,
        tree: &T,
        ancestor_candidate: &ItemId,
        node: &ItemId,
    ) -> bool {
        let mut visited: HashSet<ItemId> = HashSet::new();
        let mut cursor = tree.parent_of(node);
        let mut hops = 0;
        while let Some(current) = cursor {
            if &current == ancestor_candidate {
                return true;
            }
            if !visited.insert(current.clone()) {
                // Pre-existing cycle in the data; treat the chain as ended.
                return false;
            }
            hops += 1;
            if hops >= MAX_PARENT_HOPS {
                return false;
            }
            cursor = tree.parent_of(&current);
        }
        false
    }

    /// Validates re-parenting `node` under `new_parent`.
    ///
    /// Fails when `new_parent` equals `node` or is one of `node`'s
    /// descendants; either would make `node` its own ancestor.
    pub fn validate_move<T: FolderTree>(
        &self,
        tree: &T,
        node: &ItemId,
        new_parent: &ItemId,
    ) -> Result<(), CycleError> {
        if node == new_parent || self.is_descendant(tree, node, new_parent) {
            return Err(CycleError {
                node: node.clone(),
                new_parent: new_parent.clone(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::TreeValidator;
    use crate::host::memory::ParentMap;

    #[test]
    fn walk_terminates_on_corrupted_cycle() {
        let mut tree = ParentMap::new();
        tree.insert("a", Some("b".to_string()));
        tree.insert("b", Some("a".to_string()));

        let validator = TreeValidator::new();
        // "x" is unrelated to the a<->b cycle; the walk must still end.
        assert!(!validator.is_descendant(&tree, &"x".to_string(), &"a".to_string()));
        assert!(validator.is_descendant(&tree, &"b".to_string(), &"a".to_string()));
    }

    #[test]
    fn walk_terminates_at_hop_cap_on_deep_chain() {
        let mut tree = ParentMap::new();
        for depth in 0..300 {
            tree.insert(format!("f{depth}"), Some(format!("f{}", depth + 1)));
        }

        let validator = TreeValidator::new();
        // Ancestor beyond the cap is unreachable; the walk must not hang.
        assert!(!validator.is_descendant(&tree, &"f250".to_string(), &"f0".to_string()));
        assert!(validator.is_descendant(&tree, &"f50".to_string(), &"f0".to_string()));
    }
}
