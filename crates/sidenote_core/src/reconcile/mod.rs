//! Drop commit reconciliation.
//!
//! # Responsibility
//! - Turn a completed drag into authoritative mutations: folder/parent
//!   reassignments through the host sink plus order-list updates.
//! - Validate each move and degrade per-id, never per-batch.
//!
//! # Invariants
//! - A folder reassignment is requested only after cycle validation passes.
//! - Batches are best-effort: a rejected id never blocks unrelated ids, and
//!   already-applied moves stay applied.
//! - Self-moves and stale references are silent no-ops; only cycle
//!   rejections surface in the skip list for a user-facing notice.

use crate::host::{FolderTree, ItemProvider, MutationSink};
use crate::model::context::{ContextKey, ContextScope};
use crate::model::item::{ItemId, ItemKind};
use crate::order::store::{InsertEdge, OrderStore};
use crate::session::{DragTarget, DropPlan};
use crate::tree::TreeValidator;
use log::{info, warn};
use std::fmt::{Display, Formatter};

/// Why one id of a batch was not applied.
///
/// Self-moves, stale references, and forced drops against the hover
/// whitelist degrade to silent no-ops and never appear here; only cycle
/// rejections carry a user-facing notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// The move would make a folder its own ancestor.
    Cycle,
}

impl Display for SkipReason {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Cycle => write!(f, "move would create a folder cycle"),
        }
    }
}

/// Result of committing one drop.
///
/// `skipped` carries only the rejections worth a user-facing notice;
/// self-moves and stale references are filtered silently.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommitOutcome {
    /// Ids whose moves were applied.
    pub applied: Vec<ItemId>,
    /// Ids skipped, with the reason.
    pub skipped: Vec<(ItemId, SkipReason)>,
}

impl CommitOutcome {
    /// Returns whether the commit changed nothing.
    pub fn is_noop(&self) -> bool {
        self.applied.is_empty() && self.skipped.is_empty()
    }
}

/// Commits completed drags against the host store and the order store.
#[derive(Debug, Default, Clone, Copy)]
pub struct MoveReconciler {
    validator: TreeValidator,
}

impl MoveReconciler {
    /// Creates a reconciler.
    pub fn new() -> Self {
        Self {
            validator: TreeValidator::new(),
        }
    }

    /// Commits one drop plan.
    ///
    /// Every path completes; the caller resets the drag session regardless
    /// of the outcome.
    pub fn commit<H>(&self, host: &mut H, orders: &mut OrderStore, plan: DropPlan) -> CommitOutcome
    where
        H: ItemProvider + FolderTree + MutationSink,
    {
        let outcome = match plan.target {
            DragTarget::Into { ref container_id } => self.commit_into(
                host,
                &plan.payload.ids,
                plan.payload.kind,
                container_id,
            ),
            DragTarget::Reorder {
                ref target_id,
                edge,
                ref context,
            } => self.commit_reorder(
                host,
                orders,
                &plan.payload.ids,
                plan.payload.kind,
                &plan.payload.origin,
                target_id,
                edge,
                context,
            ),
        };
        info!(
            "event=drag_commit module=reconcile status=ok applied={} skipped={}",
            outcome.applied.len(),
            outcome.skipped.len()
        );
        outcome
    }

    /// Moves a batch inside a container: note → folder assignment,
    /// folder → parent reassignment after cycle validation.
    fn commit_into<H>(
        &self,
        host: &mut H,
        ids: &[ItemId],
        kind: ItemKind,
        container_id: &ItemId,
    ) -> CommitOutcome
    where
        H: ItemProvider + FolderTree + MutationSink,
    {
        let mut outcome = CommitOutcome::default();
        if !host.item_exists(container_id) {
            // The container vanished under the drag; expected under
            // concurrent external edits, never surfaced.
            return outcome;
        }

        for id in ids {
            if id == container_id {
                continue;
            }
            if !host.item_exists(id) {
                continue;
            }
            match kind {
                ItemKind::Note => {
                    host.reassign_folder(id, Some(container_id.clone()));
                    outcome.applied.push(id.clone());
                }
                ItemKind::Folder => {
                    if self.validator.validate_move(host, id, container_id).is_err() {
                        warn!(
                            "event=drag_commit module=reconcile status=skip reason=cycle folder={id} parent={container_id}"
                        );
                        outcome.skipped.push((id.clone(), SkipReason::Cycle));
                        continue;
                    }
                    host.reassign_parent(id, Some(container_id.clone()));
                    outcome.applied.push(id.clone());
                }
                // Tags have no container; the session never targets one,
                // but a forced drop degrades to a no-op.
                ItemKind::Tag => {}
            }
        }
        outcome
    }

    /// Places the single dragged id adjacent to a sibling, reassigning its
    /// container first when the drop crossed contexts.
    #[allow(clippy::too_many_arguments)]
    fn commit_reorder<H>(
        &self,
        host: &mut H,
        orders: &mut OrderStore,
        ids: &[ItemId],
        kind: ItemKind,
        origin: &ContextKey,
        target_id: &ItemId,
        edge: InsertEdge,
        context: &ContextKey,
    ) -> CommitOutcome
    where
        H: ItemProvider + FolderTree + MutationSink,
    {
        let mut outcome = CommitOutcome::default();
        // Reorders are never batched; the session only targets a reorder
        // for single-id drags.
        let id = match ids.first() {
            Some(id) => id,
            None => return outcome,
        };
        if id == target_id {
            return outcome;
        }
        if !host.item_exists(id) {
            return outcome;
        }

        if context != origin {
            match (kind, context.scope()) {
                (ItemKind::Note, ContextScope::FolderNotes(folder)) => {
                    if !host.item_exists(&folder) {
                        // The destination folder vanished under the drag;
                        // expected under concurrent external edits, never
                        // surfaced.
                        return outcome;
                    }
                    host.reassign_folder(id, Some(folder));
                }
                (ItemKind::Note, ContextScope::UncategorizedNotes) => {
                    host.reassign_folder(id, None);
                }
                (ItemKind::Folder, ContextScope::RootFolders) => {
                    host.reassign_parent(id, None);
                }
                (ItemKind::Folder, ContextScope::FolderChildren(parent)) => {
                    if !host.item_exists(&parent) {
                        return outcome;
                    }
                    if self.validator.validate_move(host, id, &parent).is_err() {
                        warn!(
                            "event=drag_commit module=reconcile status=skip reason=cycle folder={id} parent={parent}"
                        );
                        outcome.skipped.push((id.clone(), SkipReason::Cycle));
                        return outcome;
                    }
                    host.reassign_parent(id, Some(parent));
                }
                // A forced drop against the whitelist degrades to a no-op.
                _ => return outcome,
            }
        }

        if !orders.is_initialized(context) {
            // First explicit reorder in this context: seed from the current
            // display order, including the moved id if not yet a member.
            let mut seed: Vec<ItemId> = host
                .items_in(context)
                .into_iter()
                .map(|item| item.id)
                .collect();
            if !seed.iter().any(|existing| existing == id) {
                seed.push(id.clone());
            }
            orders.set_order(context.clone(), seed);
        }
        orders.insert_adjacent(context, id, target_id, edge);
        outcome.applied.push(id.clone());
        outcome
    }
}
