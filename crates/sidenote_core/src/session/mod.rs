//! Drag gesture state machine.
//!
//! # Responsibility
//! - Track the one active drag: its id batch, kind, origin context, and the
//!   currently classified hover target.
//! - Enforce hover eligibility so an indicator is never shown for a drop
//!   the engine would refuse.
//!
//! # Invariants
//! - At most one drag exists at a time; `start` while armed is rejected.
//! - A reorder target is only ever accepted for a single-id drag whose
//!   context passes the cross-context whitelist.
//! - Every path, drop or cancel, returns the machine to `Idle`.

pub mod timer;
pub mod zone;

use crate::host::ItemProvider;
use crate::model::context::{ContextKey, ContextScope};
use crate::model::item::{ItemId, ItemKind};
use crate::order::store::InsertEdge;
use log::debug;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::time::Instant;
use timer::LeaveDebounce;

/// Errors from drag session transitions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    /// `start` was called while a drag is already armed or targeting.
    DragInProgress,
    /// `start` was called with an empty id batch.
    EmptyDrag,
}

impl Display for SessionError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DragInProgress => write!(f, "a drag gesture is already in progress"),
            Self::EmptyDrag => write!(f, "drag started with no item ids"),
        }
    }
}

impl Error for SessionError {}

/// The id batch carried by one drag gesture.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DragPayload {
    /// The dragged ids. Kind-homogeneous by construction.
    pub ids: Vec<ItemId>,
    /// Kind shared by every dragged id.
    pub kind: ItemKind,
    /// Context the drag started in.
    pub origin: ContextKey,
}

/// The classified hover target of a drag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DragTarget {
    /// Move the batch inside a container.
    Into {
        /// The hovered container's folder id.
        container_id: ItemId,
    },
    /// Place the single dragged id adjacent to a sibling.
    Reorder {
        /// The hovered sibling id.
        target_id: ItemId,
        /// Which side of the sibling.
        edge: InsertEdge,
        /// The collection the sibling belongs to.
        context: ContextKey,
    },
}

/// Drag machine state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DragState {
    /// No gesture active.
    Idle,
    /// Pointer down on a draggable item, no eligible target hovered yet.
    Armed(DragPayload),
    /// An eligible target is hovered.
    Targeting {
        /// The active drag batch.
        payload: DragPayload,
        /// The classified target.
        target: DragTarget,
    },
}

/// Everything a drop needs to be committed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DropPlan {
    /// The drag batch.
    pub payload: DragPayload,
    /// The target the pointer was released over.
    pub target: DragTarget,
}

/// Single drag gesture state machine, one instance per sidebar.
///
/// All transitions run synchronously inside the host's pointer event
/// dispatch; the only suspension point is the leave-debounce, driven by
/// [`DragSession::poll`].
#[derive(Debug, Default)]
pub struct DragSession {
    state: DragState,
    leave: LeaveDebounce,
}

impl Default for DragState {
    fn default() -> Self {
        Self::Idle
    }
}

impl DragSession {
    /// Creates an idle session.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the current machine state.
    pub fn state(&self) -> &DragState {
        &self.state
    }

    /// Returns whether no drag is active.
    pub fn is_idle(&self) -> bool {
        matches!(self.state, DragState::Idle)
    }

    /// Returns the current hover target, if any.
    pub fn current_target(&self) -> Option<&DragTarget> {
        match &self.state {
            DragState::Targeting { target, .. } => Some(target),
            _ => None,
        }
    }

    /// Returns the active drag batch, if any.
    pub fn payload(&self) -> Option<&DragPayload> {
        match &self.state {
            DragState::Idle => None,
            DragState::Armed(payload) => Some(payload),
            DragState::Targeting { payload, .. } => Some(payload),
        }
    }

    /// Arms a new drag. `Idle → Armed`.
    ///
    /// # Errors
    /// - `DragInProgress` when a gesture is already armed or targeting; the
    ///   host should never produce two concurrent native drags, but the
    ///   invariant is asserted defensively.
    /// - `EmptyDrag` when `ids` is empty.
    pub fn start(
        &mut self,
        ids: Vec<ItemId>,
        kind: ItemKind,
        origin: ContextKey,
    ) -> Result<(), SessionError> {
        if !self.is_idle() {
            return Err(SessionError::DragInProgress);
        }
        if ids.is_empty() {
            return Err(SessionError::EmptyDrag);
        }
        debug!(
            "event=drag_start module=session status=ok kind={:?} ids={} origin={}",
            kind,
            ids.len(),
            origin
        );
        self.leave.cancel();
        self.state = DragState::Armed(DragPayload { ids, kind, origin });
        Ok(())
    }

    /// Targets a container hover. `Armed/Targeting → Targeting{Into}`.
    ///
    /// Ignored (returns `false`) when no drag is active, when the dragged
    /// kind has no container relationship (tags), or when the hovered
    /// container is itself one of the dragged ids.
    pub fn hover_container(&mut self, container_id: &ItemId) -> bool {
        let eligible = self
            .payload()
            .map(|p| p.kind != ItemKind::Tag && !p.ids.contains(container_id))
            .unwrap_or(false);
        if !eligible {
            return false;
        }
        let payload = match self.take_payload() {
            Some(payload) => payload,
            None => return false,
        };
        self.leave.cancel();
        debug!(
            "event=drag_hover module=session status=ok target=into container={container_id}"
        );
        self.state = DragState::Targeting {
            payload,
            target: DragTarget::Into {
                container_id: container_id.clone(),
            },
        };
        true
    }

    /// Targets a reorder hover. `Armed/Targeting → Targeting{Reorder}`.
    ///
    /// Accepted only for a single-id drag over a context that passes the
    /// whitelist: the origin context itself, an expanded folder's matching
    /// list, the uncategorized bucket (notes), or the root list (folders).
    /// Anything else is ignored with no state change, so a reorder
    /// affordance never appears over a collapsed container.
    pub fn hover_reorder_zone<P: ItemProvider>(
        &mut self,
        view: &P,
        target_id: &ItemId,
        edge: InsertEdge,
        context: &ContextKey,
    ) -> bool {
        // Reorders are single-item operations; a batch hover would show an
        // indicator that understates what would move.
        let eligible = self
            .payload()
            .map(|p| p.ids.len() == 1 && reorder_allowed(view, p.kind, &p.origin, context))
            .unwrap_or(false);
        if !eligible {
            return false;
        }
        let payload = match self.take_payload() {
            Some(payload) => payload,
            None => return false,
        };
        self.leave.cancel();
        debug!(
            "event=drag_hover module=session status=ok target=reorder item={target_id} context={context}"
        );
        self.state = DragState::Targeting {
            payload,
            target: DragTarget::Reorder {
                target_id: target_id.clone(),
                edge,
                context: context.clone(),
            },
        };
        true
    }

    /// Schedules the hover target to clear after the leave debounce.
    ///
    /// The clear is not immediate: a pointer crossing the boundary between
    /// two adjacent targets re-hovers within the window and cancels it,
    /// which is what keeps the indicator from flickering.
    pub fn leave(&mut self, now: Instant) {
        if matches!(self.state, DragState::Targeting { .. }) {
            self.leave.schedule(now);
        }
    }

    /// Lets a due leave-debounce fire. `Targeting → Armed`.
    ///
    /// Returns `true` when the hover target was cleared.
    pub fn poll(&mut self, now: Instant) -> bool {
        if !self.leave.fire_due(now) {
            return false;
        }
        match std::mem::take(&mut self.state) {
            DragState::Targeting { payload, .. } => {
                debug!("event=drag_leave module=session status=ok");
                self.state = DragState::Armed(payload);
                true
            }
            other => {
                self.state = other;
                false
            }
        }
    }

    /// Takes the drop plan and resets to `Idle`.
    ///
    /// Returns `None` (still resetting) when the session is idle or has no
    /// target, in which case the drop is a no-op.
    pub fn take_drop(&mut self) -> Option<DropPlan> {
        self.leave.cancel();
        match std::mem::take(&mut self.state) {
            DragState::Targeting { payload, target } => Some(DropPlan { payload, target }),
            _ => None,
        }
    }

    /// Abandons the gesture without a drop. `* → Idle`.
    pub fn cancel(&mut self) {
        if !self.is_idle() {
            debug!("event=drag_cancel module=session status=ok");
        }
        self.leave.cancel();
        self.state = DragState::Idle;
    }

    fn take_payload(&mut self) -> Option<DragPayload> {
        match std::mem::take(&mut self.state) {
            DragState::Idle => None,
            DragState::Armed(payload) => Some(payload),
            DragState::Targeting { payload, .. } => Some(payload),
        }
    }
}

/// Cross-context reorder whitelist.
fn reorder_allowed<P: ItemProvider>(
    view: &P,
    kind: ItemKind,
    origin: &ContextKey,
    context: &ContextKey,
) -> bool {
    if context == origin {
        return true;
    }
    match (kind, context.scope()) {
        (ItemKind::Note, ContextScope::FolderNotes(folder)) => view.is_folder_expanded(&folder),
        (ItemKind::Note, ContextScope::UncategorizedNotes) => true,
        (ItemKind::Folder, ContextScope::RootFolders) => true,
        (ItemKind::Folder, ContextScope::FolderChildren(folder)) => {
            view.is_folder_expanded(&folder)
        }
        _ => false,
    }
}
