//! Host-facing sidebar ordering and drag facade.
//!
//! # Responsibility
//! - Own the one OrderStore and DragSession per sidebar instance.
//! - Translate host pointer events into session transitions and commits.
//!
//! # Invariants
//! - Drag-over and drop use the same zone classification, so the indicator
//!   shown during hover always matches the action a drop performs.
//! - Commits run to completion before control returns to the dispatcher;
//!   no host callback can re-enter a half-applied commit.

use crate::host::{FolderTree, ItemProvider, MutationSink, SelectionView};
use crate::model::context::ContextKey;
use crate::model::item::{Item, ItemId, ItemKind};
use crate::order::store::{InsertEdge, OrderStore};
use crate::reconcile::{CommitOutcome, MoveReconciler};
use crate::session::zone::{classify_zone, Zone};
use crate::session::{DragSession, DragState, SessionError};
use std::time::Instant;

/// One sidebar's ordering state and drag machinery.
#[derive(Debug, Default)]
pub struct SidebarService {
    orders: OrderStore,
    session: DragSession,
    reconciler: MoveReconciler,
}

impl SidebarService {
    /// Creates a service with an empty order store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a service from a restored order store.
    ///
    /// The blob is treated as opaque: entries referencing ids that no
    /// longer exist are filtered by `project`, never an error.
    pub fn with_orders(orders: OrderStore) -> Self {
        Self {
            orders,
            session: DragSession::new(),
            reconciler: MoveReconciler::new(),
        }
    }

    /// Returns the order store, e.g. for persistence.
    pub fn orders(&self) -> &OrderStore {
        &self.orders
    }

    /// Returns the drag session state for indicator rendering.
    pub fn drag_state(&self) -> &DragState {
        self.session.state()
    }

    /// Pure render query: stable-sorts `raw_items` by this context's
    /// explicit order. Safe to call on every render.
    pub fn project(&self, context: &ContextKey, raw_items: Vec<Item>) -> Vec<Item> {
        self.orders.project(context, raw_items)
    }

    /// Arms a drag from a pointer-down on `pressed_id`.
    ///
    /// When the pressed item is part of the current selection the whole
    /// selection drags together; otherwise the selection is cleared and the
    /// single pressed id drags alone.
    pub fn on_drag_start<S: SelectionView>(
        &mut self,
        selection: &mut S,
        pressed_id: &ItemId,
        kind: ItemKind,
        origin: ContextKey,
    ) -> Result<(), SessionError> {
        let ids = if selection.selection_kind() == Some(kind) && selection.is_selected(pressed_id)
        {
            selection.selected_ids()
        } else {
            selection.clear_selection();
            vec![pressed_id.clone()]
        };
        self.session.start(ids, kind, origin)
    }

    /// Routes a drag-over on one item's bounds through zone classification.
    ///
    /// `offset` is the pointer's vertical position normalized to the item's
    /// bounding box (0.0 top, 1.0 bottom). Returns `true` when the hover
    /// produced or kept an eligible target.
    pub fn on_drag_over_item<P: ItemProvider>(
        &mut self,
        view: &P,
        item: &Item,
        offset: f32,
        context: &ContextKey,
    ) -> bool {
        match classify_zone(offset, item.kind.is_container()) {
            Zone::Into => self.on_drag_over_container(&item.id),
            Zone::Before => {
                self.on_drag_over_reorder_zone(view, &item.id, InsertEdge::Before, context)
            }
            Zone::After => {
                self.on_drag_over_reorder_zone(view, &item.id, InsertEdge::After, context)
            }
        }
    }

    /// Targets a container hover directly.
    pub fn on_drag_over_container(&mut self, container_id: &ItemId) -> bool {
        self.session.hover_container(container_id)
    }

    /// Targets a reorder hover directly.
    pub fn on_drag_over_reorder_zone<P: ItemProvider>(
        &mut self,
        view: &P,
        target_id: &ItemId,
        edge: InsertEdge,
        context: &ContextKey,
    ) -> bool {
        self.session
            .hover_reorder_zone(view, target_id, edge, context)
    }

    /// Schedules the hover target to clear after the leave debounce.
    pub fn on_drag_leave(&mut self, now: Instant) {
        self.session.leave(now);
    }

    /// Drives the leave debounce; the host calls this from its timer
    /// dispatch. Returns `true` when the hover target was cleared.
    pub fn poll(&mut self, now: Instant) -> bool {
        self.session.poll(now)
    }

    /// Commits the drop and returns the outcome for user-facing notices.
    ///
    /// No-ops (returning an empty outcome) when nothing was targeted. The
    /// session returns to idle unconditionally.
    pub fn on_drop<H>(&mut self, host: &mut H) -> CommitOutcome
    where
        H: ItemProvider + FolderTree + MutationSink,
    {
        match self.session.take_drop() {
            Some(plan) => self.reconciler.commit(host, &mut self.orders, plan),
            None => CommitOutcome::default(),
        }
    }

    /// Abandons the gesture without mutating anything.
    pub fn on_cancel(&mut self) {
        self.session.cancel();
    }
}
