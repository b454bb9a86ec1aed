//! Sidebar ordering and drag-reconciliation core for Sidenote.
//!
//! This crate owns the manual-ordering and pointer-drag semantics of the
//! note-taking sidebar: context-scoped order lists, gesture zone
//! classification, the single drag state machine, cycle-safe folder
//! re-parenting, and the reconciliation of completed drops against the
//! host's authoritative store. Rendering, theming, content parsing, and
//! storage stay on the host side of the seams in [`host`].

pub mod host;
pub mod logging;
pub mod model;
pub mod order;
pub mod persist;
pub mod reconcile;
pub mod service;
pub mod session;
pub mod tree;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::context::{ContextKey, ContextScope};
pub use model::item::{FolderNode, Item, ItemId, ItemKind};
pub use order::store::{InsertEdge, OrderStore};
pub use persist::{
    ensure_settings_table, load_sidebar_order, save_sidebar_order, PersistError, PersistResult,
};
pub use reconcile::{CommitOutcome, MoveReconciler, SkipReason};
pub use service::sidebar_service::SidebarService;
pub use session::zone::{classify_zone, Zone};
pub use session::{DragPayload, DragSession, DragState, DragTarget, DropPlan, SessionError};
pub use tree::{CycleError, TreeValidator};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
