//! Host-facing facades.
//!
//! # Responsibility
//! - Compose the engine's stores and state machines into the event-handler
//!   surface the sidebar UI consumes.
//! - Keep the host decoupled from internal module boundaries.

pub mod sidebar_service;
