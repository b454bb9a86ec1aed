//! SQLite-backed UI state persistence.
//!
//! # Responsibility
//! - Persist and restore opaque UI state blobs, including the sidebar
//!   order store, in the host database's `settings` key/value table.
//!
//! # Invariants
//! - The schema bootstrap is idempotent (`CREATE TABLE IF NOT EXISTS`).
//! - Loading never fails on content: a missing or malformed order blob
//!   restores as an empty store.
//! - UI state keys are namespaced under the `ui.` prefix.

use crate::order::store::OrderStore;
use log::{info, warn};
use rusqlite::{Connection, OptionalExtension};
use std::collections::HashMap;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Settings key holding the serialized sidebar order store.
pub const SIDEBAR_ORDER_KEY: &str = "ui.sidebar.order";

const UI_KEY_PREFIX: &str = "ui.";

/// Result type used by persistence operations.
pub type PersistResult<T> = Result<T, PersistError>;

/// Errors from UI state persistence.
#[derive(Debug)]
pub enum PersistError {
    /// Underlying SQLite error.
    Sqlite(rusqlite::Error),
    /// The order store could not be encoded as JSON.
    Encode(serde_json::Error),
}

impl Display for PersistError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Sqlite(err) => write!(f, "{err}"),
            Self::Encode(err) => write!(f, "failed to encode ui state: {err}"),
        }
    }
}

impl Error for PersistError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Sqlite(err) => Some(err),
            Self::Encode(err) => Some(err),
        }
    }
}

impl From<rusqlite::Error> for PersistError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Sqlite(value)
    }
}

impl From<serde_json::Error> for PersistError {
    fn from(value: serde_json::Error) -> Self {
        Self::Encode(value)
    }
}

/// Creates the `settings` table when absent.
///
/// Safe to call on every startup against an existing database.
pub fn ensure_settings_table(conn: &Connection) -> PersistResult<()> {
    conn.execute(
        "CREATE TABLE IF NOT EXISTS settings (
            key TEXT PRIMARY KEY,
            value TEXT NOT NULL,
            updated_at TEXT NOT NULL
        );",
        [],
    )?;
    Ok(())
}

/// Upserts one UI state value.
pub fn save_ui_state(conn: &Connection, key: &str, value: &str) -> PersistResult<()> {
    conn.execute(
        "INSERT INTO settings (key, value, updated_at)
         VALUES (?1, ?2, strftime('%Y-%m-%dT%H:%M:%fZ', 'now'))
         ON CONFLICT(key) DO UPDATE SET
             value = excluded.value,
             updated_at = excluded.updated_at;",
        [key, value],
    )?;
    Ok(())
}

/// Loads one UI state value, `None` when the key was never saved.
pub fn load_ui_state(conn: &Connection, key: &str) -> PersistResult<Option<String>> {
    let value = conn
        .query_row("SELECT value FROM settings WHERE key = ?1;", [key], |row| {
            row.get(0)
        })
        .optional()?;
    Ok(value)
}

/// Loads every `ui.`-prefixed setting.
pub fn load_all_ui_state(conn: &Connection) -> PersistResult<HashMap<String, String>> {
    let mut stmt =
        conn.prepare("SELECT key, value FROM settings WHERE key LIKE ?1 || '%';")?;
    let mut rows = stmt.query([UI_KEY_PREFIX])?;
    let mut settings = HashMap::new();
    while let Some(row) = rows.next()? {
        let key: String = row.get(0)?;
        let value: String = row.get(1)?;
        settings.insert(key, value);
    }
    Ok(settings)
}

/// Persists the sidebar order store under [`SIDEBAR_ORDER_KEY`].
pub fn save_sidebar_order(conn: &Connection, orders: &OrderStore) -> PersistResult<()> {
    let blob = serde_json::to_string(orders)?;
    save_ui_state(conn, SIDEBAR_ORDER_KEY, &blob)?;
    info!(
        "event=order_save module=persist status=ok contexts={}",
        orders.contexts().count()
    );
    Ok(())
}

/// Restores the sidebar order store.
///
/// A missing key or a blob that fails to decode yields an empty store;
/// stale state must never block startup.
pub fn load_sidebar_order(conn: &Connection) -> PersistResult<OrderStore> {
    let blob = match load_ui_state(conn, SIDEBAR_ORDER_KEY)? {
        Some(blob) => blob,
        None => return Ok(OrderStore::new()),
    };
    match serde_json::from_str(&blob) {
        Ok(orders) => Ok(orders),
        Err(err) => {
            warn!(
                "event=order_load module=persist status=degraded error_code=malformed_blob error={err}"
            );
            Ok(OrderStore::new())
        }
    }
}
