//! Context-scoped order lists.
//!
//! # Responsibility
//! - Store the explicit ordered id sequence per context.
//! - Provide the pure `project` query that merges stored order with the
//!   host's raw item list on every render.
//!
//! # Invariants
//! - A stored list never contains the same id twice.
//! - `project` returns exactly the input items once each; stored entries
//!   referencing ids absent from the input are ignored, never an error.
//! - Items absent from the stored list keep their relative input order and
//!   follow all explicitly ordered items.

use crate::model::context::ContextKey;
use crate::model::item::{Item, ItemId};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Side of the target an id is inserted on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertEdge {
    /// Insert immediately before the target id.
    Before,
    /// Insert immediately after the target id.
    After,
}

/// Mapping from context key to an explicit ordered list of item ids.
///
/// Serializable as a plain `string → [string]` map; the host persists and
/// restores this blob with no further schema.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderStore {
    orders: HashMap<ContextKey, Vec<ItemId>>,
}

impl OrderStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the stored order for a context, empty when uninitialized.
    pub fn get_order(&self, context: &ContextKey) -> &[ItemId] {
        self.orders
            .get(context)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Returns whether a context has an explicit order list.
    pub fn is_initialized(&self, context: &ContextKey) -> bool {
        self.orders
            .get(context)
            .map(|ids| !ids.is_empty())
            .unwrap_or(false)
    }

    /// Replaces the stored order for a context wholesale.
    ///
    /// Used for lazy initialization: the first reorder drop inside a context
    /// seeds the list from the then-current display order.
    pub fn set_order(&mut self, context: ContextKey, ids: Vec<ItemId>) {
        self.orders.insert(context, dedup_preserving_order(ids));
    }

    /// Inserts `id` immediately before `target_id` in the context's list.
    ///
    /// Removes `id` from its current position first when present. When
    /// `target_id` is absent, `id` is appended at the end; the fallback is
    /// deterministic, never an error.
    pub fn insert_before(&mut self, context: &ContextKey, id: &str, target_id: &str) {
        self.insert_adjacent(context, id, target_id, InsertEdge::Before);
    }

    /// Inserts `id` immediately after `target_id` in the context's list.
    ///
    /// Same removal and append-fallback rules as [`Self::insert_before`].
    pub fn insert_after(&mut self, context: &ContextKey, id: &str, target_id: &str) {
        self.insert_adjacent(context, id, target_id, InsertEdge::After);
    }

    /// Inserts `id` on the given side of `target_id`.
    pub fn insert_adjacent(
        &mut self,
        context: &ContextKey,
        id: &str,
        target_id: &str,
        edge: InsertEdge,
    ) {
        let ids = self.orders.entry(context.clone()).or_default();
        ids.retain(|existing| existing != id);
        match ids.iter().position(|existing| existing == target_id) {
            Some(index) => {
                let insert_at = match edge {
                    InsertEdge::Before => index,
                    InsertEdge::After => index + 1,
                };
                ids.insert(insert_at, id.to_string());
            }
            None => ids.push(id.to_string()),
        }
    }

    /// Stable-sorts `raw_items` by stored index for this context.
    ///
    /// Pure query, safe to call on every render: items present in the
    /// stored order come first, sorted by stored index; items absent from
    /// it follow in their original relative order. Stored ids with no
    /// matching input item are skipped.
    pub fn project(&self, context: &ContextKey, raw_items: Vec<Item>) -> Vec<Item> {
        let order = match self.orders.get(context) {
            Some(order) if !order.is_empty() => order,
            _ => return raw_items,
        };

        let index_of: HashMap<&str, usize> = order
            .iter()
            .enumerate()
            .map(|(index, id)| (id.as_str(), index))
            .collect();

        let mut ordered: Vec<(usize, Item)> = Vec::new();
        let mut unordered: Vec<Item> = Vec::new();
        for item in raw_items {
            match index_of.get(item.id.as_str()) {
                Some(index) => ordered.push((*index, item)),
                None => unordered.push(item),
            }
        }
        // sort_by_key is stable, but stored indices are unique anyway.
        ordered.sort_by_key(|(index, _)| *index);

        let mut result: Vec<Item> = ordered.into_iter().map(|(_, item)| item).collect();
        result.extend(unordered);
        result
    }

    /// Returns the stored contexts, for diagnostics and persistence.
    pub fn contexts(&self) -> impl Iterator<Item = &ContextKey> {
        self.orders.keys()
    }
}

fn dedup_preserving_order(ids: Vec<ItemId>) -> Vec<ItemId> {
    let mut seen: HashMap<ItemId, ()> = HashMap::with_capacity(ids.len());
    let mut result = Vec::with_capacity(ids.len());
    for id in ids {
        if seen.insert(id.clone(), ()).is_none() {
            result.push(id);
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::{InsertEdge, OrderStore};
    use crate::model::context::ContextKey;

    #[test]
    fn set_order_drops_duplicate_ids() {
        let mut store = OrderStore::new();
        let ctx = ContextKey::tag_list();
        store.set_order(
            ctx.clone(),
            vec!["a".into(), "b".into(), "a".into(), "c".into()],
        );
        assert_eq!(store.get_order(&ctx), ["a", "b", "c"]);
    }

    #[test]
    fn insert_adjacent_appends_when_target_missing() {
        let mut store = OrderStore::new();
        let ctx = ContextKey::tag_list();
        store.set_order(ctx.clone(), vec!["a".into(), "b".into()]);
        store.insert_adjacent(&ctx, "c", "missing", InsertEdge::Before);
        assert_eq!(store.get_order(&ctx), ["a", "b", "c"]);
    }
}
