//! Pointer-position gesture zones.
//!
//! # Responsibility
//! - Map a pointer's vertical position within an item's bounds to one
//!   gesture zone: place before, place after, or move into.
//!
//! # Invariants
//! - Classification is a pure function of (offset, container flag), so the
//!   drag-over indicator and the drop action can never disagree.
//! - Leaf items never classify as `Into`.

/// Fraction of the item height reserved for each edge zone.
const EDGE_FRACTION: f32 = 0.2;

/// Gesture zone resolved from a pointer position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Zone {
    /// Place the dragged item immediately before the hovered item.
    Before,
    /// Move the dragged item inside the hovered container.
    Into,
    /// Place the dragged item immediately after the hovered item.
    After,
}

/// Classifies a normalized pointer offset (0.0 = top edge, 1.0 = bottom
/// edge) within an item's bounding box.
///
/// Top 20% → `Before`, bottom 20% → `After`. The middle 60% is `Into` for
/// containers; for leaves it collapses to the nearer edge, so a single
/// pointer position always resolves exactly one intent without a modifier
/// key. Out-of-range offsets clamp to the nearest edge zone.
pub fn classify_zone(offset: f32, is_container: bool) -> Zone {
    let offset = offset.clamp(0.0, 1.0);
    if offset < EDGE_FRACTION {
        return Zone::Before;
    }
    if offset > 1.0 - EDGE_FRACTION {
        return Zone::After;
    }
    if is_container {
        Zone::Into
    } else if offset < 0.5 {
        Zone::Before
    } else {
        Zone::After
    }
}
