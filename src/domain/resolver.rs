//! Container resolution for drop targets.
//!
//! A drop target is either a container id (the empty space of a lane) or
//! the id of an item sitting in some lane. Resolution is re-run on every
//! event because the item under the pointer can itself change lanes between
//! two events.

use crate::domain::item::{Item, ItemStatus};

/// Resolves the container a drop target denotes
///
/// Container ids win over item ids and must match exactly. Returns `None`
/// when the target is neither a known container nor a live item (a stale
/// reference).
pub fn resolve_container(items: &[Item], target: &str) -> Option<ItemStatus> {
    if let Some(status) = ItemStatus::from_container_id(target) {
        return Some(status);
    }

    items
        .iter()
        .find(|item| item.id.as_str() == target)
        .map(|item| item.status)
}

/// Position of an item in the full backing sequence
pub fn position_of(items: &[Item], id: &str) -> Option<usize> {
    items.iter().position(|item| item.id.as_str() == id)
}
