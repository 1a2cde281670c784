//! Ordering and reclassification over the backing item sequence.
//!
//! Display order inside a lane is the relative order of its members in the
//! backing sequence. There is no rank field; moving an item means moving it
//! in the sequence. Both operations locate items in O(n), which is fine for
//! board-sized collections.

use crate::domain::item::{Item, ItemStatus};
use crate::domain::resolver::position_of;

/// Indices of a committed intra-container move
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reordered {
    pub from: usize,
    pub to: usize,
}

/// Moves `active` to the index `target` occupies, shifting everything in between
///
/// This is a stable array move (remove then insert), not a swap. Indices are
/// taken from the full sequence, not the lane's filtered view. Returns `None`
/// and leaves the sequence untouched when either id is missing or both sit
/// at the same index.
pub fn reorder(items: &mut [Item], active: &str, target: &str) -> Option<Reordered> {
    let from = position_of(items, active)?;
    let to = position_of(items, target)?;

    if from < to {
        items[from..=to].rotate_left(1);
    } else if from > to {
        items[to..=from].rotate_right(1);
    } else {
        return None;
    }

    Some(Reordered { from, to })
}

/// Reassigns the status of `active`, keeping its position in the sequence
///
/// The item shows up in its new lane wherever its sequence position places
/// it, not at the drop point. Returns the previous status when something
/// changed; `None` for a missing item or when it already sits in `to`.
pub fn move_across(items: &mut [Item], active: &str, to: ItemStatus) -> Option<ItemStatus> {
    let item = items.iter_mut().find(|item| item.id.as_str() == active)?;
    if item.status == to {
        return None;
    }
    Some(std::mem::replace(&mut item.status, to))
}
