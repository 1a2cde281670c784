use crate::domain::item::{Item, ItemStatus};
use crate::domain::resolver;
use crate::domain::sequence::{self, Reordered};

/// Where items sit and how they are moved around
///
/// The gesture controller only talks to this trait, so the implicit
/// array-position ranking used by [`Vec<Item>`] can be swapped for another
/// scheme (explicit fractional ranks, say) without touching the state machine.
pub trait BoardLayout {
    /// Container a drop target denotes, `None` for a stale reference
    fn resolve_container(&self, target: &str) -> Option<ItemStatus>;

    /// Moves `active` to the slot `target` occupies within their shared container
    fn reorder(&mut self, active: &str, target: &str) -> Option<Reordered>;

    /// Reclassifies `active` into `to`, returning its previous container on change
    fn move_across(&mut self, active: &str, to: ItemStatus) -> Option<ItemStatus>;
}

impl BoardLayout for Vec<Item> {
    fn resolve_container(&self, target: &str) -> Option<ItemStatus> {
        resolver::resolve_container(self, target)
    }

    fn reorder(&mut self, active: &str, target: &str) -> Option<Reordered> {
        sequence::reorder(self, active, target)
    }

    fn move_across(&mut self, active: &str, to: ItemStatus) -> Option<ItemStatus> {
        sequence::move_across(self, active, to)
    }
}
