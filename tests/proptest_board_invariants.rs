//! Property-based invariant tests for the drag engine.
//!
//! 1. Item ids and payloads survive any reorder/move sequence unchanged
//! 2. The multiset of ids is conserved (no loss, no duplication)
//! 3. `move_across` is idempotent
//! 4. Reordering an item onto itself is a no-op
//! 5. A cancelling `DragEnd` never changes the sequence order
//! 6. Every gesture ends with the controller idle

use laneboard_core::domain::{move_across, reorder};
use laneboard_core::{Board, BoardConfig, DragEvent, Item, ItemId, ItemStatus};
use proptest::prelude::*;
use std::str::FromStr;

// ── Strategies ──────────────────────────────────────────────────────────

const MAX_ITEMS: usize = 12;

fn status_strategy() -> impl Strategy<Value = ItemStatus> {
    prop_oneof![
        Just(ItemStatus::Todo),
        Just(ItemStatus::InProgress),
        Just(ItemStatus::Done),
        Just(ItemStatus::Failed),
    ]
}

fn items_strategy() -> impl Strategy<Value = Vec<Item>> {
    prop::collection::vec(status_strategy(), 1..MAX_ITEMS).prop_map(|statuses| {
        statuses
            .into_iter()
            .enumerate()
            .map(|(n, status)| {
                let id = format!("I{n}");
                Item::new(ItemId::from_str(&id).unwrap(), format!("title {id}"), status)
            })
            .collect()
    })
}

/// A drop target: an item (possibly out of range, i.e. stale) or a container
fn target_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        (0..MAX_ITEMS + 2).prop_map(|n| format!("I{n}")),
        status_strategy().prop_map(|s| s.as_str().to_string()),
    ]
}

#[derive(Debug, Clone)]
enum Op {
    Reorder(usize, String),
    Move(usize, ItemStatus),
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        (0..MAX_ITEMS, target_strategy()).prop_map(|(a, t)| Op::Reorder(a, t)),
        (0..MAX_ITEMS, status_strategy()).prop_map(|(a, s)| Op::Move(a, s)),
    ]
}

fn apply_ops(items: &mut [Item], ops: &[Op]) {
    for op in ops {
        match op {
            Op::Reorder(a, target) => {
                reorder(items, &format!("I{a}"), target);
            }
            Op::Move(a, status) => {
                move_across(items, &format!("I{a}"), *status);
            }
        }
    }
}

fn sorted_ids(items: &[Item]) -> Vec<String> {
    let mut ids: Vec<String> = items.iter().map(|i| i.id.to_string()).collect();
    ids.sort();
    ids
}

fn order(items: &[Item]) -> Vec<String> {
    items.iter().map(|i| i.id.to_string()).collect()
}

// ═══════════════════════════════════════════════════════════════════════
// 1-2. Identity and conservation
// ═══════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn ids_are_conserved_across_operations(
        mut items in items_strategy(),
        ops in prop::collection::vec(op_strategy(), 0..40),
    ) {
        let before = sorted_ids(&items);
        apply_ops(&mut items, &ops);
        prop_assert_eq!(sorted_ids(&items), before);
    }

    #[test]
    fn ids_stay_bound_to_their_payload(
        mut items in items_strategy(),
        ops in prop::collection::vec(op_strategy(), 0..40),
    ) {
        apply_ops(&mut items, &ops);
        for item in &items {
            prop_assert_eq!(&item.title, &format!("title {}", item.id));
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════
// 3-4. Idempotence and equal-index no-op
// ═══════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn move_across_is_idempotent(
        items in items_strategy(),
        active in 0..MAX_ITEMS,
        status in status_strategy(),
    ) {
        let id = format!("I{active}");

        let mut once = items.clone();
        move_across(&mut once, &id, status);

        let mut twice = once.clone();
        prop_assert_eq!(move_across(&mut twice, &id, status), None);
        prop_assert_eq!(twice, once);
    }

    #[test]
    fn reorder_onto_self_is_noop(items in items_strategy(), active in 0..MAX_ITEMS) {
        let id = format!("I{active}");
        let mut after = items.clone();

        prop_assert_eq!(reorder(&mut after, &id, &id), None);
        prop_assert_eq!(after, items);
    }
}

// ═══════════════════════════════════════════════════════════════════════
// 5-6. Gesture lifecycle
// ═══════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn cancel_never_changes_order(
        items in items_strategy(),
        active in 0..MAX_ITEMS,
        hovers in prop::collection::vec(target_strategy(), 0..8),
    ) {
        let mut board = Board::with_items(BoardConfig::default(), items).unwrap();
        let id = format!("I{active}");

        board.dispatch(DragEvent::start(id.as_str()));
        for over in &hovers {
            board.dispatch(DragEvent::over(id.as_str(), over.as_str()));
        }

        let before_end = board.items().to_vec();
        board.dispatch(DragEvent::cancel(id.as_str()));

        prop_assert_eq!(board.items(), before_end.as_slice());
        prop_assert!(!board.gesture().is_dragging());
    }

    #[test]
    fn gestures_conserve_items_and_end_idle(
        items in items_strategy(),
        gestures in prop::collection::vec(
            (0..MAX_ITEMS, prop::collection::vec(target_strategy(), 0..4), prop::option::of(target_strategy())),
            0..10,
        ),
    ) {
        let mut board = Board::with_items(BoardConfig::default(), items).unwrap();
        let before = sorted_ids(board.items());

        for (active, hovers, drop) in gestures {
            let id = format!("I{active}");
            board.dispatch(DragEvent::start(id.as_str()));
            for over in &hovers {
                board.dispatch(DragEvent::over(id.as_str(), over.as_str()));
            }
            match drop {
                Some(target) => board.dispatch(DragEvent::end(id.as_str(), target)),
                None => board.dispatch(DragEvent::cancel(id.as_str())),
            };
            prop_assert!(!board.gesture().is_dragging());
        }

        prop_assert_eq!(sorted_ids(board.items()), before);
    }

    #[test]
    fn hover_never_reorders(
        items in items_strategy(),
        active in 0..MAX_ITEMS,
        hovers in prop::collection::vec(target_strategy(), 0..8),
    ) {
        let mut board = Board::with_items(BoardConfig::default(), items).unwrap();
        let before = order(board.items());
        let id = format!("I{active}");

        board.dispatch(DragEvent::start(id.as_str()));
        for over in &hovers {
            board.dispatch(DragEvent::over(id.as_str(), over.as_str()));
        }

        prop_assert_eq!(order(board.items()), before);
    }
}
