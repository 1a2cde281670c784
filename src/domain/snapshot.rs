//! Read-only board view handed to the rendering layer after each transition.

use crate::domain::board::Board;
use crate::domain::item::{Item, ItemId, ItemStatus};
use serde::Serialize;

/// One lane as the renderer draws it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LaneSnapshot {
    pub name: String,
    pub status: ItemStatus,
    /// Member ids in display order
    pub items: Vec<ItemId>,
    /// Whether this lane shows the new-item form
    pub editing: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BoardSnapshot {
    pub name: String,
    /// The full backing sequence
    pub items: Vec<Item>,
    pub lanes: Vec<LaneSnapshot>,
    /// Item being dragged, for the overlay
    pub active_item: Option<ItemId>,
    /// Drop target currently under the dragged item (item or container id)
    pub hovered: Option<String>,
    pub editing_lane: Option<ItemStatus>,
}

impl BoardSnapshot {
    /// Captures the current board state
    ///
    /// Lanes follow the configuration. A status without a configured lane
    /// (usually `failed`) gets a trailing lane only while it has members.
    pub fn capture(board: &Board) -> Self {
        let editing_lane = board.editing_lane();
        let lane = |name: &str, status: ItemStatus| LaneSnapshot {
            name: name.to_string(),
            status,
            items: board.container(status).map(|item| item.id.clone()).collect(),
            editing: editing_lane == Some(status),
        };

        let config = board.config();
        let mut lanes: Vec<LaneSnapshot> = config
            .lanes
            .iter()
            .map(|l| lane(&l.name, l.status))
            .collect();

        for status in ItemStatus::ALL {
            if config.lane_for_status(status).is_none() && board.container(status).next().is_some()
            {
                lanes.push(lane(&implicit_lane_name(status), status));
            }
        }

        Self {
            name: config.name.clone(),
            items: board.items().to_vec(),
            lanes,
            active_item: board.active_item().map(|item| item.id.clone()),
            hovered: board
                .gesture()
                .session()
                .and_then(|session| session.over.clone()),
            editing_lane,
        }
    }

    pub fn lane(&self, status: ItemStatus) -> Option<&LaneSnapshot> {
        self.lanes.iter().find(|lane| lane.status == status)
    }

    pub fn to_json(&self) -> crate::error::Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

fn implicit_lane_name(status: ItemStatus) -> String {
    match status {
        ItemStatus::Todo => "To Do",
        ItemStatus::InProgress => "In Progress",
        ItemStatus::Done => "Done",
        ItemStatus::Failed => "Failed",
    }
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::board::BoardConfig;
    use crate::domain::gesture::DragEvent;
    use std::str::FromStr;

    fn board() -> Board {
        let items = vec![
            Item::new(ItemId::from_str("T1").unwrap(), "one", ItemStatus::Todo),
            Item::new(ItemId::from_str("T2").unwrap(), "two", ItemStatus::Todo),
            Item::new(ItemId::from_str("D1").unwrap(), "three", ItemStatus::Done),
        ];
        Board::with_items(BoardConfig::default(), items).unwrap()
    }

    fn lane_ids(snapshot: &BoardSnapshot, status: ItemStatus) -> Vec<String> {
        snapshot
            .lane(status)
            .map(|lane| lane.items.iter().map(|id| id.to_string()).collect())
            .unwrap_or_default()
    }

    #[test]
    fn test_snapshot_lanes() {
        let snapshot = board().snapshot();

        assert_eq!(snapshot.lanes.len(), 3);
        assert_eq!(lane_ids(&snapshot, ItemStatus::Todo), vec!["T1", "T2"]);
        assert!(lane_ids(&snapshot, ItemStatus::InProgress).is_empty());
        assert_eq!(lane_ids(&snapshot, ItemStatus::Done), vec!["D1"]);
        assert!(snapshot.lane(ItemStatus::Failed).is_none());
        assert_eq!(snapshot.active_item, None);
    }

    #[test]
    fn test_snapshot_adds_implicit_failed_lane() {
        let mut board = board();
        board.dispatch(DragEvent::start("T2"));
        board.dispatch(DragEvent::end("T2", "failed"));

        let snapshot = board.snapshot();
        let failed = snapshot.lane(ItemStatus::Failed).unwrap();
        assert_eq!(failed.name, "Failed");
        assert_eq!(lane_ids(&snapshot, ItemStatus::Failed), vec!["T2"]);
    }

    #[test]
    fn test_snapshot_tracks_drag_and_editing() {
        let mut board = board();
        board.set_editing_lane(Some(ItemStatus::Done));
        board.dispatch(DragEvent::start("T1"));

        let snapshot = board.snapshot();
        assert_eq!(snapshot.active_item.as_ref().map(|id| id.as_str()), Some("T1"));
        assert!(snapshot.lane(ItemStatus::Done).unwrap().editing);
        assert!(!snapshot.lane(ItemStatus::Todo).unwrap().editing);
    }

    #[test]
    fn test_snapshot_exposes_hovered_target() {
        let mut board = board();
        assert_eq!(board.snapshot().hovered, None);

        board.dispatch(DragEvent::start("T1"));
        board.dispatch(DragEvent::over("T1", "D1"));
        assert_eq!(board.snapshot().hovered.as_deref(), Some("D1"));

        board.dispatch(DragEvent::over("T1", "in-progress"));
        assert_eq!(board.snapshot().hovered.as_deref(), Some("in-progress"));

        board.dispatch(DragEvent::end("T1", "in-progress"));
        assert_eq!(board.snapshot().hovered, None);
    }

    #[test]
    fn test_snapshot_json() {
        let json = board().snapshot().to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["name"], "Default Board");
        assert_eq!(value["items"][0]["id"], "T1");
        assert_eq!(value["lanes"][1]["status"], "in-progress");
        assert!(value["active_item"].is_null());
        assert!(value["hovered"].is_null());
    }
}
