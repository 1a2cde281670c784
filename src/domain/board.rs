use crate::domain::gesture::{DragEvent, DragOutcome, GestureController};
use crate::domain::item::{Item, ItemId, ItemStatus, NewItem};
use crate::domain::snapshot::BoardSnapshot;
use crate::error::{LaneboardError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::debug;

/// Configuration for a kanban board lane
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lane {
    pub name: String,
    pub status: ItemStatus,
}

impl Lane {
    pub fn new(name: impl Into<String>, status: ItemStatus) -> Self {
        Self {
            name: name.into(),
            status,
        }
    }
}

/// Board configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardConfig {
    pub name: String,
    pub lanes: Vec<Lane>,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            name: "Default Board".to_string(),
            lanes: vec![
                Lane::new("To Do", ItemStatus::Todo),
                Lane::new("In Progress", ItemStatus::InProgress),
                Lane::new("Done", ItemStatus::Done),
            ],
        }
    }
}

impl BoardConfig {
    /// Parses and validates a JSON board configuration
    pub fn from_json(json: &str) -> Result<Self> {
        let config: BoardConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Checks that lane names are present and each status has at most one lane
    pub fn validate(&self) -> Result<()> {
        let mut seen = HashSet::new();
        for lane in &self.lanes {
            if lane.name.trim().is_empty() {
                return Err(LaneboardError::ConfigError(format!(
                    "lane for status {} has an empty name",
                    lane.status
                )));
            }
            if !seen.insert(lane.status) {
                return Err(LaneboardError::DuplicateLane(lane.status.to_string()));
            }
        }
        Ok(())
    }

    /// Gets the lane configuration for a status
    pub fn lane_for_status(&self, status: ItemStatus) -> Option<&Lane> {
        self.lanes.iter().find(|lane| lane.status == status)
    }
}

/// Kanban board state
///
/// Owns the backing item sequence. Display order inside a lane is the
/// relative order of its members in that sequence.
#[derive(Debug)]
pub struct Board {
    config: BoardConfig,
    items: Vec<Item>,
    editing_lane: Option<ItemStatus>,
    gesture: GestureController,
}

impl Board {
    pub fn new(config: BoardConfig) -> Self {
        Self {
            config,
            items: Vec::new(),
            editing_lane: None,
            gesture: GestureController::new(),
        }
    }

    /// Seeds a board with an existing item sequence
    pub fn with_items(config: BoardConfig, items: Vec<Item>) -> Result<Self> {
        config.validate()?;

        let mut seen = HashSet::new();
        if let Some(dup) = items.iter().find(|item| !seen.insert(&item.id)) {
            return Err(LaneboardError::DuplicateItemId(dup.id.to_string()));
        }

        Ok(Self {
            items,
            ..Self::new(config)
        })
    }

    pub fn config(&self) -> &BoardConfig {
        &self.config
    }

    /// The full backing sequence
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn get(&self, id: &ItemId) -> Option<&Item> {
        self.items.iter().find(|item| &item.id == id)
    }

    /// Members of a container, in display order
    pub fn container(&self, status: ItemStatus) -> impl Iterator<Item = &Item> + '_ {
        self.items.iter().filter(move |item| item.status == status)
    }

    /// Appends a new item to the end of the backing sequence
    pub fn create_item(&mut self, new_item: NewItem) -> Result<&Item> {
        let item = new_item.into_item()?;
        debug!(item = %item.id, status = %item.status, "item created");
        self.items.push(item);

        let last = self.items.len() - 1;
        Ok(&self.items[last])
    }

    /// Removes an item, preserving the relative order of the rest
    pub fn delete_item(&mut self, id: &ItemId) -> Result<Item> {
        let index = self
            .items
            .iter()
            .position(|item| &item.id == id)
            .ok_or_else(|| LaneboardError::ItemNotFound(id.to_string()))?;

        debug!(item = %id, "item deleted");
        Ok(self.items.remove(index))
    }

    /// Feeds a drag notification to the gesture controller
    pub fn dispatch(&mut self, event: DragEvent) -> DragOutcome {
        self.gesture.handle(&mut self.items, event)
    }

    pub fn gesture(&self) -> &GestureController {
        &self.gesture
    }

    /// Item currently being dragged
    pub fn active_item(&self) -> Option<&Item> {
        let active = self.gesture.active_item()?;
        self.items.iter().find(|item| item.id.as_str() == active)
    }

    /// Lane currently showing the new-item form
    pub fn editing_lane(&self) -> Option<ItemStatus> {
        self.editing_lane
    }

    pub fn set_editing_lane(&mut self, lane: Option<ItemStatus>) {
        self.editing_lane = lane;
    }

    /// Read-only view for the renderer
    pub fn snapshot(&self) -> BoardSnapshot {
        BoardSnapshot::capture(self)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(BoardConfig::default())
    }
}
