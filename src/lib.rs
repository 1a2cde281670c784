//! # Laneboard Core
//!
//! Drag-reorder and status-transition engine for kanban lane boards.
//!
//! Items flow through ordered lanes (`todo`, `in-progress`, `done` and an
//! implicit `failed`). The crate consumes abstract drag notifications
//! (start, over, end) and keeps the ordered, grouped item collection
//! consistent, without any dependency on a UI toolkit or input layer.

pub mod domain;
pub mod error;

// Re-export commonly used types
pub use domain::{
    board::{Board, BoardConfig, Lane},
    gesture::{DragEvent, DragOutcome, GestureController, IgnoreReason},
    item::{Item, ItemId, ItemStatus, NewItem, Priority},
    layout::BoardLayout,
    snapshot::BoardSnapshot,
};
pub use error::{LaneboardError, Result};
