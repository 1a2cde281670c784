pub mod board;
pub mod gesture;
pub mod item;
pub mod layout;
pub mod resolver;
pub mod sequence;
pub mod snapshot;

pub use board::{Board, BoardConfig, Lane};
pub use gesture::{
    DragEvent, DragOutcome, GestureController, GestureSession, GestureState, IgnoreReason,
};
pub use item::{Item, ItemId, ItemStatus, NewItem, Priority};
pub use layout::BoardLayout;
pub use resolver::resolve_container;
pub use sequence::{move_across, reorder, Reordered};
pub use snapshot::{BoardSnapshot, LaneSnapshot};
