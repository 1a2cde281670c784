//! Drag gesture lifecycle.
//!
//! The controller consumes three abstract notifications produced by an
//! external input layer and drives a [`BoardLayout`]:
//!
//! ```text
//! Idle --DragStart--> Dragging --DragOver*--> Dragging --DragEnd--> Idle
//! ```
//!
//! Updates run at two speeds. Hovering over another lane reclassifies the
//! dragged item immediately on every `DragOver`, while reordering inside a
//! lane happens once, at `DragEnd`. A `DragEnd` without a target cancels the
//! gesture but keeps whatever live reclassification already happened.

use crate::domain::item::ItemStatus;
use crate::domain::layout::BoardLayout;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

/// Abstract drag notification from the input layer
///
/// `over` is either an item id or a container id (`"todo"`, `"done"`, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DragEvent {
    DragStart {
        active: String,
    },
    DragOver {
        active: String,
        over: Option<String>,
    },
    DragEnd {
        active: String,
        over: Option<String>,
    },
}

impl DragEvent {
    pub fn start(active: impl Into<String>) -> Self {
        Self::DragStart {
            active: active.into(),
        }
    }

    pub fn over(active: impl Into<String>, over: impl Into<String>) -> Self {
        Self::DragOver {
            active: active.into(),
            over: Some(over.into()),
        }
    }

    pub fn end(active: impl Into<String>, over: impl Into<String>) -> Self {
        Self::DragEnd {
            active: active.into(),
            over: Some(over.into()),
        }
    }

    /// A drop outside any valid target
    pub fn cancel(active: impl Into<String>) -> Self {
        Self::DragEnd {
            active: active.into(),
            over: None,
        }
    }

    pub fn active(&self) -> &str {
        match self {
            Self::DragStart { active }
            | Self::DragOver { active, .. }
            | Self::DragEnd { active, .. } => active,
        }
    }
}

/// Transient state kept while a drag is in progress
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GestureSession {
    pub active: String,
    /// Container the item was in when the drag started
    pub origin: ItemStatus,
    /// Last target reported by `DragOver`
    pub over: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum GestureState {
    #[default]
    Idle,
    Dragging(GestureSession),
}

/// Why an event left the board untouched
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IgnoreReason {
    /// No drag is in progress
    NoActiveGesture,
    /// The event names a different item than the one being dragged
    NotActiveItem,
    /// `DragOver` without anything under the pointer
    NoTarget,
    /// The active item or the target no longer exists
    StaleReference,
    /// Hovering within the item's current container
    SameContainer,
}

/// Result of feeding one event to the controller
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DragOutcome {
    Started {
        active: String,
        origin: ItemStatus,
    },
    /// Live reclassification while hovering another container
    Previewed {
        active: String,
        from: ItemStatus,
        to: ItemStatus,
    },
    /// Committed intra-container move
    Reordered {
        active: String,
        container: ItemStatus,
        from: usize,
        to: usize,
    },
    /// Committed cross-container move
    Moved {
        active: String,
        from: ItemStatus,
        to: ItemStatus,
    },
    /// Drop that resolved but had nothing left to change
    Dropped {
        active: String,
        origin: ItemStatus,
        container: ItemStatus,
    },
    /// Drop outside any target. `container` differs from `origin` when a
    /// live reclassification happened before the cancel.
    Cancelled {
        active: String,
        origin: ItemStatus,
        container: Option<ItemStatus>,
    },
    Ignored { reason: IgnoreReason },
}

/// State machine turning drag notifications into board transitions
#[derive(Debug, Default)]
pub struct GestureController {
    state: GestureState,
}

impl GestureController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &GestureState {
        &self.state
    }

    pub fn session(&self) -> Option<&GestureSession> {
        match &self.state {
            GestureState::Dragging(session) => Some(session),
            GestureState::Idle => None,
        }
    }

    pub fn is_dragging(&self) -> bool {
        self.session().is_some()
    }

    /// Id of the item being dragged, for overlay rendering
    pub fn active_item(&self) -> Option<&str> {
        self.session().map(|session| session.active.as_str())
    }

    /// Feeds one event to the state machine
    pub fn handle<L: BoardLayout>(&mut self, layout: &mut L, event: DragEvent) -> DragOutcome {
        trace!(item = %event.active(), ?event, "drag event");
        match event {
            DragEvent::DragStart { active } => self.drag_start(layout, active),
            DragEvent::DragOver { active, over } => self.drag_over(layout, &active, over),
            DragEvent::DragEnd { active, over } => self.drag_end(layout, &active, over),
        }
    }

    fn drag_start<L: BoardLayout>(&mut self, layout: &L, active: String) -> DragOutcome {
        // A new start always restarts the cycle, even mid-gesture.
        self.state = GestureState::Idle;

        let Some(origin) = layout.resolve_container(&active) else {
            trace!(item = %active, "drag start on unknown item");
            return DragOutcome::Ignored { reason: IgnoreReason::StaleReference };
        };

        debug!(item = %active, %origin, "drag started");
        self.state = GestureState::Dragging(GestureSession {
            active: active.clone(),
            origin,
            over: None,
        });
        DragOutcome::Started { active, origin }
    }

    fn drag_over<L: BoardLayout>(
        &mut self,
        layout: &mut L,
        active: &str,
        over: Option<String>,
    ) -> DragOutcome {
        let session = match &mut self.state {
            GestureState::Dragging(session) if session.active == active => session,
            GestureState::Dragging(_) => {
                trace!(item = %active, "drag over for an item that is not being dragged");
                return DragOutcome::Ignored { reason: IgnoreReason::NotActiveItem };
            }
            GestureState::Idle => {
                trace!(item = %active, "drag over without an active gesture");
                return DragOutcome::Ignored { reason: IgnoreReason::NoActiveGesture };
            }
        };
        session.over = over.clone();

        let Some(over) = over else {
            return DragOutcome::Ignored { reason: IgnoreReason::NoTarget };
        };

        let (Some(current), Some(target)) = (
            layout.resolve_container(active),
            layout.resolve_container(&over),
        ) else {
            trace!(item = %active, %over, "drag over stale reference");
            return DragOutcome::Ignored { reason: IgnoreReason::StaleReference };
        };

        if current == target {
            return DragOutcome::Ignored { reason: IgnoreReason::SameContainer };
        }

        match layout.move_across(active, target) {
            Some(from) => {
                debug!(item = %active, %from, to = %target, "live container reassignment");
                DragOutcome::Previewed {
                    active: active.to_string(),
                    from,
                    to: target,
                }
            }
            None => DragOutcome::Ignored { reason: IgnoreReason::SameContainer },
        }
    }

    fn drag_end<L: BoardLayout>(
        &mut self,
        layout: &mut L,
        active: &str,
        over: Option<String>,
    ) -> DragOutcome {
        let session = match std::mem::take(&mut self.state) {
            GestureState::Dragging(session) if session.active == active => session,
            GestureState::Dragging(session) => {
                // DragEnd always closes the gesture, even when misaddressed.
                debug!(
                    item = %active,
                    dragging = %session.active,
                    "drag end for an item that is not being dragged, gesture cleared"
                );
                return DragOutcome::Ignored { reason: IgnoreReason::NotActiveItem };
            }
            GestureState::Idle => {
                trace!(item = %active, "drag end without an active gesture");
                return DragOutcome::Ignored { reason: IgnoreReason::NoActiveGesture };
            }
        };
        let origin = session.origin;

        let Some(over) = over else {
            let container = layout.resolve_container(active);
            debug!(item = %active, %origin, ?container, "drag cancelled");
            return DragOutcome::Cancelled {
                active: session.active,
                origin,
                container,
            };
        };

        let (Some(current), Some(target)) = (
            layout.resolve_container(active),
            layout.resolve_container(&over),
        ) else {
            trace!(item = %active, %over, "drag end stale reference");
            return DragOutcome::Ignored { reason: IgnoreReason::StaleReference };
        };

        if current == target {
            return match layout.reorder(active, &over) {
                Some(moved) => {
                    debug!(
                        item = %active,
                        container = %current,
                        from = moved.from,
                        to = moved.to,
                        "reordered within container"
                    );
                    DragOutcome::Reordered {
                        active: session.active,
                        container: current,
                        from: moved.from,
                        to: moved.to,
                    }
                }
                None => {
                    debug!(item = %active, %origin, container = %current, "dropped in place");
                    DragOutcome::Dropped {
                        active: session.active,
                        origin,
                        container: current,
                    }
                }
            };
        }

        match layout.move_across(active, target) {
            Some(from) => {
                debug!(item = %active, %from, to = %target, "moved across containers");
                DragOutcome::Moved {
                    active: session.active,
                    from,
                    to: target,
                }
            }
            None => DragOutcome::Dropped {
                active: session.active,
                origin,
                container: target,
            },
        }
    }
}
