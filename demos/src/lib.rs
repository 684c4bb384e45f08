// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Helpers shared by the gesture demos.
//!
//! Recorded pointer traces are JSON arrays of events tagged by `type`, with
//! DOM-style button numbers (0 primary, 1 auxiliary, 2 secondary):
//!
//! ```json
//! [
//!   { "type": "down", "button": 2, "x": 400, "y": 300 },
//!   { "type": "move", "x": 450, "y": 300 },
//!   { "type": "move", "x": 450, "y": 350 },
//!   { "type": "up", "button": 2 }
//! ]
//! ```

use std::sync::Arc;

use kurbo::Point;
use serde::Deserialize;
use understory_gesture::commands::CommandId;
use understory_gesture::config::GestureConfig;
use understory_gesture::direction::Direction;
use understory_gesture::session::{GestureSession, PointerButton};

/// One recorded pointer event.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum TraceEvent {
    /// Button press at a position.
    Down { button: u16, x: f64, y: f64 },
    /// Pointer motion.
    Move { x: f64, y: f64 },
    /// Button release.
    Up { button: u16 },
    /// Capture lost or page navigated away.
    Cancel,
}

/// Map a DOM `MouseEvent.button` number to a [`PointerButton`].
pub fn dom_button(button: u16) -> PointerButton {
    match button {
        0 => PointerButton::Primary,
        1 => PointerButton::Auxiliary,
        2 => PointerButton::Secondary,
        n => PointerButton::Other(n),
    }
}

/// What one press of the trigger button produced.
#[derive(Clone, Debug, PartialEq)]
pub struct GestureOutcome {
    /// Recorded directions, in order.
    pub directions: Vec<Direction>,
    /// Total distance traveled.
    pub total_distance: f64,
    /// The resolved command, if any.
    pub command: Option<CommandId>,
    /// Whether the host should swallow its context menu.
    pub suppress_default: bool,
    /// The gesture was cancelled before release.
    pub cancelled: bool,
}

/// Replay `events` through a single session and collect one outcome per
/// gesture.
pub fn replay(events: &[TraceEvent], config: &Arc<GestureConfig>) -> Vec<GestureOutcome> {
    let mut session = GestureSession::new();
    let mut outcomes = Vec::new();
    for event in events {
        match *event {
            TraceEvent::Down { button, x, y } => {
                if !session.start(dom_button(button), Point::new(x, y), Arc::clone(config)) {
                    tracing::debug!(button, "press ignored");
                }
            }
            TraceEvent::Move { x, y } => {
                if let Some(live) = session.feed(Point::new(x, y)) {
                    tracing::info!(
                        arrows = %live.arrows(),
                        preview = live.preview.as_ref().map(CommandId::as_str),
                        "live"
                    );
                }
            }
            TraceEvent::Up { button } => {
                if let Some(resolution) = session.end(dom_button(button)) {
                    outcomes.push(GestureOutcome {
                        directions: resolution.trace.directions().collect(),
                        total_distance: resolution.trace.total_distance,
                        suppress_default: resolution.suppress_default(),
                        command: resolution.command,
                        cancelled: false,
                    });
                    session.reset();
                }
            }
            TraceEvent::Cancel => {
                if let Some(live) = session.live_state() {
                    outcomes.push(GestureOutcome {
                        directions: live.directions.to_vec(),
                        total_distance: session.total_distance(),
                        command: None,
                        suppress_default: false,
                        cancelled: true,
                    });
                }
                session.cancel();
            }
        }
    }
    outcomes
}

#[cfg(test)]
mod tests {
    use super::*;
    use understory_gesture::commands;

    #[test]
    fn replays_a_recorded_trace() {
        let json = r#"[
            { "type": "down", "button": 0, "x": 0, "y": 0 },
            { "type": "up", "button": 0 },
            { "type": "down", "button": 2, "x": 400, "y": 300 },
            { "type": "move", "x": 450, "y": 300 },
            { "type": "move", "x": 450, "y": 350 },
            { "type": "up", "button": 2 },
            { "type": "down", "button": 2, "x": 0, "y": 0 },
            { "type": "move", "x": -60, "y": 0 },
            { "type": "cancel" }
        ]"#;
        let events: Vec<TraceEvent> = serde_json::from_str(json).unwrap();
        let outcomes = replay(&events, &Arc::new(GestureConfig::default()));

        assert_eq!(outcomes.len(), 2);
        assert_eq!(outcomes[0].directions, [Direction::Right, Direction::Down]);
        assert_eq!(outcomes[0].command, Some(commands::MINIMIZE_WINDOW));
        assert!(outcomes[0].suppress_default);
        assert!(outcomes[1].cancelled);
        assert_eq!(outcomes[1].directions, [Direction::Left]);
        assert_eq!(outcomes[1].total_distance, 60.0);
        assert_eq!(outcomes[1].command, None);
    }

    #[test]
    fn dom_buttons() {
        assert_eq!(dom_button(2), PointerButton::Secondary);
        assert_eq!(dom_button(4), PointerButton::Other(4));
    }
}
