// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Gesture session: one press → move* → release lifecycle.
//!
//! [`GestureSession`] is the piece an embedder wires to its pointer events:
//!
//! - pointer down → [`GestureSession::start`]
//! - pointer move → [`GestureSession::feed`], returning the [`LiveState`] to draw
//! - pointer up → [`GestureSession::end`] (or [`GestureSession::finish`]),
//!   returning the [`Resolution`]
//! - capture lost, navigation → [`GestureSession::cancel`]
//! - context menu → [`GestureSession::take_suppress_default`]
//!
//! ## Phases
//!
//! ```text
//! Idle ──start──▶ Active ──finish──▶ Resolved(command) ──start/reset/cancel──▶ …
//!                    │                Unresolved
//!                    └──cancel──▶ Idle
//! ```
//!
//! Only the configured trigger button starts a session, and only while the
//! configuration is enabled. A gesture resolves when its total distance reaches
//! the sensitivity threshold and its segments resolve against the mapping
//! table.
//!
//! ## Suppressing the default action
//!
//! Once the pointer has traveled more than [`DRAG_THRESHOLD`] pixels the
//! session reports a drag, even if no command matches. Hosts use that to
//! suppress the context menu after an unrecognized drag while still showing it
//! for a plain right click.
//!
//! ## Minimal example
//!
//! ```
//! use std::sync::Arc;
//!
//! use kurbo::Point;
//! use understory_gesture::commands;
//! use understory_gesture::config::GestureConfig;
//! use understory_gesture::session::{GestureSession, Phase, PointerButton};
//!
//! let config = Arc::new(GestureConfig::default());
//! let mut session = GestureSession::new();
//!
//! assert!(session.start(PointerButton::Secondary, Point::new(200.0, 200.0), config));
//! session.feed(Point::new(250.0, 200.0));
//! let live = session.feed(Point::new(250.0, 250.0)).unwrap();
//! assert_eq!(live.arrows().to_string(), "\u{2192} \u{2193}");
//! assert_eq!(live.preview, Some(commands::MINIMIZE_WINDOW));
//!
//! let resolution = session.end(PointerButton::Secondary).unwrap();
//! assert_eq!(resolution.command, Some(commands::MINIMIZE_WINDOW));
//! assert!(resolution.suppress_default());
//! assert_eq!(session.phase(), &Phase::Resolved(commands::MINIMIZE_WINDOW));
//! ```

use alloc::sync::Arc;

use kurbo::Point;

use crate::commands::CommandId;
use crate::config::GestureConfig;
use crate::resolve::resolve;
use crate::sequence::{GestureTrace, LiveState, SequenceBuilder};

/// Total distance, in pixels, beyond which the press counts as a drag rather
/// than a click.
pub const DRAG_THRESHOLD: f64 = 5.0;

/// Pointer buttons, as far as gesture triggering is concerned.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum PointerButton {
    /// Usually the left button.
    Primary,
    /// Usually the right button; the default trigger.
    #[default]
    Secondary,
    /// Usually the middle button or wheel.
    Auxiliary,
    /// Any other button, by platform index.
    Other(u16),
}

/// Where a session is in its lifecycle.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Phase {
    /// No gesture in progress.
    #[default]
    Idle,
    /// The trigger button is held and samples are being recorded.
    Active,
    /// The last gesture resolved to a command.
    Resolved(CommandId),
    /// The last gesture ended without a command.
    Unresolved,
}

/// Outcome of a finished gesture.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Resolution {
    /// The resolved command, if the gesture was long enough and matched.
    pub command: Option<CommandId>,
    /// Whether the pointer traveled more than [`DRAG_THRESHOLD`].
    pub drag_observed: bool,
    /// The recorded segments and total distance.
    pub trace: GestureTrace,
}

impl Resolution {
    /// Whether the host should suppress its default action (the context menu)
    /// for this press.
    #[must_use]
    pub fn suppress_default(&self) -> bool {
        self.drag_observed || self.command.is_some()
    }
}

/// Recognition state for one pointer.
///
/// Keep one session per physical pointer stream; a session never shares state
/// with another.
#[derive(Clone, Debug, Default)]
pub struct GestureSession {
    config: Option<Arc<GestureConfig>>,
    builder: SequenceBuilder,
    phase: Phase,
    drag_observed: bool,
    suppress_pending: bool,
}

impl GestureSession {
    /// An idle session.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle a button press at `origin`.
    ///
    /// Starts a new gesture and returns `true` when `button` is the configured
    /// trigger and recognition is enabled; any previous gesture is discarded.
    /// Otherwise the session is left untouched and `false` is returned.
    pub fn start(&mut self, button: PointerButton, origin: Point, config: Arc<GestureConfig>) -> bool {
        if !config.enabled || button != config.trigger {
            return false;
        }
        self.builder = SequenceBuilder::new(config.thresholds());
        self.builder.start(origin);
        self.config = Some(config);
        self.phase = Phase::Active;
        self.drag_observed = false;
        self.suppress_pending = false;
        tracing::debug!(x = origin.x, y = origin.y, "gesture started");
        true
    }

    /// Feed a move sample. Returns `None` unless a gesture is active.
    pub fn feed(&mut self, sample: Point) -> Option<LiveState> {
        if self.phase != Phase::Active {
            return None;
        }
        let live = self.builder.feed(sample);
        if !self.drag_observed && self.builder.total_distance() > DRAG_THRESHOLD {
            self.drag_observed = true;
            self.suppress_pending = true;
            tracing::trace!(total = self.builder.total_distance(), "drag observed");
        }
        Some(self.with_preview(live))
    }

    fn with_preview(&self, mut live: LiveState) -> LiveState {
        if live.sensitivity_reached {
            if let Some(config) = &self.config {
                live.preview = resolve(self.builder.segments(), &config.map)
                    .map(|hit| hit.command.clone());
            }
        }
        live
    }

    /// Handle a button release. Returns `None` when no gesture is active or
    /// `button` is not the trigger; otherwise finishes the gesture.
    pub fn end(&mut self, button: PointerButton) -> Option<Resolution> {
        if self.phase != Phase::Active {
            return None;
        }
        let trigger = self.config.as_ref().map(|c| c.trigger)?;
        if button != trigger {
            return None;
        }
        Some(self.finish())
    }

    /// Finish the active gesture and resolve it.
    ///
    /// Outside an active gesture this returns an empty, unresolved
    /// [`Resolution`] and leaves the phase as it is.
    pub fn finish(&mut self) -> Resolution {
        if self.phase != Phase::Active {
            return Resolution::default();
        }
        let trace = self.builder.finish();
        let command = self.config.as_ref().and_then(|config| {
            if trace.total_distance < self.builder.thresholds().sensitivity {
                return None;
            }
            resolve(&trace.segments, &config.map).map(|hit| hit.command.clone())
        });

        if command.is_some() {
            self.suppress_pending = true;
        }
        self.phase = match &command {
            Some(command) => Phase::Resolved(command.clone()),
            None => Phase::Unresolved,
        };
        tracing::debug!(
            command = command.as_ref().map(CommandId::as_str),
            total = trace.total_distance,
            segments = trace.segments.len(),
            drag_observed = self.drag_observed,
            "gesture finished"
        );

        Resolution {
            command,
            drag_observed: self.drag_observed,
            trace,
        }
    }

    /// Abort the gesture without resolving, discarding all state.
    pub fn cancel(&mut self) {
        if self.phase == Phase::Active {
            tracing::debug!("gesture cancelled");
        }
        *self = Self::default();
    }

    /// Return a finished session to [`Phase::Idle`].
    ///
    /// An active gesture is left alone; use [`cancel`](Self::cancel) to abort it.
    pub fn reset(&mut self) {
        if self.phase != Phase::Active {
            self.phase = Phase::Idle;
        }
    }

    /// Consume the pending request to suppress the host's default action.
    ///
    /// Returns `true` at most once per press, after a drag was observed or a
    /// command resolved.
    pub fn take_suppress_default(&mut self) -> bool {
        core::mem::take(&mut self.suppress_pending)
    }

    /// Current phase.
    #[must_use]
    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    /// Returns `true` while a gesture is in progress.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.phase == Phase::Active
    }

    /// Whether the current or last gesture traveled beyond [`DRAG_THRESHOLD`].
    #[must_use]
    pub fn drag_observed(&self) -> bool {
        self.drag_observed
    }

    /// Distance traveled by the active gesture so far; zero when idle.
    #[must_use]
    pub fn total_distance(&self) -> f64 {
        self.builder.total_distance()
    }

    /// The live state of the active gesture.
    #[must_use]
    pub fn live_state(&self) -> Option<LiveState> {
        self.is_active()
            .then(|| self.with_preview(self.builder.live_state()))
    }

    /// The configuration snapshot of the current or last gesture.
    #[must_use]
    pub fn config(&self) -> Option<&GestureConfig> {
        self.config.as_deref()
    }
}
