// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Sequence builder: turn a stream of pointer samples into direction segments.
//!
//! ## Usage
//!
//! 1) Start a gesture with [`SequenceBuilder::start`] at the press position.
//! 2) Call [`SequenceBuilder::feed`] for every move sample; it returns the
//!    [`LiveState`] to show while the button is held.
//! 3) Call [`SequenceBuilder::finish`] on release to take the final
//!    [`GestureTrace`]. The builder then ignores samples until the next start.
//!
//! ## Gating and merging
//!
//! A sample only registers a direction when it lies at least
//! [`Thresholds::min_distance`] away from the last accepted point. Smaller
//! moves still add to the total distance but leave the anchor where it was.
//!
//! When an accepted sample changes direction, the segment being closed is
//! checked against [`Thresholds::jitter_threshold`]. Branch order matters:
//!
//! 1. Short segment, and the segment before it already runs in the new
//!    direction: drop the short segment and extend the earlier one
//!    (`U, R(short)` + `U` → `U`).
//! 2. Short segment otherwise: rewrite it in place as the new direction
//!    (`U, D(short)` + `R` → `U, R`).
//! 3. Long segment: start a new segment.
//!
//! Adjacent segments therefore never share a direction, and every segment
//! length is positive.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::Point;
//! use understory_gesture::config::Thresholds;
//! use understory_gesture::direction::Direction;
//! use understory_gesture::sequence::SequenceBuilder;
//!
//! let mut builder = SequenceBuilder::new(Thresholds::default());
//! builder.start(Point::new(0.0, 0.0));
//! builder.feed(Point::new(50.0, 0.0));
//! let live = builder.feed(Point::new(50.0, 50.0));
//! assert_eq!(live.directions.as_slice(), &[Direction::Right, Direction::Down]);
//! assert!(live.sensitivity_reached);
//!
//! let trace = builder.finish();
//! assert_eq!(trace.total_distance, 100.0);
//! assert!(!builder.is_active());
//! ```

use core::fmt;

use kurbo::Point;
use smallvec::SmallVec;

use crate::commands::CommandId;
use crate::config::Thresholds;
use crate::direction::Direction;
use crate::pattern::Pattern;

/// Segments kept inline before spilling to the heap.
///
/// Mapped gestures have at most three segments; one extra slot covers the
/// occasional overshoot without allocating.
pub const INLINE_SEGMENTS: usize = 4;

/// Segment storage used by the builder and its traces.
pub type Segments = SmallVec<[Segment; INLINE_SEGMENTS]>;

/// Direction list reported to overlays.
pub type Directions = SmallVec<[Direction; INLINE_SEGMENTS]>;

/// A maximal run of same-direction motion.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Segment {
    /// Heading of the run.
    pub direction: Direction,
    /// Accumulated length of the run, in pixels.
    pub length: f64,
}

impl Segment {
    /// A new segment.
    #[must_use]
    pub const fn new(direction: Direction, length: f64) -> Self {
        Self { direction, length }
    }
}

/// What an overlay needs to draw while the gesture is in progress.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LiveState {
    /// Current direction sequence.
    pub directions: Directions,
    /// Whether the total distance has reached the sensitivity threshold.
    pub sensitivity_reached: bool,
    /// The command the gesture would resolve to if released now.
    ///
    /// Only filled in by [`GestureSession`](crate::session::GestureSession),
    /// and only once the sensitivity threshold is reached.
    pub preview: Option<CommandId>,
}

impl LiveState {
    /// Display adapter rendering the directions as space-separated arrows,
    /// for example `↑ →`.
    #[must_use]
    pub fn arrows(&self) -> Arrows<'_> {
        Arrows(&self.directions)
    }
}

/// Display adapter rendering directions as space-separated arrows.
///
/// See [`LiveState::arrows`].
#[derive(Copy, Clone, Debug)]
pub struct Arrows<'a>(&'a [Direction]);

impl<'a> Arrows<'a> {
    /// Render an arbitrary direction list, such as a finished trace's.
    #[must_use]
    pub fn new(directions: &'a [Direction]) -> Self {
        Self(directions)
    }
}

impl fmt::Display for Arrows<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, dir) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}", dir.arrow())?;
        }
        Ok(())
    }
}

/// The finished result of one gesture.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GestureTrace {
    /// Recorded segments in order.
    pub segments: Segments,
    /// Sum of all sample distances, including sub-threshold motion.
    pub total_distance: f64,
}

impl GestureTrace {
    /// The direction of each segment.
    pub fn directions(&self) -> impl Iterator<Item = Direction> + '_ {
        self.segments.iter().map(|s| s.direction)
    }

    /// The trace as a mapping key, if it is short enough to be one.
    #[must_use]
    pub fn pattern(&self) -> Option<Pattern> {
        let directions: Directions = self.directions().collect();
        Pattern::new(&directions)
    }
}

/// Accumulates direction segments from pointer samples.
#[derive(Clone, Debug, Default)]
pub struct SequenceBuilder {
    thresholds: Thresholds,
    segments: Segments,
    /// Last accepted sample; `None` while the builder is inert.
    last_point: Option<Point>,
    total_distance: f64,
}

impl SequenceBuilder {
    /// An inert builder running with `thresholds` (clamped to positive values).
    #[must_use]
    pub fn new(thresholds: Thresholds) -> Self {
        Self {
            thresholds: thresholds.sanitized(),
            ..Self::default()
        }
    }

    /// The thresholds in use.
    #[must_use]
    pub fn thresholds(&self) -> Thresholds {
        self.thresholds
    }

    /// Begin a new gesture at `origin`, discarding any previous state.
    pub fn start(&mut self, origin: Point) {
        self.segments.clear();
        self.last_point = Some(origin);
        self.total_distance = 0.0;
    }

    /// Returns `true` between [`start`](Self::start) and [`finish`](Self::finish).
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.last_point.is_some()
    }

    /// Feed one pointer sample and return the updated live state.
    ///
    /// Samples fed while inert, and samples with non-finite coordinates, are
    /// ignored.
    pub fn feed(&mut self, sample: Point) -> LiveState {
        let Some(last) = self.last_point else {
            return self.live_state();
        };
        if !sample.is_finite() {
            return self.live_state();
        }

        let distance = last.distance(sample);
        self.total_distance += distance;

        if distance >= self.thresholds.min_distance {
            let direction = Direction::classify(last, sample);
            self.record(direction, distance);
            self.last_point = Some(sample);
        }

        self.live_state()
    }

    fn record(&mut self, direction: Direction, distance: f64) {
        let len = self.segments.len();
        let Some(&last) = self.segments.last() else {
            self.segments.push(Segment::new(direction, distance));
            return;
        };

        if last.direction == direction {
            self.segments[len - 1].length += distance;
            return;
        }

        if last.length < self.thresholds.jitter_threshold {
            if len >= 2 && self.segments[len - 2].direction == direction {
                self.segments.pop();
                self.segments[len - 2].length += distance;
                tracing::trace!(dropped = ?last, %direction, "jitter segment merged into predecessor");
            } else {
                self.segments[len - 1] = Segment::new(direction, distance);
                tracing::trace!(from = %last.direction, to = %direction, "jitter segment rewritten");
            }
            return;
        }

        self.segments.push(Segment::new(direction, distance));
    }

    /// The live state without feeding a sample.
    #[must_use]
    pub fn live_state(&self) -> LiveState {
        LiveState {
            directions: self.segments.iter().map(|s| s.direction).collect(),
            sensitivity_reached: self.is_active()
                && self.total_distance >= self.thresholds.sensitivity,
            preview: None,
        }
    }

    /// Segments recorded so far.
    #[must_use]
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Total distance traveled so far.
    #[must_use]
    pub fn total_distance(&self) -> f64 {
        self.total_distance
    }

    /// End the gesture and take its trace. The builder becomes inert.
    pub fn finish(&mut self) -> GestureTrace {
        self.last_point = None;
        GestureTrace {
            segments: core::mem::take(&mut self.segments),
            total_distance: core::mem::replace(&mut self.total_distance, 0.0),
        }
    }
}
