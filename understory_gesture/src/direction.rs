// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Direction classifier: map a pointer motion vector to one of four cardinal directions.
//!
//! Classification uses the angle of the motion in screen coordinates (y grows
//! downward), bucketed into half-open quadrants centered on the axes:
//!
//! | Angle (degrees)  | Direction |
//! |------------------|-----------|
//! | `[-45, 45)`      | Right     |
//! | `[45, 135)`      | Down      |
//! | `[-135, -45)`    | Up        |
//! | otherwise        | Left      |
//!
//! The intervals partition the full circle, so every delta maps to exactly one
//! direction. A zero delta has angle 0 and classifies as [`Direction::Right`].
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::Point;
//! use understory_gesture::direction::{Direction, classify};
//!
//! let from = Point::new(100.0, 100.0);
//! assert_eq!(classify(from, Point::new(130.0, 104.0)), Direction::Right);
//! assert_eq!(classify(from, Point::new(98.0, 60.0)), Direction::Up);
//! ```

use core::f64::consts::PI;
use core::fmt;

use kurbo::{Point, Vec2};

/// One of the four cardinal directions a gesture segment can take.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Direction {
    /// Toward smaller y.
    Up,
    /// Toward larger y.
    Down,
    /// Toward smaller x.
    Left,
    /// Toward larger x.
    Right,
}

impl Direction {
    /// All directions, in declaration order.
    pub const ALL: [Self; 4] = [Self::Up, Self::Down, Self::Left, Self::Right];

    /// Classify the motion from `from` to `to`.
    #[must_use]
    #[inline]
    pub fn classify(from: Point, to: Point) -> Self {
        Self::from_vec2(to - from)
    }

    /// Classify a raw motion delta.
    #[must_use]
    pub fn from_vec2(delta: Vec2) -> Self {
        let angle = delta.atan2() * (180.0 / PI);
        if (-45.0..45.0).contains(&angle) {
            Self::Right
        } else if (45.0..135.0).contains(&angle) {
            Self::Down
        } else if (-135.0..-45.0).contains(&angle) {
            Self::Up
        } else {
            Self::Left
        }
    }

    /// The pattern letter for this direction: `U`, `D`, `L` or `R`.
    #[must_use]
    pub const fn as_char(self) -> char {
        match self {
            Self::Up => 'U',
            Self::Down => 'D',
            Self::Left => 'L',
            Self::Right => 'R',
        }
    }

    /// Parse a pattern letter. Only the uppercase letters produced by
    /// [`Direction::as_char`] are accepted.
    #[must_use]
    pub const fn from_char(ch: char) -> Option<Self> {
        match ch {
            'U' => Some(Self::Up),
            'D' => Some(Self::Down),
            'L' => Some(Self::Left),
            'R' => Some(Self::Right),
            _ => None,
        }
    }

    /// An arrow glyph suitable for a live overlay.
    #[must_use]
    pub const fn arrow(self) -> char {
        match self {
            Self::Up => '\u{2191}',
            Self::Down => '\u{2193}',
            Self::Left => '\u{2190}',
            Self::Right => '\u{2192}',
        }
    }

    /// The direction pointing the other way.
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }

    /// A unit vector pointing this way, in screen coordinates.
    #[must_use]
    pub const fn unit_vec(self) -> Vec2 {
        match self {
            Self::Up => Vec2::new(0.0, -1.0),
            Self::Down => Vec2::new(0.0, 1.0),
            Self::Left => Vec2::new(-1.0, 0.0),
            Self::Right => Vec2::new(1.0, 0.0),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// Classify the motion from `from` to `to`.
///
/// Shorthand for [`Direction::classify`].
#[must_use]
#[inline]
pub fn classify(from: Point, to: Point) -> Direction {
    Direction::classify(from, to)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at_degrees(degrees: f64) -> Direction {
        let radians = degrees * (PI / 180.0);
        Direction::from_vec2(Vec2::from_angle(radians) * 100.0)
    }

    #[test]
    fn axis_aligned_moves() {
        let origin = Point::new(50.0, 50.0);
        assert_eq!(classify(origin, Point::new(80.0, 50.0)), Direction::Right);
        assert_eq!(classify(origin, Point::new(20.0, 50.0)), Direction::Left);
        assert_eq!(classify(origin, Point::new(50.0, 80.0)), Direction::Down);
        assert_eq!(classify(origin, Point::new(50.0, 20.0)), Direction::Up);
    }

    #[test]
    fn near_diagonals_fall_into_nearest_axis() {
        let origin = Point::ZERO;
        assert_eq!(classify(origin, Point::new(10.0, 9.9)), Direction::Right);
        assert_eq!(classify(origin, Point::new(9.9, 10.0)), Direction::Down);
        assert_eq!(classify(origin, Point::new(-9.9, 10.0)), Direction::Down);
        assert_eq!(classify(origin, Point::new(-10.0, 9.9)), Direction::Left);
        assert_eq!(classify(origin, Point::new(-10.0, -9.9)), Direction::Left);
        assert_eq!(classify(origin, Point::new(-9.9, -10.0)), Direction::Up);
        assert_eq!(classify(origin, Point::new(9.9, -10.0)), Direction::Up);
        assert_eq!(classify(origin, Point::new(10.0, -9.9)), Direction::Right);
    }

    #[test]
    fn buckets_partition_the_circle() {
        // Sweep in quarter-degree steps, staying clear of the exact boundaries
        // where floating point rounding decides the side.
        let mut step = 0;
        while step < 360 * 4 {
            let degrees = -180.0 + f64::from(step) * 0.25 + 0.125;
            let expected = if (-45.0..45.0).contains(&degrees) {
                Direction::Right
            } else if (45.0..135.0).contains(&degrees) {
                Direction::Down
            } else if (-135.0..-45.0).contains(&degrees) {
                Direction::Up
            } else {
                Direction::Left
            };
            assert_eq!(at_degrees(degrees), expected, "angle {degrees}");
            step += 1;
        }
    }

    #[test]
    fn unit_vectors_classify_as_themselves() {
        for dir in Direction::ALL {
            assert_eq!(Direction::from_vec2(dir.unit_vec()), dir);
            assert_eq!(Direction::from_vec2(dir.unit_vec() * 0.01), dir);
            assert_eq!(dir.unit_vec() + dir.opposite().unit_vec(), Vec2::ZERO);
        }
    }

    #[test]
    fn exact_diagonals_follow_half_open_buckets() {
        let origin = Point::ZERO;
        // 45 and -45 open Down and Right; 135 and -135 belong to Left and Up.
        assert_eq!(classify(origin, Point::new(1.0, 1.0)), Direction::Down);
        assert_eq!(classify(origin, Point::new(-1.0, 1.0)), Direction::Left);
        assert_eq!(classify(origin, Point::new(1.0, -1.0)), Direction::Right);
        assert_eq!(classify(origin, Point::new(-1.0, -1.0)), Direction::Up);
        assert_eq!(classify(origin, Point::new(30.0, 30.0)), Direction::Down);
    }

    #[test]
    fn zero_delta_is_right() {
        assert_eq!(Direction::from_vec2(Vec2::ZERO), Direction::Right);
    }

    #[test]
    fn classification_is_translation_invariant() {
        let a = classify(Point::new(0.0, 0.0), Point::new(3.0, -20.0));
        let b = classify(Point::new(-5000.0, 7000.0), Point::new(-4997.0, 6980.0));
        assert_eq!(a, b);
        assert_eq!(a, Direction::Up);
    }

    #[test]
    fn letters_round_trip() {
        for dir in Direction::ALL {
            assert_eq!(Direction::from_char(dir.as_char()), Some(dir));
        }
        assert_eq!(Direction::from_char('u'), None);
        assert_eq!(Direction::from_char('X'), None);
    }

    #[test]
    fn opposite_is_involutive() {
        for dir in Direction::ALL {
            assert_ne!(dir.opposite(), dir);
            assert_eq!(dir.opposite().opposite(), dir);
        }
    }
}
