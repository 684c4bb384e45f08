// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pattern resolver: find the command for a direction sequence.
//!
//! Resolution runs two passes against a [`GestureMap`]:
//!
//! 1. **Exact**: the full sequence, if it fits in a [`Pattern`], is looked up
//!    directly.
//! 2. **Simplified**: a three-segment sequence whose first and last directions
//!    differ is retried as the pair `first + last`, dropping the middle segment
//!    as a stray turn (`UDR` → `UR`). When first and last agree the pair would
//!    repeat one direction, so no retry happens.
//!
//! Sequences of four or more segments are never simplified, which keeps loops
//! and other long shapes from matching a short pattern by accident. Entries
//! bound to the no-op sentinel never match in either pass.
//!
//! ```
//! use understory_gesture::commands;
//! use understory_gesture::direction::Direction::{Down, Right, Up};
//! use understory_gesture::pattern::GestureMap;
//! use understory_gesture::resolve::{MatchKind, resolve_directions};
//!
//! let mut map = GestureMap::new();
//! map.bind("UR", commands::NEW_TAB).unwrap();
//!
//! let m = resolve_directions(&[Up, Down, Right], &map).unwrap();
//! assert_eq!(m.command, &commands::NEW_TAB);
//! assert_eq!(m.kind, MatchKind::Simplified);
//! assert_eq!(m.pattern.to_string(), "UR");
//! ```

use crate::commands::CommandId;
use crate::direction::Direction;
use crate::pattern::{GestureMap, Pattern};
use crate::sequence::{Directions, Segment};

/// Which pass produced a match.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum MatchKind {
    /// The full sequence was bound.
    Exact,
    /// The middle of a three-segment sequence was dropped.
    Simplified,
}

/// A successful resolution.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Match<'a> {
    /// The bound command.
    pub command: &'a CommandId,
    /// The key that matched; for simplified matches this is the pair.
    pub pattern: Pattern,
    /// Which pass matched.
    pub kind: MatchKind,
}

/// Resolve a segment list against `map`.
#[must_use]
pub fn resolve<'a>(segments: &[Segment], map: &'a GestureMap) -> Option<Match<'a>> {
    let directions: Directions = segments.iter().map(|s| s.direction).collect();
    resolve_directions(&directions, map)
}

/// Resolve a direction sequence against `map`.
#[must_use]
pub fn resolve_directions<'a>(directions: &[Direction], map: &'a GestureMap) -> Option<Match<'a>> {
    if directions.is_empty() {
        return None;
    }

    if let Some(pattern) = Pattern::new(directions) {
        if let Some(command) = map.lookup(&pattern) {
            tracing::debug!(%pattern, %command, "exact gesture match");
            return Some(Match {
                command,
                pattern,
                kind: MatchKind::Exact,
            });
        }
    }

    if let [first, _, last] = *directions {
        if first != last {
            let pattern = Pattern::pair(first, last);
            if let Some(command) = map.lookup(&pattern) {
                tracing::debug!(
                    from = %Pattern::triple(first, directions[1], last),
                    %pattern,
                    %command,
                    "simplified gesture match"
                );
                return Some(Match {
                    command,
                    pattern,
                    kind: MatchKind::Simplified,
                });
            }
        }
    }

    tracing::debug!(len = directions.len(), ?directions, "no gesture match");
    None
}
