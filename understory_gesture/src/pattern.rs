// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Gesture patterns and the pattern → command mapping table.
//!
//! A [`Pattern`] is a short sequence of one to [`MAX_PATTERN_LEN`] directions,
//! written as a string of `U`/`D`/`L`/`R` letters (`"UR"`, `"DLR"`, ...). It is
//! the key type of a [`GestureMap`]. Because a pattern can never hold more than
//! three directions, longer gesture sequences simply have no key and can never
//! be looked up unsimplified.
//!
//! ## Minimal example
//!
//! ```
//! use understory_gesture::commands::{self, CommandId};
//! use understory_gesture::pattern::{GestureMap, Pattern};
//!
//! let mut map = GestureMap::new();
//! map.bind("UR", commands::NEW_TAB).unwrap();
//! map.bind("L", "NONE").unwrap();
//!
//! let up_right: Pattern = "UR".parse().unwrap();
//! assert_eq!(map.lookup(&up_right), Some(&commands::NEW_TAB));
//!
//! // Entries bound to the no-op sentinel are stored but never match.
//! assert_eq!(map.get(&"L".parse().unwrap()), Some(&CommandId::NONE));
//! assert_eq!(map.lookup(&"L".parse().unwrap()), None);
//! ```

use alloc::collections::BTreeMap;
use alloc::string::{String, ToString};
use core::fmt;
use core::str::FromStr;

use hashbrown::HashMap;

use crate::commands::{self, CommandId};
use crate::direction::Direction;

/// Longest direction sequence a mapping key can hold.
pub const MAX_PATTERN_LEN: usize = 3;

/// A mapping-table key: one to three directions.
///
/// Unused trailing slots are always [`Direction::Up`], so the derived equality
/// and hashing only depend on the meaningful prefix.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Pattern {
    len: u8,
    dirs: [Direction; MAX_PATTERN_LEN],
}

impl Pattern {
    /// A one-direction pattern.
    #[must_use]
    pub const fn single(a: Direction) -> Self {
        Self {
            len: 1,
            dirs: [a, Direction::Up, Direction::Up],
        }
    }

    /// A two-direction pattern.
    #[must_use]
    pub const fn pair(a: Direction, b: Direction) -> Self {
        Self {
            len: 2,
            dirs: [a, b, Direction::Up],
        }
    }

    /// A three-direction pattern.
    #[must_use]
    pub const fn triple(a: Direction, b: Direction, c: Direction) -> Self {
        Self {
            len: 3,
            dirs: [a, b, c],
        }
    }

    /// Build a pattern from a direction sequence.
    ///
    /// Returns `None` when the sequence is empty or longer than
    /// [`MAX_PATTERN_LEN`].
    #[must_use]
    pub fn new(directions: &[Direction]) -> Option<Self> {
        match *directions {
            [a] => Some(Self::single(a)),
            [a, b] => Some(Self::pair(a, b)),
            [a, b, c] => Some(Self::triple(a, b, c)),
            _ => None,
        }
    }

    /// The directions in this pattern.
    #[must_use]
    pub fn directions(&self) -> &[Direction] {
        &self.dirs[..usize::from(self.len)]
    }

    /// Number of directions (1..=3).
    #[must_use]
    pub fn len(&self) -> usize {
        usize::from(self.len)
    }

    /// Always `false`: a pattern holds at least one direction.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// First direction.
    #[must_use]
    pub fn first(&self) -> Direction {
        self.dirs[0]
    }

    /// Last direction.
    #[must_use]
    pub fn last(&self) -> Direction {
        self.dirs[self.len() - 1]
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for dir in self.directions() {
            write!(f, "{}", dir.as_char())?;
        }
        Ok(())
    }
}

impl fmt::Debug for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Pattern(\"{self}\")")
    }
}

/// Error returned when a pattern string cannot be parsed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PatternError {
    /// The string had no direction letters.
    Empty,
    /// The string had more than [`MAX_PATTERN_LEN`] letters.
    TooLong {
        /// Number of characters found.
        len: usize,
    },
    /// A character other than `U`, `D`, `L` or `R`.
    InvalidChar {
        /// The offending character.
        ch: char,
        /// Its character index in the input.
        index: usize,
    },
}

impl fmt::Display for PatternError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "gesture pattern is empty"),
            Self::TooLong { len } => write!(
                f,
                "gesture pattern has {len} directions, at most {MAX_PATTERN_LEN} are allowed"
            ),
            Self::InvalidChar { ch, index } => write!(
                f,
                "invalid direction {ch:?} at index {index}, expected one of U, D, L, R"
            ),
        }
    }
}

impl core::error::Error for PatternError {}

impl FromStr for Pattern {
    type Err = PatternError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut dirs = [Direction::Up; MAX_PATTERN_LEN];
        let mut len = 0;
        for (index, ch) in s.chars().enumerate() {
            let dir = Direction::from_char(ch).ok_or(PatternError::InvalidChar { ch, index })?;
            if index >= MAX_PATTERN_LEN {
                return Err(PatternError::TooLong {
                    len: s.chars().count(),
                });
            }
            dirs[index] = dir;
            len = index + 1;
        }
        Self::new(&dirs[..len]).ok_or(PatternError::Empty)
    }
}

/// Pattern → command mapping table.
///
/// Entries bound to [`CommandId::NONE`] are kept so that an override table can
/// disable a default binding, but [`GestureMap::lookup`] treats them exactly
/// like a missing entry.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GestureMap {
    bindings: HashMap<Pattern, CommandId>,
}

impl GestureMap {
    /// An empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The stock table; see [`commands::default_bindings`].
    #[must_use]
    pub fn with_defaults() -> Self {
        commands::default_bindings()
    }

    /// Bind `pattern` to `command`, returning the previous binding.
    pub fn insert(&mut self, pattern: Pattern, command: impl Into<CommandId>) -> Option<CommandId> {
        self.bindings.insert(pattern, command.into())
    }

    /// Parse `pattern` and bind it to `command`, returning the previous binding.
    pub fn bind(
        &mut self,
        pattern: &str,
        command: impl Into<CommandId>,
    ) -> Result<Option<CommandId>, PatternError> {
        let pattern = pattern.parse()?;
        Ok(self.insert(pattern, command))
    }

    /// Remove a binding entirely.
    pub fn remove(&mut self, pattern: &Pattern) -> Option<CommandId> {
        self.bindings.remove(pattern)
    }

    /// The raw binding for `pattern`, including the no-op sentinel.
    #[must_use]
    pub fn get(&self, pattern: &Pattern) -> Option<&CommandId> {
        self.bindings.get(pattern)
    }

    /// The command bound to `pattern`, or `None` if the pattern is unbound or
    /// bound to the no-op sentinel.
    #[must_use]
    pub fn lookup(&self, pattern: &Pattern) -> Option<&CommandId> {
        self.get(pattern).filter(|command| !command.is_noop())
    }

    /// Copy every entry of `overrides` into this table; on conflicts the
    /// override wins, including overrides to the no-op sentinel.
    pub fn overlay(&mut self, overrides: &Self) {
        self.bindings.extend(
            overrides
                .bindings
                .iter()
                .map(|(pattern, command)| (*pattern, command.clone())),
        );
    }

    /// Number of entries, including disabled ones.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    /// Returns `true` when the table has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Iterate over all entries in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (&Pattern, &CommandId)> {
        self.bindings.iter()
    }
}

impl FromIterator<(Pattern, CommandId)> for GestureMap {
    fn from_iter<I: IntoIterator<Item = (Pattern, CommandId)>>(iter: I) -> Self {
        Self {
            bindings: iter.into_iter().collect(),
        }
    }
}

impl Extend<(Pattern, CommandId)> for GestureMap {
    fn extend<I: IntoIterator<Item = (Pattern, CommandId)>>(&mut self, iter: I) {
        self.bindings.extend(iter);
    }
}

impl TryFrom<BTreeMap<String, String>> for GestureMap {
    type Error = PatternError;

    fn try_from(table: BTreeMap<String, String>) -> Result<Self, Self::Error> {
        table
            .into_iter()
            .map(|(pattern, command)| -> Result<_, PatternError> {
                Ok((pattern.parse::<Pattern>()?, CommandId::from(command)))
            })
            .collect()
    }
}

impl From<GestureMap> for BTreeMap<String, String> {
    fn from(map: GestureMap) -> Self {
        map.bindings
            .into_iter()
            .map(|(pattern, command)| (pattern.to_string(), String::from(command)))
            .collect()
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for GestureMap {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let table = BTreeMap::<String, String>::from(self.clone());
        serde::Serialize::serialize(&table, serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for GestureMap {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let table = <BTreeMap<String, String> as serde::Deserialize<'de>>::deserialize(deserializer)?;
        Self::try_from(table).map_err(serde::de::Error::custom)
    }
}
