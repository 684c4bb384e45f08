// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Command identifiers and the built-in command catalog.
//!
//! The engine treats a [`CommandId`] as an opaque token: it only stores,
//! compares, and returns it. Executing a command against a host (navigating,
//! opening tabs, resizing windows) is left to the embedder.
//!
//! The catalog below lists the identifiers understood by the stock browser
//! host, together with short English labels for overlays, and
//! [`default_bindings`] provides the out-of-the-box gesture table.
//!
//! ```
//! use understory_gesture::commands::{self, CommandId};
//!
//! let id = CommandId::from("NEW_TAB");
//! assert_eq!(id, commands::NEW_TAB);
//! assert_eq!(commands::label(&id), Some("New tab"));
//! assert!(CommandId::NONE.is_noop());
//! ```

use alloc::borrow::Cow;
use alloc::string::String;
use core::fmt;

use crate::direction::Direction::{Down, Left, Right, Up};
use crate::pattern::{GestureMap, Pattern};

/// An opaque command token produced by a successful resolution.
///
/// The token `"NONE"` ([`CommandId::NONE`]) is reserved: a mapping entry bound
/// to it disables the pattern instead of producing a command.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CommandId(Cow<'static, str>);

impl CommandId {
    /// The no-op sentinel.
    pub const NONE: Self = Self::from_static("NONE");

    /// Wrap a static token without allocating.
    #[must_use]
    pub const fn from_static(token: &'static str) -> Self {
        Self(Cow::Borrowed(token))
    }

    /// The token text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns `true` for the no-op sentinel.
    #[must_use]
    pub fn is_noop(&self) -> bool {
        self.as_str() == Self::NONE.as_str()
    }
}

impl fmt::Debug for CommandId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CommandId({:?})", self.as_str())
    }
}

impl fmt::Display for CommandId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for CommandId {
    fn from(token: &str) -> Self {
        Self(Cow::Owned(String::from(token)))
    }
}

impl From<String> for CommandId {
    fn from(token: String) -> Self {
        Self(Cow::Owned(token))
    }
}

impl From<CommandId> for String {
    fn from(id: CommandId) -> Self {
        id.0.into_owned()
    }
}

impl AsRef<str> for CommandId {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

/// Go back in history.
pub const BACK: CommandId = CommandId::from_static("BACK");
/// Go forward in history.
pub const FORWARD: CommandId = CommandId::from_static("FORWARD");
/// Scroll to the top of the page.
pub const JUMPTO_TOP: CommandId = CommandId::from_static("JUMPTO_TOP");
/// Scroll to the bottom of the page.
pub const JUMPTO_BOTTOM: CommandId = CommandId::from_static("JUMPTO_BOTTOM");
/// Navigate to the home page.
pub const HOMEPAGE: CommandId = CommandId::from_static("HOMEPAGE");
/// Reload the page.
pub const REFRESH: CommandId = CommandId::from_static("REFRESH");
/// Toggle fullscreen for the window.
pub const FULLSCREEN_WINDOW: CommandId = CommandId::from_static("FULLSCREEN_WINDOW");
/// Maximize the window.
pub const MAXIMIZE_WINDOW: CommandId = CommandId::from_static("MAXIMIZE_WINDOW");
/// Minimize the window.
pub const MINIMIZE_WINDOW: CommandId = CommandId::from_static("MINIMIZE_WINDOW");
/// Open a new window.
pub const NEW_WINDOW: CommandId = CommandId::from_static("NEW_WINDOW");
/// Open a new tab.
pub const NEW_TAB: CommandId = CommandId::from_static("NEW_TAB");
/// Open the current page in a private window.
pub const OPENIN_SECRET_WINDOW: CommandId = CommandId::from_static("OPENIN_SECRET_WINDOW");
/// Duplicate the current tab.
pub const CLONE_TAB: CommandId = CommandId::from_static("CLONE_TAB");
/// Close the window.
pub const CLOSE_WINDOW: CommandId = CommandId::from_static("CLOSE_WINDOW");
/// Activate the tab to the left, wrapping around.
pub const ACTIVATE_LEFT_TAB: CommandId = CommandId::from_static("ACTIVATE_LEFT_TAB");
/// Activate the tab to the right, wrapping around.
pub const ACTIVATE_RIGHT_TAB: CommandId = CommandId::from_static("ACTIVATE_RIGHT_TAB");
/// Close the current tab.
pub const CLOSE_TAB: CommandId = CommandId::from_static("CLOSE_TAB");
/// Close every other tab in the window.
pub const CLOSE_OTHER_TAB: CommandId = CommandId::from_static("CLOSE_OTHER_TAB");
/// Close the tabs left of the current one.
pub const CLOSE_LEFT_TAB: CommandId = CommandId::from_static("CLOSE_LEFT_TAB");
/// Close the tabs right of the current one.
pub const CLOSE_RIGHT_TAB: CommandId = CommandId::from_static("CLOSE_RIGHT_TAB");
/// Reopen the most recently closed tab.
pub const REOPEN_CLOSED_TAB: CommandId = CommandId::from_static("REOPEN_CLOSED_TAB");
/// Scroll up by one viewport.
pub const PAGE_UP: CommandId = CommandId::from_static("PAGE_UP");
/// Scroll down by one viewport.
pub const PAGE_DOWN: CommandId = CommandId::from_static("PAGE_DOWN");
/// Mute or unmute the tab.
pub const TOGGLE_MUTE: CommandId = CommandId::from_static("TOGGLE_MUTE");
/// Open the downloads page.
pub const OPEN_DOWNLOADS: CommandId = CommandId::from_static("OPEN_DOWNLOADS");
/// Add or remove a bookmark for the page.
pub const TOGGLE_BOOKMARK: CommandId = CommandId::from_static("TOGGLE_BOOKMARK");

const CATALOG: &[(&str, &str)] = &[
    ("BACK", "Back"),
    ("FORWARD", "Forward"),
    ("JUMPTO_TOP", "Scroll to top"),
    ("JUMPTO_BOTTOM", "Scroll to bottom"),
    ("HOMEPAGE", "Home page"),
    ("REFRESH", "Reload"),
    ("FULLSCREEN_WINDOW", "Fullscreen"),
    ("MAXIMIZE_WINDOW", "Maximize window"),
    ("MINIMIZE_WINDOW", "Minimize window"),
    ("NEW_WINDOW", "New window"),
    ("NEW_TAB", "New tab"),
    ("OPENIN_SECRET_WINDOW", "Open in private window"),
    ("CLONE_TAB", "Duplicate tab"),
    ("CLOSE_WINDOW", "Close window"),
    ("ACTIVATE_LEFT_TAB", "Previous tab"),
    ("ACTIVATE_RIGHT_TAB", "Next tab"),
    ("CLOSE_TAB", "Close tab"),
    ("CLOSE_OTHER_TAB", "Close other tabs"),
    ("CLOSE_LEFT_TAB", "Close tabs to the left"),
    ("CLOSE_RIGHT_TAB", "Close tabs to the right"),
    ("REOPEN_CLOSED_TAB", "Reopen closed tab"),
    ("PAGE_UP", "Page up"),
    ("PAGE_DOWN", "Page down"),
    ("TOGGLE_MUTE", "Mute / unmute"),
    ("OPEN_DOWNLOADS", "Downloads"),
    ("TOGGLE_BOOKMARK", "Bookmark"),
];

/// Human-readable label for a catalog command.
///
/// Returns `None` for the no-op sentinel and for tokens outside the catalog;
/// overlays typically fall back to the raw token in that case.
#[must_use]
pub fn label(command: &CommandId) -> Option<&'static str> {
    CATALOG
        .iter()
        .find(|(id, _)| *id == command.as_str())
        .map(|(_, label)| *label)
}

/// Iterate over every catalog command, in catalog order.
pub fn catalog() -> impl Iterator<Item = CommandId> {
    CATALOG.iter().map(|(id, _)| CommandId::from_static(*id))
}

const DEFAULT_BINDINGS: [(Pattern, CommandId); 16] = [
    (Pattern::single(Left), BACK),
    (Pattern::single(Right), FORWARD),
    (Pattern::single(Up), JUMPTO_TOP),
    (Pattern::single(Down), JUMPTO_BOTTOM),
    (Pattern::pair(Left, Right), HOMEPAGE),
    (Pattern::pair(Right, Left), HOMEPAGE),
    (Pattern::pair(Up, Down), REFRESH),
    (Pattern::pair(Down, Up), REFRESH),
    (Pattern::pair(Up, Left), NEW_WINDOW),
    (Pattern::pair(Up, Right), NEW_TAB),
    (Pattern::pair(Down, Left), OPENIN_SECRET_WINDOW),
    (Pattern::pair(Down, Right), CLOSE_TAB),
    (Pattern::pair(Right, Up), FULLSCREEN_WINDOW),
    (Pattern::pair(Left, Down), REOPEN_CLOSED_TAB),
    (Pattern::pair(Right, Down), MINIMIZE_WINDOW),
    (Pattern::pair(Left, Up), MAXIMIZE_WINDOW),
];

/// The stock gesture table: every single direction and every two-direction
/// turn is bound.
#[must_use]
pub fn default_bindings() -> GestureMap {
    DEFAULT_BINDINGS.into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn static_and_owned_ids_compare_equal() {
        assert_eq!(CommandId::from("BACK"), BACK);
        assert_eq!(CommandId::from(String::from("BACK")), BACK);
        assert_ne!(CommandId::from("back"), BACK);
    }

    #[test]
    fn noop_sentinel() {
        assert!(CommandId::NONE.is_noop());
        assert!(CommandId::from("NONE").is_noop());
        assert!(!REFRESH.is_noop());
    }

    #[test]
    fn every_catalog_entry_has_a_label() {
        for id in catalog() {
            assert!(label(&id).is_some(), "{id} has no label");
        }
        assert_eq!(label(&CommandId::NONE), None);
        assert_eq!(label(&CommandId::from("CUSTOM_SCRIPT")), None);
    }

    #[test]
    fn default_bindings_cover_all_single_and_turn_patterns() {
        let map = default_bindings();
        assert_eq!(map.len(), 16);
        assert_eq!(map.lookup(&Pattern::single(Left)), Some(&BACK));
        assert_eq!(map.lookup(&Pattern::pair(Up, Right)), Some(&NEW_TAB));
        assert_eq!(map.lookup(&Pattern::pair(Right, Down)), Some(&MINIMIZE_WINDOW));
        // Reversals map to the same command both ways.
        assert_eq!(
            map.lookup(&Pattern::pair(Up, Down)),
            map.lookup(&Pattern::pair(Down, Up))
        );
        // Every bound command is part of the catalog.
        for (_, command) in map.iter() {
            assert!(label(command).is_some(), "{command} missing from catalog");
        }
    }
}
