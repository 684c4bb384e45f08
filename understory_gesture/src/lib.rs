// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_gesture --heading-base-level=0

//! Understory Gesture: pointer drag gestures resolved to named commands.
//!
//! While a trigger button (the secondary button by default) is held, the
//! pointer's path is reduced to a short sequence of cardinal directions, such
//! as "up, then right". On release the sequence is looked up in a mapping
//! table and, if it is long enough and bound, resolves to a command the host
//! application executes.
//!
//! The crate is split into small layers, each usable on its own:
//!
//! - [`direction`]: Classify a displacement as up, down, left or right
//! - [`sequence`]: Build direction segments from samples, with jitter filtering
//! - [`pattern`]: Mapping keys and the pattern → command table
//! - [`resolve`]: Exact lookup with a three-to-two simplification fallback
//! - [`commands`]: Command identifiers, labels and the default bindings
//! - [`config`]: Thresholds, trigger button and persisted settings
//! - [`session`]: The press → move → release state machine tying it together
//!
//! The crate knows nothing about windows, tabs or scrolling. Commands are
//! opaque identifiers; executing them, drawing a trail, and delivering pointer
//! events are left to the embedder.
//!
//! ## Usage
//!
//! Feed pointer events into a [`session::GestureSession`]:
//!
//! ```rust
//! use std::sync::Arc;
//!
//! use kurbo::Point;
//! use understory_gesture::commands;
//! use understory_gesture::config::GestureConfig;
//! use understory_gesture::session::{GestureSession, PointerButton};
//!
//! let config = Arc::new(GestureConfig::default());
//! let mut session = GestureSession::new();
//!
//! // Right button down, drag up, wobble down briefly, then right.
//! session.start(PointerButton::Secondary, Point::new(100.0, 100.0), config);
//! session.feed(Point::new(100.0, 50.0));
//! session.feed(Point::new(100.0, 62.0));
//! let live = session.feed(Point::new(150.0, 62.0)).unwrap();
//! assert_eq!(live.arrows().to_string(), "\u{2191} \u{2192}");
//!
//! let resolution = session.end(PointerButton::Secondary).unwrap();
//! assert_eq!(resolution.command, Some(commands::NEW_TAB));
//!
//! // Swallow the context menu that follows the release.
//! assert!(session.take_suppress_default());
//! ```
//!
//! ### Custom bindings
//!
//! Patterns are written as strings of `U`, `D`, `L` and `R`, up to three
//! letters long:
//!
//! ```rust
//! use understory_gesture::commands::{self, CommandId};
//! use understory_gesture::pattern::GestureMap;
//!
//! let mut map = GestureMap::with_defaults();
//! map.bind("DRU", commands::TOGGLE_MUTE).unwrap();
//! map.bind("L", CommandId::NONE).unwrap(); // disable "back"
//! map.bind("UPUP", "MY_COMMAND").unwrap_err(); // direction letters only
//! ```
//!
//! ## Logging
//!
//! Resolution outcomes and session transitions are reported through
//! [`tracing`] at `debug` level, and jitter filtering at `trace` level. No
//! subscriber is installed by this crate.
//!
//! ## Features
//!
//! - `std` (default): Build Kurbo and `tracing` with the standard library
//! - `libm`: Use `libm` for Kurbo's floating point math without `std`
//! - `serde`: Read and write [`pattern::GestureMap`] and the persisted
//!   configuration layout (`config::StoredConfig`)
//!
//! This crate is `no_std` compatible (with `alloc`) for all modules.

#![no_std]

extern crate alloc;

pub mod commands;
pub mod config;
pub mod direction;
pub mod pattern;
pub mod resolve;
pub mod sequence;
pub mod session;
