// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Recognition configuration: thresholds, trigger button and mapping table.
//!
//! A [`GestureConfig`] is handed to [`GestureSession::start`] as an
//! `Arc` snapshot. The session copies the thresholds when the gesture begins,
//! so replacing the embedder's configuration never changes a gesture that is
//! already in progress.
//!
//! Thresholds are expected to be positive. [`GestureConfig::thresholds`]
//! clamps them: non-finite values fall back to the defaults, negative values
//! use their magnitude, and anything below one pixel becomes one pixel.
//!
//! ## Persisted layout
//!
//! With the `serde` feature, [`StoredConfig`] reads the layout the settings
//! page persists:
//!
//! ```json
//! {
//!   "gestureSettings": { "enabled": true, "minDistance": 10, "sensitivity": 30 },
//!   "gestureMap": { "UR": "NEW_TAB", "L": "NONE" }
//! }
//! ```
//!
//! The stored map is overlaid on the default bindings, so patterns the user
//! never touched keep their stock command and `"NONE"` disables one.
//!
//! [`GestureSession::start`]: crate::session::GestureSession::start

use crate::pattern::GestureMap;
use crate::session::PointerButton;

/// Default minimum per-sample movement, in pixels, for a direction to register.
pub const DEFAULT_MIN_DISTANCE: f64 = 10.0;
/// Default minimum total movement, in pixels, before a gesture may resolve.
pub const DEFAULT_SENSITIVITY: f64 = 30.0;
/// Default segment length, in pixels, below which a segment is jitter at a turn.
pub const DEFAULT_JITTER_THRESHOLD: f64 = 30.0;

/// The numeric thresholds a [`SequenceBuilder`](crate::sequence::SequenceBuilder) runs with.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Thresholds {
    /// Minimum distance between the last accepted point and a new sample for
    /// the sample to register a direction.
    pub min_distance: f64,
    /// Minimum total traversed distance for a gesture to resolve.
    pub sensitivity: f64,
    /// Segments shorter than this are treated as noise when the direction changes.
    pub jitter_threshold: f64,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            min_distance: DEFAULT_MIN_DISTANCE,
            sensitivity: DEFAULT_SENSITIVITY,
            jitter_threshold: DEFAULT_JITTER_THRESHOLD,
        }
    }
}

impl Thresholds {
    /// Clamp every threshold into a usable positive range.
    #[must_use]
    pub fn sanitized(self) -> Self {
        Self {
            min_distance: clamp_threshold(self.min_distance, DEFAULT_MIN_DISTANCE),
            sensitivity: clamp_threshold(self.sensitivity, DEFAULT_SENSITIVITY),
            jitter_threshold: clamp_threshold(self.jitter_threshold, DEFAULT_JITTER_THRESHOLD),
        }
    }
}

fn clamp_threshold(value: f64, fallback: f64) -> f64 {
    if !value.is_finite() {
        return fallback;
    }
    let magnitude = if value < 0.0 { -value } else { value };
    magnitude.max(1.0)
}

/// Immutable recognition settings shared by every session started with it.
#[derive(Clone, Debug, PartialEq)]
pub struct GestureConfig {
    /// When `false`, sessions refuse to start.
    pub enabled: bool,
    /// The button whose press starts a gesture.
    pub trigger: PointerButton,
    /// See [`Thresholds::min_distance`].
    pub min_distance: f64,
    /// See [`Thresholds::sensitivity`].
    pub sensitivity: f64,
    /// See [`Thresholds::jitter_threshold`].
    pub jitter_threshold: f64,
    /// Pattern → command table.
    pub map: GestureMap,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self::new(GestureMap::with_defaults())
    }
}

impl GestureConfig {
    /// Default thresholds and trigger with the given mapping table.
    #[must_use]
    pub fn new(map: GestureMap) -> Self {
        let thresholds = Thresholds::default();
        Self {
            enabled: true,
            trigger: PointerButton::Secondary,
            min_distance: thresholds.min_distance,
            sensitivity: thresholds.sensitivity,
            jitter_threshold: thresholds.jitter_threshold,
            map,
        }
    }

    /// Set the minimum per-sample distance.
    #[must_use]
    pub fn with_min_distance(mut self, min_distance: f64) -> Self {
        self.min_distance = min_distance;
        self
    }

    /// Set the sensitivity threshold.
    #[must_use]
    pub fn with_sensitivity(mut self, sensitivity: f64) -> Self {
        self.sensitivity = sensitivity;
        self
    }

    /// Set the jitter threshold.
    #[must_use]
    pub fn with_jitter_threshold(mut self, jitter_threshold: f64) -> Self {
        self.jitter_threshold = jitter_threshold;
        self
    }

    /// Set the trigger button.
    #[must_use]
    pub fn with_trigger(mut self, trigger: PointerButton) -> Self {
        self.trigger = trigger;
        self
    }

    /// Enable or disable recognition.
    #[must_use]
    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// The clamped thresholds sessions actually run with.
    #[must_use]
    pub fn thresholds(&self) -> Thresholds {
        Thresholds {
            min_distance: self.min_distance,
            sensitivity: self.sensitivity,
            jitter_threshold: self.jitter_threshold,
        }
        .sanitized()
    }
}

#[cfg(feature = "serde")]
pub use stored::{StoredConfig, StoredSettings};

#[cfg(feature = "serde")]
mod stored {
    use super::{
        DEFAULT_JITTER_THRESHOLD, DEFAULT_MIN_DISTANCE, DEFAULT_SENSITIVITY, GestureConfig,
    };
    use crate::pattern::GestureMap;

    /// The persisted settings record. Unknown keys (trail color and width,
    /// overlay toggles) belong to the renderer and are ignored.
    #[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
    #[serde(rename_all = "camelCase", default)]
    pub struct StoredSettings {
        /// Whether gestures are recognized at all.
        pub enabled: bool,
        /// Minimum per-sample distance in pixels.
        pub min_distance: f64,
        /// Minimum total distance in pixels.
        pub sensitivity: f64,
        /// Jitter segment threshold in pixels.
        pub jitter_threshold: f64,
    }

    impl Default for StoredSettings {
        fn default() -> Self {
            Self {
                enabled: true,
                min_distance: DEFAULT_MIN_DISTANCE,
                sensitivity: DEFAULT_SENSITIVITY,
                jitter_threshold: DEFAULT_JITTER_THRESHOLD,
            }
        }
    }

    /// The persisted configuration: settings plus user overrides of the map.
    #[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
    #[serde(rename_all = "camelCase", default)]
    pub struct StoredConfig {
        /// Threshold settings.
        pub gesture_settings: StoredSettings,
        /// User bindings, overlaid on the defaults.
        #[serde(skip_serializing_if = "Option::is_none")]
        pub gesture_map: Option<GestureMap>,
    }

    impl StoredConfig {
        /// Build the runtime configuration, overlaying stored bindings on the
        /// default table.
        #[must_use]
        pub fn into_config(self) -> GestureConfig {
            let mut map = GestureMap::with_defaults();
            if let Some(overrides) = &self.gesture_map {
                map.overlay(overrides);
            }
            let settings = self.gesture_settings;
            GestureConfig::new(map)
                .with_enabled(settings.enabled)
                .with_min_distance(settings.min_distance)
                .with_sensitivity(settings.sensitivity)
                .with_jitter_threshold(settings.jitter_threshold)
        }
    }

    impl From<StoredConfig> for GestureConfig {
        fn from(stored: StoredConfig) -> Self {
            stored.into_config()
        }
    }
}
