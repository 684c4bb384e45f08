// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Replay a recorded pointer trace through the gesture recognizer.
//!
//! The trace is a JSON array of `down`/`move`/`up`/`cancel` events (see
//! `understory_gesture_demos`). An optional settings file in the persisted
//! `{ "gestureSettings": ..., "gestureMap": ... }` layout overrides the
//! defaults.
//!
//! Run:
//! - `cargo run -p understory_gesture_demos --example gesture_replay -- trace.json`
//! - `RUST_LOG=understory_gesture=trace cargo run -p understory_gesture_demos --example gesture_replay -- trace.json --settings settings.json`

use std::error::Error;
use std::fs;
use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use understory_gesture::commands;
use understory_gesture::config::{GestureConfig, StoredConfig};
use understory_gesture::sequence::Arrows;
use understory_gesture_demos::{TraceEvent, replay};

#[derive(Parser, Debug)]
#[command(about = "Replay a recorded pointer trace through the gesture recognizer")]
struct Args {
    /// JSON file holding the recorded events.
    trace: PathBuf,
    /// Persisted settings to use instead of the defaults.
    #[arg(long)]
    settings: Option<PathBuf>,
    /// Override the sensitivity threshold, in pixels.
    #[arg(long)]
    sensitivity: Option<f64>,
}

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    let mut config = match &args.settings {
        Some(path) => {
            let stored: StoredConfig = serde_json::from_str(&fs::read_to_string(path)?)?;
            GestureConfig::from(stored)
        }
        None => GestureConfig::default(),
    };
    if let Some(sensitivity) = args.sensitivity {
        config = config.with_sensitivity(sensitivity);
    }

    let events: Vec<TraceEvent> = serde_json::from_str(&fs::read_to_string(&args.trace)?)?;
    tracing::info!(events = events.len(), trace = %args.trace.display(), "replaying");

    for (i, outcome) in replay(&events, &Arc::new(config)).iter().enumerate() {
        let arrows = Arrows::new(&outcome.directions);
        let command = match &outcome.command {
            Some(id) => format!("{id} ({})", commands::label(id).unwrap_or("custom")),
            None if outcome.cancelled => "cancelled".to_string(),
            None => "no command".to_string(),
        };
        println!(
            "#{i}: [{arrows}] over {:.0}px -> {command}{}",
            outcome.total_distance,
            if outcome.suppress_default {
                ", context menu suppressed"
            } else {
                ""
            },
        );
    }
    Ok(())
}
