// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Gesture recognition basics.
//!
//! Drive a `GestureSession` with a few synthetic drags and print what an
//! overlay and a command dispatcher would see.
//!
//! Run:
//! - `cargo run -p understory_gesture_demos --example gesture_basics`

use std::sync::Arc;

use kurbo::{Point, Vec2};
use understory_gesture::commands;
use understory_gesture::config::GestureConfig;
use understory_gesture::direction::Direction::{self, Down, Left, Right, Up};
use understory_gesture::session::{GestureSession, PointerButton};

fn main() {
    let config = Arc::new(GestureConfig::default());
    let mut session = GestureSession::new();

    let drags: [(&str, &[(Direction, f64)]); 5] = [
        ("back", &[(Left, 80.0)]),
        ("new tab", &[(Up, 60.0), (Right, 60.0)]),
        ("new tab with a wobble", &[(Up, 60.0), (Down, 15.0), (Right, 60.0)]),
        ("square loop", &[(Right, 50.0), (Down, 50.0), (Left, 50.0), (Up, 50.0)]),
        ("click", &[(Right, 3.0)]),
    ];

    for (name, legs) in drags {
        let mut p = Point::new(400.0, 300.0);
        session.start(PointerButton::Secondary, p, config.clone());
        for &(dir, len) in legs {
            // Sample every 5px like a real pointer stream would.
            let steps = (len / 5.0).ceil().max(1.0) as u32;
            let step: Vec2 = dir.unit_vec() * (len / f64::from(steps));
            for _ in 0..steps {
                p += step;
                if let Some(live) = session.feed(p) {
                    if let Some(preview) = &live.preview {
                        let label = commands::label(preview).unwrap_or("custom");
                        println!("  {name}: [{}] -> {label}", live.arrows());
                    }
                }
            }
        }
        let Some(resolution) = session.end(PointerButton::Secondary) else {
            continue;
        };
        println!(
            "{name}: {} => {} (suppress context menu: {})",
            resolution
                .trace
                .pattern()
                .map_or_else(|| "-".to_string(), |p| p.to_string()),
            resolution
                .command
                .as_ref()
                .map_or("no command", |c| c.as_str()),
            resolution.suppress_default(),
        );
        session.reset();
    }
}
