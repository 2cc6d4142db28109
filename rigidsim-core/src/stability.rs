//! Rest detection
//!
//! The world is sampled after each collision pass. A sample is calm when
//! every body's velocity and acceleration components are within the stable
//! threshold and no body has drifted further than that threshold from where
//! it stood when the current calm streak began. Enough consecutive calm
//! samples put the world at rest, at which point leftover motion is snapped
//! to zero.

use crate::body::Body;
use crate::config::WorldConfig;
use crate::error::ObjectId;
use crate::vector::{approx_zero, Vector2D};
use log::info;
use std::collections::HashMap;

#[derive(Debug, Clone, Default)]
pub struct StabilityDetector {
    streak: u32,
    anchors: HashMap<ObjectId, Vector2D>,
    at_rest: bool,
    last_sample: Option<f64>,
}

impl StabilityDetector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_at_rest(&self) -> bool {
        self.at_rest
    }

    /// Length of the current calm streak
    pub fn streak(&self) -> u32 {
        self.streak
    }

    /// Forget the current streak; called whenever energy enters the world
    pub fn wake(&mut self) {
        if self.at_rest {
            info!("world woken by external input");
        }
        self.at_rest = false;
        self.streak = 0;
        self.anchors.clear();
    }

    /// Take a sample at simulated time `now`. Samples closer together than
    /// the configured interval are skipped. Returns whether the world is at rest.
    pub fn observe(&mut self, bodies: &mut [Body], now: f64, config: &WorldConfig) -> bool {
        if let Some(last) = self.last_sample {
            if now - last < config.sample_interval {
                return self.at_rest;
            }
        }
        self.last_sample = Some(now);

        let threshold = config.stable_threshold();
        let calm = bodies
            .iter()
            .all(|b| approx_zero(b.vel, threshold) && approx_zero(b.acc, threshold));

        if !calm {
            if self.at_rest {
                info!("world is moving again");
            }
            self.at_rest = false;
            self.streak = 0;
            self.anchors.clear();
            return false;
        }

        let held = self.streak > 0
            && bodies.iter().all(|b| {
                self.anchors
                    .get(&b.id)
                    .is_some_and(|anchor| anchor.distance(b.pos) <= threshold)
            });

        if held {
            self.streak += 1;
        } else {
            self.at_rest = false;
            self.anchors = bodies.iter().map(|b| (b.id, b.pos)).collect();
            self.streak = 1;
        }

        if !self.at_rest && self.streak >= config.stable_samples {
            self.at_rest = true;
            for body in bodies.iter_mut() {
                body.vel = Vector2D::ZERO;
                body.acc = Vector2D::ZERO;
            }
            info!("world at rest after {} calm samples ({} bodies)", self.streak, bodies.len());
        }

        self.at_rest
    }
}
