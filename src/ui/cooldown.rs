//! Input cooldown
//!
//! Suppresses rapid repeat activations of a single widget. Each widget owns
//! its own `Cooldown`, so unrelated widgets can never desynchronize each
//! other.

use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy)]
pub struct Cooldown {
    window: Duration,
    last_fire: Option<Instant>,
}

impl Cooldown {
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            last_fire: None,
        }
    }

    /// Returns true and arms the cooldown if the window has elapsed since
    /// the last accepted activation.
    pub fn try_fire(&mut self, now: Instant) -> bool {
        match self.last_fire {
            Some(last) if now.duration_since(last) < self.window => false,
            _ => {
                self.last_fire = Some(now);
                true
            }
        }
    }
}
