use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};

// Linear curve from max_ms down to min_ms, saturating once the snake
// length reaches threshold.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct DifficultyCurve {
    pub min_ms: u64,
    pub max_ms: u64,
    pub threshold: usize,
}

impl DifficultyCurve {
    pub fn new(min_ms: u64, max_ms: u64, threshold: usize) -> Self {
        Self {
            min_ms,
            max_ms,
            threshold,
        }
    }

    pub fn interval(&self, length: usize) -> Duration {
        let progress = (length as f64 / self.threshold as f64).clamp(0.0, 1.0);
        let ms = self.max_ms as f64 - (self.max_ms - self.min_ms) as f64 * progress;
        Duration::from_secs_f64(ms / 1000.0)
    }
}

// Edge-triggered poll timer: re-arms on a hit, so one call yields at
// most one trigger no matter how long the gap was.
#[derive(Clone, Debug)]
pub struct DifficultyTimer {
    curve: DifficultyCurve,
    last_trigger: Instant,
}

impl DifficultyTimer {
    pub fn new(curve: DifficultyCurve, now: Instant) -> Self {
        Self {
            curve,
            last_trigger: now,
        }
    }

    pub fn interval(&self, length: usize) -> Duration {
        self.curve.interval(length)
    }

    pub fn curve(&self) -> DifficultyCurve {
        self.curve
    }

    pub fn poll(&mut self, length: usize, now: Instant) -> bool {
        if now.duration_since(self.last_trigger) > self.interval(length) {
            self.last_trigger = now;
            true
        } else {
            false
        }
    }

    pub fn triggered(&mut self, length: usize) -> bool {
        self.poll(length, Instant::now())
    }
}
