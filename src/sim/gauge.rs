//! Accumulate-until-threshold timers
//!
//! Used for ammo regeneration, enemy spawn cadence and explosion frame
//! advance. Deterministic for a given sequence of deltas.

use serde::{Deserialize, Serialize};

/// Timer that fires once its accumulator exceeds the interval
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Gauge {
    /// Threshold in milliseconds
    pub interval: f32,
    /// Accumulated milliseconds since the last firing
    pub elapsed: f32,
}

impl Gauge {
    pub fn new(interval: f32) -> Self {
        Self {
            interval,
            elapsed: 0.0,
        }
    }

    /// Add `dt` and report whether the gauge fired (resetting it to zero)
    pub fn advance(&mut self, dt: f32) -> bool {
        self.elapsed += dt;
        if self.elapsed > self.interval {
            self.elapsed = 0.0;
            true
        } else {
            false
        }
    }

    pub fn reset(&mut self) {
        self.elapsed = 0.0;
    }
}

/// A bounded counter refilled one unit per gauge firing
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ResourceGauge {
    pub gauge: Gauge,
    amount: u32,
    max: u32,
}

impl ResourceGauge {
    pub fn new(amount: u32, max: u32, interval: f32) -> Self {
        Self {
            gauge: Gauge::new(interval),
            amount: amount.min(max),
            max,
        }
    }

    pub fn amount(&self) -> u32 {
        self.amount
    }

    pub fn max(&self) -> u32 {
        self.max
    }

    /// Advance the refill timer. The timer only runs while below the maximum.
    ///
    /// Returns true if a unit was added.
    pub fn advance(&mut self, dt: f32) -> bool {
        if self.amount >= self.max {
            return false;
        }
        if self.gauge.advance(dt) {
            self.amount += 1;
            true
        } else {
            false
        }
    }

    /// Take one unit if available
    pub fn try_take(&mut self) -> bool {
        if self.amount == 0 {
            return false;
        }
        self.amount -= 1;
        true
    }

    /// Refill to `amount` (clamped) and restart the timer
    pub fn reset(&mut self, amount: u32) {
        self.amount = amount.min(self.max);
        self.gauge.reset();
    }
}
