//! Point wallet — the learner's persisted point total.
//!
//! The wallet is plain data; whatever key-value store the host app uses
//! owns persistence and must serialize its own read-modify-write cycles.
//! Deductions floor at zero, so the balance can never go negative.

use serde::{Deserialize, Serialize};

/// A learner's point balance.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PointWallet {
    points: u32,
}

impl PointWallet {
    pub fn new(points: u32) -> Self {
        Self { points }
    }

    /// Current balance.
    pub fn points(&self) -> u32 {
        self.points
    }

    /// Credit earned points.
    pub fn add(&mut self, amount: u32) {
        self.points = self.points.saturating_add(amount);
    }

    /// Spend points, flooring the balance at zero.
    pub fn deduct(&mut self, amount: u32) {
        self.points = self.points.saturating_sub(amount);
    }
}
