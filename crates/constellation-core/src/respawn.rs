//! Delayed re-creation of culled dots.
//!
//! Respawns are owned by the engine and fired from its own tick, so dropping
//! the queue cancels them. Nothing is left behind in platform timers.

use rand::Rng;
use std::ops::RangeInclusive;

#[derive(Debug, Default)]
pub struct RespawnQueue {
    /// Due times in milliseconds, kept sorted ascending.
    due: Vec<f64>,
}

impl RespawnQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule one respawn `delay_ms` (sampled uniformly) after `now_ms`.
    pub fn schedule<R: Rng>(
        &mut self,
        rng: &mut R,
        now_ms: f64,
        delay_ms: &RangeInclusive<f64>,
    ) -> f64 {
        let delay = rng.gen_range(delay_ms.clone());
        let at = now_ms + delay;
        self.push_at(at);
        at
    }

    pub fn push_at(&mut self, at_ms: f64) {
        let idx = self.due.partition_point(|&t| t <= at_ms);
        self.due.insert(idx, at_ms);
    }

    /// Remove and count every respawn due at or before `now_ms`.
    pub fn drain_due(&mut self, now_ms: f64) -> usize {
        let ready = self.due.partition_point(|&t| t <= now_ms);
        self.due.drain(..ready);
        ready
    }

    /// Earliest pending due time.
    pub fn next_due(&self) -> Option<f64> {
        self.due.first().copied()
    }

    pub fn len(&self) -> usize {
        self.due.len()
    }

    pub fn is_empty(&self) -> bool {
        self.due.is_empty()
    }

    pub fn cancel_all(&mut self) -> usize {
        let n = self.due.len();
        self.due.clear();
        n
    }
}
