//! Score bookkeeping and the win condition

use serde::{Deserialize, Serialize};

/// Destroyed-block counter with a fixed winning threshold
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreTracker {
    score: u32,
    winning_score: u32,
}

impl ScoreTracker {
    pub fn new(winning_score: u32) -> Self {
        Self {
            score: 0,
            winning_score,
        }
    }

    #[inline]
    pub fn score(&self) -> u32 {
        self.score
    }

    #[inline]
    pub fn winning_score(&self) -> u32 {
        self.winning_score
    }

    /// Count one destroyed block. Returns true if this reached the threshold.
    pub fn record_destroyed(&mut self) -> bool {
        self.score += 1;
        self.has_won()
    }

    pub fn has_won(&self) -> bool {
        self.score >= self.winning_score
    }
}
