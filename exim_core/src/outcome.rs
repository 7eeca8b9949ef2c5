//! RollOutcome - Result of resolving one aspect roll

use crate::die::DieRank;
use serde::{Deserialize, Serialize};

/// Result of resolving one roll against a die rank
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RollOutcome {
    /// Die that was rolled
    pub rank: DieRank,
    pub total: u32,
    pub succeeded: bool,
    /// Rank after resolution; equal to `rank` on success
    pub new_rank: DieRank,
}

impl RollOutcome {
    /// Whether the die wore down on this roll
    pub fn degraded(&self) -> bool {
        self.new_rank != self.rank
    }

    /// Whether this roll used up the die
    pub fn exhausted_die(&self) -> bool {
        self.degraded() && self.new_rank.is_exhausted()
    }

    /// One-line summary for logs
    pub fn summary(&self) -> String {
        if self.succeeded {
            format!("{} rolled {}: success", self.rank, self.total)
        } else {
            format!(
                "{} rolled {}: failure, die wears down to {}",
                self.rank, self.total, self.new_rank
            )
        }
    }
}

/// A resolved aspect roll ready for display
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RollCard {
    pub aspect: String,
    pub outcome: RollOutcome,
    /// Failure threshold in force for this roll
    pub threshold: u32,
}

impl RollCard {
    pub fn headline(&self) -> String {
        format!(
            "{} roll  {} : {}",
            self.aspect, self.outcome.rank, self.outcome.total
        )
    }

    pub fn body(&self) -> String {
        let o = &self.outcome;
        if o.succeeded {
            format!("Success: rolled {} with {}.", o.total, o.rank)
        } else {
            format!(
                "Consequences! Rolled {} <= {}, the die wears down ({} -> {}).",
                o.total, self.threshold, o.rank, o.new_rank
            )
        }
    }
}
