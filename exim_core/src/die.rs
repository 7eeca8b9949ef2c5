//! Die ranks and the degradation chain

use crate::error::InvalidRankError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Text written back to an aspect once its die is used up
pub const EXHAUSTED_MARKER: &str = "d0";

/// Degradation order, strongest die first
pub const DEGRADE_ORDER: [DieRank; 6] = [
    DieRank::D20,
    DieRank::D12,
    DieRank::D10,
    DieRank::D8,
    DieRank::D6,
    DieRank::D4,
];

/// A degrading resource die
///
/// Variants are declared in degradation order, so the derived `Ord` puts
/// stronger dice first and `Exhausted` last.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum DieRank {
    D20,
    D12,
    D10,
    D8,
    D6,
    D4,
    Exhausted,
}

impl DieRank {
    /// Get all ranks, terminal state included
    pub fn all() -> &'static [DieRank] {
        &[
            DieRank::D20,
            DieRank::D12,
            DieRank::D10,
            DieRank::D8,
            DieRank::D6,
            DieRank::D4,
            DieRank::Exhausted,
        ]
    }

    /// Number of faces, `None` once exhausted
    pub fn faces(self) -> Option<u32> {
        match self {
            DieRank::D20 => Some(20),
            DieRank::D12 => Some(12),
            DieRank::D10 => Some(10),
            DieRank::D8 => Some(8),
            DieRank::D6 => Some(6),
            DieRank::D4 => Some(4),
            DieRank::Exhausted => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            DieRank::D20 => "d20",
            DieRank::D12 => "d12",
            DieRank::D10 => "d10",
            DieRank::D8 => "d8",
            DieRank::D6 => "d6",
            DieRank::D4 => "d4",
            DieRank::Exhausted => EXHAUSTED_MARKER,
        }
    }

    pub fn is_exhausted(self) -> bool {
        self == DieRank::Exhausted
    }

    /// Step one rank down the chain. `Exhausted` is absorbing.
    pub fn degrade(self) -> DieRank {
        match DEGRADE_ORDER.iter().position(|r| *r == self) {
            Some(idx) if idx + 1 < DEGRADE_ORDER.len() => DEGRADE_ORDER[idx + 1],
            _ => DieRank::Exhausted,
        }
    }

    /// Dice notation for a single roll of this die (`"1d8"`)
    pub fn notation(self) -> Option<String> {
        self.faces().map(|_| format!("1{}", self.as_str()))
    }

    /// Number of failed rolls left before the die is exhausted
    pub fn steps_to_exhaustion(self) -> usize {
        DEGRADE_ORDER
            .iter()
            .position(|r| *r == self)
            .map(|idx| DEGRADE_ORDER.len() - idx)
            .unwrap_or(0)
    }
}

impl fmt::Display for DieRank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DieRank {
    type Err = InvalidRankError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "d20" => Ok(DieRank::D20),
            "d12" => Ok(DieRank::D12),
            "d10" => Ok(DieRank::D10),
            "d8" => Ok(DieRank::D8),
            "d6" => Ok(DieRank::D6),
            "d4" => Ok(DieRank::D4),
            // "-" is how an emptied aspect shows up on older sheets
            EXHAUSTED_MARKER | "-" => Ok(DieRank::Exhausted),
            "" => Err(InvalidRankError::Missing),
            other => Err(InvalidRankError::Unrecognized(other.to_string())),
        }
    }
}

impl TryFrom<String> for DieRank {
    type Error = InvalidRankError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<DieRank> for String {
    fn from(rank: DieRank) -> Self {
        rank.as_str().to_string()
    }
}

/// Whether a stored aspect value can no longer be rolled
///
/// Missing values and anything outside the rank table count as exhausted.
pub fn is_exhausted(rank: Option<&str>) -> bool {
    match rank.map(str::parse::<DieRank>) {
        Some(Ok(rank)) => rank.is_exhausted(),
        _ => true,
    }
}

/// Degrade a stored aspect value one step
///
/// Values outside `DEGRADE_ORDER` come back untouched, so this is safe to
/// call on anything read from an actor.
pub fn degrade(rank: &str) -> &str {
    match rank.parse::<DieRank>() {
        Ok(parsed) if !parsed.is_exhausted() => parsed.degrade().as_str(),
        _ => rank,
    }
}
