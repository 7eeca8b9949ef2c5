//! Dice notation parsing and an RNG-backed evaluator

use crate::error::DiceError;
use crate::ports::{DiceEvaluator, RollResult};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Most dice accepted in one expression
pub const MAX_DICE: u32 = 100;

/// Largest die accepted
pub const MAX_FACES: u32 = 1000;

/// Parsed `NdM` expression
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiceNotation {
    pub count: u32,
    pub faces: u32,
}

impl fmt::Display for DiceNotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}d{}", self.count, self.faces)
    }
}

/// Parse `NdM`, with `N` optional (`d8` is `1d8`)
pub fn parse_notation(notation: &str) -> Result<DiceNotation, DiceError> {
    let invalid = || DiceError::InvalidNotation(notation.to_string());
    let text = notation.trim();
    let (count, faces) = text.split_once(['d', 'D']).ok_or_else(invalid)?;

    let count = if count.is_empty() {
        1
    } else {
        count.parse::<u32>().map_err(|_| invalid())?
    };
    let faces = faces.parse::<u32>().map_err(|_| invalid())?;

    if count == 0 || count > MAX_DICE || !(2..=MAX_FACES).contains(&faces) {
        return Err(invalid());
    }
    Ok(DiceNotation { count, faces })
}

/// Roll parsed dice with the given RNG
pub fn roll_with_rng(dice: DiceNotation, rng: &mut impl Rng) -> RollResult {
    let faces: Vec<u32> = (0..dice.count).map(|_| rng.gen_range(1..=dice.faces)).collect();
    RollResult {
        notation: dice.to_string(),
        total: faces.iter().sum(),
        dice: faces,
    }
}

/// Evaluates dice notation with a random number generator
#[derive(Debug, Clone)]
pub struct RngDiceEvaluator<R: Rng = StdRng> {
    rng: R,
}

impl RngDiceEvaluator<StdRng> {
    pub fn from_entropy() -> Self {
        RngDiceEvaluator {
            rng: StdRng::from_entropy(),
        }
    }

    /// Deterministic evaluator (for replays and tests)
    pub fn seeded(seed: u64) -> Self {
        RngDiceEvaluator {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl<R: Rng> RngDiceEvaluator<R> {
    pub fn with_rng(rng: R) -> Self {
        RngDiceEvaluator { rng }
    }
}

impl<R: Rng> DiceEvaluator for RngDiceEvaluator<R> {
    fn evaluate(&mut self, notation: &str) -> Result<RollResult, DiceError> {
        let dice = parse_notation(notation)?;
        Ok(roll_with_rng(dice, &mut self.rng))
    }
}
