//! DieResolver - Success check and die degradation

use crate::config::DiceRules;
use crate::die::DieRank;
use crate::error::InvalidRankError;
use crate::outcome::RollOutcome;

/// Resolves rolls against degrading dice
///
/// A roll succeeds when its total is strictly above the failure threshold
/// (3 by default, so 0..=3 fail). A failed roll wears the die down one rank.
/// Holds only read-only rules; every method is pure.
#[derive(Debug, Clone, Default)]
pub struct DieResolver {
    rules: DiceRules,
}

impl DieResolver {
    pub fn new(rules: DiceRules) -> Self {
        DieResolver { rules }
    }

    pub fn rules(&self) -> &DiceRules {
        &self.rules
    }

    pub fn is_success(&self, total: u32) -> bool {
        total > self.rules.failure_threshold
    }

    /// Resolve a roll of `rank` that came up `total`
    ///
    /// Fails with `InvalidRankError::Exhausted` for a spent die; callers are
    /// expected to check exhaustion before rolling.
    pub fn resolve(&self, rank: DieRank, total: u32) -> Result<RollOutcome, InvalidRankError> {
        if rank.is_exhausted() {
            return Err(InvalidRankError::Exhausted);
        }
        let succeeded = self.is_success(total);
        let new_rank = if succeeded { rank } else { rank.degrade() };
        Ok(RollOutcome {
            rank,
            total,
            succeeded,
            new_rank,
        })
    }

    /// Resolve against a raw stored value, rejecting anything outside the rank table
    pub fn resolve_raw(&self, rank: Option<&str>, total: u32) -> Result<RollOutcome, InvalidRankError> {
        let rank: DieRank = rank.ok_or(InvalidRankError::Missing)?.parse()?;
        self.resolve(rank, total)
    }
}

/// Resolve with the standard threshold of 3
pub fn resolve(rank: DieRank, total: u32) -> Result<RollOutcome, InvalidRankError> {
    DieResolver::default().resolve(rank, total)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_threshold_is_inclusive_failure() {
        let resolver = DieResolver::default();

        let fail = resolver.resolve(DieRank::D8, 3).unwrap();
        assert!(!fail.succeeded);
        assert_eq!(fail.new_rank, DieRank::D6);

        let ok = resolver.resolve(DieRank::D8, 4).unwrap();
        assert!(ok.succeeded);
        assert_eq!(ok.new_rank, DieRank::D8);
    }

    #[test]
    fn test_free_resolve_uses_standard_threshold() {
        assert!(!resolve(DieRank::D6, 3).unwrap().succeeded);
        assert!(resolve(DieRank::D6, 4).unwrap().succeeded);
    }

    #[test]
    fn test_last_rank_exhausts() {
        let resolver = DieResolver::default();
        let outcome = resolver.resolve(DieRank::D4, 1).unwrap();
        assert!(!outcome.succeeded);
        assert_eq!(outcome.new_rank, DieRank::Exhausted);
    }

    #[test]
    fn test_zero_is_plain_failure() {
        let resolver = DieResolver::default();
        let outcome = resolver.resolve(DieRank::D20, 0).unwrap();
        assert!(!outcome.succeeded);
        assert_eq!(outcome.new_rank, DieRank::D12);
    }

    #[test]
    fn test_exhausted_rejected() {
        let resolver = DieResolver::default();
        assert_eq!(
            resolver.resolve(DieRank::Exhausted, 10),
            Err(InvalidRankError::Exhausted)
        );
    }

    #[test]
    fn test_resolve_raw() {
        let resolver = DieResolver::default();
        let outcome = resolver.resolve_raw(Some("d10"), 2).unwrap();
        assert_eq!(outcome.new_rank, DieRank::D8);

        assert_eq!(resolver.resolve_raw(None, 5), Err(InvalidRankError::Missing));
        assert_eq!(resolver.resolve_raw(Some("d0"), 5), Err(InvalidRankError::Exhausted));
        assert_eq!(resolver.resolve_raw(Some("-"), 5), Err(InvalidRankError::Exhausted));
        assert_eq!(
            resolver.resolve_raw(Some("d7"), 5),
            Err(InvalidRankError::Unrecognized("d7".to_string()))
        );
    }

    #[test]
    fn test_custom_threshold() {
        let resolver = DieResolver::new(DiceRules {
            failure_threshold: 5,
        });
        assert!(!resolver.resolve(DieRank::D12, 5).unwrap().succeeded);
        assert!(resolver.resolve(DieRank::D12, 6).unwrap().succeeded);
    }

    #[test]
    fn test_every_rank_against_every_face() {
        let resolver = DieResolver::default();
        for rank in DieRank::all().iter().filter(|r| !r.is_exhausted()) {
            for total in 1..=rank.faces().unwrap() {
                let outcome = resolver.resolve(*rank, total).unwrap();
                assert_eq!(outcome.succeeded, total > 3);
                assert_eq!(outcome.degraded(), total <= 3);
            }
        }
    }
}
