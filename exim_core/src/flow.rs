//! Aspect roll flow - wires the resolver to the host ports

use crate::die::{self, DieRank};
use crate::error::{InvalidRankError, SheetError};
use crate::outcome::RollCard;
use crate::ports::{ActorStore, DiceEvaluator, NotifyKind, Notifier};
use crate::resolver::DieResolver;
use crate::sheet::aspect_path;
use tracing::{debug, info, warn};

/// Message shown when an aspect has no die left to roll
pub const DIE_EXHAUSTED_MESSAGE: &str = "This die is exhausted.";

/// Roll one aspect of an actor
///
/// 1. Reads `system.aspects.<aspect>` from the store
/// 2. Warns through the notifier and returns `Ok(None)` if the die is exhausted
/// 3. Rolls `1<rank>` with the evaluator
/// 4. Writes the worn-down rank back if the roll failed
pub fn roll_aspect(
    resolver: &DieResolver,
    store: &mut impl ActorStore,
    dice: &mut impl DiceEvaluator,
    notifier: &mut impl Notifier,
    aspect: &str,
) -> Result<Option<RollCard>, SheetError> {
    let path = aspect_path(aspect);
    let raw = store.read_attribute(&path);

    if die::is_exhausted(raw.as_deref()) {
        warn!(aspect, value = ?raw, "aspect die exhausted, not rolling");
        notifier.notify(NotifyKind::Warn, DIE_EXHAUSTED_MESSAGE);
        return Ok(None);
    }

    let rank: DieRank = raw.as_deref().ok_or(InvalidRankError::Missing)?.parse()?;
    let notation = rank.notation().ok_or(InvalidRankError::Exhausted)?;
    let roll = dice.evaluate(&notation)?;
    debug!(aspect, %notation, total = roll.total, "rolled aspect");

    let outcome = resolver.resolve(rank, roll.total)?;
    if outcome.degraded() {
        store.write_attribute(&path, outcome.new_rank.as_str())?;
        info!(aspect, from = %outcome.rank, to = %outcome.new_rank, "aspect die wore down");
    }

    Ok(Some(RollCard {
        aspect: aspect.to_string(),
        outcome,
        threshold: resolver.rules().failure_threshold,
    }))
}
