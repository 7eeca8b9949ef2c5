//! House rules: dice threshold, sheet defaults and starting actors

use super::ConfigError;
use crate::die::DieRank;
use crate::sheet::{Actor, ItemData, SheetTab};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Totals at or below this fail
pub const DEFAULT_FAILURE_THRESHOLD: u32 = 3;

/// Tunable rules for one table
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HouseRules {
    #[serde(default)]
    pub dice: DiceRules,
    #[serde(default)]
    pub sheet: SheetRules,
    #[serde(default)]
    pub actors: Vec<ActorSeed>,
}

impl HouseRules {
    pub fn validate(&self) -> Result<(), ConfigError> {
        // a d20 can never beat a threshold of 20
        if self.dice.failure_threshold >= 20 {
            return Err(ConfigError::ValidationError(format!(
                "failure_threshold {} leaves no winning roll",
                self.dice.failure_threshold
            )));
        }
        for actor in &self.actors {
            if actor.name.trim().is_empty() {
                return Err(ConfigError::ValidationError("actor with empty name".to_string()));
            }
            for (aspect, rank) in &actor.aspects {
                rank.parse::<DieRank>().map_err(|e| {
                    ConfigError::ValidationError(format!("{}.{}: {}", actor.name, aspect, e))
                })?;
            }
        }
        Ok(())
    }

    /// Build every configured actor
    pub fn build_actors(&self) -> Vec<Actor> {
        self.actors
            .iter()
            .map(|seed| seed.build(self.sheet.default_tab))
            .collect()
    }
}

/// Dice settings
///
/// The threshold applies to every die, so raising it shuts the small dice
/// out first: with a threshold of 4 a d4 can no longer succeed, and above
/// 11 only the d20 can. Values of 20 or more are rejected by `validate`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiceRules {
    /// Highest total that still counts as a failure
    #[serde(default = "default_failure_threshold")]
    pub failure_threshold: u32,
}

impl Default for DiceRules {
    fn default() -> Self {
        DiceRules {
            failure_threshold: DEFAULT_FAILURE_THRESHOLD,
        }
    }
}

fn default_failure_threshold() -> u32 {
    DEFAULT_FAILURE_THRESHOLD
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SheetRules {
    /// Tab shown for actors that never picked one
    #[serde(default)]
    pub default_tab: SheetTab,
}

/// Starting state of an actor
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActorSeed {
    pub name: String,
    #[serde(default)]
    pub img: Option<String>,
    /// Aspect name to rank text ("d20", ...)
    #[serde(default)]
    pub aspects: BTreeMap<String, String>,
    #[serde(default)]
    pub items: Vec<ItemData>,
}

impl ActorSeed {
    pub fn build(&self, default_tab: SheetTab) -> Actor {
        let mut actor = Actor::new(self.name.clone());
        if let Some(img) = &self.img {
            actor.set_image(img.clone());
        }
        for (aspect, rank) in &self.aspects {
            actor.set_aspect_raw(aspect.clone(), rank.clone());
        }
        for item in &self.items {
            actor.inventory.insert(item.clone());
        }
        actor.set_active_tab(default_tab);
        actor
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::parse_house_rules;
    use crate::resolver::DieResolver;
    use crate::sheet::ItemKind;

    #[test]
    fn test_defaults() {
        let rules = parse_house_rules("").unwrap();
        assert_eq!(rules.dice.failure_threshold, 3);
        assert_eq!(rules.sheet.default_tab, SheetTab::Carac);
        assert!(rules.actors.is_empty());
    }

    #[test]
    fn test_parse_rules() {
        let toml = r#"
[dice]
failure_threshold = 4

[sheet]
default_tab = "inventaire"

[[actors]]
name = "Mara"
img = "portraits/mara.png"

[actors.aspects]
force = "d8"
ruse = "d20"
chance = "d0"

[[actors.items]]
name = "Corde"
type = "objet"
system = { qty = 2, poids = 1 }

[[actors.items]]
name = "Hache"
type = "arme"
"#;

        let rules = parse_house_rules(toml).unwrap();
        assert_eq!(rules.dice.failure_threshold, 4);

        let actors = rules.build_actors();
        assert_eq!(actors.len(), 1);
        let mara = &actors[0];
        assert_eq!(mara.img, "portraits/mara.png");
        assert_eq!(mara.aspect("force"), Some(DieRank::D8));
        assert_eq!(mara.aspect("chance"), Some(DieRank::Exhausted));
        assert_eq!(mara.active_tab(), SheetTab::Inventaire);

        let items: Vec<_> = mara.inventory.iter().collect();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].qty(), 2);
        assert_eq!(items[1].kind(), ItemKind::Arme);
        assert_eq!(items[1].qty(), 1);
    }

    #[test]
    fn test_rejects_unknown_rank() {
        let toml = r#"
[[actors]]
name = "Mara"
aspects = { force = "d7" }
"#;
        let err = parse_house_rules(toml).unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError(msg) if msg.contains("force")));
    }

    #[test]
    fn test_rejects_impossible_threshold() {
        let err = parse_house_rules("[dice]\nfailure_threshold = 20\n").unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError(_)));
    }

    #[test]
    fn test_high_threshold_shuts_out_small_dice() {
        let rules = parse_house_rules("[dice]\nfailure_threshold = 19\n").unwrap();
        let resolver = DieResolver::new(rules.dice);

        let best_d12 = resolver.resolve(DieRank::D12, 12).unwrap();
        assert!(!best_d12.succeeded);
        assert_eq!(best_d12.new_rank, DieRank::D10);
        assert!(resolver.resolve(DieRank::D20, 20).unwrap().succeeded);

        let rules = parse_house_rules("[dice]\nfailure_threshold = 4\n").unwrap();
        let resolver = DieResolver::new(rules.dice);
        assert!(!resolver.resolve(DieRank::D4, 4).unwrap().succeeded);
        assert!(resolver.resolve(DieRank::D6, 5).unwrap().succeeded);
    }
}
