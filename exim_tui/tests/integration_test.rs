//! Integration test: load house rules -> roll aspects -> wear dice -> move items
//!
//! This test drives the full sheet flow through the public API, the same way
//! the terminal host does.

use exim_core::config::{load_house_rules, parse_house_rules};
use exim_core::{
    roll_aspect, DiceError, DiceEvaluator, DieRank, DieResolver, DropResult, NotifyKind, Notifier,
    RngDiceEvaluator, RollResult, SheetTab,
};
use std::path::Path;

/// Dice that always show the same face
struct Loaded(u32);

impl DiceEvaluator for Loaded {
    fn evaluate(&mut self, notation: &str) -> Result<RollResult, DiceError> {
        Ok(RollResult {
            notation: notation.to_string(),
            dice: vec![self.0],
            total: self.0,
        })
    }
}

#[derive(Default)]
struct Warnings(Vec<String>);

impl Notifier for Warnings {
    fn notify(&mut self, kind: NotifyKind, message: &str) {
        if kind == NotifyKind::Warn {
            self.0.push(message.to_string());
        }
    }
}

#[test]
fn test_shipped_config_loads() {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("config/exim.toml");
    let rules = load_house_rules(&path).expect("shipped exim.toml should load");

    let actors = rules.build_actors();
    assert_eq!(actors.len(), 2);
    assert_eq!(actors[0].aspect("force"), Some(DieRank::D12));
    assert_eq!(actors[0].active_tab(), SheetTab::Carac);
}

#[test]
fn test_die_wears_down_to_exhaustion() {
    let rules = parse_house_rules(
        r#"
[[actors]]
name = "Mara"
aspects = { force = "d20" }
"#,
    )
    .unwrap();
    let resolver = DieResolver::new(rules.dice.clone());
    let mut mara = rules.build_actors().remove(0);
    let mut dice = Loaded(2);
    let mut warnings = Warnings::default();

    let mut seen = vec![DieRank::D20];
    while let Some(card) = roll_aspect(&resolver, &mut mara, &mut dice, &mut warnings, "force").unwrap() {
        assert!(!card.outcome.succeeded);
        seen.push(card.outcome.new_rank);
    }

    assert_eq!(
        seen,
        vec![
            DieRank::D20,
            DieRank::D12,
            DieRank::D10,
            DieRank::D8,
            DieRank::D6,
            DieRank::D4,
            DieRank::Exhausted,
        ]
    );
    assert_eq!(mara.aspect_raw("force"), Some("d0"));
    assert_eq!(warnings.0.len(), 1);
}

#[test]
fn test_success_never_wears_the_die() {
    let rules = parse_house_rules("[[actors]]\nname = \"Mara\"\naspects = { ruse = \"d4\" }\n").unwrap();
    let resolver = DieResolver::new(rules.dice.clone());
    let mut mara = rules.build_actors().remove(0);
    let mut dice = Loaded(4);
    let mut warnings = Warnings::default();

    for _ in 0..10 {
        let card = roll_aspect(&resolver, &mut mara, &mut dice, &mut warnings, "ruse")
            .unwrap()
            .unwrap();
        assert!(card.outcome.succeeded);
    }
    assert_eq!(mara.aspect("ruse"), Some(DieRank::D4));
    assert!(warnings.0.is_empty());
}

#[test]
fn test_random_rolls_only_move_down_the_chain() {
    let resolver = DieResolver::default();
    let mut dice = RngDiceEvaluator::seeded(2024);
    let mut warnings = Warnings::default();
    let rules = parse_house_rules("[[actors]]\nname = \"Mara\"\naspects = { esprit = \"d8\" }\n").unwrap();
    let mut mara = rules.build_actors().remove(0);

    let mut previous = DieRank::D8;
    for _ in 0..100 {
        match roll_aspect(&resolver, &mut mara, &mut dice, &mut warnings, "esprit").unwrap() {
            Some(card) => {
                assert_eq!(card.outcome.rank, previous);
                assert_eq!(card.outcome.succeeded, card.outcome.total > 3);
                assert!(card.outcome.total >= 1 && card.outcome.total <= 8);
                previous = card.outcome.new_rank;
            }
            None => assert_eq!(previous, DieRank::Exhausted),
        }
    }
}

#[test]
fn test_items_move_between_shipped_actors() {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("config/exim.toml");
    let mut actors = load_house_rules(&path).unwrap().build_actors();
    let mut coffre = actors.pop().unwrap();
    let mut mara = actors.pop().unwrap();

    let corde = mara
        .inventory
        .iter()
        .find(|i| i.name() == "Corde")
        .map(|i| i.id)
        .unwrap();
    let payload = mara.drag_data(corde).unwrap().to_json().unwrap();

    let result = coffre.receive_drop_json(&payload).unwrap();
    assert!(matches!(result, DropResult::Merged(_)));
    assert_eq!(coffre.inventory.get(result.id()).unwrap().qty(), 3);

    let dague = mara.inventory.iter().find(|i| i.name() == "Dague").map(|i| i.id).unwrap();
    let payload = mara.drag_data(dague).unwrap().to_json().unwrap();
    assert!(matches!(coffre.receive_drop_json(&payload).unwrap(), DropResult::Created(_)));
    assert_eq!(coffre.inventory.len(), 3);
}
