//! exim_core - Rules engine and sheet model for the EXIM tabletop system
//!
//! This library provides:
//! - DieRank: the d20 → d4 → exhausted degradation chain
//! - DieResolver: success check (total > 3) and die wear on failure
//! - roll_aspect: the aspect roll flow, written against host ports
//! - Actor / Inventory: an in-memory actor record with embedded items
//! - HouseRules: TOML configuration

pub mod config;
pub mod dice;
pub mod die;
pub mod error;
pub mod flow;
pub mod outcome;
pub mod ports;
pub mod prelude;
pub mod resolver;
pub mod sheet;

// Re-export core types for convenience
pub use config::{ConfigError, HouseRules};
pub use dice::RngDiceEvaluator;
pub use die::{degrade, is_exhausted, DieRank};
pub use error::{DiceError, InvalidRankError, SheetError};
pub use flow::roll_aspect;
pub use outcome::{RollCard, RollOutcome};
pub use ports::{ActorStore, DiceEvaluator, NotifyKind, Notifier, RollResult};
pub use resolver::{resolve, DieResolver};
pub use sheet::{Actor, DragData, DropResult, Inventory, Item, ItemData, ItemId, ItemKind, SheetTab};
