//! Prelude module for convenient imports
//!
//! ```rust
//! use exim_core::prelude::*;
//! ```

// Dice
pub use crate::die::{degrade, is_exhausted, DieRank};
pub use crate::resolver::DieResolver;
pub use crate::outcome::{RollCard, RollOutcome};

// Host ports
pub use crate::ports::{ActorStore, DiceEvaluator, NotifyKind, Notifier};
pub use crate::dice::RngDiceEvaluator;
pub use crate::flow::roll_aspect;

// Sheet model
pub use crate::sheet::{Actor, DragData, DropResult, ItemId, ItemKind, SheetTab};

// Errors
pub use crate::error::{InvalidRankError, SheetError};
