//! Capabilities the host must provide to the roll flow

use crate::error::{DiceError, SheetError};
use serde::{Deserialize, Serialize};

/// Read/write access to named attributes of one actor record
pub trait ActorStore {
    /// Raw stored value at `path`, `None` if unset
    fn read_attribute(&self, path: &str) -> Option<String>;

    fn write_attribute(&mut self, path: &str, value: &str) -> Result<(), SheetError>;
}

/// Result of evaluating a dice expression
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RollResult {
    pub notation: String,
    /// Face shown by each die
    pub dice: Vec<u32>,
    pub total: u32,
}

/// Source of random dice totals
pub trait DiceEvaluator {
    fn evaluate(&mut self, notation: &str) -> Result<RollResult, DiceError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotifyKind {
    Warn,
    Info,
}

/// User-facing notification surface
pub trait Notifier {
    fn notify(&mut self, kind: NotifyKind, message: &str);
}
