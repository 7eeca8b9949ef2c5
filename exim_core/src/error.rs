//! Error types

use crate::sheet::ItemId;
use thiserror::Error;

/// A die rank that cannot be resolved
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InvalidRankError {
    #[error("no die rank set")]
    Missing,
    #[error("die is exhausted")]
    Exhausted,
    #[error("unrecognized die rank: {0:?}")]
    Unrecognized(String),
}

/// Dice evaluation error
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DiceError {
    #[error("invalid dice notation: {0:?}")]
    InvalidNotation(String),
}

/// Error raised by sheet operations and the roll flow
#[derive(Error, Debug)]
pub enum SheetError {
    #[error(transparent)]
    Rank(#[from] InvalidRankError),
    #[error(transparent)]
    Dice(#[from] DiceError),
    #[error("unknown attribute path: {0}")]
    UnknownPath(String),
    #[error("no item with id {0}")]
    ItemNotFound(ItemId),
    #[error("unknown item field: {0}")]
    UnknownField(String),
    #[error("invalid value {value:?} for field {field}")]
    InvalidValue { field: String, value: String },
    #[error("unsupported drop payload type: {0}")]
    UnsupportedDrop(String),
    #[error("malformed drop payload: {0}")]
    Payload(#[from] serde_json::Error),
}
