//! Character sheet model
//!
//! An in-memory stand-in for the host's actor documents: aspect dice,
//! portrait, embedded items and the remembered sheet tab.

mod actor;
mod inventory;
mod item;

pub use actor::{aspect_path, Actor, DragData, ASPECT_PATH_PREFIX, DEFAULT_IMAGE, IMAGE_PATH};
pub use inventory::{DropResult, Inventory};
pub use item::{Item, ItemData, ItemId, ItemKind, ItemSystem};

use serde::{Deserialize, Serialize};

/// Sheet tab
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SheetTab {
    /// Aspects
    #[default]
    Carac,
    Inventaire,
}

impl SheetTab {
    pub fn all() -> &'static [SheetTab] {
        &[SheetTab::Carac, SheetTab::Inventaire]
    }

    pub fn name(&self) -> &'static str {
        match self {
            SheetTab::Carac => "Carac",
            SheetTab::Inventaire => "Inventaire",
        }
    }
}
