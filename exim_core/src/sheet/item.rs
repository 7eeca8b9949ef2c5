//! Inventory items

use serde::{Deserialize, Serialize};
use std::fmt;

/// Item category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemKind {
    #[default]
    Objet,
    Arme,
    Armure,
}

impl ItemKind {
    pub fn all() -> &'static [ItemKind] {
        &[ItemKind::Objet, ItemKind::Arme, ItemKind::Armure]
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ItemKind::Objet => "objet",
            ItemKind::Arme => "arme",
            ItemKind::Armure => "armure",
        }
    }

    /// Name given to a freshly created item of this kind ("Arme")
    pub fn display_name(self) -> &'static str {
        match self {
            ItemKind::Objet => "Objet",
            ItemKind::Arme => "Arme",
            ItemKind::Armure => "Armure",
        }
    }

    /// Parse user-supplied text, falling back to `Objet` for anything unknown
    pub fn from_loose(text: &str) -> Self {
        match text.trim().to_lowercase().as_str() {
            "arme" => ItemKind::Arme,
            "armure" => ItemKind::Armure,
            _ => ItemKind::Objet,
        }
    }
}

impl fmt::Display for ItemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Identifier of an item inside one actor's inventory
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ItemId(pub u64);

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Per-item game data
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemSystem {
    #[serde(default = "default_qty")]
    pub qty: u32,
    /// Weight
    #[serde(default)]
    pub poids: u32,
    #[serde(default)]
    pub description: String,
}

impl Default for ItemSystem {
    fn default() -> Self {
        ItemSystem {
            qty: default_qty(),
            poids: 0,
            description: String::new(),
        }
    }
}

fn default_qty() -> u32 {
    1
}

/// An item detached from any inventory (no id)
///
/// This is what travels in a drag payload and what config files describe.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemData {
    pub name: String,
    #[serde(rename = "type", default)]
    pub kind: ItemKind,
    #[serde(default)]
    pub system: ItemSystem,
}

impl ItemData {
    /// A blank item of the given kind, named after the kind
    pub fn blank(kind: ItemKind) -> Self {
        ItemData {
            name: kind.display_name().to_string(),
            kind,
            system: ItemSystem::default(),
        }
    }

    /// Whether two items stack together on drop
    pub fn stacks_with(&self, other: &ItemData) -> bool {
        self.name == other.name && self.kind == other.kind
    }
}

/// An item owned by an inventory
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    #[serde(flatten)]
    pub data: ItemData,
}

impl Item {
    pub fn name(&self) -> &str {
        &self.data.name
    }

    pub fn kind(&self) -> ItemKind {
        self.data.kind
    }

    pub fn qty(&self) -> u32 {
        self.data.system.qty
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_from_loose() {
        assert_eq!(ItemKind::from_loose("arme"), ItemKind::Arme);
        assert_eq!(ItemKind::from_loose("  ARMURE "), ItemKind::Armure);
        assert_eq!(ItemKind::from_loose("objet"), ItemKind::Objet);
        assert_eq!(ItemKind::from_loose("potion"), ItemKind::Objet);
        assert_eq!(ItemKind::from_loose(""), ItemKind::Objet);
    }

    #[test]
    fn test_blank_item() {
        let data = ItemData::blank(ItemKind::Armure);
        assert_eq!(data.name, "Armure");
        assert_eq!(data.system.qty, 1);
        assert_eq!(data.system.poids, 0);
        assert!(data.system.description.is_empty());
    }

    #[test]
    fn test_item_data_json_shape() {
        let json = r#"{"name":"Corde","type":"objet","system":{"qty":2,"poids":1}}"#;
        let data: ItemData = serde_json::from_str(json).unwrap();
        assert_eq!(data.kind, ItemKind::Objet);
        assert_eq!(data.system.qty, 2);
        assert_eq!(data.system.description, "");

        let minimal: ItemData = serde_json::from_str(r#"{"name":"Dague"}"#).unwrap();
        assert_eq!(minimal.kind, ItemKind::Objet);
        assert_eq!(minimal.system.qty, 1);
    }

    #[test]
    fn test_stacks_with() {
        let a = ItemData::blank(ItemKind::Arme);
        let mut b = ItemData::blank(ItemKind::Arme);
        b.system.qty = 4;
        assert!(a.stacks_with(&b));

        let c = ItemData::blank(ItemKind::Objet);
        assert!(!a.stacks_with(&c));
    }
}
