//! Actor record: aspects, portrait, inventory and sheet state

use super::inventory::{DropResult, Inventory};
use super::item::{ItemData, ItemId};
use super::SheetTab;
use crate::die::DieRank;
use crate::error::SheetError;
use crate::ports::ActorStore;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::{debug, info};

/// Attribute path prefix under which aspect dice are stored
pub const ASPECT_PATH_PREFIX: &str = "system.aspects.";

/// Attribute path of the actor portrait
pub const IMAGE_PATH: &str = "img";

/// Placeholder portrait for new actors
pub const DEFAULT_IMAGE: &str = "icons/svg/mystery-man.svg";

/// Build the attribute path of an aspect (`system.aspects.<name>`)
pub fn aspect_path(aspect: &str) -> String {
    format!("{}{}", ASPECT_PATH_PREFIX, aspect)
}

/// Payload carried when an item is dragged out of a sheet
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DragData {
    #[serde(rename = "type")]
    pub kind: String,
    /// Name of the actor the item was dragged from
    pub actor: String,
    pub item: ItemData,
}

impl DragData {
    pub const ITEM: &'static str = "Item";

    pub fn item(actor: &str, item: ItemData) -> Self {
        DragData {
            kind: Self::ITEM.to_string(),
            actor: actor.to_string(),
            item,
        }
    }

    pub fn to_json(&self) -> Result<String, SheetError> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_json(text: &str) -> Result<Self, SheetError> {
        Ok(serde_json::from_str(text)?)
    }
}

/// A character record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Actor {
    pub name: String,
    pub img: String,
    /// Raw aspect values as stored, keyed by aspect name
    aspects: BTreeMap<String, String>,
    pub inventory: Inventory,
    active_tab: SheetTab,
}

impl Actor {
    pub fn new(name: impl Into<String>) -> Self {
        Actor {
            name: name.into(),
            img: DEFAULT_IMAGE.to_string(),
            aspects: BTreeMap::new(),
            inventory: Inventory::new(),
            active_tab: SheetTab::default(),
        }
    }

    /// Builder-style aspect setter
    pub fn with_aspect(mut self, aspect: impl Into<String>, rank: DieRank) -> Self {
        self.aspects.insert(aspect.into(), rank.to_string());
        self
    }

    /// Store a raw aspect value without validating it
    pub fn set_aspect_raw(&mut self, aspect: impl Into<String>, value: impl Into<String>) {
        self.aspects.insert(aspect.into(), value.into());
    }

    pub fn aspect_raw(&self, aspect: &str) -> Option<&str> {
        self.aspects.get(aspect).map(String::as_str)
    }

    /// Parsed aspect rank, `None` when unset or not a known rank
    pub fn aspect(&self, aspect: &str) -> Option<DieRank> {
        self.aspect_raw(aspect).and_then(|raw| raw.parse().ok())
    }

    /// Aspect names and raw values in name order
    pub fn aspects(&self) -> impl Iterator<Item = (&str, &str)> {
        self.aspects.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn active_tab(&self) -> SheetTab {
        self.active_tab
    }

    pub fn set_active_tab(&mut self, tab: SheetTab) {
        self.active_tab = tab;
    }

    pub fn set_image(&mut self, path: impl Into<String>) {
        self.img = path.into();
        debug!(actor = %self.name, img = %self.img, "portrait changed");
    }

    /// Payload for dragging one of this actor's items elsewhere
    pub fn drag_data(&self, id: ItemId) -> Result<DragData, SheetError> {
        let item = self.inventory.get(id).ok_or(SheetError::ItemNotFound(id))?;
        Ok(DragData::item(&self.name, item.data.clone()))
    }

    pub fn receive_drop(&mut self, data: DragData) -> Result<DropResult, SheetError> {
        if data.kind != DragData::ITEM {
            return Err(SheetError::UnsupportedDrop(data.kind));
        }
        let result = self.inventory.receive_drop(data.item);
        info!(from = %data.actor, to = %self.name, ?result, "item dropped");
        Ok(result)
    }

    /// Decode and accept a serialized drag payload
    pub fn receive_drop_json(&mut self, text: &str) -> Result<DropResult, SheetError> {
        self.receive_drop(DragData::from_json(text)?)
    }
}

impl ActorStore for Actor {
    fn read_attribute(&self, path: &str) -> Option<String> {
        if path == IMAGE_PATH {
            return Some(self.img.clone());
        }
        let aspect = path.strip_prefix(ASPECT_PATH_PREFIX)?;
        self.aspects.get(aspect).cloned()
    }

    fn write_attribute(&mut self, path: &str, value: &str) -> Result<(), SheetError> {
        if path == IMAGE_PATH {
            self.set_image(value);
            return Ok(());
        }
        match path.strip_prefix(ASPECT_PATH_PREFIX) {
            Some(aspect) if !aspect.is_empty() => {
                self.aspects.insert(aspect.to_string(), value.to_string());
                Ok(())
            }
            _ => Err(SheetError::UnknownPath(path.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sheet::ItemKind;

    fn hero() -> Actor {
        Actor::new("Hero")
            .with_aspect("force", DieRank::D8)
            .with_aspect("ruse", DieRank::D20)
    }

    #[test]
    fn test_attribute_paths() {
        let mut actor = hero();
        assert_eq!(actor.read_attribute("system.aspects.force").as_deref(), Some("d8"));
        assert_eq!(actor.read_attribute("system.aspects.charme"), None);
        assert_eq!(actor.read_attribute("system.other"), None);

        actor.write_attribute(&aspect_path("force"), "d6").unwrap();
        assert_eq!(actor.aspect("force"), Some(DieRank::D6));

        actor.write_attribute(IMAGE_PATH, "portraits/hero.png").unwrap();
        assert_eq!(actor.img, "portraits/hero.png");

        assert!(matches!(
            actor.write_attribute("system.hp", "3"),
            Err(SheetError::UnknownPath(_))
        ));
        assert!(matches!(
            actor.write_attribute("system.aspects.", "d4"),
            Err(SheetError::UnknownPath(_))
        ));
    }

    #[test]
    fn test_raw_aspect_kept_verbatim() {
        let mut actor = hero();
        actor.set_aspect_raw("chance", "-");
        assert_eq!(actor.aspect_raw("chance"), Some("-"));
        assert_eq!(actor.aspect("chance"), Some(DieRank::Exhausted));

        actor.set_aspect_raw("chance", "d7");
        assert_eq!(actor.aspect("chance"), None);

        let names: Vec<&str> = actor.aspects().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["chance", "force", "ruse"]);
    }

    #[test]
    fn test_active_tab() {
        let mut actor = hero();
        assert_eq!(actor.active_tab(), SheetTab::Carac);
        actor.set_active_tab(SheetTab::Inventaire);
        assert_eq!(actor.active_tab(), SheetTab::Inventaire);
    }

    #[test]
    fn test_drag_between_actors() {
        let mut source = hero();
        let mut target = Actor::new("Companion");
        let id = source.inventory.create(ItemKind::Arme);
        source.inventory.update_field(id, "qty", "2").unwrap();

        let payload = source.drag_data(id).unwrap().to_json().unwrap();
        let first = target.receive_drop_json(&payload).unwrap();
        assert!(matches!(first, DropResult::Created(_)));

        let second = target.receive_drop_json(&payload).unwrap();
        assert_eq!(second, DropResult::Merged(first.id()));
        assert_eq!(target.inventory.get(first.id()).unwrap().qty(), 4);

        // the source keeps its copy
        assert_eq!(source.inventory.len(), 1);
    }

    #[test]
    fn test_drop_rejects_other_payloads() {
        let mut actor = hero();
        let payload = r#"{"type":"Actor","actor":"Hero","item":{"name":"x"}}"#;
        assert!(matches!(
            actor.receive_drop_json(payload),
            Err(SheetError::UnsupportedDrop(kind)) if kind == "Actor"
        ));
        assert!(matches!(
            actor.receive_drop_json("not json"),
            Err(SheetError::Payload(_))
        ));
        assert!(actor.inventory.is_empty());
    }

    #[test]
    fn test_drag_unknown_item() {
        let actor = hero();
        assert!(matches!(
            actor.drag_data(ItemId(7)),
            Err(SheetError::ItemNotFound(_))
        ));
    }
}
