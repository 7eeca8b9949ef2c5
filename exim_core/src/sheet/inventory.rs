//! Embedded item collection

use super::item::{Item, ItemData, ItemId, ItemKind};
use crate::error::SheetError;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// What happened to an item dropped onto an inventory
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropResult {
    /// Added to the quantity of an existing stack
    Merged(ItemId),
    /// Stored as a new item
    Created(ItemId),
}

impl DropResult {
    pub fn id(self) -> ItemId {
        match self {
            DropResult::Merged(id) | DropResult::Created(id) => id,
        }
    }
}

/// Items carried by one actor, in creation order
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Inventory {
    items: Vec<Item>,
    next_id: u64,
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Item> {
        self.items.iter()
    }

    pub fn get(&self, id: ItemId) -> Option<&Item> {
        self.items.iter().find(|i| i.id == id)
    }

    /// Carried weight, `poids * qty` summed over all items
    pub fn total_weight(&self) -> u64 {
        self.items.iter().fold(0u64, |total, item| {
            let system = &item.data.system;
            total.saturating_add(u64::from(system.poids).saturating_mul(u64::from(system.qty)))
        })
    }

    /// Store an item under a fresh id
    pub fn insert(&mut self, data: ItemData) -> ItemId {
        let id = ItemId(self.next_id);
        self.next_id += 1;
        self.items.push(Item { id, data });
        id
    }

    /// Create a blank item of the given kind
    pub fn create(&mut self, kind: ItemKind) -> ItemId {
        let id = self.insert(ItemData::blank(kind));
        debug!(%id, %kind, "created item");
        id
    }

    /// Create an item from free text such as a button's `data-type`
    pub fn create_loose(&mut self, kind: &str) -> ItemId {
        self.create(ItemKind::from_loose(kind))
    }

    pub fn delete(&mut self, id: ItemId) -> Result<Item, SheetError> {
        let idx = self
            .items
            .iter()
            .position(|i| i.id == id)
            .ok_or(SheetError::ItemNotFound(id))?;
        let item = self.items.remove(idx);
        debug!(%id, name = %item.data.name, "deleted item");
        Ok(item)
    }

    /// Set one field of an item from its text form
    ///
    /// `field` may carry the `system.` prefix used by form inputs.
    pub fn update_field(&mut self, id: ItemId, field: &str, value: &str) -> Result<(), SheetError> {
        let item = self
            .items
            .iter_mut()
            .find(|i| i.id == id)
            .ok_or(SheetError::ItemNotFound(id))?;
        let field = field.strip_prefix("system.").unwrap_or(field);

        match field {
            "name" => item.data.name = value.to_string(),
            "description" => item.data.system.description = value.to_string(),
            "qty" => item.data.system.qty = parse_count(field, value)?,
            "poids" => item.data.system.poids = parse_count(field, value)?,
            other => return Err(SheetError::UnknownField(other.to_string())),
        }
        debug!(%id, field, value, "updated item");
        Ok(())
    }

    /// Accept a dropped item, stacking it onto an item with the same name and kind
    pub fn receive_drop(&mut self, data: ItemData) -> DropResult {
        if let Some(existing) = self.items.iter_mut().find(|i| i.data.stacks_with(&data)) {
            existing.data.system.qty = existing.data.system.qty.saturating_add(data.system.qty);
            debug!(id = %existing.id, qty = existing.data.system.qty, "merged dropped item");
            return DropResult::Merged(existing.id);
        }
        let id = self.insert(data);
        debug!(%id, "stored dropped item");
        DropResult::Created(id)
    }
}

fn parse_count(field: &str, value: &str) -> Result<u32, SheetError> {
    value.trim().parse().map_err(|_| SheetError::InvalidValue {
        field: field.to_string(),
        value: value.to_string(),
    })
}
