use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use congo_core::{Aggregate, DomainError, DomainResult, ItemId};
use congo_events::{Command, Event};

use crate::item::Item;

/// Command: AddItem.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddItem {
    pub item_id: ItemId,
    pub description: String,
    pub location: String,
    pub occurred_at: DateTime<Utc>,
}

/// Command: RemoveItem.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoveItem {
    pub item_id: ItemId,
    pub occurred_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum InventoryCommand {
    AddItem(AddItem),
    RemoveItem(RemoveItem),
}

impl Command for InventoryCommand {
    fn target_item_id(&self) -> &ItemId {
        match self {
            InventoryCommand::AddItem(c) => &c.item_id,
            InventoryCommand::RemoveItem(c) => &c.item_id,
        }
    }
}

/// Event: ItemAdded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemAdded {
    pub item_id: ItemId,
    pub description: String,
    pub location: String,
    pub occurred_at: DateTime<Utc>,
}

/// Event: ItemRemoved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemRemoved {
    pub item_id: ItemId,
    pub occurred_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum InventoryEvent {
    ItemAdded(ItemAdded),
    ItemRemoved(ItemRemoved),
}

impl InventoryEvent {
    pub fn item_id(&self) -> &ItemId {
        match self {
            InventoryEvent::ItemAdded(e) => &e.item_id,
            InventoryEvent::ItemRemoved(e) => &e.item_id,
        }
    }
}

impl Event for InventoryEvent {
    fn event_type(&self) -> &'static str {
        match self {
            InventoryEvent::ItemAdded(_) => "inventory.item.added",
            InventoryEvent::ItemRemoved(_) => "inventory.item.removed",
        }
    }

    fn version(&self) -> u32 {
        1
    }

    fn occurred_at(&self) -> DateTime<Utc> {
        match self {
            InventoryEvent::ItemAdded(e) => e.occurred_at,
            InventoryEvent::ItemRemoved(e) => e.occurred_at,
        }
    }
}

/// In-memory inventory: at most one [`Item`] per identifier.
///
/// Mutations go through [`InventoryManager::execute`] (decide, then apply), so
/// a rejected operation never changes the collection. Reads hand out shared
/// borrows tied to `&self`; callers cannot hold them across a mutation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InventoryManager {
    items: BTreeMap<ItemId, Item>,
    version: u64,
}

impl InventoryManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new item.
    ///
    /// Fails with [`DomainError::DuplicateItem`] if `id` is already present.
    pub fn add_item(
        &mut self,
        id: impl Into<ItemId>,
        description: impl Into<String>,
        location: impl Into<String>,
    ) -> DomainResult<()> {
        let command = InventoryCommand::AddItem(AddItem {
            item_id: id.into(),
            description: description.into(),
            location: location.into(),
            occurred_at: Utc::now(),
        });
        self.execute(&command).map(|_| ())
    }

    /// Look up an item by identifier.
    pub fn find_by_id(&self, id: &str) -> DomainResult<&Item> {
        self.items.get(id).ok_or_else(|| DomainError::not_found(id))
    }

    /// Remove an item.
    ///
    /// Fails with [`DomainError::ItemNotFound`] if `id` is absent.
    pub fn remove_item(&mut self, id: impl Into<ItemId>) -> DomainResult<()> {
        let command = InventoryCommand::RemoveItem(RemoveItem {
            item_id: id.into(),
            occurred_at: Utc::now(),
        });
        self.execute(&command).map(|_| ())
    }

    /// All items ordered by ascending description, ties by ascending id.
    pub fn list_items_by_description(&self) -> Vec<&Item> {
        let mut items: Vec<&Item> = self.items.values().collect();
        items.sort_by(|a, b| {
            a.description()
                .cmp(b.description())
                .then_with(|| a.id().cmp(b.id()))
        });
        items
    }

    /// Decide and apply a command, returning the events it produced.
    pub fn execute(&mut self, command: &InventoryCommand) -> DomainResult<Vec<InventoryEvent>> {
        match congo_events::execute(self, command) {
            Ok(events) => {
                for event in &events {
                    info!(
                        item_id = %event.item_id(),
                        event_type = event.event_type(),
                        version = self.version,
                        "inventory event applied"
                    );
                }
                Ok(events)
            }
            Err(err) => {
                debug!(item_id = %command.target_item_id(), error = %err, "inventory command rejected");
                Err(err)
            }
        }
    }

    pub fn contains(&self, id: &str) -> bool {
        self.items.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl Aggregate for InventoryManager {
    type Command = InventoryCommand;
    type Event = InventoryEvent;
    type Error = DomainError;

    fn version(&self) -> u64 {
        self.version
    }

    fn apply(&mut self, event: &Self::Event) {
        match event {
            InventoryEvent::ItemAdded(e) => {
                self.items.insert(
                    e.item_id.clone(),
                    Item::new(e.item_id.clone(), e.description.clone(), e.location.clone()),
                );
            }
            InventoryEvent::ItemRemoved(e) => {
                self.items.remove(&e.item_id);
            }
        }

        // Deterministic version tracking: +1 per applied event.
        self.version += 1;
    }

    fn handle(&self, command: &Self::Command) -> Result<Vec<Self::Event>, Self::Error> {
        match command {
            InventoryCommand::AddItem(cmd) => self.handle_add(cmd),
            InventoryCommand::RemoveItem(cmd) => self.handle_remove(cmd),
        }
    }
}

impl InventoryManager {
    fn handle_add(&self, cmd: &AddItem) -> DomainResult<Vec<InventoryEvent>> {
        if self.items.contains_key(&cmd.item_id) {
            return Err(DomainError::DuplicateItem(cmd.item_id.clone()));
        }
        Ok(vec![InventoryEvent::ItemAdded(ItemAdded {
            item_id: cmd.item_id.clone(),
            description: cmd.description.clone(),
            location: cmd.location.clone(),
            occurred_at: cmd.occurred_at,
        })])
    }

    fn handle_remove(&self, cmd: &RemoveItem) -> DomainResult<Vec<InventoryEvent>> {
        if !self.items.contains_key(&cmd.item_id) {
            return Err(DomainError::ItemNotFound(cmd.item_id.clone()));
        }
        Ok(vec![InventoryEvent::ItemRemoved(ItemRemoved {
            item_id: cmd.item_id.clone(),
            occurred_at: cmd.occurred_at,
        })])
    }
}
