use serde::{Deserialize, Serialize};

use congo_core::ItemId;

/// A stored inventory item.
///
/// Immutable once constructed: the manager hands out shared borrows only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    id: ItemId,
    description: String,
    location: String,
}

impl Item {
    pub fn new(
        id: impl Into<ItemId>,
        description: impl Into<String>,
        location: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            description: description.into(),
            location: location.into(),
        }
    }

    pub fn id(&self) -> &ItemId {
        &self.id
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn location(&self) -> &str {
        &self.location
    }
}
