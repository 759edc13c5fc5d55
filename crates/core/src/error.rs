//! Domain error model.

use thiserror::Error;

use crate::id::ItemId;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Keep this focused on deterministic business failures. Each variant carries
/// the offending identifier so callers can show it to the user.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// An item with this identifier is already registered.
    #[error("item with ID '{0}' already exists")]
    DuplicateItem(ItemId),

    /// No item with this identifier is registered.
    #[error("item with ID '{0}' not found")]
    ItemNotFound(ItemId),
}

impl DomainError {
    pub fn duplicate(id: impl Into<ItemId>) -> Self {
        Self::DuplicateItem(id.into())
    }

    pub fn not_found(id: impl Into<ItemId>) -> Self {
        Self::ItemNotFound(id.into())
    }

    /// Identifier the failed operation was about.
    pub fn item_id(&self) -> &ItemId {
        match self {
            DomainError::DuplicateItem(id) | DomainError::ItemNotFound(id) => id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_carry_the_offending_id() {
        assert_eq!(
            DomainError::duplicate("A1").to_string(),
            "item with ID 'A1' already exists"
        );
        assert_eq!(
            DomainError::not_found("Z9").to_string(),
            "item with ID 'Z9' not found"
        );
    }

    #[test]
    fn item_id_accessor() {
        assert_eq!(DomainError::not_found("Z9").item_id().as_str(), "Z9");
        assert_eq!(DomainError::duplicate("A1").item_id().as_str(), "A1");
    }
}
