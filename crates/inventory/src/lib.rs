//! Inventory domain module.
//!
//! This crate contains the business rules for the storage inventory,
//! implemented purely as deterministic domain logic (no IO, no presentation).

pub mod item;
pub mod manager;

pub use item::Item;
pub use manager::{
    AddItem, InventoryCommand, InventoryEvent, InventoryManager, ItemAdded, ItemRemoved,
    RemoveItem,
};
