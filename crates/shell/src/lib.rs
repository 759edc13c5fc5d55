//! `congo-shell`
//!
//! **Responsibility:** line-oriented terminal front end for the inventory.
//!
//! The shell is a **thin wrapper** around [`congo_inventory::InventoryManager`]:
//! it parses commands, calls the manager, and renders results or errors.

pub mod command;
pub mod config;
pub mod session;

pub use command::{ParseError, ShellCommand};
pub use config::{ConfigError, ShellConfig};
pub use session::Session;
