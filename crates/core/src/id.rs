//! Strongly-typed identifiers used across the domain.

use core::borrow::Borrow;
use serde::{Deserialize, Serialize};

/// Identifier of an inventory item.
///
/// Item identifiers are free-form labels chosen by whoever registers the item
/// (e.g. `"A1"`), so this wraps a `String` rather than a generated UUID. Any
/// string is accepted, including the empty one.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(String);

impl ItemId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl core::fmt::Display for ItemId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ItemId {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

impl From<String> for ItemId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<ItemId> for String {
    fn from(value: ItemId) -> Self {
        value.0
    }
}

impl AsRef<str> for ItemId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

// Lets `BTreeMap<ItemId, _>` be queried with a plain `&str`.
impl Borrow<str> for ItemId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    #[test]
    fn displays_the_raw_label() {
        assert_eq!(ItemId::from("A1").to_string(), "A1");
    }

    #[test]
    fn orders_lexicographically() {
        let mut ids = vec![ItemId::from("B2"), ItemId::from("A10"), ItemId::from("A2")];
        ids.sort();
        assert_eq!(ids, vec![ItemId::from("A10"), ItemId::from("A2"), ItemId::from("B2")]);
    }

    #[test]
    fn map_lookup_by_str() {
        let mut map = BTreeMap::new();
        map.insert(ItemId::from("A1"), 1);
        assert_eq!(map.get("A1"), Some(&1));
        assert_eq!(map.get("A2"), None);
    }

    #[test]
    fn serializes_transparently() {
        let json = serde_json::to_string(&ItemId::from("A1")).unwrap();
        assert_eq!(json, "\"A1\"");
    }
}
