use congo_core::ItemId;

/// A command targets a specific item (command abstraction).
///
/// Commands represent **intent** (e.g. "register item A1 on Shelf1"). They are
/// transient and are either rejected with a domain error or turned into events.
///
/// Commands must own all their data so they can be cloned into logs and
/// replayed in tests.
pub trait Command: Clone + core::fmt::Debug + Send + Sync + 'static {
    fn target_item_id(&self) -> &ItemId;
}
