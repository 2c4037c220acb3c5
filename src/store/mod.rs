//! Key-value persistence for the playback rate.
//!
//! The rate controller only needs two capabilities from its store: read a
//! string by key and write one back. Two backends are provided:
//!
//! - [`MemoryStore`]: in-process map, used by tests and one-off sessions
//! - [`FileStore`]: JSON file written through on every `set`

mod error;
mod file;
mod memory;

pub use error::StoreError;
pub use file::FileStore;
pub use memory::MemoryStore;

/// Key under which the playback rate is persisted unless configured otherwise.
pub const DEFAULT_RATE_KEY: &str = "pacer.playback_rate";

/// Minimal string key-value store.
///
/// `get` never fails: a backend that cannot produce a value reports it as
/// absent. `set` may fail, and callers decide whether that matters.
pub trait KeyValueStore {
    /// Read the value stored under `key`, if any.
    fn get(&self, key: &str) -> Option<String>;

    /// Store `value` under `key`, replacing any previous value.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for &mut S {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        (**self).set(key, value)
    }
}
