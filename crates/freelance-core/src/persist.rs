//! Versioned JSON persistence on top of a [`KeyValueStore`]
//!
//! Values are written as `{"version": N, "data": {...}}`. On load:
//! - a missing key yields `None`
//! - an unversioned object (what older builds wrote) is migrated as version 0
//! - a version newer than [`SCHEMA_VERSION`], bad JSON or a value that fails
//!   [`Persisted::validate`] is a [`Error::Storage`]
//!
//! [`load_or_default`] turns every failure into the type's default;
//! [`load_or_init`] also writes that default when nothing was stored.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{Error, Result};
use crate::storage::KeyValueStore;

pub const SCHEMA_VERSION: u32 = 1;

/// An object stored under a fixed key
pub trait Persisted: Serialize + DeserializeOwned + Default {
    fn storage_key() -> &'static str;

    /// Checked after every load; a failure discards the stored value
    fn validate(&self) -> Result<()> {
        Ok(())
    }
}

#[derive(Serialize)]
struct Envelope<'a, T> {
    version: u32,
    data: &'a T,
}

#[derive(Deserialize)]
struct StoredEnvelope {
    version: u32,
    data: Value,
}

fn is_envelope(value: &Value) -> bool {
    value
        .as_object()
        .map(|obj| obj.len() == 2 && obj.contains_key("version") && obj.contains_key("data"))
        .unwrap_or(false)
}

/// Decode a raw stored string for `key`
fn decode<T: Persisted>(key: &str, raw: &str) -> Result<T> {
    let value: Value = serde_json::from_str(raw).map_err(|e| Error::storage(key, format!("malformed JSON: {}", e)))?;

    let data = if is_envelope(&value) {
        let envelope: StoredEnvelope =
            serde_json::from_value(value).map_err(|e| Error::storage(key, format!("bad envelope: {}", e)))?;
        if envelope.version > SCHEMA_VERSION {
            return Err(Error::storage(
                key,
                format!("schema version {} is newer than {}", envelope.version, SCHEMA_VERSION),
            ));
        }
        envelope.data
    } else {
        log::info!("Migrating unversioned value stored under '{}'", key);
        value
    };

    let decoded: T = serde_json::from_value(data).map_err(|e| Error::storage(key, e.to_string()))?;
    decoded.validate().map_err(|e| Error::storage(key, e.to_string()))?;
    Ok(decoded)
}

/// Read and validate the stored value, `None` if nothing was ever saved
pub fn load<T: Persisted, S: KeyValueStore + ?Sized>(store: &S) -> Result<Option<T>> {
    let key = T::storage_key();
    match store.get(key)? {
        Some(raw) => decode(key, &raw).map(Some),
        None => Ok(None),
    }
}

/// Like [`load`], but any absence or failure yields `T::default()`
pub fn load_or_default<T: Persisted, S: KeyValueStore + ?Sized>(store: &S) -> T {
    match load(store) {
        Ok(Some(value)) => value,
        Ok(None) => T::default(),
        Err(e) => {
            log::warn!("{}; falling back to defaults", e);
            T::default()
        }
    }
}

/// Like [`load_or_default`], and writes the default back when the key was absent
pub fn load_or_init<T: Persisted, S: KeyValueStore + ?Sized>(store: &S) -> T {
    match load(store) {
        Ok(Some(value)) => value,
        Ok(None) => {
            let value = T::default();
            if let Err(e) = save(store, &value) {
                log::warn!("{}; defaults not written", e);
            }
            value
        }
        Err(e) => {
            log::warn!("{}; falling back to defaults", e);
            T::default()
        }
    }
}

pub fn save<T: Persisted, S: KeyValueStore + ?Sized>(store: &S, value: &T) -> Result<()> {
    let key = T::storage_key();
    let json = serde_json::to_string(&Envelope {
        version: SCHEMA_VERSION,
        data: value,
    })?;
    store.set(key, &json)?;
    log::debug!("Saved '{}' ({} bytes)", key, json.len());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct Counter {
        count: u32,
    }

    impl Default for Counter {
        fn default() -> Self {
            Counter { count: 7 }
        }
    }

    impl Persisted for Counter {
        fn storage_key() -> &'static str {
            "counter"
        }

        fn validate(&self) -> Result<()> {
            if self.count > 100 {
                return Err(Error::validation("count", "must be at most 100"));
            }
            Ok(())
        }
    }

    #[test]
    fn test_missing_key_is_none() {
        let store = MemoryStore::new();
        assert_eq!(load::<Counter, _>(&store).unwrap(), None);
        assert_eq!(load_or_default::<Counter, _>(&store), Counter::default());
    }

    #[test]
    fn test_save_then_load() {
        let store = MemoryStore::new();
        save(&store, &Counter { count: 3 }).unwrap();

        let raw = store.get("counter").unwrap().unwrap();
        assert_eq!(raw, r#"{"version":1,"data":{"count":3}}"#);
        assert_eq!(load::<Counter, _>(&store).unwrap(), Some(Counter { count: 3 }));
    }

    #[test]
    fn test_init_writes_defaults_once() {
        let store = MemoryStore::new();
        assert_eq!(load_or_init::<Counter, _>(&store), Counter::default());
        assert_eq!(load::<Counter, _>(&store).unwrap(), Some(Counter::default()));

        save(&store, &Counter { count: 9 }).unwrap();
        assert_eq!(load_or_init::<Counter, _>(&store), Counter { count: 9 });
    }

    #[test]
    fn test_init_leaves_corrupt_value_alone() {
        let store = MemoryStore::with_items([("counter", "{not json")]);
        assert_eq!(load_or_init::<Counter, _>(&store), Counter::default());
        assert_eq!(store.get("counter").unwrap().as_deref(), Some("{not json"));
    }

    #[test]
    fn test_legacy_unversioned_value_is_migrated() {
        let store = MemoryStore::with_items([("counter", r#"{"count": 42}"#)]);
        assert_eq!(load::<Counter, _>(&store).unwrap(), Some(Counter { count: 42 }));
    }

    #[test]
    fn test_corrupt_json_falls_back() {
        let store = MemoryStore::with_items([("counter", "{not json")]);
        assert!(matches!(load::<Counter, _>(&store), Err(Error::Storage { .. })));
        assert_eq!(load_or_default::<Counter, _>(&store), Counter::default());
    }

    #[test]
    fn test_wrong_shape_falls_back() {
        let store = MemoryStore::with_items([("counter", r#"{"count": "many"}"#)]);
        assert!(load::<Counter, _>(&store).is_err());
        assert_eq!(load_or_default::<Counter, _>(&store), Counter::default());
    }

    #[test]
    fn test_newer_schema_is_rejected() {
        let store = MemoryStore::with_items([("counter", r#"{"version": 9, "data": {"count": 1}}"#)]);
        let err = load::<Counter, _>(&store).unwrap_err();
        assert!(err.to_string().contains("newer"));
    }

    #[test]
    fn test_invalid_value_is_rejected() {
        let store = MemoryStore::with_items([("counter", r#"{"version": 1, "data": {"count": 500}}"#)]);
        assert!(load::<Counter, _>(&store).is_err());
        assert_eq!(load_or_default::<Counter, _>(&store), Counter::default());
    }
}
