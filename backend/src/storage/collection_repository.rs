use anyhow::Result;
use log::{info, warn};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::storage::traits::Connection;

/// Why a stored collection could not be used. Never surfaced to callers of
/// [`CollectionRepository::load`]; it only decides what gets logged before the
/// default is substituted.
#[derive(Debug, thiserror::Error)]
pub enum StorageReadError {
    #[error("could not read '{key}': {message}")]
    Unreadable { key: String, message: String },
    #[error("stored value for '{key}' is not a valid collection")]
    Malformed {
        key: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Loads and saves whole collections as JSON arrays through a [`Connection`]
#[derive(Debug, Clone)]
pub struct CollectionRepository<C: Connection> {
    connection: C,
}

impl<C: Connection> CollectionRepository<C> {
    pub fn new(connection: C) -> Self {
        Self { connection }
    }

    pub fn connection(&self) -> &C {
        &self.connection
    }

    /// Load the collection stored under `key`.
    ///
    /// Falls back to `default` when nothing is stored or the stored value
    /// can't be read or parsed.
    pub fn load<T, F>(&self, key: &str, default: F) -> Vec<T>
    where
        T: DeserializeOwned,
        F: FnOnce() -> Vec<T>,
    {
        match self.try_load(key) {
            Ok(Some(items)) => {
                info!("Loaded {} item(s) from '{}'", items.len(), key);
                items
            }
            Ok(None) => {
                info!("Nothing stored under '{}', starting from defaults", key);
                default()
            }
            Err(e) => {
                warn!("{}. Falling back to defaults.", e);
                default()
            }
        }
    }

    /// Like [`load`](Self::load) but reports why a stored value was rejected
    pub fn try_load<T: DeserializeOwned>(&self, key: &str) -> Result<Option<Vec<T>>, StorageReadError> {
        let raw = self
            .connection
            .read(key)
            .map_err(|e| StorageReadError::Unreadable {
                key: key.to_string(),
                message: format!("{:#}", e),
            })?;

        match raw {
            None => Ok(None),
            Some(raw) => serde_json::from_str(&raw)
                .map(Some)
                .map_err(|source| StorageReadError::Malformed {
                    key: key.to_string(),
                    source,
                }),
        }
    }

    /// Replace the collection stored under `key` with `items`
    pub fn save<T: Serialize>(&self, key: &str, items: &[T]) -> Result<()> {
        let contents = serde_json::to_string(items)?;
        self.connection.write(key, &contents)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryConnection;
    use crate::test_utils::TestEnvironment;
    use serde::Deserialize;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct Item {
        id: String,
        amount: i64,
    }

    fn items() -> Vec<Item> {
        vec![
            Item { id: "a".to_string(), amount: 10 },
            Item { id: "b".to_string(), amount: 20 },
        ]
    }

    #[test]
    fn test_load_absent_key_uses_default() {
        let repository = CollectionRepository::new(MemoryConnection::new());
        let loaded: Vec<Item> = repository.load("items", items);
        assert_eq!(loaded, items());
    }

    #[test]
    fn test_load_malformed_value_uses_default() {
        let connection = MemoryConnection::with_entries([("items", "[{\"id\": ")]);
        let repository = CollectionRepository::new(connection);

        let loaded: Vec<Item> = repository.load("items", items);
        assert_eq!(loaded, items());
    }

    #[test]
    fn test_load_wrong_shape_uses_default() {
        let connection = MemoryConnection::with_entries([("items", "{\"id\": \"a\"}")]);
        let repository = CollectionRepository::new(connection);

        let loaded: Vec<Item> = repository.load("items", Vec::new);
        assert!(loaded.is_empty());
    }

    #[test]
    fn test_save_then_load() {
        let repository = CollectionRepository::new(MemoryConnection::new());
        repository.save("items", &items()).unwrap();

        let loaded: Vec<Item> = repository.load("items", Vec::new);
        assert_eq!(loaded, items());
    }

    #[test]
    fn test_save_of_loaded_data_is_a_fixed_point() {
        let env = TestEnvironment::new().unwrap();
        let repository = CollectionRepository::new(env.connection.clone());
        repository.save("items", &items()).unwrap();
        let before = env.connection.read("items").unwrap();

        let loaded: Vec<Item> = repository.load("items", Vec::new);
        repository.save("items", &loaded).unwrap();

        assert_eq!(env.connection.read("items").unwrap(), before);
    }

    #[test]
    fn test_save_empty_collection_is_not_absent() {
        let repository = CollectionRepository::new(MemoryConnection::new());
        repository.save::<Item>("items", &[]).unwrap();

        let loaded: Vec<Item> = repository.load("items", items);
        assert!(loaded.is_empty());
    }
}
