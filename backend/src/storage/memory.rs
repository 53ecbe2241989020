use anyhow::{anyhow, Result};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::storage::traits::Connection;

/// In-memory key-value store. Clones share the same entries.
#[derive(Debug, Clone, Default)]
pub struct MemoryConnection {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryConnection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with raw values, e.g. to simulate data left
    /// behind by an earlier session
    pub fn with_entries<K, V>(entries: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        let entries = entries
            .into_iter()
            .map(|(key, value)| (key.into(), value.into()))
            .collect();
        Self {
            entries: Arc::new(Mutex::new(entries)),
        }
    }
}

impl Connection for MemoryConnection {
    fn read(&self, key: &str) -> Result<Option<String>> {
        let entries = self
            .entries
            .lock()
            .map_err(|_| anyhow!("memory store lock poisoned"))?;
        Ok(entries.get(key).cloned())
    }

    fn write(&self, key: &str, contents: &str) -> Result<()> {
        let mut entries = self
            .entries
            .lock()
            .map_err(|_| anyhow!("memory store lock poisoned"))?;
        entries.insert(key.to_string(), contents.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clones_share_entries() {
        let connection = MemoryConnection::new();
        let other = connection.clone();

        connection.write("transactions", "[]").unwrap();
        assert_eq!(other.read("transactions").unwrap(), Some("[]".to_string()));
    }

    #[test]
    fn test_with_entries() {
        let connection = MemoryConnection::with_entries([("categories", "{not json")]);
        assert_eq!(
            connection.read("categories").unwrap(),
            Some("{not json".to_string())
        );
        assert_eq!(connection.read("transactions").unwrap(), None);
    }
}
