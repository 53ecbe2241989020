//! # Storage Traits
//!
//! The abstraction that lets the ledger stores run against files on disk or an
//! in-memory map without modification.

use anyhow::Result;

/// Key under which the transaction collection is persisted
pub const TRANSACTIONS_KEY: &str = "transactions";

/// Key under which the category collection is persisted
pub const CATEGORIES_KEY: &str = "categories";

/// A synchronous key-value store holding one serialized collection per key.
///
/// Clones must refer to the same underlying store, so that the transaction and
/// category services can each hold their own handle.
pub trait Connection: Clone {
    /// Read the raw value stored under `key`, or `None` if nothing was stored
    fn read(&self, key: &str) -> Result<Option<String>>;

    /// Replace the value stored under `key`.
    ///
    /// The write must be complete before this returns: a later `read` sees
    /// either the old value or the new one, never a mix.
    fn write(&self, key: &str, contents: &str) -> Result<()>;
}
