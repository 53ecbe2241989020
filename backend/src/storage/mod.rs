//! # Storage Module
//!
//! Durable key-value persistence for the two ledger collections.
//!
//! Each collection is stored under its own key as a JSON array. The domain
//! layer only talks to [`CollectionRepository`], which works over any
//! [`Connection`] backend:
//!
//! - [`JsonConnection`]: one `<key>.json` file per key inside the data directory
//! - [`MemoryConnection`]: in-process map, used by tests and throwaway ledgers
//!
//! Reads never fail from the caller's point of view: a missing or malformed
//! entry falls back to the supplied default. Writes replace the whole entry.

pub mod traits;
pub mod json;
pub mod memory;
pub mod collection_repository;

pub use traits::*;
pub use json::JsonConnection;
pub use memory::MemoryConnection;
pub use collection_repository::{CollectionRepository, StorageReadError};
