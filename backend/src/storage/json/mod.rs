//! File-backed storage: each key lives in `<data directory>/<key>.json`.

pub mod connection;

pub use connection::JsonConnection;
