//! Storage layer for the budget tracker
//!
//! A flat key-value store (files on disk, or memory in tests) plus the codec
//! that maps the budget onto its three keys.

pub mod file_io;
pub mod file_store;
pub mod kv;
pub mod persistence;

pub use file_io::{write_atomic, write_json_atomic};
pub use file_store::FileStore;
pub use kv::{KeyValueStore, MemoryStore};
pub use persistence::{CATEGORIES_KEY, CURRENCY_KEY, INCOME_KEY};
