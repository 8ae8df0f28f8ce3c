//! Storage backends implementing the [`MappingStore`] contract.

pub mod memory;
pub mod mysql;

pub use memory::InMemoryStore;
pub use mysql::{MySqlStore, MySqlStoreSettings, DEFAULT_TABLE_NAME};
pub use urlmini_core::{InsertOutcome, MappingStore, StorageError, UrlMapping};
