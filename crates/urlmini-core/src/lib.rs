//! Core types and traits for the urlmini URL shortener.
//!
//! This crate provides the fragment and alias types, the storage contract
//! and the shortener trait shared by the shortener service, the storage
//! backends and the HTTP gateway.

pub mod alias;
pub mod error;
pub mod fragment;
pub mod settings;
pub mod shortener;
pub mod store;

pub use alias::{canonicalize_url, last_segment, Alias, AliasScheme};
pub use error::{CoreError, ShortenerError, StorageError};
pub use fragment::{Fragment, ALPHABET, FRAGMENT_LENGTH};
pub use settings::ShortenerSettings;
pub use shortener::Shortener;
pub use store::{InsertOutcome, MappingStore, UrlMapping};
