use crate::alias::Alias;
use crate::error::StorageError;
use crate::fragment::Fragment;
use async_trait::async_trait;
use jiff::Timestamp;
use serde::{Deserialize, Serialize};

pub type Result<T> = std::result::Result<T, StorageError>;

/// Audit identity used when no caller identity is configured.
pub const SYSTEM_IDENTITY: &str = "system";

/// A persisted mapping between an original URL and its alias.
///
/// Created once on the first successful minify of a URL and never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UrlMapping {
    /// Canonical form of the URL that was minified.
    pub original_url: String,
    pub fragment: Fragment,
    pub alias: Alias,
    pub created_at: Timestamp,
    pub created_by: String,
}

/// Result of an atomic insert attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InsertOutcome {
    /// The mapping was stored.
    Inserted,
    /// Another mapping already owns this fragment. Nothing was written.
    FragmentTaken,
    /// The original URL is already mapped. Nothing was written.
    UrlTaken { alias: Alias },
}

/// Storage contract consumed by the shortener.
///
/// Implementations are the source of truth for uniqueness: `insert` must be
/// atomic and must never overwrite an existing fragment or URL.
#[async_trait]
pub trait MappingStore: Send + Sync + 'static {
    /// Exact-match lookup of the alias for a canonical original URL.
    async fn find_alias_by_url(&self, url: &str) -> Result<Option<Alias>>;

    /// Creates the mapping if neither its fragment nor its URL is taken.
    async fn insert(&self, mapping: &UrlMapping) -> Result<InsertOutcome>;

    /// Exact-match lookup of the original URL for a fragment.
    async fn find_url_by_fragment(&self, fragment: &Fragment) -> Result<Option<String>>;
}
