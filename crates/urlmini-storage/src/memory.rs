use async_trait::async_trait;
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use urlmini_core::store::Result;
use urlmini_core::{Alias, Fragment, InsertOutcome, MappingStore, UrlMapping};

/// In-memory implementation of the [`MappingStore`] contract using DashMap.
///
/// Two indexes are kept: fragment → mapping and original URL → alias.
/// `insert` holds the URL entry while it claims the fragment entry, so both
/// uniqueness checks and the write happen atomically. Locks are always taken
/// URL first, then fragment.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    by_fragment: DashMap<String, UrlMapping>,
    by_url: DashMap<String, Alias>,
}

impl InMemoryStore {
    /// Creates a new in-memory store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new in-memory store with the specified capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            by_fragment: DashMap::with_capacity(capacity),
            by_url: DashMap::with_capacity(capacity),
        }
    }

    /// Returns the full mapping stored for `fragment`.
    pub fn get(&self, fragment: &Fragment) -> Option<UrlMapping> {
        self.by_fragment
            .get(fragment.as_str())
            .map(|entry| entry.clone())
    }

    /// Number of stored mappings.
    pub fn len(&self) -> usize {
        self.by_fragment.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_fragment.is_empty()
    }
}

#[async_trait]
impl MappingStore for InMemoryStore {
    async fn find_alias_by_url(&self, url: &str) -> Result<Option<Alias>> {
        Ok(self.by_url.get(url).map(|alias| alias.clone()))
    }

    async fn insert(&self, mapping: &UrlMapping) -> Result<InsertOutcome> {
        let url_slot = match self.by_url.entry(mapping.original_url.clone()) {
            Entry::Occupied(existing) => {
                return Ok(InsertOutcome::UrlTaken {
                    alias: existing.get().clone(),
                })
            }
            Entry::Vacant(slot) => slot,
        };

        match self.by_fragment.entry(mapping.fragment.as_str().to_owned()) {
            Entry::Occupied(_) => Ok(InsertOutcome::FragmentTaken),
            Entry::Vacant(fragment_slot) => {
                fragment_slot.insert(mapping.clone());
                url_slot.insert(mapping.alias.clone());
                Ok(InsertOutcome::Inserted)
            }
        }
    }

    async fn find_url_by_fragment(&self, fragment: &Fragment) -> Result<Option<String>> {
        Ok(self
            .by_fragment
            .get(fragment.as_str())
            .map(|entry| entry.original_url.clone()))
    }
}
