use async_trait::async_trait;
use jiff::Timestamp;
use std::sync::Arc;
use tracing::{debug, info, trace, warn};
use urlmini_core::{
    canonicalize_url, last_segment, Alias, AliasScheme, Fragment, InsertOutcome, MappingStore,
    Shortener, ShortenerError, ShortenerSettings, UrlMapping,
};
use urlmini_generator::{FragmentSource, Generator};

/// Outcome of a single insert attempt.
enum Attempt {
    Inserted(Alias),
    Collision,
    /// A concurrent minify of the same URL got there first.
    Deduplicated(Alias),
}

/// A concrete implementation of the `Shortener` trait.
///
/// This service wraps a `MappingStore` and a `FragmentSource` to handle:
/// - URL validation and canonicalization
/// - Deduplication of already minified URLs
/// - Fragment collision retry, bounded by `max_attempts`
///
/// The store arbitrates uniqueness; a rejected insert is an expected outcome
/// and is retried with a fresh fragment. Store failures are never retried.
#[derive(Debug, Clone)]
pub struct UrlShortener<S, F> {
    store: Arc<S>,
    fragments: Arc<F>,
    settings: ShortenerSettings,
}

impl<S: MappingStore, F: FragmentSource> UrlShortener<S, F> {
    pub fn new(store: S, fragments: F, settings: ShortenerSettings) -> Self {
        Self {
            store: Arc::new(store),
            fragments: Arc::new(fragments),
            settings,
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn settings(&self) -> &ShortenerSettings {
        &self.settings
    }

    async fn attempt(
        &self,
        url: &str,
        scheme: AliasScheme,
        generator: &mut F::Generator,
    ) -> Result<Attempt, ShortenerError> {
        let fragment = generator.generate();
        let alias = scheme.format(&self.settings.host, &fragment);
        let mapping = UrlMapping {
            original_url: url.to_string(),
            fragment,
            alias,
            created_at: Timestamp::now(),
            created_by: self.settings.created_by.clone(),
        };

        let attempt = match self.store.insert(&mapping).await? {
            InsertOutcome::Inserted => Attempt::Inserted(mapping.alias),
            InsertOutcome::FragmentTaken => {
                debug!(fragment = %mapping.fragment, "fragment already taken");
                Attempt::Collision
            }
            InsertOutcome::UrlTaken { alias } => Attempt::Deduplicated(alias),
        };
        Ok(attempt)
    }
}

#[async_trait]
impl<S: MappingStore, F: FragmentSource> Shortener for UrlShortener<S, F> {
    async fn minify(&self, url: &str, scheme: AliasScheme) -> Result<Alias, ShortenerError> {
        let url = canonicalize_url(url)?;

        if let Some(alias) = self.store.find_alias_by_url(&url).await? {
            debug!(url = %url, alias = %alias, "url already minified");
            return Ok(alias);
        }

        // Owned by this call only; concurrent calls draw from their own sources.
        let mut generator = self.fragments.generator();

        for attempt in 1..=self.settings.max_attempts {
            match self.attempt(&url, scheme, &mut generator).await? {
                Attempt::Inserted(alias) => {
                    info!(url = %url, alias = %alias, attempt, "minified url");
                    return Ok(alias);
                }
                Attempt::Deduplicated(alias) => {
                    debug!(url = %url, alias = %alias, "url minified concurrently");
                    return Ok(alias);
                }
                Attempt::Collision => {}
            }
        }

        warn!(
            url = %url,
            attempts = self.settings.max_attempts,
            "no unique fragment within the attempt bound"
        );
        Err(ShortenerError::GenerationExhausted {
            attempts: self.settings.max_attempts,
        })
    }

    async fn expand(&self, alias: &str) -> Result<Option<String>, ShortenerError> {
        let segment = last_segment(alias)?;

        // Only well-formed fragments are ever stored.
        let Ok(fragment) = Fragment::new(segment) else {
            trace!(alias = %alias, "alias segment is not a fragment");
            return Ok(None);
        };

        let url = self.store.find_url_by_fragment(&fragment).await?;
        match &url {
            Some(url) => trace!(fragment = %fragment, url = %url, "expanded alias"),
            None => trace!(fragment = %fragment, "fragment not found"),
        }
        Ok(url)
    }
}
