use crate::alias::{Alias, AliasScheme};
use async_trait::async_trait;

type Result<T> = std::result::Result<T, crate::error::ShortenerError>;

#[async_trait]
pub trait Shortener: Send + Sync + 'static {
    /// Returns the alias for `url`, creating the mapping on first use.
    ///
    /// Re-submitting a URL returns the existing alias without writing.
    async fn minify(&self, url: &str, scheme: AliasScheme) -> Result<Alias>;

    /// Resolves an alias back to its original URL.
    /// Returns `None` if no mapping exists for the alias's fragment.
    async fn expand(&self, alias: &str) -> Result<Option<String>>;
}
