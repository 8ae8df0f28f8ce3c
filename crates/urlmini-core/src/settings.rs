use crate::store::SYSTEM_IDENTITY;
use typed_builder::TypedBuilder;

/// Default host used to format aliases.
pub const DEFAULT_HOST: &str = "url.mini";

/// Default number of insert attempts per minify.
pub const DEFAULT_MAX_ATTEMPTS: u32 = 5;

/// Immutable configuration handed to the shortener at construction.
#[derive(Debug, Clone, PartialEq, Eq, TypedBuilder)]
pub struct ShortenerSettings {
    /// Host the aliases are formatted with, e.g. `bit.ly`.
    #[builder(default = DEFAULT_HOST.to_string(), setter(into))]
    pub host: String,
    /// Upper bound on insert attempts before giving up.
    #[builder(default = DEFAULT_MAX_ATTEMPTS)]
    pub max_attempts: u32,
    /// Audit identity recorded as `created_by`.
    #[builder(default = SYSTEM_IDENTITY.to_string(), setter(into))]
    pub created_by: String,
}

impl Default for ShortenerSettings {
    fn default() -> Self {
        Self::builder().build()
    }
}
