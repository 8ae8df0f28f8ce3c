use crate::error::{CoreError, Result};
use crate::fragment::Fragment;
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use url::Url;

/// Which of the two alias templates to use when minifying.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AliasScheme {
    /// `http://{host}/{fragment}`
    #[default]
    Insecure,
    /// `https://www.{host}/{fragment}`
    Secure,
}

impl AliasScheme {
    pub fn from_secure_flag(use_secure: bool) -> Self {
        if use_secure {
            Self::Secure
        } else {
            Self::Insecure
        }
    }

    /// The alias prefix for `host`, up to and including the final `/`.
    pub fn prefix(&self, host: &str) -> String {
        match self {
            AliasScheme::Insecure => format!("http://{}/", host),
            AliasScheme::Secure => format!("https://www.{}/", host),
        }
    }

    /// Formats the full alias for `fragment` under `host`.
    pub fn format(&self, host: &str, fragment: &Fragment) -> Alias {
        Alias(format!("{}{}", self.prefix(host), fragment))
    }
}

/// A fully formed short URL, e.g. `http://url.mini/aZ3kP9qx`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Alias(String);

impl Alias {
    /// Wraps an alias read back from a store.
    pub fn new_unchecked(alias: impl Into<String>) -> Self {
        Self(alias.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl Display for Alias {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Validates `input` as an absolute URL and returns its canonical form.
///
/// The canonical form is the WHATWG serialization, except that a bare root
/// path without query or fragment drops its trailing `/`:
/// `HTTPS://WWW.Google.com/` becomes `https://www.google.com`.
pub fn canonicalize_url(input: &str) -> Result<String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(CoreError::InvalidUrl("url cannot be empty".to_string()));
    }

    let parsed = Url::parse(trimmed)
        .map_err(|e| CoreError::InvalidUrl(format!("'{}': {}", trimmed, e)))?;

    if parsed.cannot_be_a_base() {
        return Err(CoreError::InvalidUrl(format!(
            "'{}' is not a hierarchical url",
            trimmed
        )));
    }
    match parsed.host_str() {
        Some(host) if !host.is_empty() => {}
        _ => {
            return Err(CoreError::InvalidUrl(format!(
                "'{}' has no host",
                trimmed
            )))
        }
    }

    let bare_root =
        parsed.path() == "/" && parsed.query().is_none() && parsed.fragment().is_none();
    let mut canonical = String::from(parsed);
    if bare_root {
        canonical.pop();
    }

    Ok(canonical)
}

/// Extracts the last path segment of `alias`, ignoring one trailing `/`.
///
/// The segment is returned as-is; it may still fail [`Fragment::new`].
pub fn last_segment(alias: &str) -> Result<String> {
    let trimmed = alias.trim();
    if trimmed.is_empty() {
        return Err(CoreError::InvalidAlias("alias cannot be empty".to_string()));
    }

    let parsed = Url::parse(trimmed)
        .map_err(|e| CoreError::InvalidAlias(format!("'{}': {}", trimmed, e)))?;
    if parsed.cannot_be_a_base() {
        return Err(CoreError::InvalidAlias(format!(
            "'{}' is not a hierarchical url",
            trimmed
        )));
    }

    let path = parsed.path();
    let path = path.strip_suffix('/').unwrap_or(path);
    let segment = path.rsplit('/').next().unwrap_or_default();

    if segment.is_empty() {
        return Err(CoreError::InvalidAlias(format!(
            "'{}' has no fragment",
            trimmed
        )));
    }

    Ok(segment.to_string())
}
