use crate::error::{CoreError, Result};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt::Display;

/// Number of symbols in every fragment.
pub const FRAGMENT_LENGTH: usize = 8;

/// The 62 symbols a fragment is drawn from.
pub const ALPHABET: &[u8; 62] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// The random token identifying one mapping, e.g. `aZ3kP9qx`.
///
/// Fragments are exactly [`FRAGMENT_LENGTH`] characters from [`ALPHABET`] and
/// compare case-sensitively.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Fragment(String);

impl Fragment {
    /// Creates a new `Fragment` after validating the input.
    pub fn new(fragment: impl Into<String>) -> Result<Self> {
        let fragment = fragment.into();
        Self::validate(&fragment)?;
        Ok(Self(fragment))
    }

    /// Creates a `Fragment` without validation.
    ///
    /// Use this only for values produced by trusted internal sources
    /// (e.g. generators that sample from [`ALPHABET`]).
    pub fn new_unchecked(fragment: impl Into<String>) -> Self {
        Self(fragment.into())
    }

    /// Returns the fragment as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns `true` if `candidate` would be accepted by [`Fragment::new`].
    pub fn is_valid(candidate: &str) -> bool {
        Self::validate(candidate).is_ok()
    }

    fn validate(fragment: &str) -> Result<()> {
        if fragment.len() != FRAGMENT_LENGTH {
            return Err(CoreError::InvalidFragment(format!(
                "length must be {}, got {}",
                FRAGMENT_LENGTH,
                fragment.len()
            )));
        }

        if !fragment.bytes().all(|b| b.is_ascii_alphanumeric()) {
            return Err(CoreError::InvalidFragment(format!(
                "must contain only ascii letters and digits: '{}'",
                fragment
            )));
        }

        Ok(())
    }
}

impl Display for Fragment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Fragment {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl<'de> Deserialize<'de> for Fragment {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Fragment::new(s).map_err(serde::de::Error::custom)
    }
}
