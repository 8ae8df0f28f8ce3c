use crate::{FragmentSource, Generator};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use urlmini_core::{Fragment, ALPHABET, FRAGMENT_LENGTH};

/// A deterministic fragment source using a shared counter.
///
/// This source produces fragments like "aaaaaaaa", "aaaaaaab", etc., by
/// encoding the counter in base62 over [`ALPHABET`]. All generators handed out
/// by one source share the counter, so they never repeat each other until the
/// 62^8 space wraps.
///
/// Intended for tests and reproducible runs; production uses
/// [`RandomFragments`](crate::RandomFragments).
#[derive(Debug, Clone)]
pub struct SequentialFragments {
    counter: Arc<AtomicU64>,
}

impl SequentialFragments {
    pub fn new() -> Self {
        Self::with_offset(0)
    }

    /// Creates a source starting from a specific counter value.
    pub fn with_offset(offset: u64) -> Self {
        Self {
            counter: Arc::new(AtomicU64::new(offset)),
        }
    }
}

impl Default for SequentialFragments {
    fn default() -> Self {
        Self::new()
    }
}

/// Encodes `value` as a fixed-width base62 string, most significant first.
fn encode(mut value: u64) -> String {
    let base = ALPHABET.len() as u64;
    let mut symbols = [ALPHABET[0]; FRAGMENT_LENGTH];
    for slot in symbols.iter_mut().rev() {
        *slot = ALPHABET[(value % base) as usize];
        value /= base;
    }
    symbols.iter().map(|&b| b as char).collect()
}

impl Generator for SequentialFragments {
    fn generate(&mut self) -> Fragment {
        let count = self.counter.fetch_add(1, Ordering::SeqCst);
        Fragment::new_unchecked(encode(count))
    }
}

impl FragmentSource for SequentialFragments {
    type Generator = SequentialFragments;

    fn generator(&self) -> Self::Generator {
        self.clone()
    }
}
