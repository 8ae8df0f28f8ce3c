use crate::{FragmentSource, Generator};
use jiff::Timestamp;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::atomic::{AtomicU64, Ordering};
use urlmini_core::{Fragment, ALPHABET, FRAGMENT_LENGTH};

/// Hands out distinct seeds to concurrent execution contexts.
///
/// The sequence starts at a time-based value and increments atomically, so
/// two contexts in the same process never receive the same seed.
#[derive(Debug)]
pub struct SeedSequence {
    next: AtomicU64,
}

impl SeedSequence {
    /// Creates a sequence based on the current time in nanoseconds.
    pub fn new() -> Self {
        let nanos = Timestamp::now().as_nanosecond();
        // Fold the i128 nanosecond count into 64 bits.
        Self::with_base((nanos ^ (nanos >> 64)) as u64)
    }

    /// Creates a sequence starting at a fixed base. Useful for reproducible runs.
    pub fn with_base(base: u64) -> Self {
        Self {
            next: AtomicU64::new(base),
        }
    }

    /// Returns the next seed.
    pub fn next_seed(&self) -> u64 {
        self.next.fetch_add(1, Ordering::Relaxed)
    }
}

impl Default for SeedSequence {
    fn default() -> Self {
        Self::new()
    }
}

/// Generates fragments by sampling [`ALPHABET`] uniformly with replacement.
#[derive(Debug, Clone)]
pub struct RandomFragmentGenerator {
    rng: StdRng,
}

impl RandomFragmentGenerator {
    /// Creates a generator with its own random source seeded from `seed`.
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Generator for RandomFragmentGenerator {
    fn generate(&mut self) -> Fragment {
        let fragment: String = (0..FRAGMENT_LENGTH)
            .map(|_| ALPHABET[self.rng.random_range(0..ALPHABET.len())] as char)
            .collect();
        Fragment::new_unchecked(fragment)
    }
}

/// The production [`FragmentSource`]: one independently seeded
/// [`RandomFragmentGenerator`] per caller.
#[derive(Debug, Default)]
pub struct RandomFragments {
    seeds: SeedSequence,
}

impl RandomFragments {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_seeds(seeds: SeedSequence) -> Self {
        Self { seeds }
    }
}

impl FragmentSource for RandomFragments {
    type Generator = RandomFragmentGenerator;

    fn generator(&self) -> Self::Generator {
        RandomFragmentGenerator::from_seed(self.seeds.next_seed())
    }
}
