pub mod random;
pub mod seq;

pub use random::{RandomFragmentGenerator, RandomFragments, SeedSequence};
pub use seq::SequentialFragments;

use urlmini_core::Fragment;

/// Trait for generating fragments.
///
/// Implementations are pure generators that don't interact with storage;
/// collisions are detected by the store on insert.
///
/// A generator is owned by a single execution context, so it takes `&mut self`
/// and needs no internal locking.
pub trait Generator: Send {
    /// Generates the next fragment.
    fn generate(&mut self) -> Fragment;
}

/// Hands out generators, one per execution context.
///
/// The shortener asks for a fresh generator on every minify call, so
/// concurrent calls never share a random source.
pub trait FragmentSource: Send + Sync + 'static {
    type Generator: Generator;

    /// Creates a generator owned by the caller.
    fn generator(&self) -> Self::Generator;
}
