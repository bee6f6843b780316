//! # Identity Generator
//!
//! Monotonic integer sequence used to mint ids for records created without one.
//! The sequence lives in memory only: every process starts again from zero.

/// Process-local monotonic id sequence.
///
/// Owned by the [`ResourceActor`](crate::framework::ResourceActor), so advancing it needs
/// no synchronisation.
#[derive(Debug, Clone, Default)]
pub struct IdGenerator {
    next_id: u64,
}

impl IdGenerator {
    /// A generator whose first id is `0`.
    pub fn new() -> Self {
        Self::starting_at(0)
    }

    /// A generator whose first id is `first`.
    pub fn starting_at(first: u64) -> Self {
        Self { next_id: first }
    }

    /// Returns the current value and advances the counter by one.
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// The value the next call to [`next`](Self::next) will return.
    pub fn peek(&self) -> u64 {
        self.next_id
    }
}
