//! Bag module - 7-bag random piece sequence
//!
//! Produces the upcoming piece sequence using the "7-bag" randomizer: the
//! queue is extended with a freshly shuffled permutation of all seven kinds
//! whenever it runs low, so every 7 consecutive draws past a refill boundary
//! contain each kind exactly once.
//!
//! The RNG is a small seedable LCG so tests can pin the exact sequence.

use std::collections::VecDeque;

use crate::types::{BAG_REFILL_THRESHOLD, PieceKind};

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    pub fn next_range(&mut self, max: u32) -> u32 {
        self.next_u32() % max
    }

    /// Shuffle a slice using Fisher-Yates
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        for i in (1..slice.len()).rev() {
            let j = self.next_range((i + 1) as u32) as usize;
            slice.swap(i, j);
        }
    }
}

/// Queue of pending piece kinds, refilled pre-emptively so peeking the next
/// few entries always succeeds.
#[derive(Debug, Clone)]
pub struct Bag {
    queue: VecDeque<PieceKind>,
    rng: SimpleRng,
}

impl Bag {
    /// Create a bag seeded with one shuffled permutation.
    pub fn new(seed: u32) -> Self {
        let mut bag = Self {
            queue: VecDeque::with_capacity(14),
            rng: SimpleRng::new(seed),
        };
        bag.extend_shuffled();
        bag
    }

    /// Append a freshly shuffled permutation of all seven kinds.
    fn extend_shuffled(&mut self) {
        let mut kinds = PieceKind::ALL;
        self.rng.shuffle(&mut kinds);
        self.queue.extend(kinds);
    }

    /// Remove and return the front kind, then top up if the remainder has
    /// dropped to the refill threshold.
    pub fn pop(&mut self) -> PieceKind {
        let kind = self
            .queue
            .pop_front()
            .unwrap_or_else(|| unreachable!("bag refills before it can empty"));
        self.refill_if_low();
        kind
    }

    fn refill_if_low(&mut self) {
        if self.queue.len() <= BAG_REFILL_THRESHOLD {
            self.extend_shuffled();
        }
    }

    /// Peek the front kind without removing it.
    pub fn peek(&self) -> PieceKind {
        self.queue[0]
    }

    /// Peek the first `count` pending kinds. The refill policy keeps the
    /// queue at least 4 deep, covering the next + preview window.
    pub fn peek_n(&self, count: usize) -> Vec<PieceKind> {
        self.queue.iter().take(count).copied().collect()
    }

    /// Pending queue length (never below the refill threshold + 1).
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}

impl Default for Bag {
    fn default() -> Self {
        Self::new(1)
    }
}
