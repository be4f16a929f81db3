//! Priority sources for balanced insertion.
//!
//! Balanced insertion gives every newly stored word a random weight. Weights
//! must never repeat within a trie, so a source remembers what it has issued.

use std::collections::HashSet;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Default exclusive upper bound for drawn priorities.
pub const DEFAULT_UPPER_BOUND: u64 = u32::MAX as u64;

/// Produces balancing priorities.
pub trait PrioritySource {
    /// A positive value this source has never returned before.
    fn next_priority(&mut self) -> u64;
}

/// Random priorities in `1..upper_bound`, never repeating.
///
/// The bound doubles once every value below it has been issued.
#[derive(Debug, Clone)]
pub struct UniquePriorities<R = StdRng> {
    rng: R,
    issued: HashSet<u64>,
    upper_bound: u64,
}

impl UniquePriorities<StdRng> {
    /// Seeded from OS entropy.
    pub fn new() -> Self {
        Self::from_rng(StdRng::from_entropy())
    }

    /// Deterministic sequence for a given seed.
    pub fn seeded(seed: u64) -> Self {
        Self::from_rng(StdRng::seed_from_u64(seed))
    }
}

impl Default for UniquePriorities<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> UniquePriorities<R> {
    pub fn from_rng(rng: R) -> Self {
        Self {
            rng,
            issued: HashSet::new(),
            upper_bound: DEFAULT_UPPER_BOUND,
        }
    }

    /// Restrict draws to `1..upper_bound` (clamped to at least `2`).
    pub fn with_upper_bound(mut self, upper_bound: u64) -> Self {
        self.upper_bound = upper_bound.max(2);
        self
    }

    /// Number of priorities issued so far.
    pub fn issued(&self) -> usize {
        self.issued.len()
    }

    pub fn upper_bound(&self) -> u64 {
        self.upper_bound
    }
}

impl<R: Rng> PrioritySource for UniquePriorities<R> {
    fn next_priority(&mut self) -> u64 {
        if self.issued.len() as u64 >= self.upper_bound - 1 {
            self.upper_bound = self.upper_bound.saturating_mul(2);
            log::debug!("priority range exhausted, widening to {}", self.upper_bound);
        }
        loop {
            let candidate = self.rng.gen_range(1..self.upper_bound);
            if self.issued.insert(candidate) {
                return candidate;
            }
        }
    }
}
