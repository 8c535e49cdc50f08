//! Randomness used by the wheel, dice and magic ball.
//!
//! The tools take a `&mut dyn RandomSource` so tests can force exact
//! outcomes while the front-end uses an OS-seeded [`Roller`].

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Source of uniformly distributed values.
pub trait RandomSource {
    /// A value in `[0.0, 1.0)`.
    fn unit(&mut self) -> f64;

    /// A value in `lo..=hi`.
    fn range_inclusive(&mut self, lo: u32, hi: u32) -> u32;
}

/// Default random source backed by [`StdRng`].
#[derive(Debug)]
pub struct Roller {
    rng: StdRng,
}

impl Roller {
    /// Create a roller seeded from the operating system.
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Create a deterministic roller.
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Seeded when a seed is given, OS-seeded otherwise.
    pub fn from_optional_seed(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => {
                log::debug!("Using fixed RNG seed {}", seed);
                Self::from_seed(seed)
            }
            None => Self::new(),
        }
    }
}

impl Default for Roller {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomSource for Roller {
    fn unit(&mut self) -> f64 {
        self.rng.random::<f64>()
    }

    fn range_inclusive(&mut self, lo: u32, hi: u32) -> u32 {
        self.rng.random_range(lo..=hi)
    }
}

/// Source that replays a fixed sequence, cycling when exhausted.
#[cfg(test)]
pub(crate) struct FixedSource {
    units: Vec<f64>,
    next: usize,
}

#[cfg(test)]
impl FixedSource {
    pub(crate) fn new(units: &[f64]) -> Self {
        Self {
            units: units.to_vec(),
            next: 0,
        }
    }
}

#[cfg(test)]
impl RandomSource for FixedSource {
    fn unit(&mut self) -> f64 {
        let value = self.units[self.next % self.units.len()];
        self.next += 1;
        value
    }

    fn range_inclusive(&mut self, lo: u32, hi: u32) -> u32 {
        let span = f64::from(hi - lo + 1);
        lo + (self.unit() * span) as u32
    }
}
