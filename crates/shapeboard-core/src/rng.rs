//! Random sources used for circle placement.

use std::sync::atomic::{AtomicU32, Ordering};

#[cfg(target_arch = "wasm32")]
use web_time::{SystemTime, UNIX_EPOCH};
#[cfg(not(target_arch = "wasm32"))]
use std::time::{SystemTime, UNIX_EPOCH};

/// Source of uniform random numbers.
pub trait RandomSource {
    /// Uniform float in `[0, 1)`.
    fn next_unit(&mut self) -> f64;

    /// Uniform float in `[lo, hi)`.
    fn in_range(&mut self, lo: f64, hi: f64) -> f64 {
        lo + self.next_unit() * (hi - lo)
    }
}

/// Seeded random number generator (xorshift32).
#[derive(Debug, Clone)]
pub struct SeededRng {
    state: u32,
}

impl SeededRng {
    pub fn new(seed: u32) -> Self {
        Self { state: seed.max(1) }
    }

    /// Create a generator seeded from the clock and a process-wide counter,
    /// so two boards created in the same instant still diverge.
    pub fn from_entropy() -> Self {
        Self::new(generate_seed())
    }

    pub fn next_u32(&mut self) -> u32 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 17;
        x ^= x << 5;
        self.state = x;
        x
    }
}

impl Default for SeededRng {
    fn default() -> Self {
        Self::from_entropy()
    }
}

impl RandomSource for SeededRng {
    fn next_unit(&mut self) -> f64 {
        self.next_u32() as f64 / (u32::MAX as f64 + 1.0)
    }
}

/// Replays a fixed sequence of unit values, cycling when exhausted.
///
/// Values are clamped into `[0, 1)`.
#[derive(Debug, Clone)]
pub struct SequenceRng {
    values: Vec<f64>,
    cursor: usize,
}

impl SequenceRng {
    pub fn new(values: Vec<f64>) -> Self {
        Self { values, cursor: 0 }
    }
}

impl RandomSource for SequenceRng {
    fn next_unit(&mut self) -> f64 {
        if self.values.is_empty() {
            return 0.0;
        }
        let value = self.values[self.cursor % self.values.len()];
        self.cursor += 1;
        value.clamp(0.0, 1.0 - f64::EPSILON)
    }
}

/// Mix a process counter with the wall clock (splitmix32-style finaliser).
fn generate_seed() -> u32 {
    static SEED_COUNTER: AtomicU32 = AtomicU32::new(1);

    let counter = SEED_COUNTER.fetch_add(1, Ordering::Relaxed);
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or(0);

    let mut x = counter.wrapping_mul(0x9E3779B9) ^ nanos;
    x ^= x >> 16;
    x = x.wrapping_mul(0x85EBCA6B);
    x ^= x >> 13;
    x = x.wrapping_mul(0xC2B2AE35);
    x ^= x >> 16;
    x
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_range() {
        let mut rng = SeededRng::new(42);
        for _ in 0..1000 {
            let v = rng.next_unit();
            assert!((0.0..1.0).contains(&v));
        }
    }

    #[test]
    fn test_in_range() {
        let mut rng = SeededRng::new(7);
        for _ in 0..1000 {
            let v = rng.in_range(20.0, 80.0);
            assert!((20.0..80.0).contains(&v));
        }
    }

    #[test]
    fn test_same_seed_same_sequence() {
        let mut a = SeededRng::new(1234);
        let mut b = SeededRng::new(1234);
        for _ in 0..10 {
            assert_eq!(a.next_u32(), b.next_u32());
        }
    }

    #[test]
    fn test_zero_seed_does_not_stall() {
        let mut rng = SeededRng::new(0);
        assert_ne!(rng.next_u32(), 0);
    }

    #[test]
    fn test_sequence_cycles() {
        let mut rng = SequenceRng::new(vec![0.25, 0.5]);
        assert!((rng.next_unit() - 0.25).abs() < f64::EPSILON);
        assert!((rng.next_unit() - 0.5).abs() < f64::EPSILON);
        assert!((rng.next_unit() - 0.25).abs() < f64::EPSILON);
    }
}
