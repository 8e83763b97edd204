// Copyright 2025 the Driftline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Wholesale value regeneration for the "Refresh Data" action.

extern crate alloc;

use alloc::vec::Vec;
use core::ops::Range;

use crate::sample::Sample;

/// Range for regenerated primary values (integers, half-open).
pub const PRIMARY_RANGE: Range<u32> = 20..120;
/// Range for regenerated secondary values (integers, half-open).
pub const SECONDARY_RANGE: Range<u32> = 10..90;

/// A source of pseudo-random integers.
pub trait ValueSource {
    /// Returns a value in the half-open `range`.
    ///
    /// An empty range returns `range.start`.
    fn next_in(&mut self, range: Range<u32>) -> u32;
}

/// A small xorshift generator.
///
/// Good enough for decorative data; not suitable for anything security related.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Xorshift32 {
    state: u32,
}

impl Xorshift32 {
    /// Creates a generator from `seed`.
    ///
    /// The seed is mixed so that small or zero seeds still produce a usable state.
    pub fn new(seed: u32) -> Self {
        let mixed = seed.wrapping_mul(0x9E37_79B9).wrapping_add(0x7F4A_7C15);
        Self {
            state: if mixed == 0 { 0x2545_F491 } else { mixed },
        }
    }

    /// Advances the generator.
    pub fn next_u32(&mut self) -> u32 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 17;
        x ^= x << 5;
        self.state = x;
        x
    }
}

impl Default for Xorshift32 {
    fn default() -> Self {
        Self::new(0x00C0_FFEE)
    }
}

impl ValueSource for Xorshift32 {
    fn next_in(&mut self, range: Range<u32>) -> u32 {
        let span = range.end.saturating_sub(range.start);
        if span == 0 {
            return range.start;
        }
        range.start + self.next_u32() % span
    }
}

/// Returns `samples` with every value regenerated.
///
/// Labels and order are preserved. Every sample receives a fresh primary value in
/// [`PRIMARY_RANGE`] and a fresh secondary value in [`SECONDARY_RANGE`], including samples that
/// had no secondary value before.
pub fn randomize(samples: &[Sample], source: &mut impl ValueSource) -> Vec<Sample> {
    samples
        .iter()
        .map(|s| Sample {
            label: s.label.clone(),
            primary: f64::from(source.next_in(PRIMARY_RANGE)),
            secondary: Some(f64::from(source.next_in(SECONDARY_RANGE))),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::vec;

    use super::*;
    use crate::sample::default_samples;

    #[test]
    fn values_stay_in_declared_ranges_and_labels_survive() {
        let samples = default_samples();
        let mut rng = Xorshift32::new(7);
        let out = randomize(&samples, &mut rng);
        assert_eq!(out.len(), samples.len());
        for (before, after) in samples.iter().zip(&out) {
            assert_eq!(before.label, after.label);
            assert!((20.0..120.0).contains(&after.primary), "{after:?}");
            let secondary = after.secondary.expect("secondary is always regenerated");
            assert!((10.0..90.0).contains(&secondary), "{after:?}");
        }
    }

    #[test]
    fn successive_calls_differ() {
        let samples = default_samples();
        let mut rng = Xorshift32::default();
        let a = randomize(&samples, &mut rng);
        let b = randomize(&samples, &mut rng);
        assert_ne!(a, b);
    }

    #[test]
    fn missing_secondary_is_filled() {
        let samples = vec![Sample::new("x", 1.0), Sample::new("y", 2.0)];
        let out = randomize(&samples, &mut Xorshift32::new(1));
        assert!(out.iter().all(|s| s.secondary.is_some()));
    }

    #[test]
    fn zero_seed_still_advances() {
        let mut rng = Xorshift32::new(0);
        let first = rng.next_u32();
        assert_ne!(first, 0);
        assert_ne!(first, rng.next_u32());
    }

    #[test]
    fn empty_range_returns_start() {
        let mut rng = Xorshift32::new(3);
        assert_eq!(rng.next_in(5..5), 5);
    }
}
