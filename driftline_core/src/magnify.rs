// Copyright 2025 the Driftline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scale factors by distance from the hovered item.

/// Maps the distance between an item and the hovered item to a scale factor.
///
/// The hovered item itself uses `scales[0]`, its neighbours `scales[1]`, and so on. Items
/// further away than the table reaches, and every item while nothing is hovered, use
/// `fallback`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MagnificationTable {
    scales: [f64; 3],
    fallback: f64,
}

impl Default for MagnificationTable {
    fn default() -> Self {
        Self::new([1.5, 1.25, 1.1], 1.0)
    }
}

impl MagnificationTable {
    /// Creates a table from per-distance scales and the fallback scale.
    pub const fn new(scales: [f64; 3], fallback: f64) -> Self {
        Self { scales, fallback }
    }

    /// Scale factor for the item at `index`.
    pub fn scale_for(&self, hovered: Option<usize>, index: usize) -> f64 {
        let Some(h) = hovered else {
            return self.fallback;
        };
        self.scales
            .get(h.abs_diff(index))
            .copied()
            .unwrap_or(self.fallback)
    }
}
