// Copyright 2025 the Driftline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Labeled samples and the shared domain maximum.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

/// One of the two numeric channels carried by a [`Sample`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Channel {
    /// The main series.
    Primary,
    /// The optional comparison series.
    Secondary,
}

/// A labeled data point with one or two numeric channels.
///
/// The position of a sample in its sequence defines its x coordinate, so a sample carries no x
/// value of its own. Labels are display-only and need not be unique.
#[derive(Clone, Debug, PartialEq)]
pub struct Sample {
    /// Display label (for example a month name).
    pub label: String,
    /// Primary channel value.
    pub primary: f64,
    /// Secondary channel value, if this sample has one.
    pub secondary: Option<f64>,
}

impl Sample {
    /// Creates a sample with only a primary value.
    pub fn new(label: impl Into<String>, primary: f64) -> Self {
        Self {
            label: label.into(),
            primary,
            secondary: None,
        }
    }

    /// Sets the secondary value.
    pub fn with_secondary(mut self, secondary: f64) -> Self {
        self.secondary = Some(secondary);
        self
    }

    /// Returns the value of `channel`, if present.
    ///
    /// A non-finite value counts as missing.
    pub fn value(&self, channel: Channel) -> Option<f64> {
        match channel {
            Channel::Primary => Some(self.primary),
            Channel::Secondary => self.secondary,
        }
        .filter(|v| v.is_finite())
    }
}

/// Returns the maximum value over both channels of all samples.
///
/// Both series share this ceiling so they stay visually comparable. A missing or non-finite
/// value counts as `0`. Returns `0.0` for an empty slice, which downstream projection treats as "no
/// signal".
pub fn domain_max(samples: &[Sample]) -> f64 {
    samples
        .iter()
        .map(|s| {
            let primary = s.value(Channel::Primary).unwrap_or(0.0);
            primary.max(s.value(Channel::Secondary).unwrap_or(0.0))
        })
        .fold(0.0, f64::max)
}

/// The twelve-month dataset shown when no samples are configured.
pub fn default_samples() -> Vec<Sample> {
    const MONTHS: [(&str, f64, f64); 12] = [
        ("Jan", 32.0, 20.0),
        ("Feb", 56.0, 32.0),
        ("Mar", 42.0, 38.0),
        ("Apr", 78.0, 45.0),
        ("May", 63.0, 58.0),
        ("Jun", 90.0, 66.0),
        ("Jul", 84.0, 70.0),
        ("Aug", 96.0, 80.0),
        ("Sep", 88.0, 74.0),
        ("Oct", 75.0, 62.0),
        ("Nov", 83.0, 58.0),
        ("Dec", 92.0, 76.0),
    ];
    MONTHS
        .iter()
        .map(|&(label, primary, secondary)| Sample::new(label, primary).with_secondary(secondary))
        .collect()
}
