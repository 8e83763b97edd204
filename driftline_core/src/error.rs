// Copyright 2025 the Driftline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Configuration errors.

/// A [`GraphConfig`](crate::GraphConfig) that cannot produce a usable graph.
#[derive(Clone, Copy, Debug, PartialEq, thiserror::Error)]
pub enum ConfigError {
    /// The target height is zero, negative or not finite.
    #[error("graph height must be a positive finite number of pixels, got {0}")]
    InvalidHeight(f64),
    /// The hover hit radius is negative or not finite.
    #[error("hover hit radius must be a non-negative finite number of pixels, got {0}")]
    InvalidHitRadius(f64),
}
