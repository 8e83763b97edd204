// Copyright 2025 the Driftline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Z-order conventions for graph marks.
//!
//! Renderers should sort by `(z_index, MarkId)` for a deterministic tie-break.

/// Panel background behind everything.
pub const PANEL_BACKGROUND: i32 = -100;
/// Horizontal grid lines.
pub const GRID_LINES: i32 = -50;

/// Area fills under the strokes.
pub const SERIES_FILL: i32 = 0;
/// Secondary stroke, drawn under the primary stroke.
pub const SECONDARY_STROKE: i32 = 5;
/// Primary stroke.
pub const PRIMARY_STROKE: i32 = 10;
/// Secondary point markers.
pub const SECONDARY_POINTS: i32 = 15;
/// Primary point markers.
pub const PRIMARY_POINTS: i32 = 20;

/// X labels under the plot.
pub const AXIS_LABELS: i32 = 40;
/// Legend swatches.
pub const LEGEND_SWATCHES: i32 = 60;
/// Legend labels.
pub const LEGEND_LABELS: i32 = 70;
/// Title, subtitle and the refresh button.
pub const TITLES: i32 = 80;

/// Hover callout box.
pub const TOOLTIP: i32 = 100;
/// Hover callout text.
pub const TOOLTIP_TEXT: i32 = 110;
