// Copyright 2025 the Driftline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The hover callout.

extern crate alloc;

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

use kurbo::{Point, Rect};
use peniko::Color;

use crate::sample::{Channel, Sample};

/// Callout width.
pub(crate) const WIDTH: f64 = 90.0;
/// Callout height when the secondary row is shown.
pub(crate) const HEIGHT_TWO_ROWS: f64 = 60.0;
pub(crate) const HEIGHT_ONE_ROW: f64 = 38.0;
/// Corner radius of the callout box.
pub(crate) const CORNER_RADIUS: f64 = 6.0;

/// One line of text in the callout.
#[derive(Clone, Debug, PartialEq)]
pub struct TooltipRow {
    /// Text anchor (centred horizontally).
    pub pos: Point,
    /// Row text.
    pub text: String,
    /// Colour of the series swatch drawn before the text, if this is a value row.
    pub swatch: Option<Color>,
}

/// Callout geometry for a hovered sample.
///
/// The box is centred horizontally on the hovered primary point and sits above it. It is not
/// clamped to the plot, so callouts for the first and last samples overhang the edges.
#[derive(Clone, Debug, PartialEq)]
pub struct Tooltip {
    /// Index of the hovered sample.
    pub index: usize,
    /// Callout box.
    pub rect: Rect,
    /// Label row, then the primary value, then the optional secondary value.
    pub rows: Vec<TooltipRow>,
}

impl Tooltip {
    /// Builds the callout for `sample` anchored at its projected primary `point`.
    ///
    /// The secondary row is present when `secondary` carries the series colour and the sample has
    /// a secondary value.
    pub fn new(
        index: usize,
        sample: &Sample,
        point: Point,
        primary: Color,
        secondary: Option<Color>,
    ) -> Self {
        let secondary = secondary.zip(sample.value(Channel::Secondary));
        let height = if secondary.is_some() {
            HEIGHT_TWO_ROWS
        } else {
            HEIGHT_ONE_ROW
        };
        let rect = Rect::from_origin_size((point.x - WIDTH / 2.0, point.y - 60.0), (WIDTH, height));

        let mut rows = Vec::with_capacity(3);
        rows.push(TooltipRow {
            pos: Point::new(point.x, point.y - 40.0),
            text: sample.label.clone(),
            swatch: None,
        });
        rows.push(TooltipRow {
            pos: Point::new(point.x, point.y - 22.0),
            text: format!("{}", sample.primary),
            swatch: Some(primary),
        });
        if let Some((color, value)) = secondary {
            rows.push(TooltipRow {
                pos: Point::new(point.x, point.y - 8.0),
                text: format!("{value}"),
                swatch: Some(color),
            });
        }

        Self { index, rect, rows }
    }
}
