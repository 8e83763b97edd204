// Copyright 2025 the Driftline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Smooth stroke and area paths.
//!
//! Each segment between consecutive points is a cubic whose control points sit at one third and
//! two thirds of the horizontal distance. The first control point keeps the y of the previous
//! point and the second keeps the y of the current point, so the curve eases horizontally and
//! steps vertically. This is not a spline; it is kept exactly for visual parity.

use kurbo::{BezPath, Point};

/// Builds the open stroke path through `points`.
///
/// Returns `None` for fewer than two points: there is nothing to draw.
pub fn stroke_path(points: &[Point]) -> Option<BezPath> {
    let (first, rest) = points.split_first()?;
    if rest.is_empty() {
        return None;
    }

    let mut p = BezPath::new();
    p.move_to(*first);
    let mut prev = *first;
    for &cur in rest {
        let dx = cur.x - prev.x;
        let c1 = Point::new(prev.x + dx / 3.0, prev.y);
        let c2 = Point::new(prev.x + dx * 2.0 / 3.0, cur.y);
        p.curve_to(c1, c2, cur);
        prev = cur;
    }
    Some(p)
}

/// Builds the closed area under the stroke through `points`.
///
/// The stroke is extended with a segment to `(right_x, baseline_y)` and then to
/// `(0, baseline_y)` before closing, which makes the shape suitable for a gradient fill under
/// the curve. `right_x` is normally the viewport width.
pub fn fill_path(points: &[Point], right_x: f64, baseline_y: f64) -> Option<BezPath> {
    let mut p = stroke_path(points)?;
    p.line_to((right_x, baseline_y));
    p.line_to((0.0, baseline_y));
    p.close_path();
    Some(p)
}
