// Copyright 2025 the Driftline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Sample-to-pixel projection.

extern crate alloc;

use alloc::vec::Vec;

use kurbo::Point;

use crate::hover::locate_hover;
use crate::sample::{Channel, Sample};

/// The pixel size of the plot area.
///
/// The width is owned by the host surface (measured on mount and on every resize); the height
/// comes from the configured target height.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Viewport {
    /// Plot width in pixels.
    pub width: f64,
    /// Plot height in pixels.
    pub height: f64,
}

impl Viewport {
    /// Creates a viewport.
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Returns `true` once the host has measured a usable width.
    pub fn has_width(&self) -> bool {
        self.width.is_finite() && self.width > 0.0
    }

    /// Returns a copy with a different width.
    pub fn with_width(self, width: f64) -> Self {
        Self { width, ..self }
    }
}

/// Horizontal distance between adjacent samples.
///
/// Returns `None` when fewer than two samples exist, where the spacing is undefined.
pub fn segment_width(count: usize, viewport: Viewport) -> Option<f64> {
    if count < 2 {
        return None;
    }
    Some(viewport.width / (count - 1) as f64)
}

/// X position of sample `index` out of `count`.
///
/// Returns `None` when the spacing is undefined, the width is unmeasured, or `index` is out of
/// range. The last sample is pinned to the right edge; `last * step` can drift by an ulp.
pub fn sample_x(index: usize, count: usize, viewport: Viewport) -> Option<f64> {
    let step = segment_width(count, viewport)?;
    if !viewport.has_width() || index >= count {
        return None;
    }
    Some(if index == count - 1 {
        viewport.width
    } else {
        index as f64 * step
    })
}

/// Projects one channel of `samples` into plot coordinates.
///
/// Samples are spaced uniformly across the viewport width and scaled vertically against
/// `domain_max`, with larger values placed higher (smaller y). Samples with no finite value in
/// `channel` get no point; see [`Series`] for the sample index of each point.
///
/// Degenerate inputs produce degenerate but finite output:
/// - fewer than two samples, or no measured width: an empty list;
/// - `domain_max <= 0` (or non-finite): every point sits on the baseline.
pub fn project(
    samples: &[Sample],
    channel: Channel,
    viewport: Viewport,
    domain_max: f64,
) -> Vec<Point> {
    Series::project(samples, channel, viewport, domain_max).points
}

/// One channel projected into plot coordinates, keyed by sample index.
///
/// Points keep the x position of their sample, so a line through them bridges samples that have
/// no value. A channel with no values at all projects to an empty series.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Series {
    indices: Vec<usize>,
    points: Vec<Point>,
}

impl Series {
    /// Projects `channel` of `samples`. See [`project`].
    pub fn project(
        samples: &[Sample],
        channel: Channel,
        viewport: Viewport,
        domain_max: f64,
    ) -> Self {
        let has_signal = domain_max.is_finite() && domain_max > 0.0;
        let h = viewport.height;
        let count = samples.len();

        let (indices, points) = samples
            .iter()
            .enumerate()
            .filter_map(|(i, s)| {
                let v = s.value(channel)?;
                let x = sample_x(i, count, viewport)?;
                let y = if has_signal {
                    h - (v / domain_max) * h
                } else {
                    h
                };
                Some((i, Point::new(x, y)))
            })
            .unzip();
        Self { indices, points }
    }

    /// Projected points in sample order.
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// The point of sample `index`, if it has one.
    pub fn point(&self, index: usize) -> Option<Point> {
        let k = self.indices.binary_search(&index).ok()?;
        self.points.get(k).copied()
    }

    /// Sample index and point pairs, in sample order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, Point)> + '_ {
        self.indices.iter().copied().zip(self.points.iter().copied())
    }

    /// The sample whose hit region contains `pointer`. See [`locate_hover`].
    pub fn hit(&self, pointer: Point, hit_radius: f64) -> Option<usize> {
        let k = locate_hover(pointer, &self.points, hit_radius)?;
        self.indices.get(k).copied()
    }

    /// Number of projected points.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns `true` if no sample was projected.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::vec;

    use super::*;
    use crate::sample::domain_max;

    fn jan_feb() -> Vec<Sample> {
        vec![
            Sample::new("Jan", 32.0).with_secondary(20.0),
            Sample::new("Feb", 56.0).with_secondary(32.0),
        ]
    }

    #[test]
    fn two_month_scenario_matches_expected_points() {
        let samples = jan_feb();
        let vp = Viewport::new(100.0, 100.0);
        let max = domain_max(&samples);
        assert_eq!(max, 56.0);

        let pts = project(&samples, Channel::Primary, vp, max);
        assert_eq!(pts.len(), 2);
        assert_eq!(pts[0].x, 0.0);
        assert!((pts[0].y - (100.0 - 32.0 / 56.0 * 100.0)).abs() < 1e-9);
        assert!((pts[0].y - 42.857).abs() < 1e-3);
        assert_eq!(pts[1], Point::new(100.0, 0.0));
    }

    #[test]
    fn single_sample_projects_nothing() {
        let samples = vec![Sample::new("only", 3.0)];
        assert!(project(&samples, Channel::Primary, Viewport::new(100.0, 50.0), 3.0).is_empty());
        assert_eq!(segment_width(1, Viewport::new(100.0, 50.0)), None);
    }

    #[test]
    fn zero_domain_renders_flat_baseline() {
        let samples = vec![Sample::new("a", 0.0), Sample::new("b", 0.0)];
        let pts = project(&samples, Channel::Primary, Viewport::new(80.0, 40.0), 0.0);
        assert_eq!(pts.len(), 2);
        for p in pts {
            assert!(p.y.is_finite());
            assert_eq!(p.y, 40.0);
        }
    }

    #[test]
    fn unmeasured_width_projects_nothing() {
        let pts = project(&jan_feb(), Channel::Primary, Viewport::new(0.0, 300.0), 56.0);
        assert!(pts.is_empty());
    }

    #[test]
    fn missing_values_are_left_out() {
        let samples = vec![
            Sample::new("a", 10.0),
            Sample::new("b", 20.0).with_secondary(5.0),
            Sample::new("c", f64::NAN).with_secondary(f64::NAN),
            Sample::new("d", 4.0).with_secondary(10.0),
        ];
        let vp = Viewport::new(30.0, 100.0);
        let secondary = Series::project(&samples, Channel::Secondary, vp, 20.0);
        assert_eq!(secondary.len(), 2);
        assert_eq!(secondary.point(0), None);
        assert_eq!(secondary.point(1), Some(Point::new(10.0, 75.0)));
        assert_eq!(secondary.point(3), Some(Point::new(30.0, 50.0)));

        let primary = Series::project(&samples, Channel::Primary, vp, 20.0);
        let indices: Vec<usize> = primary.iter().map(|(i, _)| i).collect();
        assert_eq!(indices, [0, 1, 3]);
        assert!(primary.points().iter().all(|p| p.y.is_finite()));
        assert_eq!(primary.hit(Point::new(30.0, 82.0), 15.0), Some(3));
    }

    #[test]
    fn channel_without_values_projects_empty() {
        let samples = vec![Sample::new("a", 5.0), Sample::new("b", 9.0)];
        let pts = project(&samples, Channel::Secondary, Viewport::new(200.0, 300.0), 9.0);
        assert!(pts.is_empty());
    }

    #[test]
    fn sample_x_pins_the_last_sample() {
        let vp = Viewport::new(100.0, 10.0);
        assert_eq!(sample_x(0, 3, vp), Some(0.0));
        assert_eq!(sample_x(1, 3, vp), Some(50.0));
        assert_eq!(sample_x(2, 3, vp), Some(100.0));
        assert_eq!(sample_x(3, 3, vp), None);
        assert_eq!(sample_x(0, 3, Viewport::new(0.0, 10.0)), None);
    }
}
