// Copyright 2025 the Driftline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pointer hit-testing and the single-owner hover target.

use kurbo::Point;

/// Radius of the invisible hit region around each primary point.
pub const DEFAULT_HIT_RADIUS: f64 = 15.0;

/// Resolves a pointer position to the sample whose hit region contains it.
///
/// Every point owns a circular region of `hit_radius`. When regions overlap, the nearest centre
/// wins; an exact tie goes to the later index, which is painted on top.
pub fn locate_hover(pointer: Point, points: &[Point], hit_radius: f64) -> Option<usize> {
    if !(pointer.x.is_finite() && pointer.y.is_finite()) {
        return None;
    }
    let r2 = hit_radius * hit_radius;
    let mut best: Option<(usize, f64)> = None;
    for (i, p) in points.iter().enumerate() {
        let dx = pointer.x - p.x;
        let dy = pointer.y - p.y;
        let d2 = dx * dx + dy * dy;
        if d2 > r2 {
            continue;
        }
        match best {
            Some((_, best_d2)) if d2 > best_d2 => {}
            _ => best = Some((i, d2)),
        }
    }
    best.map(|(i, _)| i)
}

/// The currently hovered sample index.
///
/// At most one index is hovered at a time. Entering a new region replaces the current index in
/// one step, and a late `leave` for a region that is no longer current is ignored, so no
/// intermediate "nothing hovered" state is ever observable between two regions.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct HoverState {
    index: Option<usize>,
}

impl HoverState {
    /// Creates an empty hover state.
    pub const fn new() -> Self {
        Self { index: None }
    }

    /// The hovered index, if any.
    pub fn index(&self) -> Option<usize> {
        self.index
    }

    /// Returns `true` if `index` is the hovered sample.
    pub fn is_hovered(&self, index: usize) -> bool {
        self.index == Some(index)
    }

    /// Pointer entered the hit region of `index`.
    ///
    /// Returns `true` if the hovered index changed.
    pub fn enter(&mut self, index: usize) -> bool {
        self.set(Some(index))
    }

    /// Pointer left the hit region of `index`.
    ///
    /// Only clears the state if `index` is still the hovered sample.
    pub fn leave(&mut self, index: usize) -> bool {
        if self.index == Some(index) {
            self.set(None)
        } else {
            false
        }
    }

    /// Pointer left the surface: nothing is hovered.
    pub fn clear(&mut self) -> bool {
        self.set(None)
    }

    /// Resolves `pointer` against `points` and stores the result.
    ///
    /// Returns `true` if the hovered index changed.
    pub fn update(&mut self, pointer: Point, points: &[Point], hit_radius: f64) -> bool {
        self.set(locate_hover(pointer, points, hit_radius))
    }

    /// Drops the hovered index if it no longer refers to one of `len` samples.
    pub fn retain_within(&mut self, len: usize) -> bool {
        match self.index {
            Some(i) if i >= len => self.set(None),
            _ => false,
        }
    }

    fn set(&mut self, index: Option<usize>) -> bool {
        if self.index == index {
            return false;
        }
        log::trace!("hover {:?} -> {:?}", self.index, index);
        self.index = index;
        true
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    const POINTS: [Point; 3] = [
        Point::new(0.0, 50.0),
        Point::new(50.0, 50.0),
        Point::new(100.0, 50.0),
    ];

    #[test]
    fn pointer_inside_region_hits() {
        assert_eq!(locate_hover(Point::new(48.0, 60.0), &POINTS, 15.0), Some(1));
        assert_eq!(locate_hover(Point::new(50.0, 65.0), &POINTS, 15.0), Some(1));
    }

    #[test]
    fn pointer_outside_every_region_misses() {
        assert_eq!(locate_hover(Point::new(25.0, 50.0), &POINTS, 15.0), None);
        assert_eq!(locate_hover(Point::new(50.0, 66.0), &POINTS, 15.0), None);
        assert_eq!(locate_hover(Point::new(f64::NAN, 50.0), &POINTS, 15.0), None);
    }

    #[test]
    fn overlapping_regions_pick_nearest_then_topmost() {
        let pts = [Point::new(0.0, 0.0), Point::new(10.0, 0.0)];
        assert_eq!(locate_hover(Point::new(3.0, 0.0), &pts, 15.0), Some(0));
        assert_eq!(locate_hover(Point::new(5.0, 0.0), &pts, 15.0), Some(1));
    }

    #[test]
    fn entering_a_new_region_replaces_without_clearing() {
        let mut h = HoverState::new();
        assert!(h.enter(0));
        assert!(h.enter(1));
        assert_eq!(h.index(), Some(1));
        // Late leave event for the region that was replaced.
        assert!(!h.leave(0));
        assert_eq!(h.index(), Some(1));
        assert!(h.leave(1));
        assert_eq!(h.index(), None);
    }

    #[test]
    fn update_moves_between_points_and_clears_outside() {
        let mut h = HoverState::new();
        assert!(h.update(Point::new(1.0, 50.0), &POINTS, 15.0));
        assert!(h.is_hovered(0));
        assert!(h.update(Point::new(99.0, 52.0), &POINTS, 15.0));
        assert!(h.is_hovered(2));
        assert!(!h.update(Point::new(100.0, 50.0), &POINTS, 15.0));
        assert!(h.update(Point::new(70.0, 10.0), &POINTS, 15.0));
        assert_eq!(h.index(), None);
    }

    #[test]
    fn retain_within_drops_stale_index() {
        let mut h = HoverState::new();
        h.enter(5);
        assert!(!h.retain_within(6));
        assert!(h.retain_within(5));
        assert_eq!(h.index(), None);
    }
}
