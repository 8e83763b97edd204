// Copyright 2025 the Driftline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Placement of the frame around the plot.
//!
//! Everything is expressed in plot coordinates: the plot occupies `[0, width] × [0, height]`,
//! the header (title, subtitle, refresh button) sits at negative y above it, and the x labels
//! and legend sit below it. The panel background extends past the plot on every side.

extern crate alloc;

use alloc::vec::Vec;

use kurbo::{Point, Rect};

use crate::geometry::Viewport;

/// Horizontal padding between the panel edge and the plot.
const PANEL_PAD_X: f64 = 24.0;
/// Gap between the header divider and the plot top.
const PLOT_PAD_TOP: f64 = 16.0;
/// Height of the header block above the divider.
const HEADER_HEIGHT: f64 = 84.0;
/// Space for the x labels under the plot.
const LABEL_BAND: f64 = 36.0;
/// Space for the legend under the labels.
const LEGEND_BAND: f64 = 44.0;

const BUTTON_WIDTH: f64 = 112.0;
const BUTTON_HEIGHT: f64 = 32.0;

/// Width reserved for one legend entry (swatch, gap and label).
pub(crate) const LEGEND_SLOT: f64 = 96.0;
/// Gap between legend entries.
pub(crate) const LEGEND_GAP: f64 = 24.0;

/// Resolved frame geometry for one viewport.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameLayout {
    /// Rounded panel behind everything.
    pub panel: Rect,
    /// The plot area.
    pub plot: Rect,
    /// Title anchor (start-aligned, alphabetic baseline).
    pub title: Point,
    /// Subtitle anchor (start-aligned, alphabetic baseline).
    pub subtitle: Point,
    /// The "Refresh Data" button.
    pub refresh_button: Rect,
    /// Vertical centre of the x label row.
    pub label_y: f64,
    /// Vertical centre of the legend row.
    pub legend_y: f64,
}

impl FrameLayout {
    /// Panel corner radius.
    pub const PANEL_RADIUS: f64 = 16.0;
    /// Refresh button corner radius.
    pub const BUTTON_RADIUS: f64 = 8.0;

    /// Lays out the frame around a plot of `viewport` size.
    pub fn compute(viewport: Viewport) -> Self {
        let w = viewport.width.max(0.0);
        let h = viewport.height;
        let header_top = -PLOT_PAD_TOP - HEADER_HEIGHT;
        let label_y = h + LABEL_BAND / 2.0;
        let legend_y = h + LABEL_BAND + LEGEND_BAND / 2.0 - 6.0;
        let button_center_y = header_top + 20.0 + BUTTON_HEIGHT / 2.0 + 6.0;

        Self {
            panel: Rect::new(
                -PANEL_PAD_X,
                header_top,
                w + PANEL_PAD_X,
                h + LABEL_BAND + LEGEND_BAND,
            ),
            plot: Rect::new(0.0, 0.0, w, h),
            title: Point::new(0.0, header_top + 40.0),
            subtitle: Point::new(0.0, header_top + 62.0),
            refresh_button: Rect::new(
                w - BUTTON_WIDTH,
                button_center_y - BUTTON_HEIGHT / 2.0,
                w,
                button_center_y + BUTTON_HEIGHT / 2.0,
            ),
            label_y,
            legend_y,
        }
    }

    /// Y of the header divider line.
    pub fn divider_y(&self) -> f64 {
        -PLOT_PAD_TOP
    }

    /// Returns `true` if `pointer` is on the refresh button.
    pub fn hits_refresh(&self, pointer: Point) -> bool {
        self.refresh_button.contains(pointer)
    }

    /// Left edges of `count` legend entries, centred under the plot.
    pub fn legend_slots(&self, count: usize) -> Vec<f64> {
        if count == 0 {
            return Vec::new();
        }
        let n = count as f64;
        let total = n * LEGEND_SLOT + (n - 1.0) * LEGEND_GAP;
        let start = self.plot.center().x - total / 2.0;
        (0..count)
            .map(|i| start + i as f64 * (LEGEND_SLOT + LEGEND_GAP))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    #[test]
    fn header_above_and_legend_below_plot() {
        let l = FrameLayout::compute(Viewport::new(600.0, 300.0));
        assert_eq!(l.plot, Rect::new(0.0, 0.0, 600.0, 300.0));
        assert!(l.title.y < l.subtitle.y);
        assert!(l.subtitle.y < l.divider_y());
        assert!(l.refresh_button.y1 < 0.0);
        assert_eq!(l.refresh_button.x1, 600.0);
        assert!(l.label_y > 300.0 && l.legend_y > l.label_y);
        assert!(l.panel.contains(Point::new(0.0, l.title.y)));
        assert!(l.panel.y1 > l.legend_y);
    }

    #[test]
    fn refresh_hit_test() {
        let l = FrameLayout::compute(Viewport::new(400.0, 300.0));
        assert!(l.hits_refresh(l.refresh_button.center()));
        assert!(!l.hits_refresh(Point::new(10.0, 10.0)));
    }

    #[test]
    fn legend_slots_are_centred() {
        let l = FrameLayout::compute(Viewport::new(400.0, 300.0));
        let one = l.legend_slots(1);
        assert_eq!(one, [200.0 - LEGEND_SLOT / 2.0]);
        let two = l.legend_slots(2);
        let right_edge = two[1] + LEGEND_SLOT;
        assert!((200.0 - two[0] - (right_edge - 200.0)).abs() < 1e-9);
        assert!(l.legend_slots(0).is_empty());
    }
}
