// Copyright 2025 the Driftline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Visual tree generation.
//!
//! Every visual item gets a stable [`MarkId`] so that successive frames reconcile into
//! `Enter/Update/Exit` diffs. Per-sample groups (markers, labels) live in their own id ranges
//! and are offset by sample index.

extern crate alloc;

use alloc::vec::Vec;

use kurbo::{BezPath, Circle, Point, Shape};
use peniko::Color;
use peniko::color::palette::css;

use crate::animation::Timeline;
use crate::config::GraphConfig;
use crate::geometry::sample_x;
use crate::graph::GraphLayout;
use crate::layout::FrameLayout;
use crate::mark::{
    Mark, MarkId, Paint, PathChannels, RectChannels, StrokeDash, TextAnchor, TextBaseline,
    TextChannels, TextWeight,
};
use crate::sample::{Channel, Sample};
use crate::tooltip::{self, Tooltip};
use crate::z_order;

pub(crate) const PANEL: MarkId = MarkId(1);
pub(crate) const DIVIDER: MarkId = MarkId(2);
pub(crate) const TITLE: MarkId = MarkId(3);
pub(crate) const SUBTITLE: MarkId = MarkId(4);
pub(crate) const REFRESH_BUTTON: MarkId = MarkId(5);
pub(crate) const REFRESH_LABEL: MarkId = MarkId(6);
pub(crate) const GRID: MarkId = MarkId(100);
pub(crate) const PRIMARY_FILL: MarkId = MarkId(200);
pub(crate) const SECONDARY_FILL: MarkId = MarkId(201);
pub(crate) const PRIMARY_STROKE: MarkId = MarkId(210);
pub(crate) const SECONDARY_STROKE: MarkId = MarkId(211);
pub(crate) const TOOLTIP_BOX: MarkId = MarkId(300);
pub(crate) const TOOLTIP_ROWS: MarkId = MarkId(310);
pub(crate) const TOOLTIP_SWATCHES: MarkId = MarkId(320);
pub(crate) const LEGEND_SWATCHES: MarkId = MarkId(400);
pub(crate) const LEGEND_LABELS: MarkId = MarkId(410);
pub(crate) const PRIMARY_POINTS: MarkId = MarkId(1 << 32);
pub(crate) const SECONDARY_POINTS: MarkId = MarkId(2 << 32);
pub(crate) const X_LABELS: MarkId = MarkId(3 << 32);

/// Dash length used for the stroke draw-in; longer than any realistic stroke.
const DASH: f64 = 1000.0;
/// Fractions of the plot height where grid lines sit.
const GRID_FRACTIONS: [f64; 4] = [0.0, 0.25, 0.5, 0.75];

fn rgba(r: u8, g: u8, b: u8, a: f32) -> Color {
    Color::from_rgba8(r, g, b, 255).with_alpha(a)
}

/// Everything the visual tree depends on.
#[derive(Debug)]
pub(crate) struct MarkInputs<'a> {
    pub(crate) config: &'a GraphConfig,
    pub(crate) samples: &'a [Sample],
    pub(crate) layout: &'a GraphLayout,
    pub(crate) hovered: Option<usize>,
    pub(crate) appeared: bool,
    pub(crate) tooltip: Option<Tooltip>,
}

pub(crate) fn build_marks(inputs: &MarkInputs<'_>) -> Vec<Mark> {
    let mut out = Vec::new();
    let frame = &inputs.layout.frame;

    frame_marks(&mut out, inputs.config, frame);
    if inputs.layout.viewport.has_width() {
        if inputs.config.show_grid_lines {
            grid_marks(&mut out, frame);
        }
        series_marks(&mut out, inputs);
        if inputs.appeared {
            point_marks(&mut out, inputs);
            label_marks(&mut out, inputs.samples, inputs.layout, inputs.config);
        }
        if let Some(t) = &inputs.tooltip {
            tooltip_marks(&mut out, t);
        }
    }
    legend_marks(&mut out, inputs.config, inputs.samples, frame);
    out
}

fn frame_marks(out: &mut Vec<Mark>, config: &GraphConfig, frame: &FrameLayout) {
    out.push(Mark::rect(
        PANEL,
        z_order::PANEL_BACKGROUND,
        RectChannels::filled(frame.panel, FrameLayout::PANEL_RADIUS, rgba(15, 23, 42, 0.4))
            .with_stroke(css::WHITE.with_alpha(0.1), 1.0),
    ));

    let mut divider = BezPath::new();
    divider.move_to((frame.panel.x0, frame.divider_y()));
    divider.line_to((frame.panel.x1, frame.divider_y()));
    out.push(Mark::path(
        DIVIDER,
        z_order::GRID_LINES,
        PathChannels::stroked(divider, css::WHITE.with_alpha(0.1), 1.0),
    ));

    out.push(Mark::text(
        TITLE,
        z_order::TITLES,
        TextChannels::new(frame.title, config.title.clone(), 20.0, css::WHITE)
            .with_weight(TextWeight::Bold),
    ));
    out.push(Mark::text(
        SUBTITLE,
        z_order::TITLES,
        TextChannels::new(
            frame.subtitle,
            config.subtitle.clone(),
            14.0,
            rgba(191, 219, 254, 0.7),
        ),
    ));
    out.push(Mark::rect(
        REFRESH_BUTTON,
        z_order::TITLES,
        RectChannels::filled(
            frame.refresh_button,
            FrameLayout::BUTTON_RADIUS,
            rgba(79, 70, 229, 0.3),
        ),
    ));
    out.push(Mark::text(
        REFRESH_LABEL,
        z_order::TITLES,
        TextChannels::new(
            frame.refresh_button.center(),
            "Refresh Data",
            14.0,
            rgba(199, 210, 254, 1.0),
        )
        .anchored(TextAnchor::Middle)
        .with_baseline(TextBaseline::Middle)
        .with_weight(TextWeight::Medium),
    ));
}

fn grid_marks(out: &mut Vec<Mark>, frame: &FrameLayout) {
    for (i, f) in GRID_FRACTIONS.iter().enumerate() {
        let y = frame.plot.y0 + frame.plot.height() * f;
        let mut p = BezPath::new();
        p.move_to((frame.plot.x0, y));
        p.line_to((frame.plot.x1, y));
        out.push(Mark::path(
            GRID.offset(i),
            z_order::GRID_LINES,
            PathChannels::stroked(p, css::WHITE.with_alpha(0.05), 1.0),
        ));
    }
}

fn series_marks(out: &mut Vec<Mark>, inputs: &MarkInputs<'_>) {
    let config = inputs.config;
    let layout = inputs.layout;
    let timeline = Timeline::new(config.animation_duration_ms);

    // Gradients only exist once the graph has appeared.
    if config.show_bg_gradient && inputs.appeared {
        if let Some(fill) = &layout.primary_fill {
            out.push(
                Mark::path(
                    PRIMARY_FILL,
                    z_order::SERIES_FILL,
                    PathChannels::filled(
                        fill.clone(),
                        Paint::VerticalGradient {
                            top: config.bg_from,
                            bottom: config.bg_to.with_alpha(0.0),
                        },
                    ),
                )
                .with_transitions([timeline.area()]),
            );
        }
        if let Some(fill) = &layout.secondary_fill {
            let c = config.secondary_line_color;
            out.push(
                Mark::path(
                    SECONDARY_FILL,
                    z_order::SERIES_FILL,
                    PathChannels::filled(
                        fill.clone(),
                        Paint::VerticalGradient {
                            top: c.with_alpha(0.1),
                            bottom: c.with_alpha(0.0),
                        },
                    )
                    .with_opacity(0.7),
                )
                .with_transitions([timeline.area()]),
            );
        }
    }

    let dash = StrokeDash {
        array: DASH,
        offset: if inputs.appeared { 0.0 } else { DASH },
    };
    if let Some(stroke) = &layout.primary_stroke {
        out.push(
            Mark::path(
                PRIMARY_STROKE,
                z_order::PRIMARY_STROKE,
                PathChannels::stroked(stroke.clone(), config.main_line_color, 3.0)
                    .with_dash(dash)
                    .rounded(),
            )
            .with_transitions([timeline.stroke(false)]),
        );
    }
    if let Some(stroke) = &layout.secondary_stroke {
        out.push(
            Mark::path(
                SECONDARY_STROKE,
                z_order::SECONDARY_STROKE,
                PathChannels::stroked(stroke.clone(), config.secondary_line_color, 2.5)
                    .with_dash(dash)
                    .rounded(),
            )
            .with_transitions([timeline.stroke(true)]),
        );
    }
}

fn marker(center: Point, radius: f64, fill: Color, stroke: Color, width: f64) -> PathChannels {
    PathChannels::filled(Circle::new(center, radius).to_path(0.1), fill).with_stroke(stroke, width)
}

fn point_marks(out: &mut Vec<Mark>, inputs: &MarkInputs<'_>) {
    let config = inputs.config;
    let layout = inputs.layout;
    let timeline = Timeline::new(config.animation_duration_ms);
    let main = config.main_line_color;
    let secondary = config.secondary_line_color;

    for (i, p) in layout.primary.iter() {
        let hovered = inputs.hovered == Some(i);
        let channels = if hovered {
            marker(p, 6.0, css::WHITE, main, 2.0)
        } else {
            marker(p, 4.0, main, css::WHITE, 2.0)
        };
        out.push(
            Mark::path(PRIMARY_POINTS.offset(i), z_order::PRIMARY_POINTS, channels)
                .with_transitions(timeline.point(i, false)),
        );
    }

    for (i, p) in layout.secondary.iter() {
        let hovered = inputs.hovered == Some(i);
        let channels = if hovered {
            marker(p, 5.0, css::WHITE, secondary, 1.5)
        } else {
            marker(p, 3.0, secondary, css::WHITE, 1.5)
        };
        out.push(
            Mark::path(
                SECONDARY_POINTS.offset(i),
                z_order::SECONDARY_POINTS,
                channels.with_opacity(0.9),
            )
            .with_transitions(timeline.point(i, true)),
        );
    }
}

/// Indices of the samples that get an x label.
///
/// Every other label is shown, or all of them when there are at most six samples.
pub(crate) fn labeled_indices(count: usize) -> impl Iterator<Item = usize> {
    (0..count).filter(move |i| count <= 6 || i % 2 == 0)
}

fn label_marks(
    out: &mut Vec<Mark>,
    samples: &[Sample],
    layout: &GraphLayout,
    config: &GraphConfig,
) {
    let timeline = Timeline::new(config.animation_duration_ms);
    let y = layout.frame.label_y;
    let count = samples.len();
    for (slot, i) in labeled_indices(count).enumerate() {
        let (Some(sample), Some(x)) = (samples.get(i), sample_x(i, count, layout.viewport)) else {
            continue;
        };
        out.push(
            Mark::text(
                X_LABELS.offset(i),
                z_order::AXIS_LABELS,
                TextChannels::new(
                    Point::new(x, y),
                    sample.label.clone(),
                    12.0,
                    rgba(156, 163, 175, 1.0),
                )
                .anchored(TextAnchor::Middle)
                .with_baseline(TextBaseline::Middle),
            )
            .with_transitions(timeline.label(slot)),
        );
    }
}

fn tooltip_marks(out: &mut Vec<Mark>, t: &Tooltip) {
    out.push(Mark::rect(
        TOOLTIP_BOX,
        z_order::TOOLTIP,
        RectChannels::filled(t.rect, tooltip::CORNER_RADIUS, rgba(15, 23, 42, 0.9))
            .with_stroke(css::WHITE.with_alpha(0.1), 1.0),
    ));
    for (i, row) in t.rows.iter().enumerate() {
        let weight = if row.swatch.is_some() {
            TextWeight::Bold
        } else {
            TextWeight::Medium
        };
        let text_x = if row.swatch.is_some() {
            row.pos.x + 6.0
        } else {
            row.pos.x
        };
        out.push(Mark::text(
            TOOLTIP_ROWS.offset(i),
            z_order::TOOLTIP_TEXT,
            TextChannels::new(
                Point::new(text_x, row.pos.y),
                row.text.clone(),
                12.0,
                css::WHITE,
            )
            .anchored(TextAnchor::Middle)
            .with_weight(weight),
        ));
        if let Some(color) = row.swatch {
            let center = Point::new(row.pos.x - 14.0, row.pos.y - 4.0);
            out.push(Mark::path(
                TOOLTIP_SWATCHES.offset(i),
                z_order::TOOLTIP_TEXT,
                PathChannels::filled(Circle::new(center, 3.5).to_path(0.1), color),
            ));
        }
    }
}

fn legend_marks(
    out: &mut Vec<Mark>,
    config: &GraphConfig,
    samples: &[Sample],
    frame: &FrameLayout,
) {
    let mut entries = Vec::with_capacity(2);
    entries.push(("Primary", config.main_line_color));
    // No secondary values means no secondary series to name.
    let has_secondary = samples.iter().any(|s| s.value(Channel::Secondary).is_some());
    if config.show_secondary_line && has_secondary {
        entries.push(("Secondary", config.secondary_line_color));
    }
    let slots = frame.legend_slots(entries.len());
    for (i, ((label, color), x)) in entries.into_iter().zip(slots).enumerate() {
        let y = frame.legend_y;
        out.push(Mark::path(
            LEGEND_SWATCHES.offset(i),
            z_order::LEGEND_SWATCHES,
            PathChannels::filled(Circle::new((x + 6.0, y), 6.0).to_path(0.1), color),
        ));
        out.push(Mark::text(
            LEGEND_LABELS.offset(i),
            z_order::LEGEND_LABELS,
            TextChannels::new(Point::new(x + 20.0, y), label, 14.0, rgba(209, 213, 219, 1.0))
                .with_baseline(TextBaseline::Middle),
        ));
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::vec::Vec;

    use super::*;

    #[test]
    fn label_thinning() {
        let twelve: Vec<_> = labeled_indices(12).collect();
        assert_eq!(twelve, [0, 2, 4, 6, 8, 10]);
        let six: Vec<_> = labeled_indices(6).collect();
        assert_eq!(six, [0, 1, 2, 3, 4, 5]);
        let seven: Vec<_> = labeled_indices(7).collect();
        assert_eq!(seven, [0, 2, 4, 6]);
    }

    #[test]
    fn group_ranges_do_not_overlap() {
        assert!(PRIMARY_POINTS.offset(100_000) < SECONDARY_POINTS);
        assert!(SECONDARY_POINTS.offset(100_000) < X_LABELS);
        assert!(LEGEND_LABELS.offset(10) < PRIMARY_POINTS);
    }
}
