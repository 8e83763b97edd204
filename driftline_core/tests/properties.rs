// Copyright 2025 the Driftline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Property tests for projection, paths, hover and randomize.

use driftline_core::{
    Channel, HoverState, PRIMARY_RANGE, SECONDARY_RANGE, Sample, Series, Viewport, Xorshift32,
    domain_max, fill_path, locate_hover, project, randomize, sample_x, stroke_path,
};
use kurbo::{PathEl, Point};
use proptest::prelude::*;

fn samples_strategy(min: usize) -> impl Strategy<Value = Vec<Sample>> {
    proptest::collection::vec(
        (0.0f64..1_000.0, proptest::option::of(0.0f64..1_000.0)),
        min..48,
    )
    .prop_map(|values| {
        values
            .into_iter()
            .enumerate()
            .map(|(i, (primary, secondary))| Sample {
                label: format!("s{i}"),
                primary,
                secondary,
            })
            .collect()
    })
}

proptest! {
    #[test]
    fn projection_spans_width_with_increasing_x(
        samples in samples_strategy(2),
        width in 1.0f64..4_000.0,
        height in 1.0f64..1_000.0,
    ) {
        let vp = Viewport::new(width, height);
        let max = domain_max(&samples);

        let pts = project(&samples, Channel::Primary, vp, max);
        prop_assert_eq!(pts.len(), samples.len());
        prop_assert_eq!(pts[0].x, 0.0);
        prop_assert_eq!(pts[pts.len() - 1].x, width);

        for channel in [Channel::Primary, Channel::Secondary] {
            let series = Series::project(&samples, channel, vp, max);
            let present = samples.iter().filter(|s| s.value(channel).is_some()).count();
            prop_assert_eq!(series.len(), present);
            for w in series.points().windows(2) {
                prop_assert!(w[0].x < w[1].x);
            }
            for (i, p) in series.iter() {
                prop_assert_eq!(Some(p.x), sample_x(i, samples.len(), vp));
                prop_assert!(p.y.is_finite());
                prop_assert!(p.y >= -1e-9 && p.y <= height + 1e-9);
            }
        }
    }

    #[test]
    fn domain_max_is_the_maximum_over_both_channels(samples in samples_strategy(1)) {
        let expected = samples
            .iter()
            .flat_map(|s| [s.primary, s.secondary.unwrap_or(0.0)])
            .fold(0.0f64, f64::max);
        prop_assert_eq!(domain_max(&samples), expected);
    }

    #[test]
    fn domain_max_follows_a_raised_value(
        samples in samples_strategy(1),
        pick in any::<prop::sample::Index>(),
        bump in 1.0f64..500.0,
        secondary in any::<bool>(),
    ) {
        let mut samples = samples;
        let before = domain_max(&samples);
        let i = pick.index(samples.len());
        let raised = before + bump;
        if secondary {
            samples[i].secondary = Some(raised);
        } else {
            samples[i].primary = raised;
        }
        prop_assert_eq!(domain_max(&samples), raised);
    }

    #[test]
    fn stroke_is_a_prefix_of_the_closed_fill(
        samples in samples_strategy(2),
        width in 1.0f64..2_000.0,
    ) {
        let vp = Viewport::new(width, 300.0);
        let pts = project(&samples, Channel::Primary, vp, domain_max(&samples));
        let stroke = stroke_path(&pts).unwrap();
        let fill = fill_path(&pts, width, 300.0).unwrap();
        let s = stroke.elements();
        let f = fill.elements();
        prop_assert_eq!(s.len(), pts.len());
        prop_assert_eq!(&f[..s.len()], s);
        prop_assert_eq!(&f[s.len()..], &[
            PathEl::LineTo(Point::new(width, 300.0)),
            PathEl::LineTo(Point::new(0.0, 300.0)),
            PathEl::ClosePath,
        ]);
    }

    #[test]
    fn hover_resolves_inside_and_clears_outside(
        samples in samples_strategy(2),
        pick in any::<prop::sample::Index>(),
        dx in -10.0f64..10.0,
        dy in -10.0f64..10.0,
    ) {
        let vp = Viewport::new(2_000.0, 300.0);
        let pts = project(&samples, Channel::Primary, vp, domain_max(&samples));
        let i = pick.index(pts.len());
        let pointer = Point::new(pts[i].x + dx, pts[i].y + dy);

        let mut hover = HoverState::new();
        hover.update(pointer, &pts, 15.0);
        let hit = hover.index().unwrap();
        // The winner is never further away than the point we aimed at.
        prop_assert!((pts[hit] - pointer).hypot2() <= (pts[i] - pointer).hypot2());

        hover.update(Point::new(-100.0, -100.0), &pts, 15.0);
        prop_assert_eq!(hover.index(), None);
        prop_assert_eq!(locate_hover(Point::new(-100.0, -100.0), &pts, 15.0), None);
    }

    #[test]
    fn randomize_keeps_labels_and_ranges(samples in samples_strategy(1), seed in any::<u32>()) {
        let mut rng = Xorshift32::new(seed);
        let out = randomize(&samples, &mut rng);
        prop_assert_eq!(out.len(), samples.len());
        for (a, b) in samples.iter().zip(&out) {
            prop_assert_eq!(&a.label, &b.label);
            prop_assert!(b.primary >= f64::from(PRIMARY_RANGE.start));
            prop_assert!(b.primary < f64::from(PRIMARY_RANGE.end));
            let s = b.secondary.unwrap();
            prop_assert!(s >= f64::from(SECONDARY_RANGE.start));
            prop_assert!(s < f64::from(SECONDARY_RANGE.end));
            prop_assert_eq!(b.primary.fract(), 0.0);
        }
    }
}

#[test]
fn two_randomize_calls_differ() {
    let samples = driftline_core::default_samples();
    let mut rng = Xorshift32::new(42);
    let a = randomize(&samples, &mut rng);
    let b = randomize(&samples, &mut rng);
    assert_ne!(a, b);
}
