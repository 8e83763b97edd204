// Copyright 2025 the Driftline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Transition descriptions for the appear animation.
//!
//! Marks always carry their *target* state. A [`Transition`] tells the render surface how to
//! animate into that state; the graph itself never interpolates.

/// The mark property a transition animates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TransitionProperty {
    /// Stroke dash offset (draw-in of a line).
    DashOffset,
    /// Overall opacity.
    Opacity,
    /// Uniform scale around the mark's centre.
    Scale,
    /// Vertical offset from the target position.
    TranslateY,
}

/// Easing curve for a transition.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Easing {
    /// Fast start, slow finish.
    #[default]
    EaseOut,
    /// Slow start and finish, `cubic-bezier(0.4, 0, 0.2, 1)`.
    EaseInOut,
}

/// One animated property of a mark.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Transition {
    /// Animated property.
    pub property: TransitionProperty,
    /// Duration in milliseconds.
    pub duration_ms: u32,
    /// Delay before the transition starts, in milliseconds.
    pub delay_ms: u32,
    /// Easing curve.
    pub easing: Easing,
}

impl Transition {
    /// An ease-out transition with no delay.
    pub const fn new(property: TransitionProperty, duration_ms: u32) -> Self {
        Self {
            property,
            duration_ms,
            delay_ms: 0,
            easing: Easing::EaseOut,
        }
    }

    /// Sets the delay.
    pub const fn delayed(mut self, delay_ms: u32) -> Self {
        self.delay_ms = delay_ms;
        self
    }

    /// Sets the easing curve.
    pub const fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    /// Time at which the transition completes.
    pub const fn end_ms(&self) -> u32 {
        self.delay_ms.saturating_add(self.duration_ms)
    }
}

/// The staggered schedule of the appear animation.
///
/// All delays are measured from the moment the graph appears.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Timeline {
    /// Stroke draw-in duration.
    pub stroke_ms: u32,
}

impl Timeline {
    /// Delay of the secondary stroke behind the primary one.
    pub const SECONDARY_STROKE_DELAY_MS: u32 = 300;
    /// Area fade-in duration.
    pub const AREA_MS: u32 = 1000;
    /// Point and label transition duration.
    pub const ITEM_MS: u32 = 500;

    /// Creates a timeline with the given stroke draw-in duration.
    pub const fn new(stroke_ms: u32) -> Self {
        Self { stroke_ms }
    }

    /// Draw-in of a stroke.
    pub const fn stroke(&self, secondary: bool) -> Transition {
        let t = Transition::new(TransitionProperty::DashOffset, self.stroke_ms);
        if secondary {
            t.delayed(Self::SECONDARY_STROKE_DELAY_MS)
        } else {
            t
        }
    }

    /// Fade-in of an area fill.
    pub const fn area(&self) -> Transition {
        Transition::new(TransitionProperty::Opacity, Self::AREA_MS)
            .with_easing(Easing::EaseInOut)
    }

    /// Delay before the marker of sample `index` appears.
    pub fn point_delay_ms(&self, index: usize, secondary: bool) -> u32 {
        let base = if secondary { 600 } else { 300 };
        stagger(base, 50, index)
    }

    /// Pop-in of the marker of sample `index`.
    pub fn point(&self, index: usize, secondary: bool) -> [Transition; 2] {
        let delay = self.point_delay_ms(index, secondary);
        [
            Transition::new(TransitionProperty::Opacity, Self::ITEM_MS).delayed(delay),
            Transition::new(TransitionProperty::Scale, Self::ITEM_MS).delayed(delay),
        ]
    }

    /// Delay before the x label of sample `index` appears.
    pub fn label_delay_ms(&self, index: usize) -> u32 {
        stagger(800, 30, index)
    }

    /// Slide-up of the x label of sample `index`.
    pub fn label(&self, index: usize) -> [Transition; 2] {
        let delay = self.label_delay_ms(index);
        let item = |property| {
            Transition::new(property, Self::ITEM_MS)
                .delayed(delay)
                .with_easing(Easing::EaseInOut)
        };
        [
            item(TransitionProperty::Opacity),
            item(TransitionProperty::TranslateY),
        ]
    }
}

fn stagger(base: u32, step: u32, index: usize) -> u32 {
    let index = u32::try_from(index).unwrap_or(u32::MAX);
    base.saturating_add(step.saturating_mul(index))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn staggered_delays() {
        let t = Timeline::new(1500);
        assert_eq!(t.point_delay_ms(0, false), 300);
        assert_eq!(t.point_delay_ms(3, false), 450);
        assert_eq!(t.point_delay_ms(3, true), 750);
        assert_eq!(t.label_delay_ms(2), 860);
        assert_eq!(t.point(1, false)[1].property, TransitionProperty::Scale);
    }

    #[test]
    fn secondary_stroke_trails_primary() {
        let t = Timeline::new(1200);
        assert_eq!(t.stroke(false).delay_ms, 0);
        assert_eq!(t.stroke(true).delay_ms, 300);
        assert_eq!(t.stroke(true).end_ms(), 1500);
        assert_eq!(t.stroke(false).easing, Easing::EaseOut);
    }

    #[test]
    fn fades_ease_in_and_out() {
        let t = Timeline::new(1500);
        assert_eq!(t.area().easing, Easing::EaseInOut);
        assert_eq!(t.area().duration_ms, 1000);
        for tr in t.label(4) {
            assert_eq!(tr.easing, Easing::EaseInOut);
            assert_eq!(tr.delay_ms, 920);
        }
        assert_eq!(t.point(0, true)[0].easing, Easing::EaseOut);
    }

    #[test]
    fn huge_index_saturates() {
        let t = Timeline::new(0);
        assert_eq!(t.label_delay_ms(usize::MAX), u32::MAX);
    }
}
