// Copyright 2025 the Driftline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The interactive graph component.

extern crate alloc;

use alloc::vec::Vec;

use kurbo::{BezPath, Point};

use crate::config::GraphConfig;
use crate::error::ConfigError;
use crate::geometry::{Series, Viewport};
use crate::hover::HoverState;
use crate::layout::FrameLayout;
use crate::mark::Mark;
use crate::path::{fill_path, stroke_path};
use crate::randomize::{ValueSource, Xorshift32, randomize};
use crate::render::{self, MarkInputs};
use crate::sample::{Channel, Sample, domain_max};
use crate::scene::{MarkDiff, Scene};
use crate::surface::{ListenerId, RenderSurface, TimerId};
use crate::tooltip::Tooltip;

/// Host input delivered to [`InteractiveGraph::handle`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GraphEvent {
    /// The surface width changed.
    Resize {
        /// New plot width in pixels.
        width: f64,
    },
    /// The pointer moved to a position in plot coordinates.
    PointerMove(Point),
    /// The pointer left the surface.
    PointerLeave,
    /// A click at a position in plot coordinates.
    Click(Point),
    /// Regenerate every sample value.
    Randomize,
    /// A timer scheduled through [`RenderSurface::schedule_once`] fired.
    TimerFired(TimerId),
}

/// Where a graph is in its mount cycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Lifecycle {
    /// Created but not attached to a surface.
    #[default]
    Unmounted,
    /// Attached: the resize listener is registered and the appear timer is pending or fired.
    Mounted {
        /// The registered resize listener.
        listener: ListenerId,
        /// The one-shot appear timer.
        appear_timer: TimerId,
    },
    /// Detached. Every further event is ignored.
    TornDown,
}

/// Derived geometry for one state of the graph.
///
/// This is a pure function of the samples, the viewport and the configuration; it is recomputed
/// wholesale whenever any of them changes.
#[derive(Clone, Debug, PartialEq)]
pub struct GraphLayout {
    /// Plot size.
    pub viewport: Viewport,
    /// Shared vertical ceiling of both series.
    pub domain_max: f64,
    /// Projected primary points.
    pub primary: Series,
    /// Projected secondary points; empty when the secondary line is hidden or no sample has a
    /// secondary value.
    pub secondary: Series,
    /// Primary stroke.
    pub primary_stroke: Option<BezPath>,
    /// Closed area under the primary stroke.
    pub primary_fill: Option<BezPath>,
    /// Secondary stroke.
    pub secondary_stroke: Option<BezPath>,
    /// Closed area under the secondary stroke.
    pub secondary_fill: Option<BezPath>,
    /// Frame around the plot.
    pub frame: FrameLayout,
}

impl GraphLayout {
    /// Computes the layout of `samples` in `viewport`.
    pub fn compute(samples: &[Sample], viewport: Viewport, config: &GraphConfig) -> Self {
        let max = domain_max(samples);
        let primary = Series::project(samples, Channel::Primary, viewport, max);
        let secondary = if config.show_secondary_line {
            Series::project(samples, Channel::Secondary, viewport, max)
        } else {
            Series::default()
        };
        let (w, h) = (viewport.width, viewport.height);

        Self {
            viewport,
            domain_max: max,
            primary_stroke: stroke_path(primary.points()),
            primary_fill: fill_path(primary.points(), w, h),
            secondary_stroke: stroke_path(secondary.points()),
            secondary_fill: fill_path(secondary.points(), w, h),
            primary,
            secondary,
            frame: FrameLayout::compute(viewport),
        }
    }
}

/// A stateful line graph driven by host events.
///
/// The graph owns its samples, viewport, hover target and appear flag. The host plays the
/// [`RenderSurface`] role: it mounts the graph, forwards resize, pointer and timer events to
/// [`handle`](Self::handle), and paints the diffs returned by [`frame`](Self::frame).
#[derive(Debug)]
pub struct InteractiveGraph<S = Xorshift32> {
    config: GraphConfig,
    samples: Vec<Sample>,
    layout: GraphLayout,
    hover: HoverState,
    appeared: bool,
    lifecycle: Lifecycle,
    source: S,
}

impl InteractiveGraph {
    /// Creates an unmounted graph.
    pub fn new(config: GraphConfig) -> Result<Self, ConfigError> {
        Self::with_source(config, Xorshift32::default())
    }
}

impl<S: ValueSource> InteractiveGraph<S> {
    /// Creates an unmounted graph that regenerates values from `source`.
    pub fn with_source(config: GraphConfig, source: S) -> Result<Self, ConfigError> {
        config.validate()?;
        let samples = config.samples.clone();
        if samples.len() < 2 {
            log::warn!(
                "{} sample(s) configured; the plot needs at least two to draw",
                samples.len()
            );
        }
        let layout = GraphLayout::compute(&samples, Viewport::new(0.0, config.height), &config);
        Ok(Self {
            config,
            samples,
            layout,
            hover: HoverState::new(),
            appeared: false,
            lifecycle: Lifecycle::Unmounted,
            source,
        })
    }

    /// Attaches the graph to `surface`.
    ///
    /// Measures the initial width, registers the resize listener and schedules the appear
    /// timer. Mounting twice, or after [`unmount`](Self::unmount), does nothing.
    pub fn mount(&mut self, surface: &mut impl RenderSurface) {
        if self.lifecycle != Lifecycle::Unmounted {
            log::warn!("mount ignored in state {:?}", self.lifecycle);
            return;
        }
        let width = surface.measure_width();
        let listener = surface.add_resize_listener();
        let appear_timer = surface.schedule_once(self.config.appear_delay_ms);
        self.lifecycle = Lifecycle::Mounted {
            listener,
            appear_timer,
        };
        self.set_width(width);
        log::debug!(
            "mounted at width {width}, appear in {} ms",
            self.config.appear_delay_ms
        );
    }

    /// Detaches the graph from `surface`.
    ///
    /// Releases the resize listener. A pending appear timer may still fire on the host side;
    /// its event is ignored like every other event after this call.
    pub fn unmount(&mut self, surface: &mut impl RenderSurface) {
        let Lifecycle::Mounted { listener, .. } = self.lifecycle else {
            log::warn!("unmount ignored in state {:?}", self.lifecycle);
            return;
        };
        surface.remove_resize_listener(listener);
        self.lifecycle = Lifecycle::TornDown;
        self.hover.clear();
        log::debug!("unmounted");
    }

    /// Applies a host event. Returns `true` if the visual tree changed.
    pub fn handle(&mut self, event: GraphEvent) -> bool {
        let Lifecycle::Mounted { appear_timer, .. } = self.lifecycle else {
            log::trace!("{event:?} ignored in state {:?}", self.lifecycle);
            return false;
        };
        match event {
            GraphEvent::Resize { width } => self.set_width(width),
            GraphEvent::PointerMove(pointer) => {
                if !self.hover_active() {
                    return false;
                }
                match self.layout.primary.hit(pointer, self.config.hit_radius) {
                    Some(index) => self.hover.enter(index),
                    None => self.hover.clear(),
                }
            }
            GraphEvent::PointerLeave => self.hover.clear(),
            GraphEvent::Click(pointer) => {
                if self.layout.frame.hits_refresh(pointer) {
                    self.refresh();
                    true
                } else {
                    false
                }
            }
            GraphEvent::Randomize => {
                self.refresh();
                true
            }
            GraphEvent::TimerFired(id) => {
                if id != appear_timer || self.appeared {
                    return false;
                }
                self.appeared = true;
                log::debug!("appear animation started");
                true
            }
        }
    }

    /// Builds the complete visual tree for the current state.
    pub fn marks(&self) -> Vec<Mark> {
        render::build_marks(&MarkInputs {
            config: &self.config,
            samples: &self.samples,
            layout: &self.layout,
            hovered: self.hovered(),
            appeared: self.appeared,
            tooltip: self.tooltip(),
        })
    }

    /// Reconciles the current visual tree into `scene` and returns the diffs to paint.
    pub fn frame(&self, scene: &mut Scene) -> Vec<MarkDiff> {
        scene.tick(self.marks())
    }

    /// The hover callout, if a sample is hovered and hover feedback is enabled.
    pub fn tooltip(&self) -> Option<Tooltip> {
        let index = self.hovered()?;
        let sample = self.samples.get(index)?;
        let point = self.layout.primary.point(index)?;
        let secondary = self
            .config
            .show_secondary_line
            .then_some(self.config.secondary_line_color);
        Some(Tooltip::new(
            index,
            sample,
            point,
            self.config.main_line_color,
            secondary,
        ))
    }

    /// The hovered sample index, while hover feedback is active.
    pub fn hovered(&self) -> Option<usize> {
        if self.hover_active() {
            self.hover.index()
        } else {
            None
        }
    }

    /// Current samples.
    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    /// Current derived geometry.
    pub fn layout(&self) -> &GraphLayout {
        &self.layout
    }

    /// Current viewport.
    pub fn viewport(&self) -> Viewport {
        self.layout.viewport
    }

    /// The graph's properties.
    pub fn config(&self) -> &GraphConfig {
        &self.config
    }

    /// Raw hover state.
    pub fn hover(&self) -> HoverState {
        self.hover
    }

    /// Returns `true` once the appear timer has fired.
    pub fn appeared(&self) -> bool {
        self.appeared
    }

    /// Current mount state.
    pub fn lifecycle(&self) -> Lifecycle {
        self.lifecycle
    }

    /// Hit regions only exist once the graph has appeared.
    fn hover_active(&self) -> bool {
        self.appeared && self.config.enable_data_hover
    }

    fn set_width(&mut self, width: f64) -> bool {
        let width = if width.is_finite() && width > 0.0 {
            width
        } else {
            log::warn!("unusable surface width {width}; plot hidden until the next resize");
            0.0
        };
        if width == self.layout.viewport.width {
            return false;
        }
        log::debug!("resize {} -> {width}", self.layout.viewport.width);
        self.recompute(self.layout.viewport.with_width(width));
        true
    }

    fn refresh(&mut self) {
        self.samples = randomize(&self.samples, &mut self.source);
        self.recompute(self.layout.viewport);
        self.hover.retain_within(self.samples.len());
        log::debug!(
            "randomized {} samples, domain max {}",
            self.samples.len(),
            self.layout.domain_max
        );
    }

    fn recompute(&mut self, viewport: Viewport) {
        self.layout = GraphLayout::compute(&self.samples, viewport, &self.config);
    }
}
