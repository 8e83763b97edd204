// Copyright 2025 the Driftline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! `driftline_core`: an interactive line-graph component.
//!
//! The crate is split along the data flow of the component:
//! - **Geometry**: [`Sample`]s are projected into pixel [`Point`](kurbo::Point)s against a
//!   shared [`domain_max`] and a [`Viewport`].
//! - **Paths**: projected points become smooth strokes and closed gradient areas
//!   ([`stroke_path`], [`fill_path`]).
//! - **Interaction**: pointer positions resolve to a single hovered sample ([`HoverState`]),
//!   which drives the [`Tooltip`] callout.
//! - **Component**: [`InteractiveGraph`] owns the state, reacts to [`GraphEvent`]s delivered by a
//!   host [`RenderSurface`], and emits a visual tree of [`Mark`]s.
//! - **Scene**: [`Scene`] reconciles successive mark sets into `Enter/Update/Exit` diffs for
//!   renderers.
//!
//! Painting is out of scope: marks carry geometry, paint and transition descriptions, and a
//! host renderer (for example an SVG writer) turns them into pixels.

#![no_std]

extern crate alloc;

mod animation;
mod config;
mod error;
mod geometry;
mod graph;
mod hover;
mod layout;
mod magnify;
mod mark;
mod path;
mod randomize;
mod render;
mod sample;
mod scene;
mod surface;
mod tooltip;
pub mod z_order;

pub use animation::{Easing, Timeline, Transition, TransitionProperty};
pub use config::GraphConfig;
pub use error::ConfigError;
pub use geometry::{Series, Viewport, project, sample_x, segment_width};
pub use graph::{GraphEvent, GraphLayout, InteractiveGraph, Lifecycle};
pub use hover::{DEFAULT_HIT_RADIUS, HoverState, locate_hover};
pub use layout::FrameLayout;
pub use magnify::MagnificationTable;
pub use mark::{
    Mark, MarkId, MarkKind, MarkPayload, Paint, PathChannels, RectChannels, StrokeDash,
    TextAnchor, TextBaseline, TextChannels, TextWeight,
};
pub use path::{fill_path, stroke_path};
pub use randomize::{PRIMARY_RANGE, SECONDARY_RANGE, ValueSource, Xorshift32, randomize};
pub use sample::{Channel, Sample, default_samples, domain_max};
pub use scene::{MarkDiff, Scene};
pub use surface::{ListenerId, RenderSurface, TimerId};
pub use tooltip::{Tooltip, TooltipRow};
