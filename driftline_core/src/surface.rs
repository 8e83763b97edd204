// Copyright 2025 the Driftline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The host boundary.

/// Handle for a registered resize listener.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListenerId(pub u64);

/// Handle for a scheduled one-shot timer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerId(pub u64);

/// The host that measures, animates and paints the graph.
///
/// The graph never calls back into the surface outside of
/// [`mount`](crate::InteractiveGraph::mount) and [`unmount`](crate::InteractiveGraph::unmount).
/// Resizes, pointer input and fired timers are delivered back as
/// [`GraphEvent`](crate::GraphEvent)s.
pub trait RenderSurface {
    /// Current width available to the plot, in pixels.
    fn measure_width(&self) -> f64;

    /// Starts delivering [`GraphEvent::Resize`](crate::GraphEvent::Resize) events.
    fn add_resize_listener(&mut self) -> ListenerId;

    /// Stops delivering resize events for `id`.
    fn remove_resize_listener(&mut self, id: ListenerId);

    /// Delivers [`GraphEvent::TimerFired`](crate::GraphEvent::TimerFired) once after `delay_ms`.
    fn schedule_once(&mut self, delay_ms: u32) -> TimerId;
}
