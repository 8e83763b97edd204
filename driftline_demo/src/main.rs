// Copyright 2025 the Driftline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Headless host for `driftline_core`.
//!
//! Plays the render-surface role without a window: it mounts a graph, delivers resize, timer,
//! pointer and click events, and writes one SVG snapshot per step.
//!
//! Usage: `driftline_demo [OUT_DIR]` (default `driftline_demo_out`). Set `RUST_LOG=debug` to
//! follow the component's lifecycle.

mod svg;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use driftline_core::{
    GraphConfig, GraphEvent, InteractiveGraph, ListenerId, RenderSurface, Scene, TimerId,
};
use kurbo::{Point, Rect, Vec2};
use log::info;

/// A surface with a fixed width and a queue of pending timers.
#[derive(Debug, Default)]
struct HeadlessSurface {
    width: f64,
    next_id: u64,
    listeners: Vec<ListenerId>,
    timers: Vec<(TimerId, u32)>,
}

impl HeadlessSurface {
    fn new(width: f64) -> Self {
        Self {
            width,
            ..Self::default()
        }
    }

    /// Changes the width and returns the events the listeners would see.
    fn resize(&mut self, width: f64) -> Vec<GraphEvent> {
        self.width = width;
        self.listeners
            .iter()
            .map(|_| GraphEvent::Resize { width })
            .collect()
    }

    /// Fires every pending timer.
    fn drain_timers(&mut self) -> Vec<GraphEvent> {
        self.timers.sort_by_key(|(_, delay)| *delay);
        self.timers
            .drain(..)
            .map(|(id, delay)| {
                info!("timer {id:?} fired after {delay} ms");
                GraphEvent::TimerFired(id)
            })
            .collect()
    }
}

impl RenderSurface for HeadlessSurface {
    fn measure_width(&self) -> f64 {
        self.width
    }

    fn add_resize_listener(&mut self) -> ListenerId {
        self.next_id += 1;
        let id = ListenerId(self.next_id);
        self.listeners.push(id);
        id
    }

    fn remove_resize_listener(&mut self, id: ListenerId) {
        self.listeners.retain(|l| *l != id);
    }

    fn schedule_once(&mut self, delay_ms: u32) -> TimerId {
        self.next_id += 1;
        let id = TimerId(self.next_id);
        self.timers.push((id, delay_ms));
        id
    }
}

/// Reconciles the graph into the SVG scene and writes a snapshot.
struct Snapshotter {
    out_dir: PathBuf,
    scene: Scene,
    svg: svg::SvgScene,
    step: usize,
}

impl Snapshotter {
    fn new(out_dir: PathBuf) -> Self {
        Self {
            out_dir,
            scene: Scene::new(),
            svg: svg::SvgScene::default(),
            step: 0,
        }
    }

    fn write(&mut self, graph: &InteractiveGraph, name: &str) -> Result<PathBuf> {
        let diffs = graph.frame(&mut self.scene);
        let damage = self.svg.apply_diffs(&diffs);
        self.svg.set_view_box(view_box(graph));

        self.step += 1;
        let path = self.out_dir.join(format!("{:02}_{name}.svg", self.step));
        std::fs::write(&path, self.svg.to_svg_string())
            .with_context(|| format!("failed to write '{}'", path.display()))?;
        info!(
            "{}: {} diffs, {} marks on screen, damage {damage:?}",
            path.display(),
            diffs.len(),
            self.svg.len()
        );
        Ok(path)
    }
}

fn view_box(graph: &InteractiveGraph) -> Rect {
    graph.layout().frame.panel.inflate(8.0, 8.0)
}

fn deliver(graph: &mut InteractiveGraph, events: impl IntoIterator<Item = GraphEvent>) -> bool {
    events
        .into_iter()
        .fold(false, |changed, event| graph.handle(event) | changed)
}

fn main() -> Result<()> {
    env_logger::init();

    let out_dir = std::env::args()
        .nth(1)
        .map_or_else(|| PathBuf::from("driftline_demo_out"), PathBuf::from);
    prepare_dir(&out_dir)?;

    let mut surface = HeadlessSurface::new(720.0);
    let mut graph = InteractiveGraph::new(GraphConfig::default())
        .context("default graph configuration is invalid")?;
    let mut snap = Snapshotter::new(out_dir.clone());

    graph.mount(&mut surface);
    snap.write(&graph, "mounted")?;

    let timers = surface.drain_timers();
    deliver(&mut graph, timers);
    snap.write(&graph, "appeared")?;

    let target = graph
        .layout()
        .primary
        .point(5)
        .context("default data projects fewer than six points")?;
    if graph.handle(GraphEvent::PointerMove(target + Vec2::new(3.0, -2.0))) {
        info!("hovering sample {:?}", graph.hovered());
    }
    snap.write(&graph, "hover")?;

    let resized = surface.resize(480.0);
    deliver(&mut graph, resized);
    snap.write(&graph, "resized")?;

    let button = graph.layout().frame.refresh_button.center();
    graph.handle(GraphEvent::PointerLeave);
    if graph.handle(GraphEvent::Click(button)) {
        info!("refreshed: domain max {}", graph.layout().domain_max);
    }
    snap.write(&graph, "refreshed")?;

    graph.handle(GraphEvent::PointerMove(Point::new(0.0, 0.0)));
    graph.unmount(&mut surface);
    // A host may still deliver late events after teardown; they are ignored.
    let late = deliver(&mut graph, [GraphEvent::Randomize, GraphEvent::TimerFired(TimerId(1))]);
    anyhow::ensure!(!late, "events after unmount must not change the graph");
    anyhow::ensure!(
        surface.listeners.is_empty(),
        "resize listener still registered after unmount"
    );

    println!("wrote {} snapshots to {}", snap.step, out_dir.display());
    Ok(())
}

fn prepare_dir(dir: &Path) -> Result<()> {
    std::fs::create_dir_all(dir)
        .with_context(|| format!("failed to create output directory '{}'", dir.display()))
}
