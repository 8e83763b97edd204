// Copyright 2025 the Driftline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Frame-to-frame reconciliation of marks.

extern crate alloc;

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt;

use hashbrown::HashMap;
use kurbo::Rect;

use crate::animation::Transition;
use crate::mark::{Mark, MarkId, MarkKind, MarkPayload};

/// Mark-level diffs keyed by stable identity.
///
/// Payloads are boxed to keep `MarkDiff` itself reasonably sized.
#[derive(Clone, Debug, PartialEq)]
pub enum MarkDiff {
    /// A mark is newly present.
    Enter {
        /// Stable identifier.
        id: MarkId,
        /// Z-ordering for rendering; higher values are drawn above lower values.
        z_index: i32,
        /// The mark kind.
        kind: MarkKind,
        /// The mark's channels.
        new: Box<MarkPayload>,
        /// How the surface should animate the mark in.
        transitions: Vec<Transition>,
        /// Optional bounds hint for downstream damage calculation.
        bounds: Option<Rect>,
    },
    /// A mark exists and its channels or z-index changed.
    Update {
        /// Stable identifier.
        id: MarkId,
        /// Previous z-index.
        old_z_index: i32,
        /// New z-index.
        new_z_index: i32,
        /// The mark kind.
        kind: MarkKind,
        /// Previous channels.
        old: Box<MarkPayload>,
        /// New channels.
        new: Box<MarkPayload>,
        /// How the surface should animate from the old to the new channels.
        transitions: Vec<Transition>,
        /// Union of the old and new bounds, when both are known.
        damage: Option<Rect>,
    },
    /// A mark was removed.
    Exit {
        /// Stable identifier.
        id: MarkId,
        /// Z-ordering for rendering.
        z_index: i32,
        /// The mark kind.
        kind: MarkKind,
        /// Last channels of the removed mark.
        old: Box<MarkPayload>,
        /// Optional bounds hint for downstream damage calculation.
        bounds: Option<Rect>,
    },
}

impl MarkDiff {
    /// The id of the affected mark.
    pub fn id(&self) -> MarkId {
        match self {
            Self::Enter { id, .. } | Self::Update { id, .. } | Self::Exit { id, .. } => *id,
        }
    }

    /// Returns the best available damage rectangle for this diff.
    pub fn damage(&self) -> Option<Rect> {
        match self {
            Self::Enter { bounds, .. } | Self::Exit { bounds, .. } => *bounds,
            Self::Update { damage, .. } => *damage,
        }
    }

    fn enter(mark: &Mark) -> Self {
        Self::Enter {
            id: mark.id,
            z_index: mark.z_index,
            kind: mark.kind(),
            new: Box::new(mark.payload.clone()),
            transitions: mark.transitions.clone(),
            bounds: mark.payload.bounds(),
        }
    }

    fn exit(mark: Mark) -> Self {
        Self::Exit {
            id: mark.id,
            z_index: mark.z_index,
            kind: mark.kind(),
            bounds: mark.payload.bounds(),
            old: Box::new(mark.payload),
        }
    }
}

/// The set of marks currently presented by a render surface.
#[derive(Default)]
pub struct Scene {
    marks: HashMap<MarkId, Mark>,
}

impl fmt::Debug for Scene {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Scene")
            .field("marks_len", &self.marks.len())
            .finish()
    }
}

impl Scene {
    /// Creates an empty scene.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of marks in the scene.
    pub fn len(&self) -> usize {
        self.marks.len()
    }

    /// Returns `true` if the scene holds no marks.
    pub fn is_empty(&self) -> bool {
        self.marks.is_empty()
    }

    /// Returns the mark with `id`, if present.
    pub fn get(&self, id: MarkId) -> Option<&Mark> {
        self.marks.get(&id)
    }

    /// Marks in paint order: by `(z_index, MarkId)`.
    pub fn marks_in_paint_order(&self) -> Vec<&Mark> {
        let mut out: Vec<&Mark> = self.marks.values().collect();
        out.sort_by_key(|m| (m.z_index, m.id));
        out
    }

    /// Replaces the scene's mark set and returns the diffs.
    ///
    /// `marks` is the complete set for the current frame:
    /// - ids not present before produce `Enter`;
    /// - ids whose payload or z-index changed produce `Update` (unchanged marks produce nothing);
    /// - ids no longer present produce `Exit`, as does a mark whose kind changed (followed by an
    ///   `Enter` for the new kind).
    ///
    /// Exits of removed marks come first, ordered by id, followed by the remaining diffs in the
    /// order of `marks`. If an id appears twice in one frame, the later mark is dropped.
    pub fn tick<I>(&mut self, marks: I) -> Vec<MarkDiff>
    where
        I: IntoIterator<Item = Mark>,
    {
        let mut previous = core::mem::take(&mut self.marks);
        let mut diffs = Vec::new();

        for mark in marks {
            if self.marks.contains_key(&mark.id) {
                log::warn!("duplicate mark id {:?} in one frame; keeping the first", mark.id);
                continue;
            }
            match previous.remove(&mark.id) {
                Some(old) if old.kind() == mark.kind() => {
                    if old.payload != mark.payload || old.z_index != mark.z_index {
                        let damage = union_bounds(old.payload.bounds(), mark.payload.bounds());
                        diffs.push(MarkDiff::Update {
                            id: mark.id,
                            old_z_index: old.z_index,
                            new_z_index: mark.z_index,
                            kind: mark.kind(),
                            old: Box::new(old.payload),
                            new: Box::new(mark.payload.clone()),
                            transitions: mark.transitions.clone(),
                            damage,
                        });
                    }
                }
                Some(old) => {
                    diffs.push(MarkDiff::exit(old));
                    diffs.push(MarkDiff::enter(&mark));
                }
                None => diffs.push(MarkDiff::enter(&mark)),
            }
            self.marks.insert(mark.id, mark);
        }

        let mut removed: Vec<Mark> = previous.into_values().collect();
        removed.sort_by_key(|m| m.id);
        let mut out: Vec<MarkDiff> = removed.into_iter().map(MarkDiff::exit).collect();
        out.extend(diffs);
        out
    }

    /// Removes every mark and returns their `Exit` diffs, ordered by id.
    pub fn clear(&mut self) -> Vec<MarkDiff> {
        self.tick(core::iter::empty())
    }
}

fn union_bounds(a: Option<Rect>, b: Option<Rect>) -> Option<Rect> {
    Some(a?.union(b?))
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::vec;

    use kurbo::Point;
    use peniko::color::palette::css;

    use super::*;
    use crate::mark::{RectChannels, TextChannels};

    fn rect_mark(id: u64, x: f64) -> Mark {
        Mark::rect(
            MarkId(id),
            0,
            RectChannels::filled(Rect::new(x, 0.0, x + 10.0, 10.0), 0.0, css::WHITE),
        )
    }

    #[test]
    fn enter_then_update_only_changed() {
        let mut scene = Scene::new();
        let diffs = scene.tick(vec![rect_mark(1, 0.0), rect_mark(2, 20.0)]);
        assert_eq!(diffs.len(), 2);
        assert!(diffs.iter().all(|d| matches!(d, MarkDiff::Enter { .. })));

        let diffs = scene.tick(vec![rect_mark(1, 0.0), rect_mark(2, 30.0)]);
        assert_eq!(diffs.len(), 1);
        let MarkDiff::Update { id, damage, .. } = &diffs[0] else {
            panic!("expected update, got {diffs:?}");
        };
        assert_eq!(*id, MarkId(2));
        assert_eq!(*damage, Some(Rect::new(20.0, 0.0, 40.0, 10.0)));

        assert!(scene.tick(vec![rect_mark(1, 0.0), rect_mark(2, 30.0)]).is_empty());
    }

    #[test]
    fn removed_marks_exit_first() {
        let mut scene = Scene::new();
        scene.tick(vec![rect_mark(3, 0.0), rect_mark(1, 0.0)]);
        let diffs = scene.tick(vec![rect_mark(5, 0.0)]);
        let ids: Vec<_> = diffs.iter().map(MarkDiff::id).collect();
        assert_eq!(ids, vec![MarkId(1), MarkId(3), MarkId(5)]);
        assert!(matches!(diffs[0], MarkDiff::Exit { .. }));
        assert!(matches!(diffs[2], MarkDiff::Enter { .. }));
        assert_eq!(scene.len(), 1);
    }

    #[test]
    fn kind_change_exits_and_reenters() {
        let mut scene = Scene::new();
        scene.tick(vec![rect_mark(1, 0.0)]);
        let text = Mark::text(
            MarkId(1),
            0,
            TextChannels::new(Point::ZERO, "a", 10.0, css::WHITE),
        );
        let diffs = scene.tick(vec![text]);
        assert_eq!(diffs.len(), 2);
        assert!(matches!(diffs[0], MarkDiff::Exit { kind: MarkKind::Rect, .. }));
        assert!(matches!(diffs[1], MarkDiff::Enter { kind: MarkKind::Text, .. }));
    }

    #[test]
    fn duplicate_ids_keep_first() {
        let mut scene = Scene::new();
        let diffs = scene.tick(vec![rect_mark(1, 0.0), rect_mark(1, 50.0)]);
        assert_eq!(diffs.len(), 1);
        assert_eq!(
            scene.get(MarkId(1)).and_then(Mark::as_rect).map(|r| r.rect.x0),
            Some(0.0)
        );
    }

    #[test]
    fn clear_exits_everything_and_paint_order_sorts() {
        let mut scene = Scene::new();
        let mut top = rect_mark(1, 0.0);
        top.z_index = 10;
        scene.tick(vec![top, rect_mark(2, 0.0)]);
        let order: Vec<_> = scene.marks_in_paint_order().iter().map(|m| m.id).collect();
        assert_eq!(order, vec![MarkId(2), MarkId(1)]);
        let exits = scene.clear();
        assert_eq!(exits.len(), 2);
        assert!(scene.is_empty());
    }
}
