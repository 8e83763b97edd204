// Copyright 2025 the Driftline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Render-facing marks.
//!
//! A [`Mark`] is one visual item of the graph: a stable [`MarkId`], a z-index, the evaluated
//! [`MarkPayload`] in plot coordinates, and the transitions the render surface should use when
//! the item first appears.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use kurbo::{BezPath, Point, Rect, Shape};
use peniko::Color;

use crate::animation::Transition;

/// Stable identifier for a [`Mark`].
///
/// Ids must stay stable across frames for the same conceptual item; this is what makes
/// `Enter/Update/Exit` diffs and smooth transitions possible.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MarkId(pub u64);

impl MarkId {
    /// Creates a mark id from a raw value.
    pub const fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    /// The id of the `index`-th item of a group whose ids start at `self`.
    pub const fn offset(self, index: usize) -> Self {
        Self(self.0.wrapping_add(index as u64))
    }
}

/// The geometric kind of a mark, which determines how its payload is interpreted.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MarkKind {
    /// A rounded rectangle using [`RectChannels`].
    Rect,
    /// A text item positioned at a point.
    Text,
    /// A vector path.
    Path,
}

/// Fill or stroke paint.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum Paint {
    /// Nothing is painted.
    #[default]
    None,
    /// A single colour.
    Solid(Color),
    /// A top-to-bottom linear gradient over the mark's bounds.
    VerticalGradient {
        /// Colour at the top edge.
        top: Color,
        /// Colour at the bottom edge.
        bottom: Color,
    },
}

impl Paint {
    /// Returns `true` if this paint draws nothing.
    pub fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }
}

impl From<Color> for Paint {
    fn from(color: Color) -> Self {
        Self::Solid(color)
    }
}

/// Evaluated per-kind channels for a mark.
#[derive(Clone, Debug, PartialEq)]
pub enum MarkPayload {
    /// A rounded rectangle.
    Rect(RectChannels),
    /// A text item.
    Text(TextChannels),
    /// A vector path.
    Path(PathChannels),
}

impl MarkPayload {
    /// Returns the kind of this payload.
    pub fn kind(&self) -> MarkKind {
        match self {
            Self::Rect(_) => MarkKind::Rect,
            Self::Text(_) => MarkKind::Text,
            Self::Path(_) => MarkKind::Path,
        }
    }

    /// Bounds hint for downstream damage calculation.
    pub fn bounds(&self) -> Option<Rect> {
        match self {
            Self::Rect(r) => Some(r.rect),
            // Text is shaped downstream; bounds are not known here.
            Self::Text(_) => None,
            Self::Path(p) => Some(p.path.bounding_box()),
        }
    }
}

/// Evaluated channels for [`MarkKind::Rect`].
#[derive(Clone, Debug, PartialEq)]
pub struct RectChannels {
    /// Rectangle geometry.
    pub rect: Rect,
    /// Corner radius.
    pub corner_radius: f64,
    /// Fill paint.
    pub fill: Paint,
    /// Stroke paint.
    pub stroke: Paint,
    /// Stroke width.
    pub stroke_width: f64,
}

impl RectChannels {
    /// A filled rectangle without stroke.
    pub fn filled(rect: Rect, corner_radius: f64, fill: impl Into<Paint>) -> Self {
        Self {
            rect,
            corner_radius,
            fill: fill.into(),
            stroke: Paint::None,
            stroke_width: 0.0,
        }
    }

    /// Sets the stroke.
    pub fn with_stroke(mut self, stroke: impl Into<Paint>, width: f64) -> Self {
        self.stroke = stroke.into();
        self.stroke_width = width;
        self
    }
}

/// Evaluated channels for [`MarkKind::Text`].
#[derive(Clone, Debug, PartialEq)]
pub struct TextChannels {
    /// Anchor position.
    pub pos: Point,
    /// Text content (unshaped).
    pub text: String,
    /// Font size in pixels.
    pub font_size: f64,
    /// Horizontal anchoring relative to `pos`.
    pub anchor: TextAnchor,
    /// Vertical alignment relative to `pos`.
    pub baseline: TextBaseline,
    /// Font weight.
    pub weight: TextWeight,
    /// Fill paint.
    pub fill: Paint,
}

impl TextChannels {
    /// Start-anchored text on the alphabetic baseline.
    pub fn new(
        pos: Point,
        text: impl Into<String>,
        font_size: f64,
        fill: impl Into<Paint>,
    ) -> Self {
        Self {
            pos,
            text: text.into(),
            font_size,
            anchor: TextAnchor::Start,
            baseline: TextBaseline::Alphabetic,
            weight: TextWeight::Normal,
            fill: fill.into(),
        }
    }

    /// Sets the horizontal anchor.
    pub fn anchored(mut self, anchor: TextAnchor) -> Self {
        self.anchor = anchor;
        self
    }

    /// Sets the vertical alignment.
    pub fn with_baseline(mut self, baseline: TextBaseline) -> Self {
        self.baseline = baseline;
        self
    }

    /// Sets the font weight.
    pub fn with_weight(mut self, weight: TextWeight) -> Self {
        self.weight = weight;
        self
    }
}

/// Horizontal anchoring for text.
///
/// In SVG terms, this maps to the `text-anchor` attribute.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TextAnchor {
    /// Anchor at the start (left in LTR).
    Start,
    /// Anchor in the middle.
    Middle,
    /// Anchor at the end (right in LTR).
    End,
}

/// Vertical alignment for text.
///
/// In SVG terms, this maps to the `dominant-baseline` attribute.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TextBaseline {
    /// Centered on the anchor point.
    Middle,
    /// The font's alphabetic baseline.
    Alphabetic,
}

/// Font weight for text.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TextWeight {
    /// Regular weight.
    Normal,
    /// Medium weight, used for tooltip values.
    Medium,
    /// Bold weight, used for headings.
    Bold,
}

/// Dash pattern for a stroke.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StrokeDash {
    /// Length of dashes and gaps.
    pub array: f64,
    /// Offset into the pattern.
    pub offset: f64,
}

/// Evaluated channels for [`MarkKind::Path`].
#[derive(Clone, Debug, PartialEq)]
pub struct PathChannels {
    /// The vector path geometry.
    pub path: BezPath,
    /// Fill paint.
    pub fill: Paint,
    /// Stroke paint.
    pub stroke: Paint,
    /// Stroke width.
    pub stroke_width: f64,
    /// Optional dash pattern.
    pub dash: Option<StrokeDash>,
    /// Round caps and joins.
    pub round: bool,
    /// Overall opacity in `[0, 1]`.
    pub opacity: f64,
}

impl PathChannels {
    /// A filled path without stroke.
    pub fn filled(path: BezPath, fill: impl Into<Paint>) -> Self {
        Self {
            path,
            fill: fill.into(),
            stroke: Paint::None,
            stroke_width: 0.0,
            dash: None,
            round: false,
            opacity: 1.0,
        }
    }

    /// A stroked path without fill.
    pub fn stroked(path: BezPath, stroke: impl Into<Paint>, width: f64) -> Self {
        Self {
            path,
            fill: Paint::None,
            stroke: stroke.into(),
            stroke_width: width,
            dash: None,
            round: false,
            opacity: 1.0,
        }
    }

    /// Sets the stroke on an existing path.
    pub fn with_stroke(mut self, stroke: impl Into<Paint>, width: f64) -> Self {
        self.stroke = stroke.into();
        self.stroke_width = width;
        self
    }

    /// Sets the dash pattern.
    pub fn with_dash(mut self, dash: StrokeDash) -> Self {
        self.dash = Some(dash);
        self
    }

    /// Uses round caps and joins.
    pub fn rounded(mut self) -> Self {
        self.round = true;
        self
    }

    /// Sets the opacity.
    pub fn with_opacity(mut self, opacity: f64) -> Self {
        self.opacity = opacity;
        self
    }
}

/// One visual item of the graph.
#[derive(Clone, Debug, PartialEq)]
pub struct Mark {
    /// Stable identifier.
    pub id: MarkId,
    /// Z-ordering for rendering; higher values are drawn above lower values.
    pub z_index: i32,
    /// Evaluated channels in plot coordinates.
    pub payload: MarkPayload,
    /// How the surface should animate into this state when the mark first appears.
    pub transitions: Vec<Transition>,
}

impl Mark {
    /// Creates a mark without transitions.
    pub fn new(id: MarkId, z_index: i32, payload: MarkPayload) -> Self {
        Self {
            id,
            z_index,
            payload,
            transitions: Vec::new(),
        }
    }

    /// A rect mark.
    pub fn rect(id: MarkId, z_index: i32, channels: RectChannels) -> Self {
        Self::new(id, z_index, MarkPayload::Rect(channels))
    }

    /// A text mark.
    pub fn text(id: MarkId, z_index: i32, channels: TextChannels) -> Self {
        Self::new(id, z_index, MarkPayload::Text(channels))
    }

    /// A path mark.
    pub fn path(id: MarkId, z_index: i32, channels: PathChannels) -> Self {
        Self::new(id, z_index, MarkPayload::Path(channels))
    }

    /// Attaches transitions.
    pub fn with_transitions(mut self, transitions: impl IntoIterator<Item = Transition>) -> Self {
        self.transitions.extend(transitions);
        self
    }

    /// Returns the kind of this mark.
    pub fn kind(&self) -> MarkKind {
        self.payload.kind()
    }

    /// Returns the text payload, if this is a text mark.
    pub fn as_text(&self) -> Option<&TextChannels> {
        match &self.payload {
            MarkPayload::Text(t) => Some(t),
            _ => None,
        }
    }

    /// Returns the path payload, if this is a path mark.
    pub fn as_path(&self) -> Option<&PathChannels> {
        match &self.payload {
            MarkPayload::Path(p) => Some(p),
            _ => None,
        }
    }

    /// Returns the rect payload, if this is a rect mark.
    pub fn as_rect(&self) -> Option<&RectChannels> {
        match &self.payload {
            MarkPayload::Rect(r) => Some(r),
            _ => None,
        }
    }
}
