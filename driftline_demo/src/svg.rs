// Copyright 2025 the Driftline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Minimal SVG writer for the mark diff stream.

use std::collections::HashMap;

use driftline_core::{
    Easing, MarkDiff, MarkId, MarkPayload, Paint, TextAnchor, TextBaseline, TextWeight,
    Transition, TransitionProperty,
};
use kurbo::Rect;

/// The render-surface side of the diff stream: the marks currently on screen.
#[derive(Debug, Default)]
pub(crate) struct SvgScene {
    marks: HashMap<MarkId, (i32, MarkPayload, Vec<Transition>)>,
    view_box: Option<Rect>,
}

impl SvgScene {
    pub(crate) fn set_view_box(&mut self, view_box: Rect) {
        self.view_box = Some(view_box);
    }

    pub(crate) fn len(&self) -> usize {
        self.marks.len()
    }

    /// Applies `diffs` and returns the area of the view they touch.
    pub(crate) fn apply_diffs(&mut self, diffs: &[MarkDiff]) -> Option<Rect> {
        for diff in diffs {
            match diff {
                MarkDiff::Enter {
                    id,
                    z_index,
                    new,
                    transitions,
                    ..
                } => {
                    self.marks
                        .insert(*id, (*z_index, (**new).clone(), transitions.clone()));
                }
                MarkDiff::Update {
                    id,
                    new_z_index,
                    new,
                    transitions,
                    ..
                } => {
                    self.marks
                        .insert(*id, (*new_z_index, (**new).clone(), transitions.clone()));
                }
                MarkDiff::Exit { id, .. } => {
                    self.marks.remove(id);
                }
            }
        }
        diffs
            .iter()
            .filter_map(MarkDiff::damage)
            .reduce(|a, b| a.union(b))
    }

    pub(crate) fn to_svg_string(&self) -> String {
        let view_box = self
            .view_box
            .or_else(|| self.content_bounds())
            .unwrap_or_else(|| Rect::new(0.0, 0.0, 100.0, 100.0));

        let mut entries: Vec<_> = self.marks.iter().collect();
        entries.sort_by_key(|(id, (z, ..))| (*z, **id));

        let mut defs = String::new();
        let mut body = String::new();
        for (id, (_z, payload, transitions)) in entries {
            let style = transition_style(transitions);
            match payload {
                MarkPayload::Rect(r) => {
                    body.push_str(&format!(
                        r#"<rect x="{}" y="{}" width="{}" height="{}""#,
                        r.rect.x0,
                        r.rect.y0,
                        r.rect.width(),
                        r.rect.height(),
                    ));
                    if r.corner_radius > 0.0 {
                        body.push_str(&format!(r#" rx="{0}" ry="{0}""#, r.corner_radius));
                    }
                    write_paint_attr(&mut body, &mut defs, *id, "fill", &r.fill);
                    if r.stroke_width > 0.0 && !r.stroke.is_none() {
                        write_paint_attr(&mut body, &mut defs, *id, "stroke", &r.stroke);
                        body.push_str(&format!(r#" stroke-width="{}""#, r.stroke_width));
                    }
                    body.push_str(&style);
                    body.push_str("/>\n");
                }
                MarkPayload::Text(t) => {
                    let baseline = match t.baseline {
                        TextBaseline::Middle => "middle",
                        TextBaseline::Alphabetic => "alphabetic",
                    };
                    body.push_str(&format!(
                        r#"<text x="{}" y="{}" font-size="{}" dominant-baseline="{}""#,
                        t.pos.x, t.pos.y, t.font_size, baseline
                    ));
                    body.push_str(match t.anchor {
                        TextAnchor::Start => r#" text-anchor="start""#,
                        TextAnchor::Middle => r#" text-anchor="middle""#,
                        TextAnchor::End => r#" text-anchor="end""#,
                    });
                    body.push_str(match t.weight {
                        TextWeight::Normal => "",
                        TextWeight::Medium => r#" font-weight="500""#,
                        TextWeight::Bold => r#" font-weight="600""#,
                    });
                    write_paint_attr(&mut body, &mut defs, *id, "fill", &t.fill);
                    body.push_str(&style);
                    body.push('>');
                    body.push_str(&escape_xml(&t.text));
                    body.push_str("</text>\n");
                }
                MarkPayload::Path(p) => {
                    body.push_str(&format!(r#"<path d="{}""#, p.path.to_svg()));
                    write_paint_attr(&mut body, &mut defs, *id, "fill", &p.fill);
                    if p.stroke_width > 0.0 && !p.stroke.is_none() {
                        write_paint_attr(&mut body, &mut defs, *id, "stroke", &p.stroke);
                        body.push_str(&format!(r#" stroke-width="{}""#, p.stroke_width));
                    }
                    if p.round {
                        body.push_str(r#" stroke-linecap="round" stroke-linejoin="round""#);
                    }
                    if let Some(dash) = p.dash {
                        body.push_str(&format!(
                            r#" stroke-dasharray="{}" stroke-dashoffset="{}""#,
                            dash.array, dash.offset
                        ));
                    }
                    if p.opacity < 1.0 {
                        body.push_str(&format!(r#" opacity="{}""#, p.opacity));
                    }
                    body.push_str(&style);
                    body.push_str("/>\n");
                }
            }
        }

        let mut out = String::new();
        out.push_str(r#"<svg xmlns="http://www.w3.org/2000/svg" "#);
        out.push_str(&format!(
            "viewBox=\"{} {} {} {}\" width=\"{}\" height=\"{}\">\n",
            view_box.x0,
            view_box.y0,
            view_box.width(),
            view_box.height(),
            view_box.width(),
            view_box.height()
        ));
        if !defs.is_empty() {
            out.push_str("<defs>\n");
            out.push_str(&defs);
            out.push_str("</defs>\n");
        }
        out.push_str(&body);
        out.push_str("</svg>\n");
        out
    }

    fn content_bounds(&self) -> Option<Rect> {
        self.marks
            .values()
            .filter_map(|(_, payload, _)| payload.bounds())
            .reduce(|a, b| a.union(b))
            .map(|r| r.inflate(10.0, 10.0))
    }
}

fn color_attr(color: peniko::Color) -> (String, Option<f64>) {
    let rgba = color.to_rgba8();
    let value = format!("#{:02x}{:02x}{:02x}", rgba.r, rgba.g, rgba.b);
    let opacity = if rgba.a == 255 {
        None
    } else {
        Some(f64::from(rgba.a) / 255.0)
    };
    (value, opacity)
}

/// Writes ` name="…"` for `paint`, adding a gradient definition to `defs` when needed.
fn write_paint_attr(out: &mut String, defs: &mut String, id: MarkId, name: &str, paint: &Paint) {
    match paint {
        Paint::None => out.push_str(&format!(r#" {name}="none""#)),
        Paint::Solid(color) => {
            let (value, opacity) = color_attr(*color);
            out.push_str(&format!(r#" {name}="{value}""#));
            if let Some(o) = opacity {
                out.push_str(&format!(r#" {name}-opacity="{o}""#));
            }
        }
        Paint::VerticalGradient { top, bottom } => {
            let gradient_id = format!("{name}-{}", id.0);
            defs.push_str(&format!(
                "<linearGradient id=\"{gradient_id}\" x1=\"0%\" y1=\"0%\" x2=\"0%\" y2=\"100%\">\n"
            ));
            for (offset, color) in [("0%", top), ("100%", bottom)] {
                let (value, opacity) = color_attr(*color);
                defs.push_str(&format!(
                    "<stop offset=\"{offset}\" stop-color=\"{value}\" stop-opacity=\"{}\"/>\n",
                    opacity.unwrap_or(1.0)
                ));
            }
            defs.push_str("</linearGradient>\n");
            out.push_str(&format!(r#" {name}="url(#{gradient_id})""#));
        }
    }
}

/// Renders transitions as an inline CSS `transition` declaration.
fn transition_style(transitions: &[Transition]) -> String {
    if transitions.is_empty() {
        return String::new();
    }
    let parts: Vec<String> = transitions
        .iter()
        .map(|t| {
            let property = match t.property {
                TransitionProperty::DashOffset => "stroke-dashoffset",
                TransitionProperty::Opacity => "opacity",
                TransitionProperty::Scale | TransitionProperty::TranslateY => "transform",
            };
            let easing = match t.easing {
                Easing::EaseOut => "ease-out",
                Easing::EaseInOut => "cubic-bezier(0.4, 0, 0.2, 1)",
            };
            format!("{property} {}ms {easing} {}ms", t.duration_ms, t.delay_ms)
        })
        .collect();
    format!(r#" style="transition: {}""#, parts.join(", "))
}

fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}
