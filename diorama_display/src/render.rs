// Copyright 2026 the Diorama Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The pure render pass: interaction state in, display list out.

use alloc::vec::Vec;
use diorama_interact::{AnimationClock, InteractionState};
use diorama_layout::Layout;
use diorama_scene::{ItemFlags, Scene};
use kurbo::{Point, Rect, Size, Vec2};
use peniko::Color;

use crate::{DisplayList, DisplayOp, Emphasis, ItemGlyph, TextAnchor};

/// How items are visually connected.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Connectors {
    /// No connectors (e.g. taxonomy grids).
    #[default]
    None,
    /// A closed loop: item `i` connects to item `i + 1`, the last item back
    /// to the first (cyclic process flows).
    Cycle,
    /// An open chain with arrowheads: item `i` points at item `i + 1`
    /// (pipelines, layer stacks).
    Sequence,
}

/// The kind of a control affordance.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ControlKind {
    /// Toggles the animation clock.
    PlayPause,
}

/// A control affordance: a screen region plus its meaning.
///
/// Controls are laid out by the diagram controller (they depend on canvas
/// size, not on items) and drawn last so they sit above everything else.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Control {
    /// Bounds in canvas coordinates.
    pub rect: Rect,
    /// What the control does.
    pub kind: ControlKind,
}

/// Colors and metrics for a diagram frame.
#[derive(Clone, Debug)]
pub struct RenderStyle {
    /// Canvas background fill.
    pub background: Color,
    /// Connector stroke color.
    pub connector: Color,
    /// Connector stroke width.
    pub connector_width: f64,
    /// Moving glow dot color.
    pub glow: Color,
    /// Glow dot radius.
    pub glow_radius: f64,
    /// Scale applied to an emphasized item's body.
    pub emphasis_scale: f64,
    /// Outward inflation of an emphasized panel, in pixels.
    pub emphasis_inflate: f64,
    /// Halo ring color (typically translucent).
    pub halo: Color,
    /// Halo stroke width.
    pub halo_width: f64,
    /// Label font size.
    pub label_size: f64,
    /// Label fill color.
    pub label_color: Color,
    /// Overlay panel fill.
    pub overlay_fill: Color,
    /// Overlay text color.
    pub overlay_text: Color,
    /// Overlay panel height.
    pub overlay_height: f64,
    /// Control affordance fill.
    pub control_fill: Color,
    /// Control icon color.
    pub control_icon: Color,
}

impl Default for RenderStyle {
    fn default() -> Self {
        Self {
            background: Color::from_rgb8(0xf5, 0xf5, 0xf0),
            connector: Color::from_rgb8(0x8a, 0x8a, 0x8a),
            connector_width: 2.0,
            glow: Color::from_rgb8(0xff, 0xd5, 0x4f),
            glow_radius: 6.0,
            emphasis_scale: 1.15,
            emphasis_inflate: 4.0,
            halo: Color::from_rgb8(0xff, 0xd5, 0x4f).with_alpha(0.6),
            halo_width: 4.0,
            label_size: 14.0,
            label_color: Color::from_rgb8(0x20, 0x20, 0x20),
            overlay_fill: Color::from_rgb8(0x28, 0x28, 0x30).with_alpha(0.92),
            overlay_text: Color::from_rgb8(0xfa, 0xfa, 0xfa),
            overlay_height: 64.0,
            control_fill: Color::from_rgb8(0x40, 0x40, 0x48),
            control_icon: Color::from_rgb8(0xfa, 0xfa, 0xfa),
        }
    }
}

/// Everything [`render`] reads. All references; the pass owns nothing.
#[derive(Clone, Copy)]
pub struct RenderInput<'a> {
    /// The scene (items with laid-out positions).
    pub scene: &'a Scene,
    /// The layout strategy, used to derive per-item regions.
    pub layout: &'a Layout,
    /// Current interaction state.
    pub state: &'a InteractionState,
    /// The diagram's animation clock (normalizes the phase for the glow).
    pub clock: &'a AnimationClock,
    /// Current canvas size.
    pub size: Size,
    /// Style table.
    pub style: &'a RenderStyle,
    /// Connector shape.
    pub connectors: Connectors,
    /// Per-item icon drawing.
    pub glyph: &'a dyn ItemGlyph,
    /// Control affordances, already laid out.
    pub controls: &'a [Control],
}

/// Renders one frame.
///
/// Pure and idempotent on the data model: the same input produces the same
/// list, and nothing is mutated. Advancing the animation phase is the
/// controller's tick step, deliberately separate from this call.
#[must_use]
pub fn render(input: &RenderInput<'_>) -> DisplayList {
    let mut list = DisplayList::new();
    let style = input.style;
    let n = input.scene.len();

    // 1. Background.
    list.push(DisplayOp::Rect {
        rect: input.size.to_rect(),
        color: style.background,
        corner_radius: 0.0,
    });

    // 2. Connectors, then the glow dot so it rides on top of them.
    let centers: Vec<Point> = input.scene.items().iter().map(|i| i.position).collect();
    match input.connectors {
        Connectors::None => {}
        Connectors::Cycle => {
            push_connectors(&mut list, &centers, true, style, false);
        }
        Connectors::Sequence => {
            push_connectors(&mut list, &centers, false, style, true);
        }
    }
    if input.state.animating()
        && input.connectors != Connectors::None
        && centers.len() > 1
        && input.clock.period > 0.0
    {
        let t = input.state.phase() / input.clock.period;
        let closed = input.connectors == Connectors::Cycle;
        if let Some(center) = point_along(&centers, closed, t) {
            list.push(DisplayOp::Circle {
                center,
                radius: style.glow_radius,
                color: style.glow,
            });
        }
    }

    // 3. Items, in list order, through the diagram's glyph.
    for (i, item) in input.scene.items().iter().enumerate() {
        if !item.flags.contains(ItemFlags::VISIBLE) {
            continue;
        }
        let emphasis = Emphasis {
            hovered: input.state.hovered() == Some(i),
            selected: input.state.selected() == Some(i),
        };
        let region = input.layout.region(i, n, input.size);
        if emphasis.any() {
            let radius =
                region.width().min(region.height()) / 2.0 * style.emphasis_scale + style.halo_width;
            list.push(DisplayOp::Halo {
                center: region.center(),
                radius,
                width: style.halo_width,
                color: style.halo,
            });
        }
        input.glyph.draw(item, region, emphasis, style, &mut list);
    }

    // 4. Detail overlay; selection takes precedence over hover.
    if let Some(i) = input.state.detail()
        && let Some(item) = input.scene.items().get(i)
    {
        push_overlay(&mut list, input.size, style, &item.label, &item.description);
    }

    // 5. Controls on top of everything.
    for control in input.controls {
        push_control(&mut list, control, input.state.animating(), style);
    }

    list
}

fn push_connectors(
    list: &mut DisplayList,
    centers: &[Point],
    closed: bool,
    style: &RenderStyle,
    arrowheads: bool,
) {
    if centers.len() < 2 {
        return;
    }
    let last = centers.len() - 1;
    for i in 0..centers.len() {
        let (from, to) = if i < last {
            (centers[i], centers[i + 1])
        } else if closed {
            (centers[last], centers[0])
        } else {
            break;
        };
        list.push(DisplayOp::Line {
            from,
            to,
            width: style.connector_width,
            color: style.connector,
        });
        if arrowheads {
            push_arrowhead(list, from, to, style);
        }
    }
}

/// A small triangle at the midpoint of `from → to`, pointing at `to`.
///
/// Heads sit at the midpoint rather than the endpoint so item bodies do not
/// occlude them.
fn push_arrowhead(list: &mut DisplayList, from: Point, to: Point, style: &RenderStyle) {
    let dir = to - from;
    let len = dir.hypot();
    if len < 1e-9 {
        return;
    }
    let dir = dir / len;
    let normal = Vec2::new(-dir.y, dir.x);
    let tip = from.midpoint(to) + dir * style.connector_width * 3.0;
    let base = tip - dir * style.connector_width * 6.0;
    let half = style.connector_width * 3.0;

    list.push(DisplayOp::Polygon {
        points: Vec::from([tip, base + normal * half, base - normal * half]),
        color: style.connector,
    });
}

/// Maps `t` in `[0, 1)` to a point along the polyline through `centers`.
///
/// Distances are arc-length along the chain; `closed` appends the segment
/// back to the start. `t` outside the unit interval wraps.
fn point_along(centers: &[Point], closed: bool, t: f64) -> Option<Point> {
    if centers.len() < 2 {
        return None;
    }

    let mut segments: Vec<(Point, Point)> = Vec::with_capacity(centers.len());
    for pair in centers.windows(2) {
        segments.push((pair[0], pair[1]));
    }
    if closed {
        segments.push((centers[centers.len() - 1], centers[0]));
    }

    let lengths: Vec<f64> = segments.iter().map(|(a, b)| (*b - *a).hypot()).collect();
    let total: f64 = lengths.iter().sum();
    if total < 1e-9 {
        return Some(centers[0]);
    }

    let mut remaining = t.rem_euclid(1.0) * total;
    for ((a, b), len) in segments.iter().zip(&lengths) {
        if remaining <= *len {
            let u = if *len > 0.0 { remaining / *len } else { 0.0 };
            return Some(*a + (*b - *a) * u);
        }
        remaining -= *len;
    }
    Some(centers[0])
}

fn push_overlay(
    list: &mut DisplayList,
    size: Size,
    style: &RenderStyle,
    label: &str,
    description: &str,
) {
    let margin = 12.0;
    let rect = Rect::new(
        margin,
        size.height - style.overlay_height - margin,
        size.width - margin,
        size.height - margin,
    );
    list.push(DisplayOp::Rect {
        rect,
        color: style.overlay_fill,
        corner_radius: 8.0,
    });
    list.push(DisplayOp::Text {
        origin: Point::new(rect.x0 + 12.0, rect.y0 + style.label_size + 8.0),
        text: label.into(),
        size: style.label_size,
        color: style.overlay_text,
        anchor: TextAnchor::Start,
    });
    list.push(DisplayOp::Text {
        origin: Point::new(rect.x0 + 12.0, rect.y0 + style.label_size * 2.0 + 14.0),
        text: description.into(),
        size: style.label_size - 2.0,
        color: style.overlay_text,
        anchor: TextAnchor::Start,
    });
}

fn push_control(list: &mut DisplayList, control: &Control, animating: bool, style: &RenderStyle) {
    let rect = control.rect;
    list.push(DisplayOp::Rect {
        rect,
        color: style.control_fill,
        corner_radius: 4.0,
    });

    match control.kind {
        ControlKind::PlayPause => {
            let inset = rect.width().min(rect.height()) * 0.28;
            let inner = rect.inflate(-inset, -inset);
            if animating {
                // Two pause bars.
                let bar_w = inner.width() / 3.0;
                for x0 in [inner.x0, inner.x1 - bar_w] {
                    list.push(DisplayOp::Rect {
                        rect: Rect::new(x0, inner.y0, x0 + bar_w, inner.y1),
                        color: style.control_icon,
                        corner_radius: 1.0,
                    });
                }
            } else {
                // Play triangle.
                list.push(DisplayOp::Polygon {
                    points: Vec::from([
                        Point::new(inner.x0, inner.y0),
                        Point::new(inner.x1, inner.center().y),
                        Point::new(inner.x0, inner.y1),
                    ]),
                    color: style.control_icon,
                });
            }
        }
    }
}
