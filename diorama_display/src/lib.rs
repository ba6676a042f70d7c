// Copyright 2026 the Diorama Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Diorama Display: a backend-agnostic display list for diagram frames.
//!
//! A frame of a Diorama diagram is a [`DisplayList`]: an ordered sequence of
//! plain-old-data [`DisplayOp`]s whose list order *is* the z-order. The list
//! is produced by the pure [`render`] pass and consumed by thin backends
//! (SVG export, a web canvas adapter, a GPU renderer) that only translate
//! ops, never interpret diagram state.
//!
//! This split keeps the interaction state machine testable with no graphics
//! binding in sight: tests assert on ops, backends stay dumb.
//!
//! # Draw order
//!
//! [`render`] emits ops in the occlusion order a diagram needs:
//!
//! 1. background
//! 2. connectors, with a moving glow dot keyed on the animation phase
//! 3. items, with hover/selection emphasis (halo, enlarged body, brighter
//!    fill), drawn through the diagram's [`ItemGlyph`]
//! 4. the detail overlay, shown when an item is hovered or selected
//!    (selection wins)
//! 5. control affordances (the play/pause toggle)
//!
//! # Glyphs
//!
//! Diagrams differ almost entirely in their per-item icon drawing. That
//! variation lives behind [`ItemGlyph`]; [`DiscGlyph`] (ring diagrams) and
//! [`PanelGlyph`] (grid/row/stack diagrams) cover the shipped shapes, and a
//! custom diagram supplies its own impl plus a data table and nothing else.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod render;

use alloc::string::String;
use alloc::vec::Vec;
use diorama_scene::Item;
use kurbo::{Point, Rect};
use peniko::Color;

pub use render::{Connectors, Control, ControlKind, RenderInput, RenderStyle, render};

/// Horizontal anchoring of a text op relative to its origin.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextAnchor {
    /// Origin is the left edge of the text.
    Start,
    /// Origin is the horizontal center of the text.
    Middle,
    /// Origin is the right edge of the text.
    End,
}

/// One plain-old-data draw command.
///
/// Coordinates are canvas pixels, y down. Paint is a flat [`Color`] per op;
/// translucency goes through the color's alpha.
#[derive(Clone, Debug, PartialEq)]
pub enum DisplayOp {
    /// A filled, optionally rounded, axis-aligned rectangle.
    Rect {
        /// Bounds.
        rect: Rect,
        /// Fill color.
        color: Color,
        /// Corner radius; `0.0` for square corners.
        corner_radius: f64,
    },
    /// A filled circle.
    Circle {
        /// Center.
        center: Point,
        /// Radius.
        radius: f64,
        /// Fill color.
        color: Color,
    },
    /// A stroked line segment.
    Line {
        /// Start point.
        from: Point,
        /// End point.
        to: Point,
        /// Stroke width.
        width: f64,
        /// Stroke color.
        color: Color,
    },
    /// A filled convex polygon (arrowheads, control icons).
    Polygon {
        /// Vertices in order.
        points: Vec<Point>,
        /// Fill color.
        color: Color,
    },
    /// A stroked emphasis ring around a hovered or selected item.
    Halo {
        /// Center.
        center: Point,
        /// Ring radius.
        radius: f64,
        /// Stroke width.
        width: f64,
        /// Stroke color (typically translucent).
        color: Color,
    },
    /// A single line of text.
    Text {
        /// Anchor point; the baseline sits at `origin.y`.
        origin: Point,
        /// The text itself.
        text: String,
        /// Font size in pixels.
        size: f64,
        /// Fill color.
        color: Color,
        /// Horizontal anchoring.
        anchor: TextAnchor,
    },
}

/// An ordered list of draw ops; list order is z-order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DisplayList {
    ops: Vec<DisplayOp>,
}

impl DisplayList {
    /// An empty list.
    #[must_use]
    pub const fn new() -> Self {
        Self { ops: Vec::new() }
    }

    /// Appends an op at the top of the current z-order.
    pub fn push(&mut self, op: DisplayOp) {
        self.ops.push(op);
    }

    /// The ops in draw order.
    #[must_use]
    pub fn ops(&self) -> &[DisplayOp] {
        &self.ops
    }

    /// The number of ops.
    #[must_use]
    pub fn len(&self) -> usize {
        self.ops.len()
    }

    /// Returns `true` if nothing has been pushed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }
}

/// Emphasis applied to an item this frame.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Emphasis {
    /// The pointer is over the item.
    pub hovered: bool,
    /// The item is selected.
    pub selected: bool,
}

impl Emphasis {
    /// Whether any emphasis applies.
    #[must_use]
    pub fn any(self) -> bool {
        self.hovered || self.selected
    }
}

/// Per-diagram icon drawing callback.
///
/// The render pass hands each visible item to the glyph together with its
/// layout region and emphasis; the glyph pushes the item's body and icon
/// onto the list. Glyphs must not touch any state outside the list.
pub trait ItemGlyph {
    /// Draws `item` into `region`.
    fn draw(
        &self,
        item: &Item,
        region: Rect,
        emphasis: Emphasis,
        style: &RenderStyle,
        list: &mut DisplayList,
    );
}

/// Default glyph for ring diagrams: a filled disc with the label beneath.
#[derive(Clone, Copy, Debug, Default)]
pub struct DiscGlyph;

impl ItemGlyph for DiscGlyph {
    fn draw(
        &self,
        item: &Item,
        region: Rect,
        emphasis: Emphasis,
        style: &RenderStyle,
        list: &mut DisplayList,
    ) {
        let center = region.center();
        let scale = if emphasis.any() {
            style.emphasis_scale
        } else {
            1.0
        };
        let radius = region.width().min(region.height()) / 2.0 * scale;
        let fill = if emphasis.any() {
            brighten(item.color, 0.25)
        } else {
            item.color
        };

        list.push(DisplayOp::Circle {
            center,
            radius,
            color: fill,
        });
        list.push(DisplayOp::Text {
            origin: Point::new(center.x, center.y + radius + style.label_size),
            text: item.label.clone(),
            size: style.label_size,
            color: style.label_color,
            anchor: TextAnchor::Middle,
        });
    }
}

/// Default glyph for grid, row, and stack diagrams: a rounded panel with a
/// centered label.
#[derive(Clone, Copy, Debug)]
pub struct PanelGlyph {
    /// Panel corner radius.
    pub corner_radius: f64,
}

impl Default for PanelGlyph {
    fn default() -> Self {
        Self { corner_radius: 6.0 }
    }
}

impl ItemGlyph for PanelGlyph {
    fn draw(
        &self,
        item: &Item,
        region: Rect,
        emphasis: Emphasis,
        style: &RenderStyle,
        list: &mut DisplayList,
    ) {
        let rect = if emphasis.any() {
            region.inflate(style.emphasis_inflate, style.emphasis_inflate)
        } else {
            region
        };
        let fill = if emphasis.any() {
            brighten(item.color, 0.25)
        } else {
            item.color
        };

        list.push(DisplayOp::Rect {
            rect,
            color: fill,
            corner_radius: self.corner_radius,
        });
        let center = rect.center();
        list.push(DisplayOp::Text {
            origin: Point::new(center.x, center.y + style.label_size / 2.0),
            text: item.label.clone(),
            size: style.label_size,
            color: style.label_color,
            anchor: TextAnchor::Middle,
        });
    }
}

/// Lerps a color's RGB components toward white, keeping alpha.
///
/// `amount` is clamped to `[0, 1]`; `0.0` is the input color, `1.0` is
/// white.
#[must_use]
pub fn brighten(color: Color, amount: f32) -> Color {
    let amount = amount.clamp(0.0, 1.0);
    let [r, g, b, a] = color.components;
    Color::new([
        r + (1.0 - r) * amount,
        g + (1.0 - g) * amount,
        b + (1.0 - b) * amount,
        a,
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_list_preserves_push_order() {
        let mut list = DisplayList::new();
        list.push(DisplayOp::Circle {
            center: Point::ZERO,
            radius: 1.0,
            color: Color::WHITE,
        });
        list.push(DisplayOp::Line {
            from: Point::ZERO,
            to: Point::new(1.0, 1.0),
            width: 1.0,
            color: Color::BLACK,
        });
        assert_eq!(list.len(), 2);
        assert!(matches!(list.ops()[0], DisplayOp::Circle { .. }));
        assert!(matches!(list.ops()[1], DisplayOp::Line { .. }));
    }

    #[test]
    fn brighten_moves_toward_white_and_keeps_alpha() {
        let color = Color::new([0.2, 0.4, 0.6, 0.5]);
        let brighter = brighten(color, 0.5);
        assert!((brighter.components[0] - 0.6).abs() < 1e-6);
        assert!((brighter.components[1] - 0.7).abs() < 1e-6);
        assert!((brighter.components[2] - 0.8).abs() < 1e-6);
        assert_eq!(brighter.components[3], 0.5);

        assert_eq!(brighten(color, 0.0), color);
        assert_eq!(brighten(color, 1.0).components[0], 1.0);
    }
}
