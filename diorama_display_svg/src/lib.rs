// Copyright 2026 the Diorama Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! SVG export backend for the Diorama display list.
//!
//! Translates a [`DisplayList`] into a standalone SVG document, one element
//! per op, in list order (which is z-order). This is intended for headless
//! inspection, demos, and as a test oracle for render output, not for
//! pixel-perfect parity with an interactive canvas:
//!
//! - Text is emitted as `<text>` with a generic sans-serif stack; exact
//!   metrics are up to the viewer.
//! - Halos become stroked circles; hosts with real glow filters can do
//!   better.
//!
//! ## Minimal example
//!
//! ```
//! use diorama_display::{DisplayList, DisplayOp};
//! use diorama_display_svg::to_svg;
//! use kurbo::{Point, Size};
//! use peniko::Color;
//!
//! let mut list = DisplayList::new();
//! list.push(DisplayOp::Circle {
//!     center: Point::new(50.0, 50.0),
//!     radius: 20.0,
//!     color: Color::from_rgb8(0x33, 0x66, 0x99),
//! });
//!
//! let svg = to_svg(&list, Size::new(100.0, 100.0));
//! assert!(svg.starts_with("<svg"));
//! assert!(svg.contains("<circle"));
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

use alloc::string::String;
use core::fmt::Write as _;
use diorama_display::{DisplayList, DisplayOp, TextAnchor};
use kurbo::Size;
use peniko::Color;

/// Exports a display list as a complete SVG document.
///
/// `size` becomes both the `width`/`height` attributes and the `viewBox`.
#[must_use]
pub fn to_svg(list: &DisplayList, size: Size) -> String {
    let mut out = String::new();
    let w = size.width.max(0.0);
    let h = size.height.max(0.0);
    let _ = write!(
        out,
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\">"
    );

    for op in list.ops() {
        write_op(&mut out, op);
    }

    out.push_str("</svg>");
    out
}

fn write_op(out: &mut String, op: &DisplayOp) {
    match op {
        DisplayOp::Rect {
            rect,
            color,
            corner_radius,
        } => {
            let _ = write!(
                out,
                "<rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" rx=\"{corner_radius}\" fill=\"{}\"/>",
                rect.x0,
                rect.y0,
                rect.width(),
                rect.height(),
                rgba(*color),
            );
        }
        DisplayOp::Circle {
            center,
            radius,
            color,
        } => {
            let _ = write!(
                out,
                "<circle cx=\"{}\" cy=\"{}\" r=\"{radius}\" fill=\"{}\"/>",
                center.x,
                center.y,
                rgba(*color),
            );
        }
        DisplayOp::Line {
            from,
            to,
            width,
            color,
        } => {
            let _ = write!(
                out,
                "<line x1=\"{}\" y1=\"{}\" x2=\"{}\" y2=\"{}\" stroke=\"{}\" stroke-width=\"{width}\" stroke-linecap=\"round\"/>",
                from.x,
                from.y,
                to.x,
                to.y,
                rgba(*color),
            );
        }
        DisplayOp::Polygon { points, color } => {
            out.push_str("<polygon points=\"");
            for (i, p) in points.iter().enumerate() {
                if i > 0 {
                    out.push(' ');
                }
                let _ = write!(out, "{},{}", p.x, p.y);
            }
            let _ = write!(out, "\" fill=\"{}\"/>", rgba(*color));
        }
        DisplayOp::Halo {
            center,
            radius,
            width,
            color,
        } => {
            let _ = write!(
                out,
                "<circle cx=\"{}\" cy=\"{}\" r=\"{radius}\" fill=\"none\" stroke=\"{}\" stroke-width=\"{width}\"/>",
                center.x,
                center.y,
                rgba(*color),
            );
        }
        DisplayOp::Text {
            origin,
            text,
            size,
            color,
            anchor,
        } => {
            let anchor = match anchor {
                TextAnchor::Start => "start",
                TextAnchor::Middle => "middle",
                TextAnchor::End => "end",
            };
            let _ = write!(
                out,
                "<text x=\"{}\" y=\"{}\" font-size=\"{size}\" font-family=\"sans-serif\" text-anchor=\"{anchor}\" fill=\"{}\">",
                origin.x,
                origin.y,
                rgba(*color),
            );
            write_escaped(out, text);
            out.push_str("</text>");
        }
    }
}

/// Formats a color as CSS `rgba(r, g, b, a)` with 8-bit channels.
fn rgba(color: Color) -> String {
    let rgba8 = color.to_rgba8();
    let mut out = String::new();
    let alpha = f32::from(rgba8.a) / 255.0;
    let _ = write!(
        out,
        "rgba({},{},{},{alpha})",
        rgba8.r, rgba8.g, rgba8.b
    );
    out
}

/// Escapes the XML-significant characters of text content.
fn write_escaped(out: &mut String, text: &str) {
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
}
