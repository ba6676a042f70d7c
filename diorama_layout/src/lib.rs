// Copyright 2026 the Diorama Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Diorama Layout: pure layout strategies for small fixed diagrams.
//!
//! A [`Layout`] maps an item count and a canvas size to item positions and
//! per-item regions. It performs no drawing and keeps no state: the same
//! inputs always produce the same outputs, so callers are free to relayout
//! on every resize (or every frame) without observable drift.
//!
//! Four strategies cover the diagram shapes Diorama ships:
//!
//! - [`Layout::Ring`]: items on a circle, the first item at twelve o'clock.
//! - [`Layout::Grid`]: row-major cells with margins and gutters.
//! - [`Layout::Row`]: contiguous horizontal panels.
//! - [`Layout::Stack`]: vertical layers, top to bottom.
//!
//! All strategies are total. Degenerate canvas sizes are clamped to the
//! strategy's [`Layout::min_size`] before any geometry is derived, and
//! gutters shrink before items do, so positions never contain NaN and
//! regions never overlap.
//!
//! ## Minimal example
//!
//! ```
//! use diorama_layout::Layout;
//! use kurbo::Size;
//!
//! let layout = Layout::ring();
//! let positions = layout.positions(5, Size::new(400.0, 500.0));
//! assert_eq!(positions.len(), 5);
//!
//! // The first item sits at the top of the ring, horizontally centered.
//! assert!((positions[0].x - 200.0).abs() < 1e-9);
//! assert!(positions[0].y < 250.0);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

use alloc::vec::Vec;
use core::f64::consts::{FRAC_PI_2, PI, TAU};
#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;
use kurbo::{Point, Rect, Size};

/// Smallest per-item extent a strategy will produce before it starts
/// collapsing gutters instead.
const MIN_ITEM_EXTENT: f64 = 8.0;

/// Hard floor for a clamped canvas dimension.
const MIN_CANVAS_EXTENT: f64 = 64.0;

/// A layout strategy: a pure mapping from `(item_count, canvas size)` to
/// item positions and regions.
///
/// Positions are item *centers*. Regions are conservative per-item bounding
/// rectangles suitable for rectangular hit testing and panel drawing.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Layout {
    /// Items on a circle centered in the canvas.
    ///
    /// Item `i` of `n` sits at angle `-π/2 + 2π·i/n`, so the first item is
    /// at twelve o'clock and items proceed clockwise.
    Ring {
        /// Ring radius as a fraction of the smaller canvas dimension.
        radius_fraction: f64,
    },
    /// Row-major grid of cells.
    Grid {
        /// Number of columns. Rows are derived from the item count.
        cols: usize,
        /// Outer margin on all four sides.
        margin: f64,
        /// Gutter between adjacent cells.
        spacing: f64,
    },
    /// Contiguous horizontal panels.
    Row {
        /// Outer margin on the left and right.
        margin: f64,
        /// Gutter between adjacent panels.
        spacing: f64,
        /// Panel height as a fraction of the canvas height.
        height_fraction: f64,
    },
    /// Vertical layers from top to bottom.
    Stack {
        /// Outer margin on all four sides.
        margin: f64,
        /// Gutter between adjacent layers.
        spacing: f64,
    },
}

impl Layout {
    /// A ring with the default radius fraction.
    #[must_use]
    pub const fn ring() -> Self {
        Self::Ring {
            radius_fraction: 0.35,
        }
    }

    /// A grid with the given column count and default margins.
    #[must_use]
    pub const fn grid(cols: usize) -> Self {
        Self::Grid {
            cols,
            margin: 20.0,
            spacing: 10.0,
        }
    }

    /// A horizontal panel row with default margins.
    #[must_use]
    pub const fn row() -> Self {
        Self::Row {
            margin: 20.0,
            spacing: 10.0,
            height_fraction: 0.6,
        }
    }

    /// A vertical layer stack with default margins.
    #[must_use]
    pub const fn stack() -> Self {
        Self::Stack {
            margin: 20.0,
            spacing: 8.0,
        }
    }

    /// The smallest canvas this strategy lays out without further clamping.
    ///
    /// Sizes below this are clamped per-dimension before geometry is
    /// derived; see [`Layout::clamp_size`].
    #[must_use]
    pub fn min_size(&self) -> Size {
        Size::new(MIN_CANVAS_EXTENT, MIN_CANVAS_EXTENT)
    }

    /// Clamps a canvas size to this strategy's minimum, per dimension.
    ///
    /// Non-finite dimensions are replaced by the minimum as well, so the
    /// derived geometry is always finite.
    #[must_use]
    pub fn clamp_size(&self, size: Size) -> Size {
        let min = self.min_size();
        let clamp = |v: f64, lo: f64| if v.is_finite() { v.max(lo) } else { lo };
        Size::new(clamp(size.width, min.width), clamp(size.height, min.height))
    }

    /// Computes the center position of every item.
    ///
    /// Pure and idempotent: the same `(n, size)` always yields the same
    /// positions. Returns an empty list for `n == 0`.
    #[must_use]
    pub fn positions(&self, n: usize, size: Size) -> Vec<Point> {
        (0..n).map(|i| self.region(i, n, size).center()).collect()
    }

    /// Computes the bounding region of item `i` of `n`.
    ///
    /// Regions of distinct items never overlap for any canvas size: gutters
    /// collapse before item extents reach zero, and extents are floored at a
    /// strictly positive value. Ring regions also shrink to stay inside the
    /// clamped canvas instead of spilling past its edges.
    #[must_use]
    pub fn region(&self, i: usize, n: usize, size: Size) -> Rect {
        let size = self.clamp_size(size);
        if n == 0 {
            return Rect::ZERO;
        }
        let i = i.min(n - 1);
        match *self {
            Self::Ring { radius_fraction } => ring_region(i, n, size, radius_fraction),
            Self::Grid {
                cols,
                margin,
                spacing,
            } => grid_region(i, n, size, cols.max(1), margin, spacing),
            Self::Row {
                margin,
                spacing,
                height_fraction,
            } => row_region(i, n, size, margin, spacing, height_fraction),
            Self::Stack { margin, spacing } => stack_region(i, n, size, margin, spacing),
        }
    }
}

/// Splits `total` into `n` equal extents separated by `spacing` gutters
/// inside `margin` on both ends, shrinking the gutter first when the
/// extents would fall below [`MIN_ITEM_EXTENT`].
///
/// Returns `(extent, effective_spacing)`. The extent is floored at `1.0`,
/// so callers never see zero or negative sizes.
fn split_extent(total: f64, n: usize, margin: f64, spacing: f64) -> (f64, f64) {
    debug_assert!(n > 0, "split_extent requires at least one item");
    let n_f = n as f64;
    let gutters = (n - 1) as f64;
    let avail = (total - 2.0 * margin).max(0.0);

    let mut spacing = spacing.max(0.0);
    let mut extent = (avail - gutters * spacing) / n_f;
    if extent < MIN_ITEM_EXTENT && n > 1 {
        spacing = ((avail - n_f * MIN_ITEM_EXTENT) / gutters).max(0.0);
        extent = (avail - gutters * spacing) / n_f;
    }
    (extent.max(1.0), spacing)
}

fn ring_region(i: usize, n: usize, size: Size, radius_fraction: f64) -> Rect {
    let center = Point::new(size.width / 2.0, size.height / 2.0);
    let radius = size.width.min(size.height) * radius_fraction.clamp(0.05, 0.5);
    let angle = -FRAC_PI_2 + TAU * (i as f64) / (n as f64);
    let pos = Point::new(
        center.x + radius * angle.cos(),
        center.y + radius * angle.sin(),
    );

    // Axis-aligned squares around adjacent centers stay disjoint only while
    // the half-extent is at most 1/sqrt(2) of the half-chord: the chord can
    // sit at 45 degrees to the axes (it does for n = 4). 0.7 stays just
    // under that bound. A lone item gets the ring radius.
    let half = if n > 1 {
        (radius * (PI / n as f64).sin() * 0.7).max(MIN_ITEM_EXTENT / 2.0)
    } else {
        radius.max(MIN_ITEM_EXTENT / 2.0)
    };
    // Shrink the region rather than let it spill past the canvas.
    let edge = pos
        .x
        .min(pos.y)
        .min(size.width - pos.x)
        .min(size.height - pos.y);
    let half = half.min(edge.max(1.0));
    Rect::new(pos.x - half, pos.y - half, pos.x + half, pos.y + half)
}

fn grid_region(i: usize, n: usize, size: Size, cols: usize, margin: f64, spacing: f64) -> Rect {
    let rows = n.div_ceil(cols);
    let (cell_w, spacing_x) = split_extent(size.width, cols, margin, spacing);
    let (cell_h, spacing_y) = split_extent(size.height, rows, margin, spacing);

    let col = i % cols;
    let row = i / cols;
    let x = margin + col as f64 * (cell_w + spacing_x);
    let y = margin + row as f64 * (cell_h + spacing_y);
    Rect::new(x, y, x + cell_w, y + cell_h)
}

fn row_region(
    i: usize,
    n: usize,
    size: Size,
    margin: f64,
    spacing: f64,
    height_fraction: f64,
) -> Rect {
    let (panel_w, spacing) = split_extent(size.width, n, margin, spacing);
    let panel_h = (size.height * height_fraction.clamp(0.1, 1.0)).max(MIN_ITEM_EXTENT);
    let x = margin + i as f64 * (panel_w + spacing);
    let y = (size.height - panel_h) / 2.0;
    Rect::new(x, y, x + panel_w, y + panel_h)
}

fn stack_region(i: usize, n: usize, size: Size, margin: f64, spacing: f64) -> Rect {
    let (layer_h, spacing) = split_extent(size.height, n, margin, spacing);
    let x = margin;
    let w = (size.width - 2.0 * margin).max(MIN_ITEM_EXTENT);
    let y = margin + i as f64 * (layer_h + spacing);
    Rect::new(x, y, x + w, y + layer_h)
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    fn overlaps(a: Rect, b: Rect) -> bool {
        a.x0 < b.x1 && b.x0 < a.x1 && a.y0 < b.y1 && b.y0 < a.y1
    }

    fn assert_disjoint(layout: Layout, n: usize, size: Size) {
        let regions: Vec<Rect> = (0..n).map(|i| layout.region(i, n, size)).collect();
        for i in 0..n {
            for j in (i + 1)..n {
                assert!(
                    !overlaps(regions[i], regions[j]),
                    "items {i} and {j} overlap at {size:?}: {:?} vs {:?}",
                    regions[i],
                    regions[j]
                );
            }
        }
    }

    #[test]
    fn ring_first_item_is_at_twelve_oclock() {
        let positions = Layout::ring().positions(5, Size::new(400.0, 500.0));
        assert!((positions[0].x - 200.0).abs() < 1e-9);
        assert!((positions[0].y - (250.0 - 400.0 * 0.35)).abs() < 1e-9);
    }

    #[test]
    fn ring_items_are_evenly_spread() {
        let size = Size::new(400.0, 400.0);
        let positions = Layout::ring().positions(4, size);
        let center = Point::new(200.0, 200.0);
        for p in &positions {
            let r = (*p - center).hypot();
            assert!((r - 140.0).abs() < 1e-9, "radius drifted: {r}");
        }
        // Items 1 and 3 sit on the horizontal diameter.
        assert!((positions[1].y - 200.0).abs() < 1e-9);
        assert!((positions[3].y - 200.0).abs() < 1e-9);
    }

    #[test]
    fn grid_is_row_major() {
        let layout = Layout::grid(3);
        let size = Size::new(600.0, 450.0);
        let regions: Vec<Rect> = (0..6).map(|i| layout.region(i, 6, size)).collect();

        // Index 5 is row 1, col 2.
        assert!(regions[5].x0 > regions[4].x1);
        assert!(regions[5].y0 > regions[2].y1);
        assert_eq!(regions[3].x0, regions[0].x0);
        assert_eq!(regions[5].y0, regions[3].y0);
    }

    #[test]
    fn row_panels_use_the_published_width_formula() {
        let layout = Layout::row();
        let size = Size::new(400.0, 300.0);
        let expected_w = (400.0 - 2.0 * 20.0 - 4.0 * 10.0) / 5.0;
        for i in 0..5 {
            let r = layout.region(i, 5, size);
            assert!((r.width() - expected_w).abs() < 1e-9);
        }
    }

    #[test]
    fn row_panels_stay_contiguous_across_resizes() {
        let layout = Layout::row();
        for width in [750.0, 400.0] {
            let size = Size::new(width, 300.0);
            for i in 0..4 {
                let a = layout.region(i, 5, size);
                let b = layout.region(i + 1, 5, size);
                assert!((b.x0 - a.x1 - 10.0).abs() < 1e-9, "gap drifted at {width}");
            }
            assert_disjoint(layout, 5, size);
        }
    }

    #[test]
    fn positions_are_idempotent() {
        for layout in [
            Layout::ring(),
            Layout::grid(3),
            Layout::row(),
            Layout::stack(),
        ] {
            let size = Size::new(523.0, 377.0);
            assert_eq!(
                layout.positions(5, size),
                layout.positions(5, size),
                "{layout:?} is not a pure function of its inputs"
            );
        }
    }

    #[test]
    fn all_strategies_stay_in_bounds_and_disjoint_over_a_width_sweep() {
        for layout in [
            Layout::ring(),
            Layout::grid(3),
            Layout::row(),
            Layout::stack(),
        ] {
            // Shipped diagrams carry 3 to 10 items; cover every count.
            for n in 3..=10 {
                let mut width = 64.0;
                while width <= 1200.0 {
                    let size = Size::new(width, 450.0);
                    assert_disjoint(layout, n, size);
                    let positions = layout.positions(n, size);
                    for (i, p) in positions.iter().enumerate() {
                        let r = layout.region(i, n, size);
                        assert!(r.width() > 0.0 && r.height() > 0.0);
                        assert!(
                            r.x0 >= 0.0
                                && r.y0 >= 0.0
                                && r.x1 <= size.width
                                && r.y1 <= size.height,
                            "{layout:?} region {i} of {n} spills past {size:?}: {r:?}"
                        );
                        assert!(p.x.is_finite() && p.y.is_finite());
                        assert!(p.x >= 0.0 && p.x <= size.width);
                        assert!(p.y >= 0.0 && p.y <= size.height);
                    }
                    width += 32.0;
                }
            }
        }
    }

    #[test]
    fn four_item_ring_regions_are_disjoint_and_inside_the_canvas() {
        // Four items put adjacent chords at 45 degrees to the axes, the
        // worst case for axis-aligned region separation; the top region is
        // also the one closest to the canvas edge.
        let layout = Layout::ring();
        let size = Size::new(400.0, 400.0);
        assert_disjoint(layout, 4, size);
        for i in 0..4 {
            let r = layout.region(i, 4, size);
            assert!(
                r.x0 >= 0.0 && r.y0 >= 0.0 && r.x1 <= 400.0 && r.y1 <= 400.0,
                "region {i} spills past the canvas: {r:?}"
            );
        }
    }

    #[test]
    fn degenerate_canvases_clamp_instead_of_producing_nan() {
        for layout in [
            Layout::ring(),
            Layout::grid(2),
            Layout::row(),
            Layout::stack(),
        ] {
            for size in [
                Size::new(0.0, 0.0),
                Size::new(-10.0, 40.0),
                Size::new(f64::NAN, f64::INFINITY),
            ] {
                for p in layout.positions(4, size) {
                    assert!(p.x.is_finite() && p.y.is_finite(), "{layout:?} at {size:?}");
                }
            }
        }
    }

    #[test]
    fn narrow_canvases_shrink_spacing_before_items() {
        // 5 panels in 64px: the configured 10px gutters cannot fit, so they
        // collapse while panels keep a positive width.
        let layout = Layout::row();
        let size = Size::new(10.0, 10.0);
        for i in 0..5 {
            let r = layout.region(i, 5, size);
            assert!(r.width() >= 1.0);
        }
        assert_disjoint(layout, 5, size);
    }

    #[test]
    fn zero_items_yield_no_positions() {
        assert!(Layout::ring().positions(0, Size::new(400.0, 400.0)).is_empty());
        assert_eq!(Layout::grid(3).region(0, 0, Size::new(400.0, 400.0)), Rect::ZERO);
    }
}
