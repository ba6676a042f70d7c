// Copyright 2026 the Diorama Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Diorama Hit: ordered point-in-region queries for small diagrams.
//!
//! A diagram keeps one ordered list of [`HitRegion`]s (controls first, then
//! items in display order) and asks which region, if any, encloses a pointer
//! coordinate. Two predicates are supported:
//!
//! - **Circle**: Euclidean distance from the region center strictly less
//!   than its radius ([`DEFAULT_HIT_RADIUS`] when unspecified).
//! - **Rect**: axis-aligned containment, edges inclusive.
//!
//! When regions overlap, the *first* matching region in list order wins.
//! This is a load-bearing tie-break: small regions (buttons) may overlap
//! larger ones, and first-match-wins determines which is reachable. Callers
//! therefore order their region lists deliberately and this crate never
//! reorders them.
//!
//! Queries are total: any point, including one far outside the canvas,
//! simply tests to `None`.
//!
//! ## Minimal example
//!
//! ```
//! use diorama_hit::{HitRegion, hit_test};
//! use kurbo::{Point, Rect};
//!
//! let regions = [
//!     HitRegion::circle(Point::new(100.0, 100.0), 35.0),
//!     HitRegion::rect(Rect::new(80.0, 80.0, 300.0, 300.0)),
//! ];
//!
//! // Both regions contain (100, 100); the lower index wins.
//! assert_eq!(hit_test(Point::new(100.0, 100.0), &regions), Some(0));
//! assert_eq!(hit_test(Point::new(250.0, 250.0), &regions), Some(1));
//! assert_eq!(hit_test(Point::new(-5.0, 9000.0), &regions), None);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

use kurbo::{Point, Rect};
use smallvec::SmallVec;

/// Default radius for circular hit regions, in canvas pixels.
pub const DEFAULT_HIT_RADIUS: f64 = 35.0;

/// The containment predicate of a region.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum HitShape {
    /// Euclidean distance from `center` strictly less than `radius`.
    Circle {
        /// Region center.
        center: Point,
        /// Hit radius.
        radius: f64,
    },
    /// Axis-aligned containment, edges inclusive.
    Rect(Rect),
}

/// One entry in a diagram's ordered hit-region list.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HitRegion {
    /// Containment predicate.
    pub shape: HitShape,
    /// Whether this region participates in hit testing at all.
    ///
    /// Non-pickable regions keep their slot in the list (so indices stay
    /// aligned with item indices) but never match.
    pub pickable: bool,
}

impl HitRegion {
    /// A circular region with an explicit radius.
    #[must_use]
    pub const fn circle(center: Point, radius: f64) -> Self {
        Self {
            shape: HitShape::Circle { center, radius },
            pickable: true,
        }
    }

    /// A rectangular region.
    #[must_use]
    pub const fn rect(rect: Rect) -> Self {
        Self {
            shape: HitShape::Rect(rect),
            pickable: true,
        }
    }

    /// Marks the region as non-pickable while keeping its list slot.
    #[must_use]
    pub const fn not_pickable(mut self) -> Self {
        self.pickable = false;
        self
    }

    /// Returns `true` if this region contains `point` and is pickable.
    #[must_use]
    pub fn contains(&self, point: Point) -> bool {
        if !self.pickable {
            return false;
        }
        match self.shape {
            HitShape::Circle { center, radius } => {
                // Compare squared distances; no sqrt needed.
                (point - center).hypot2() < radius * radius
            }
            HitShape::Rect(rect) => {
                point.x >= rect.x0 && point.x <= rect.x1
                    && point.y >= rect.y0
                    && point.y <= rect.y1
            }
        }
    }
}

/// Returns the index of the first region containing `point`, or `None`.
///
/// Iterates in list order; overlapping regions resolve to the lower index.
#[must_use]
pub fn hit_test(point: Point, regions: &[HitRegion]) -> Option<usize> {
    regions.iter().position(|r| r.contains(point))
}

/// Returns the indices of *all* regions containing `point`, in list order.
///
/// Intended for diagnostics and tests; interactive dispatch uses
/// [`hit_test`]. Diagram region counts are small by construction, so the
/// result rarely spills to the heap.
#[must_use]
pub fn hit_test_all(point: Point, regions: &[HitRegion]) -> SmallVec<[usize; 4]> {
    regions
        .iter()
        .enumerate()
        .filter(|(_, r)| r.contains(point))
        .map(|(i, _)| i)
        .collect()
}
