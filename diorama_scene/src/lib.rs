// Copyright 2026 the Diorama Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Diorama Scene: the data model behind an interactive diagram.
//!
//! A [`Scene`] is a fixed, ordered list of [`Item`]s built once from a
//! hand-authored [`SceneSpec`]. An item's identity is its index in that
//! list; the list never grows or shrinks after construction. The only
//! mutable field is each item's position, which is recomputed from a
//! [`Layout`] whenever the canvas size changes.
//!
//! Descriptive text is resolved through the spec's description table at
//! construction time. A missing key resolves to [`GENERIC_DESCRIPTION`]
//! rather than an error: a diagram is a purely visual, non-critical
//! component and must never fail over a content gap.
//!
//! ## Minimal example
//!
//! ```
//! use diorama_layout::Layout;
//! use diorama_scene::{ItemSpec, Scene, SceneSpec};
//! use kurbo::Size;
//! use peniko::Color;
//!
//! let mut spec = SceneSpec::new("Three phases on a ring.");
//! spec.describe("plan", "Decide what to do next.");
//! spec.push(ItemSpec::new("Plan", Color::from_rgb8(0x4c, 0xaf, 0x50), "plan"));
//! spec.push(ItemSpec::new("Do", Color::from_rgb8(0x21, 0x96, 0xf3), "do"));
//! spec.push(ItemSpec::new("Check", Color::from_rgb8(0xff, 0x98, 0x00), "check"));
//!
//! let mut scene = Scene::new(spec);
//! assert_eq!(scene.len(), 3);
//! assert_eq!(scene.items()[0].description, "Decide what to do next.");
//! // "do" and "check" were never described and fall back.
//! assert_eq!(scene.items()[1].description, diorama_scene::GENERIC_DESCRIPTION);
//!
//! scene.relayout(&Layout::ring(), Size::new(400.0, 400.0));
//! assert!(scene.items()[0].position.y < 200.0);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;
use diorama_layout::Layout;
use hashbrown::HashMap;
use kurbo::{Point, Size};
use peniko::Color;

/// Fallback description used when an item's description key is absent from
/// the spec's description table.
pub const GENERIC_DESCRIPTION: &str = "No description available.";

bitflags::bitflags! {
    /// Item flags controlling visibility and picking.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct ItemFlags: u8 {
        /// Item is visible (participates in rendering).
        const VISIBLE  = 0b0000_0001;
        /// Item is pickable (participates in hit testing).
        const PICKABLE = 0b0000_0010;
    }
}

impl Default for ItemFlags {
    fn default() -> Self {
        Self::VISIBLE | Self::PICKABLE
    }
}

/// One row of a diagram's hand-authored data table.
#[derive(Clone, Debug)]
pub struct ItemSpec {
    /// Short display label.
    pub label: String,
    /// Display color.
    pub color: Color,
    /// Key into the spec's description table.
    pub description_key: String,
    /// Visibility and picking flags.
    pub flags: ItemFlags,
    /// Free-form string attributes (for example an icon name).
    pub extra: Vec<(String, String)>,
}

impl ItemSpec {
    /// Creates a spec row with default flags and no extras.
    pub fn new(
        label: impl Into<String>,
        color: Color,
        description_key: impl Into<String>,
    ) -> Self {
        Self {
            label: label.into(),
            color,
            description_key: description_key.into(),
            flags: ItemFlags::default(),
            extra: Vec::new(),
        }
    }

    /// Adds a free-form attribute.
    #[must_use]
    pub fn with_extra(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.extra.push((key.into(), value.into()));
        self
    }

    /// Replaces the default flags.
    #[must_use]
    pub fn with_flags(mut self, flags: ItemFlags) -> Self {
        self.flags = flags;
        self
    }
}

/// A complete diagram data table: item rows, a description table, and a
/// static accessibility summary.
#[derive(Clone, Debug, Default)]
pub struct SceneSpec {
    /// Item rows, in display and hit-test order.
    pub items: Vec<ItemSpec>,
    /// Description table keyed by [`ItemSpec::description_key`].
    pub descriptions: Vec<(String, String)>,
    /// A single static text description of the whole diagram, attached once
    /// for non-visual consumption.
    pub summary: String,
}

impl SceneSpec {
    /// Creates an empty spec with the given accessibility summary.
    pub fn new(summary: impl Into<String>) -> Self {
        Self {
            items: Vec::new(),
            descriptions: Vec::new(),
            summary: summary.into(),
        }
    }

    /// Appends an item row.
    pub fn push(&mut self, item: ItemSpec) {
        self.items.push(item);
    }

    /// Adds a description table entry.
    pub fn describe(&mut self, key: impl Into<String>, text: impl Into<String>) {
        self.descriptions.push((key.into(), text.into()));
    }
}

/// One discrete labeled diagram element.
///
/// Everything but `position` is immutable after [`Scene::new`]; `position`
/// is recomputed by [`Scene::relayout`].
#[derive(Clone, Debug)]
pub struct Item {
    /// Short display label.
    pub label: String,
    /// Display color.
    pub color: Color,
    /// Resolved descriptive text (never empty; falls back to
    /// [`GENERIC_DESCRIPTION`]).
    pub description: String,
    /// Center position in canvas coordinates. `(0, 0)` until the first
    /// relayout.
    pub position: Point,
    /// Visibility and picking flags.
    pub flags: ItemFlags,
    /// Free-form string attributes.
    pub extra: HashMap<String, String>,
}

/// A fixed ordered list of items plus the diagram's accessibility summary.
#[derive(Clone, Debug)]
pub struct Scene {
    items: Vec<Item>,
    summary: String,
}

impl Scene {
    /// Builds the item list from a data table.
    ///
    /// Description keys are resolved against the spec's table; missing keys
    /// resolve to [`GENERIC_DESCRIPTION`]. This never fails.
    #[must_use]
    pub fn new(spec: SceneSpec) -> Self {
        let descriptions: HashMap<&str, &str> = spec
            .descriptions
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
            .collect();

        let items = spec
            .items
            .iter()
            .map(|row| Item {
                label: row.label.clone(),
                color: row.color,
                description: descriptions
                    .get(row.description_key.as_str())
                    .copied()
                    .unwrap_or(GENERIC_DESCRIPTION)
                    .into(),
                position: Point::ZERO,
                flags: row.flags,
                extra: row.extra.iter().cloned().collect(),
            })
            .collect();

        Self {
            items,
            summary: spec.summary,
        }
    }

    /// Returns the items in their fixed order.
    #[must_use]
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Returns the number of items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if the scene has no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the static accessibility summary.
    #[must_use]
    pub fn summary(&self) -> &str {
        &self.summary
    }

    /// Recomputes every item's position from a layout strategy.
    ///
    /// Total and idempotent: relayout with the same `(layout, size)` twice
    /// yields identical positions, and degenerate sizes are clamped by the
    /// layout rather than producing invalid geometry.
    pub fn relayout(&mut self, layout: &Layout, size: Size) {
        let positions = layout.positions(self.items.len(), size);
        for (item, position) in self.items.iter_mut().zip(positions) {
            item.position = position;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    fn three_item_spec() -> SceneSpec {
        let mut spec = SceneSpec::new("A three item test diagram.");
        spec.describe("a", "Alpha text.");
        spec.describe("b", "Beta text.");
        spec.push(ItemSpec::new("A", Color::from_rgb8(10, 20, 30), "a"));
        spec.push(ItemSpec::new("B", Color::from_rgb8(40, 50, 60), "b"));
        spec.push(ItemSpec::new("C", Color::from_rgb8(70, 80, 90), "missing"));
        spec
    }

    #[test]
    fn new_resolves_descriptions_with_fallback() {
        let scene = Scene::new(three_item_spec());
        assert_eq!(scene.items()[0].description, "Alpha text.");
        assert_eq!(scene.items()[1].description, "Beta text.");
        assert_eq!(scene.items()[2].description, GENERIC_DESCRIPTION);
    }

    #[test]
    fn item_order_follows_the_data_table() {
        let scene = Scene::new(three_item_spec());
        let labels: Vec<&str> = scene.items().iter().map(|i| i.label.as_str()).collect();
        assert_eq!(labels, ["A", "B", "C"]);
    }

    #[test]
    fn summary_is_attached_once() {
        let scene = Scene::new(three_item_spec());
        assert_eq!(scene.summary(), "A three item test diagram.");
    }

    #[test]
    fn extras_round_trip_into_the_item_map() {
        let mut spec = SceneSpec::new("extras");
        spec.push(
            ItemSpec::new("A", Color::from_rgb8(1, 2, 3), "a").with_extra("icon", "gear"),
        );
        let scene = Scene::new(spec);
        assert_eq!(
            scene.items()[0].extra.get("icon").map(String::as_str),
            Some("gear")
        );
    }

    #[test]
    fn relayout_is_idempotent() {
        let mut scene = Scene::new(three_item_spec());
        let layout = Layout::ring();
        let size = Size::new(400.0, 500.0);

        scene.relayout(&layout, size);
        let first: Vec<Point> = scene.items().iter().map(|i| i.position).collect();
        scene.relayout(&layout, size);
        let second: Vec<Point> = scene.items().iter().map(|i| i.position).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn relayout_only_touches_positions() {
        let mut scene = Scene::new(three_item_spec());
        let before = scene.items()[0].clone();
        scene.relayout(&Layout::row(), Size::new(640.0, 480.0));
        let after = &scene.items()[0];
        assert_eq!(before.label, after.label);
        assert_eq!(before.description, after.description);
        assert_eq!(before.flags, after.flags);
        assert_ne!(before.position, after.position);
    }
}
