// Copyright 2026 the Diorama Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Diorama Diagram: the controller a host embeds.
//!
//! A [`Diagram`] owns everything one interactive diagram needs — the
//! [`Scene`], a [`Layout`], hit regions, the [`InteractionState`], a style
//! table, and the per-diagram glyph — behind the small surface a host
//! drives:
//!
//! - [`Diagram::resize`] when the container reports a new size,
//! - [`Diagram::pointer_move`] and [`Diagram::click`] for pointer events,
//! - [`Diagram::tick`] once per frame, then [`Diagram::frame`] to get the
//!   display list for that frame.
//!
//! Tick and frame are deliberately separate operations invoked back to
//! back: advancing the animation clock is a state transition, rendering is
//! a pure read.
//!
//! Hit dispatch goes through one ordered region list, controls first, then
//! items in display order, first match wins. Clicking a control toggles the
//! animation and never disturbs hover or selection; clicking an item
//! toggles its selection; clicking empty canvas clears it. Control regions
//! do not produce item hover.
//!
//! A `Diagram` is a plain value with no interior threading: hosts confine
//! it to one logical task and its handlers and `frame()` interleave in call
//! order.
//!
//! ## Minimal example
//!
//! ```
//! use diorama_diagram::{Diagram, DiagramSpec, ItemHit};
//! use diorama_layout::Layout;
//! use diorama_scene::{ItemSpec, SceneSpec};
//! use kurbo::{Point, Size};
//! use peniko::Color;
//!
//! let mut scene = SceneSpec::new("Two-phase demo.");
//! scene.push(ItemSpec::new("On", Color::from_rgb8(0x4c, 0xaf, 0x50), "on"));
//! scene.push(ItemSpec::new("Off", Color::from_rgb8(0xef, 0x53, 0x50), "off"));
//!
//! let mut diagram = Diagram::new(
//!     DiagramSpec {
//!         scene,
//!         layout: Layout::ring(),
//!         hit: ItemHit::Circle { radius: 35.0 },
//!         ..DiagramSpec::default()
//!     },
//!     Size::new(400.0, 400.0),
//! );
//!
//! let first = diagram.items()[0].position;
//! diagram.click(first);
//! assert_eq!(diagram.state().selected(), Some(0));
//!
//! // Clicking empty canvas clears the selection.
//! diagram.click(Point::new(1.0, 399.0));
//! assert_eq!(diagram.state().selected(), None);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

use alloc::boxed::Box;
use alloc::vec::Vec;
use diorama_display::{
    Connectors, Control, ControlKind, DiscGlyph, DisplayList, ItemGlyph, RenderInput, RenderStyle,
    render,
};
use diorama_hit::{DEFAULT_HIT_RADIUS, HitRegion, hit_test};
use diorama_interact::{AnimationClock, InteractionEvent, InteractionState};
use diorama_layout::Layout;
use diorama_scene::{Item, ItemFlags, Scene, SceneSpec};
use kurbo::{Point, Rect, Size};

/// How items are hit-tested.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ItemHit {
    /// Euclidean distance from the item position, strictly less than
    /// `radius`.
    Circle {
        /// Hit radius in canvas pixels.
        radius: f64,
    },
    /// Axis-aligned containment in the item's layout region.
    Region,
}

impl Default for ItemHit {
    fn default() -> Self {
        Self::Circle {
            radius: DEFAULT_HIT_RADIUS,
        }
    }
}

/// Everything needed to build a [`Diagram`]: the data table plus the small
/// closed set of strategy choices.
pub struct DiagramSpec {
    /// Item rows, descriptions, and the accessibility summary.
    pub scene: SceneSpec,
    /// Layout strategy.
    pub layout: Layout,
    /// Hit-test predicate for items.
    pub hit: ItemHit,
    /// Connector shape.
    pub connectors: Connectors,
    /// Animation clock parameters.
    pub clock: AnimationClock,
    /// Style table.
    pub style: RenderStyle,
    /// Per-item icon drawing.
    pub glyph: Box<dyn ItemGlyph>,
    /// Whether to lay out and draw the play/pause control.
    pub show_controls: bool,
    /// Smallest canvas the diagram accepts; reported sizes clamp up to it.
    pub min_size: Size,
    /// Largest canvas the diagram accepts; reported sizes clamp down to it.
    pub max_size: Size,
}

impl Default for DiagramSpec {
    fn default() -> Self {
        Self {
            scene: SceneSpec::default(),
            layout: Layout::ring(),
            hit: ItemHit::default(),
            connectors: Connectors::default(),
            clock: AnimationClock::default(),
            style: RenderStyle::default(),
            glyph: Box::new(DiscGlyph),
            show_controls: false,
            min_size: Size::new(200.0, 150.0),
            max_size: Size::new(1600.0, 1200.0),
        }
    }
}

impl core::fmt::Debug for DiagramSpec {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("DiagramSpec")
            .field("layout", &self.layout)
            .field("hit", &self.hit)
            .field("connectors", &self.connectors)
            .field("show_controls", &self.show_controls)
            .finish_non_exhaustive()
    }
}

/// One interactive diagram: scene, layout, hit regions, interaction state,
/// and rendering, behind the host-facing event surface.
pub struct Diagram {
    scene: Scene,
    layout: Layout,
    hit: ItemHit,
    connectors: Connectors,
    clock: AnimationClock,
    style: RenderStyle,
    glyph: Box<dyn ItemGlyph>,
    show_controls: bool,
    min_size: Size,
    max_size: Size,

    size: Size,
    state: InteractionState,
    // One ordered hit list: controls first, then items. First match wins.
    controls: Vec<Control>,
    regions: Vec<HitRegion>,
}

impl core::fmt::Debug for Diagram {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Diagram")
            .field("layout", &self.layout)
            .field("size", &self.size)
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}

impl Diagram {
    /// Builds a diagram and lays it out for `initial_size`.
    #[must_use]
    pub fn new(spec: DiagramSpec, initial_size: Size) -> Self {
        let mut diagram = Self {
            scene: Scene::new(spec.scene),
            layout: spec.layout,
            hit: spec.hit,
            connectors: spec.connectors,
            clock: spec.clock,
            style: spec.style,
            glyph: spec.glyph,
            show_controls: spec.show_controls,
            min_size: spec.min_size,
            max_size: spec.max_size,
            size: initial_size,
            state: InteractionState::new(),
            controls: Vec::new(),
            regions: Vec::new(),
        };
        diagram.resize(initial_size);
        diagram
    }

    /// Handles a container resize.
    ///
    /// The reported size is clamped into the configured min/max range per
    /// dimension, the scene is relaid out, and hit regions are recomputed.
    /// Total: degenerate sizes clamp, they never fail.
    pub fn resize(&mut self, size: Size) {
        let clamp = |v: f64, lo: f64, hi: f64| if v.is_finite() { v.clamp(lo, hi) } else { lo };
        self.size = Size::new(
            clamp(size.width, self.min_size.width, self.max_size.width),
            clamp(size.height, self.min_size.height, self.max_size.height),
        );
        self.scene.relayout(&self.layout, self.size);
        self.rebuild_regions();
    }

    /// Handles a pointer move. Returns the hover transitions produced.
    ///
    /// Controls never produce item hover: a pointer over the play/pause
    /// button reads as hovering nothing.
    pub fn pointer_move(&mut self, point: Point) -> Vec<InteractionEvent> {
        let hit = match self.dispatch(point) {
            Hit::Item(i) => Some(i),
            Hit::Control(_) | Hit::Miss => None,
        };
        self.state.pointer_move(hit)
    }

    /// Handles a click. Returns the transitions produced.
    ///
    /// A control hit toggles the animation; an item hit toggles selection;
    /// a miss clears the selection.
    pub fn click(&mut self, point: Point) -> Vec<InteractionEvent> {
        match self.dispatch(point) {
            Hit::Control(ControlKind::PlayPause) => self.state.toggle_animation(),
            Hit::Item(i) => self.state.click(Some(i)),
            Hit::Miss => self.state.click(None),
        }
    }

    /// Flips the play/pause flag, for hosts with out-of-canvas buttons.
    pub fn toggle_animation(&mut self) -> Vec<InteractionEvent> {
        self.state.toggle_animation()
    }

    /// Clears hover, selection, and the animation clock back to startup
    /// state, for hosts with a reset button.
    pub fn reset(&mut self) {
        self.state = InteractionState::new();
    }

    /// Advances the animation clock by one tick while playing.
    ///
    /// Hosts call this once per frame, immediately before [`Diagram::frame`].
    pub fn tick(&mut self) {
        self.state.tick(&self.clock);
    }

    /// Renders the current state into a display list.
    ///
    /// Pure: calling it any number of times without intervening events
    /// yields the same list.
    #[must_use]
    pub fn frame(&self) -> DisplayList {
        render(&RenderInput {
            scene: &self.scene,
            layout: &self.layout,
            state: &self.state,
            clock: &self.clock,
            size: self.size,
            style: &self.style,
            connectors: self.connectors,
            glyph: self.glyph.as_ref(),
            controls: &self.controls,
        })
    }

    /// The static accessibility summary attached at construction.
    #[must_use]
    pub fn summary(&self) -> &str {
        self.scene.summary()
    }

    /// The items in display order, with their current positions.
    #[must_use]
    pub fn items(&self) -> &[Item] {
        self.scene.items()
    }

    /// The current interaction state.
    #[must_use]
    pub fn state(&self) -> &InteractionState {
        &self.state
    }

    /// The current (clamped) canvas size.
    #[must_use]
    pub fn size(&self) -> Size {
        self.size
    }

    /// The item hit regions in hit-test order (excluding controls).
    #[must_use]
    pub fn item_regions(&self) -> &[HitRegion] {
        &self.regions[self.controls.len()..]
    }

    fn dispatch(&self, point: Point) -> Hit {
        match hit_test(point, &self.regions) {
            Some(i) if i < self.controls.len() => Hit::Control(self.controls[i].kind),
            Some(i) => Hit::Item(i - self.controls.len()),
            None => Hit::Miss,
        }
    }

    fn rebuild_regions(&mut self) {
        self.controls.clear();
        if self.show_controls {
            self.controls.push(Control {
                rect: Rect::new(12.0, 12.0, 44.0, 44.0),
                kind: ControlKind::PlayPause,
            });
        }

        self.regions.clear();
        for control in &self.controls {
            self.regions.push(HitRegion::rect(control.rect));
        }

        let n = self.scene.len();
        for (i, item) in self.scene.items().iter().enumerate() {
            let mut region = match self.hit {
                ItemHit::Circle { radius } => HitRegion::circle(item.position, radius),
                ItemHit::Region => HitRegion::rect(self.layout.region(i, n, self.size)),
            };
            if !item.flags.contains(ItemFlags::PICKABLE) {
                region = region.not_pickable();
            }
            self.regions.push(region);
        }

        // Defensive: the item list is fixed, but keep the invariant anyway.
        self.state.sync_len(n);
    }
}

enum Hit {
    Control(ControlKind),
    Item(usize),
    Miss,
}
