// Copyright 2026 the Diorama Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Diorama Gallery: the built-in educational diagrams.
//!
//! Each function here returns a [`DiagramSpec`]: a hand-authored data table
//! (labels, colors, descriptions, an accessibility summary) plus a choice
//! from the small closed set of strategies — layout, hit predicate,
//! connector shape, clock, glyph. No diagram carries any logic of its own;
//! everything interactive comes from `diorama_diagram`.
//!
//! ```
//! use diorama_diagram::Diagram;
//! use diorama_gallery::cycle_flow;
//! use kurbo::Size;
//!
//! let diagram = Diagram::new(cycle_flow(), Size::new(400.0, 500.0));
//! assert_eq!(diagram.items().len(), 5);
//! assert!(!diagram.summary().is_empty());
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

use alloc::boxed::Box;
use diorama_diagram::{DiagramSpec, ItemHit};
use diorama_display::{Connectors, DiscGlyph, PanelGlyph, RenderStyle};
use diorama_interact::AnimationClock;
use diorama_layout::Layout;
use diorama_scene::{ItemSpec, SceneSpec};
use peniko::Color;

/// A five-phase cyclic process flow (the classic simulation loop), laid out
/// on a ring with an animated glow traveling the cycle.
#[must_use]
pub fn cycle_flow() -> DiagramSpec {
    let mut scene = SceneSpec::new(
        "A five phase simulation loop shown as a ring: read input, update \
         the model, render the scene, present the frame, then wait for the \
         next tick. Hover or click a phase for details.",
    );
    scene.describe("input", "Read pointer and keyboard events queued since the last frame.");
    scene.describe("update", "Advance the model one step using the elapsed time.");
    scene.describe("render", "Rebuild the frame's draw list from the current model.");
    scene.describe("present", "Hand the finished frame to the display.");
    scene.describe("wait", "Sleep until the next frame is due to keep a steady rate.");

    scene.push(ItemSpec::new("Input", Color::from_rgb8(0x42, 0xa5, 0xf5), "input"));
    scene.push(ItemSpec::new("Update", Color::from_rgb8(0x66, 0xbb, 0x6a), "update"));
    scene.push(ItemSpec::new("Render", Color::from_rgb8(0xff, 0xa7, 0x26), "render"));
    scene.push(ItemSpec::new("Present", Color::from_rgb8(0xab, 0x47, 0xbc), "present"));
    scene.push(ItemSpec::new("Wait", Color::from_rgb8(0x78, 0x90, 0x9c), "wait"));

    DiagramSpec {
        scene,
        layout: Layout::ring(),
        hit: ItemHit::default(),
        connectors: Connectors::Cycle,
        clock: AnimationClock::radians(0.03),
        glyph: Box::new(DiscGlyph),
        show_controls: true,
        ..DiagramSpec::default()
    }
}

/// A six-cell taxonomy of interactive teaching visuals in a 2×3 grid.
#[must_use]
pub fn taxonomy_grid() -> DiagramSpec {
    let mut scene = SceneSpec::new(
        "A two row, three column taxonomy of interactive teaching visuals: \
         charts, simulations, games, maps, timelines, and diagrams. Hover \
         or click a cell for details.",
    );
    scene.describe("charts", "Quantities over categories or time; the reader compares magnitudes.");
    scene.describe("sims", "A live model the reader perturbs and observes.");
    scene.describe("games", "Goal-driven interaction with scorekeeping.");
    scene.describe("maps", "Spatial relationships on a fixed projection.");
    scene.describe("timelines", "Events in order, with duration and overlap.");
    scene.describe("diagrams", "Structural relationships between labeled parts.");

    scene.push(ItemSpec::new("Charts", Color::from_rgb8(0x29, 0x79, 0xff), "charts"));
    scene.push(ItemSpec::new("Simulations", Color::from_rgb8(0x00, 0x89, 0x7b), "sims"));
    scene.push(ItemSpec::new("Games", Color::from_rgb8(0xd8, 0x1b, 0x60), "games"));
    scene.push(ItemSpec::new("Maps", Color::from_rgb8(0x6d, 0x4c, 0x41), "maps"));
    scene.push(ItemSpec::new("Timelines", Color::from_rgb8(0x5e, 0x35, 0xb1), "timelines"));
    scene.push(ItemSpec::new("Diagrams", Color::from_rgb8(0xf4, 0x51, 0x1e), "diagrams"));

    DiagramSpec {
        scene,
        layout: Layout::grid(3),
        hit: ItemHit::Region,
        connectors: Connectors::None,
        glyph: Box::new(PanelGlyph::default()),
        ..DiagramSpec::default()
    }
}

/// A five-panel request pipeline, left to right, with arrowed connectors.
#[must_use]
pub fn architecture_panels() -> DiagramSpec {
    let mut scene = SceneSpec::new(
        "Five architecture panels in a row showing a request's path: \
         interface, gateway, service, cache, and storage. Hover or click a \
         panel for details.",
    );
    scene.describe("ui", "Renders views and captures user intent.");
    scene.describe("gateway", "Authenticates, rate-limits, and routes requests.");
    scene.describe("service", "Owns the domain logic and composes responses.");
    scene.describe("cache", "Absorbs repeated reads before they reach storage.");
    scene.describe("storage", "The durable source of truth.");

    scene.push(ItemSpec::new("Interface", Color::from_rgb8(0x42, 0xa5, 0xf5), "ui"));
    scene.push(ItemSpec::new("Gateway", Color::from_rgb8(0x26, 0xa6, 0x9a), "gateway"));
    scene.push(ItemSpec::new("Service", Color::from_rgb8(0x9c, 0xcc, 0x65), "service"));
    scene.push(ItemSpec::new("Cache", Color::from_rgb8(0xff, 0xca, 0x28), "cache"));
    scene.push(ItemSpec::new("Storage", Color::from_rgb8(0x8d, 0x6e, 0x63), "storage"));

    DiagramSpec {
        scene,
        layout: Layout::row(),
        hit: ItemHit::Region,
        connectors: Connectors::Sequence,
        clock: AnimationClock::normalized(0.01),
        glyph: Box::new(PanelGlyph::default()),
        show_controls: true,
        ..DiagramSpec::default()
    }
}

/// A four-state lifecycle ring (a diagram *about* state machines; the
/// interactive state machine itself lives in `diorama_interact`).
#[must_use]
pub fn state_machine() -> DiagramSpec {
    let mut scene = SceneSpec::new(
        "Four lifecycle states on a ring: idle, loading, running, and \
         error, connected in order. Hover or click a state for details.",
    );
    scene.describe("idle", "Nothing queued; waiting for work to arrive.");
    scene.describe("loading", "Fetching and validating inputs before starting.");
    scene.describe("running", "Actively processing; progress is observable.");
    scene.describe("error", "Something failed; the only exit is back to idle.");

    scene.push(ItemSpec::new("Idle", Color::from_rgb8(0x90, 0xa4, 0xae), "idle"));
    scene.push(ItemSpec::new("Loading", Color::from_rgb8(0x29, 0xb6, 0xf6), "loading"));
    scene.push(ItemSpec::new("Running", Color::from_rgb8(0x66, 0xbb, 0x6a), "running"));
    scene.push(ItemSpec::new("Error", Color::from_rgb8(0xef, 0x53, 0x50), "error"));

    DiagramSpec {
        scene,
        layout: Layout::ring(),
        hit: ItemHit::default(),
        connectors: Connectors::Cycle,
        clock: AnimationClock::radians(0.02),
        glyph: Box::new(DiscGlyph),
        show_controls: true,
        ..DiagramSpec::default()
    }
}

/// A five-layer protocol stack, top to bottom.
#[must_use]
pub fn layer_stack() -> DiagramSpec {
    let style = RenderStyle {
        background: Color::from_rgb8(0xec, 0xef, 0xf1),
        ..RenderStyle::default()
    };

    let mut scene = SceneSpec::new(
        "Five stacked protocol layers from application at the top to \
         physical at the bottom. Hover or click a layer for details.",
    );
    scene.describe("app", "What programs actually say to each other.");
    scene.describe("transport", "Delivery guarantees: ordering, retries, flow control.");
    scene.describe("network", "Addressing and routing between machines.");
    scene.describe("link", "Framing on one hop of the path.");
    scene.describe("physical", "Signals on an actual medium.");

    scene.push(ItemSpec::new("Application", Color::from_rgb8(0x5c, 0x6b, 0xc0), "app"));
    scene.push(ItemSpec::new("Transport", Color::from_rgb8(0x26, 0xa6, 0x9a), "transport"));
    scene.push(ItemSpec::new("Network", Color::from_rgb8(0x9c, 0xcc, 0x65), "network"));
    scene.push(ItemSpec::new("Link", Color::from_rgb8(0xff, 0xa7, 0x26), "link"));
    scene.push(ItemSpec::new("Physical", Color::from_rgb8(0x8d, 0x6e, 0x63), "physical"));

    DiagramSpec {
        scene,
        layout: Layout::stack(),
        hit: ItemHit::Region,
        connectors: Connectors::Sequence,
        clock: AnimationClock::normalized(0.008),
        glyph: Box::new(PanelGlyph::default()),
        style,
        ..DiagramSpec::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use diorama_diagram::Diagram;
    use diorama_scene::{GENERIC_DESCRIPTION, Scene};
    use kurbo::Size;

    fn all() -> [DiagramSpec; 5] {
        [
            cycle_flow(),
            taxonomy_grid(),
            architecture_panels(),
            state_machine(),
            layer_stack(),
        ]
    }

    #[test]
    fn every_diagram_id_has_a_complete_description_table() {
        // Shipped content should never lean on the fallback string.
        for spec in all() {
            let scene = Scene::new(spec.scene);
            for item in scene.items() {
                assert_ne!(
                    item.description, GENERIC_DESCRIPTION,
                    "{} is missing its description",
                    item.label
                );
            }
            assert!(!scene.summary().is_empty());
        }
    }

    #[test]
    fn item_counts_match_the_published_shapes() {
        let counts: [usize; 5] = [5, 6, 5, 4, 5];
        for (spec, count) in all().into_iter().zip(counts) {
            assert_eq!(Scene::new(spec.scene).len(), count);
        }
    }

    #[test]
    fn every_diagram_builds_and_renders() {
        for spec in all() {
            let mut diagram = Diagram::new(spec, Size::new(640.0, 480.0));
            diagram.toggle_animation();
            diagram.tick();
            assert!(!diagram.frame().is_empty());
        }
    }

    #[test]
    fn taxonomy_grid_is_row_major_two_by_three() {
        let diagram = Diagram::new(taxonomy_grid(), Size::new(600.0, 450.0));
        assert_eq!(diagram.items()[5].label, "Diagrams");
        // Row-major: the last item sits in the bottom row, rightmost column.
        let p = diagram.items()[5].position;
        assert!(p.x > 400.0 && p.y > 225.0);
    }

    #[test]
    fn mixed_clock_periods_are_preserved() {
        use core::f64::consts::TAU;
        assert_eq!(cycle_flow().clock.period, TAU);
        assert_eq!(layer_stack().clock.period, 1.0);
    }
}
