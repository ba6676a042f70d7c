// Copyright 2026 the Diorama Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Renders every gallery diagram headlessly and writes one SVG per diagram
//! to the current directory.
//!
//! Run with: `cargo run -p diorama_demos --example export_svg`

use diorama_demos::named_gallery;
use diorama_diagram::Diagram;
use diorama_display_svg::to_svg;
use kurbo::Size;

fn main() -> std::io::Result<()> {
    let size = Size::new(640.0, 480.0);

    for (name, spec) in named_gallery() {
        let mut diagram = Diagram::new(spec, size);

        // A few ticks with the clock running so animated diagrams export
        // with the glow somewhere interesting.
        diagram.toggle_animation();
        for _ in 0..30 {
            diagram.tick();
        }

        let path = format!("{name}.svg");
        std::fs::write(&path, to_svg(&diagram.frame(), size))?;
        println!("wrote {path} ({})", diagram.summary());
    }
    Ok(())
}
