// Copyright 2026 the Diorama Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drives the cycle-flow diagram through a scripted pointer session and
//! prints the transitions it produces, then exports the final frame.
//!
//! Run with: `cargo run -p diorama_demos --example scripted_interaction`

use diorama_diagram::Diagram;
use diorama_display_svg::to_svg;
use diorama_gallery::cycle_flow;
use kurbo::{Point, Size};

fn main() -> std::io::Result<()> {
    let size = Size::new(400.0, 500.0);
    let mut diagram = Diagram::new(cycle_flow(), size);

    println!("{}", diagram.summary());

    // Hover each phase in turn.
    let positions: Vec<Point> = diagram.items().iter().map(|i| i.position).collect();
    for (i, p) in positions.iter().enumerate() {
        for event in diagram.pointer_move(*p) {
            println!("phase {i}: {event:?}");
        }
    }

    // Select the render phase, then toggle it back off.
    for event in diagram.click(positions[2]) {
        println!("click: {event:?}");
    }
    for event in diagram.click(positions[2]) {
        println!("click: {event:?}");
    }

    // Start the animation via the on-canvas control and run a second of
    // frames at 60 Hz.
    for event in diagram.click(Point::new(28.0, 28.0)) {
        println!("control: {event:?}");
    }
    for _ in 0..60 {
        diagram.tick();
    }
    println!("phase after 60 ticks: {:.3}", diagram.state().phase());

    std::fs::write("scripted_interaction.svg", to_svg(&diagram.frame(), size))?;
    println!("wrote scripted_interaction.svg");
    Ok(())
}
