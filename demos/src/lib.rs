// Copyright 2026 the Diorama Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared plumbing for the headless Diorama demos.

use diorama_diagram::DiagramSpec;

/// The gallery diagrams with stable file-friendly names.
#[must_use]
pub fn named_gallery() -> Vec<(&'static str, DiagramSpec)> {
    vec![
        ("cycle_flow", diorama_gallery::cycle_flow()),
        ("taxonomy_grid", diorama_gallery::taxonomy_grid()),
        ("architecture_panels", diorama_gallery::architecture_panels()),
        ("state_machine", diorama_gallery::state_machine()),
        ("layer_stack", diorama_gallery::layer_stack()),
    ]
}
