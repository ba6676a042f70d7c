// Copyright 2026 the Diorama Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Diorama Interact: the interaction tracker behind every diagram.
//!
//! [`InteractionState`] is the one mutable value a diagram carries across
//! events: the hovered index, the selected index, and the animation clock
//! phase. It is an explicit value owned by a controller and passed into
//! render and hit-test calls, never implicit module state.
//!
//! Transitions mirror the pointer gestures a diagram understands:
//!
//! - [`InteractionState::pointer_move`] tracks the hovered item and emits
//!   enter/leave transitions.
//! - [`InteractionState::click`] *toggles* selection: clicking the selected
//!   item deselects it, clicking another item moves the selection, clicking
//!   empty canvas clears it.
//! - [`InteractionState::toggle_animation`] flips the play/pause flag
//!   without touching hover or selection.
//! - [`InteractionState::tick`] advances the animation phase while playing.
//!
//! A monotonically increasing revision counter bumps whenever hover,
//! selection, or the play/pause flag change, giving hosts a cheap "does
//! anything need visual emphasis recomputed?" marker. Phase advance alone
//! does not bump it; animating hosts redraw every frame anyway.
//!
//! ## Minimal example
//!
//! ```
//! use diorama_interact::{InteractionEvent, InteractionState};
//!
//! let mut state = InteractionState::new();
//!
//! let events = state.pointer_move(Some(0));
//! assert_eq!(events, vec![InteractionEvent::HoverEnter(0)]);
//!
//! state.click(Some(0));
//! assert_eq!(state.selected(), Some(0));
//!
//! // Clicking the selected item again toggles it off.
//! state.click(Some(0));
//! assert_eq!(state.selected(), None);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

use alloc::vec::Vec;
use core::f64::consts::TAU;

/// A transition produced by an [`InteractionState`] update.
///
/// Events are returned in the order they occurred (a leave always precedes
/// the enter that displaced it).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InteractionEvent {
    /// The pointer moved onto item `i`.
    HoverEnter(usize),
    /// The pointer left item `i`.
    HoverLeave(usize),
    /// Item `i` became selected.
    Select(usize),
    /// Item `i` stopped being selected.
    Deselect(usize),
    /// The play/pause flag flipped to the given value.
    AnimationToggled(bool),
}

/// Per-diagram animation clock parameters.
///
/// `phase` advances by `speed` per tick and wraps at `period`. Diagrams
/// that reason in radians use a `2π` period; diagrams that key a glow on a
/// normalized 0..1 ramp use a period of one.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AnimationClock {
    /// Phase advance per tick.
    pub speed: f64,
    /// Wrap-around period.
    pub period: f64,
}

impl AnimationClock {
    /// A clock that wraps at `2π`.
    #[must_use]
    pub const fn radians(speed: f64) -> Self {
        Self { speed, period: TAU }
    }

    /// A clock that wraps at `1.0`.
    #[must_use]
    pub const fn normalized(speed: f64) -> Self {
        Self { speed, period: 1.0 }
    }
}

impl Default for AnimationClock {
    fn default() -> Self {
        Self::radians(0.03)
    }
}

/// The hover/selection/animation flags driving visual emphasis.
///
/// Invariant: at most one hovered and one selected index at a time, and any
/// index held here is valid for the diagram's item list (or `None`). The
/// item list is fixed in practice; [`InteractionState::sync_len`] restores
/// the invariant defensively if it ever shrinks.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct InteractionState {
    hovered: Option<usize>,
    selected: Option<usize>,
    phase: f64,
    animating: bool,
    revision: u64,
}

impl InteractionState {
    /// A fresh state: nothing hovered or selected, animation paused, phase
    /// zero.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            hovered: None,
            selected: None,
            phase: 0.0,
            animating: false,
            revision: 0,
        }
    }

    /// The currently hovered item index, if any.
    #[must_use]
    pub fn hovered(&self) -> Option<usize> {
        self.hovered
    }

    /// The currently selected item index, if any.
    #[must_use]
    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    /// Which item's detail the overlay should show: selection takes
    /// precedence over hover.
    #[must_use]
    pub fn detail(&self) -> Option<usize> {
        self.selected.or(self.hovered)
    }

    /// The current animation phase in `[0, period)`.
    #[must_use]
    pub fn phase(&self) -> f64 {
        self.phase
    }

    /// Whether the animation clock is running.
    #[must_use]
    pub fn animating(&self) -> bool {
        self.animating
    }

    /// The revision counter.
    ///
    /// Bumps exactly when hover, selection, or the play/pause flag change.
    /// Phase advance does not bump it.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Handles a pointer-move that hit `hit` (or nothing).
    ///
    /// Returns the hover transitions this produced, leave before enter.
    pub fn pointer_move(&mut self, hit: Option<usize>) -> Vec<InteractionEvent> {
        let mut events = Vec::new();
        if self.hovered == hit {
            return events;
        }
        if let Some(old) = self.hovered {
            events.push(InteractionEvent::HoverLeave(old));
        }
        if let Some(new) = hit {
            events.push(InteractionEvent::HoverEnter(new));
        }
        self.hovered = hit;
        self.bump_revision();
        events
    }

    /// Handles a click that hit `hit` (or empty canvas).
    ///
    /// Selection is a toggle, not a set: clicking the selected item clears
    /// the selection, clicking a different item moves it, and clicking
    /// outside all items clears it.
    pub fn click(&mut self, hit: Option<usize>) -> Vec<InteractionEvent> {
        let target = if hit == self.selected { None } else { hit };
        if target == self.selected {
            return Vec::new();
        }

        let mut events = Vec::new();
        if let Some(old) = self.selected {
            events.push(InteractionEvent::Deselect(old));
        }
        if let Some(new) = target {
            events.push(InteractionEvent::Select(new));
        }
        self.selected = target;
        self.bump_revision();
        events
    }

    /// Flips the play/pause flag. Hover and selection are untouched.
    pub fn toggle_animation(&mut self) -> Vec<InteractionEvent> {
        self.animating = !self.animating;
        self.bump_revision();
        Vec::from([InteractionEvent::AnimationToggled(self.animating)])
    }

    /// Advances the animation phase by one tick of `clock` while animating.
    ///
    /// After `N` ticks from phase `p`, the phase is `(p + N·speed) mod
    /// period`. Paused clocks hold their phase. This never bumps the
    /// revision.
    pub fn tick(&mut self, clock: &AnimationClock) {
        if !self.animating || clock.period <= 0.0 {
            return;
        }
        self.phase = (self.phase + clock.speed) % clock.period;
    }

    /// Clamps hover and selection to `None` if they index past `len`.
    ///
    /// Item lists are fixed after construction in practice; this exists so
    /// the valid-index invariant survives a host that rebuilds its scene.
    pub fn sync_len(&mut self, len: usize) -> Vec<InteractionEvent> {
        let mut events = Vec::new();
        if let Some(i) = self.hovered
            && i >= len
        {
            events.push(InteractionEvent::HoverLeave(i));
            self.hovered = None;
        }
        if let Some(i) = self.selected
            && i >= len
        {
            events.push(InteractionEvent::Deselect(i));
            self.selected = None;
        }
        if !events.is_empty() {
            self.bump_revision();
        }
        events
    }

    fn bump_revision(&mut self) {
        self.revision = self.revision.wrapping_add(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn fresh_state_is_inert() {
        let state = InteractionState::new();
        assert_eq!(state.hovered(), None);
        assert_eq!(state.selected(), None);
        assert_eq!(state.detail(), None);
        assert!(!state.animating());
        assert_eq!(state.phase(), 0.0);
        assert_eq!(state.revision(), 0);
    }

    #[test]
    fn pointer_move_emits_leave_before_enter() {
        let mut state = InteractionState::new();

        assert_eq!(
            state.pointer_move(Some(2)),
            vec![InteractionEvent::HoverEnter(2)]
        );
        assert_eq!(
            state.pointer_move(Some(4)),
            vec![
                InteractionEvent::HoverLeave(2),
                InteractionEvent::HoverEnter(4)
            ]
        );
        assert_eq!(
            state.pointer_move(None),
            vec![InteractionEvent::HoverLeave(4)]
        );
    }

    #[test]
    fn repeated_pointer_moves_are_no_ops() {
        let mut state = InteractionState::new();
        state.pointer_move(Some(1));
        let rev = state.revision();

        assert!(state.pointer_move(Some(1)).is_empty());
        assert_eq!(state.revision(), rev);
    }

    #[test]
    fn click_toggles_selection() {
        let mut state = InteractionState::new();

        assert_eq!(state.click(Some(3)), vec![InteractionEvent::Select(3)]);
        assert_eq!(state.selected(), Some(3));

        // Clicking the selected item again returns the selection to none.
        assert_eq!(state.click(Some(3)), vec![InteractionEvent::Deselect(3)]);
        assert_eq!(state.selected(), None);
    }

    #[test]
    fn clicking_another_item_moves_the_selection() {
        let mut state = InteractionState::new();
        state.click(Some(1));

        assert_eq!(
            state.click(Some(2)),
            vec![InteractionEvent::Deselect(1), InteractionEvent::Select(2)]
        );
        assert_eq!(state.selected(), Some(2));
    }

    #[test]
    fn clicking_empty_canvas_clears_the_selection() {
        let mut state = InteractionState::new();
        state.click(Some(1));

        assert_eq!(state.click(None), vec![InteractionEvent::Deselect(1)]);
        assert_eq!(state.selected(), None);

        // A second miss is a no-op.
        let rev = state.revision();
        assert!(state.click(None).is_empty());
        assert_eq!(state.revision(), rev);
    }

    #[test]
    fn selection_takes_precedence_over_hover_for_detail() {
        let mut state = InteractionState::new();
        state.pointer_move(Some(0));
        assert_eq!(state.detail(), Some(0));

        state.click(Some(2));
        assert_eq!(state.detail(), Some(2));

        state.click(Some(2));
        assert_eq!(state.detail(), Some(0));
    }

    #[test]
    fn toggle_animation_leaves_hover_and_selection_alone() {
        let mut state = InteractionState::new();
        state.pointer_move(Some(1));
        state.click(Some(2));

        assert_eq!(
            state.toggle_animation(),
            vec![InteractionEvent::AnimationToggled(true)]
        );
        assert_eq!(state.hovered(), Some(1));
        assert_eq!(state.selected(), Some(2));

        assert_eq!(
            state.toggle_animation(),
            vec![InteractionEvent::AnimationToggled(false)]
        );
    }

    #[test]
    fn tick_advances_phase_only_while_animating() {
        let clock = AnimationClock::radians(0.5);
        let mut state = InteractionState::new();

        state.tick(&clock);
        assert_eq!(state.phase(), 0.0);

        state.toggle_animation();
        state.tick(&clock);
        assert_eq!(state.phase(), 0.5);

        state.toggle_animation();
        state.tick(&clock);
        assert_eq!(state.phase(), 0.5);
    }

    #[test]
    fn phase_after_n_ticks_matches_the_modular_law() {
        let clock = AnimationClock::normalized(0.07);
        let mut state = InteractionState::new();
        state.toggle_animation();

        let n = 100;
        for _ in 0..n {
            state.tick(&clock);
        }
        let expected = (f64::from(n) * 0.07) % 1.0;
        assert!((state.phase() - expected).abs() < 1e-9);
        assert!(state.phase() >= 0.0 && state.phase() < 1.0);
    }

    #[test]
    fn tick_does_not_bump_the_revision() {
        let mut state = InteractionState::new();
        state.toggle_animation();
        let rev = state.revision();

        for _ in 0..10 {
            state.tick(&AnimationClock::default());
        }
        assert_eq!(state.revision(), rev);
    }

    #[test]
    fn sync_len_clamps_stale_indices_to_none() {
        let mut state = InteractionState::new();
        state.pointer_move(Some(5));
        state.click(Some(4));

        let events = state.sync_len(4);
        assert_eq!(
            events,
            vec![
                InteractionEvent::HoverLeave(5),
                InteractionEvent::Deselect(4)
            ]
        );
        assert_eq!(state.hovered(), None);
        assert_eq!(state.selected(), None);

        // Indices inside the new length survive.
        state.click(Some(2));
        assert!(state.sync_len(4).is_empty());
        assert_eq!(state.selected(), Some(2));
    }
}
