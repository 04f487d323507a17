//! Input router
//!
//! Normalizes pointer and keyboard events into per-tick state. A click is a
//! one-shot event arbitrated by [`ClickEvent::claim`]: the first handler that
//! actually acts on the click claims it, and no later handler in the same
//! tick can observe it. Handlers that find no applicable target under the
//! pointer must not claim, so lower-priority handlers still get a chance.

use glam::Vec2;
use std::collections::HashSet;

/// A single pointer-down event, claimable exactly once.
#[derive(Debug, Clone)]
pub struct ClickEvent {
    pos: Vec2,
    claimed: bool,
}

impl ClickEvent {
    pub fn new(pos: Vec2) -> Self {
        Self {
            pos,
            claimed: false,
        }
    }

    pub fn pos(&self) -> Vec2 {
        self.pos
    }

    /// Claim the click. Returns `true` exactly once; `false` if some earlier
    /// handler already acted on it.
    pub fn claim(&mut self) -> bool {
        if self.claimed {
            return false;
        }
        self.claimed = true;
        true
    }

    pub fn is_claimed(&self) -> bool {
        self.claimed
    }
}

/// Pointer/keyboard state for the current tick.
#[derive(Debug, Default)]
pub struct InputState {
    pointer: Vec2,
    click: Option<ClickEvent>,
    held: HashSet<String>,
    pressed: HashSet<String>,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Last known pointer position (canvas coordinates).
    pub fn pointer(&self) -> Vec2 {
        self.pointer
    }

    pub fn pointer_moved(&mut self, pos: Vec2) {
        self.pointer = pos;
    }

    /// Pointer-down: records position and arms the one-shot click.
    pub fn pointer_down(&mut self, pos: Vec2) {
        self.pointer = pos;
        self.click = Some(ClickEvent::new(pos));
    }

    pub fn key_down(&mut self, code: &str) {
        // Key repeat re-fires keydown; only the initial press is one-shot.
        if self.held.insert(code.to_string()) {
            self.pressed.insert(code.to_string());
        }
    }

    pub fn key_up(&mut self, code: &str) {
        self.held.remove(code);
    }

    pub fn is_held(&self, code: &str) -> bool {
        self.held.contains(code)
    }

    /// True if the key went down this tick (one-shot, cleared by `end_tick`).
    pub fn was_pressed(&self, code: &str) -> bool {
        self.pressed.contains(code)
    }

    /// The pending click, if nobody has claimed it yet this tick.
    pub fn unclaimed_click(&mut self) -> Option<&mut ClickEvent> {
        self.click.as_mut().filter(|c| !c.is_claimed())
    }

    /// End-of-tick cleanup: drops the one-shot click (claimed or not) and
    /// the pressed-this-tick set. Held keys persist.
    pub fn end_tick(&mut self) {
        self.click = None;
        self.pressed.clear();
    }
}
