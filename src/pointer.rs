/*
 * Pointer Module
 *
 * PointerState is the input snapshot handed to every tick. The host's input
 * callbacks mutate it between ticks; the simulation only ever reads a copy.
 */

use crate::vector::Vector2;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PointerState {
    pub position: Vector2,
    pub pressed: bool,
}

impl PointerState {
    pub fn new(position: Vector2, pressed: bool) -> Self {
        Self { position, pressed }
    }

    pub fn released() -> Self {
        Self::default()
    }

    // Button went down at the given simulation position
    pub fn press(&mut self, position: Vector2) {
        self.position = position;
        self.pressed = true;
    }

    // Dragging moves the repulsion point the same way a fresh press does
    pub fn drag(&mut self, position: Vector2) {
        self.press(position);
    }

    // The last position is kept; it is only meaningful while pressed
    pub fn release(&mut self) {
        self.pressed = false;
    }
}
