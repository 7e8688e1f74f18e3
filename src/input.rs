/*
 * Input Module
 *
 * This module handles user input events for the dot field.
 * Holding the left mouse button places a repulsive point under the cursor,
 * dragging moves it, and releasing removes it.
 * Clicks on the egui panel are left to the UI.
 */

use nannou::prelude::*;
use nannou::winit::event::MouseButton;

use crate::app::Model;
use crate::vector::Vector2;

// nannou puts the origin at the window centre; the simulation puts it at the bottom left corner
pub fn window_to_simulation(position: Vec2, window_rect: Rect) -> Vector2 {
    Vector2::new(
        (position.x - window_rect.left()) as f64,
        (position.y - window_rect.bottom()) as f64,
    )
}

// Mouse moved event handler
pub fn mouse_moved(app: &App, model: &mut Model, pos: Point2) {
    model.mouse_position = pos;

    if model.pointer.pressed {
        model.pointer.drag(window_to_simulation(pos, app.window_rect()));
    }
}

// Mouse pressed event handler
pub fn mouse_pressed(app: &App, model: &mut Model, button: MouseButton) {
    if button != MouseButton::Left || model.egui.ctx().is_pointer_over_area() {
        return;
    }

    let position = window_to_simulation(model.mouse_position, app.window_rect());
    model.pointer.press(position);
    tracing::debug!(x = position.x, y = position.y, "pointer pressed");
}

// Mouse released event handler
pub fn mouse_released(_app: &App, model: &mut Model, button: MouseButton) {
    if button == MouseButton::Left && model.pointer.pressed {
        model.pointer.release();
        tracing::debug!("pointer released");
    }
}

// Pass raw window events to egui
pub fn raw_window_event(_app: &App, model: &mut Model, event: &nannou::winit::event::WindowEvent) {
    model.egui.handle_raw_event(event);
}
