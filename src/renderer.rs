/*
 * Renderer Module
 *
 * This module draws the dot field after the frame's ticks have run.
 * It only reads the simulation: lines first so the dots sit on top of them,
 * then the dots, then the optional debug overlay and the egui panel.
 * Lines beyond the force range are skipped entirely.
 */

use nannou::prelude::*;

use crate::app::Model;
use crate::ui;
use crate::vector::Vector2;

// Inverse of input::window_to_simulation
pub fn simulation_to_window(position: Vector2, window_rect: Rect) -> Point2 {
    pt2(
        position.x as f32 + window_rect.left(),
        position.y as f32 + window_rect.bottom(),
    )
}

// Render the model
pub fn view(app: &App, model: &Model, frame: Frame) {
    let draw = app.draw();
    draw.background().color(BLACK);

    let window_rect = app.window_rect();

    for line in model.simulation.visible_lines() {
        draw.line()
            .start(simulation_to_window(line.start, window_rect))
            .end(simulation_to_window(line.end, window_rect))
            .weight(line.width_hint as f32)
            .color(rgba(1.0, 1.0, 1.0, line.alpha as f32));
    }

    for particle in model.simulation.particles() {
        draw.ellipse()
            .xy(simulation_to_window(particle.position, window_rect))
            .radius(particle.radius() as f32)
            .color(WHITE);
    }

    if model.params.show_debug {
        // Mark the repulsive point while it is active
        if model.pointer.pressed {
            draw.ellipse()
                .xy(simulation_to_window(model.pointer.position, window_rect))
                .radius(4.0)
                .color(RED);
        }

        ui::draw_debug_info(&draw, &model.debug_info, window_rect, model.simulation.particles().len());
    }

    if let Err(err) = draw.to_frame(app, &frame) {
        tracing::warn!(error = ?err, "failed to draw frame");
    }

    if let Err(err) = model.egui.draw_to_frame(&frame) {
        tracing::warn!(error = ?err, "failed to draw UI");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::window_to_simulation;

    #[test]
    fn coordinate_conversion_round_trips() {
        let rect = Rect::from_w_h(1280.0, 720.0);
        let position = Vector2::new(100.0, 650.0);

        let back = window_to_simulation(simulation_to_window(position, rect), rect);

        assert_eq!(back, position);
    }
}
