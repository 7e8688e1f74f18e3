/*
 * UI Module
 *
 * This module contains functions for creating and updating the user interface
 * using nannou_egui. It provides the control panel and the on-screen debug overlay.
 * Parameter change detection is handled by the SimulationParams struct.
 */

use nannou_egui::{egui, Egui};

use crate::debug::DebugInfo;
use crate::params::SimulationParams;

// Update the UI and return whether the dots should be reset, the dot count changed, and if any UI changes occurred
pub fn update_ui(
    egui: &mut Egui,
    params: &mut SimulationParams,
    debug_info: &DebugInfo,
) -> (bool, bool, bool) {
    let mut should_reset = false;

    params.take_snapshot();

    let ctx = egui.begin_frame();

    egui::Window::new("Dot Field")
        .default_pos([10.0, 10.0])
        .show(&ctx, |ui| {
            ui.add(
                egui::Slider::new(&mut params.particle_count, SimulationParams::get_particle_count_range())
                    .text("Number of Dots"),
            );

            if ui.button("Reset Dots").clicked() {
                should_reset = true;
            }

            ui.collapsing("Performance", |ui| {
                ui.checkbox(&mut params.parallel_pairs, "Parallel Line Forces");

                ui.separator();

                ui.label(format!("FPS: {:.1}", debug_info.fps));
                ui.label(format!("Frame time: {:.2} ms", debug_info.frame_time.as_secs_f64() * 1000.0));
                ui.label(format!("Ticks this frame: {}", debug_info.ticks_per_frame));
                ui.label(format!("Dropped ticks: {}", debug_info.dropped_ticks));
            });

            ui.label("Hold the left button to push dots away");
            ui.checkbox(&mut params.show_debug, "Show Debug Info");
            ui.checkbox(&mut params.pause_simulation, "Pause Simulation");
        });

    let (count_changed, ui_changed) = params.detect_changes();

    (should_reset, count_changed, ui_changed)
}

// Draw debug information on the screen
pub fn draw_debug_info(
    draw: &nannou::Draw,
    debug_info: &DebugInfo,
    window_rect: nannou::geom::Rect,
    dot_count: usize,
) {
    // Background panel in the bottom-left corner, clear of the egui window
    let margin = 20.0;
    let line_height = 20.0;
    let panel_width = 220.0;
    let panel_height = line_height * 5.0 + margin;
    let panel_x = window_rect.left() + panel_width / 2.0;
    let panel_y = window_rect.bottom() + panel_height / 2.0;

    draw.rect()
        .x_y(panel_x, panel_y)
        .w_h(panel_width, panel_height)
        .color(nannou::color::rgba(0.0, 0.0, 0.0, 0.7));

    let text_x = window_rect.left() + margin;
    let text_y = window_rect.bottom() + panel_height - margin;

    let debug_texts = [
        format!("FPS: {:.1}", debug_info.fps),
        format!("Dots: {}", dot_count),
        format!("Lines drawn: {}", debug_info.visible_lines),
        format!("Lines pulling: {}", debug_info.engaged_pairs),
        format!("Tick phase: {:.2}", debug_info.interpolation_alpha),
    ];

    for (i, text) in debug_texts.iter().enumerate() {
        let y = text_y - (i as f32 * line_height);

        draw.text(text)
            .x_y(text_x + 80.0, y)
            .color(nannou::color::WHITE)
            .font_size(14);
    }
}
