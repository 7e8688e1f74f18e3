/*
 * Application Module
 *
 * This module defines the nannou model for the dot field window.
 * It owns the simulation and everything around it that is not physics:
 * the pointer snapshot fed by the input handlers, the fixed timestep driver,
 * the egui control panel and the debug counters.
 *
 * Input callbacks, update and view all run on the nannou event loop thread,
 * so pointer changes made by a callback are complete before the next update
 * copies the pointer and runs that frame's ticks.
 */

use std::sync::OnceLock;

use nannou::prelude::*;
use nannou_egui::Egui;

use crate::debug::DebugInfo;
use crate::driver::FixedStepDriver;
use crate::input::{mouse_moved, mouse_pressed, mouse_released, raw_window_event};
use crate::params::SimulationParams;
use crate::physics::{Simulation, StepStats};
use crate::pointer::PointerState;
use crate::renderer::view;
use crate::ui;

// nannou builds the model from a plain fn pointer, so the validated
// startup parameters are handed over through here
static STARTUP_PARAMS: OnceLock<SimulationParams> = OnceLock::new();

// Main model for the application
pub struct Model {
    pub simulation: Simulation,
    pub params: SimulationParams,
    pub pointer: PointerState,
    pub driver: FixedStepDriver,
    pub egui: Egui,
    pub debug_info: DebugInfo,
    pub mouse_position: Vec2,
}

// Open the window and run until it is closed
pub fn run(params: SimulationParams) {
    if STARTUP_PARAMS.set(params).is_err() {
        tracing::warn!("startup parameters were already set, keeping the first ones");
    }
    nannou::app(model).update(update).run();
}

// Initialize the model
pub fn model(app: &App) -> Model {
    let params = STARTUP_PARAMS.get().cloned().unwrap_or_default();

    let window_id = app
        .new_window()
        .title("Dot Field")
        .size(params.width as u32, params.height as u32)
        .resizable(false)
        .view(view)
        .mouse_moved(mouse_moved)
        .mouse_pressed(mouse_pressed)
        .mouse_released(mouse_released)
        .raw_event(raw_window_event)
        .build()
        .expect("Failed to create window");

    let window = app.window(window_id).expect("Window closed during setup");
    let egui = Egui::from_window(&window);

    let simulation = Simulation::from_params(&params).expect("Parameters are validated before launch");
    let driver = FixedStepDriver::new(params.tick_rate, params.max_ticks_per_frame);

    Model {
        simulation,
        params,
        pointer: PointerState::released(),
        driver,
        egui,
        debug_info: DebugInfo::default(),
        mouse_position: Vec2::ZERO,
    }
}

// Update the model
pub fn update(app: &App, model: &mut Model, update: Update) {
    model.debug_info.fps = app.fps();
    model.debug_info.frame_time = update.since_last;

    model.egui.set_elapsed_time(update.since_start);
    let (should_reset, count_changed, ui_changed) =
        ui::update_ui(&mut model.egui, &mut model.params, &model.debug_info);

    if ui_changed {
        model.simulation.parallel_pairs = model.params.parallel_pairs;
    }

    if should_reset || count_changed {
        reset_simulation(model);
    }

    if model.params.pause_simulation {
        // Do not replay the paused time once the simulation resumes
        model.driver.reset();
        return;
    }

    // One snapshot for every tick of this frame
    let pointer = model.pointer;
    let mut last_stats = StepStats::default();
    model.driver.advance(update.since_last, |dt| {
        last_stats = model.simulation.step(dt, &pointer);
    });

    model.debug_info.ticks_per_frame = model.driver.ticks_last_frame;
    model.debug_info.dropped_ticks = model.driver.dropped_ticks;
    model.debug_info.interpolation_alpha = model.driver.interpolation_alpha();
    if model.driver.ticks_last_frame > 0 {
        model.debug_info.engaged_pairs = last_stats.engaged_pairs;
    }
    if model.params.show_debug {
        model.debug_info.visible_lines = model.simulation.visible_lines().count();
    }
}

// Respawn every dot from the current parameters
fn reset_simulation(model: &mut Model) {
    match Simulation::from_params(&model.params) {
        Ok(simulation) => {
            tracing::debug!(particles = model.params.particle_count, "simulation reset");
            model.simulation = simulation;
            model.driver.reset();
        }
        Err(err) => {
            tracing::error!(%err, "could not reset simulation, keeping the current one");
        }
    }
}
