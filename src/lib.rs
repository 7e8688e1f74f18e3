/*
 * Dot Field - Module Definitions
 *
 * This file defines the module structure for the dot field simulation.
 * The physics core (vector, particle, force, pointer, environment, physics, driver)
 * has no knowledge of windows or drawing. The nannou host modules
 * (app, input, renderer, ui, debug) feed it input and draw what it exposes.
 */

// Re-export key components for easier access
pub use environment::EnvironmentCorrector;
pub use error::ConfigError;
pub use force::{ForceLaw, LineStyle, LineView, PairContact, PairInteraction, MIN_SEPARATION};
pub use params::SimulationParams;
pub use particle::Particle;
pub use physics::{Simulation, StepStats};
pub use pointer::PointerState;
pub use vector::Vector2;
pub use driver::FixedStepDriver;
pub use debug::DebugInfo;
pub use app::Model;

// Simulation core
pub mod vector;
pub mod particle;
pub mod force;
pub mod pointer;
pub mod environment;
pub mod physics;
pub mod driver;
pub mod spawn;
pub mod params;
pub mod error;

// nannou host
pub mod app;
pub mod input;
pub mod renderer;
pub mod ui;
pub mod debug;
