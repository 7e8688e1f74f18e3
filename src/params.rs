/*
 * Simulation Parameters Module
 *
 * This module defines the SimulationParams struct that contains every constant
 * of the dot field. Defaults reproduce the classic look; a YAML scenario file can
 * override any subset of them. Parameters are validated once at startup and the
 * core types are built from them. A few of them can also be changed from the UI,
 * and change detection works the same way as before: take a snapshot, compare.
 */

use std::path::Path;

use serde::Deserialize;

use crate::environment::EnvironmentCorrector;
use crate::error::{ensure_finite, ensure_non_negative, ConfigError};
use crate::force::{ForceLaw, LineStyle};

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SimulationParams {
    pub particle_count: usize,
    pub min_radius: f64,
    pub max_radius: f64,
    pub max_initial_speed: f64,

    // Line force law
    pub neutral_distance: f64,
    pub max_distance: f64,
    pub force_coefficient: f64,

    // Environment
    pub damping_threshold: f64,
    pub repulsion_scale: f64,
    pub repulsion_cap: f64,
    pub wrap_margin: f64,

    // Line transparency ramp
    pub line_alpha_min: f64,
    pub line_alpha_max: f64,

    // Scheduling
    pub tick_rate: f64,
    pub max_ticks_per_frame: usize,

    pub width: f64,
    pub height: f64,
    pub seed: Option<u64>,

    pub parallel_pairs: bool,
    pub show_debug: bool,
    pub pause_simulation: bool,

    // Internal state for tracking changes
    #[serde(skip)]
    previous_values: Option<ParamSnapshot>,
}

// A snapshot of the UI-editable values used for change detection
#[derive(Debug, Clone, PartialEq)]
struct ParamSnapshot {
    particle_count: usize,
    parallel_pairs: bool,
    show_debug: bool,
    pause_simulation: bool,
}

impl Default for SimulationParams {
    fn default() -> Self {
        Self {
            particle_count: 100,
            min_radius: 5.0,
            max_radius: 10.0,
            max_initial_speed: 50.0,
            neutral_distance: 75.0,
            max_distance: 150.0,
            force_coefficient: 0.02,
            damping_threshold: 50.0,
            repulsion_scale: 1_000_000.0,
            repulsion_cap: 1000.0,
            wrap_margin: 50.0,
            line_alpha_min: 10.0,
            line_alpha_max: 150.0,
            tick_rate: 120.0,
            max_ticks_per_frame: 8,
            width: 1280.0,
            height: 720.0,
            seed: None,
            parallel_pairs: false,
            show_debug: false,
            pause_simulation: false,
            previous_values: None,
        }
    }
}

impl SimulationParams {
    // Parse a YAML scenario; fields it does not name keep their defaults
    pub fn from_yaml_str(source: &str) -> Result<Self, ConfigError> {
        let params: SimulationParams = serde_yaml::from_str(source)?;
        params.validate()?;
        Ok(params)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let source = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml_str(&source)
    }

    // Check every invariant before the first tick
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.force_law()?;
        self.line_style()?;
        self.environment()?;

        ensure_finite("min radius", self.min_radius)?;
        ensure_finite("max radius", self.max_radius)?;
        if self.min_radius < 0.0 {
            return Err(ConfigError::NegativeRadius(self.min_radius));
        }
        if self.min_radius > self.max_radius {
            return Err(ConfigError::InvertedRadiusRange {
                min: self.min_radius,
                max: self.max_radius,
            });
        }

        ensure_non_negative("max initial speed", self.max_initial_speed)?;

        if !self.tick_rate.is_finite() || self.tick_rate <= 0.0 {
            return Err(ConfigError::InvalidTickRate(self.tick_rate));
        }

        Ok(())
    }

    pub fn force_law(&self) -> Result<ForceLaw, ConfigError> {
        ForceLaw::new(self.neutral_distance, self.max_distance, self.force_coefficient)
    }

    pub fn line_style(&self) -> Result<LineStyle, ConfigError> {
        LineStyle::new(self.line_alpha_min, self.line_alpha_max)
    }

    pub fn environment(&self) -> Result<EnvironmentCorrector, ConfigError> {
        EnvironmentCorrector::new(
            self.width,
            self.height,
            self.wrap_margin,
            self.damping_threshold,
            self.repulsion_scale,
            self.repulsion_cap,
        )
    }

    // Seconds per tick
    pub fn tick_dt(&self) -> f64 {
        1.0 / self.tick_rate
    }

    // Take a snapshot of current parameter values for change detection
    pub fn take_snapshot(&mut self) {
        self.previous_values = Some(self.snapshot());
    }

    // Returns (particle_count_changed, any_ui_changed)
    pub fn detect_changes(&self) -> (bool, bool) {
        match &self.previous_values {
            Some(prev) => {
                let current = self.snapshot();
                (current.particle_count != prev.particle_count, current != *prev)
            }
            None => (false, false),
        }
    }

    fn snapshot(&self) -> ParamSnapshot {
        ParamSnapshot {
            particle_count: self.particle_count,
            parallel_pairs: self.parallel_pairs,
            show_debug: self.show_debug,
            pause_simulation: self.pause_simulation,
        }
    }

    // Range for the particle count slider
    pub fn get_particle_count_range() -> std::ops::RangeInclusive<usize> {
        2..=1000
    }
}
