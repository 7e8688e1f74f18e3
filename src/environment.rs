/*
 * Environment Module
 *
 * This module groups the per-particle corrections that do not come from lines.
 * They run once per particle per tick, always in this order:
 * 1. Pointer repulsion: a pressed pointer pushes dots away with an inverse-square force
 * 2. Velocity damping: fast dots get a braking force proportional to their velocity
 * 3. Toroidal wrap: dots leaving one edge reappear past the opposite edge
 *
 * Damping is a force applied over one dt, not a clamp, so speed decays
 * toward the threshold over several ticks.
 */

use crate::error::{ensure_finite, ensure_non_negative, ConfigError};
use crate::force::MIN_SEPARATION;
use crate::particle::Particle;
use crate::pointer::PointerState;
use crate::vector::Vector2;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnvironmentCorrector {
    width: f64,
    height: f64,
    wrap_margin: f64,
    damping_threshold: f64,
    repulsion_scale: f64,
    repulsion_cap: f64,
}

impl EnvironmentCorrector {
    pub fn new(
        width: f64,
        height: f64,
        wrap_margin: f64,
        damping_threshold: f64,
        repulsion_scale: f64,
        repulsion_cap: f64,
    ) -> Result<Self, ConfigError> {
        ensure_finite("width", width)?;
        ensure_finite("height", height)?;
        if width <= 0.0 || height <= 0.0 {
            return Err(ConfigError::InvalidBounds { width, height });
        }
        ensure_non_negative("wrap margin", wrap_margin)?;
        ensure_non_negative("damping threshold", damping_threshold)?;
        ensure_non_negative("pointer repulsion scale", repulsion_scale)?;
        ensure_non_negative("pointer repulsion cap", repulsion_cap)?;

        Ok(Self {
            width,
            height,
            wrap_margin,
            damping_threshold,
            repulsion_scale,
            repulsion_cap,
        })
    }

    pub fn bounds(&self) -> (f64, f64) {
        (self.width, self.height)
    }

    pub fn wrap_margin(&self) -> f64 {
        self.wrap_margin
    }

    // Run all three corrections on one particle
    pub fn apply(&self, particle: &mut Particle, pointer: &PointerState) {
        self.repel(particle, pointer);
        self.damp(particle);
        self.wrap(particle);
    }

    pub fn repel(&self, particle: &mut Particle, pointer: &PointerState) {
        if !pointer.pressed {
            return;
        }
        particle.add_force(self.repulsion_force(pointer.position, particle.position));
    }

    // Force pushing a dot at `position` away from the pointer
    pub fn repulsion_force(&self, pointer: Vector2, position: Vector2) -> Vector2 {
        let distance = pointer.distance(position);
        if distance < MIN_SEPARATION {
            return Vector2::zero();
        }

        let direction = position.sub(pointer).div(distance);
        let magnitude = ((1.0 / distance).powi(2) * self.repulsion_scale).min(self.repulsion_cap);
        direction.scale(magnitude)
    }

    pub fn damp(&self, particle: &mut Particle) {
        if particle.velocity.length() > self.damping_threshold {
            particle.add_force(particle.velocity.scale(-1.0));
        }
    }

    pub fn wrap(&self, particle: &mut Particle) {
        particle.position = Vector2::new(
            self.wrap_coordinate(particle.position.x, self.width),
            self.wrap_coordinate(particle.position.y, self.height),
        );
    }

    // Map a coordinate into [-margin, bound + margin)
    pub fn wrap_coordinate(&self, value: f64, bound: f64) -> f64 {
        positive_fmod(value + self.wrap_margin, bound + 2.0 * self.wrap_margin) - self.wrap_margin
    }
}

// Remainder that is always in [0, modulus) for a positive modulus
pub fn positive_fmod(value: f64, modulus: f64) -> f64 {
    let remainder = value.rem_euclid(modulus);
    // A tiny negative value plus the modulus can round up to the modulus itself
    if remainder >= modulus {
        0.0
    } else {
        remainder
    }
}
