/*
 * Particle Module
 *
 * This module defines the Particle struct, a single dot of the field.
 * Every particle has unit mass, so the accumulated force is applied directly
 * as an acceleration during integration.
 *
 * The force accumulator is zero at the start of every tick. Pair and environment
 * passes add to it, and integrate() consumes it and clears it again.
 */

use crate::error::{ensure_finite, ConfigError};
use crate::vector::Vector2;

#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    pub position: Vector2,
    pub velocity: Vector2,
    force: Vector2,
    radius: f64,
}

impl Particle {
    pub fn new(position: Vector2, velocity: Vector2, radius: f64) -> Result<Self, ConfigError> {
        ensure_finite("particle radius", radius)?;
        if radius < 0.0 {
            return Err(ConfigError::NegativeRadius(radius));
        }

        Ok(Self {
            position,
            velocity,
            force: Vector2::zero(),
            radius,
        })
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    // Force accumulated so far in the current tick
    pub fn force(&self) -> Vector2 {
        self.force
    }

    pub fn add_force(&mut self, force: Vector2) {
        self.force = self.force.add(force);
    }

    // Advance the particle by dt seconds
    pub fn integrate(&mut self, dt: f64) {
        // Position moves with the velocity from before this tick's force
        self.position = self.position.add(self.velocity.scale(dt));

        // Unit mass: acceleration equals force
        self.velocity = self.velocity.add(self.force.scale(dt));

        self.force = Vector2::zero();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn particle(px: f64, py: f64, vx: f64, vy: f64) -> Particle {
        Particle::new(Vector2::new(px, py), Vector2::new(vx, vy), 5.0).unwrap()
    }

    #[test]
    fn new_particle_has_no_force() {
        let p = particle(1.0, 2.0, 3.0, 4.0);
        assert_eq!(p.force(), Vector2::zero());
        assert_eq!(p.radius(), 5.0);
    }

    #[test]
    fn negative_radius_is_rejected() {
        let result = Particle::new(Vector2::zero(), Vector2::zero(), -1.0);
        assert!(matches!(result, Err(ConfigError::NegativeRadius(r)) if r == -1.0));
    }

    #[test]
    fn nan_radius_is_rejected() {
        let result = Particle::new(Vector2::zero(), Vector2::zero(), f64::NAN);
        assert!(matches!(result, Err(ConfigError::NonFinite { .. })));
    }

    #[test]
    fn forces_accumulate() {
        let mut p = particle(0.0, 0.0, 0.0, 0.0);
        p.add_force(Vector2::new(1.0, 2.0));
        p.add_force(Vector2::new(-0.5, 1.0));
        assert_eq!(p.force(), Vector2::new(0.5, 3.0));
    }

    #[test]
    fn integrate_moves_position_before_applying_force() {
        let mut p = particle(10.0, 20.0, 2.0, -4.0);
        p.add_force(Vector2::new(100.0, 100.0));
        p.integrate(0.5);

        // Position uses the old velocity
        assert_eq!(p.position, Vector2::new(11.0, 18.0));
        // Velocity picks up force * dt
        assert_eq!(p.velocity, Vector2::new(52.0, 46.0));
        // Accumulator is cleared
        assert_eq!(p.force(), Vector2::zero());
    }
}
