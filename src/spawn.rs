/*
 * Spawn Module
 *
 * DotFactory creates randomly placed particles inside the simulation bounds.
 * A fixed seed gives a reproducible field; otherwise the generator is seeded from entropy.
 */

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::ConfigError;
use crate::params::SimulationParams;
use crate::particle::Particle;
use crate::vector::Vector2;

pub struct DotFactory {
    width: f64,
    height: f64,
    min_radius: f64,
    max_radius: f64,
    max_initial_speed: f64,
    rng: StdRng,
}

impl DotFactory {
    pub fn new(params: &SimulationParams) -> Self {
        let rng = match params.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        Self {
            width: params.width,
            height: params.height,
            min_radius: params.min_radius,
            max_radius: params.max_radius,
            max_initial_speed: params.max_initial_speed,
            rng,
        }
    }

    pub fn create(&mut self) -> Result<Particle, ConfigError> {
        let position = Vector2::new(
            self.rng.gen::<f64>() * self.width,
            self.rng.gen::<f64>() * self.height,
        );

        // Each component in [-max/2, max/2)
        let velocity = Vector2::new(
            (self.rng.gen::<f64>() - 0.5) * self.max_initial_speed,
            (self.rng.gen::<f64>() - 0.5) * self.max_initial_speed,
        );

        let radius = self.rng.gen::<f64>() * (self.max_radius - self.min_radius) + self.min_radius;

        Particle::new(position, velocity, radius)
    }

    pub fn create_many(&mut self, count: usize) -> Result<Vec<Particle>, ConfigError> {
        (0..count).map(|_| self.create()).collect()
    }
}
