/*
 * Physics Module
 *
 * This module owns the particle arena and advances it one tick at a time.
 * Every tick runs three passes in a fixed order:
 * 1. Line forces for every pair (all reads see the positions from before the tick)
 * 2. Environment corrections for every particle (pointer, damping, wrap)
 * 3. Integration of every particle, which also clears its force accumulator
 *
 * Pairs store indices into the arena instead of references, so the pair pass
 * can optionally be evaluated in parallel: contributions are computed on the rayon
 * pool and then folded into the accumulators in pair order on the calling thread,
 * which gives exactly the same result as the sequential pass.
 */

use rayon::prelude::*;

use crate::environment::EnvironmentCorrector;
use crate::error::ConfigError;
use crate::force::{ForceLaw, LineStyle, LineView, PairContribution, PairInteraction};
use crate::params::SimulationParams;
use crate::particle::Particle;
use crate::pointer::PointerState;
use crate::spawn::DotFactory;

pub struct Simulation {
    particles: Vec<Particle>,
    pairs: Vec<PairInteraction>,
    environment: EnvironmentCorrector,
    line_style: LineStyle,
    pub parallel_pairs: bool,
    ticks: u64,
}

// Summary of one tick, mostly for the debug overlay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StepStats {
    pub engaged_pairs: usize,
}

impl Simulation {
    pub fn new(
        particles: Vec<Particle>,
        law: ForceLaw,
        environment: EnvironmentCorrector,
        line_style: LineStyle,
    ) -> Result<Self, ConfigError> {
        let pairs = all_pairs(particles.len(), law)?;

        Ok(Self {
            particles,
            pairs,
            environment,
            line_style,
            parallel_pairs: false,
            ticks: 0,
        })
    }

    // Validate the parameters and spawn a random field
    pub fn from_params(params: &SimulationParams) -> Result<Self, ConfigError> {
        params.validate()?;

        let mut factory = DotFactory::new(params);
        let particles = factory.create_many(params.particle_count)?;

        let mut simulation = Self::new(
            particles,
            params.force_law()?,
            params.environment()?,
            params.line_style()?,
        )?;
        simulation.parallel_pairs = params.parallel_pairs;

        tracing::info!(
            particles = simulation.particles.len(),
            pairs = simulation.pairs.len(),
            width = params.width,
            height = params.height,
            seed = ?params.seed,
            "simulation created"
        );

        Ok(simulation)
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn pairs(&self) -> &[PairInteraction] {
        &self.pairs
    }

    pub fn environment(&self) -> &EnvironmentCorrector {
        &self.environment
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    // Advance the whole field by dt seconds
    pub fn step(&mut self, dt: f64, pointer: &PointerState) -> StepStats {
        let engaged_pairs = self.apply_pair_forces();

        for particle in &mut self.particles {
            self.environment.apply(particle, pointer);
        }

        for particle in &mut self.particles {
            particle.integrate(dt);
        }

        self.ticks += 1;
        tracing::trace!(tick = self.ticks, engaged_pairs, pressed = pointer.pressed, "tick");

        StepStats { engaged_pairs }
    }

    // Returns the number of pairs that exerted a force
    fn apply_pair_forces(&mut self) -> usize {
        if self.parallel_pairs {
            let particles = &self.particles;
            let contributions: Vec<PairContribution> = self
                .pairs
                .par_iter()
                .map(|pair| pair.contribution(particles))
                .collect();

            let mut engaged = 0;
            for (pair, contribution) in self.pairs.iter().zip(&contributions) {
                pair.apply(&mut self.particles, contribution);
                if contribution.contact.is_engaged() {
                    engaged += 1;
                }
            }
            engaged
        } else {
            let mut engaged = 0;
            for pair in &self.pairs {
                if pair.apply_forces(&mut self.particles).is_engaged() {
                    engaged += 1;
                }
            }
            engaged
        }
    }

    // Render view of every pair, computed from the current positions
    pub fn lines(&self) -> impl Iterator<Item = LineView> + '_ {
        self.pairs
            .iter()
            .map(move |pair| LineView::new(pair, &self.particles, &self.line_style))
    }

    pub fn visible_lines(&self) -> impl Iterator<Item = LineView> + '_ {
        self.lines().filter(|line| line.visible)
    }
}

// Every unordered pair (i, j) with i < j
pub fn all_pairs(count: usize, law: ForceLaw) -> Result<Vec<PairInteraction>, ConfigError> {
    let mut pairs = Vec::with_capacity(count * count.saturating_sub(1) / 2);
    for i in 0..count {
        for j in (i + 1)..count {
            pairs.push(PairInteraction::new(i, j, law)?);
        }
    }
    Ok(pairs)
}
