/*
 * Force Module
 *
 * This module holds the pairwise interaction between two dots:
 * - ForceLaw maps a separation to a signed force magnitude
 *   (negative below the neutral distance pushes apart, positive above it pulls together,
 *   and nothing at all beyond the max distance)
 * - PairInteraction binds two particle indices to a law and applies equal and opposite forces
 * - LineStyle and LineView derive what the renderer needs to draw the connecting line
 */

use crate::error::{ensure_finite, ConfigError};
use crate::particle::Particle;
use crate::vector::Vector2;

/// Separations below this are treated as coincident and produce no force.
pub const MIN_SEPARATION: f64 = 1e-9;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ForceLaw {
    neutral_distance: f64,
    max_distance: f64,
    coefficient: f64,
}

impl ForceLaw {
    pub fn new(neutral_distance: f64, max_distance: f64, coefficient: f64) -> Result<Self, ConfigError> {
        ensure_finite("neutral distance", neutral_distance)?;
        ensure_finite("max distance", max_distance)?;
        ensure_finite("force coefficient", coefficient)?;

        if neutral_distance >= max_distance {
            return Err(ConfigError::NeutralNotBelowMax {
                neutral: neutral_distance,
                max: max_distance,
            });
        }
        if coefficient < 0.0 {
            return Err(ConfigError::NegativeCoefficient(coefficient));
        }

        Ok(Self {
            neutral_distance,
            max_distance,
            coefficient,
        })
    }

    pub fn neutral_distance(&self) -> f64 {
        self.neutral_distance
    }

    pub fn max_distance(&self) -> f64 {
        self.max_distance
    }

    pub fn coefficient(&self) -> f64 {
        self.coefficient
    }

    // Signed force magnitude at separation d
    pub fn magnitude(&self, distance: f64) -> f64 {
        if distance <= self.max_distance {
            self.coefficient * (distance - self.neutral_distance)
        } else {
            0.0
        }
    }
}

// What happened to a pair during the force pass
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PairContact {
    // Farther apart than the law's max distance: inert and not drawn
    OutOfRange { distance: f64 },
    // Too close to define a direction: the pair contributes nothing this tick
    Coincident { distance: f64 },
    Engaged { distance: f64, magnitude: f64 },
}

impl PairContact {
    pub fn distance(&self) -> f64 {
        match *self {
            PairContact::OutOfRange { distance }
            | PairContact::Coincident { distance }
            | PairContact::Engaged { distance, .. } => distance,
        }
    }

    pub fn is_engaged(&self) -> bool {
        matches!(self, PairContact::Engaged { .. })
    }
}

// The force a pair puts on its first particle; the second receives the negation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PairContribution {
    pub contact: PairContact,
    pub force_on_a: Vector2,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PairInteraction {
    a: usize,
    b: usize,
    law: ForceLaw,
}

impl PairInteraction {
    pub fn new(a: usize, b: usize, law: ForceLaw) -> Result<Self, ConfigError> {
        if a == b {
            return Err(ConfigError::SelfPair(a));
        }
        Ok(Self { a, b, law })
    }

    pub fn indices(&self) -> (usize, usize) {
        (self.a, self.b)
    }

    pub fn law(&self) -> &ForceLaw {
        &self.law
    }

    // Compute the pair's force without touching the particles
    pub fn contribution(&self, particles: &[Particle]) -> PairContribution {
        let pos_a = particles[self.a].position;
        let pos_b = particles[self.b].position;
        let distance = pos_a.distance(pos_b);

        // Skip all work for pairs with no physical or visible effect
        if distance > self.law.max_distance() {
            return PairContribution {
                contact: PairContact::OutOfRange { distance },
                force_on_a: Vector2::zero(),
            };
        }

        if distance < MIN_SEPARATION {
            return PairContribution {
                contact: PairContact::Coincident { distance },
                force_on_a: Vector2::zero(),
            };
        }

        let magnitude = self.law.magnitude(distance);
        let direction = pos_b.sub(pos_a).div(distance);

        PairContribution {
            contact: PairContact::Engaged { distance, magnitude },
            force_on_a: direction.scale(magnitude),
        }
    }

    // Add the contribution to both particles' accumulators
    pub fn apply(&self, particles: &mut [Particle], contribution: &PairContribution) {
        if !contribution.contact.is_engaged() {
            return;
        }
        particles[self.a].add_force(contribution.force_on_a);
        particles[self.b].add_force(contribution.force_on_a.scale(-1.0));
    }

    pub fn apply_forces(&self, particles: &mut [Particle]) -> PairContact {
        let contribution = self.contribution(particles);
        self.apply(particles, &contribution);
        contribution.contact
    }
}

// Transparency ramp for drawn lines
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineStyle {
    min_scale_length: f64,
    max_scale_length: f64,
}

impl LineStyle {
    pub fn new(min_scale_length: f64, max_scale_length: f64) -> Result<Self, ConfigError> {
        ensure_finite("line alpha min length", min_scale_length)?;
        ensure_finite("line alpha max length", max_scale_length)?;
        if min_scale_length >= max_scale_length {
            return Err(ConfigError::InvalidAlphaRange {
                min: min_scale_length,
                max: max_scale_length,
            });
        }
        Ok(Self {
            min_scale_length,
            max_scale_length,
        })
    }

    // Fully opaque up to the min length, fading linearly to transparent at the max length
    pub fn alpha(&self, distance: f64) -> f64 {
        if distance <= self.min_scale_length {
            return 1.0;
        }
        let span = self.max_scale_length - self.min_scale_length;
        (1.0 - (distance - self.min_scale_length) / span).max(0.0)
    }
}

// Everything the renderer needs to draw one line
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineView {
    pub start: Vector2,
    pub end: Vector2,
    pub distance: f64,
    pub visible: bool,
    pub alpha: f64,
    pub width_hint: f64,
}

impl LineView {
    pub fn new(pair: &PairInteraction, particles: &[Particle], style: &LineStyle) -> Self {
        let (a, b) = pair.indices();
        let start = particles[a].position;
        let end = particles[b].position;
        let distance = start.distance(end);

        Self {
            start,
            end,
            distance,
            visible: distance <= pair.law().max_distance(),
            alpha: style.alpha(distance),
            width_hint: (particles[a].radius() + particles[b].radius()) / 6.0,
        }
    }
}
