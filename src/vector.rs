/*
 * Vector Module
 *
 * This module defines Vector2, the plain 2D value type used by the simulation core.
 * All operations return a new vector and never modify their inputs.
 */

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vector2 {
    pub x: f64,
    pub y: f64,
}

impl Vector2 {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub const fn zero() -> Self {
        Self { x: 0.0, y: 0.0 }
    }

    pub fn add(self, other: Vector2) -> Vector2 {
        Vector2::new(self.x + other.x, self.y + other.y)
    }

    pub fn sub(self, other: Vector2) -> Vector2 {
        Vector2::new(self.x - other.x, self.y - other.y)
    }

    pub fn scale(self, k: f64) -> Vector2 {
        Vector2::new(self.x * k, self.y * k)
    }

    // Division by a scalar is multiplication by its reciprocal
    pub fn div(self, k: f64) -> Vector2 {
        self.scale(1.0 / k)
    }

    pub fn component_mul(self, other: Vector2) -> Vector2 {
        Vector2::new(self.x * other.x, self.y * other.y)
    }

    // Euclidean distance between two points
    pub fn distance(self, other: Vector2) -> f64 {
        ((self.x - other.x).powi(2) + (self.y - other.y).powi(2)).sqrt()
    }

    pub fn length(self) -> f64 {
        Vector2::zero().distance(self)
    }

    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}
