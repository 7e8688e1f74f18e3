//! Property-based tests for the simulation core.
//!
//! - Wrapping lands inside the margin and is stable under reapplication
//! - Vector subtraction and addition undo each other
//! - Line forces are always equal and opposite
//! - The force law is linear inside its range and zero outside it

use dotfield::environment::EnvironmentCorrector;
use dotfield::{ForceLaw, PairInteraction, Particle, Vector2};
use proptest::prelude::*;

fn corrector(width: f64, height: f64) -> EnvironmentCorrector {
    EnvironmentCorrector::new(width, height, 50.0, 50.0, 1_000_000.0, 1000.0).unwrap()
}

fn coordinate() -> impl Strategy<Value = f64> {
    -1.0e6..1.0e6f64
}

proptest! {
    #[test]
    fn wrap_lands_inside_margin(x in coordinate()) {
        let env = corrector(1000.0, 800.0);
        let wrapped = env.wrap_coordinate(x, 1000.0);
        prop_assert!(wrapped >= -50.0, "{} wrapped to {}", x, wrapped);
        prop_assert!(wrapped < 1050.0, "{} wrapped to {}", x, wrapped);
    }

    #[test]
    fn wrap_is_idempotent(x in coordinate(), width in 1.0..4000.0f64) {
        let env = corrector(width, 800.0);
        let once = env.wrap_coordinate(x, width);
        let twice = env.wrap_coordinate(once, width);
        prop_assert!((once - twice).abs() < 1e-9, "{} then {}", once, twice);
    }

    #[test]
    fn wrap_leaves_visible_positions_alone(x in 0.0..1000.0f64) {
        let env = corrector(1000.0, 800.0);
        prop_assert!((env.wrap_coordinate(x, 1000.0) - x).abs() < 1e-9);
    }

    #[test]
    fn sub_then_add_round_trips(
        vx in coordinate(), vy in coordinate(),
        wx in coordinate(), wy in coordinate(),
    ) {
        let v = Vector2::new(vx, vy);
        let w = Vector2::new(wx, wy);
        let back = v.sub(w).add(w);
        prop_assert!((back.x - v.x).abs() < 1e-6);
        prop_assert!((back.y - v.y).abs() < 1e-6);
    }

    #[test]
    fn pair_forces_cancel(
        ax in 0.0..1000.0f64, ay in 0.0..800.0f64,
        dx in -150.0..150.0f64, dy in -150.0..150.0f64,
    ) {
        let law = ForceLaw::new(75.0, 150.0, 0.02).unwrap();
        let mut particles = vec![
            Particle::new(Vector2::new(ax, ay), Vector2::zero(), 5.0).unwrap(),
            Particle::new(Vector2::new(ax + dx, ay + dy), Vector2::zero(), 5.0).unwrap(),
        ];
        let pair = PairInteraction::new(0, 1, law).unwrap();

        pair.apply_forces(&mut particles);

        let sum = particles[0].force().add(particles[1].force());
        prop_assert_eq!(sum, Vector2::zero());
        prop_assert!(particles[0].force().is_finite());
    }

    #[test]
    fn magnitude_is_linear_then_zero(
        neutral in 1.0..100.0f64,
        extra in 1.0..200.0f64,
        coefficient in 0.0..1.0f64,
        d in 0.0..500.0f64,
    ) {
        let max = neutral + extra;
        let law = ForceLaw::new(neutral, max, coefficient).unwrap();
        let magnitude = law.magnitude(d);

        if d <= max {
            prop_assert!((magnitude - coefficient * (d - neutral)).abs() < 1e-12);
        } else {
            prop_assert_eq!(magnitude, 0.0);
        }
        prop_assert!(law.magnitude(neutral).abs() < 1e-12);
    }
}
