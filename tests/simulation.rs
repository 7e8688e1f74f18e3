use dotfield::{
    ConfigError, EnvironmentCorrector, ForceLaw, LineStyle, Particle, PointerState, Simulation,
    SimulationParams, Vector2,
};

use std::io::Write;

const TOLERANCE: f64 = 1e-12;

/// Field of 1000x800 with the default constants
pub fn environment() -> EnvironmentCorrector {
    EnvironmentCorrector::new(1000.0, 800.0, 50.0, 50.0, 1_000_000.0, 1000.0).unwrap()
}

pub fn law() -> ForceLaw {
    ForceLaw::new(75.0, 150.0, 0.02).unwrap()
}

pub fn dot(px: f64, py: f64, vx: f64, vy: f64) -> Particle {
    Particle::new(Vector2::new(px, py), Vector2::new(vx, vy), 5.0).unwrap()
}

pub fn simulation(particles: Vec<Particle>) -> Simulation {
    Simulation::new(particles, law(), environment(), LineStyle::new(10.0, 150.0).unwrap()).unwrap()
}

fn assert_close(actual: Vector2, expected: Vector2) {
    assert!(
        (actual.x - expected.x).abs() < TOLERANCE && (actual.y - expected.y).abs() < TOLERANCE,
        "expected {:?}, got {:?}",
        expected,
        actual
    );
}

// ==================================================================================
// Full tick scenarios
// ==================================================================================

#[test]
fn two_particles_one_tick() {
    let mut sim = simulation(vec![dot(100.0, 100.0, 10.0, 0.0), dot(200.0, 100.0, 0.0, -5.0)]);
    assert_eq!(sim.pairs().len(), 1);

    let stats = sim.step(0.01, &PointerState::released());
    assert_eq!(stats.engaged_pairs, 1);

    // d = 100, magnitude 0.5 pulling the pair together; no damping, no wrap.
    // Positions advance with the old velocities, then velocities take force * dt.
    let a = &sim.particles()[0];
    let b = &sim.particles()[1];
    assert_close(a.position, Vector2::new(100.1, 100.0));
    assert_close(a.velocity, Vector2::new(10.005, 0.0));
    assert_close(b.position, Vector2::new(200.0, 99.95));
    assert_close(b.velocity, Vector2::new(-0.005, -5.0));

    assert_eq!(a.force(), Vector2::zero());
    assert_eq!(b.force(), Vector2::zero());
}

#[test]
fn pressed_pointer_accelerates_nearby_particle() {
    let mut sim = simulation(vec![dot(510.0, 400.0, 0.0, 0.0)]);
    let pointer = PointerState::new(Vector2::new(500.0, 400.0), true);

    sim.step(1.0 / 120.0, &pointer);

    let particle = &sim.particles()[0];
    // Position is unchanged because the particle was at rest before the tick
    assert_close(particle.position, Vector2::new(510.0, 400.0));
    assert_close(particle.velocity, Vector2::new(1000.0 / 120.0, 0.0));
}

#[test]
fn wrap_happens_before_integration() {
    let mut sim = simulation(vec![dot(1060.0, 400.0, 120.0, 0.0)]);

    sim.step(0.01, &PointerState::released());

    // Damping adds (-120, 0), the wrap moves x from 1060 to -40,
    // then integration advances from the wrapped position.
    let particle = &sim.particles()[0];
    assert_close(particle.position, Vector2::new(-38.8, 400.0));
    assert_close(particle.velocity, Vector2::new(118.8, 0.0));
}

#[test]
fn distant_pair_is_inert_and_hidden() {
    let mut sim = simulation(vec![dot(0.0, 0.0, 0.0, 0.0), dot(300.0, 0.0, 0.0, 0.0)]);

    let stats = sim.step(0.01, &PointerState::released());

    assert_eq!(stats.engaged_pairs, 0);
    assert_eq!(sim.particles()[0].velocity, Vector2::zero());
    assert_eq!(sim.particles()[1].velocity, Vector2::zero());

    let line = sim.lines().next().unwrap();
    assert!(!line.visible);
    assert_eq!(line.alpha, 0.0);
    assert_eq!(sim.visible_lines().count(), 0);
}

#[test]
fn coincident_particles_stay_finite() {
    let mut sim = simulation(vec![dot(300.0, 300.0, 0.0, 0.0), dot(300.0, 300.0, 0.0, 0.0)]);
    let pointer = PointerState::new(Vector2::new(300.0, 300.0), true);

    let stats = sim.step(0.01, &pointer);

    assert_eq!(stats.engaged_pairs, 0);
    for particle in sim.particles() {
        assert!(particle.position.is_finite());
        assert!(particle.velocity.is_finite());
        assert_eq!(particle.velocity, Vector2::zero());
    }
}

#[test]
fn pair_forces_conserve_momentum() {
    let mut params = SimulationParams::default();
    params.particle_count = 80;
    params.seed = Some(5);
    let mut sim = Simulation::from_params(&params).unwrap();

    let momentum = |sim: &Simulation| {
        sim.particles()
            .iter()
            .fold(Vector2::zero(), |sum, p| sum.add(p.velocity))
    };

    // Initial speeds are below the damping threshold, so only line forces act
    let before = momentum(&sim);
    sim.step(1.0 / 120.0, &PointerState::released());
    let after = momentum(&sim);

    assert!(before.distance(after) < 1e-9, "momentum drifted from {:?} to {:?}", before, after);
}

#[test]
fn pointer_state_is_read_not_written() {
    let mut sim = simulation(vec![dot(100.0, 100.0, 0.0, 0.0)]);
    let pointer = PointerState::new(Vector2::new(90.0, 100.0), true);
    let copy = pointer;

    sim.step(0.01, &pointer);

    assert_eq!(pointer, copy);
}

// ==================================================================================
// Scenario files
// ==================================================================================

#[test]
fn scenario_file_is_loaded() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "particle_count: 25").unwrap();
    writeln!(file, "seed: 9").unwrap();
    writeln!(file, "force_coefficient: 0.05").unwrap();

    let params = SimulationParams::load(file.path()).unwrap();
    assert_eq!(params.particle_count, 25);
    assert_eq!(params.force_coefficient, 0.05);
    assert_eq!(params.neutral_distance, 75.0);

    let sim = Simulation::from_params(&params).unwrap();
    assert_eq!(sim.particles().len(), 25);
    assert_eq!(sim.pairs().len(), 300);
}

#[test]
fn invalid_scenario_file_is_rejected() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "neutral_distance: 150.0").unwrap();
    writeln!(file, "max_distance: 100.0").unwrap();

    let err = SimulationParams::load(file.path()).unwrap_err();
    assert!(matches!(err, ConfigError::NeutralNotBelowMax { .. }));
    assert!(err.to_string().contains("neutral distance"));
}

#[test]
fn missing_scenario_file_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = SimulationParams::load(&dir.path().join("missing.yaml")).unwrap_err();
    assert!(matches!(err, ConfigError::Io { .. }));
}

#[test]
fn bundled_scenario_is_valid() {
    let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("scenarios")
        .join("dense.yaml");
    let params = SimulationParams::load(&path).unwrap();
    assert_eq!(params.particle_count, 250);
    assert!(params.parallel_pairs);
}
