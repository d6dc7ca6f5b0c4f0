use glam::Vec2;
use wavetank::{ConfigError, FluidMetrics, FluidSim, SmoothRandom};

/// Zero diffusion and viscosity so the only pass that could move density is
/// advection.
fn still_sim(size: usize) -> FluidSim {
    FluidSim::new(size, 0.1, 0.0, 0.0).expect("valid configuration")
}

#[test]
fn rejects_invalid_configuration() {
    assert_eq!(
        FluidSim::new(2, 0.1, 0.0, 0.0).unwrap_err(),
        ConfigError::GridTooSmall(2)
    );
    assert!(matches!(
        FluidSim::new(32, 0.0, 0.0, 0.0).unwrap_err(),
        ConfigError::NonPositiveTimeStep(_)
    ));
    assert!(matches!(
        FluidSim::new(32, 0.1, -1.0, 0.0).unwrap_err(),
        ConfigError::NegativeRate { name: "diffusion", .. }
    ));
    assert!(matches!(
        FluidSim::new(32, 0.1, 0.0, -1.0).unwrap_err(),
        ConfigError::NegativeRate { name: "viscosity", .. }
    ));
}

#[test]
fn advection_is_identity_under_zero_velocity() {
    let mut sim = still_sim(32);

    // Arbitrary interior pattern, no velocity anywhere.
    for y in 2..30 {
        for x in 2..30 {
            sim.add_density(x, y, ((x * 31 + y * 7) % 13) as f32);
        }
    }
    let before = sim.density().clone();

    sim.step();

    for y in 1..31 {
        for x in 1..31 {
            assert_eq!(
                sim.density().get(x, y),
                before.get(x, y),
                "interior density must be untouched at ({x}, {y})"
            );
        }
    }
}

#[test]
fn projection_reduces_divergence() {
    let mut sim = FluidSim::new(48, 0.1, 0.0, 0.0).expect("valid configuration");

    // Deterministic seeded velocity field with plenty of divergence.
    let mut noise = SmoothRandom::from_seed(-4.0, 4.0, 0.6, 7);
    for y in 1..47 {
        for x in 1..47 {
            sim.add_velocity(x, y, Vec2::new(noise.next_value(), noise.next_value()));
        }
    }

    let before = FluidMetrics::analyze(&sim, 0).divergence_norm;
    sim.step();
    let after = FluidMetrics::analyze(&sim, 1).divergence_norm;

    assert!(
        after < before,
        "projection should reduce divergence: before {before}, after {after}"
    );
}

#[test]
fn forcing_is_additive() {
    let mut once = still_sim(32);
    let mut twice = still_sim(32);

    once.add_density(10, 12, 5.0);
    once.add_velocity(10, 12, Vec2::new(1.5, -2.0));

    for _ in 0..2 {
        twice.add_density(10, 12, 5.0);
        twice.add_velocity(10, 12, Vec2::new(1.5, -2.0));
    }

    assert_eq!(twice.density().get(10, 12), 2.0 * once.density().get(10, 12));
    assert_eq!(
        twice.velocity_x().get(10, 12),
        2.0 * once.velocity_x().get(10, 12)
    );
    assert_eq!(
        twice.velocity_y().get(10, 12),
        2.0 * once.velocity_y().get(10, 12)
    );
}

#[test]
fn out_of_range_forcing_is_ignored() {
    let mut sim = still_sim(16);
    sim.add_density(100, 3, 10.0);
    sim.add_velocity(3, 100, Vec2::new(1.0, 1.0));

    let total: f32 = sim.density().as_slice().iter().sum();
    let motion: f32 = sim.velocity_x().as_slice().iter().chain(sim.velocity_y().as_slice()).sum();
    assert_eq!(total, 0.0);
    assert_eq!(motion, 0.0);
}

#[test]
fn boundaries_obey_rules_after_step() {
    let mut sim = FluidSim::new(32, 0.1, 0.0001, 0.0001).expect("valid configuration");
    sim.add_density(16, 16, 200.0);
    sim.add_velocity(16, 16, Vec2::new(3.0, -1.0));

    for _ in 0..3 {
        sim.step();
    }

    let n = 32;
    let d = sim.density();
    let vx = sim.velocity_x();
    let vy = sim.velocity_y();

    for i in 1..n - 1 {
        assert_eq!(d.get(i, 0), d.get(i, 1));
        assert_eq!(d.get(i, n - 1), d.get(i, n - 2));
        assert_eq!(vx.get(0, i), -vx.get(1, i));
        assert_eq!(vx.get(n - 1, i), -vx.get(n - 2, i));
        assert_eq!(vy.get(i, 0), -vy.get(i, 1));
        assert_eq!(vy.get(i, n - 1), -vy.get(i, n - 2));
    }

    assert_eq!(d.get(0, 0), 0.5 * (d.get(1, 0) + d.get(0, 1)));
    assert_eq!(
        d.get(n - 1, n - 1),
        0.5 * (d.get(n - 2, n - 1) + d.get(n - 1, n - 2))
    );
}

#[test]
fn density_persists_through_steps() {
    let mut sim = FluidSim::new(50, 0.1, 0.0001, 0.0001).expect("valid configuration");
    sim.add_density(25, 25, 100.0);

    for _ in 0..5 {
        sim.step();
    }

    let mut nearby = 0.0;
    for y in 20..30 {
        for x in 20..30 {
            nearby += sim.density().get(x, y);
        }
    }
    assert!(
        nearby > 1.0,
        "density should persist after steps, got {nearby}"
    );
}
