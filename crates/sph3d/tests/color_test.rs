//! Color strategy tests: mode selection, precedence, and exact ramp values.

use sph3d::{SimControls, SphSimulation3D, Vec3};

#[test]
fn test_default_color_is_blue_after_step() {
    let mut sim = SphSimulation3D::new(2, 2, 2, 0.8);
    let controls = SimControls {
        running: true,
        ..Default::default()
    };
    sim.step(0.01, &controls);

    for color in &sim.lattice.colors {
        assert_eq!(*color, Vec3::new(0.0, 0.0, 1.0));
    }
}

#[test]
fn test_pressure_color_for_isolated_particle() {
    // A single particle has zero density, so its pressure is
    // P = stiffness * (0 - rest) and the normalized value is
    // (P + rest) / (2 rest) = (1 - stiffness) / 2 = 0.2 for stiffness 0.6.
    let mut sim = SphSimulation3D::new(1, 1, 1, 1.0);
    let controls = SimControls {
        running: true,
        pressure_color: true,
        speed_color: false,
    };
    sim.step(0.01, &controls);

    let color = sim.lattice.colors[0];
    assert!((color.x - 0.2).abs() < 1e-6);
    assert!((color.y - 0.16).abs() < 1e-6);
    assert!((color.z - 0.8).abs() < 1e-6);
}

#[test]
fn test_pressure_mode_wins_when_both_toggles_set() {
    let mut with_both = SphSimulation3D::new(3, 3, 3, 0.8);
    let mut pressure_only = SphSimulation3D::new(3, 3, 3, 0.8);

    with_both.step(
        0.01,
        &SimControls {
            running: true,
            pressure_color: true,
            speed_color: true,
        },
    );
    pressure_only.step(
        0.01,
        &SimControls {
            running: true,
            pressure_color: true,
            speed_color: false,
        },
    );

    assert_eq!(with_both.lattice.colors, pressure_only.lattice.colors);
}

#[test]
fn test_speed_color_tracks_velocity_magnitude() {
    let mut sim = SphSimulation3D::new(1, 1, 1, 1.0);
    // Fast enough to saturate the ramp after one step.
    sim.lattice.velocities[0] = Vec3::new(0.0, 0.0, 3.0 * sim.params.speed_color_scale);
    let controls = SimControls {
        running: true,
        pressure_color: false,
        speed_color: true,
    };
    sim.step(0.001, &controls);

    assert_eq!(sim.lattice.colors[0], Vec3::new(1.0, 0.0, 0.0));
}

#[test]
fn test_switching_modes_resets_to_default() {
    let mut sim = SphSimulation3D::new(2, 2, 2, 0.8);
    let speed = SimControls {
        running: true,
        pressure_color: false,
        speed_color: true,
    };
    sim.step(0.01, &speed);

    // Toggles off again: the next step must restore the default color.
    let plain = SimControls {
        running: true,
        ..Default::default()
    };
    sim.step(0.01, &plain);

    for color in &sim.lattice.colors {
        assert_eq!(*color, Vec3::new(0.0, 0.0, 1.0));
    }
}
