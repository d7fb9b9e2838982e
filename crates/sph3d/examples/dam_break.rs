//! Dam break: a 10x50x10 column of fluid dropped into the domain with a
//! little horizontal jitter, printing solver diagnostics as it collapses.
//!
//! Run with: cargo run --release --example dam_break

use rand::Rng;
use sph3d::{diagnostics, SimControls, SphSimulation3D};

fn main() {
    let mut sim = SphSimulation3D::new(10, 50, 10, 0.8);
    println!("dam break: {} particles", sim.particle_count());

    // Break the perfect lattice symmetry so the column splashes sideways.
    let mut rng = rand::thread_rng();
    for vel in &mut sim.lattice.velocities {
        vel.x = rng.gen_range(-0.5..0.5);
        vel.z = rng.gen_range(-0.5..0.5);
    }

    let controls = SimControls {
        running: true,
        ..Default::default()
    };
    let dt = 1.0 / 60.0;

    for frame in 0..600 {
        sim.step(dt, &controls);

        if frame % 60 == 0 {
            let avg = sim.average_velocity();
            println!(
                "t={:6.2}s  avg_vel=({:7.3}, {:7.3}, {:7.3})  max_speed={:7.3}  avg_density={:8.3}",
                frame as f32 * dt,
                avg.x,
                avg.y,
                avg.z,
                diagnostics::max_speed(&sim.lattice),
                diagnostics::average_density(&sim.lattice),
            );
        }
    }

    let avg = sim.average_velocity();
    println!(
        "done: avg_vel=({:.3}, {:.3}, {:.3})",
        avg.x, avg.y, avg.z
    );
}
