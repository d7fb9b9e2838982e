//! Let a small block of fluid settle with the spatial hash enabled, then save
//! the state to JSON and reload it to verify the snapshot path.
//!
//! Run with: cargo run --release --example settle_and_save

use sph3d::{diagnostics, NeighborSearch, SimControls, SphSimulation3D};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut sim = SphSimulation3D::new(8, 8, 8, 0.8);
    sim.neighbor_search = NeighborSearch::SpatialHash;
    println!(
        "settling {} particles with the spatial hash",
        sim.particle_count()
    );

    let controls = SimControls {
        running: true,
        ..Default::default()
    };
    let dt = 1.0 / 120.0;

    for frame in 0..1200 {
        sim.step(dt, &controls);

        if frame % 240 == 0 {
            println!(
                "t={:5.2}s  max_speed={:7.3}  avg_density={:8.3}",
                frame as f32 * dt,
                diagnostics::max_speed(&sim.lattice),
                diagnostics::average_density(&sim.lattice),
            );
        }
    }

    let path = std::env::temp_dir().join("sph3d_settled.json");
    sim.save_json(&path)?;
    println!("saved snapshot to {}", path.display());

    let restored = SphSimulation3D::load_json(&path)?;
    assert_eq!(restored.lattice.positions, sim.lattice.positions);
    println!(
        "reloaded {} particles, state matches",
        restored.particle_count()
    );

    Ok(())
}
