//! 3D SPH fluid solver over a fixed particle lattice.
//!
//! Particles start on a regular grid, then evolve under gravity, pairwise
//! pressure, and pairwise viscosity, confined to a rectangular domain by a
//! soft penalty force plus a hard reflecting clamp. The particle population
//! is fixed at construction; particles only move.
//!
//! Each step runs four data-parallel phases in strict order: density
//! estimation, force assembly (accelerations are reset and rebuilt in place),
//! integration with boundary reflection, and color derivation. The join at
//! the end of each rayon pass is the barrier between phases.
//!
//! # Example
//!
//! ```
//! use sph3d::{SimControls, SphSimulation3D};
//!
//! let mut sim = SphSimulation3D::new(4, 4, 4, 0.8);
//! let controls = SimControls {
//!     running: true,
//!     ..Default::default()
//! };
//!
//! for _ in 0..3 {
//!     sim.step(1.0 / 120.0, &controls);
//! }
//!
//! // The fluid is falling under gravity.
//! assert!(sim.average_velocity().y < 0.0);
//! ```

pub mod color;
pub mod constants;
pub mod density;
pub mod diagnostics;
pub mod forces;
pub mod integrate;
pub mod kernels;
pub mod lattice;
pub mod params;
pub mod serde_utils;
pub mod spatial_hash;

pub use color::ColorMode;
pub use glam::Vec3;
pub use lattice::Lattice;
pub use params::{Domain, SimControls, SimParams};
pub use spatial_hash::SpatialHash;

use serde::{Deserialize, Serialize};

/// Neighbor search strategy for the O(N^2) phases.
///
/// Brute force is the reference semantics; the spatial hash visits the same
/// pair set when the bucket size is at least the interaction radius, but sums
/// contributions in a different order, so the last float bits can differ.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum NeighborSearch {
    /// Test every particle against every other particle.
    #[default]
    BruteForce,
    /// Uniform spatial hash with bucket size equal to the interaction radius.
    SpatialHash,
}

/// The simulation: a particle lattice plus solver parameters.
///
/// `step` is synchronous and atomic from the caller's perspective: it returns
/// only after all phases completed for all particles. The caller must not
/// read or mutate the lattice while a step is in flight.
#[derive(Serialize, Deserialize)]
pub struct SphSimulation3D {
    /// All per-particle state.
    pub lattice: Lattice,
    /// Solver parameters (defaults reproduce the reference constants).
    pub params: SimParams,
    /// Neighbor search strategy for the density and force phases.
    pub neighbor_search: NeighborSearch,

    #[serde(skip)]
    hash: Option<SpatialHash>,
}

impl SphSimulation3D {
    /// Create a simulation with an `nx * ny * nz` lattice spaced by `scale`
    /// and default parameters.
    pub fn new(nx: usize, ny: usize, nz: usize, scale: f32) -> Self {
        Self {
            lattice: Lattice::new(nx, ny, nz, scale),
            params: SimParams::default(),
            neighbor_search: NeighborSearch::default(),
            hash: None,
        }
    }

    /// Advance the simulation by `dt`.
    ///
    /// A no-op when `controls.running` is false. When both color toggles are
    /// set, pressure mode wins (see [`SimControls`]).
    pub fn step(&mut self, dt: f32, controls: &SimControls) {
        debug_assert!(dt > 0.0 && dt.is_finite(), "invalid timestep: {}", dt);
        if !controls.running || self.lattice.is_empty() {
            return;
        }

        let rest_density = density::rest_density(&self.params, self.lattice.len());
        let h = self.params.smoothing_radius;

        // A degenerate radius disables all pairwise terms; the hash cannot be
        // built with a zero bucket, and brute force costs nothing then.
        if self.neighbor_search == NeighborSearch::SpatialHash && h > 0.0 {
            // The domain is fixed for the simulation's lifetime, so only a
            // radius change invalidates the cached hash.
            let hash = match &mut self.hash {
                Some(hash) if hash.cell_size() == h => hash,
                slot => slot.insert(SpatialHash::new(&self.params.domain, h)),
            };
            hash.rebuild(&self.lattice.positions);
            density::compute_hashed(&mut self.lattice, &self.params, hash);
            forces::compute_hashed(&mut self.lattice, &self.params, rest_density, hash);
        } else {
            density::compute(&mut self.lattice, &self.params);
            forces::compute(&mut self.lattice, &self.params, rest_density);
        }

        integrate::step(&mut self.lattice, dt, &self.params);
        color::apply(
            &mut self.lattice,
            &self.params,
            rest_density,
            controls.color_mode(),
        );
    }

    /// Arithmetic mean of the velocity field. Zero right after construction.
    pub fn average_velocity(&self) -> Vec3 {
        diagnostics::average_velocity(&self.lattice)
    }

    /// Total particle count.
    pub fn particle_count(&self) -> usize {
        self.lattice.len()
    }

    /// Save the full simulation state (lattice + params) to pretty JSON.
    ///
    /// `f32` values round-trip exactly through serde_json.
    pub fn save_json(&self, path: &std::path::Path) -> Result<(), Box<dyn std::error::Error>> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    /// Load a simulation saved with [`save_json`](Self::save_json).
    pub fn load_json(path: &std::path::Path) -> Result<Self, Box<dyn std::error::Error>> {
        let json = std::fs::read_to_string(path)?;
        let sim = serde_json::from_str(&json)?;
        Ok(sim)
    }
}
