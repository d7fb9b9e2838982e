//! Lattice-level reductions for telemetry and debugging.
//!
//! Read-only; nothing here feeds back into the physics.

use glam::Vec3;
use rayon::prelude::*;

use crate::lattice::Lattice;

/// Arithmetic mean of the velocity vector over all particles.
pub fn average_velocity(lattice: &Lattice) -> Vec3 {
    if lattice.is_empty() {
        return Vec3::ZERO;
    }
    let sum = lattice
        .velocities
        .par_iter()
        .copied()
        .reduce(|| Vec3::ZERO, |a, b| a + b);
    sum / lattice.len() as f32
}

/// Largest particle speed, for stability monitoring.
pub fn max_speed(lattice: &Lattice) -> f32 {
    lattice
        .velocities
        .par_iter()
        .map(|v| v.length())
        .reduce(|| 0.0, f32::max)
}

/// Arithmetic mean of the density field.
pub fn average_density(lattice: &Lattice) -> f32 {
    if lattice.is_empty() {
        return 0.0;
    }
    let sum: f32 = lattice.densities.par_iter().sum();
    sum / lattice.len() as f32
}
