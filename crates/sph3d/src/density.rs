//! Density field evaluation.
//!
//! For every particle the density is a weighted count of its neighbors inside
//! the interaction radius. This phase must complete for all particles before
//! the force phase runs: forces read every neighbor's density, not only the
//! particle being processed. The rayon join at the end of the parallel pass
//! is that barrier.

use rayon::prelude::*;

use crate::kernels::smoothing_weight;
use crate::lattice::Lattice;
use crate::params::SimParams;
use crate::spatial_hash::SpatialHash;

/// Rest density of a uniformly space-filling population: domain volume / N.
///
/// Anchors the pressure term at zero when local density matches the ideal
/// uniform distribution.
pub fn rest_density(params: &SimParams, particle_count: usize) -> f32 {
    params.domain.volume() / particle_count as f32
}

/// Brute-force all-pairs density estimate (reference semantics).
pub fn compute(lattice: &mut Lattice, params: &SimParams) {
    let h = params.smoothing_radius;
    let positions = &lattice.positions;

    lattice
        .densities
        .par_iter_mut()
        .enumerate()
        .for_each(|(i, density)| {
            let a = positions[i];
            let mut sum = 0.0;
            for (j, &b) in positions.iter().enumerate() {
                if j == i {
                    continue;
                }
                sum += smoothing_weight(a.distance(b), h);
            }
            *density = sum;
        });
}

/// Density estimate using a spatial hash with bucket size >= h.
///
/// Visits the same pair set as [`compute`]; only the summation order differs.
pub fn compute_hashed(lattice: &mut Lattice, params: &SimParams, hash: &SpatialHash) {
    let h = params.smoothing_radius;
    let positions = &lattice.positions;

    lattice
        .densities
        .par_iter_mut()
        .enumerate()
        .for_each(|(i, density)| {
            let a = positions[i];
            let mut sum = 0.0;
            hash.for_each_candidate(a, |j| {
                if j != i {
                    sum += smoothing_weight(a.distance(positions[j]), h);
                }
            });
            *density = sum;
        });
}
