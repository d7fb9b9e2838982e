//! Particle lattice: flat struct-of-arrays storage for all per-particle state.
//!
//! A logical coordinate `(i, j, k)` with `0 <= i < nx`, `0 <= j < ny`,
//! `0 <= k < nz` maps to the flat index `i*(ny*nz) + j*nz + k`. Particles are
//! never created, destroyed, or reordered after construction - they only move.

use glam::Vec3;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_COLOR, VERTICAL_OFFSET};
use crate::serde_utils;

/// The fixed-size body of simulated fluid.
///
/// Every scalar field lives in its own flat contiguous vector indexed by the
/// same flat-index function, so the solver phases can borrow the fields they
/// read as shared slices while writing exactly one field in parallel.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Lattice {
    /// Lattice resolution along X
    pub nx: usize,
    /// Lattice resolution along Y
    pub ny: usize,
    /// Lattice resolution along Z
    pub nz: usize,

    /// World-space positions, mutated every step
    #[serde(with = "serde_utils::vec3_list")]
    pub positions: Vec<Vec3>,
    /// Velocities, mutated every step
    #[serde(with = "serde_utils::vec3_list")]
    pub velocities: Vec<Vec3>,
    /// Accelerations, fully recomputed every step
    #[serde(with = "serde_utils::vec3_list")]
    pub accelerations: Vec<Vec3>,
    /// Smoothing-kernel density estimate, fully recomputed every step
    pub densities: Vec<f32>,
    /// Display colors [R, G, B]; derived, never feeds back into physics
    #[serde(with = "serde_utils::vec3_list")]
    pub colors: Vec<Vec3>,
}

impl Lattice {
    /// Build the initial lattice: a regular grid of particles spaced by
    /// `scale` and lifted by a fixed vertical offset, at rest, default color.
    ///
    /// Deterministic for given inputs. Non-positive resolution or scale is a
    /// caller error and is only checked in debug builds.
    pub fn new(nx: usize, ny: usize, nz: usize, scale: f32) -> Self {
        debug_assert!(nx > 0 && ny > 0 && nz > 0, "resolution must be positive");
        debug_assert!(scale > 0.0, "scale must be positive, got {}", scale);

        let count = nx * ny * nz;

        // Each cell is independent, so positions are filled in parallel.
        let positions: Vec<Vec3> = (0..count)
            .into_par_iter()
            .map(|id| {
                let i = id / (ny * nz);
                let rem = id % (ny * nz);
                let j = rem / nz;
                let k = rem % nz;
                Vec3::new(
                    i as f32 * scale,
                    j as f32 * scale + VERTICAL_OFFSET,
                    k as f32 * scale,
                )
            })
            .collect();

        Self {
            nx,
            ny,
            nz,
            positions,
            velocities: vec![Vec3::ZERO; count],
            accelerations: vec![Vec3::ZERO; count],
            densities: vec![0.0; count],
            colors: vec![Vec3::from(DEFAULT_COLOR); count],
        }
    }

    /// Total particle count `nx * ny * nz`.
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// Check if empty.
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Flat index of logical coordinate `(i, j, k)`.
    #[inline]
    pub fn flat_index(&self, i: usize, j: usize, k: usize) -> usize {
        i * (self.ny * self.nz) + j * self.nz + k
    }

    /// Interleaved vertex data for the presentation layer: for each particle
    /// in flat-index order, position (3 floats) followed by color (3 floats).
    ///
    /// Re-readable after every completed step; suitable for direct upload to
    /// a rendering buffer. Callers must not mutate particle state through any
    /// other channel while reading.
    pub fn render_vertices(&self) -> Vec<[f32; 6]> {
        self.positions
            .iter()
            .zip(self.colors.iter())
            .map(|(p, c)| [p.x, p.y, p.z, c.x, c.y, c.z])
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_factory_shape_and_rest_state() {
        let lattice = Lattice::new(3, 4, 5, 0.8);
        assert_eq!(lattice.len(), 60);
        assert!(lattice.velocities.iter().all(|&v| v == Vec3::ZERO));
        assert!(lattice.accelerations.iter().all(|&a| a == Vec3::ZERO));
        assert!(lattice.densities.iter().all(|&d| d == 0.0));
        assert!(lattice
            .colors
            .iter()
            .all(|&c| c == Vec3::new(0.0, 0.0, 1.0)));
    }

    #[test]
    fn test_factory_position_formula() {
        let scale = 0.8;
        let lattice = Lattice::new(2, 3, 4, scale);
        for i in 0..2 {
            for j in 0..3 {
                for k in 0..4 {
                    let id = lattice.flat_index(i, j, k);
                    let expected = Vec3::new(
                        i as f32 * scale,
                        j as f32 * scale + VERTICAL_OFFSET,
                        k as f32 * scale,
                    );
                    assert_eq!(lattice.positions[id], expected);
                }
            }
        }
    }

    #[test]
    fn test_flat_index_is_unique_and_ordered() {
        let lattice = Lattice::new(2, 3, 4, 1.0);
        let mut seen = vec![false; lattice.len()];
        let mut last = None;
        for i in 0..2 {
            for j in 0..3 {
                for k in 0..4 {
                    let id = lattice.flat_index(i, j, k);
                    assert!(!seen[id], "duplicate flat index {}", id);
                    seen[id] = true;
                    if let Some(prev) = last {
                        assert_eq!(id, prev + 1, "flat index order broken");
                    }
                    last = Some(id);
                }
            }
        }
        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn test_render_vertices_layout() {
        let mut lattice = Lattice::new(1, 2, 1, 1.0);
        lattice.colors[1] = Vec3::new(0.5, 0.1, 0.5);
        let vertices = lattice.render_vertices();
        assert_eq!(vertices.len(), 2);

        let p = lattice.positions[1];
        assert_eq!(vertices[1], [p.x, p.y, p.z, 0.5, 0.1, 0.5]);
    }
}
