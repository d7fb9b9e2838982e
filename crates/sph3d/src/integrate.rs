//! Semi-implicit Euler integration with hard boundary reflection.
//!
//! Velocity first, then position (symplectic order). After the position
//! update each axis is clamped independently to the domain with a small
//! margin, and only the offending axis's velocity is reflected and damped.
//! The margin keeps particles off the exact faces so the reflection does not
//! re-trigger every step.

use rayon::prelude::*;

use crate::lattice::Lattice;
use crate::params::SimParams;

/// Advance the whole lattice by `dt` and enforce the hard boundary.
pub fn step(lattice: &mut Lattice, dt: f32, params: &SimParams) {
    let accelerations = &lattice.accelerations;
    let min = params.domain.min + params.boundary_epsilon;
    let max = params.domain.max - params.boundary_epsilon;
    let damping = params.wall_damping;

    let positions = &mut lattice.positions;
    lattice
        .velocities
        .par_iter_mut()
        .zip(positions.par_iter_mut())
        .enumerate()
        .for_each(|(i, (vel, pos))| {
            *vel += accelerations[i] * dt;
            *pos += *vel * dt;

            if pos.x < min.x {
                pos.x = min.x;
                vel.x = -vel.x * damping;
            } else if pos.x > max.x {
                pos.x = max.x;
                vel.x = -vel.x * damping;
            }

            if pos.y < min.y {
                pos.y = min.y;
                vel.y = -vel.y * damping;
            } else if pos.y > max.y {
                pos.y = max.y;
                vel.y = -vel.y * damping;
            }

            if pos.z < min.z {
                pos.z = min.z;
                vel.z = -vel.z * damping;
            } else if pos.z > max.z {
                pos.z = max.z;
                vel.z = -vel.z * damping;
            }
        });
}
