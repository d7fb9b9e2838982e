//! Smoothing kernel for the lattice SPH solver.
//!
//! The density estimate weights each neighbor by `(1 - r/h)^2` inside the
//! interaction radius; the force terms reuse the linear falloff `1 - r/h`.
//! Coincident pairs (r = 0) contribute nothing so degenerate configurations
//! never divide by zero.

/// Density kernel weight: `(1 - r/h)^2` for `0 < r < h`, zero elsewhere.
#[inline]
pub fn smoothing_weight(r: f32, h: f32) -> f32 {
    if r <= 0.0 || r >= h {
        return 0.0;
    }
    let q = 1.0 - r / h;
    q * q
}

/// Linear falloff `q = 1 - r/h` for `0 < r <= h`, zero elsewhere.
///
/// Used by the pressure and viscosity terms. The upper bound is inclusive,
/// unlike the density kernel; at `r = h` the falloff is zero anyway.
#[inline]
pub fn falloff(r: f32, h: f32) -> f32 {
    if r <= 0.0 || r > h {
        return 0.0;
    }
    1.0 - r / h
}
