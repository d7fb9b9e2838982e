//! Display color derivation.
//!
//! A single phase that runs once per particle after density and velocity are
//! both committed, selected by [`ColorMode`]. Colors never feed back into the
//! physics.

use glam::Vec3;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_COLOR;
use crate::lattice::Lattice;
use crate::params::SimParams;

/// Which quantity drives the particle color this step.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ColorMode {
    /// Reset every particle to the default blue.
    #[default]
    Default,
    /// Blue-to-red ramp over normalized local pressure.
    Pressure,
    /// Blue-to-red ramp over normalized speed.
    Speed,
}

impl ColorMode {
    /// Resolve the two UI toggles; pressure wins when both are set.
    pub fn from_toggles(pressure: bool, speed: bool) -> Self {
        if pressure {
            ColorMode::Pressure
        } else if speed {
            ColorMode::Speed
        } else {
            ColorMode::Default
        }
    }
}

/// Blue (t = 0) to red (t = 1) ramp shared by both color modes.
#[inline]
fn ramp(t: f32) -> Vec3 {
    Vec3::new(t, 0.2 * (1.0 - t), 1.0 - t)
}

/// Color for a particle with local pressure `pressure`.
///
/// Pressure is normalized so that density == rest density lands exactly at
/// the ramp midpoint.
#[inline]
pub fn pressure_color(pressure: f32, rest_density: f32) -> Vec3 {
    let pnorm = ((pressure + rest_density) / (2.0 * rest_density)).clamp(0.0, 1.0);
    ramp(pnorm)
}

/// Color for a particle moving at `speed`, saturating at `scale`.
#[inline]
pub fn speed_color(speed: f32, scale: f32) -> Vec3 {
    ramp((speed / scale).min(1.0))
}

/// Recolor the whole lattice for this step.
///
/// Runs after integration: densities were committed by the density phase and
/// velocities by the integrator, so both modes read fully written fields.
pub fn apply(lattice: &mut Lattice, params: &SimParams, rest_density: f32, mode: ColorMode) {
    match mode {
        ColorMode::Default => {
            let default = Vec3::from(DEFAULT_COLOR);
            lattice.colors.par_iter_mut().for_each(|c| *c = default);
        }
        ColorMode::Pressure => {
            let densities = &lattice.densities;
            lattice
                .colors
                .par_iter_mut()
                .enumerate()
                .for_each(|(i, c)| {
                    let pressure = params.pressure(densities[i], rest_density);
                    *c = pressure_color(pressure, rest_density);
                });
        }
        ColorMode::Speed => {
            let velocities = &lattice.velocities;
            let scale = params.speed_color_scale;
            lattice
                .colors
                .par_iter_mut()
                .enumerate()
                .for_each(|(i, c)| {
                    *c = speed_color(velocities[i].length(), scale);
                });
        }
    }
}
