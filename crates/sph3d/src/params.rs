//! Solver parameters and the per-step control state.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::color::ColorMode;
use crate::constants;
use crate::serde_utils;

/// Axis-aligned simulation domain, fixed for the simulation's lifetime.
///
/// Used both by the soft wall penalty (pre-integration) and the hard
/// reflecting clamp (post-integration).
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Domain {
    #[serde(with = "serde_utils::vec3")]
    pub min: Vec3,
    #[serde(with = "serde_utils::vec3")]
    pub max: Vec3,
}

impl Domain {
    pub fn new(min: Vec3, max: Vec3) -> Self {
        Self { min, max }
    }

    /// Box volume, the numerator of the rest density.
    pub fn volume(&self) -> f32 {
        let extent = self.max - self.min;
        extent.x * extent.y * extent.z
    }
}

impl Default for Domain {
    fn default() -> Self {
        Self {
            min: Vec3::from(constants::DOMAIN_MIN),
            max: Vec3::from(constants::DOMAIN_MAX),
        }
    }
}

/// Tunable solver parameters.
///
/// `Default` reproduces the reference constants exactly; see
/// [`crate::constants`].
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct SimParams {
    /// Gravity acceleration along Y (negative = downward)
    pub gravity: f32,
    /// Viscosity coefficient (nu)
    pub viscosity: f32,
    /// SPH interaction radius (h)
    pub smoothing_radius: f32,
    /// Particle radius used by the soft wall penalty
    pub collision_radius: f32,
    /// Pressure stiffness
    pub stiffness: f32,
    /// Soft wall penalty spring constant
    pub wall_stiffness: f32,
    /// Velocity damping on hard wall reflection
    pub wall_damping: f32,
    /// Margin keeping particles off the exact domain faces
    pub boundary_epsilon: f32,
    /// Speed at which the speed color ramp saturates
    pub speed_color_scale: f32,
    /// Simulation domain bounds
    pub domain: Domain,
}

impl Default for SimParams {
    fn default() -> Self {
        Self {
            gravity: constants::GRAVITY,
            viscosity: constants::VISCOSITY,
            smoothing_radius: constants::SMOOTHING_RADIUS,
            collision_radius: constants::COLLISION_RADIUS,
            stiffness: constants::STIFFNESS,
            wall_stiffness: constants::WALL_STIFFNESS,
            wall_damping: constants::WALL_DAMPING,
            boundary_epsilon: constants::BOUNDARY_EPSILON,
            speed_color_scale: constants::SPEED_COLOR_SCALE,
            domain: Domain::default(),
        }
    }
}

impl SimParams {
    /// Local pressure of a particle with the given density.
    #[inline]
    pub fn pressure(&self, density: f32, rest_density: f32) -> f32 {
        self.stiffness * (density - rest_density)
    }
}

/// Externally controlled toggles, passed into every `step` call.
///
/// Modeled as an explicit value rather than global flags so the solver stays
/// free of process state. When both color toggles are set, pressure mode
/// wins.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimControls {
    /// When false, `step` leaves the lattice untouched.
    pub running: bool,
    /// Color particles by local pressure.
    pub pressure_color: bool,
    /// Color particles by speed.
    pub speed_color: bool,
}

impl SimControls {
    /// Resolve the color toggles into a single mode.
    pub fn color_mode(&self) -> ColorMode {
        ColorMode::from_toggles(self.pressure_color, self.speed_color)
    }
}
