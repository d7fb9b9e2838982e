//! Physical constants for the lattice SPH solver.
//!
//! `SimParams::default()` lifts these into a configurable struct so tests and
//! callers can override individual values without touching the solver.

/// Gravity acceleration (m/s^2) - negative Y direction
pub const GRAVITY: f32 = -9.81;

/// Viscosity coefficient (nu): damps relative velocity between neighbors
pub const VISCOSITY: f32 = 1.3;

/// Particle collision radius used by the soft wall penalty
pub const COLLISION_RADIUS: f32 = 1.0;

/// SPH interaction radius (h): pairs farther apart do not interact
pub const SMOOTHING_RADIUS: f32 = 1.2;

/// Pressure stiffness: converts density deviation into pressure
pub const STIFFNESS: f32 = 0.6;

/// Spring constant of the soft wall penalty
pub const WALL_STIFFNESS: f32 = 2.0;

/// Velocity damping applied on hard wall reflection
pub const WALL_DAMPING: f32 = 0.8;

/// Margin keeping particles off the exact domain faces
pub const BOUNDARY_EPSILON: f32 = 1e-4;

/// Vertical offset of the initial lattice above the domain floor
pub const VERTICAL_OFFSET: f32 = 5.0;

/// Speed at which the speed color ramp saturates
pub const SPEED_COLOR_SCALE: f32 = 15.0;

/// Default particle color [R, G, B] - pure blue
pub const DEFAULT_COLOR: [f32; 3] = [0.0, 0.0, 1.0];

/// Default domain minimum corner
pub const DOMAIN_MIN: [f32; 3] = [0.0, 0.0, 0.0];

/// Default domain maximum corner
pub const DOMAIN_MAX: [f32; 3] = [20.0, 60.0, 20.0];
