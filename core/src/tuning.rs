//! Gameplay tuning values.
//!
//! Physics values are expressed in frame units: a delta time of `1.0`
//! corresponds to one frame at 60 frames per second. Pipe gap parameters are
//! expressed in the reference coordinate space whose height is
//! [`REFERENCE_HEIGHT`]; systems convert them to screen pixels with
//! [`reference_scale`].

use serde::{Deserialize, Serialize};

/// Logical screen height that gap and ground measurements are authored against.
pub const REFERENCE_HEIGHT: f32 = 512.0;

/// Downward acceleration applied to birds, in pixels per frame squared.
pub const GRAVITY: f32 = 0.08;
/// Vertical velocity assigned by a flap, in pixels per frame.
pub const FLAP_VELOCITY: f32 = -3.0;
/// Maximum falling speed, in pixels per frame.
pub const TERMINAL_VELOCITY: f32 = 1.0;
/// Nose-down tilt reached at terminal velocity (90 degrees).
pub const MAX_ROTATION_DOWN: f32 = std::f32::consts::FRAC_PI_2;
/// Nose-up tilt held while rising (-25 degrees).
pub const MAX_ROTATION_UP: f32 = -std::f32::consts::PI / 7.2;
/// Number of frames in the wing-flap animation cycle.
pub const BIRD_ANIMATION_FRAMES: u32 = 3;

/// Width of the bird hit box. Smaller than the 34px sprite on purpose.
pub const BIRD_COLLISION_WIDTH: f32 = 24.0;
/// Height of the bird hit box. Smaller than the 24px sprite on purpose.
pub const BIRD_COLLISION_HEIGHT: f32 = 18.0;
/// Height of the ground texture in reference pixels.
pub const GROUND_TEXTURE_HEIGHT: f32 = 112.0;

/// Width of a pipe, in pixels.
pub const PIPE_WIDTH: f32 = 52.0;
/// Leftward scroll applied to pipes, in pixels per frame.
pub const SCROLL_SPEED: f32 = 2.0;
/// Gap size used when a pipe request does not specify one.
pub const DEFAULT_GAP_SIZE: f32 = 140.0;
/// Smallest generated gap, in reference pixels.
pub const MIN_GAP_SIZE: f32 = 140.0;
/// Largest generated gap, in reference pixels.
pub const MAX_GAP_SIZE: f32 = 160.0;
/// Smallest generated gap centre, in reference pixels.
pub const MIN_GAP_Y: f32 = 120.0;
/// Largest generated gap centre, in reference pixels.
pub const MAX_GAP_Y: f32 = 280.0;
/// Horizontal distance between generated pipe pairs.
pub const PIPE_SPACING: f32 = 200.0;
/// Seed used by the pipe generator unless configured otherwise.
pub const DEFAULT_PIPE_SEED: u64 = 0x5eed_f1a9_b12d_0001;

/// Points awarded per passed pipe pair.
pub const SCORE_INCREMENT: u32 = 1;

/// Factor converting reference-space measurements into screen pixels.
#[must_use]
pub fn reference_scale(screen_height: f32) -> f32 {
    screen_height / REFERENCE_HEIGHT
}

/// Y coordinate of the top edge of the ground for the given screen height.
///
/// Uses the same scaling the ground renderer applies to its texture so that
/// simulation and presentation agree on where the floor is.
#[must_use]
pub fn ground_line(screen_height: f32) -> f32 {
    screen_height - GROUND_TEXTURE_HEIGHT * reference_scale(screen_height)
}

/// Bird movement parameters.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhysicsTuning {
    /// Downward acceleration per frame squared.
    pub gravity: f32,
    /// Velocity assigned by a flap.
    pub flap_velocity: f32,
    /// Maximum falling speed.
    pub terminal_velocity: f32,
    /// Tilt at terminal velocity.
    pub max_rotation_down: f32,
    /// Tilt while rising.
    pub max_rotation_up: f32,
    /// Height of the bird hit box, used for ground contact.
    pub collision_height: f32,
}

impl Default for PhysicsTuning {
    fn default() -> Self {
        Self {
            gravity: GRAVITY,
            flap_velocity: FLAP_VELOCITY,
            terminal_velocity: TERMINAL_VELOCITY,
            max_rotation_down: MAX_ROTATION_DOWN,
            max_rotation_up: MAX_ROTATION_UP,
            collision_height: BIRD_COLLISION_HEIGHT,
        }
    }
}

/// Obstacle layout and generation parameters.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipeTuning {
    /// Pipe width in pixels.
    pub width: f32,
    /// Leftward scroll per frame.
    pub scroll_speed: f32,
    /// Gap used when a request omits one.
    pub default_gap_size: f32,
    /// Smallest generated gap.
    pub min_gap_size: f32,
    /// Largest generated gap.
    pub max_gap_size: f32,
    /// Smallest generated gap centre.
    pub min_gap_y: f32,
    /// Largest generated gap centre.
    pub max_gap_y: f32,
    /// Distance between generated pairs.
    pub spacing: f32,
    /// Generator seed.
    pub seed: u64,
}

impl Default for PipeTuning {
    fn default() -> Self {
        Self {
            width: PIPE_WIDTH,
            scroll_speed: SCROLL_SPEED,
            default_gap_size: DEFAULT_GAP_SIZE,
            min_gap_size: MIN_GAP_SIZE,
            max_gap_size: MAX_GAP_SIZE,
            min_gap_y: MIN_GAP_Y,
            max_gap_y: MAX_GAP_Y,
            spacing: PIPE_SPACING,
            seed: DEFAULT_PIPE_SEED,
        }
    }
}

/// Hit box dimensions.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CollisionTuning {
    /// Bird hit box width.
    pub bird_width: f32,
    /// Bird hit box height.
    pub bird_height: f32,
    /// Pipe hit box width.
    pub pipe_width: f32,
}

impl Default for CollisionTuning {
    fn default() -> Self {
        Self {
            bird_width: BIRD_COLLISION_WIDTH,
            bird_height: BIRD_COLLISION_HEIGHT,
            pipe_width: PIPE_WIDTH,
        }
    }
}

/// Every tunable knob of the simulation, grouped per system.
///
/// Missing sections and keys fall back to the constants in this module.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Physics system parameters.
    pub physics: PhysicsTuning,
    /// Pipe system parameters.
    pub pipes: PipeTuning,
    /// Collision system parameters.
    pub collision: CollisionTuning,
}
