//! Vertigo - climb a procedurally regenerated tower of beams
//!
//! Core modules:
//! - `sim`: Deterministic simulation (platforms, player physics, camera, phases)
//! - `renderer`: Per-frame scene snapshot for the drawing backend
//! - `audio`: Sound cue identifiers and event dispatch
//! - `tuning`: Data-driven physics and layout numbers
//! - `settings`: Player preferences

pub mod audio;
pub mod renderer;
pub mod settings;
pub mod sim;
pub mod tuning;

pub use settings::Settings;
pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (matches the 60 FPS display target)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;
    /// Longest frame the host will feed into the accumulator
    pub const MAX_FRAME_DT: f32 = 0.1;

    /// Viewport dimensions
    pub const VIEWPORT_W: f32 = 800.0;
    pub const VIEWPORT_H: f32 = 450.0;

    /// Horizontal extent of the world the camera may show
    pub const WORLD_WIDTH: f32 = 1000.0;

    /// Downward acceleration (pixels/s²)
    pub const GRAVITY: f32 = 800.0;
    /// Upward speed applied on jump (pixels/s)
    pub const JUMP_SPEED: f32 = 500.0;
    /// Horizontal walking speed (pixels/s)
    pub const HORIZONTAL_SPEED: f32 = 250.0;

    /// Player x clamp used during gameplay
    pub const PLAYER_X_MIN: f32 = 20.0;
    pub const PLAYER_X_MAX: f32 = 900.0;

    /// Player spawn point; also the zero of the height score
    pub const PLAYER_START_X: f32 = 400.0;
    pub const BASE_Y: f32 = 400.0;

    /// Ground platform
    pub const BASE_PLATFORM_HEIGHT: f32 = 20.0;

    /// Climbing platforms
    pub const FIRST_PLATFORM_Y: f32 = 250.0;
    pub const PLATFORM_STEP: f32 = 75.0;
    pub const CEILING_Y: f32 = -73_925.0;
    pub const PLAYFIELD_WIDTH: u32 = 800;
    pub const PLATFORM_WIDTH: f32 = 100.0;
    pub const PLATFORM_HEIGHT: f32 = 1.0;
    /// Upper bound on climbing platforms per regeneration
    pub const MAX_CLIMBING_PLATFORMS: usize = 100_000;

    /// Camera smoothing per 1/60 s frame
    pub const CAMERA_LERP_X: f32 = 0.05;
    pub const CAMERA_LERP_Y: f32 = 0.1;

    /// Pixels per foot of climbed height
    pub const FEET_PER_PIXEL: f32 = 0.1;
}

/// Linear interpolation between `a` and `b`
#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Convert a per-frame smoothing factor (at 60 FPS) to one for an arbitrary `dt`
///
/// A 1/60 s step returns `factor` unchanged.
#[inline]
pub fn frame_lerp_factor(factor: f32, dt: f32) -> f32 {
    let frames = dt / consts::SIM_DT;
    1.0 - (1.0 - factor).powf(frames)
}
