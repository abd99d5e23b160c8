//! Data-driven game balance
//!
//! Every physics and layout number the simulation reads lives here so a run
//! can be retuned from a JSON file without a rebuild. Defaults reproduce the
//! shipped game.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Physics, layout and camera numbers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Player ===
    /// Downward acceleration (pixels/s²)
    pub gravity: f32,
    /// Upward speed applied on jump
    pub jump_speed: f32,
    /// Walking speed
    pub horizontal_speed: f32,
    /// Horizontal clamp applied every gameplay frame
    pub x_min: f32,
    pub x_max: f32,

    // === Platforms ===
    /// Ground platform rectangle
    pub base_x: f32,
    pub base_y: f32,
    pub base_width: f32,
    pub base_height: f32,
    /// Top edge of the lowest climbing platform
    pub first_platform_y: f32,
    /// Vertical distance between consecutive climbing platforms
    pub platform_step: f32,
    /// No climbing platform is placed above this y
    pub ceiling_y: f32,
    /// Climbing platforms start at a random integer x in `0..=playfield_width`
    pub playfield_width: u32,
    pub platform_width: f32,
    pub platform_height: f32,

    // === Camera ===
    pub world_width: f32,
    pub viewport_width: f32,
    pub viewport_height: f32,
    pub camera_lerp_x: f32,
    pub camera_lerp_y: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            gravity: GRAVITY,
            jump_speed: JUMP_SPEED,
            horizontal_speed: HORIZONTAL_SPEED,
            x_min: PLAYER_X_MIN,
            x_max: PLAYER_X_MAX,

            base_x: 0.0,
            base_y: BASE_Y,
            base_width: WORLD_WIDTH,
            base_height: BASE_PLATFORM_HEIGHT,
            first_platform_y: FIRST_PLATFORM_Y,
            platform_step: PLATFORM_STEP,
            ceiling_y: CEILING_Y,
            playfield_width: PLAYFIELD_WIDTH,
            platform_width: PLATFORM_WIDTH,
            platform_height: PLATFORM_HEIGHT,

            world_width: WORLD_WIDTH,
            viewport_width: VIEWPORT_W,
            viewport_height: VIEWPORT_H,
            camera_lerp_x: CAMERA_LERP_X,
            camera_lerp_y: CAMERA_LERP_Y,
        }
    }
}

impl Tuning {
    /// Steps from `first_platform_y` up to `ceiling_y`, before capping
    fn climbing_steps(&self) -> f64 {
        if self.platform_step <= 0.0 || self.first_platform_y < self.ceiling_y {
            return 0.0;
        }
        let span = f64::from(self.first_platform_y) - f64::from(self.ceiling_y);
        (span / f64::from(self.platform_step)).floor() + 1.0
    }

    /// Number of climbing platforms one regeneration produces
    ///
    /// Capped at `MAX_CLIMBING_PLATFORMS`; NaN layouts produce none.
    pub fn climbing_platform_count(&self) -> usize {
        let steps = self.climbing_steps();
        if steps.is_nan() || steps <= 0.0 {
            0
        } else if steps >= MAX_CLIMBING_PLATFORMS as f64 {
            MAX_CLIMBING_PLATFORMS
        } else {
            steps as usize
        }
    }

    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, String> {
        let data = fs::read_to_string(&path).map_err(|e| format!("read tuning: {e}"))?;
        serde_json::from_str(&data).map_err(|e| format!("parse tuning JSON: {e}"))
    }

    pub fn load_or_default(path: impl AsRef<Path>) -> (Self, Option<String>) {
        match Self::load_from_file(&path) {
            Ok(tuning) => (tuning, None),
            Err(e) => (Self::default(), Some(e)),
        }
    }

    /// Suspicious values that are not hard errors.
    /// Call at startup and log each warning with `warn!`.
    pub fn validate(&self) -> Vec<String> {
        let mut w = Vec::new();
        if self.gravity <= 0.0 {
            w.push(format!(
                "gravity {} is not positive; the player will never fall",
                self.gravity
            ));
        }
        if self.jump_speed <= 0.0 {
            w.push(format!(
                "jump_speed {} is not positive; jumping does nothing",
                self.jump_speed
            ));
        }
        if self.horizontal_speed < 0.0 {
            w.push(format!(
                "horizontal_speed {} negative; controls are inverted",
                self.horizontal_speed
            ));
        }
        if self.x_min > self.x_max {
            w.push(format!("x_min {} exceeds x_max {}", self.x_min, self.x_max));
        }
        if self.platform_step <= 0.0 {
            w.push(format!("platform_step {} must be > 0", self.platform_step));
        }
        let steps = self.climbing_steps();
        if steps > MAX_CLIMBING_PLATFORMS as f64 {
            w.push(format!(
                "layout yields {steps} climbing platforms; capped at {MAX_CLIMBING_PLATFORMS}"
            ));
        }
        if self.first_platform_y < self.ceiling_y {
            w.push(format!(
                "first_platform_y {} is above ceiling_y {}; only the base platform will exist",
                self.first_platform_y, self.ceiling_y
            ));
        }
        if self.first_platform_y >= self.base_y {
            w.push(format!(
                "first_platform_y {} is not above the base platform at {}",
                self.first_platform_y, self.base_y
            ));
        }
        if self.platform_width <= 0.0 {
            w.push(format!("platform_width {} must be > 0", self.platform_width));
        }
        if self.viewport_width <= 0.0 || self.viewport_height <= 0.0 {
            w.push("viewport dimensions must be > 0".into());
        }
        if self.viewport_width >= self.world_width {
            w.push(format!(
                "viewport_width {} not smaller than world_width {}; camera cannot scroll",
                self.viewport_width, self.world_width
            ));
        }
        for (name, v) in [
            ("camera_lerp_x", self.camera_lerp_x),
            ("camera_lerp_y", self.camera_lerp_y),
        ] {
            if !(0.0..=1.0).contains(&v) {
                w.push(format!("{name} {v} outside 0..=1"));
            }
        }
        w
    }
}
