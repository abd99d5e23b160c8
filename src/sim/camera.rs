//! Follow camera and its cosmetic sway

use glam::Vec2;

use super::state::Camera;
use crate::tuning::Tuning;
use crate::{frame_lerp_factor, lerp};

/// Screen position of the camera target: centered, 70% of the way down
#[inline]
pub fn follow_offset(viewport_w: f32, viewport_h: f32) -> Vec2 {
    Vec2::new(viewport_w * 0.5, viewport_h * 0.7)
}

/// Keep the view inside `[0, world_width]` horizontally
#[inline]
pub fn clamp_target_x(x: f32, offset_x: f32, world_width: f32) -> f32 {
    if x <= offset_x {
        offset_x
    } else if x >= world_width - offset_x {
        world_width - offset_x
    } else {
        x
    }
}

/// Ease the camera toward `player_pos` for one step of `dt` seconds
pub fn update_camera(
    camera: &mut Camera,
    player_pos: Vec2,
    dt: f32,
    viewport_w: f32,
    viewport_h: f32,
    tuning: &Tuning,
) {
    camera.offset = follow_offset(viewport_w, viewport_h);
    let tx = frame_lerp_factor(tuning.camera_lerp_x, dt);
    let ty = frame_lerp_factor(tuning.camera_lerp_y, dt);
    camera.target = Vec2::new(
        lerp(camera.target.x, player_pos.x, tx),
        lerp(camera.target.y, player_pos.y, ty),
    );
    camera.target.x = clamp_target_x(camera.target.x, camera.offset.x, tuning.world_width);
}

/// Title card: zoom grows as the fade clears, gentle rocking
pub fn title_jitter(camera: &mut Camera, fade: f32, time: f64) {
    camera.zoom = 1.0 - fade;
    camera.rotation = time.sin() as f32;
}

/// Gameplay: sway and zoom wobble grow with height
pub fn gameplay_jitter(camera: &mut Camera, time: f64, player_y: f32) {
    let y = player_y as f64;
    camera.rotation = (time.sin() * -y / 10_000.0) as f32;
    camera.zoom = (1.0 + (time * -y * 0.1).sin() / 10_000.0) as f32;
}

/// Reduced-motion replacement for `gameplay_jitter`
pub fn steady(camera: &mut Camera) {
    camera.rotation = 0.0;
    camera.zoom = 1.0;
}
