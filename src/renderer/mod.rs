//! Presentation snapshot
//!
//! Turns a `GameState` into plain draw data (rectangles, sprites, text) that
//! a graphics backend can consume without knowing anything about the game.

pub mod scene;
pub mod sprite;

pub use scene::{Overlay, Scene, TextDraw};
pub use sprite::{SpriteDraw, SpriteSheet};

/// Straight-alpha color, 0.0 - 1.0 per channel
pub type Rgba = [f32; 4];

pub const BLACK: Rgba = [0.0, 0.0, 0.0, 1.0];
pub const WHITE: Rgba = [1.0, 1.0, 1.0, 1.0];
pub const RAYWHITE: Rgba = [245.0 / 255.0, 245.0 / 255.0, 245.0 / 255.0, 1.0];
pub const GRAY: Rgba = [130.0 / 255.0, 130.0 / 255.0, 130.0 / 255.0, 1.0];
pub const DARKGRAY: Rgba = [80.0 / 255.0, 80.0 / 255.0, 80.0 / 255.0, 1.0];
pub const LIME: Rgba = [0.0, 158.0 / 255.0, 47.0 / 255.0, 1.0];

/// `color` with its alpha replaced by `alpha` clamped to 0..=1
#[inline]
pub fn fade(color: Rgba, alpha: f32) -> Rgba {
    [color[0], color[1], color[2], alpha.clamp(0.0, 1.0)]
}
