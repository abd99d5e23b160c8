//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Time only enters through `dt`
//! - Seeded RNG only
//! - Stable platform order (ground first, then bottom-up)
//! - No rendering, audio or platform dependencies

pub mod autopilot;
pub mod camera;
pub mod collision;
pub mod platforms;
pub mod player;
pub mod score;
pub mod state;
pub mod tick;

pub use autopilot::Autopilot;
pub use camera::{clamp_target_x, follow_offset, update_camera};
pub use collision::{Landing, find_landing};
pub use platforms::PlatformField;
pub use player::update_player;
pub use score::{PersonalBest, height_feet};
pub use state::{Camera, GameEvent, GamePhase, GameState, Platform, PlatformColor, Player, Rect};
pub use tick::{TickInput, tick};
