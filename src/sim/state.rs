//! Game state and core simulation types
//!
//! Everything a run mutates lives in `GameState`; nothing is global.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::camera;
use super::platforms::PlatformField;
use super::score::PersonalBest;
use crate::audio::SoundEffect;
use crate::consts::*;
use crate::tuning::Tuning;

/// Axis-aligned rectangle, y grows downward
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    /// True if `px` lies within the horizontal span (edges inclusive)
    #[inline]
    pub fn spans_x(&self, px: f32) -> bool {
        self.x <= px && px <= self.x + self.w
    }
}

/// Color tag the renderer maps to a texture/tint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PlatformColor {
    /// Wide ground slab at the bottom of the tower
    Ground,
    /// Thin climbing beam
    #[default]
    Beam,
}

/// A platform the player can land on
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Platform {
    pub rect: Rect,
    /// Non-blocking platforms are scenery only
    pub blocking: bool,
    pub color: PlatformColor,
}

impl Platform {
    pub fn ground(rect: Rect) -> Self {
        Self {
            rect,
            blocking: true,
            color: PlatformColor::Ground,
        }
    }

    pub fn beam(rect: Rect) -> Self {
        Self {
            rect,
            blocking: true,
            color: PlatformColor::Beam,
        }
    }

    /// Landing surface (top edge)
    #[inline]
    pub fn top(&self) -> f32 {
        self.rect.y
    }
}

/// The climber
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Player {
    /// Feet position (bottom center of the sprite)
    pub pos: Vec2,
    /// Vertical velocity, positive is down
    pub speed: f32,
    /// Standing on a platform this frame
    pub can_jump: bool,
    pub facing_right: bool,
    /// Horizontal input was applied this frame
    pub hor_moving: bool,
}

impl Default for Player {
    fn default() -> Self {
        Self {
            pos: Vec2::new(PLAYER_START_X, BASE_Y),
            speed: 0.0,
            can_jump: false,
            facing_right: true,
            hor_moving: false,
        }
    }
}

/// 2D camera parameters, recomputed every frame
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Camera {
    /// World point the camera looks at
    pub target: Vec2,
    /// Screen position of `target` in pixels
    pub offset: Vec2,
    pub zoom: f32,
    /// Degrees
    pub rotation: f32,
}

impl Camera {
    /// Camera centered on `target` for a viewport of the given size
    pub fn looking_at(target: Vec2, viewport_w: f32, viewport_h: f32) -> Self {
        Self {
            target,
            offset: camera::follow_offset(viewport_w, viewport_h),
            zoom: 1.0,
            rotation: 0.0,
        }
    }

    /// World-space top-left corner of the visible area (ignoring zoom/rotation)
    pub fn view_origin(&self) -> Vec2 {
        self.target - self.offset
    }
}

/// Current phase of the run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Title card fading in, waiting for confirm
    Title,
    /// Climbing; runs until the window closes
    Gameplay,
}

/// Side effects of a tick, drained by the host
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GameEvent {
    Sound(SoundEffect),
    /// Looping music volume (0.0 - 1.0, before user volume)
    MusicVolume(f32),
    /// Start the wind loop
    StartAmbience,
    /// Personal best raised to this many feet
    NewPersonalBest(i32),
    /// Platform field rebuilt; carries the regeneration count
    PlatformsRegenerated(u32),
    PhaseChanged(GamePhase),
}

/// Complete game state (deterministic for a given seed and input stream)
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// The only randomness source the simulation draws from
    pub rng: Pcg32,
    pub tuning: Tuning,
    pub phase: GamePhase,
    pub player: Player,
    pub platforms: PlatformField,
    pub camera: Camera,
    /// Overlay opacity, 1.0 = fully covered
    pub fade_amount: f32,
    pub personal_best: PersonalBest,
    /// Regenerations triggered by the player (the initial build is not counted)
    pub regenerations: u32,
    /// Frames simulated since start
    pub frame_counter: u64,
    /// Frames simulated in the gameplay phase
    pub gameplay_frames: u64,
    /// Seconds simulated since start
    pub elapsed: f64,
    /// `elapsed` at the moment gameplay began
    pub run_started_at: Option<f64>,
    /// Gameplay entry work (music level) has been done
    pub(crate) gameplay_entered: bool,
    /// Wind loop has been requested
    pub(crate) ambience_started: bool,
    /// Pending side effects for the host
    pub events: Vec<GameEvent>,
}

impl GameState {
    /// Create a new game state with the given seed
    pub fn new(seed: u64, tuning: Tuning) -> Self {
        let player = Player {
            pos: Vec2::new(PLAYER_START_X, tuning.base_y),
            ..Player::default()
        };
        let mut camera = Camera::looking_at(
            player.pos,
            tuning.viewport_width,
            tuning.viewport_height,
        );
        camera.zoom = 0.0;

        let mut state = Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            tuning,
            phase: GamePhase::Title,
            player,
            platforms: PlatformField::new(),
            camera,
            fade_amount: 1.0,
            personal_best: PersonalBest::new(),
            regenerations: 0,
            frame_counter: 0,
            gameplay_frames: 0,
            elapsed: 0.0,
            run_started_at: None,
            gameplay_entered: false,
            ambience_started: false,
            events: Vec::new(),
        };

        state.build_platforms();
        let count = state.platforms.len();
        log::info!("New run, seed {} ({} platforms)", seed, count);
        state
    }

    /// Rebuild the platform field on player request
    pub fn regenerate_platforms(&mut self) {
        self.regenerations += 1;
        self.build_platforms();
        let count = self.regenerations;
        self.events.push(GameEvent::PlatformsRegenerated(count));
        log::debug!("Platforms regenerated (#{})", count);
    }

    fn build_platforms(&mut self) {
        self.platforms.regenerate(&mut self.rng, &self.tuning);
        self.fade_amount = 1.0;
        let cue = SoundEffect::random_regenerate(&mut self.rng);
        self.events.push(GameEvent::Sound(cue));
    }

    /// Take all pending events
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Seconds since gameplay began (0 on the title screen)
    pub fn run_time(&self) -> f64 {
        self.run_started_at
            .map(|start| self.elapsed - start)
            .unwrap_or(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn is_regen_cue(event: &GameEvent) -> bool {
        matches!(event, GameEvent::Sound(SoundEffect::Regenerate(_)))
    }

    #[test]
    fn new_state_starts_on_title_with_platforms() {
        let mut state = GameState::new(1, Tuning::default());
        assert_eq!(state.phase, GamePhase::Title);
        assert_eq!(state.player.pos, Vec2::new(400.0, 400.0));
        assert_eq!(state.fade_amount, 1.0);
        assert_eq!(state.camera.zoom, 0.0);
        assert_eq!(state.camera.offset, Vec2::new(400.0, 315.0));
        assert_eq!(state.platforms.len(), 991);
        assert_eq!(state.regenerations, 0);

        let events = state.drain_events();
        assert_eq!(events.len(), 1);
        assert!(is_regen_cue(&events[0]));
        assert!(state.events.is_empty());
    }

    #[test]
    fn regenerate_resets_fade_and_counts() {
        let mut state = GameState::new(2, Tuning::default());
        state.drain_events();
        state.fade_amount = 0.0;
        let before: Vec<Platform> = state.platforms.iter().copied().collect();

        state.regenerate_platforms();

        assert_eq!(state.fade_amount, 1.0);
        assert_eq!(state.regenerations, 1);
        assert_ne!(before, state.platforms.iter().copied().collect::<Vec<_>>());
        let events = state.drain_events();
        assert!(events.contains(&GameEvent::PlatformsRegenerated(1)));
        assert!(events.iter().any(is_regen_cue));
    }

    #[test]
    fn rect_span_is_inclusive() {
        let r = Rect::new(10.0, 0.0, 100.0, 1.0);
        assert!(r.spans_x(10.0));
        assert!(r.spans_x(110.0));
        assert!(!r.spans_x(9.99));
        assert!(!r.spans_x(110.01));
    }
}
