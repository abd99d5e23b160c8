//! Demo climber
//!
//! Produces `TickInput`s from the current state so the game can play itself
//! (headless runs, attract mode). Pure function of the state plus a little
//! bookkeeping, so demo runs are as reproducible as recorded ones.

use super::state::{GamePhase, GameState, Platform};
use super::tick::TickInput;

/// Margin kept below the theoretical jump apex when picking a target
const REACH_MARGIN: f32 = 10.0;
/// Close enough to the target's center to stop steering
const ALIGN_EPSILON: f32 = 4.0;
/// Grounded frames with nothing reachable before asking for a new tower
const STUCK_FRAMES: u32 = 90;
/// Title frames before pressing confirm
const TITLE_WAIT_FRAMES: u32 = 30;

/// Steering state carried between frames
#[derive(Debug, Clone, Default)]
pub struct Autopilot {
    /// Center x of the beam being climbed to
    target_x: Option<f32>,
    stuck_frames: u32,
    title_frames: u32,
}

impl Autopilot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Input for the next tick
    pub fn next_input(&mut self, state: &GameState) -> TickInput {
        match state.phase {
            GamePhase::Title => {
                self.title_frames += 1;
                TickInput {
                    confirm: self.title_frames == TITLE_WAIT_FRAMES,
                    ..Default::default()
                }
            }
            GamePhase::Gameplay => self.climb(state),
        }
    }

    fn climb(&mut self, state: &GameState) -> TickInput {
        let player = &state.player;
        let mut input = TickInput::default();

        if player.can_jump {
            self.target_x = pick_target(state).map(|p| p.rect.x + p.rect.w / 2.0);
            match self.target_x {
                Some(_) => self.stuck_frames = 0,
                None => self.stuck_frames += 1,
            }
            if self.stuck_frames >= STUCK_FRAMES {
                self.stuck_frames = 0;
                input.confirm = true;
                return input;
            }
        }

        let Some(target_x) = self.target_x else {
            return input;
        };

        let dx = target_x - player.pos.x;
        if dx.abs() > ALIGN_EPSILON {
            input.move_left = dx < 0.0;
            input.move_right = dx > 0.0;
        }
        // Jump once the target can be reached during the rise
        if player.can_jump && dx.abs() <= horizontal_reach(state) {
            input.jump = true;
        }
        input
    }
}

/// Highest a standing jump lifts the feet
pub fn jump_apex(state: &GameState) -> f32 {
    let t = &state.tuning;
    if t.gravity <= 0.0 {
        return f32::INFINITY;
    }
    t.jump_speed * t.jump_speed / (2.0 * t.gravity)
}

/// Horizontal distance covered on the way up
fn horizontal_reach(state: &GameState) -> f32 {
    let t = &state.tuning;
    if t.gravity <= 0.0 {
        return f32::INFINITY;
    }
    t.horizontal_speed * t.jump_speed / t.gravity
}

/// Nearest-by-x beam whose top is above the feet and within jump height
fn pick_target(state: &GameState) -> Option<&Platform> {
    let feet = state.player.pos;
    let reach = jump_apex(state) - REACH_MARGIN;
    let (x_min, x_max) = (state.tuning.x_min, state.tuning.x_max);
    state
        .platforms
        .iter()
        .filter(|p| p.blocking && p.top() < feet.y && feet.y - p.top() <= reach)
        .filter(|p| {
            let center = p.rect.x + p.rect.w / 2.0;
            (x_min..=x_max).contains(&center)
        })
        .min_by(|a, b| {
            let da = (a.rect.x + a.rect.w / 2.0 - feet.x).abs();
            let db = (b.rect.x + b.rect.w / 2.0 - feet.x).abs();
            da.total_cmp(&db)
        })
}
