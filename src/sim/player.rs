//! Per-frame player update: input, jumping, landing and gravity

use super::collision::find_landing;
use super::state::{GameEvent, GameState};
use super::tick::TickInput;
use crate::audio::SoundEffect;

/// Advance the player by `dt` seconds, keeping x within `[x_min, x_max]`
///
/// Order matters and matches the shipped game: regenerate, clamp, walk,
/// jump, then land or fall. The clamp runs before walking, so the player may
/// overshoot the bounds by one frame of movement.
pub fn update_player(state: &mut GameState, input: &TickInput, dt: f32, x_min: f32, x_max: f32) {
    if input.confirm {
        state.regenerate_platforms();
    }

    let tuning = &state.tuning;
    let player = &mut state.player;

    player.hor_moving = false;
    player.pos.x = player.pos.x.clamp(x_min, x_max);

    if input.move_left {
        player.pos.x -= tuning.horizontal_speed * dt;
        player.facing_right = false;
        player.hor_moving = true;
    }
    if input.move_right {
        player.pos.x += tuning.horizontal_speed * dt;
        player.facing_right = true;
        player.hor_moving = true;
    }

    if input.jump && player.can_jump {
        player.speed = -tuning.jump_speed;
        player.can_jump = false;
        let cue = SoundEffect::random_jump(&mut state.rng);
        state.events.push(GameEvent::Sound(cue));
    }

    let player = &mut state.player;
    match find_landing(state.platforms.platforms(), player.pos, player.speed * dt) {
        Some(landing) => {
            player.speed = 0.0;
            player.pos.y = landing.y;
            player.can_jump = true;
        }
        None => {
            player.can_jump = false;
            player.pos.y += player.speed * dt;
            player.speed += state.tuning.gravity * dt;
        }
    }
}
