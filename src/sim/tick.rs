//! Per-frame game loop step
//!
//! Drives the title card and gameplay phases. The host calls `tick` once per
//! fixed timestep and drains `GameState::events` afterwards.

use super::camera::{gameplay_jitter, steady, title_jitter, update_camera};
use super::player::update_player;
use super::score::height_feet;
use super::state::{GameEvent, GamePhase, GameState};
use crate::audio::SoundEffect;
use crate::settings::Settings;

/// Title fade clears over ~3.3 s
const TITLE_FADE_RATE: f32 = 0.3;
/// Gameplay flash clears over 0.5 s
const GAMEPLAY_FADE_RATE: f32 = 2.0;
/// Music level once climbing
const CLIMB_MUSIC: f32 = 0.5;
/// Gameplay frames before the wind loop joins in
const AMBIENCE_DELAY_FRAMES: u64 = 20;

/// Logical inputs for a single tick
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Left held (arrow, A or d-pad)
    pub move_left: bool,
    /// Right held (arrow, D or d-pad)
    pub move_right: bool,
    /// Jump held (space or south face button)
    pub jump: bool,
    /// Confirm released this frame (Enter or east face button).
    /// Starts the run on the title card, regenerates platforms in gameplay.
    pub confirm: bool,
}

/// Advance the game state by `dt` seconds
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32, settings: &Settings) {
    state.elapsed += dt as f64;

    match state.phase {
        GamePhase::Title => tick_title(state, input, dt),
        GamePhase::Gameplay => tick_gameplay(state, input, dt, settings),
    }

    state.frame_counter += 1;
}

fn tick_title(state: &mut GameState, input: &TickInput, dt: f32) {
    if input.confirm {
        state.fade_amount = 1.0;
        let phase = GamePhase::Gameplay;
        state.phase = phase;
        state.run_started_at = Some(state.elapsed);
        state.events.push(GameEvent::PhaseChanged(phase));
        log::info!("Run started (seed {})", state.seed);
    }

    if state.fade_amount > 0.0 {
        state.fade_amount -= dt * TITLE_FADE_RATE;
        let volume = state.fade_amount.max(0.0);
        state.events.push(GameEvent::MusicVolume(volume));
    }

    title_jitter(&mut state.camera, state.fade_amount, state.elapsed);
}

fn tick_gameplay(state: &mut GameState, input: &TickInput, dt: f32, settings: &Settings) {
    if !state.gameplay_entered {
        state.gameplay_entered = true;
        state.events.push(GameEvent::MusicVolume(CLIMB_MUSIC));
    }

    if state.fade_amount > 0.0 {
        state.fade_amount -= dt * GAMEPLAY_FADE_RATE;
    }

    if !state.ambience_started && state.gameplay_frames >= AMBIENCE_DELAY_FRAMES {
        state.ambience_started = true;
        state.events.push(GameEvent::StartAmbience);
    }

    let (x_min, x_max) = (state.tuning.x_min, state.tuning.x_max);
    update_player(state, input, dt, x_min, x_max);

    let (vw, vh) = (state.tuning.viewport_width, state.tuning.viewport_height);
    let pos = state.player.pos;
    update_camera(&mut state.camera, pos, dt, vw, vh, &state.tuning);
    if settings.effective_camera_jitter() {
        gameplay_jitter(&mut state.camera, state.elapsed, state.player.pos.y);
    } else {
        steady(&mut state.camera);
    }

    let feet = height_feet(state.player.pos.y, state.tuning.base_y);
    if let Some(best) = state.personal_best.record(feet) {
        state.events.push(GameEvent::Sound(SoundEffect::Bonus));
        state.events.push(GameEvent::NewPersonalBest(best));
        log::debug!("New personal best: {} ft", best);
    }

    state.gameplay_frames += 1;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use crate::sim::{Platform, PlatformField, Rect};
    use crate::tuning::Tuning;

    fn confirm() -> TickInput {
        TickInput {
            confirm: true,
            ..Default::default()
        }
    }

    fn started(seed: u64) -> GameState {
        let mut state = GameState::new(seed, Tuning::default());
        tick(&mut state, &confirm(), SIM_DT, &Settings::default());
        state.drain_events();
        state
    }

    #[test]
    fn test_title_waits_for_confirm() {
        let mut state = GameState::new(12345, Tuning::default());
        let settings = Settings::default();
        for _ in 0..120 {
            tick(&mut state, &TickInput::default(), SIM_DT, &settings);
        }
        assert_eq!(state.phase, GamePhase::Title);
        // Title fade decays at 0.3/s
        assert!((state.fade_amount - (1.0 - 2.0 * 0.3)).abs() < 1e-3);
        assert!((state.camera.zoom - 0.6).abs() < 1e-3);
        assert_eq!(state.frame_counter, 120);
        assert_eq!(state.player.pos.y, 400.0);

        tick(&mut state, &confirm(), SIM_DT, &settings);
        assert_eq!(state.phase, GamePhase::Gameplay);
        assert!(state.run_started_at.is_some());
        // Fade resets, then decays by one title frame
        assert!(state.fade_amount > 0.99);
        let entered = GameEvent::PhaseChanged(GamePhase::Gameplay);
        assert!(state.drain_events().contains(&entered));
    }

    #[test]
    fn test_confirm_on_title_does_not_regenerate() {
        let state = started(1);
        assert_eq!(state.regenerations, 0);
    }

    #[test]
    fn test_gameplay_grounds_player_and_fades() {
        let mut state = started(2);
        let settings = Settings::default();
        for _ in 0..60 {
            tick(&mut state, &TickInput::default(), SIM_DT, &settings);
        }
        assert!(state.player.can_jump);
        assert_eq!(state.player.pos.y, 400.0);
        assert!(state.fade_amount <= 0.0);
        assert_eq!(state.personal_best.best(), 0);

        let events = state.drain_events();
        assert!(events.contains(&GameEvent::MusicVolume(0.5)));
        let ambience = GameEvent::StartAmbience;
        assert_eq!(events.iter().filter(|e| **e == ambience).count(), 1);
    }

    #[test]
    fn test_ambience_waits_for_gameplay_frames() {
        let mut state = GameState::new(6, Tuning::default());
        let settings = Settings::default();
        for _ in 0..120 {
            tick(&mut state, &TickInput::default(), SIM_DT, &settings);
        }
        tick(&mut state, &confirm(), SIM_DT, &settings);
        state.drain_events();

        for _ in 0..AMBIENCE_DELAY_FRAMES {
            tick(&mut state, &TickInput::default(), SIM_DT, &settings);
        }
        assert_eq!(state.gameplay_frames, AMBIENCE_DELAY_FRAMES);
        assert!(!state.drain_events().contains(&GameEvent::StartAmbience));

        tick(&mut state, &TickInput::default(), SIM_DT, &settings);
        assert!(state.drain_events().contains(&GameEvent::StartAmbience));
    }

    #[test]
    fn test_personal_best_cue() {
        let mut state = started(3);
        let settings = Settings::default();
        // Park the player on a beam 15 ft up
        let beam = Platform::beam(Rect::new(0.0, 250.0, 1000.0, 1.0));
        state.platforms = PlatformField::from_platforms(vec![beam]);
        state.player.pos.y = 250.0;

        tick(&mut state, &TickInput::default(), SIM_DT, &settings);
        let events = state.drain_events();
        assert!(events.contains(&GameEvent::NewPersonalBest(15)));
        assert!(events.contains(&GameEvent::Sound(SoundEffect::Bonus)));
        assert!(state.personal_best.is_highlighted());

        tick(&mut state, &TickInput::default(), SIM_DT, &settings);
        let events = state.drain_events();
        let new_best = |e: &GameEvent| matches!(e, GameEvent::NewPersonalBest(_));
        assert!(!events.iter().any(new_best));
        assert!(!state.personal_best.is_highlighted());
        assert_eq!(state.personal_best.best(), 15);
    }

    #[test]
    fn test_reduced_motion_keeps_camera_steady() {
        let mut state = started(4);
        let settings = Settings {
            reduced_motion: true,
            ..Settings::default()
        };
        state.player.pos.y = -5000.0;
        tick(&mut state, &TickInput::default(), 0.7, &settings);
        assert_eq!(state.camera.rotation, 0.0);
        assert_eq!(state.camera.zoom, 1.0);
    }

    #[test]
    fn test_determinism() {
        let settings = Settings::default();
        let mut state1 = GameState::new(99999, Tuning::default());
        let mut state2 = GameState::new(99999, Tuning::default());

        let inputs = [
            confirm(),
            TickInput {
                move_right: true,
                ..Default::default()
            },
            TickInput {
                jump: true,
                move_right: true,
                ..Default::default()
            },
            confirm(),
            TickInput::default(),
        ];

        for input in inputs.iter().cycle().take(300) {
            tick(&mut state1, input, SIM_DT, &settings);
            tick(&mut state2, input, SIM_DT, &settings);
        }

        assert_eq!(state1.player, state2.player);
        assert_eq!(state1.camera, state2.camera);
        assert_eq!(state1.platforms.platforms(), state2.platforms.platforms());
        assert_eq!(state1.regenerations, state2.regenerations);
        assert_eq!(state1.events, state2.events);
    }
}
