//! Everything to draw for one frame, in draw order

use glam::Vec2;

use super::sprite::{SpriteDraw, player_sprite, title_sprite};
use super::{BLACK, DARKGRAY, LIME, RAYWHITE, Rgba, WHITE, fade};
use crate::sim::{Camera, GamePhase, GameState, Platform, PlatformColor, Rect, height_feet};

/// Number of stacked skyscraper tiles behind the tower
const BACKDROP_TILES: usize = 200;
const BACKDROP_SIZE: f32 = 1024.0;
/// Vertical alignment of the lowest tile with the ground
const BACKDROP_BASE_Y: f32 = 74.0;

const TITLE_LINES: [&str; 3] = [
    "USE THE PLATFORMS TO SCALE THE BUILDING.",
    "YOU CAN REGENERATE THE PLATFORMS TO POSSIBLY CREATE A BETTER PATH.",
    "[PRESS ENTER TO PLAY]",
];
const REGENERATE_HINT: &str = "(PRESS ENTER TO REGENERATE PLATFORMS)";

/// A line of text in world space
#[derive(Debug, Clone, PartialEq)]
pub struct TextDraw {
    pub text: String,
    pub pos: Vec2,
    pub size: f32,
    pub color: Rgba,
}

impl TextDraw {
    fn new(text: impl Into<String>, pos: Vec2, size: f32, color: Rgba) -> Self {
        Self {
            text: text.into(),
            pos,
            size,
            color,
        }
    }
}

/// Screen-covering rectangles drawn over the world
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Overlay {
    Solid { rect: Rect, color: Rgba },
    /// Vertical gradient from `top` to `bottom`
    Gradient { rect: Rect, top: Rgba, bottom: Rgba },
}

/// Draw data for one frame
#[derive(Debug, Clone)]
pub struct Scene<'a> {
    pub clear_color: Rgba,
    pub camera: Camera,
    /// Skyscraper tiles behind the tower
    pub backdrop: Vec<Rect>,
    pub backdrop_tint: Rgba,
    pub platforms: &'a [Platform],
    pub sprites: Vec<SpriteDraw>,
    pub overlays: Vec<Overlay>,
    pub texts: Vec<TextDraw>,
    /// Fade overlay, drawn last
    pub fade: Overlay,
}

impl<'a> Scene<'a> {
    pub fn build(state: &'a GameState) -> Self {
        match state.phase {
            GamePhase::Title => Self::title(state),
            GamePhase::Gameplay => Self::gameplay(state),
        }
    }

    fn title(state: &'a GameState) -> Self {
        let cam = state.camera;
        let origin = cam.view_origin();
        let (vw, vh) = (state.tuning.viewport_width, state.tuning.viewport_height);

        let heading = origin + Vec2::new(30.0, 30.0);
        let mut texts = vec![TextDraw::new("VERTIGO", heading, 32.0, BLACK)];
        for (i, line) in TITLE_LINES.iter().enumerate() {
            let last = i + 1 == TITLE_LINES.len();
            let size = if last { 16.0 } else { 12.0 };
            let pos = Vec2::new(origin.x + 10.0, cam.target.y + 12.0 * i as f32);
            texts.push(TextDraw::new(*line, pos, size, BLACK));
        }

        Self {
            clear_color: RAYWHITE,
            camera: cam,
            backdrop: Vec::new(),
            backdrop_tint: DARKGRAY,
            platforms: &[],
            sprites: vec![title_sprite(state.frame_counter)],
            overlays: Vec::new(),
            texts,
            fade: Overlay::Solid {
                rect: Rect::new(origin.x, origin.y, vw + 100.0, vh + 100.0),
                color: fade(BLACK, state.fade_amount),
            },
        }
    }

    fn gameplay(state: &'a GameState) -> Self {
        let cam = state.camera;
        let origin = cam.view_origin();
        let (vw, vh) = (state.tuning.viewport_width, state.tuning.viewport_height);
        let player = &state.player;

        let backdrop = (0..BACKDROP_TILES)
            .map(|i| {
                Rect::new(
                    0.0,
                    BACKDROP_BASE_Y - BACKDROP_SIZE * i as f32,
                    BACKDROP_SIZE,
                    BACKDROP_SIZE,
                )
            })
            .collect();

        let feet = height_feet(player.pos.y, state.tuning.base_y);
        let best_color = if state.personal_best.is_highlighted() {
            LIME
        } else {
            RAYWHITE
        };
        let texts = vec![
            TextDraw::new(
                format!("({:.0} FT)", feet),
                player.pos + Vec2::new(-30.0, -100.0),
                12.0,
                RAYWHITE,
            ),
            TextDraw::new(
                format!("HIGHEST: {} ft", state.personal_best.best()),
                origin,
                20.0,
                best_color,
            ),
            TextDraw::new(
                REGENERATE_HINT,
                Vec2::new(cam.target.x, origin.y),
                10.0,
                WHITE,
            ),
        ];

        Self {
            clear_color: BLACK,
            camera: cam,
            backdrop,
            backdrop_tint: DARKGRAY,
            platforms: state.platforms.platforms(),
            sprites: vec![player_sprite(player, state.frame_counter)],
            overlays: vec![Overlay::Gradient {
                rect: Rect::new(origin.x - 5.0, origin.y - 10.0, vw, vh / 10.0),
                top: BLACK,
                bottom: fade(BLACK, 0.0),
            }],
            texts,
            fade: Overlay::Solid {
                rect: Rect::new(origin.x, origin.y, vw, vh + 100.0),
                color: fade(RAYWHITE, state.fade_amount),
            },
        }
    }
}

/// Asset drawn for a platform
///
/// The ground slab shares the beam texture; only its rect differs.
pub fn platform_asset(platform: &Platform) -> &'static str {
    match platform.color {
        PlatformColor::Ground | PlatformColor::Beam => "beam.png",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::SIM_DT;
    use crate::renderer::SpriteSheet;
    use crate::settings::Settings;
    use crate::sim::{TickInput, tick};
    use crate::tuning::Tuning;

    #[test]
    fn title_scene_has_black_fade_and_no_world() {
        let state = GameState::new(1, Tuning::default());
        let scene = Scene::build(&state);
        assert_eq!(scene.clear_color, RAYWHITE);
        assert!(scene.platforms.is_empty());
        assert_eq!(scene.texts[0].text, "VERTIGO");
        assert_eq!(scene.sprites[0].sheet, SpriteSheet::Jump);
        match scene.fade {
            Overlay::Solid { color, .. } => assert_eq!(color, BLACK),
            other => panic!("unexpected fade {other:?}"),
        }
    }

    #[test]
    fn gameplay_scene_shows_world_and_hud() {
        let mut state = GameState::new(1, Tuning::default());
        let settings = Settings::default();
        let confirm = TickInput {
            confirm: true,
            ..Default::default()
        };
        tick(&mut state, &confirm, SIM_DT, &settings);
        for _ in 0..60 {
            tick(&mut state, &TickInput::default(), SIM_DT, &settings);
        }

        let scene = Scene::build(&state);
        assert_eq!(scene.clear_color, BLACK);
        assert_eq!(scene.platforms.len(), 991);
        assert_eq!(scene.backdrop.len(), 200);
        assert_eq!(scene.backdrop[0].y, 74.0);
        assert_eq!(scene.sprites[0].sheet, SpriteSheet::Idle);
        assert_eq!(scene.texts[0].text, "(0 FT)");
        assert_eq!(scene.texts[1].text, "HIGHEST: 0 ft");
        assert_eq!(scene.texts[1].color, RAYWHITE);
        match scene.fade {
            // Gameplay flash is over after half a second
            Overlay::Solid { color, .. } => assert_eq!(color[3], 0.0),
            other => panic!("unexpected fade {other:?}"),
        }
    }

    #[test]
    fn new_best_turns_lime() {
        let mut state = GameState::new(1, Tuning::default());
        state.phase = GamePhase::Gameplay;
        state.personal_best.record(12.0);
        let scene = Scene::build(&state);
        assert_eq!(scene.texts[1].text, "HIGHEST: 12 ft");
        assert_eq!(scene.texts[1].color, LIME);
    }

    #[test]
    fn every_platform_uses_the_beam_texture() {
        let state = GameState::new(1, Tuning::default());
        let base = state.platforms.base().unwrap();
        assert_eq!(base.color, PlatformColor::Ground);
        assert_eq!(platform_asset(base), "beam.png");
        assert_eq!(platform_asset(&state.platforms.platforms()[1]), "beam.png");
    }
}
