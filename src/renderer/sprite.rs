//! Player sprite sheets and animation frame selection

use super::Rgba;
use crate::sim::{Player, Rect};

/// Size of one animation cell in every sheet
pub const CELL_W: f32 = 64.0;
pub const CELL_H: f32 = 80.0;

/// Which sheet the player is drawn from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpriteSheet {
    Idle,
    Run,
    Jump,
}

impl SpriteSheet {
    /// Asset the backend loads for this sheet
    pub fn asset_name(&self) -> &'static str {
        match self {
            SpriteSheet::Idle => "idle_sheet.png",
            SpriteSheet::Run => "run_sheet.png",
            SpriteSheet::Jump => "jump_sheet.png",
        }
    }

    /// Rows of `CELL_H` in the sheet image
    pub fn frame_rows(&self) -> u32 {
        match self {
            SpriteSheet::Idle => 31,
            SpriteSheet::Run => 23,
            SpriteSheet::Jump => 34,
        }
    }

    /// Source rectangle inside the sheet
    ///
    /// Frame indices past the last row wrap, as a repeating texture would.
    pub fn source_rect(&self, frame: u32) -> Rect {
        let row = frame % self.frame_rows();
        Rect::new(0.0, row as f32 * CELL_H, CELL_W, CELL_H)
    }
}

/// One sprite draw
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpriteDraw {
    pub sheet: SpriteSheet,
    pub frame: u32,
    /// World-space destination
    pub dest: Rect,
    /// Mirror horizontally
    pub flip_x: bool,
    pub tint: Rgba,
}

/// Animation state for the player this frame
pub fn player_animation(player: &Player, frame_counter: u64) -> (SpriteSheet, u32) {
    if !player.can_jump {
        (SpriteSheet::Jump, 48)
    } else if player.hor_moving {
        (SpriteSheet::Run, (frame_counter % 23) as u32)
    } else {
        (SpriteSheet::Idle, (frame_counter % 35) as u32)
    }
}

/// Player sprite anchored at the feet
pub fn player_sprite(player: &Player, frame_counter: u64) -> SpriteDraw {
    let (sheet, frame) = player_animation(player, frame_counter);
    let (x, y) = (player.pos.x, player.pos.y);
    SpriteDraw {
        sheet,
        frame,
        dest: Rect::new(x - CELL_W / 2.0, y - CELL_H, CELL_W, CELL_H),
        flip_x: !player.facing_right,
        tint: super::WHITE,
    }
}

/// Mid-jump figure shown on the title card
pub fn title_sprite(frame_counter: u64) -> SpriteDraw {
    SpriteDraw {
        sheet: SpriteSheet::Jump,
        frame: ((frame_counter / 4) % 30) as u32,
        dest: Rect::new(100.0, 100.0, CELL_W * 2.0, CELL_H * 2.0),
        flip_x: false,
        tint: super::fade(super::GRAY, 0.5),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn airborne_uses_jump_pose() {
        let player = Player {
            can_jump: false,
            hor_moving: true,
            ..Player::default()
        };
        assert_eq!(player_animation(&player, 7), (SpriteSheet::Jump, 48));
    }

    #[test]
    fn grounded_cycles_run_or_idle() {
        let mut player = Player {
            can_jump: true,
            hor_moving: true,
            ..Player::default()
        };
        assert_eq!(player_animation(&player, 25), (SpriteSheet::Run, 2));
        player.hor_moving = false;
        assert_eq!(player_animation(&player, 36), (SpriteSheet::Idle, 1));
    }

    #[test]
    fn sprite_is_anchored_at_feet_and_flips() {
        let player = Player {
            facing_right: false,
            ..Player::default()
        };
        let sprite = player_sprite(&player, 0);
        assert_eq!(sprite.dest, Rect::new(368.0, 320.0, 64.0, 80.0));
        assert!(sprite.flip_x);
    }

    #[test]
    fn source_rows_wrap() {
        assert_eq!(SpriteSheet::Jump.source_rect(48).y, 14.0 * CELL_H);
        assert_eq!(SpriteSheet::Run.source_rect(5).y, 5.0 * CELL_H);
        assert_eq!(SpriteSheet::Idle.source_rect(35).y, 4.0 * CELL_H);
        assert_eq!(SpriteSheet::Jump.asset_name(), "jump_sheet.png");
    }

    #[test]
    fn title_figure_advances_every_four_frames() {
        assert_eq!(title_sprite(3).frame, 0);
        assert_eq!(title_sprite(4).frame, 1);
        assert_eq!(title_sprite(4 * 30).frame, 0);
    }
}
