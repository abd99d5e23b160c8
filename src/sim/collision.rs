//! Player-vs-platform landing detection
//!
//! The player is a point (its feet). A platform catches the player when the
//! feet are inside the platform's horizontal span and the platform's top
//! lies within this frame's downward sweep `[y, y + speed * dt]`. A player
//! standing still on a platform sweeps a zero-length interval that still
//! contains the top, which is what keeps them grounded frame after frame.

use glam::Vec2;

use super::state::Platform;

/// Result of a landing check
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Landing {
    /// Index into the platform slice
    pub index: usize,
    /// Top edge the player snaps to
    pub y: f32,
}

/// True if `platform` catches a player at `feet` moving `dy` this frame
#[inline]
pub fn catches(platform: &Platform, feet: Vec2, dy: f32) -> bool {
    let top = platform.top();
    platform.blocking && platform.rect.spans_x(feet.x) && top >= feet.y && top <= feet.y + dy
}

/// Find the platform the player lands on this frame, if any
///
/// When several platforms qualify (a fast fall crossing more than one beam)
/// the one nearest the current feet position wins; ties go to the earlier
/// platform.
pub fn find_landing(platforms: &[Platform], feet: Vec2, dy: f32) -> Option<Landing> {
    let mut best: Option<Landing> = None;
    for (index, platform) in platforms.iter().enumerate() {
        if !catches(platform, feet, dy) {
            continue;
        }
        let y = platform.top();
        let closer = match best {
            Some(current) => (y - feet.y).abs() < (current.y - feet.y).abs(),
            None => true,
        };
        if closer {
            best = Some(Landing { index, y });
        }
    }
    best
}
