//! Player preferences
//!
//! Kept separate from `Tuning`: these change how a run looks and sounds,
//! never how it plays.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Audio ===
    /// Master volume (0.0 - 1.0)
    pub master_volume: f32,
    /// Sound effects volume (0.0 - 1.0)
    pub sfx_volume: f32,
    /// Music volume (0.0 - 1.0)
    pub music_volume: f32,
    /// Silence everything
    pub muted: bool,

    // === Accessibility ===
    /// Reduced motion (no camera sway or zoom wobble during play)
    pub reduced_motion: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            master_volume: 1.0,
            sfx_volume: 1.0,
            music_volume: 1.0,
            muted: false,

            reduced_motion: false,
        }
    }
}

impl Settings {
    /// Effective camera jitter (respects reduced_motion)
    pub fn effective_camera_jitter(&self) -> bool {
        !self.reduced_motion
    }

    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, String> {
        let data = fs::read_to_string(&path).map_err(|e| format!("read settings: {e}"))?;
        serde_json::from_str(&data).map_err(|e| format!("parse settings JSON: {e}"))
    }

    pub fn load_or_default(path: impl AsRef<Path>) -> (Self, Option<String>) {
        match Self::load_from_file(&path) {
            Ok(settings) => (settings, None),
            Err(e) => (Self::default(), Some(e)),
        }
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), String> {
        let json =
            serde_json::to_string_pretty(self).map_err(|e| format!("encode settings: {e}"))?;
        fs::write(&path, json).map_err(|e| format!("write settings: {e}"))?;
        log::info!("Settings saved to {}", path.as_ref().display());
        Ok(())
    }

    /// Out-of-range values; the audio layer clamps them anyway
    pub fn validate(&self) -> Vec<String> {
        let mut w = Vec::new();
        for (name, v) in [
            ("master_volume", self.master_volume),
            ("sfx_volume", self.sfx_volume),
            ("music_volume", self.music_volume),
        ] {
            if !(0.0..=1.0).contains(&v) {
                w.push(format!("{name} {v} outside 0..=1; will be clamped"));
            }
        }
        w
    }
}
