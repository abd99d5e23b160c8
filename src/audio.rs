//! Sound cues and audio dispatch
//!
//! The simulation never touches an audio device. It queues `GameEvent`s;
//! the host hands them to an `AudioManager`, which applies volumes and
//! forwards fire-and-forget requests to whatever `AudioBackend` is wired up.

use rand::Rng;

use crate::settings::Settings;
use crate::sim::GameEvent;

/// Number of interchangeable jump sounds
pub const JUMP_VARIANTS: u8 = 4;
/// Number of interchangeable regeneration sounds
pub const REGENERATE_VARIANTS: u8 = 2;

/// Gain applied to the personal-best pluck, which is mixed quiet
const BONUS_GAIN: f32 = 0.2;

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SoundEffect {
    /// Player left the ground (variant index)
    Jump(u8),
    /// Platform field rebuilt (variant index)
    Regenerate(u8),
    /// New personal best height
    Bonus,
}

impl SoundEffect {
    /// Pick one of the jump variants
    pub fn random_jump<R: Rng + ?Sized>(rng: &mut R) -> Self {
        SoundEffect::Jump(rng.random_range(0..JUMP_VARIANTS))
    }

    /// Pick one of the regeneration variants
    pub fn random_regenerate<R: Rng + ?Sized>(rng: &mut R) -> Self {
        SoundEffect::Regenerate(rng.random_range(0..REGENERATE_VARIANTS))
    }

    /// Asset name the backend should load for this cue
    pub fn asset_name(&self) -> String {
        match self {
            SoundEffect::Jump(i) => format!("jump{}.ogg", i + 1),
            SoundEffect::Regenerate(i) => format!("regenerate{}.ogg", i + 1),
            SoundEffect::Bonus => "bonusPluck.ogg".to_string(),
        }
    }

    /// Per-cue mix level
    pub fn gain(&self) -> f32 {
        match self {
            SoundEffect::Bonus => BONUS_GAIN,
            _ => 1.0,
        }
    }
}

/// Device-facing half of the audio system
pub trait AudioBackend {
    /// Start a one-shot effect at `volume` (0.0 - 1.0)
    fn play(&mut self, effect: SoundEffect, volume: f32);
    /// Set the looping music track volume (0.0 - 1.0)
    fn set_music_volume(&mut self, volume: f32);
    /// Start the secondary wind loop
    fn start_ambience(&mut self);
}

/// Backend that only logs what would have been played
#[derive(Debug, Default)]
pub struct LogBackend {
    /// Number of one-shot effects requested so far
    pub played: usize,
}

impl AudioBackend for LogBackend {
    fn play(&mut self, effect: SoundEffect, volume: f32) {
        self.played += 1;
        log::debug!("play {} at {:.2}", effect.asset_name(), volume);
    }

    fn set_music_volume(&mut self, volume: f32) {
        log::trace!("music volume {:.2}", volume);
    }

    fn start_ambience(&mut self) {
        log::debug!("ambience started");
    }
}

/// Audio manager for the game
pub struct AudioManager<B: AudioBackend> {
    backend: B,
    master_volume: f32,
    sfx_volume: f32,
    music_volume: f32,
    muted: bool,
}

impl<B: AudioBackend> AudioManager<B> {
    pub fn new(backend: B, settings: &Settings) -> Self {
        let mut manager = Self {
            backend,
            master_volume: 1.0,
            sfx_volume: 1.0,
            music_volume: 1.0,
            muted: false,
        };
        manager.apply_settings(settings);
        manager
    }

    pub fn apply_settings(&mut self, settings: &Settings) {
        self.set_master_volume(settings.master_volume);
        self.set_sfx_volume(settings.sfx_volume);
        self.music_volume = settings.music_volume.clamp(0.0, 1.0);
        self.muted = settings.muted;
    }

    /// Set master volume (0.0 - 1.0)
    pub fn set_master_volume(&mut self, vol: f32) {
        self.master_volume = vol.clamp(0.0, 1.0);
    }

    /// Set SFX volume (0.0 - 1.0)
    pub fn set_sfx_volume(&mut self, vol: f32) {
        self.sfx_volume = vol.clamp(0.0, 1.0);
    }

    /// Mute/unmute all audio
    pub fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }

    fn effective_volume(&self) -> f32 {
        if self.muted {
            0.0
        } else {
            self.master_volume * self.sfx_volume
        }
    }

    /// Play a sound effect
    pub fn play(&mut self, effect: SoundEffect) {
        let vol = self.effective_volume() * effect.gain();
        if vol <= 0.0 {
            return;
        }
        self.backend.play(effect, vol);
    }

    /// Forward every audio-relevant event; others are ignored
    pub fn dispatch(&mut self, events: &[GameEvent]) {
        for event in events {
            match *event {
                GameEvent::Sound(effect) => self.play(effect),
                GameEvent::MusicVolume(level) => {
                    let vol = if self.muted {
                        0.0
                    } else {
                        level.clamp(0.0, 1.0) * self.music_volume * self.master_volume
                    };
                    self.backend.set_music_volume(vol);
                }
                GameEvent::StartAmbience => self.backend.start_ambience(),
                _ => {}
            }
        }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }
}
