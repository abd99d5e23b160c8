//! Vertigo entry point
//!
//! Headless driver: runs the simulation at the display rate with the demo
//! climber at the controls, routing audio cues to the log. A windowed
//! backend plugs into the same `Game::update` / `Scene::build` pair.

use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use clap::Parser;
use serde::Serialize;

use vertigo::audio::{AudioManager, LogBackend};
use vertigo::consts::*;
use vertigo::renderer::Scene;
use vertigo::sim::{Autopilot, GameEvent, GameState, tick};
use vertigo::{Settings, Tuning};

#[derive(Parser, Debug)]
#[command(name = "vertigo", about = "Run a headless Vertigo climb")]
struct Args {
    /// Run seed (defaults to the current time)
    #[arg(long)]
    seed: Option<u64>,
    /// Display frames to simulate
    #[arg(long, default_value_t = 3600)]
    frames: u64,
    /// Tuning JSON file
    #[arg(long)]
    tuning: Option<PathBuf>,
    /// Settings JSON file
    #[arg(long)]
    settings: Option<PathBuf>,
    /// Log the HUD every N frames (0 = never)
    #[arg(long, default_value_t = 600)]
    hud_every: u64,
    /// Print a JSON summary on exit
    #[arg(long)]
    json: bool,
}

/// End-of-run report
#[derive(Debug, Serialize)]
struct RunSummary {
    seed: u64,
    frames: u64,
    run_seconds: f64,
    personal_best_ft: i32,
    regenerations: u32,
    final_x: f32,
    final_y: f32,
    sounds_played: usize,
}

/// Game instance holding all state
struct Game {
    state: GameState,
    settings: Settings,
    audio: AudioManager<LogBackend>,
    pilot: Autopilot,
    accumulator: f32,
}

impl Game {
    fn new(seed: u64, tuning: Tuning, settings: Settings) -> Self {
        let audio = AudioManager::new(LogBackend::default(), &settings);
        Self {
            state: GameState::new(seed, tuning),
            settings,
            audio,
            pilot: Autopilot::new(),
            accumulator: 0.0,
        }
    }

    /// Run simulation ticks for one display frame
    fn update(&mut self, dt: f32) {
        let dt = dt.min(MAX_FRAME_DT);
        self.accumulator += dt;

        let mut substeps = 0;
        while self.accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
            // The pilot reads state every substep, so edge inputs fire once
            let input = self.pilot.next_input(&self.state);
            tick(&mut self.state, &input, SIM_DT, &self.settings);
            self.accumulator -= SIM_DT;
            substeps += 1;
        }

        let events = self.state.drain_events();
        for event in &events {
            match event {
                GameEvent::PhaseChanged(phase) => log::info!("Phase -> {:?}", phase),
                GameEvent::PlatformsRegenerated(n) => log::info!("Tower regenerated ({})", n),
                _ => {}
            }
        }
        self.audio.dispatch(&events);
    }

    fn log_hud(&self) {
        let scene = Scene::build(&self.state);
        for line in &scene.texts {
            log::info!("[hud] {}", line.text);
        }
    }

    fn summary(&self, frames: u64) -> RunSummary {
        RunSummary {
            seed: self.state.seed,
            frames,
            run_seconds: self.state.run_time(),
            personal_best_ft: self.state.personal_best.best(),
            regenerations: self.state.regenerations,
            final_x: self.state.player.pos.x,
            final_y: self.state.player.pos.y,
            sounds_played: self.audio.backend().played,
        }
    }
}

fn load_tuning(path: Option<&PathBuf>) -> Tuning {
    let tuning = match path {
        Some(path) => {
            let (tuning, err) = Tuning::load_or_default(path);
            if let Some(e) = err {
                log::warn!("{}: {}; using default tuning", path.display(), e);
            }
            tuning
        }
        None => Tuning::default(),
    };
    for w in tuning.validate() {
        log::warn!("tuning: {}", w);
    }
    tuning
}

fn load_settings(path: Option<&PathBuf>) -> Settings {
    let settings = match path {
        Some(path) => {
            let (settings, err) = Settings::load_or_default(path);
            if let Some(e) = err {
                log::warn!("{}: {}; using default settings", path.display(), e);
            }
            settings
        }
        None => Settings::default(),
    };
    for w in settings.validate() {
        log::warn!("settings: {}", w);
    }
    settings
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let seed = args.seed.unwrap_or_else(|| {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0)
    });
    log::info!("Vertigo (headless) starting, seed {}", seed);

    let tuning = load_tuning(args.tuning.as_ref());
    let settings = load_settings(args.settings.as_ref());
    let mut game = Game::new(seed, tuning, settings);

    for frame in 1..=args.frames {
        game.update(SIM_DT);
        if args.hud_every > 0 && frame % args.hud_every == 0 {
            game.log_hud();
        }
    }

    let summary = game.summary(args.frames);
    log::info!(
        "Finished: best {} ft after {} regenerations",
        summary.personal_best_ft,
        summary.regenerations
    );
    if args.json {
        match serde_json::to_string_pretty(&summary) {
            Ok(json) => println!("{}", json),
            Err(e) => log::error!("Failed to encode summary: {}", e),
        }
    }
}
