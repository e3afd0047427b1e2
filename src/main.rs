//! Rect Pong entry point
//!
//! Native headless demo: the AI plays both paddles at a fixed frame rate
//! and the score is logged as points land.

use std::process::ExitCode;
use std::time::{Duration, Instant};

use rect_pong::Settings;
use rect_pong::hud::score_label;
use rect_pong::sim::{GameEvent, GameState, TickInput, tick};

/// Explicit settings file; if set it must be readable
const SETTINGS_ENV: &str = "RECT_PONG_SETTINGS";
const DEFAULT_SETTINGS_PATH: &str = "settings.json";

/// Demo ends once either side reaches this
const DEMO_POINTS: u32 = 3;
/// Hard stop in case the AIs never miss (two minutes at 60 fps)
const DEMO_MAX_FRAMES: u64 = 60 * 120;

fn load_settings() -> Result<Settings, String> {
    match std::env::var(SETTINGS_ENV) {
        Ok(path) => {
            let json = std::fs::read_to_string(&path)
                .map_err(|e| format!("Failed to read settings {path}: {e}"))?;
            Settings::from_json(&json).map_err(|e| format!("Failed to parse settings {path}: {e}"))
        }
        Err(_) => Ok(Settings::load_or_default(DEFAULT_SETTINGS_PATH)),
    }
}

fn main() -> ExitCode {
    env_logger::init();
    log::info!("Rect Pong (native) starting...");

    // Missing required resources are fatal before the first frame
    let settings = match load_settings() {
        Ok(settings) => settings,
        Err(e) => {
            log::error!("{e}");
            eprintln!("{e}");
            return ExitCode::FAILURE;
        }
    };

    let frame_budget = Duration::from_millis(settings.frame_millis());
    let mut state = GameState::with_settings(settings);
    let input = TickInput {
        idle_mode: true,
        ..Default::default()
    };

    while state.frame < DEMO_MAX_FRAMES {
        let frame_start = Instant::now();

        for event in tick(&mut state, &input) {
            if let GameEvent::Scored { .. } = event {
                println!("{}", score_label(&state.score));
            }
        }
        if state.score.left >= DEMO_POINTS || state.score.right >= DEMO_POINTS {
            break;
        }

        // Frame rate limiting
        let elapsed = frame_start.elapsed();
        if elapsed < frame_budget {
            std::thread::sleep(frame_budget - elapsed);
        }
    }

    log::info!(
        "Demo finished after {} frames: {}",
        state.frame,
        score_label(&state.score)
    );
    ExitCode::SUCCESS
}
