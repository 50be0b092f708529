//! Skyfire entry point
//!
//! Runs a scripted headless demo of the collision loop at the fixed tick
//! rate. The window, input, and rendering layer is a separate collaborator;
//! this binary feeds the simulation the same inputs that layer would.

use std::path::Path;
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use skyfire::consts::TICK_HZ;
use skyfire::settings::Settings;
use skyfire::sim::{GameState, Signal, TickInput, tick};

fn main() {
    env_logger::init();

    let settings = Settings::load(Path::new("skyfire.json"));
    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0);

    let mut state = GameState::new(seed, &settings);
    log::info!("Placed {} warbirds with seed {}", state.birds.len(), seed);

    // Steer straight up and run until something is hit or the fire leaves
    // the field, pacing the loop at the tick rate.
    let tick_duration = Duration::from_secs(1) / TICK_HZ;
    let mut input = TickInput {
        steer: Some(Signal::Up),
        quit: false,
    };

    while state.running {
        let frame_start = Instant::now();

        tick(&mut state, &input);
        input.steer = None; // one-shot, like a key event

        if let Some(id) = state.hit {
            log::info!("Fire hit warbird {} at tick {}", id, state.time_ticks);
            break;
        }
        if state.fire.rect.bottom() < 0 {
            log::info!("Fire left the field without hitting anything");
            break;
        }

        if let Some(rest) = tick_duration.checked_sub(frame_start.elapsed()) {
            std::thread::sleep(rest);
        }
    }
}
