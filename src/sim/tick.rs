//! Fixed-rate simulation tick
//!
//! One call per frame: steer, move, test collisions. The frame loop owns
//! pacing and rendering.

use super::collision;
use super::state::{GameState, Signal};

/// Input commands for a single tick (deterministic)
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// Steering change this tick, if any (key press or release)
    pub steer: Option<Signal>,
    /// Quit request (escape key or window close)
    pub quit: bool,
}

/// Advance the game state by one tick.
pub fn tick(state: &mut GameState, input: &TickInput) {
    if input.quit {
        state.running = false;
        return;
    }

    if let Some(signal) = input.steer {
        state.fire.steer(signal);
    }

    state.fire.update();
    state.hit = collision::first_hit(&state.fire.rect, &state.birds).map(|b| b.id);
    state.time_ticks += 1;
}
