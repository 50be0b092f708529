//! Skyfire - a sprite collision demo
//!
//! Core modules:
//! - `sim`: Deterministic simulation (rectangles, placement, collision, tick)
//! - `settings`: Explicit configuration passed at initialization
//!
//! Rendering and the window/event layer are external collaborators: they feed
//! `TickInput`s into the simulation and draw the entity rectangles it exposes.

pub mod settings;
pub mod sim;

pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Fixed tick rate (the original demo caps its frame loop at 60 fps)
    pub const TICK_HZ: u32 = 60;

    /// Play field dimensions
    pub const WINDOW_WIDTH: i32 = 600;
    pub const WINDOW_HEIGHT: i32 = 600;

    /// Warbird sprite size (from the warbird bitmap)
    pub const BIRD_WIDTH: i32 = 85;
    pub const BIRD_HEIGHT: i32 = 48;

    /// Fire sprite size (from the fire bitmap)
    pub const FIRE_WIDTH: i32 = 20;
    pub const FIRE_HEIGHT: i32 = 42;

    /// Fire movement speed in pixels per tick
    pub const FIRE_SPEED: i32 = 3;
    /// Number of warbirds spawned at start
    pub const BIRD_COUNT: usize = 8;
    /// Re-roll budget for non-overlapping placement
    pub const PLACEMENT_RETRIES: u32 = 100;
}
