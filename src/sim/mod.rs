//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed tick rate only
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod collision;
pub mod rect;
pub mod spawn;
pub mod state;
pub mod tick;

pub use collision::{Sprite, first_hit, hits};
pub use rect::Rect;
pub use spawn::{place_non_overlapping, roll_position};
pub use state::{Fire, GameState, RngState, Signal, Warbird};
pub use tick::{TickInput, tick};
