//! Entities and game state
//!
//! Everything needed to reproduce a run lives here: the seed, the RNG state,
//! and the entity rectangles. The renderer reads rectangles and the `hit`
//! field; it writes nothing back.

use glam::IVec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::collision::Sprite;
use super::rect::Rect;
use super::spawn;
use crate::settings::Settings;

/// Discrete steering signal from the input layer.
///
/// Arrow-key presses map to the four directions; key releases and anything
/// unrecognized map to `Neutral`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Signal {
    Left,
    Right,
    Up,
    Down,
    #[default]
    Neutral,
}

/// A stationary target sprite.
///
/// Its rectangle is assigned once at spawn and never moved afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Warbird {
    pub id: u32,
    pub rect: Rect,
}

impl Sprite for Warbird {
    fn bounds(&self) -> Rect {
        self.rect
    }
}

/// The player-steered sprite.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fire {
    pub rect: Rect,
    /// Per-axis direction, each component in {-1, 0, 1}.
    pub direction: IVec2,
    /// Movement speed in pixels per tick.
    pub speed: i32,
}

impl Fire {
    /// Starts horizontally centered with its bottom edge on the bottom of
    /// the play field.
    pub fn new(settings: &Settings) -> Self {
        let mut rect = Rect::of_size(settings.fire_width, settings.fire_height);
        rect.set_center_x(settings.window_width / 2);
        rect.set_bottom(settings.window_height);
        Self {
            rect,
            direction: IVec2::ZERO,
            speed: settings.fire_speed,
        }
    }

    /// Map a steering signal onto the direction state.
    ///
    /// The axes are mutually exclusive: both are cleared first, then the
    /// recognized signal sets exactly one. `Neutral` leaves both at zero.
    pub fn steer(&mut self, signal: Signal) {
        self.direction = IVec2::ZERO;
        match signal {
            Signal::Left => self.direction.x = -1,
            Signal::Right => self.direction.x = 1,
            Signal::Up => self.direction.y = -1,
            Signal::Down => self.direction.y = 1,
            Signal::Neutral => {}
        }
    }

    /// Advance one tick. No clamping against the play field; the sprite may
    /// move off-screen indefinitely.
    pub fn update(&mut self) {
        self.rect.shift(self.direction * self.speed);
    }
}

impl Sprite for Fire {
    fn bounds(&self) -> Rect {
        self.rect
    }
}

/// RNG state wrapper for serialization
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RngState {
    pub seed: u64,
}

impl RngState {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    pub fn to_rng(&self) -> Pcg32 {
        Pcg32::seed_from_u64(self.seed)
    }
}

/// Complete game state (deterministic, serializable)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// RNG state
    pub rng_state: RngState,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Cleared by a quit signal; the frame loop exits when false
    pub running: bool,
    /// Stationary targets, placed once at creation
    pub birds: Vec<Warbird>,
    /// The player-steered sprite
    pub fire: Fire,
    /// Id of the first bird currently overlapping the fire, if any
    pub hit: Option<u32>,
}

impl GameState {
    /// Create a new game state: place the birds without overlap (best
    /// effort) and park the fire at its start position.
    pub fn new(seed: u64, settings: &Settings) -> Self {
        let rng_state = RngState::new(seed);
        let mut rng = rng_state.to_rng();
        let rects = spawn::place_non_overlapping(
            &mut rng,
            settings.bird_count,
            settings.bird_width,
            settings.bird_height,
            settings.window_width,
            settings.window_height,
            settings.placement_retries,
        );
        let birds = rects
            .into_iter()
            .enumerate()
            .map(|(i, rect)| Warbird {
                id: i as u32 + 1,
                rect,
            })
            .collect();

        Self {
            seed,
            rng_state,
            time_ticks: 0,
            running: true,
            birds,
            fire: Fire::new(settings),
            hit: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vertical_steer_overrides_horizontal() {
        let mut fire = Fire::new(&Settings::default());
        fire.steer(Signal::Left);
        assert_eq!(fire.direction, IVec2::new(-1, 0));
        fire.steer(Signal::Up);
        assert_eq!(fire.direction, IVec2::new(0, -1));
    }

    #[test]
    fn neutral_resets_any_prior_direction() {
        let mut fire = Fire::new(&Settings::default());
        fire.steer(Signal::Down);
        fire.steer(Signal::Neutral);
        assert_eq!(fire.direction, IVec2::ZERO);
    }

    #[test]
    fn update_advances_by_speed_per_axis() {
        let mut fire = Fire::new(&Settings::default());
        let start = fire.rect;
        fire.steer(Signal::Right);
        fire.update();
        assert_eq!(fire.rect.left, start.left + fire.speed);
        assert_eq!(fire.rect.top, start.top);
    }

    #[test]
    fn fire_starts_centered_on_the_bottom_edge() {
        let settings = Settings::default();
        let fire = Fire::new(&settings);
        assert_eq!(fire.rect.center().x, settings.window_width / 2);
        assert_eq!(fire.rect.bottom(), settings.window_height);
        assert_eq!(fire.direction, IVec2::ZERO);
    }

    #[test]
    fn same_seed_reproduces_the_same_birds() {
        let settings = Settings::default();
        let a = GameState::new(99, &settings);
        let b = GameState::new(99, &settings);
        assert_eq!(a.birds, b.birds);
        assert_eq!(a.birds.len(), settings.bird_count);
    }
}
