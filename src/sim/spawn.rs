//! Non-overlapping random placement
//!
//! Rejection sampling against already-placed rectangles with a fixed re-roll
//! budget. When the budget runs out the last candidate is kept as-is: the
//! demo tolerates overlap under high density rather than failing.

use rand::Rng;
use rand_pcg::Pcg32;

use super::rect::Rect;

/// Roll a candidate position for a `width x height` sprite.
///
/// The left edge ranges over the full play-field width, the bottom edge over
/// the upper half of the field (both ends inclusive), so birds spawn in the
/// top band away from the fire's start position.
pub fn roll_position(rng: &mut Pcg32, width: i32, height: i32, area_w: i32, area_h: i32) -> Rect {
    // Degenerate bands pin the sprite to the valid edge instead of panicking.
    let max_left = (area_w - width).max(0);
    let max_bottom = (area_h / 2).max(height);

    let mut rect = Rect::of_size(width, height);
    rect.left = rng.random_range(0..=max_left);
    rect.set_bottom(rng.random_range(height..=max_bottom));
    rect
}

/// Place `count` sprites of one size without overlap, best effort.
///
/// Each sprite re-rolls up to `retries` times before the last candidate is
/// accepted unconditionally.
pub fn place_non_overlapping(
    rng: &mut Pcg32,
    count: usize,
    width: i32,
    height: i32,
    area_w: i32,
    area_h: i32,
    retries: u32,
) -> Vec<Rect> {
    let mut placed: Vec<Rect> = Vec::with_capacity(count);
    for _ in 0..count {
        let mut candidate = roll_position(rng, width, height, area_w, area_h);
        let mut tries = 0;
        loop {
            if !placed.iter().any(|r| candidate.intersects(r)) {
                break;
            }
            if tries >= retries {
                log::debug!("placement budget exhausted, keeping overlapping candidate");
                break;
            }
            candidate = roll_position(rng, width, height, area_w, area_h);
            tries += 1;
        }
        placed.push(candidate);
    }
    placed
}
