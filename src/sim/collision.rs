//! Collision queries over sprite collections

use super::rect::Rect;

/// Anything with an axis-aligned bounding box.
pub trait Sprite {
    fn bounds(&self) -> Rect;
}

/// All sprites whose bounds overlap `query`, in slice order.
pub fn hits<'a, S: Sprite>(query: &Rect, sprites: &'a [S]) -> Vec<&'a S> {
    sprites
        .iter()
        .filter(|s| query.intersects(&s.bounds()))
        .collect()
}

/// First sprite whose bounds overlap `query`, in slice order.
pub fn first_hit<'a, S: Sprite>(query: &Rect, sprites: &'a [S]) -> Option<&'a S> {
    sprites.iter().find(|s| query.intersects(&s.bounds()))
}
