//! Target behavior
//!
//! A small disc at a random interior point. Touching it with the player
//! scores a point and sends it somewhere else.

use glam::IVec2;
use rand::Rng;

use super::entity::{Entity, EntityKind};
use super::state::GameState;
use crate::consts::*;
use crate::engine::Canvas;

/// Random interior point: x in [4, 123], y in [4, 61]
///
/// The range keeps a radius-3 disc inside the playfield.
pub fn random_position<R: Rng>(rng: &mut R) -> IVec2 {
    IVec2::new(
        rng.random_range(0..TARGET_SPAN_X) + TARGET_MIN,
        rng.random_range(0..TARGET_SPAN_Y) + TARGET_MIN,
    )
}

/// Place the target and attach its collision circle
pub fn start<R: Rng>(target: &mut Entity, rng: &mut R) {
    target.set_pos(random_position(rng));
    target.add_circle_collider(TARGET_RADIUS);
}

pub fn render(target: &Entity, canvas: &mut dyn Canvas) {
    let pos = target.pos();
    canvas.draw_disc(pos.x, pos.y, TARGET_RADIUS);
}

/// Score and relocate when the player touches the target
pub fn on_collision<R: Rng>(
    target: &mut Entity,
    other: EntityKind,
    game: &mut GameState,
    rng: &mut R,
) {
    if other != EntityKind::Player {
        return;
    }

    game.award_point();

    // Reroll until the target actually moves
    let current = target.pos();
    let mut next = random_position(rng);
    while next == current {
        next = random_position(rng);
    }
    target.set_pos(next);

    log::debug!("Target touched: score {}, moved to {next}", game.score());
}
