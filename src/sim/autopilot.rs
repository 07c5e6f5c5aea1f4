//! Demo input: steer the player toward the target

use std::cmp::Ordering;

use super::entity::EntityKind;
use super::level::Level;
use crate::engine::GameKey;

/// Held-key mask that moves the player toward the target on both axes
///
/// Empty when either entity is missing or the player is already on top of it.
pub fn steer(level: &Level) -> u8 {
    let (Some(player), Some(target)) = (
        level.find(EntityKind::Player),
        level.find(EntityKind::Target),
    ) else {
        return 0;
    };

    let delta = target.pos() - player.pos();
    let mut held = 0;
    match delta.x.cmp(&0) {
        Ordering::Less => held |= GameKey::Left.bit(),
        Ordering::Greater => held |= GameKey::Right.bit(),
        Ordering::Equal => {}
    }
    match delta.y.cmp(&0) {
        Ordering::Less => held |= GameKey::Up.bit(),
        Ordering::Greater => held |= GameKey::Down.bit(),
        Ordering::Equal => {}
    }
    held
}
