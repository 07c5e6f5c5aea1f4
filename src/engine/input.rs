//! Per-frame input snapshot

use serde::{Deserialize, Serialize};

/// The fixed key set of the device
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameKey {
    Up,
    Down,
    Left,
    Right,
    Ok,
    Back,
}

impl GameKey {
    pub const ALL: [GameKey; 6] = [
        GameKey::Up,
        GameKey::Down,
        GameKey::Left,
        GameKey::Right,
        GameKey::Ok,
        GameKey::Back,
    ];

    /// Bit of this key in an input mask
    #[inline]
    pub const fn bit(self) -> u8 {
        1 << self as u8
    }

    /// Mask with every key in `keys` set
    pub fn mask(keys: &[GameKey]) -> u8 {
        keys.iter().fold(0, |mask, key| mask | key.bit())
    }
}

/// Keys held this frame and keys that went down this frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputState {
    pub held: u8,
    pub pressed: u8,
}

impl InputState {
    /// Snapshot with `keys` held (and none newly pressed)
    pub fn holding(keys: &[GameKey]) -> Self {
        Self {
            held: GameKey::mask(keys),
            pressed: 0,
        }
    }

    /// Derive `pressed` from the previous frame's held mask
    pub fn from_transition(prev_held: u8, held: u8) -> Self {
        Self {
            held,
            pressed: held & !prev_held,
        }
    }

    /// Mark `key` as pressed this frame (a pressed key is also held)
    pub fn with_pressed(mut self, key: GameKey) -> Self {
        self.held |= key.bit();
        self.pressed |= key.bit();
        self
    }

    #[inline]
    pub fn is_held(&self, key: GameKey) -> bool {
        self.held & key.bit() != 0
    }

    #[inline]
    pub fn is_pressed(&self, key: GameKey) -> bool {
        self.pressed & key.bit() != 0
    }
}
