use strum::EnumCount;

use crate::catalog::Animal;

/// Compile-time rules of the target range.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GameConfig;

impl GameConfig {
    /// Number of animal targets on the range.
    pub const TARGET_COUNT: usize = Animal::COUNT;

    /// Minimum roster size required to start a game.
    pub const MIN_PLAYERS: usize = 2;

    /// Maximum roster size.
    pub const MAX_PLAYERS: usize = 12;
}
