//! The fixed animal-target catalog.
//!
//! Exactly eight targets in board order. A target is identified by its
//! catalog position (0..7), which doubles as its `u8` discriminant.

use strum::{Display, EnumCount, EnumIter, FromRepr};

/// One of the eight animal targets, in fixed board order.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Display, EnumCount, EnumIter, FromRepr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum Animal {
    Penguin,
    Elephant,
    Pig,
    Sheep,
    Lion,
    Monkey,
    Cat,
    Cow,
}

impl Animal {
    /// Every target in board order. Lets dependents walk the catalog
    /// without pulling in the iterator machinery.
    pub const ALL: [Self; 8] = [
        Self::Penguin,
        Self::Elephant,
        Self::Pig,
        Self::Sheep,
        Self::Lion,
        Self::Monkey,
        Self::Cat,
        Self::Cow,
    ];

    /// Catalog position of this target (0..7).
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Looks up a target by catalog position.
    pub fn from_index(index: u8) -> Option<Self> {
        Self::from_repr(index)
    }

    /// Emoji printed on the physical target stick.
    pub const fn emoji(self) -> &'static str {
        match self {
            Self::Penguin => "\u{1F427}",
            Self::Elephant => "\u{1F418}",
            Self::Pig => "\u{1F437}",
            Self::Sheep => "\u{1F411}",
            Self::Lion => "\u{1F981}",
            Self::Monkey => "\u{1F435}",
            Self::Cat => "\u{1F431}",
            Self::Cow => "\u{1F42E}",
        }
    }
}
