//! Team affiliation of placed objects.

use serde::{Deserialize, Serialize};

/// Which side an object belongs to.
///
/// `Neutral` is a distinct variant rather than a magic team index; the level
/// files encode it as `0xFFFF_FFFF`, see [`Team::to_wire`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Team {
    /// The player (owner of the anchor).
    Player,
    /// Hostile forces.
    #[default]
    Enemy,
    /// Scenery, scrap and anything unowned.
    Neutral,
}

impl Team {
    /// Wire value used by the level files for "no team".
    pub const NEUTRAL_WIRE: u32 = 0xFFFF_FFFF;

    /// Converts to the numeric team id stored in level files.
    #[inline]
    #[must_use]
    pub const fn to_wire(self) -> u32 {
        match self {
            Self::Player => 0,
            Self::Enemy => 1,
            Self::Neutral => Self::NEUTRAL_WIRE,
        }
    }

    /// Converts from a numeric team id; unknown ids yield `None`.
    #[inline]
    #[must_use]
    pub const fn from_wire(value: u32) -> Option<Self> {
        match value {
            0 => Some(Self::Player),
            1 => Some(Self::Enemy),
            Self::NEUTRAL_WIRE => Some(Self::Neutral),
            _ => None,
        }
    }

    /// Parses a lowercase team name (`player`, `enemy`, `neutral`).
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "player" => Some(Self::Player),
            "enemy" => Some(Self::Enemy),
            "neutral" => Some(Self::Neutral),
            _ => None,
        }
    }
}
