use serde::{Deserialize, Serialize};
use std::fmt;

/// The two sides of a duplicate table a pair can sit.
///
/// The discriminant doubles as the index into `[ns, ew]` identifier pairs.
/// Stored records carry the side as a boolean `ew` flag, so that is what
/// serde reads and writes.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(from = "bool", into = "bool")]
#[repr(u8)]
pub enum Direction {
    #[default]
    NorthSouth = 0,
    EastWest = 1,
}

impl Direction {
    /// Both directions, NS first
    pub const ALL: [Direction; 2] = [Direction::NorthSouth, Direction::EastWest];

    /// Convert from index (0-1)
    pub fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Direction::NorthSouth),
            1 => Some(Direction::EastWest),
            _ => None,
        }
    }

    /// Index into an `[ns, ew]` pair
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn is_ew(self) -> bool {
        self == Direction::EastWest
    }

    /// The other side of the table
    pub fn opposite(self) -> Direction {
        match self {
            Direction::NorthSouth => Direction::EastWest,
            Direction::EastWest => Direction::NorthSouth,
        }
    }

    /// Short label (NS, EW)
    pub fn as_str(self) -> &'static str {
        match self {
            Direction::NorthSouth => "NS",
            Direction::EastWest => "EW",
        }
    }
}

impl From<bool> for Direction {
    fn from(ew: bool) -> Self {
        if ew {
            Direction::EastWest
        } else {
            Direction::NorthSouth
        }
    }
}

impl From<Direction> for bool {
    fn from(direction: Direction) -> Self {
        direction.is_ew()
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
