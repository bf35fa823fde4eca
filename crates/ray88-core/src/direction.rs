//! Step offsets in 0x88 ordinal space.

use std::fmt;

/// A signed ordinal delta applied once per ray step.
///
/// One rank is 16 ordinals apart, one file is 1 apart, so every
/// (file, rank) displacement maps to a unique offset.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Direction(i8);

impl Direction {
    pub const NORTH: Direction = Direction(16);
    pub const SOUTH: Direction = Direction(-16);
    pub const EAST: Direction = Direction(1);
    pub const WEST: Direction = Direction(-1);
    pub const NORTH_EAST: Direction = Direction(17);
    pub const NORTH_WEST: Direction = Direction(15);
    pub const SOUTH_EAST: Direction = Direction(-15);
    pub const SOUTH_WEST: Direction = Direction(-17);

    /// Rook lines.
    pub const ORTHOGONAL: [Direction; 4] = [Self::NORTH, Self::EAST, Self::SOUTH, Self::WEST];

    /// Bishop lines.
    pub const DIAGONAL: [Direction; 4] = [
        Self::NORTH_EAST,
        Self::SOUTH_EAST,
        Self::SOUTH_WEST,
        Self::NORTH_WEST,
    ];

    /// Queen and king lines.
    pub const ALL: [Direction; 8] = [
        Self::NORTH,
        Self::NORTH_EAST,
        Self::EAST,
        Self::SOUTH_EAST,
        Self::SOUTH,
        Self::SOUTH_WEST,
        Self::WEST,
        Self::NORTH_WEST,
    ];

    /// Wrap an arbitrary offset. Zero is rejected: a ray that never moves
    /// never leaves the board.
    #[inline]
    pub const fn new(offset: i8) -> Option<Direction> {
        if offset == 0 {
            return None;
        }
        Some(Direction(offset))
    }

    /// The signed offset.
    #[inline]
    pub const fn offset(self) -> i8 {
        self.0
    }
}

impl fmt::Debug for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Direction({:+})", self.0)
    }
}
