//! Square records held by the board grid.

use std::fmt;

use crate::ordinal::Ordinal;
use crate::piece::Piece;

/// Light or dark shading of a square.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SquareColor {
    Light,
    Dark,
}

/// One addressable slot of the grid: its ordinal, its fixed shading, and
/// whatever currently stands on it.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Square {
    ordinal: Ordinal,
    color: SquareColor,
    occupant: Option<Piece>,
}

impl Square {
    /// Create an empty square. a1 is dark; shading alternates with
    /// the parity of file + rank.
    pub(crate) const fn new(ordinal: Ordinal) -> Square {
        let raw = ordinal.raw();
        let color = if ((raw & 0x0f) + (raw >> 4)) % 2 == 0 {
            SquareColor::Dark
        } else {
            SquareColor::Light
        };
        Square {
            ordinal,
            color,
            occupant: None,
        }
    }

    #[inline]
    pub const fn ordinal(&self) -> Ordinal {
        self.ordinal
    }

    #[inline]
    pub const fn color(&self) -> SquareColor {
        self.color
    }

    /// The piece standing here, if any.
    #[inline]
    pub const fn piece(&self) -> Option<Piece> {
        self.occupant
    }

    /// Replace the occupant, returning the previous one.
    #[inline]
    pub(crate) fn set_piece(&mut self, piece: Option<Piece>) -> Option<Piece> {
        std::mem::replace(&mut self.occupant, piece)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.ordinal)
    }
}

impl fmt::Debug for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.occupant {
            Some(piece) => write!(f, "Square({}, {piece:?})", self.ordinal),
            None => write!(f, "Square({}, empty)", self.ordinal),
        }
    }
}
