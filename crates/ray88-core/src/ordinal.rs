//! Padded 0x88 square addressing.
//!
//! An ordinal packs the rank into the high nibble and the file into the low
//! nibble: `(rank << 4) | file`. Bit 3 of each nibble is never set for a real
//! square, so one `& 0x88` test catches every coordinate that has left the
//! 0..7 range, in either direction, after any single step.

use std::fmt;

use crate::direction::Direction;
use crate::error::CoordError;
use crate::file::File;
use crate::rank::Rank;

/// Bits that are set in an ordinal exactly when it lies off the board.
pub const OFF_BOARD_MASK: u8 = 0x88;

/// A square address in padded 0x88 space. May be off the board.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Ordinal(u8);

impl Ordinal {
    /// Number of addressable slots, padding included.
    pub const SLOT_COUNT: usize = 128;

    /// Build the ordinal of a real square.
    #[inline]
    pub const fn from_file_rank(file: File, rank: Rank) -> Ordinal {
        Ordinal((rank as u8) << 4 | file as u8)
    }

    /// Wrap a raw byte without any check.
    #[inline]
    pub const fn from_raw(raw: u8) -> Ordinal {
        Ordinal(raw)
    }

    /// Parse a two-character algebraic label such as `"e4"`.
    pub fn from_label(label: &str) -> Result<Ordinal, CoordError> {
        let mut chars = label.chars();
        let (Some(file_char), Some(rank_char), None) = (chars.next(), chars.next(), chars.next())
        else {
            return Err(CoordError::WrongLength {
                label: label.to_string(),
            });
        };

        let file = File::from_name(file_char).ok_or(CoordError::InvalidFile {
            character: file_char,
        })?;
        let rank = Rank::from_digit(rank_char).ok_or(CoordError::InvalidRank {
            character: rank_char,
        })?;
        Ok(Ordinal::from_file_rank(file, rank))
    }

    #[inline]
    pub const fn raw(self) -> u8 {
        self.0
    }

    /// Slot index into a 128-entry grid. Only meaningful on the board.
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    #[inline]
    pub const fn is_on_board(self) -> bool {
        self.0 & OFF_BOARD_MASK == 0
    }

    #[inline]
    pub const fn is_off_board(self) -> bool {
        !self.is_on_board()
    }

    /// Split back into file and rank, or `None` off the board.
    #[inline]
    pub const fn file_rank(self) -> Option<(File, Rank)> {
        if self.is_off_board() {
            return None;
        }
        match (File::from_index(self.0 & 0x0f), Rank::from_index(self.0 >> 4)) {
            (Some(file), Some(rank)) => Some((file, rank)),
            _ => None,
        }
    }

    /// Advance one step along `direction`. The result may be off the board.
    #[inline]
    pub const fn step(self, direction: Direction) -> Ordinal {
        Ordinal(self.0.wrapping_add(direction.offset() as u8))
    }

    /// Iterate over the 64 real squares in ordinal order (a1, b1, ..., h8).
    pub fn all() -> impl Iterator<Item = Ordinal> {
        (0u8..Self::SLOT_COUNT as u8)
            .map(Ordinal)
            .filter(|o| o.is_on_board())
    }

    pub const A1: Ordinal = Ordinal(0x00);
    pub const H1: Ordinal = Ordinal(0x07);
    pub const E4: Ordinal = Ordinal(0x34);
    pub const A8: Ordinal = Ordinal(0x70);
    pub const H8: Ordinal = Ordinal(0x77);
}

impl fmt::Display for Ordinal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.file_rank() {
            Some((file, rank)) => write!(f, "{file}{rank}"),
            None => write!(f, "{:#04x}", self.0),
        }
    }
}

impl fmt::Debug for Ordinal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Ordinal({self})")
    }
}

#[cfg(test)]
mod tests {
    use super::{OFF_BOARD_MASK, Ordinal};
    use crate::direction::Direction;
    use crate::error::CoordError;
    use crate::file::File;
    use crate::rank::Rank;

    #[test]
    fn packing_matches_nibbles() {
        assert_eq!(Ordinal::from_file_rank(File::FileA, Rank::Rank1).raw(), 0x00);
        assert_eq!(Ordinal::from_file_rank(File::FileE, Rank::Rank4).raw(), 0x34);
        assert_eq!(Ordinal::from_file_rank(File::FileH, Rank::Rank8).raw(), 0x77);
    }

    #[test]
    fn mask_agrees_with_nibble_ranges() {
        for raw in 0u8..=255 {
            let in_range = (raw & 0x0f) < 8 && (raw >> 4) < 8;
            assert_eq!(Ordinal::from_raw(raw).is_on_board(), in_range, "raw {raw:#04x}");
        }
        assert_eq!(OFF_BOARD_MASK, 0x88);
        assert!(Ordinal::from_raw(0x77).is_on_board());
        assert!(Ordinal::from_raw(0x08).is_off_board());
        assert!(Ordinal::from_raw(0x80).is_off_board());
    }

    #[test]
    fn file_rank_roundtrip() {
        for file in File::ALL {
            for rank in Rank::ALL {
                let ordinal = Ordinal::from_file_rank(file, rank);
                assert_eq!(ordinal.file_rank(), Some((file, rank)));
            }
        }
        assert_eq!(Ordinal::from_raw(0x08).file_rank(), None);
    }

    #[test]
    fn all_yields_64_real_squares() {
        let all: Vec<Ordinal> = Ordinal::all().collect();
        assert_eq!(all.len(), 64);
        assert_eq!(all[0], Ordinal::A1);
        assert_eq!(all[63], Ordinal::H8);
    }

    #[test]
    fn stepping_off_each_edge_is_detected() {
        assert!(Ordinal::H1.step(Direction::EAST).is_off_board());
        assert!(Ordinal::A1.step(Direction::WEST).is_off_board());
        assert!(Ordinal::A1.step(Direction::SOUTH).is_off_board());
        assert!(Ordinal::A1.step(Direction::SOUTH_WEST).is_off_board());
        assert!(Ordinal::H8.step(Direction::NORTH).is_off_board());
        assert!(Ordinal::H8.step(Direction::NORTH_EAST).is_off_board());
        assert!(Ordinal::A8.step(Direction::NORTH_WEST).is_off_board());
        assert!(Ordinal::H1.step(Direction::SOUTH_EAST).is_off_board());
    }

    #[test]
    fn every_step_lands_where_coordinates_say() {
        let deltas: [(Direction, i8, i8); 8] = [
            (Direction::NORTH, 0, 1),
            (Direction::NORTH_EAST, 1, 1),
            (Direction::EAST, 1, 0),
            (Direction::SOUTH_EAST, 1, -1),
            (Direction::SOUTH, 0, -1),
            (Direction::SOUTH_WEST, -1, -1),
            (Direction::WEST, -1, 0),
            (Direction::NORTH_WEST, -1, 1),
        ];
        for from in Ordinal::all() {
            let (file, rank) = from.file_rank().unwrap();
            for (dir, df, dr) in deltas {
                let f = file.index() as i8 + df;
                let r = rank.index() as i8 + dr;
                let to = from.step(dir);
                if (0..8).contains(&f) && (0..8).contains(&r) {
                    let expected = Ordinal::from_file_rank(
                        File::from_index(f as u8).unwrap(),
                        Rank::from_index(r as u8).unwrap(),
                    );
                    assert_eq!(to, expected, "{from} {dir:?}");
                } else {
                    assert!(to.is_off_board(), "{from} {dir:?} landed on {to}");
                }
            }
        }
    }

    #[test]
    fn label_parsing() {
        assert_eq!(Ordinal::from_label("a1"), Ok(Ordinal::A1));
        assert_eq!(Ordinal::from_label("e4"), Ok(Ordinal::E4));
        assert_eq!(Ordinal::from_label("h8"), Ok(Ordinal::H8));
    }

    #[test]
    fn label_parsing_rejects_malformed_input() {
        assert!(matches!(Ordinal::from_label(""), Err(CoordError::WrongLength { .. })));
        assert!(matches!(Ordinal::from_label("e"), Err(CoordError::WrongLength { .. })));
        assert!(matches!(Ordinal::from_label("e10"), Err(CoordError::WrongLength { .. })));
        assert_eq!(
            Ordinal::from_label("i4"),
            Err(CoordError::InvalidFile { character: 'i' })
        );
        assert_eq!(
            Ordinal::from_label("ex"),
            Err(CoordError::InvalidRank { character: 'x' })
        );
        assert_eq!(
            Ordinal::from_label("e9"),
            Err(CoordError::InvalidRank { character: '9' })
        );
        assert_eq!(
            Ordinal::from_label("e0"),
            Err(CoordError::InvalidRank { character: '0' })
        );
    }

    #[test]
    fn display_and_debug() {
        assert_eq!(format!("{}", Ordinal::E4), "e4");
        assert_eq!(format!("{}", Ordinal::from_raw(0x08)), "0x08");
        assert_eq!(format!("{:?}", Ordinal::A8), "Ordinal(a8)");
    }
}
