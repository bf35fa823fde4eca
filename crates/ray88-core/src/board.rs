//! The 0x88 square grid: 128 square records, their occupancy, the
//! position hash, and the rendering orientation.

use std::fmt;

use tracing::{debug, warn};

use crate::color::Color;
use crate::error::CoordError;
use crate::file::File;
use crate::ordinal::Ordinal;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::rank::Rank;
use crate::render::Orientation;
use crate::square::Square;
use crate::zobrist::{self, PositionHash};

/// A board: every padded slot has exactly one [`Square`], built once at
/// construction and mutated in place afterwards.
///
/// Boards are plain values. Give each search thread its own clone.
#[derive(Clone, PartialEq, Eq)]
pub struct Board {
    squares: [Square; Ordinal::SLOT_COUNT],
    orientation: Orientation,
    hash: PositionHash,
}

impl Board {
    /// An empty board viewed from White's side.
    pub fn new() -> Board {
        Board {
            squares: std::array::from_fn(|slot| Square::new(Ordinal::from_raw(slot as u8))),
            orientation: Orientation::White,
            hash: PositionHash::EMPTY,
        }
    }

    /// The standard initial placement, with hash keys established.
    pub fn starting_position() -> Board {
        const BACK_RANK: [PieceKind; 8] = [
            PieceKind::Rook,
            PieceKind::Knight,
            PieceKind::Bishop,
            PieceKind::Queen,
            PieceKind::King,
            PieceKind::Bishop,
            PieceKind::Knight,
            PieceKind::Rook,
        ];

        let mut board = Board::new();
        for (file, kind) in File::ALL.into_iter().zip(BACK_RANK) {
            board.put_piece(
                Ordinal::from_file_rank(file, Rank::Rank1),
                Piece::new(kind, Color::White),
            );
            board.put_piece(Ordinal::from_file_rank(file, Rank::Rank2), Piece::WHITE_PAWN);
            board.put_piece(Ordinal::from_file_rank(file, Rank::Rank7), Piece::BLACK_PAWN);
            board.put_piece(
                Ordinal::from_file_rank(file, Rank::Rank8),
                Piece::new(kind, Color::Black),
            );
        }
        board.establish_hash_key();
        board
    }

    /// The square at `ordinal`, or `None` off the board.
    #[inline]
    pub fn square_at(&self, ordinal: Ordinal) -> Option<&Square> {
        if ordinal.is_off_board() {
            return None;
        }
        Some(&self.squares[ordinal.index()])
    }

    /// The square at zero-based `file` and `rank`, or `None` when either is
    /// outside 0..7.
    #[inline]
    pub fn square_at_file_rank(&self, file: i32, rank: i32) -> Option<&Square> {
        self.square_at(ordinal_from_coords(file, rank)?)
    }

    /// The square named by an algebraic label such as `"e4"`.
    pub fn square_from_label(&self, label: &str) -> Result<&Square, CoordError> {
        let ordinal = Ordinal::from_label(label)?;
        Ok(&self.squares[ordinal.index()])
    }

    /// The piece at `ordinal`, if the square exists and is occupied.
    #[inline]
    pub fn piece_at(&self, ordinal: Ordinal) -> Option<Piece> {
        self.square_at(ordinal)?.piece()
    }

    /// The piece at zero-based `file` and `rank`, if any.
    #[inline]
    pub fn piece_at_file_rank(&self, file: i32, rank: i32) -> Option<Piece> {
        self.square_at_file_rank(file, rank)?.piece()
    }

    /// Stand `piece` on `ordinal`, returning whatever was displaced.
    ///
    /// Occupancy only: callers keep the hash in step with
    /// [`PositionHash::toggle`] or [`Board::establish_hash_key`].
    pub fn put_piece(&mut self, ordinal: Ordinal, piece: Piece) -> Option<Piece> {
        if ordinal.is_off_board() {
            warn!(%ordinal, ?piece, "ignoring placement on off-board ordinal");
            return None;
        }
        self.squares[ordinal.index()].set_piece(Some(piece))
    }

    /// Empty `ordinal`, returning its former occupant.
    pub fn take_piece(&mut self, ordinal: Ordinal) -> Option<Piece> {
        if ordinal.is_off_board() {
            warn!(%ordinal, "ignoring removal from off-board ordinal");
            return None;
        }
        self.squares[ordinal.index()].set_piece(None)
    }

    /// Remove every piece and reset the hash.
    pub fn clear(&mut self) {
        for square in &mut self.squares {
            square.set_piece(None);
        }
        self.hash = PositionHash::EMPTY;
    }

    /// Iterate over the 64 real squares in ordinal order.
    pub fn squares(&self) -> impl Iterator<Item = &Square> {
        self.squares.iter().filter(|sq| sq.ordinal().is_on_board())
    }

    /// Iterate over occupied squares in ordinal order.
    pub fn occupied(&self) -> impl Iterator<Item = (Ordinal, Piece)> + '_ {
        self.squares()
            .filter_map(|sq| sq.piece().map(|piece| (sq.ordinal(), piece)))
    }

    /// Rebuild all four hash accumulators from the current occupancy.
    ///
    /// Run once after setup or any bulk repositioning; incremental updates
    /// from there are the move layer's job.
    pub fn establish_hash_key(&mut self) {
        self.hash = zobrist::hash_from_scratch(self);
        debug!(
            hash_a = self.hash.hash_a,
            hash_b = self.hash.hash_b,
            pawn_hash_a = self.hash.pawn_hash_a,
            pawn_hash_b = self.hash.pawn_hash_b,
            "established position hash"
        );
    }

    #[inline]
    pub fn hash(&self) -> &PositionHash {
        &self.hash
    }

    /// Mutable access for incremental XOR maintenance.
    #[inline]
    pub fn hash_mut(&mut self) -> &mut PositionHash {
        &mut self.hash
    }

    #[inline]
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Toggle the viewing side. Affects rendering only.
    pub fn flip(&mut self) {
        self.orientation = self.orientation.flip();
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Board(\"{}\")", self.placement())
    }
}

/// Convert loose integer coordinates, rejecting anything outside 0..7.
fn ordinal_from_coords(file: i32, rank: i32) -> Option<Ordinal> {
    let file = File::from_index(u8::try_from(file).ok()?)?;
    let rank = Rank::from_index(u8::try_from(rank).ok()?)?;
    Some(Ordinal::from_file_rank(file, rank))
}
