//! FEN piece-placement parsing and serialization for [`Board`].

use std::str::FromStr;

use tracing::debug;

use crate::board::Board;
use crate::error::PlacementError;
use crate::file::File;
use crate::ordinal::Ordinal;
use crate::piece::Piece;
use crate::rank::Rank;

/// Placement field of the standard starting position.
pub const STARTING_PLACEMENT: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR";

impl Board {
    /// Load the piece-placement field of a FEN string.
    ///
    /// Only the first whitespace-separated field is read, so a full FEN is
    /// accepted too. Hash keys are established on success.
    pub fn from_placement(fen: &str) -> Result<Board, PlacementError> {
        let field = fen.split_whitespace().next().ok_or(PlacementError::Empty)?;

        let ranks: Vec<&str> = field.split('/').collect();
        if ranks.len() != Rank::COUNT {
            return Err(PlacementError::WrongRankCount { found: ranks.len() });
        }

        let mut board = Board::new();
        for (rank_index, (rank_str, rank)) in ranks.iter().zip(Rank::ALL.into_iter().rev()).enumerate() {
            let mut file_index: u8 = 0;

            for c in rank_str.chars() {
                if let Some(digit) = c.to_digit(10) {
                    if !(1..=8).contains(&digit) {
                        return Err(PlacementError::InvalidPieceChar { character: c });
                    }
                    file_index += digit as u8;
                    if file_index as usize > File::COUNT {
                        return Err(PlacementError::BadRankLength {
                            rank_index,
                            length: file_index as usize,
                        });
                    }
                    continue;
                }

                let piece =
                    Piece::from_fen_char(c).ok_or(PlacementError::InvalidPieceChar { character: c })?;
                let file = File::from_index(file_index).ok_or(PlacementError::BadRankLength {
                    rank_index,
                    length: file_index as usize + 1,
                })?;
                board.put_piece(Ordinal::from_file_rank(file, rank), piece);
                file_index += 1;
            }

            if file_index as usize != File::COUNT {
                return Err(PlacementError::BadRankLength {
                    rank_index,
                    length: file_index as usize,
                });
            }
        }

        board.establish_hash_key();
        debug!(placement = field, pieces = board.occupied().count(), "loaded placement");
        Ok(board)
    }

    /// Serialize the occupancy as a FEN placement field.
    pub fn placement(&self) -> String {
        let mut out = String::with_capacity(72);
        for rank in Rank::ALL.into_iter().rev() {
            let mut empty = 0;
            for file in File::ALL {
                match self.piece_at(Ordinal::from_file_rank(file, rank)) {
                    Some(piece) => {
                        if empty > 0 {
                            out.push(char::from(b'0' + empty));
                            empty = 0;
                        }
                        out.push(piece.fen_char());
                    }
                    None => empty += 1,
                }
            }
            if empty > 0 {
                out.push(char::from(b'0' + empty));
            }
            if rank != Rank::Rank1 {
                out.push('/');
            }
        }
        out
    }
}

impl FromStr for Board {
    type Err = PlacementError;

    fn from_str(s: &str) -> Result<Board, PlacementError> {
        Board::from_placement(s)
    }
}
