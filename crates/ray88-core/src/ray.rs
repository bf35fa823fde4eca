//! Directional ray walks over the grid.
//!
//! Every walk steps from a start square by a fixed offset, one square at a
//! time, and ends at the first off-board ordinal. The policies below differ
//! only in what they record and where they stop.

use std::iter::FusedIterator;

use tracing::trace;

use crate::board::Board;
use crate::color::Color;
use crate::direction::Direction;
use crate::moves::{CandidateMove, MoveName, MoveSink, MovesType};
use crate::ordinal::Ordinal;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;

/// Penalty per unblocked step in [`Board::line_is_open`].
pub const OPEN_LINE_PENALTY: i32 = 75;

/// Steps probed by [`Board::line_is_open`].
pub const OPEN_LINE_DEPTH: usize = 2;

/// Squares along a line, nearest first, with their occupants.
///
/// The start square itself is not yielded.
#[derive(Debug, Clone)]
pub struct Ray<'a> {
    board: &'a Board,
    current: Ordinal,
    direction: Direction,
}

impl Iterator for Ray<'_> {
    type Item = (Ordinal, Option<Piece>);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.current.is_off_board() {
            return None;
        }
        self.current = self.current.step(self.direction);
        let square = self.board.square_at(self.current)?;
        Some((self.current, square.piece()))
    }
}

impl FusedIterator for Ray<'_> {}

impl Board {
    /// Walk from `start` along `direction`. An off-board start yields nothing.
    #[inline]
    pub fn ray(&self, start: Ordinal, direction: Direction) -> Ray<'_> {
        Ray {
            board: self,
            current: start,
            direction,
        }
    }

    /// Append the slide of the piece on `from` along `direction` to `moves`.
    ///
    /// Empty squares become quiet moves when `moves_type` is
    /// [`MovesType::All`]. The first occupied square ends the walk; it is
    /// recorded as a capture only when it holds a capturable piece not
    /// belonging to `mover`.
    pub fn append_piece_path<S: MoveSink + ?Sized>(
        &self,
        moves: &mut S,
        from: Ordinal,
        mover: Color,
        direction: Direction,
        moves_type: MovesType,
    ) {
        let Some(piece) = self.piece_at(from) else {
            trace!(%from, "no piece to slide");
            return;
        };

        for (to, occupant) in self.ray(from, direction) {
            match occupant {
                None => {
                    if moves_type == MovesType::All {
                        moves.add(CandidateMove {
                            piece,
                            from,
                            to,
                            captured: None,
                            name: MoveName::Standard,
                        });
                    }
                }
                Some(target) => {
                    if target.color() != mover && target.is_capturable() {
                        moves.add(CandidateMove {
                            piece,
                            from,
                            to,
                            captured: Some(target),
                            name: MoveName::Standard,
                        });
                    }
                    break;
                }
            }
        }
    }

    /// Shallow open-line probe for evaluation.
    ///
    /// Looks at most [`OPEN_LINE_DEPTH`] squares along `direction` and
    /// charges [`OPEN_LINE_PENALTY`] for each one not holding a pawn or rook
    /// of `color`. The first such pawn or rook ends the probe, as does the
    /// board edge. Enemy pieces do not block.
    pub fn line_is_open(&self, color: Color, start: Ordinal, direction: Direction) -> i32 {
        let penalised = self
            .ray(start, direction)
            .take(OPEN_LINE_DEPTH)
            .take_while(|&(_, occupant)| !occupant.is_some_and(|piece| blocks_open_line(piece, color)))
            .count();
        penalised as i32 * OPEN_LINE_PENALTY
    }

    /// Push every square along `direction` that a slider of `mover` on
    /// `start` attacks: all empty squares, plus the first occupied square
    /// when it holds a capturable enemy.
    pub fn line_threatened_by(
        &self,
        mover: Color,
        squares: &mut Vec<Ordinal>,
        start: Ordinal,
        direction: Direction,
    ) {
        for (ordinal, occupant) in self.ray(start, direction) {
            match occupant {
                None => squares.push(ordinal),
                Some(piece) => {
                    if piece.color() != mover && piece.is_capturable() {
                        squares.push(ordinal);
                    }
                    break;
                }
            }
        }
    }

    /// The first piece along `direction`, if it belongs to `color` and is
    /// either `kind` or a queen.
    ///
    /// A queen moves like both a rook and a bishop, so it always matches;
    /// batteries and pins through a queen are found this way. An enemy piece
    /// or any other friendly kind in front yields `None`.
    pub fn lines_first_piece(
        &self,
        color: Color,
        kind: PieceKind,
        start: Ordinal,
        direction: Direction,
    ) -> Option<Piece> {
        let piece = self.ray(start, direction).find_map(|(_, occupant)| occupant)?;

        if piece.color() != color {
            return None;
        }
        if piece.kind() == kind || piece.kind() == PieceKind::Queen {
            return Some(piece);
        }
        None
    }
}

#[inline]
fn blocks_open_line(piece: Piece, color: Color) -> bool {
    piece.color() == color && matches!(piece.kind(), PieceKind::Pawn | PieceKind::Rook)
}

#[cfg(test)]
mod tests {
    use super::{OPEN_LINE_PENALTY, Ray};
    use crate::board::Board;
    use crate::color::Color;
    use crate::direction::Direction;
    use crate::moves::{CandidateMove, MovesType};
    use crate::ordinal::Ordinal;
    use crate::piece::Piece;
    use crate::piece_kind::PieceKind;

    fn sq(label: &str) -> Ordinal {
        Ordinal::from_label(label).unwrap()
    }

    fn targets(moves: &[CandidateMove]) -> Vec<String> {
        moves.iter().map(|mv| mv.to.to_string()).collect()
    }

    #[test]
    fn ray_stops_at_the_edge() {
        let board = Board::new();
        let ray: Vec<Ordinal> = board.ray(sq("e4"), Direction::NORTH).map(|(o, _)| o).collect();
        assert_eq!(ray, vec![sq("e5"), sq("e6"), sq("e7"), sq("e8")]);

        let ray: Vec<Ordinal> = board.ray(sq("c1"), Direction::SOUTH_WEST).map(|(o, _)| o).collect();
        assert!(ray.is_empty());
    }

    #[test]
    fn ray_from_off_board_is_empty() {
        let board = Board::new();
        let mut ray: Ray<'_> = board.ray(Ordinal::from_raw(0x08), Direction::WEST);
        assert_eq!(ray.next(), None);
        assert_eq!(ray.next(), None);
    }

    #[test]
    fn every_constructible_offset_leaves_the_board() {
        let board = Board::new();
        assert!(Direction::new(0).is_none());
        for offset in i8::MIN..=i8::MAX {
            let Some(direction) = Direction::new(offset) else {
                continue;
            };
            for start in Ordinal::all() {
                let steps = board.ray(start, direction).take(64).count();
                assert!(steps <= 7, "{start} {direction:?} walked {steps} steps");
            }
        }
    }

    #[test]
    fn empty_start_walks_stay_bounded() {
        let board = Board::new();
        let mut squares = Vec::new();
        for direction in Direction::ALL {
            board.line_threatened_by(Color::White, &mut squares, sq("d4"), direction);
            assert_eq!(
                board.lines_first_piece(Color::White, PieceKind::Rook, sq("d4"), direction),
                None
            );
        }
        // 3 + 3 + 4 + 3 + 3 + 3 + 3 + 4 squares around d4 on an empty board.
        assert_eq!(squares.len(), 27);
    }

    #[test]
    fn ray_reports_occupants() {
        let board = Board::starting_position();
        let first: Vec<_> = board.ray(sq("a1"), Direction::NORTH).take(2).collect();
        assert_eq!(first, vec![(sq("a2"), Some(Piece::WHITE_PAWN)), (sq("a3"), None)]);
    }

    #[test]
    fn path_on_empty_file_runs_to_the_edge() {
        let mut board = Board::new();
        board.put_piece(sq("e4"), Piece::WHITE_ROOK);
        let mut moves: Vec<CandidateMove> = Vec::new();
        board.append_piece_path(&mut moves, sq("e4"), Color::White, Direction::NORTH, MovesType::All);
        assert_eq!(targets(&moves), ["e5", "e6", "e7", "e8"]);
        assert!(moves.iter().all(|mv| mv.captured.is_none() && mv.piece == Piece::WHITE_ROOK));
    }

    #[test]
    fn path_ends_with_capture() {
        let mut board = Board::new();
        board.put_piece(sq("e4"), Piece::WHITE_ROOK);
        board.put_piece(sq("e6"), Piece::BLACK_KNIGHT);
        let mut moves: Vec<CandidateMove> = Vec::new();
        board.append_piece_path(&mut moves, sq("e4"), Color::White, Direction::NORTH, MovesType::All);
        assert_eq!(targets(&moves), ["e5", "e6"]);
        assert_eq!(moves[0].captured, None);
        assert_eq!(moves[1].captured, Some(Piece::BLACK_KNIGHT));
    }

    #[test]
    fn path_stops_before_friendly_piece_and_enemy_king() {
        let mut board = Board::new();
        board.put_piece(sq("d4"), Piece::BLACK_BISHOP);
        board.put_piece(sq("f6"), Piece::BLACK_PAWN);
        board.put_piece(sq("b2"), Piece::WHITE_KING);
        let mut moves: Vec<CandidateMove> = Vec::new();
        board.append_piece_path(&mut moves, sq("d4"), Color::Black, Direction::NORTH_EAST, MovesType::All);
        board.append_piece_path(&mut moves, sq("d4"), Color::Black, Direction::SOUTH_WEST, MovesType::All);
        assert_eq!(targets(&moves), ["e5", "c3"]);
    }

    #[test]
    fn captures_mode_skips_quiet_moves() {
        let mut board = Board::new();
        board.put_piece(sq("a1"), Piece::WHITE_QUEEN);
        board.put_piece(sq("a7"), Piece::BLACK_ROOK);
        let mut moves: Vec<CandidateMove> = Vec::new();
        board.append_piece_path(&mut moves, sq("a1"), Color::White, Direction::NORTH, MovesType::Captures);
        board.append_piece_path(&mut moves, sq("a1"), Color::White, Direction::EAST, MovesType::Captures);
        assert_eq!(targets(&moves), ["a7"]);
    }

    #[test]
    fn path_from_empty_square_records_nothing() {
        let board = Board::new();
        let mut moves: Vec<CandidateMove> = Vec::new();
        board.append_piece_path(&mut moves, sq("e4"), Color::White, Direction::NORTH, MovesType::All);
        assert!(moves.is_empty());
    }

    #[test]
    fn line_is_open_penalties() {
        let mut board = Board::new();
        board.put_piece(sq("a1"), Piece::WHITE_ROOK);
        assert_eq!(board.line_is_open(Color::White, sq("a1"), Direction::NORTH), 2 * OPEN_LINE_PENALTY);

        board.put_piece(sq("a3"), Piece::WHITE_PAWN);
        assert_eq!(board.line_is_open(Color::White, sq("a1"), Direction::NORTH), OPEN_LINE_PENALTY);

        board.put_piece(sq("a2"), Piece::WHITE_ROOK);
        assert_eq!(board.line_is_open(Color::White, sq("a1"), Direction::NORTH), 0);
    }

    #[test]
    fn line_is_open_ignores_other_blockers() {
        let mut board = Board::new();
        board.put_piece(sq("a2"), Piece::BLACK_PAWN);
        board.put_piece(sq("a3"), Piece::WHITE_KNIGHT);
        assert_eq!(board.line_is_open(Color::White, sq("a1"), Direction::NORTH), 150);
        assert_eq!(board.line_is_open(Color::Black, sq("a1"), Direction::NORTH), 0);
    }

    #[test]
    fn line_is_open_at_the_edge() {
        let board = Board::new();
        assert_eq!(board.line_is_open(Color::White, sq("a8"), Direction::NORTH), 0);
        assert_eq!(board.line_is_open(Color::White, sq("a7"), Direction::NORTH), OPEN_LINE_PENALTY);
    }

    #[test]
    fn threatened_squares() {
        let mut board = Board::new();
        board.put_piece(sq("c1"), Piece::WHITE_BISHOP);
        board.put_piece(sq("f4"), Piece::BLACK_PAWN);
        board.put_piece(sq("a3"), Piece::WHITE_PAWN);
        let mut squares = Vec::new();
        board.line_threatened_by(Color::White, &mut squares, sq("c1"), Direction::NORTH_EAST);
        board.line_threatened_by(Color::White, &mut squares, sq("c1"), Direction::NORTH_WEST);
        assert_eq!(squares, vec![sq("d2"), sq("e3"), sq("f4"), sq("b2")]);
    }

    #[test]
    fn enemy_king_is_not_threatened_square() {
        let mut board = Board::new();
        board.put_piece(sq("h1"), Piece::WHITE_ROOK);
        board.put_piece(sq("h3"), Piece::BLACK_KING);
        let mut squares = Vec::new();
        board.line_threatened_by(Color::White, &mut squares, sq("h1"), Direction::NORTH);
        assert_eq!(squares, vec![sq("h2")]);
    }

    #[test]
    fn first_piece_with_queen_wildcard() {
        let mut board = Board::new();
        board.put_piece(sq("e1"), Piece::WHITE_KING);
        board.put_piece(sq("c1"), Piece::WHITE_QUEEN);
        assert_eq!(
            board.lines_first_piece(Color::White, PieceKind::Rook, sq("e1"), Direction::WEST),
            Some(Piece::WHITE_QUEEN)
        );
        assert_eq!(
            board.lines_first_piece(Color::White, PieceKind::Bishop, sq("e1"), Direction::WEST),
            Some(Piece::WHITE_QUEEN)
        );

        board.put_piece(sq("c1"), Piece::WHITE_BISHOP);
        assert_eq!(
            board.lines_first_piece(Color::White, PieceKind::Rook, sq("e1"), Direction::WEST),
            None
        );
    }

    #[test]
    fn first_piece_enemy_or_nothing() {
        let mut board = Board::new();
        board.put_piece(sq("h8"), Piece::BLACK_ROOK);
        assert_eq!(
            board.lines_first_piece(Color::White, PieceKind::Rook, sq("h1"), Direction::NORTH),
            None
        );
        assert_eq!(
            board.lines_first_piece(Color::Black, PieceKind::Rook, sq("h1"), Direction::NORTH),
            Some(Piece::BLACK_ROOK)
        );
        assert_eq!(
            board.lines_first_piece(Color::Black, PieceKind::Rook, sq("h1"), Direction::WEST),
            None
        );
    }
}
