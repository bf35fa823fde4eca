//! Board orientation and diagnostic dumps. Nothing here affects game logic.

use std::fmt;

use crate::board::Board;
use crate::color::Color;
use crate::file::File;
use crate::ordinal::Ordinal;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::rank::Rank;
use crate::square::SquareColor;

/// Which side sits at the bottom of a rendered board.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Orientation {
    #[default]
    White,
    Black,
}

impl Orientation {
    #[inline]
    pub const fn flip(self) -> Orientation {
        match self {
            Orientation::White => Orientation::Black,
            Orientation::Black => Orientation::White,
        }
    }

    /// Ranks top to bottom as seen from this side.
    fn ranks(self) -> [Rank; 8] {
        let mut ranks = Rank::ALL;
        if self == Orientation::White {
            ranks.reverse();
        }
        ranks
    }

    /// Files left to right as seen from this side.
    fn files(self) -> [File; 8] {
        let mut files = File::ALL;
        if self == Orientation::Black {
            files.reverse();
        }
        files
    }
}

/// One played move, as the history window shows it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry {
    pub color: Color,
    pub description: String,
}

/// Game state read by [`PrettyBoard`]. The board never owns any of it.
#[derive(Debug, Clone, Copy)]
pub struct GameInfo<'a> {
    pub to_play: Color,
    pub turn_number: u32,
    /// Black pieces White has taken, with the square they fell on.
    pub captured_by_white: &'a [(Piece, Ordinal)],
    /// White pieces Black has taken.
    pub captured_by_black: &'a [(Piece, Ordinal)],
    pub history: &'a [HistoryEntry],
    /// How many trailing history entries to show.
    pub window: usize,
}

impl Default for GameInfo<'_> {
    fn default() -> Self {
        GameInfo {
            to_play: Color::White,
            turn_number: 0,
            captured_by_white: &[],
            captured_by_black: &[],
            history: &[],
            window: 8,
        }
    }
}

impl Board {
    /// One line per rank: pieces as FEN letters, empty squares as `.`
    /// (light) or `#` (dark).
    pub fn compact(&self) -> CompactBoard<'_> {
        CompactBoard(self)
    }

    /// Labelled grid with a sidebar of captures and recent moves.
    pub fn pretty<'a>(&'a self, info: &'a GameInfo<'a>) -> PrettyBoard<'a> {
        PrettyBoard { board: self, info }
    }
}

/// See [`Board::compact`].
pub struct CompactBoard<'a>(&'a Board);

impl fmt::Display for CompactBoard<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let board = self.0;
        let orientation = board.orientation();
        for rank in orientation.ranks() {
            for file in orientation.files() {
                let Some(square) = board.square_at(Ordinal::from_file_rank(file, rank)) else {
                    continue;
                };
                let c = match (square.piece(), square.color()) {
                    (Some(piece), _) => piece.fen_char(),
                    (None, SquareColor::Light) => '.',
                    (None, SquareColor::Dark) => '#',
                };
                write!(f, "{c}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// See [`Board::pretty`].
pub struct PrettyBoard<'a> {
    board: &'a Board,
    info: &'a GameInfo<'a>,
}

impl PrettyBoard<'_> {
    fn sidebar(&self, f: &mut fmt::Formatter<'_>, rank: Rank) -> fmt::Result {
        write!(f, ":{}", rank.index())?;
        let captured = match rank {
            Rank::Rank8 => Some(self.info.captured_by_white),
            Rank::Rank1 => Some(self.info.captured_by_black),
            _ => None,
        };

        if let Some(captured) = captured {
            let shown: Vec<_> = captured
                .iter()
                .filter(|(piece, _)| piece.kind() != PieceKind::Pawn)
                .collect();
            if !shown.is_empty() {
                write!(f, " x")?;
                for (piece, ordinal) in shown {
                    write!(f, " {}{ordinal}", piece.abbreviation())?;
                }
            }
        } else if rank == Rank::Rank6 {
            let history = self.info.history;
            let start = history.len().saturating_sub(self.info.window);
            for (index, entry) in history.iter().enumerate().skip(start) {
                if entry.color == Color::White {
                    write!(f, " {}.", index / 2 + 1)?;
                }
                write!(f, " {}", entry.description)?;
            }
        }
        Ok(())
    }
}

impl fmt::Display for PrettyBoard<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let board = self.board;
        let orientation = board.orientation();
        let files = orientation.files();

        write!(f, " ")?;
        for file in files {
            write!(f, " {}", file.index())?;
        }
        writeln!(f, " :to play = {}", self.info.to_play)?;

        for rank in orientation.ranks() {
            write!(f, "{rank}:")?;
            for file in files {
                match board.piece_at(Ordinal::from_file_rank(file, rank)) {
                    Some(piece) => write!(f, "{piece} ")?,
                    None => write!(f, ". ")?,
                }
            }
            self.sidebar(f, rank)?;
            writeln!(f)?;
        }

        write!(f, " ")?;
        for file in files {
            write!(f, " {file}")?;
        }
        write!(f, " :turn = {}", self.info.turn_number)
    }
}
