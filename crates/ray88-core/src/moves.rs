//! Candidate moves produced by ray walks, and the sink they are delivered to.

use std::fmt;

use crate::ordinal::Ordinal;
use crate::piece::Piece;

/// Which moves a generator wants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MovesType {
    /// Quiet moves and captures.
    All,
    /// Captures only, for quiescence-style searches.
    Captures,
}

/// The rule a move is played under. Ray walks only ever produce `Standard`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveName {
    Standard,
}

/// A pseudo-legal move found by a ray walk.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct CandidateMove {
    pub piece: Piece,
    pub from: Ordinal,
    pub to: Ordinal,
    pub captured: Option<Piece>,
    pub name: MoveName,
}

impl CandidateMove {
    #[inline]
    pub fn is_capture(&self) -> bool {
        self.captured.is_some()
    }
}

impl fmt::Debug for CandidateMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sep = if self.is_capture() { 'x' } else { '-' };
        write!(f, "{}{}{}{}", self.piece.abbreviation(), self.from, sep, self.to)
    }
}

/// Destination for generated moves, owned by the caller.
pub trait MoveSink {
    fn add(&mut self, mv: CandidateMove);
}

impl MoveSink for Vec<CandidateMove> {
    #[inline]
    fn add(&mut self, mv: CandidateMove) {
        self.push(mv);
    }
}
