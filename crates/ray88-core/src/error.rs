//! Error types for coordinate and placement parsing.

/// Errors from parsing an algebraic square label such as `"e4"`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CoordError {
    /// The label is not exactly two characters long.
    #[error("square label \"{label}\" must be exactly 2 characters")]
    WrongLength {
        /// The label as given.
        label: String,
    },
    /// The first character is not a file letter `a`-`h`.
    #[error("invalid file letter: '{character}'")]
    InvalidFile {
        /// The offending character.
        character: char,
    },
    /// The second character is not a rank digit `1`-`8`.
    #[error("invalid rank digit: '{character}'")]
    InvalidRank {
        /// The offending character.
        character: char,
    },
}

/// Errors from parsing the piece-placement field of a FEN string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PlacementError {
    /// The placement field is missing entirely.
    #[error("empty piece placement")]
    Empty,
    /// The placement does not describe exactly 8 ranks.
    #[error("expected 8 ranks in piece placement, found {found}")]
    WrongRankCount {
        /// Number of ranks found.
        found: usize,
    },
    /// A rank describes more or fewer than 8 squares.
    #[error("rank {rank_index} describes {length} squares, expected 8")]
    BadRankLength {
        /// Zero-based rank index as written (0 = rank 8, 7 = rank 1).
        rank_index: usize,
        /// Number of squares described.
        length: usize,
    },
    /// An unrecognized character appeared in the placement.
    #[error("invalid piece character: '{character}'")]
    InvalidPieceChar {
        /// The invalid character.
        character: char,
    },
}
