//! 0x88 board representation: coordinates, the square grid, ray walks,
//! and dual Zobrist position keys.

mod board;
mod color;
mod direction;
mod error;
mod file;
mod moves;
mod ordinal;
mod piece;
mod piece_kind;
mod placement;
mod rank;
mod ray;
mod render;
mod square;
pub mod zobrist;

pub use board::Board;
pub use color::Color;
pub use direction::Direction;
pub use error::{CoordError, PlacementError};
pub use file::File;
pub use moves::{CandidateMove, MoveName, MoveSink, MovesType};
pub use ordinal::{OFF_BOARD_MASK, Ordinal};
pub use piece::Piece;
pub use piece_kind::PieceKind;
pub use placement::STARTING_PLACEMENT;
pub use rank::Rank;
pub use ray::{OPEN_LINE_DEPTH, OPEN_LINE_PENALTY, Ray};
pub use render::{CompactBoard, GameInfo, HistoryEntry, Orientation, PrettyBoard};
pub use square::{Square, SquareColor};
pub use zobrist::{HashPair, PositionHash};
