//! Dual Zobrist keys for transposition and pawn-structure caches.
//!
//! Two independent tables feed two 64-bit accumulators, giving a 128-bit
//! position identity. Every accumulator is a plain XOR fold of
//! [`contribution`], so moving a piece is two toggles: out of the old square,
//! into the new one.

use crate::board::Board;
use crate::ordinal::Ordinal;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;

/// Seed for the A table ("ZOBRIST!").
pub const SEED_A: u64 = 0x5a4f_4252_4953_5421;

/// Seed for the B table ("RAY88KEY").
pub const SEED_B: u64 = 0x5241_5938_384b_4559;

/// Keys indexed by `[Piece::index()][Ordinal::index()]`. Padding slots get
/// keys too; they are never occupied, so they never contribute.
static TABLE_A: [[u64; Ordinal::SLOT_COUNT]; Piece::COUNT] = generate(SEED_A);
static TABLE_B: [[u64; Ordinal::SLOT_COUNT]; Piece::COUNT] = generate(SEED_B);

const fn generate(seed: u64) -> [[u64; Ordinal::SLOT_COUNT]; Piece::COUNT] {
    let mut table = [[0u64; Ordinal::SLOT_COUNT]; Piece::COUNT];
    let mut state = seed;
    let mut piece = 0;
    while piece < Piece::COUNT {
        let mut slot = 0;
        while slot < Ordinal::SLOT_COUNT {
            let (val, next) = xorshift64(state);
            table[piece][slot] = val;
            state = next;
            slot += 1;
        }
        piece += 1;
    }
    table
}

/// Xorshift64 PRNG. Returns (value, next_state).
const fn xorshift64(mut state: u64) -> (u64, u64) {
    state ^= state << 13;
    state ^= state >> 7;
    state ^= state << 17;
    (state, state)
}

/// The pair of keys one piece contributes from one square.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HashPair {
    pub a: u64,
    pub b: u64,
}

/// Keys for `piece` standing on `ordinal`.
///
/// Both the full rescan and incremental updates go through here.
#[inline]
pub fn contribution(piece: Piece, ordinal: Ordinal) -> HashPair {
    debug_assert!(ordinal.is_on_board(), "hash contribution for off-board {ordinal}");
    let slot = ordinal.index() & (Ordinal::SLOT_COUNT - 1);
    HashPair {
        a: TABLE_A[piece.index()][slot],
        b: TABLE_B[piece.index()][slot],
    }
}

/// The four accumulators identifying a position.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct PositionHash {
    pub hash_a: u64,
    pub hash_b: u64,
    pub pawn_hash_a: u64,
    pub pawn_hash_b: u64,
}

impl PositionHash {
    /// All accumulators zero: the hash of an empty board.
    pub const EMPTY: PositionHash = PositionHash {
        hash_a: 0,
        hash_b: 0,
        pawn_hash_a: 0,
        pawn_hash_b: 0,
    };

    /// Fold every `(ordinal, piece)` pair in, in whatever order they come.
    pub fn from_occupancy<I>(occupancy: I) -> PositionHash
    where
        I: IntoIterator<Item = (Ordinal, Piece)>,
    {
        let mut hash = PositionHash::EMPTY;
        for (ordinal, piece) in occupancy {
            hash.toggle(piece, ordinal);
        }
        hash
    }

    /// XOR `piece` on `ordinal` in or out. Pawns also hit the pawn keys.
    #[inline]
    pub fn toggle(&mut self, piece: Piece, ordinal: Ordinal) {
        let keys = contribution(piece, ordinal);
        self.hash_a ^= keys.a;
        self.hash_b ^= keys.b;
        if piece.kind() == PieceKind::Pawn {
            self.pawn_hash_a ^= keys.a;
            self.pawn_hash_b ^= keys.b;
        }
    }

    /// Combined 128-bit key.
    #[inline]
    pub fn key(&self) -> u128 {
        (self.hash_a as u128) << 64 | self.hash_b as u128
    }

    /// Combined 128-bit pawn-structure key.
    #[inline]
    pub fn pawn_key(&self) -> u128 {
        (self.pawn_hash_a as u128) << 64 | self.pawn_hash_b as u128
    }
}

/// Recompute every accumulator from the board's occupancy.
pub(crate) fn hash_from_scratch(board: &Board) -> PositionHash {
    PositionHash::from_occupancy(board.occupied())
}
