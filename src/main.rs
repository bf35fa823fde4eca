use anyhow::{Context, Result};
use ray88_core::{Board, CandidateMove, Direction, GameInfo, MovesType, PieceKind, STARTING_PLACEMENT};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let mut placement = STARTING_PLACEMENT.to_string();
    let mut flip = false;
    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--flip" => flip = true,
            _ => placement = arg,
        }
    }

    let mut board = Board::from_placement(&placement)
        .with_context(|| format!("failed to load placement \"{placement}\""))?;
    if flip {
        board.flip();
    }

    let hash = board.hash();
    info!(
        hash = %format!("{:032x}", hash.key()),
        pawn_hash = %format!("{:032x}", hash.pawn_key()),
        "ray88 ready"
    );

    let mut moves: Vec<CandidateMove> = Vec::new();
    for (from, piece) in board.occupied() {
        let directions: &[Direction] = match piece.kind() {
            PieceKind::Rook => &Direction::ORTHOGONAL,
            PieceKind::Bishop => &Direction::DIAGONAL,
            PieceKind::Queen => &Direction::ALL,
            _ => &[],
        };
        for &direction in directions {
            board.append_piece_path(&mut moves, from, piece.color(), direction, MovesType::All);
        }
    }
    info!(slider_moves = moves.len(), "sliding candidates for both sides");

    println!("{}", board.pretty(&GameInfo::default()));
    Ok(())
}
