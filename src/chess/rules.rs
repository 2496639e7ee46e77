use std::borrow::Cow;

use shakmaty::san::{ParseSanError, SanError, SanPlus};
use shakmaty::{CastlingMode, Chess, Color, Move, Position};

/// What the replayer needs from a chess-rules library.
///
/// Implementors own the full board state of one game. The replayer creates
/// a fresh value per input line and drops it when the line is done, so no
/// state ever crosses lines.
pub trait GamePosition: Sized {
    type Move;
    type Error: std::error::Error + Send + Sync + 'static;

    /// Standard starting position, white to move.
    fn starting() -> Self;

    /// Resolves a SAN token against this position. Fails on malformed,
    /// illegal or ambiguous SAN.
    fn resolve_san(&self, san: &str) -> Result<Self::Move, Self::Error>;

    /// Coordinate notation of a move that is legal in this position.
    fn uci(&self, m: &Self::Move) -> String;

    fn apply(&mut self, m: Self::Move);

    /// Half-moves played since the starting position.
    fn ply(&self) -> u32;
}

#[derive(Debug, thiserror::Error)]
pub enum ResolveError {
    #[error(transparent)]
    Parse(#[from] ParseSanError),

    #[error(transparent)]
    Resolve(#[from] SanError),
}

impl GamePosition for Chess {
    type Move = Move;
    type Error = ResolveError;

    fn starting() -> Self {
        Chess::default()
    }

    fn resolve_san(&self, san: &str) -> Result<Move, ResolveError> {
        let san: SanPlus = normalize_castling(san).parse()?;
        Ok(san.san.to_move(self)?)
    }

    fn uci(&self, m: &Move) -> String {
        m.to_uci(CastlingMode::Standard).to_string()
    }

    fn apply(&mut self, m: Move) {
        self.play_unchecked(m);
    }

    fn ply(&self) -> u32 {
        let black_to_move = u32::from(self.turn() == Color::Black);
        (self.fullmoves().get() - 1) * 2 + black_to_move
    }
}

/// Rewrites castling written with zeros (`0-0`, `0-0-0+`) to the letter form
/// the SAN parser accepts. Anything else is returned as is.
fn normalize_castling(san: &str) -> Cow<'_, str> {
    let body = san.trim_end_matches(['+', '#']);
    let suffix = &san[body.len()..];
    match body {
        "0-0" => Cow::Owned(format!("O-O{suffix}")),
        "0-0-0" => Cow::Owned(format!("O-O-O{suffix}")),
        _ => Cow::Borrowed(san),
    }
}
