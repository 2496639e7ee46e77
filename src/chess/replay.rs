use super::error::ConversionError;
use super::rules::GamePosition;
use super::types::{ConvertedGame, GameResult, MoveList};

/// Replay SAN tokens from the starting position and collect their
/// coordinate form. The last token must be the result marker.
///
/// Stops at the first move that does not resolve; moves converted before
/// that point are dropped together with the position.
pub fn replay<P: GamePosition>(tokens: &[String]) -> Result<ConvertedGame, ConversionError> {
    let Some((last, sans)) = tokens.split_last() else {
        return Err(ConversionError::EmptyLine);
    };

    let result: GameResult = last
        .parse()
        .map_err(|()| ConversionError::InvalidResult {
            token: last.clone(),
        })?;

    let mut pos = P::starting();
    let mut moves = MoveList::new();

    for san in sans {
        let m = pos
            .resolve_san(san)
            .map_err(|e| ConversionError::bad_move(san, pos.ply() + 1, e))?;

        moves.push(pos.uci(&m));
        pos.apply(m);
    }

    Ok(ConvertedGame { moves, result })
}
