use smallvec::SmallVec;
use std::fmt;
use std::str::FromStr;

/// Coordinate moves of one game, in play order.
pub type MoveList = SmallVec<[String; 128]>;

/// Game outcome token that terminates every input line.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum GameResult {
    WhiteWins,
    BlackWins,
    Draw,
    Unknown,
}

impl GameResult {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::WhiteWins => "1-0",
            Self::BlackWins => "0-1",
            Self::Draw => "1/2-1/2",
            Self::Unknown => "*",
        }
    }
}

impl FromStr for GameResult {
    type Err = ();

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        match token {
            "1-0" => Ok(Self::WhiteWins),
            "0-1" => Ok(Self::BlackWins),
            "1/2-1/2" => Ok(Self::Draw),
            "*" => Ok(Self::Unknown),
            _ => Err(()),
        }
    }
}

impl fmt::Display for GameResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A successfully replayed line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertedGame {
    pub moves: MoveList,
    pub result: GameResult,
}

impl fmt::Display for ConvertedGame {
    /// Output line format: `e2e4 e7e5 ... 1-0`. A game without moves keeps
    /// the separator, so it renders as ` 1-0`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.moves.join(" "), self.result)
    }
}

/// Per-run counters reported once all lines were processed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    pub kept: usize,
    pub skipped: usize,
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Done. kept={}, skipped={}", self.kept, self.skipped)
    }
}
