mod driver;
mod error;
pub mod logging;
mod replay;
mod rules;
mod tokenizer;
mod types;

pub use driver::{
    Compression, ConvertOptions, convert_line, convert_line_with, convert_text, run,
};
pub use error::ConversionError;
pub use replay::replay;
pub use rules::{GamePosition, ResolveError};
pub use tokenizer::{TokenList, tokenize};
pub use types::{ConvertedGame, GameResult, MoveList, Summary};
