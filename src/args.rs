use clap::Parser;
use san2uci::chess::Compression;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "san2uci")]
#[command(version, about = "Convert SAN game lines to UCI coordinate notation")]
pub struct Args {
    /// Text file with one SAN game per line, ending in its result
    pub input: PathBuf,

    /// Destination for the converted games
    pub output: PathBuf,

    /// Input compression: zstd or none (default: inferred from a .zst extension)
    #[arg(long, value_parser = Compression::parse)]
    pub compression: Option<Compression>,

    /// Enable debug logging (also configurable through SAN2UCI_LOG)
    #[arg(short, long)]
    pub verbose: bool,
}
