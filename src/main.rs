mod args;

use anyhow::Result;
use args::Args;
use clap::Parser;
use san2uci::chess::{ConvertOptions, logging, run};
use std::io;

fn main() -> Result<()> {
    // Usage errors exit with status 2 here, before any file is touched.
    let args = Args::parse();

    logging::init(args.verbose)?;

    let options = ConvertOptions::new(args.input, args.output, args.compression);
    run(&options, &mut io::stderr())?;

    Ok(())
}
