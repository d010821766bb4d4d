/// tailn - Print the last N lines of a file
///
/// Lines are trimmed of surrounding whitespace and printed in their
/// original order.
use anyhow::{Context, Result};
use clap::Parser;
use std::io::{self, Write};

use idmerge::tail::{tail_file, DEFAULT_LINES};

#[derive(Parser)]
#[clap(name = "tailn", about = "Print last n lines from a file")]
struct Args {
    /// File to read from
    file: String,

    /// The last n lines to be printed
    #[clap(short = 'n', long = "lines", default_value_t = DEFAULT_LINES)]
    lines: usize,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let args = Args::parse();

    let lines = tail_file(&args.file, args.lines)
        .with_context(|| format!("Failed to read '{}'", args.file))?;
    log::debug!("Read {} trailing lines from {}", lines.len(), args.file);

    let stdout = io::stdout();
    let mut handle = stdout.lock();
    for line in &lines {
        writeln!(handle, "{line}")?;
    }

    Ok(())
}
