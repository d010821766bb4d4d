use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use std::io::{self, BufRead, BufReader, Write};

use idmerge::{AccountMerger, RecordFormat};

/// Parse a field delimiter: a single character, or one of tab/\t, comma, space
fn parse_delimiter(s: &str) -> Result<char, String> {
    match s {
        "tab" | "\\t" => return Ok('\t'),
        "comma" => return Ok(','),
        "space" => return Ok(' '),
        _ => {}
    }

    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(c),
        (None, _) => Err("Empty delimiter".to_string()),
        _ => Err(format!(
            "Delimiter '{s}' must be a single character (or tab, comma, space)"
        )),
    }
}

/// idmerge - Merge account records that share identifiers
///
/// Reads one record per line (name followed by identifiers) and prints one
/// merged account per connected group, identifiers sorted.
#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Input records file (stdin if not specified)
    #[clap(value_name = "INPUT")]
    input: Option<String>,

    /// Output file (stdout if not specified)
    #[clap(short = 'o', long = "output")]
    output: Option<String>,

    /// Field delimiter for input and output
    #[clap(short = 'd', long = "delimiter", default_value = "tab", value_parser = parse_delimiter)]
    delimiter: char,

    /// Quiet mode (errors only)
    #[clap(long = "quiet", conflicts_with = "verbose")]
    quiet: bool,

    /// Verbose logging (repeat for more)
    #[clap(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Args {
    fn log_level(&self) -> &'static str {
        if self.quiet {
            return "error";
        }
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(args.log_level()))
        .format_timestamp(None)
        .init();

    let format = RecordFormat::new(args.delimiter);

    let input: Box<dyn BufRead> = if let Some(ref path) = args.input {
        let file = std::fs::File::open(path)
            .with_context(|| format!("Failed to open input file '{path}'"))?;
        Box::new(BufReader::new(file))
    } else {
        Box::new(BufReader::new(io::stdin()))
    };

    let source = args.input.as_deref().unwrap_or("<stdin>");
    let accounts = format
        .read_accounts(input)
        .with_context(|| format!("Failed to read account records from {source}"))?;
    info!("Read {} records from {source}", accounts.len());

    let mut merger = AccountMerger::from_accounts(accounts);
    let merged = merger.merge_accounts();

    let output: Box<dyn Write> = if let Some(ref path) = args.output {
        let file = std::fs::File::create(path)
            .with_context(|| format!("Failed to create output file '{path}'"))?;
        Box::new(io::BufWriter::new(file))
    } else {
        Box::new(io::BufWriter::new(io::stdout().lock()))
    };

    format.write_accounts(output, &merged)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_delimiter() {
        assert_eq!(parse_delimiter("tab"), Ok('\t'));
        assert_eq!(parse_delimiter("\\t"), Ok('\t'));
        assert_eq!(parse_delimiter("comma"), Ok(','));
        assert_eq!(parse_delimiter(";"), Ok(';'));
        assert!(parse_delimiter("").is_err());
        assert!(parse_delimiter("::").is_err());
    }

    #[test]
    fn test_log_level() {
        let args = Args::parse_from(["idmerge", "-vv"]);
        assert_eq!(args.log_level(), "debug");
        let args = Args::parse_from(["idmerge", "--quiet"]);
        assert_eq!(args.log_level(), "error");
    }
}
