//! rvv-as CLI — encode RISC-V vector instructions from the command line.
//!
//! Instructions come from positional arguments (each argument is exactly one
//! instruction, taken verbatim), from `--file` (one per line, `-` for stdin), or from stdin when neither is
//! given. Each encoded word is printed on its own line.

mod batch;

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use batch::OutputFormat;

/// Encode RISC-V vector instructions into 32-bit words.
#[derive(Parser, Debug)]
#[command(name = "rvv-as", version, about)]
struct Cli {
    /// Instructions to encode, e.g. "vand.vv v31, v0, v0".
    instructions: Vec<String>,

    /// Read instructions from a file, one per line (`-` for stdin).
    #[arg(short, long, conflicts_with = "instructions")]
    file: Option<PathBuf>,

    /// Output format for encoded words.
    #[arg(long, value_enum, default_value_t = OutputFormat::Hex)]
    format: OutputFormat,

    /// Continue past lines that fail to encode.
    #[arg(short, long)]
    keep_going: bool,

    /// Log every encoded line to stderr.
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(&cli) {
        Ok(summary) if summary.failed == 0 => ExitCode::SUCCESS,
        Ok(_) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

/// Logging is off unless `--verbose` is passed or `RUST_LOG` is set. Logs go
/// to stderr so stdout carries only encoded words.
fn init_tracing(verbose: bool) {
    let filter = if std::env::var("RUST_LOG").is_ok() {
        tracing_subscriber::EnvFilter::from_default_env()
    } else if verbose {
        tracing_subscriber::EnvFilter::new("debug")
    } else {
        return;
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run(cli: &Cli) -> Result<batch::Summary> {
    let stdout = io::stdout();
    let stderr = io::stderr();
    let (mut out, mut diag) = (stdout.lock(), stderr.lock());
    let summary = if cli.instructions.is_empty() {
        let input = open_input(cli)?;
        batch::run(input, &mut out, &mut diag, cli.format, cli.keep_going)?
    } else {
        batch::run_args(&cli.instructions, &mut out, &mut diag, cli.format, cli.keep_going)?
    };
    info!(
        encoded = summary.encoded,
        failed = summary.failed,
        "batch finished"
    );
    Ok(summary)
}

fn open_input(cli: &Cli) -> Result<Box<dyn BufRead>> {
    match &cli.file {
        Some(path) if path.as_os_str() != "-" => {
            let file = File::open(path)
                .with_context(|| format!("failed to open {}", path.display()))?;
            Ok(Box::new(BufReader::new(file)))
        }
        _ => Ok(Box::new(io::stdin().lock())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn positional_instructions() {
        let cli = Cli::parse_from(["rvv-as", "vand.vv v0, v0, v0", "vsrl.vi v0, v0, 1"]);
        assert_eq!(cli.instructions.len(), 2);
        assert_eq!(cli.format, OutputFormat::Hex);
        assert!(!cli.keep_going);
    }

    #[test]
    fn file_and_format_flags() {
        let cli = Cli::parse_from(["rvv-as", "--file", "prog.s", "--format", "bytes", "-k"]);
        assert_eq!(cli.file, Some(PathBuf::from("prog.s")));
        assert_eq!(cli.format, OutputFormat::Bytes);
        assert!(cli.keep_going);
    }

    #[test]
    fn file_conflicts_with_positional() {
        assert!(Cli::try_parse_from(["rvv-as", "-f", "x.s", "vand.vv v0, v0, v0"]).is_err());
    }
}
