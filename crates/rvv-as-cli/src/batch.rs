//! Line-by-line batch encoding.
//!
//! Every input line is encoded on its own. Text after `#` is a comment and
//! blank lines are skipped, but still counted for line numbers.

use std::fmt;
use std::io::{BufRead, Write};

use anyhow::Result;
use clap::ValueEnum;
use tracing::{debug, warn};

/// How an encoded word is printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// `0x26000fd7`
    #[default]
    Hex,
    /// 32 binary digits, most significant bit first.
    Bin,
    /// Little-endian bytes: `d7 0f 00 26`.
    Bytes,
}

/// Render one instruction word.
pub fn render(word: u32, format: OutputFormat) -> String {
    match format {
        OutputFormat::Hex => format!("0x{word:08x}"),
        OutputFormat::Bin => format!("{word:032b}"),
        OutputFormat::Bytes => word
            .to_le_bytes()
            .iter()
            .map(|b| format!("{b:02x}"))
            .collect::<Vec<_>>()
            .join(" "),
    }
}

/// The instruction part of a line, without comment or surrounding space.
pub fn strip_comment(line: &str) -> &str {
    line.split_once('#').map_or(line, |(code, _)| code).trim()
}

/// Totals for one batch run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    /// Lines that encoded successfully.
    pub encoded: usize,
    /// Lines that failed to encode.
    pub failed: usize,
}

/// Where words and diagnostics go, plus the running tally.
struct Sink<'a, W, E> {
    out: &'a mut W,
    diag: &'a mut E,
    format: OutputFormat,
    keep_going: bool,
    summary: Summary,
}

impl<'a, W: Write, E: Write> Sink<'a, W, E> {
    fn new(out: &'a mut W, diag: &'a mut E, format: OutputFormat, keep_going: bool) -> Self {
        Sink {
            out,
            diag,
            format,
            keep_going,
            summary: Summary::default(),
        }
    }

    /// Encode one instruction. Returns `false` once the batch must stop.
    fn encode(&mut self, source: &str, n: usize, code: &str) -> Result<bool> {
        match rvv_as::encode(code) {
            Ok(word) => {
                debug!(source, n, instruction = code, word, "encoded");
                writeln!(self.out, "{}", render(word, self.format))?;
                self.summary.encoded += 1;
                Ok(true)
            }
            Err(e) => {
                warn!(source, n, instruction = code, error = %e, "rejected");
                self.reject(source, n, &e)
            }
        }
    }

    fn reject(&mut self, source: &str, n: usize, reason: &dyn fmt::Display) -> Result<bool> {
        writeln!(self.diag, "{source} {n}: {reason}")?;
        self.summary.failed += 1;
        Ok(self.keep_going)
    }
}

/// Encode `input` line by line, writing words to `out` and diagnostics to
/// `diag`. Stops at the first failing line unless `keep_going` is set.
///
/// A line that is not valid UTF-8 fails like any other bad line; only real
/// I/O errors abort the run.
pub fn run<R, W, E>(
    mut input: R,
    out: &mut W,
    diag: &mut E,
    format: OutputFormat,
    keep_going: bool,
) -> Result<Summary>
where
    R: BufRead,
    W: Write,
    E: Write,
{
    let mut sink = Sink::new(out, diag, format, keep_going);
    let mut buf = Vec::new();
    let mut lineno = 0;

    loop {
        buf.clear();
        if input.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        lineno += 1;

        let go_on = match std::str::from_utf8(&buf) {
            Ok(line) => {
                let code = strip_comment(line);
                if code.is_empty() {
                    continue;
                }
                sink.encode("line", lineno, code)?
            }
            Err(_) => {
                warn!(line = lineno, "invalid UTF-8");
                sink.reject("line", lineno, &"invalid UTF-8")?
            }
        };
        if !go_on {
            break;
        }
    }

    Ok(sink.summary)
}

/// Encode each command-line argument as exactly one instruction. Arguments
/// get no comment stripping or line splitting.
pub fn run_args<W, E>(
    instructions: &[String],
    out: &mut W,
    diag: &mut E,
    format: OutputFormat,
    keep_going: bool,
) -> Result<Summary>
where
    W: Write,
    E: Write,
{
    let mut sink = Sink::new(out, diag, format, keep_going);
    for (idx, code) in instructions.iter().enumerate() {
        if !sink.encode("argument", idx + 1, code)? {
            break;
        }
    }
    Ok(sink.summary)
}
