use super::error::ConversionError;
use super::replay::replay;
use super::rules::GamePosition;
use super::tokenizer::{is_separator, tokenize};
use super::types::{ConvertedGame, Summary};
use anyhow::{Context, Result};
use shakmaty::Chess;
use std::fs::File;
use std::io::{self, BufWriter, Read, Write};
use std::path::{Path, PathBuf};
use zstd::stream::read::Decoder as ZstdDecoder;

type LineInput = Box<dyn Read>;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Compression {
    Plain,
    Zstd,
}

impl Compression {
    pub fn parse(raw: &str) -> Result<Self, String> {
        let normalized = raw.trim();
        match normalized.to_ascii_lowercase().as_str() {
            "zstd" => Ok(Self::Zstd),
            "none" | "plain" => Ok(Self::Plain),
            _ => Err(format!(
                "Invalid compression value '{}'. Supported values: 'zstd' or 'none'.",
                normalized
            )),
        }
    }

    /// `.zst` inputs are zstd streams, everything else is plain text.
    pub fn infer(path: &Path) -> Self {
        match path.extension() {
            Some(ext) if ext.eq_ignore_ascii_case("zst") => Self::Zstd,
            _ => Self::Plain,
        }
    }
}

#[derive(Clone, Debug)]
pub struct ConvertOptions {
    pub input: PathBuf,
    pub output: PathBuf,
    pub compression: Compression,
}

impl ConvertOptions {
    pub fn new(input: PathBuf, output: PathBuf, compression: Option<Compression>) -> Self {
        let compression = compression.unwrap_or_else(|| Compression::infer(&input));
        Self {
            input,
            output,
            compression,
        }
    }
}

/// `\r\n` and lone `\r` end a line, as do `\n`, vertical tab, form feed,
/// the file/group/record separators, NEL and the Unicode line and paragraph
/// separators.
fn is_line_break(c: char) -> bool {
    matches!(
        c,
        '\n' | '\r' | '\x0b' | '\x0c' | '\x1c' | '\x1d' | '\x1e' | '\u{85}' | '\u{2028}'
            | '\u{2029}'
    )
}

/// Split `text` into lines. A trailing break does not open an extra line.
fn split_lines(text: &str) -> Vec<&str> {
    let mut lines = Vec::new();
    let mut rest = text;
    while !rest.is_empty() {
        match rest.find(is_line_break) {
            Some(end) => {
                lines.push(&rest[..end]);
                let break_len = if rest[end..].starts_with("\r\n") {
                    2
                } else {
                    rest[end..].chars().next().map_or(1, char::len_utf8)
                };
                rest = &rest[end + break_len..];
            }
            None => {
                lines.push(rest);
                rest = "";
            }
        }
    }
    lines
}

/// Convert one raw line with the default rules engine.
pub fn convert_line(line: &str) -> Result<ConvertedGame, ConversionError> {
    convert_line_with::<Chess>(line)
}

pub fn convert_line_with<P: GamePosition>(line: &str) -> Result<ConvertedGame, ConversionError> {
    replay::<P>(&tokenize(line))
}

/// Convert every line of `text`, writing games to `output` and one
/// `[skip line N] reason` entry per rejected line to `diagnostics`, followed
/// by the summary line.
///
/// Blank lines are ignored and counted nowhere. A rejected line never stops
/// the run; only a failing writer does.
pub fn convert_text<P: GamePosition>(
    text: &str,
    output: &mut impl Write,
    diagnostics: &mut impl Write,
) -> io::Result<Summary> {
    let mut summary = Summary::default();

    for (idx, raw_line) in split_lines(text).into_iter().enumerate() {
        let line_no = idx + 1;
        let line = raw_line.trim_matches(is_separator);
        if line.is_empty() {
            continue;
        }

        match convert_line_with::<P>(line) {
            Ok(game) => {
                log::debug!("line {}: {} plies", line_no, game.moves.len());
                writeln!(output, "{}", game)?;
                summary.kept += 1;
            }
            Err(err) => {
                summary.skipped += 1;
                writeln!(diagnostics, "[skip line {}] {}", line_no, err)?;
            }
        }
    }

    writeln!(diagnostics, "{}", summary)?;
    Ok(summary)
}

fn open_input_stream(path: &Path, compression: Compression) -> Result<LineInput> {
    let file = File::open(path)
        .with_context(|| format!("Failed to open file '{}'", path.display()))?;

    match compression {
        Compression::Plain => Ok(Box::new(file)),
        Compression::Zstd => ZstdDecoder::new(file)
            .map(|decoder| Box::new(decoder) as LineInput)
            .with_context(|| {
                format!(
                    "Failed to initialize zstd decoder for '{}'",
                    path.display()
                )
            }),
    }
}

fn read_input(path: &Path, compression: Compression) -> Result<Vec<u8>> {
    let mut input = open_input_stream(path, compression)?;
    let mut bytes = Vec::new();
    input
        .read_to_end(&mut bytes)
        .with_context(|| format!("Failed to read file '{}'", path.display()))?;
    Ok(bytes)
}

/// Convert `options.input` into `options.output`.
///
/// The whole input is read and decoded (invalid UTF-8 is replaced) before
/// the output file is created, so a missing input leaves no output behind.
pub fn run(options: &ConvertOptions, diagnostics: &mut impl Write) -> Result<Summary> {
    log::info!(
        "Reading '{}' (compression: {:?})",
        options.input.display(),
        options.compression
    );
    let bytes = read_input(&options.input, options.compression)?;
    let text = String::from_utf8_lossy(&bytes);

    let file = File::create(&options.output)
        .with_context(|| format!("Failed to create file '{}'", options.output.display()))?;
    let mut output = BufWriter::new(file);

    let summary = convert_text::<Chess>(&text, &mut output, diagnostics)
        .with_context(|| format!("Failed to write '{}'", options.output.display()))?;
    output
        .flush()
        .with_context(|| format!("Failed to write '{}'", options.output.display()))?;

    log::info!("Wrote {} games to '{}'", summary.kept, options.output.display());
    Ok(summary)
}
