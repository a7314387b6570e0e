//! Command handlers for the `moji` CLI.

use std::io::{self, Read, Write};

use moji_scan::{
    alias_list, code_map, normalize_short_code, EmojiTransformer, EmojiWriter, Scanner,
};
use tracing::debug;

use crate::cli::{Command, Options};
use crate::CliError;

/// Help text for `moji help`.
pub(crate) const USAGE: &str = "\
Moji (emoji shortcode substitution)

Usage: moji [--padding=<STR>] <command>

Commands:
  print [TEXT]        Print TEXT with shortcodes substituted (default: \":beer: Beer!!!\")
  stream              Substitute shortcodes from stdin to stdout
  aliases <CODE>      List every alias of CODE, canonical first
  normalize <CODE>    Print the canonical alias of CODE
  list                List every shortcode and its emoji
  help                Show this help message
  version             Show version information

Options:
  --padding=<STR>     Text appended after each substituted emoji (default: one space)

Set RUST_LOG (e.g. RUST_LOG=moji_scan=trace) for diagnostic output.
";

/// Run `command`, reading stdin-style input from `input` and writing to `output`.
pub fn run(
    command: &Command,
    options: &Options,
    input: impl Read,
    mut output: impl Write,
) -> Result<(), CliError> {
    let scanner = Scanner::default().with_padding(&options.padding);
    debug!(?command, padding = scanner.padding(), "running command");

    match command {
        Command::Print { text } => writeln!(output, "{}", scanner.compile(text))?,
        Command::Stream => stream(scanner, input, &mut output)?,
        Command::Aliases { code } => {
            for alias in alias_list(code) {
                writeln!(output, "{alias}")?;
            }
        }
        Command::Normalize { code } => writeln!(output, "{}", normalize_short_code(code))?,
        Command::List => list(&mut output)?,
        Command::Help => output.write_all(USAGE.as_bytes())?,
        Command::Version => writeln!(output, "moji {}", env!("CARGO_PKG_VERSION"))?,
    }
    output.flush()?;
    Ok(())
}

fn stream(scanner: Scanner<'_>, mut input: impl Read, output: impl Write) -> io::Result<()> {
    let mut writer = EmojiWriter::with_transformer(output, EmojiTransformer::new(scanner));
    let copied = io::copy(&mut input, &mut writer)?;
    writer.finish()?;
    debug!(copied, "stream finished");
    Ok(())
}

fn list(output: &mut impl Write) -> io::Result<()> {
    let mut entries: Vec<(&str, &str)> = code_map()
        .iter()
        .map(|(code, emoji)| (code.as_str(), *emoji))
        .collect();
    entries.sort_unstable();
    for (code, emoji) in entries {
        writeln!(output, "{code} {emoji}")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests;
