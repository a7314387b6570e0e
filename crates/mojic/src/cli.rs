//! Hand-rolled argument parsing.

use crate::CliError;

/// Text printed by `moji print` with no argument.
pub const DEFAULT_TEXT: &str = ":beer: Beer!!!";

/// A parsed subcommand.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// Print `text` with shortcodes substituted.
    Print { text: String },
    /// Substitute shortcodes from stdin to stdout.
    Stream,
    /// List the aliases of a shortcode.
    Aliases { code: String },
    /// Print the canonical alias of a shortcode.
    Normalize { code: String },
    /// List every shortcode with its emoji.
    List,
    Help,
    Version,
}

/// Options shared by all commands.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Options {
    /// Text appended after each table substitution.
    pub padding: String,
}

impl Default for Options {
    fn default() -> Self {
        Options {
            padding: moji_scan::DEFAULT_PADDING.to_string(),
        }
    }
}

/// Parse `args` (without the program name) into a command and options.
///
/// `--padding=<STR>` may appear anywhere. No command means `help`.
pub fn parse_args(args: &[String]) -> Result<(Command, Options), CliError> {
    let mut options = Options::default();
    let mut positional = Vec::new();

    for arg in args {
        if let Some(padding) = arg.strip_prefix("--padding=") {
            options.padding = padding.to_string();
        } else if arg.starts_with("--") && arg.len() > 2 && !is_help_or_version(arg) {
            return Err(CliError::Usage(format!("unknown option: {arg}")));
        } else {
            positional.push(arg.as_str());
        }
    }

    let Some((&name, rest)) = positional.split_first() else {
        return Ok((Command::Help, options));
    };

    let command = match name {
        "print" => Command::Print {
            text: match rest {
                [] => DEFAULT_TEXT.to_string(),
                words => words.join(" "),
            },
        },
        "stream" => {
            no_extra_args("stream", rest)?;
            Command::Stream
        }
        "aliases" => Command::Aliases {
            code: single_code("aliases", rest)?,
        },
        "normalize" => Command::Normalize {
            code: single_code("normalize", rest)?,
        },
        "list" => {
            no_extra_args("list", rest)?;
            Command::List
        }
        "help" | "--help" | "-h" => Command::Help,
        "version" | "--version" | "-V" => Command::Version,
        other => return Err(CliError::UnknownCommand(other.to_string())),
    };
    Ok((command, options))
}

fn is_help_or_version(arg: &str) -> bool {
    matches!(arg, "--help" | "--version")
}

fn single_code(command: &str, rest: &[&str]) -> Result<String, CliError> {
    match rest {
        [code] => Ok((*code).to_string()),
        _ => Err(CliError::Usage(format!("usage: moji {command} <CODE>"))),
    }
}

fn no_extra_args(command: &str, rest: &[&str]) -> Result<(), CliError> {
    if rest.is_empty() {
        Ok(())
    } else {
        Err(CliError::Usage(format!("usage: moji {command}")))
    }
}
