//! Command-line configuration.

use std::fmt;
use std::path::PathBuf;

use algo_diagnostic::emitter::ColorMode;

pub const USAGE: &str = "\
Usage: algo [command] <file> [options]

Commands:
  run <file>     Interpret a program (default)
  lex <file>     Print the grouped tokens of each line
  parse <file>   Print the program name and the node of each line

Options:
  --color=<when>  Diagnostic colors: auto (default), always, never
  -h, --help      Show this help message";

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum Command {
    #[default]
    Run,
    Lex,
    Parse,
}

impl Command {
    fn parse(word: &str) -> Option<Self> {
        match word {
            "run" => Some(Command::Run),
            "lex" => Some(Command::Lex),
            "parse" => Some(Command::Parse),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    pub command: Command,
    pub path: PathBuf,
    pub color: ColorMode,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// `-h` / `--help`: print usage and succeed.
    Help,
    MissingPath,
    UnexpectedArgument(String),
    UnknownFlag(String),
    InvalidColor(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Help => write!(f, "help requested"),
            ConfigError::MissingPath => write!(f, "missing source file"),
            ConfigError::UnexpectedArgument(arg) => write!(f, "unexpected argument '{arg}'"),
            ConfigError::UnknownFlag(flag) => write!(f, "unknown option '{flag}'"),
            ConfigError::InvalidColor(value) => {
                write!(f, "invalid --color value '{value}' (expected auto, always or never)")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

impl Config {
    /// Build a configuration from the arguments after the program name.
    ///
    /// A leading `run`, `lex` or `parse` selects the command; the first
    /// other word is the source path. Flags may appear anywhere.
    pub fn from_args<I>(args: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = String>,
    {
        let mut command = None;
        let mut path = None;
        let mut color = ColorMode::default();

        for arg in args {
            if arg == "-h" || arg == "--help" {
                return Err(ConfigError::Help);
            } else if let Some(value) = arg.strip_prefix("--color=") {
                color = ColorMode::parse(value)
                    .ok_or_else(|| ConfigError::InvalidColor(value.to_string()))?;
            } else if arg.starts_with('-') {
                return Err(ConfigError::UnknownFlag(arg));
            } else if command.is_none() && path.is_none() {
                match Command::parse(&arg) {
                    Some(cmd) => command = Some(cmd),
                    None => path = Some(PathBuf::from(arg)),
                }
            } else if path.is_none() {
                path = Some(PathBuf::from(arg));
            } else {
                return Err(ConfigError::UnexpectedArgument(arg));
            }
        }

        Ok(Config {
            command: command.unwrap_or_default(),
            path: path.ok_or(ConfigError::MissingPath)?,
            color,
        })
    }
}
