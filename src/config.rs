use std::fmt;
use std::str::FromStr;

use crate::{Error, Result};

/// Which engine the command-line front end runs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Single-source from the given source vertex
    Dijkstra,
    /// All pairs
    FloydWarshall,
    /// Run both and compare the source's row against Dijkstra
    CrossCheck,
}

impl FromStr for Mode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "dijkstra" => Ok(Mode::Dijkstra),
            "floyd-warshall" | "floyd" => Ok(Mode::FloydWarshall),
            "cross-check" => Ok(Mode::CrossCheck),
            other => Err(Error::Config(format!("unknown mode '{}'", other))),
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Mode::Dijkstra => "dijkstra",
            Mode::FloydWarshall => "floyd-warshall",
            Mode::CrossCheck => "cross-check",
        })
    }
}

/// How results are printed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(Error::Config(format!("unknown output format '{}'", other))),
        }
    }
}

/// Configuration for the `shortest_path` binary
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub mode: Mode,
    pub format: OutputFormat,
    /// Print the interactive prompts (to stderr)
    pub prompts: bool,
    /// Source vertex used when the input does not name one
    pub default_source: usize,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            mode: Mode::Dijkstra,
            format: OutputFormat::Text,
            prompts: true,
            default_source: 0,
        }
    }
}

impl RunConfig {
    pub fn with_mode(mut self, mode: Mode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    pub fn with_prompts(mut self, prompts: bool) -> Self {
        self.prompts = prompts;
        self
    }

    pub fn with_default_source(mut self, source: usize) -> Self {
        self.default_source = source;
        self
    }

    /// Parses command line arguments (without the program name).
    ///
    /// Accepts an optional positional mode followed by `--json`, `--quiet` and
    /// `--source <n>`.
    pub fn from_args<I, S>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut config = RunConfig::default();
        let mut args = args.into_iter();
        while let Some(arg) = args.next() {
            match arg.as_ref() {
                "--json" => config.format = OutputFormat::Json,
                "--quiet" => config.prompts = false,
                "--source" => {
                    let value = args
                        .next()
                        .ok_or_else(|| Error::Config("--source needs a vertex id".to_string()))?;
                    config.default_source = value
                        .as_ref()
                        .parse()
                        .map_err(|_| Error::Config(format!("invalid source '{}'", value.as_ref())))?;
                }
                flag if flag.starts_with("--") => {
                    return Err(Error::Config(format!("unknown flag '{}'", flag)));
                }
                mode => config.mode = mode.parse()?,
            }
        }
        Ok(config)
    }
}
