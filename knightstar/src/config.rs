//! Run configuration, read from `KNIGHTSTAR_*` environment variables.

use std::fmt;
use std::str::FromStr;

use crossterm::tty::IsTty;
use knightstar_core::{ParsePointError, Point, Range};
use knightstar_paths::DEFAULT_MAX_DEPTH;

pub const START_VAR: &str = "KNIGHTSTAR_START";
pub const FINISH_VAR: &str = "KNIGHTSTAR_FINISH";
pub const MAX_DEPTH_VAR: &str = "KNIGHTSTAR_MAX_DEPTH";
pub const COLOR_VAR: &str = "KNIGHTSTAR_COLOR";

/// When to color the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorMode {
    /// Color only when stdout is a terminal.
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorMode {
    /// Resolve `Auto` against the current stdout.
    pub fn enabled(self) -> bool {
        match self {
            Self::Auto => std::io::stdout().is_tty(),
            Self::Always => true,
            Self::Never => false,
        }
    }
}

impl FromStr for ColorMode {
    type Err = ParseColorModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "auto" => Ok(Self::Auto),
            "always" | "on" | "1" => Ok(Self::Always),
            "never" | "off" | "0" => Ok(Self::Never),
            _ => Err(ParseColorModeError(s.to_string())),
        }
    }
}

/// Error returned when a [`ColorMode`] name is not recognized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseColorModeError(pub String);

impl fmt::Display for ParseColorModeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "expected auto, always or never, got \u{201c}{}\u{201d}",
            self.0
        )
    }
}

impl std::error::Error for ParseColorModeError {}

/// Everything `main` needs to run one search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub start: Point,
    pub finish: Point,
    pub max_depth: u32,
    pub color: ColorMode,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            start: Point::new(0, 4),
            finish: Point::new(5, 4),
            max_depth: DEFAULT_MAX_DEPTH,
            color: ColorMode::Auto,
        }
    }
}

impl Config {
    /// Read the process environment. Unset variables keep their defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from `lookup`, which maps a variable name to its value.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut cfg = Self::default();
        let board = Range::chessboard();

        for (var, slot) in [(START_VAR, &mut cfg.start), (FINISH_VAR, &mut cfg.finish)] {
            if let Some(raw) = lookup(var) {
                let p: Point = raw
                    .parse()
                    .map_err(|source| ConfigError::Point { var, source })?;
                if !board.contains(p) {
                    return Err(ConfigError::OffBoard { var, point: p });
                }
                *slot = p;
            }
        }

        if let Some(raw) = lookup(MAX_DEPTH_VAR) {
            cfg.max_depth = raw
                .trim()
                .parse()
                .map_err(|_| ConfigError::Invalid { var: MAX_DEPTH_VAR, value: raw })?;
        }

        if let Some(raw) = lookup(COLOR_VAR) {
            cfg.color = raw
                .parse()
                .map_err(|source| ConfigError::Color { var: COLOR_VAR, source })?;
        }

        Ok(cfg)
    }
}

/// Errors that can occur when reading the configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// A square variable does not parse as `x,y`.
    Point {
        var: &'static str,
        source: ParsePointError,
    },
    /// A square variable names a point outside the board.
    OffBoard { var: &'static str, point: Point },
    /// The color variable names no known mode.
    Color {
        var: &'static str,
        source: ParseColorModeError,
    },
    /// Any other variable has a value outside its domain.
    Invalid { var: &'static str, value: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Point { var, source } => write!(f, "{var}: {source}"),
            Self::Color { var, source } => write!(f, "{var}: {source}"),
            Self::OffBoard { var, point } => write!(f, "{var}: {point} is off the board"),
            Self::Invalid { var, value } => {
                write!(f, "{var}: invalid value \u{201c}{value}\u{201d}")
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Point { source, .. } => Some(source),
            Self::Color { source, .. } => Some(source),
            _ => None,
        }
    }
}
