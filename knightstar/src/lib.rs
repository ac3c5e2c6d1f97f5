//! knightstar — shortest knight paths, shown step by step.
//!
//! The search itself lives in `knightstar-paths`; this crate holds the
//! terminal presentation and run configuration used by the binary.

pub mod board;
pub mod config;
pub mod report;

pub use config::{ColorMode, Config, ConfigError, ParseColorModeError};
pub use report::Reporter;
