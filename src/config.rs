//! Runtime configuration: CLI flags backed by environment variables.
//!
//! `.env` is loaded by `main` before parsing, so each value comes from its
//! flag, then the process environment (or that file), then the default.

use std::path::PathBuf;
use std::time::Duration;

use clap::Args;

pub const DEFAULT_STATE_PATH: &str = ".styrkehjul/spin.json";
pub const DEFAULT_SVG_PATH: &str = "styrkehjul.svg";

/// The spin animation length.
pub const DEFAULT_REVEAL_DELAY_MS: u64 = 4000;

#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// JSON file holding the daily gate's spin record.
    #[arg(long, env = "STYRKEHJUL_STATE_PATH", default_value = DEFAULT_STATE_PATH)]
    pub state_path: PathBuf,

    /// Milliseconds between triggering a spin and revealing its result.
    #[arg(long, env = "STYRKEHJUL_REVEAL_DELAY_MS", default_value_t = DEFAULT_REVEAL_DELAY_MS)]
    pub reveal_delay_ms: u64,
}

impl AppConfig {
    pub fn reveal_delay(&self) -> Duration {
        Duration::from_millis(self.reveal_delay_ms)
    }
}

/// Destination of the wheel SVG for `render` and `spin`.
#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct SvgOutput {
    /// Where the wheel is written.
    #[arg(long = "out", env = "STYRKEHJUL_SVG_PATH", default_value = DEFAULT_SVG_PATH)]
    pub path: PathBuf,
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
