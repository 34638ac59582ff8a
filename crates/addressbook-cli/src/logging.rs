//! Logging setup using `tracing` and `tracing-subscriber`.
//!
//! Logs always go to stderr so they never mix with command output on stdout.
//!
//! # Level Selection
//!
//! 1. `RUST_LOG`, when set, wins outright.
//! 2. Otherwise `-v` flags raise the level above the configured `log_level`.
//! 3. With no flags, the configured `log_level` (default `warn`) applies.

use std::io;
use tracing::Level;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Debug, Clone)]
pub struct LogConfig {
    pub level: Level,
    pub with_ansi: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: Level::WARN,
            with_ansi: true,
        }
    }
}

impl LogConfig {
    /// Picks the level from the `-v` count, falling back to `configured`.
    ///
    /// - 0: `configured`
    /// - 1: info
    /// - 2: debug
    /// - 3+: trace
    #[must_use]
    pub fn from_verbosity(verbosity: u8, configured: &str) -> Self {
        let level = match verbosity {
            0 => parse_level(configured),
            1 => Level::INFO,
            2 => Level::DEBUG,
            _ => Level::TRACE,
        };
        Self {
            level,
            ..Default::default()
        }
    }

    #[must_use]
    pub fn with_ansi(mut self, enable: bool) -> Self {
        self.with_ansi = enable;
        self
    }
}

fn parse_level(name: &str) -> Level {
    name.trim().parse().unwrap_or(Level::WARN)
}

/// Installs the global subscriber. Call once at startup.
pub fn init_logging(config: &LogConfig) {
    let layer = fmt::layer()
        .with_writer(io::stderr)
        .with_ansi(config.with_ansi)
        .with_target(false)
        .without_time();

    // A subscriber may already be set (e.g. by a test harness); keep it.
    let _ = tracing_subscriber::registry()
        .with(build_env_filter(config.level))
        .with(layer)
        .try_init();
}

/// Build an `EnvFilter` from the given level, respecting `RUST_LOG`.
fn build_env_filter(level: Level) -> EnvFilter {
    let level_str = level.as_str().to_lowercase();
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "warn,addressbook={level},addressbook_cli={level}",
            level = level_str
        ))
    })
}
