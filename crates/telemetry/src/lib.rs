//! Logging setup for apkforge
//!
//! Installs one global `tracing` subscriber: an `EnvFilter` and a compact
//! (or JSON) fmt layer on stderr. Stdout stays reserved for generated files.
//! ANSI styling is only used when stderr is a terminal and color is enabled.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::io::IsTerminal;
use std::time::{Duration, Instant};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};
use uuid::Uuid;

/// Global session ID for correlating logs
static SESSION_ID: Lazy<String> = Lazy::new(|| Uuid::new_v4().to_string());

/// Initialize with custom configuration
///
/// `RUST_LOG` wins over `config.log_level` when set.
pub fn init_with_config(config: TelemetryConfig) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_level))
        .map_err(|e| anyhow::anyhow!("Invalid log filter {:?}: {}", config.log_level, e))?;

    let registry = tracing_subscriber::registry().with(filter);
    let result = if config.json {
        registry
            .with(
                fmt::layer()
                    .json()
                    .with_writer(std::io::stderr)
                    .with_ansi(false),
            )
            .try_init()
    } else {
        registry
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_ansi(config.use_ansi())
                    .with_target(config.show_target)
                    .with_file(config.show_file)
                    .with_line_number(config.show_line_number)
                    .compact(),
            )
            .try_init()
    };
    result.map_err(|e| anyhow::anyhow!("Failed to set tracing subscriber: {}", e))?;

    tracing::debug!(
        session_id = %session_id(),
        version = env!("CARGO_PKG_VERSION"),
        "Telemetry initialized"
    );

    Ok(())
}

/// Get the current session ID
pub fn session_id() -> &'static str {
    &SESSION_ID
}

/// Telemetry configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TelemetryConfig {
    /// `EnvFilter` directives used when `RUST_LOG` is unset
    pub log_level: String,
    /// JSON lines instead of the compact format
    pub json: bool,
    /// Color log lines; still off when stderr is not a terminal
    pub ansi: bool,
    pub show_target: bool,
    pub show_file: bool,
    pub show_line_number: bool,
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            log_level: "warn".to_string(),
            json: false,
            ansi: true,
            show_target: false,
            show_file: false,
            show_line_number: false,
        }
    }
}

impl TelemetryConfig {
    /// Resolve the filter from the configured level and the `-v`/`-q` flags
    ///
    /// `-q` wins over `-v`. Verbose runs also show targets.
    #[must_use]
    pub fn from_verbosity(configured: &str, verbose: u8, quiet: bool) -> Self {
        let log_level = match (quiet, verbose) {
            (true, _) => "error",
            (false, 0) => configured,
            (false, 1) => "debug",
            (false, _) => "trace",
        };

        Self {
            log_level: log_level.to_string(),
            show_target: !quiet && verbose > 0,
            ..Self::default()
        }
    }

    /// Emit JSON lines instead of the compact format
    #[must_use]
    pub fn with_json(mut self, json: bool) -> Self {
        self.json = json;
        self
    }

    /// Enable or disable colored log lines
    #[must_use]
    pub fn with_ansi(mut self, ansi: bool) -> Self {
        self.ansi = ansi;
        self
    }

    fn use_ansi(&self) -> bool {
        self.ansi && std::io::stderr().is_terminal()
    }
}

/// Timer for measuring operation duration
pub struct Timer {
    name: &'static str,
    start: Instant,
}

impl Timer {
    /// Start a new timer
    pub fn start(name: &'static str) -> Self {
        Self {
            name,
            start: Instant::now(),
        }
    }

    /// Stop the timer and log the duration
    pub fn stop(self) -> Duration {
        let duration = self.start.elapsed();
        tracing::debug!(
            operation = self.name,
            duration_us = duration.as_micros() as u64,
            "Timer completed"
        );
        duration
    }
}
