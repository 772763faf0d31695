//! Configuration schema definitions

use serde::{Deserialize, Serialize};

/// Root configuration schema
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct ConfigSchema {
    /// `[general]` output settings
    #[serde(default)]
    pub general: GeneralConfig,

    /// `[logging]` settings
    #[serde(default)]
    pub logging: LoggingConfig,

    /// `[render]` settings
    #[serde(default)]
    pub render: RenderConfig,

    /// `[clipboard]` acknowledgment settings
    #[serde(default)]
    pub clipboard: ClipboardConfig,

    /// Application field overrides, keyed by field name (`appName`, `minSdk`, ...).
    ///
    /// Kept as a raw table here; the android crate owns the record shape.
    #[serde(default)]
    pub app: toml::Table,
}

/// General CLI configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GeneralConfig {
    /// Output format (text, json)
    #[serde(default = "default_format")]
    pub format: String,

    /// Colored output
    #[serde(default = "default_true")]
    pub color: bool,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            format: default_format(),
            color: true,
        }
    }
}

fn default_format() -> String {
    "text".to_string()
}

fn default_true() -> bool {
    true
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoggingConfig {
    /// Log filter used when `RUST_LOG` is unset
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Emit JSON lines on stderr instead of the compact format
    #[serde(default)]
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}

fn default_log_level() -> String {
    "warn".to_string()
}

/// Rendering configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct RenderConfig {
    /// Escape interpolated text for the target format (XML, Groovy strings).
    ///
    /// Off by default: values are interpolated verbatim.
    #[serde(default)]
    pub escape: bool,
}

/// Copy acknowledgment configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ClipboardConfig {
    /// Delay before the acknowledgment label resets
    #[serde(default = "default_ack_delay_ms")]
    pub ack_delay_ms: u64,

    /// Label shown while idle
    #[serde(default = "default_idle_label")]
    pub idle_label: String,

    /// Label shown right after a copy
    #[serde(default = "default_copied_label")]
    pub copied_label: String,
}

impl Default for ClipboardConfig {
    fn default() -> Self {
        Self {
            ack_delay_ms: default_ack_delay_ms(),
            idle_label: default_idle_label(),
            copied_label: default_copied_label(),
        }
    }
}

fn default_ack_delay_ms() -> u64 {
    2000
}

fn default_idle_label() -> String {
    "Copy".to_string()
}

fn default_copied_label() -> String {
    "Copied!".to_string()
}
