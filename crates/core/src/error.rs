//! Error handling with context and recovery suggestions
//!
//! This module provides structured error types with:
//! - Detailed error context
//! - Recovery suggestions
//! - Error codes for programmatic handling
//! - Serializable error reports
//!
//! Rendering never produces an error. Everything here belongs to the outer
//! surfaces: config files, text-driven field updates, and the clipboard.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Error codes for programmatic error handling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[allow(missing_docs)]
pub enum ErrorCode {
    // General errors (1xxx)
    Unknown = 1000,
    Internal = 1001,

    // IO errors (2xxx)
    IoError = 2000,
    FileNotFound = 2001,
    PermissionDenied = 2002,

    // Configuration errors (3xxx)
    ConfigError = 3000,
    ConfigNotFound = 3001,
    ConfigParseError = 3002,
    InvalidConfigValue = 3004,

    // Input errors (6xxx)
    InvalidInput = 6000,
    UnknownField = 6001,
    InvalidFieldValue = 6002,
    UnknownArtifact = 6003,
    UnknownTab = 6004,
    UnknownCommand = 6005,
    NothingGenerated = 6006,

    // Platform errors (8xxx)
    PlatformError = 8000,
    ClipboardError = 8001,
}

impl ErrorCode {
    /// Get the numeric code
    #[must_use]
    pub fn code(&self) -> u32 {
        *self as u32
    }

    /// Get a human-readable category
    #[must_use]
    pub fn category(&self) -> &'static str {
        match self.code() / 1000 {
            1 => "General",
            2 => "IO",
            3 => "Configuration",
            6 => "Input",
            8 => "Platform",
            _ => "Unknown",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "E{:04}", self.code())
    }
}

/// Main error type with rich context
#[derive(Error, Debug)]
pub struct Error {
    /// Error code for programmatic handling
    pub code: ErrorCode,
    /// Human-readable message
    pub message: String,
    /// Additional context
    pub context: Option<String>,
    /// Recovery suggestion
    pub suggestion: Option<String>,
    /// Source error
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)?;
        if let Some(ctx) = &self.context {
            write!(f, "\n  Context: {ctx}")?;
        }
        if let Some(suggestion) = &self.suggestion {
            write!(f, "\n  Suggestion: {suggestion}")?;
        }
        Ok(())
    }
}

impl Error {
    /// Create a new error
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            context: None,
            suggestion: None,
            source: None,
        }
    }

    /// Add context to the error
    #[must_use]
    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }

    /// Add a recovery suggestion
    #[must_use]
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    /// Add a source error
    #[must_use]
    pub fn with_source(mut self, source: impl std::error::Error + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Convert to a serializable report
    #[must_use]
    pub fn to_report(&self) -> ErrorReport {
        ErrorReport {
            code: self.code,
            code_str: self.code.to_string(),
            category: self.code.category().to_string(),
            message: self.message.clone(),
            context: self.context.clone(),
            suggestion: self.suggestion.clone(),
            source: self.source.as_ref().map(ToString::to_string),
        }
    }

    /// Map the error onto a process exit code
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self.code.code() / 1000 {
            3 => exit_codes::CONFIG_ERROR,
            6 => exit_codes::USAGE_ERROR,
            _ => exit_codes::FAILURE,
        }
    }

    // Convenience constructors

    /// Generic configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ConfigError, message)
    }

    /// Explicit config path does not exist
    pub fn config_not_found(path: impl AsRef<std::path::Path>) -> Self {
        Self::new(
            ErrorCode::ConfigNotFound,
            format!("Configuration file not found: {}", path.as_ref().display()),
        )
        .with_suggestion("Create an .apkforge.toml file or use --config to specify a path")
    }

    /// Malformed command or assignment
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidInput, message)
    }

    /// No field with this name
    pub fn unknown_field(name: &str) -> Self {
        Self::new(ErrorCode::UnknownField, format!("Unknown field: {name}"))
            .with_suggestion("Run `apkforge fields` to list the available fields")
    }

    /// Value rejected by the field
    pub fn invalid_field_value(field: &str, value: &str, expected: &str) -> Self {
        Self::new(
            ErrorCode::InvalidFieldValue,
            format!("Invalid value for {field}: {value:?}"),
        )
        .with_suggestion(format!("Expected {expected}"))
    }

    /// Not `manifest` or `gradle`
    pub fn unknown_artifact(name: &str) -> Self {
        Self::new(ErrorCode::UnknownArtifact, format!("Unknown artifact: {name}"))
            .with_suggestion("Use `manifest` or `gradle`")
    }

    /// No tab with this id
    pub fn unknown_tab(name: &str) -> Self {
        Self::new(ErrorCode::UnknownTab, format!("Unknown tab: {name}"))
            .with_suggestion("Use one of: basic, advanced, design, features, build")
    }

    /// Unrecognized session command
    pub fn unknown_command(name: &str) -> Self {
        Self::new(ErrorCode::UnknownCommand, format!("Unknown command: {name}"))
            .with_suggestion("Type `help` to list the session commands")
    }

    /// Show or copy before the first `generate`
    pub fn nothing_generated() -> Self {
        Self::new(ErrorCode::NothingGenerated, "No files generated yet")
            .with_suggestion("Run `generate` first")
    }

    /// Clipboard transport failure
    pub fn clipboard(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ClipboardError, message)
    }
}

/// Serializable error report for logging and JSON output
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorReport {
    /// Error code
    pub code: ErrorCode,
    /// Code formatted as `E6001`
    pub code_str: String,
    /// Code family name
    pub category: String,
    /// Human-readable message
    pub message: String,
    /// Additional context
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
    /// Recovery suggestion
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
    /// Source error message
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// Exit codes for CLI commands
pub mod exit_codes {
    /// Command completed
    pub const SUCCESS: i32 = 0;
    /// Any other failure
    pub const FAILURE: i32 = 1;
    /// Bad field, artifact, tab or command name, or a rejected value
    pub const USAGE_ERROR: i32 = 2;
    /// Configuration file missing or invalid
    pub const CONFIG_ERROR: i32 = 3;
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        let code = match err.kind() {
            std::io::ErrorKind::NotFound => ErrorCode::FileNotFound,
            std::io::ErrorKind::PermissionDenied => ErrorCode::PermissionDenied,
            _ => ErrorCode::IoError,
        };
        Error::new(code, err.to_string()).with_source(err)
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::new(ErrorCode::ConfigParseError, format!("TOML parse error: {err}"))
            .with_source(err)
    }
}

/// Extension trait for adding context to Results
pub trait ResultExt<T> {
    /// Attach context to the error, if any
    fn context(self, context: impl Into<String>) -> Result<T>;
    /// Attach a recovery suggestion to the error, if any
    fn with_suggestion(self, suggestion: impl Into<String>) -> Result<T>;
}

impl<T> ResultExt<T> for Result<T> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| e.with_context(context))
    }

    fn with_suggestion(self, suggestion: impl Into<String>) -> Result<T> {
        self.map_err(|e| e.with_suggestion(suggestion))
    }
}
