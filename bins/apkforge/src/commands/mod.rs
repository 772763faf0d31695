//! Subcommand implementations

pub mod defaults;
pub mod fields;
pub mod generate;
pub mod session;

use apkforge_android::record::ConfigurationRecord;
use apkforge_android::render::RenderOptions;
use apkforge_cli::ack::{CopyAcknowledgment, PendingReset};
use apkforge_cli::clipboard::Clipboard;
use apkforge_cli::output::Status;
use apkforge_core::config::Config;
use apkforge_core::error::{exit_codes, Error, ErrorCode, ResultExt};
use clap::ValueEnum;

/// How results are written to stdout
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Parse the `general.format` config value
pub fn parse_format(value: &str) -> apkforge_core::Result<OutputFormat> {
    OutputFormat::from_str(value, true).map_err(|_| {
        Error::new(
            ErrorCode::InvalidConfigValue,
            format!("Invalid general.format: {value:?}"),
        )
        .with_suggestion("Use \"text\" or \"json\"")
    })
}

/// The starting record: defaults, then the `[app]` table, then `--set` overrides
pub fn load_record(config: &Config, set: &[String]) -> apkforge_core::Result<ConfigurationRecord> {
    let origin = config
        .path
        .as_ref()
        .map_or_else(|| "configuration".to_string(), |path| path.display().to_string());
    let mut record =
        ConfigurationRecord::from_table(config.schema.app.clone()).context(format!("While reading {origin}"))?;
    record
        .apply_assignments(set.iter().map(String::as_str))
        .context("While applying --set overrides")?;
    Ok(record)
}

/// Render options from the config, with `--escape` forcing escaping on
pub fn render_options(config: &Config, escape: bool) -> RenderOptions {
    RenderOptions {
        escape: escape || config.schema.render.escape,
    }
}

/// Copy `content` and acknowledge it; failures only warn
pub fn copy_artifact(
    name: &str,
    content: &str,
    ack: &mut CopyAcknowledgment,
    announce: bool,
) -> Option<PendingReset> {
    match Clipboard::copy(content) {
        Ok(transport) => {
            let pending = ack.acknowledge();
            tracing::info!(artifact = name, ?transport, bytes = content.len(), "Copied to clipboard");
            if announce {
                Status::success(&format!("{} {}", ack.label(), name));
            }
            Some(pending)
        }
        Err(err) => {
            tracing::warn!(artifact = name, error = %err, "Copy failed");
            Status::warning(&format!("Could not copy {name}: {err}"));
            None
        }
    }
}

/// Exit code for an error surfaced from a command
pub fn exit_code(err: &anyhow::Error) -> i32 {
    err.downcast_ref::<Error>()
        .map_or(exit_codes::FAILURE, Error::exit_code)
}

/// Print an error to stderr in the selected format
pub fn report_error(err: &anyhow::Error, format: OutputFormat) {
    match (format, err.downcast_ref::<Error>()) {
        (OutputFormat::Json, Some(err)) => {
            let report = serde_json::json!({ "error": err.to_report() });
            eprintln!("{report}");
        }
        (OutputFormat::Json, None) => {
            let report = serde_json::json!({ "error": { "message": format!("{err:#}") } });
            eprintln!("{report}");
        }
        (OutputFormat::Text, Some(err)) => {
            Status::error(&err.message);
            if let Some(context) = &err.context {
                eprintln!("  {context}");
            }
            if let Some(suggestion) = &err.suggestion {
                eprintln!("  {suggestion}");
            }
        }
        (OutputFormat::Text, None) => Status::error(&format!("{err:#}")),
    }
}
