//! apkforge CLI
//!
//! Generates `AndroidManifest.xml` and `build.gradle (app)` for a WebView
//! wrapper app from a flat set of fields.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;

mod commands;

use apkforge_core::config::Config;
use apkforge_telemetry::TelemetryConfig;
use commands::OutputFormat;

/// Android project file generator
#[derive(Parser)]
#[command(name = "apkforge")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Config file path
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    /// Output format; defaults to the config file's `general.format`
    #[arg(long, global = true, value_enum)]
    format: Option<OutputFormat>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render the project files once and print them
    Generate {
        /// Override a field (repeatable), e.g. --set appName="Trail Log"
        #[arg(long = "set", value_name = "FIELD=VALUE")]
        set: Vec<String>,

        /// Print only one artifact: manifest or gradle
        #[arg(long)]
        artifact: Option<String>,

        /// Copy an artifact to the clipboard: manifest or gradle
        #[arg(long)]
        copy: Option<String>,

        /// Escape interpolated text for XML and Groovy
        #[arg(long)]
        escape: bool,
    },

    /// List fields with their current values
    Fields {
        /// Only list one tab: basic, advanced, design, features, build
        #[arg(long)]
        tab: Option<String>,

        /// Override a field before listing (repeatable)
        #[arg(long = "set", value_name = "FIELD=VALUE")]
        set: Vec<String>,
    },

    /// Print the default record as an [app] table
    Defaults,

    /// Edit fields interactively and generate on demand
    Session {
        /// Override a field before the session starts (repeatable)
        #[arg(long = "set", value_name = "FIELD=VALUE")]
        set: Vec<String>,

        /// Escape interpolated text for XML and Groovy
        #[arg(long)]
        escape: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if cli.no_color {
        owo_colors::set_override(false);
    }

    let config = match Config::load(cli.config.as_deref()) {
        Ok(config) => config,
        Err(err) => {
            let code = err.exit_code();
            commands::report_error(&err.into(), cli.format.unwrap_or_default());
            return exit(code);
        }
    };

    let color = !cli.no_color && config.schema.general.color;
    if !color {
        owo_colors::set_override(false);
    }

    let format = match cli.format {
        Some(format) => format,
        None => match commands::parse_format(&config.schema.general.format) {
            Ok(format) => format,
            Err(err) => {
                let code = err.exit_code();
                commands::report_error(&err.into(), OutputFormat::Text);
                return exit(code);
            }
        },
    };

    let telemetry = TelemetryConfig::from_verbosity(&config.schema.logging.level, cli.verbose, cli.quiet)
        .with_json(config.schema.logging.json)
        .with_ansi(color);
    if let Err(err) = apkforge_telemetry::init_with_config(telemetry) {
        commands::report_error(&err, format);
        return exit(apkforge_core::error::exit_codes::FAILURE);
    }
    tracing::debug!(path = ?config.path, "Using configuration");

    let result = match cli.command {
        Commands::Generate {
            set,
            artifact,
            copy,
            escape,
        } => commands::generate::run(
            &config,
            commands::generate::Args {
                set,
                artifact,
                copy,
                escape,
            },
            format,
        ),
        Commands::Fields { tab, set } => commands::fields::run(&config, tab.as_deref(), &set, format),
        Commands::Defaults => commands::defaults::run(format),
        Commands::Session { set, escape } => commands::session::run(&config, &set, escape),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            commands::report_error(&err, format);
            exit(commands::exit_code(&err))
        }
    }
}

fn exit(code: i32) -> ExitCode {
    ExitCode::from(u8::try_from(code).unwrap_or(1))
}
