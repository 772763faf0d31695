//! One-shot rendering

use super::{copy_artifact, load_record, render_options, OutputFormat};
use apkforge_android::render::{render_with, ArtifactKind};
use apkforge_cli::ack::CopyAcknowledgment;
use apkforge_cli::output::artifact_block;
use apkforge_core::config::Config;
use apkforge_telemetry::Timer;

pub struct Args {
    pub set: Vec<String>,
    pub artifact: Option<String>,
    pub copy: Option<String>,
    pub escape: bool,
}

pub fn run(config: &Config, args: Args, format: OutputFormat) -> anyhow::Result<()> {
    let selected = match args.artifact.as_deref() {
        Some(name) => vec![name.parse::<ArtifactKind>()?],
        None => ArtifactKind::ALL.to_vec(),
    };
    let copy = args.copy.as_deref().map(str::parse::<ArtifactKind>).transpose()?;
    let record = load_record(config, &args.set)?;

    let timer = Timer::start("render");
    let outputs = render_with(&record, render_options(config, args.escape));
    timer.stop();

    match format {
        OutputFormat::Text => {
            for (i, kind) in selected.iter().enumerate() {
                if i > 0 {
                    println!();
                }
                println!("{}", artifact_block(kind.file_name(), outputs.get(*kind)));
            }
        }
        OutputFormat::Json if selected.len() == 1 => {
            let kind = selected[0];
            let json = serde_json::json!({ kind.file_name(): outputs.get(kind) });
            println!("{}", serde_json::to_string_pretty(&json)?);
        }
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&outputs)?),
    }

    if let Some(kind) = copy {
        let mut ack = CopyAcknowledgment::from_config(&config.schema.clipboard);
        copy_artifact(
            kind.file_name(),
            outputs.get(kind),
            &mut ack,
            format == OutputFormat::Text,
        );
    }

    Ok(())
}
