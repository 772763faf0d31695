//! Interactive editing session
//!
//! Reads one command per line from stdin. Copy acknowledgments reset on a
//! timer; the resets come back through a channel polled by the same loop, so
//! state is only ever touched from here.

use super::{copy_artifact, load_record, render_options};
use crate::commands::fields::describe;
use apkforge_android::fields::Tab;
use apkforge_android::render::ArtifactKind;
use apkforge_android::session::{Reply, Session, SessionCommand, HELP};
use apkforge_cli::ack::{schedule_reset, CopyAcknowledgment, PendingReset};
use apkforge_cli::output::{artifact_block, field_row, Status};
use apkforge_core::config::Config;
use std::io::{IsTerminal, Write};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;

pub fn run(config: &Config, set: &[String], escape: bool) -> anyhow::Result<()> {
    let record = load_record(config, set)?;
    let session = Session::new(record, render_options(config, escape));
    let ack = CopyAcknowledgment::from_config(&config.schema.clipboard);

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    runtime.block_on(event_loop(session, ack))
}

async fn event_loop(mut session: Session, mut ack: CopyAcknowledgment) -> anyhow::Result<()> {
    let interactive = std::io::stdin().is_terminal();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let (reset_tx, mut reset_rx) = mpsc::unbounded_channel::<PendingReset>();

    tracing::debug!(session_id = %apkforge_telemetry::session_id(), "Session started");
    if interactive {
        Status::info("Type `help` for commands, `quit` to leave");
        prompt(&session, &ack);
    }

    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line? else { break };
                if line.trim().is_empty() {
                    if interactive {
                        prompt(&session, &ack);
                    }
                    continue;
                }

                match handle_line(&mut session, &mut ack, &line) {
                    Step::Continue => {}
                    Step::Copied(pending) => {
                        schedule_reset(pending, reset_tx.clone());
                    }
                    Step::Quit => break,
                }
                if interactive {
                    prompt(&session, &ack);
                }
            }
            Some(pending) = reset_rx.recv() => {
                if ack.reset(pending) && interactive {
                    println!();
                    prompt(&session, &ack);
                }
            }
        }
    }

    tracing::debug!("Session ended");
    Ok(())
}

enum Step {
    Continue,
    /// A copy succeeded; its reset still has to be scheduled
    Copied(PendingReset),
    Quit,
}

fn handle_line(session: &mut Session, ack: &mut CopyAcknowledgment, line: &str) -> Step {
    let reply = match line.parse::<SessionCommand>().and_then(|cmd| session.apply(cmd)) {
        Ok(reply) => reply,
        Err(err) => {
            Status::error(&err.message);
            if let Some(suggestion) = &err.suggestion {
                eprintln!("  {suggestion}");
            }
            return Step::Continue;
        }
    };

    match reply {
        Reply::Quit => return Step::Quit,
        Reply::Help => println!("{HELP}"),
        Reply::TabChanged(tab) => Status::info(&format!("Active tab: {}", tab.label())),
        Reply::Tabs { active } => {
            for tab in Tab::ALL {
                let marker = if tab == active { "*" } else { " " };
                println!("{marker} {:<9} {}", tab.id(), tab.label());
            }
        }
        Reply::Fields { tab, values } => {
            Status::header(tab.label());
            let width = values.iter().map(|(f, _)| f.name().len()).max().unwrap_or(0);
            for (field, _) in &values {
                println!("{}", field_row(field.name(), &describe(session.record(), *field), width));
            }
        }
        Reply::Value(_, value) => println!("{value}"),
        Reply::Updated { field, value, changed } => {
            if changed {
                Status::success(&format!("{field} = {value}"));
            } else {
                Status::info(&format!("{field} unchanged"));
            }
        }
        Reply::Reset => Status::success("Restored starting values"),
        Reply::Generated => show(session, &ArtifactKind::ALL),
        Reply::Show(kinds) => show(session, &kinds),
        Reply::Copy(kind) => {
            if let Ok(content) = session.artifact(kind) {
                if let Some(pending) = copy_artifact(kind.file_name(), content, ack, true) {
                    return Step::Copied(pending);
                }
            }
        }
    }

    Step::Continue
}

fn show(session: &Session, kinds: &[ArtifactKind]) {
    let Some(outputs) = session.outputs() else {
        return;
    };
    for kind in kinds {
        println!("{}", artifact_block(kind.file_name(), outputs.get(*kind)));
        println!();
    }
}

fn prompt(session: &Session, ack: &CopyAcknowledgment) {
    let mut stdout = std::io::stdout();
    let copy = if session.outputs().is_some() {
        format!(" [{}]", ack.label())
    } else {
        String::new()
    };
    let _ = write!(stdout, "apkforge ({}){copy}> ", session.active_tab().id());
    let _ = stdout.flush();
}
