//! Interactive session controller
//!
//! A [`Session`] owns the single record being edited, the active tab and the
//! latest generated files. All mutation goes through [`Session::apply`];
//! nothing is shared or global. Presentation is left to the caller, which
//! reads the returned [`Reply`] and the session state.

use crate::fields::{Field, FieldValue, Tab};
use crate::record::ConfigurationRecord;
use crate::render::{render_with, ArtifactKind, RenderOptions, RenderedOutputSet};
use apkforge_core::error::{Error, Result};
use std::str::FromStr;

/// One line of session input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionCommand {
    /// Switch the active tab
    Tab(Tab),
    /// List tabs
    Tabs,
    /// List the fields of the active tab
    Fields,
    /// Show one field
    Get(Field),
    /// Update one field from text
    Set(Field, String),
    /// Flip a boolean field
    Toggle(Field),
    /// Restore defaults
    Reset,
    /// Render the current record
    Generate,
    /// Re-display the latest output, optionally a single artifact
    Show(Option<ArtifactKind>),
    /// Copy an artifact of the latest output
    Copy(ArtifactKind),
    /// List the commands
    Help,
    /// End the session
    Quit,
}

impl FromStr for SessionCommand {
    type Err = Error;

    fn from_str(line: &str) -> Result<Self> {
        let line = line.trim();
        let (verb, rest) = line
            .split_once(char::is_whitespace)
            .map_or((line, ""), |(verb, rest)| (verb, rest.trim()));

        let required = |what: &str| -> Result<&str> {
            if rest.is_empty() {
                Err(Error::invalid_input(format!("`{verb}` needs {what}")))
            } else {
                Ok(rest)
            }
        };

        match verb.to_ascii_lowercase().as_str() {
            "tab" => Ok(SessionCommand::Tab(required("a tab name")?.parse()?)),
            "tabs" => Ok(SessionCommand::Tabs),
            "fields" | "ls" => Ok(SessionCommand::Fields),
            "get" => Ok(SessionCommand::Get(required("a field name")?.parse()?)),
            "set" => {
                let args = required("a field name and a value")?;
                let (name, value) = args
                    .split_once(char::is_whitespace)
                    .map_or((args, ""), |(name, value)| (name, value.trim_start()));
                Ok(SessionCommand::Set(name.parse()?, value.to_string()))
            }
            "toggle" => Ok(SessionCommand::Toggle(required("a field name")?.parse()?)),
            "reset" => Ok(SessionCommand::Reset),
            "generate" | "gen" => Ok(SessionCommand::Generate),
            "show" if rest.is_empty() => Ok(SessionCommand::Show(None)),
            "show" => Ok(SessionCommand::Show(Some(rest.parse()?))),
            "copy" => Ok(SessionCommand::Copy(required("an artifact name")?.parse()?)),
            "help" | "?" => Ok(SessionCommand::Help),
            "quit" | "exit" => Ok(SessionCommand::Quit),
            _ => Err(Error::unknown_command(verb)),
        }
    }
}

/// Outcome of a command, for the presenter to display
#[derive(Debug, Clone, PartialEq, Eq)]
#[allow(missing_docs)]
pub enum Reply {
    TabChanged(Tab),
    Tabs { active: Tab },
    Fields { tab: Tab, values: Vec<(Field, FieldValue)> },
    Value(Field, FieldValue),
    /// `changed` is false when the field already held the value
    Updated { field: Field, value: FieldValue, changed: bool },
    Reset,
    /// New output is available from [`Session::outputs`]
    Generated,
    /// Artifacts to display, in output order
    Show(Vec<ArtifactKind>),
    /// The artifact exists and may be copied
    Copy(ArtifactKind),
    Help,
    Quit,
}

/// Top-level controller for one editing session
#[derive(Debug, Clone)]
pub struct Session {
    record: ConfigurationRecord,
    initial: ConfigurationRecord,
    active_tab: Tab,
    outputs: Option<RenderedOutputSet>,
    options: RenderOptions,
}

impl Session {
    /// Start a session; `reset` returns to `record`
    #[must_use]
    pub fn new(record: ConfigurationRecord, options: RenderOptions) -> Self {
        Self {
            initial: record.clone(),
            record,
            active_tab: Tab::default(),
            outputs: None,
            options,
        }
    }

    /// The record being edited
    #[must_use]
    pub fn record(&self) -> &ConfigurationRecord {
        &self.record
    }

    /// Tab whose fields `fields` lists
    #[must_use]
    pub fn active_tab(&self) -> Tab {
        self.active_tab
    }

    /// Files from the latest `generate`, if any
    #[must_use]
    pub fn outputs(&self) -> Option<&RenderedOutputSet> {
        self.outputs.as_ref()
    }

    /// Content of one artifact of the latest output
    pub fn artifact(&self, kind: ArtifactKind) -> Result<&str> {
        self.outputs
            .as_ref()
            .map(|outputs| outputs.get(kind))
            .ok_or_else(Error::nothing_generated)
    }

    /// Apply one command
    ///
    /// Editing never touches the displayed output: it is only replaced by the
    /// next `generate`.
    pub fn apply(&mut self, command: SessionCommand) -> Result<Reply> {
        match command {
            SessionCommand::Tab(tab) => {
                self.active_tab = tab;
                Ok(Reply::TabChanged(tab))
            }
            SessionCommand::Tabs => Ok(Reply::Tabs {
                active: self.active_tab,
            }),
            SessionCommand::Fields => Ok(Reply::Fields {
                tab: self.active_tab,
                values: self
                    .active_tab
                    .fields()
                    .map(|field| (field, self.record.get(field)))
                    .collect(),
            }),
            SessionCommand::Get(field) => Ok(Reply::Value(field, self.record.get(field))),
            SessionCommand::Set(field, raw) => {
                let before = self.record.get(field);
                self.record.set(field, &raw)?;
                let value = self.record.get(field);
                Ok(Reply::Updated {
                    field,
                    changed: value != before,
                    value,
                })
            }
            SessionCommand::Toggle(field) => {
                self.record.toggle(field)?;
                Ok(Reply::Updated {
                    field,
                    value: self.record.get(field),
                    changed: true,
                })
            }
            SessionCommand::Reset => {
                self.record = self.initial.clone();
                Ok(Reply::Reset)
            }
            SessionCommand::Generate => {
                self.outputs = Some(render_with(&self.record, self.options));
                Ok(Reply::Generated)
            }
            SessionCommand::Show(kind) => {
                if self.outputs.is_none() {
                    return Err(Error::nothing_generated());
                }
                Ok(Reply::Show(kind.map_or_else(|| ArtifactKind::ALL.to_vec(), |k| vec![k])))
            }
            SessionCommand::Copy(kind) => {
                self.artifact(kind)?;
                Ok(Reply::Copy(kind))
            }
            SessionCommand::Help => Ok(Reply::Help),
            SessionCommand::Quit => Ok(Reply::Quit),
        }
    }
}

/// Help text listing the session commands
pub const HELP: &str = "\
tab <basic|advanced|design|features|build>  select the active tab
tabs                                        list tabs
fields                                      list fields of the active tab
get <field>                                 show a field
set <field> <value...>                      update a field
toggle <field>                              flip a boolean field
reset                                       restore the starting values
generate                                    render the project files
show [manifest|gradle]                      display the latest files
copy <manifest|gradle>                      copy a file to the clipboard
help                                        this list
quit                                        leave the session";

#[cfg(test)]
mod tests {
    use super::*;
    use apkforge_core::error::ErrorCode;

    fn session() -> Session {
        Session::new(ConfigurationRecord::default(), RenderOptions::default())
    }

    fn run(session: &mut Session, line: &str) -> Result<Reply> {
        session.apply(line.parse()?)
    }

    #[test]
    fn test_parse_commands() {
        assert_eq!("tab features".parse::<SessionCommand>().unwrap(), SessionCommand::Tab(Tab::Features));
        assert_eq!("GEN".parse::<SessionCommand>().unwrap(), SessionCommand::Generate);
        assert_eq!(
            "set appName  My  Spaced App ".parse::<SessionCommand>().unwrap(),
            SessionCommand::Set(Field::AppName, "My  Spaced App".to_string())
        );
        assert_eq!(
            "show gradle".parse::<SessionCommand>().unwrap(),
            SessionCommand::Show(Some(ArtifactKind::BuildScript))
        );
        assert_eq!("show".parse::<SessionCommand>().unwrap(), SessionCommand::Show(None));
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!("jump".parse::<SessionCommand>().unwrap_err().code, ErrorCode::UnknownCommand);
        assert_eq!("get".parse::<SessionCommand>().unwrap_err().code, ErrorCode::InvalidInput);
        assert_eq!("get nope".parse::<SessionCommand>().unwrap_err().code, ErrorCode::UnknownField);
        assert_eq!("tab colors".parse::<SessionCommand>().unwrap_err().code, ErrorCode::UnknownTab);
        assert_eq!("copy apk".parse::<SessionCommand>().unwrap_err().code, ErrorCode::UnknownArtifact);
    }

    #[test]
    fn test_set_with_empty_value_clears_text() {
        let mut s = session();
        run(&mut s, "set appDescription").unwrap();
        assert_eq!(s.record().app_description, "");
    }

    #[test]
    fn test_tabs_and_fields() {
        let mut s = session();
        assert_eq!(s.active_tab(), Tab::Basic);

        assert_eq!(run(&mut s, "tab build").unwrap(), Reply::TabChanged(Tab::Build));
        match run(&mut s, "fields").unwrap() {
            Reply::Fields { tab, values } => {
                assert_eq!(tab, Tab::Build);
                assert_eq!(values.len(), 7);
                assert_eq!(values[0], (Field::BuildType, FieldValue::Choice("debug".into())));
            }
            other => panic!("unexpected reply: {other:?}"),
        }
    }

    #[test]
    fn test_set_reports_change() {
        let mut s = session();
        let reply = run(&mut s, "set versionCode 3").unwrap();
        assert_eq!(
            reply,
            Reply::Updated {
                field: Field::VersionCode,
                value: FieldValue::Integer(3),
                changed: true
            }
        );

        let reply = run(&mut s, "set versionCode 3").unwrap();
        assert!(matches!(reply, Reply::Updated { changed: false, .. }));
    }

    #[test]
    fn test_failed_set_leaves_record_untouched() {
        let mut s = session();
        assert!(run(&mut s, "set versionCode zero").is_err());
        assert_eq!(s.record(), &ConfigurationRecord::default());
    }

    #[test]
    fn test_output_only_changes_on_generate() {
        let mut s = session();
        assert!(s.outputs().is_none());
        assert_eq!(run(&mut s, "show").unwrap_err().code, ErrorCode::NothingGenerated);
        assert!(run(&mut s, "copy manifest").is_err());

        run(&mut s, "generate").unwrap();
        let first = s.outputs().cloned().unwrap();

        run(&mut s, "toggle cameraPermission").unwrap();
        assert_eq!(s.outputs(), Some(&first));

        run(&mut s, "generate").unwrap();
        assert!(s.artifact(ArtifactKind::Manifest).unwrap().contains("android.permission.CAMERA"));
        assert_eq!(run(&mut s, "copy manifest").unwrap(), Reply::Copy(ArtifactKind::Manifest));
    }

    #[test]
    fn test_reset_restores_starting_record() {
        let start = ConfigurationRecord::default().with(Field::AppName, "Start").unwrap();
        let mut s = Session::new(start.clone(), RenderOptions::default());
        run(&mut s, "tab design").unwrap();
        run(&mut s, "set appName Changed").unwrap();
        run(&mut s, "reset").unwrap();
        assert_eq!(s.record(), &start);
        assert_eq!(s.active_tab(), Tab::Design);
    }

    #[test]
    fn test_escape_option_applies_to_generate() {
        let mut s = Session::new(ConfigurationRecord::default(), RenderOptions { escape: true });
        run(&mut s, "set appName A & B").unwrap();
        run(&mut s, "generate").unwrap();
        assert!(s.artifact(ArtifactKind::Manifest).unwrap().contains("A &amp; B"));
    }
}
