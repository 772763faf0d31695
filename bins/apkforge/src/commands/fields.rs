//! Field listing

use super::{load_record, OutputFormat};
use apkforge_android::fields::{Field, FieldKind, FieldValue, Tab};
use apkforge_android::record::ConfigurationRecord;
use apkforge_cli::output::{field_row, format_count, Status};
use apkforge_core::config::Config;

pub fn run(config: &Config, tab: Option<&str>, set: &[String], format: OutputFormat) -> anyhow::Result<()> {
    let tabs = match tab {
        Some(name) => vec![name.parse::<Tab>()?],
        None => Tab::ALL.to_vec(),
    };
    let record = load_record(config, set)?;

    match format {
        OutputFormat::Text => print_text(&record, &tabs),
        OutputFormat::Json => {
            let entries: Vec<_> = tabs
                .iter()
                .flat_map(|tab| tab.fields())
                .map(|field| field_json(&record, field))
                .collect();
            println!("{}", serde_json::to_string_pretty(&entries)?);
        }
    }

    Ok(())
}

fn print_text(record: &ConfigurationRecord, tabs: &[Tab]) {
    let mut total = 0;
    for tab in tabs {
        Status::header(&format!("{} ({})", tab.label(), tab.id()));
        let fields: Vec<_> = tab.fields().collect();
        let width = fields.iter().map(|f| f.name().len()).max().unwrap_or(0);
        for field in &fields {
            println!("{}", field_row(field.name(), &describe(record, *field), width));
        }
        total += fields.len();
    }
    println!();
    println!("{}", format_count(total, "field", "fields"));
}

/// Value plus its display label and the other allowed choices
pub fn describe(record: &ConfigurationRecord, field: Field) -> String {
    let value = record.get(field);
    match (field.kind(), &value) {
        (FieldKind::Choice(choices), FieldValue::Choice(current)) => {
            let label = choice_label(choices, current).unwrap_or("custom");
            let allowed: Vec<_> = choices.iter().map(|(v, _)| *v).collect();
            format!("{value} ({label}) [{}]", allowed.join("|"))
        }
        _ => value.to_string(),
    }
}

fn choice_label(choices: &'static [(&'static str, &'static str)], value: &str) -> Option<&'static str> {
    choices.iter().find(|(v, _)| *v == value).map(|(_, label)| *label)
}

fn field_json(record: &ConfigurationRecord, field: Field) -> serde_json::Value {
    let mut entry = serde_json::json!({
        "field": field.name(),
        "tab": field.tab(),
        "label": field.label(),
        "value": record.get(field),
    });
    if let FieldKind::Choice(choices) = field.kind() {
        entry["choices"] = choices
            .iter()
            .map(|(value, label)| serde_json::json!({ "value": value, "label": label }))
            .collect();
    }
    entry
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_describe_choice_shows_label() {
        let record = ConfigurationRecord::default();
        let text = describe(&record, Field::TargetSdk);
        assert!(text.starts_with("34 (Android 14 (API 34))"));
        assert!(text.contains("[34|33|32|31|30]"));
    }

    #[test]
    fn test_describe_unknown_choice() {
        let record = ConfigurationRecord::default()
            .with(Field::LaunchMode, "singleInstancePerTask")
            .unwrap();
        assert!(describe(&record, Field::LaunchMode).starts_with("singleInstancePerTask (custom)"));
    }

    #[test]
    fn test_field_json_lists_choices() {
        let entry = field_json(&ConfigurationRecord::default(), Field::MinSdk);
        assert_eq!(entry["field"], "minSdk");
        assert_eq!(entry["tab"], "advanced");
        assert_eq!(entry["value"], "21");
        assert_eq!(entry["choices"][0]["value"], "21");
    }

    #[test]
    fn test_field_json_plain_field() {
        let entry = field_json(&ConfigurationRecord::default(), Field::VersionCode);
        assert_eq!(entry["value"], 1);
        assert!(entry.get("choices").is_none());
    }
}
