//! Terminal output utilities
//!
//! Provides consistent formatting for CLI output. Styling goes through
//! `if_supports_color`, so `owo_colors::set_override(false)` and non-terminal
//! streams both produce plain text.

use owo_colors::{OwoColorize, Stream};

/// Status message helpers
pub struct Status;

impl Status {
    /// Print a success message
    pub fn success(message: &str) {
        println!("{} {}", "✓".if_supports_color(Stream::Stdout, |t| t.green()), message);
    }

    /// Print an error message
    pub fn error(message: &str) {
        eprintln!("{} {}", "✗".if_supports_color(Stream::Stderr, |t| t.red()), message);
    }

    /// Print a warning message
    pub fn warning(message: &str) {
        eprintln!("{} {}", "⚠".if_supports_color(Stream::Stderr, |t| t.yellow()), message);
    }

    /// Print an info message
    pub fn info(message: &str) {
        println!("{} {}", "ℹ".if_supports_color(Stream::Stdout, |t| t.blue()), message);
    }

    /// Print a header
    pub fn header(message: &str) {
        println!();
        println!("{}", message.if_supports_color(Stream::Stdout, |t| t.bold()));
        println!("{}", "─".repeat(message.chars().count()));
    }

    /// Print a subheader
    pub fn subheader(message: &str) {
        println!();
        println!("{}", message.if_supports_color(Stream::Stdout, |t| t.dimmed()));
    }
}

/// Format a generated file for display: a titled rule followed by the content
pub fn artifact_block(name: &str, content: &str) -> String {
    let title = format!("── {name} ");
    let rule = "─".repeat(60usize.saturating_sub(title.chars().count()));
    format!(
        "{}{}\n{}",
        title.if_supports_color(Stream::Stdout, |t| t.bold()),
        rule.if_supports_color(Stream::Stdout, |t| t.dimmed()),
        content
    )
}

/// Format a `name  value` row with the name padded to `width`
pub fn field_row(name: &str, value: &str, width: usize) -> String {
    format!(
        "  {}  {}",
        format!("{name:<width$}").if_supports_color(Stream::Stdout, |t| t.cyan()),
        value
    )
}

/// Format a count with singular/plural
pub fn format_count(count: usize, singular: &str, plural: &str) -> String {
    if count == 1 {
        format!("{} {}", count, singular)
    } else {
        format!("{} {}", count, plural)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_artifact_block_keeps_content_verbatim() {
        let content = "<manifest>\n    \n</manifest>";
        let block = artifact_block("AndroidManifest.xml", content);
        assert!(block.contains("AndroidManifest.xml"));
        assert!(block.ends_with(content));
        assert_eq!(block.lines().count(), content.lines().count() + 1);
    }

    #[test]
    fn test_field_row_contains_name_and_value() {
        let row = field_row("appName", "My Awesome App", 20);
        assert!(row.contains("appName"));
        assert!(row.ends_with("My Awesome App"));
    }

    #[test]
    fn test_format_count_singular() {
        assert_eq!(format_count(1, "field", "fields"), "1 field");
    }

    #[test]
    fn test_format_count_plural() {
        assert_eq!(format_count(49, "field", "fields"), "49 fields");
    }
}
