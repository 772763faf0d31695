//! Optional escaping of interpolated text
//!
//! Only used when `render.escape` is enabled; by default values are
//! interpolated verbatim.

use std::borrow::Cow;

/// Escape text for an XML attribute value
#[must_use]
pub fn xml_attribute(value: &str) -> Cow<'_, str> {
    if !value.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(value);
    }

    let mut escaped = String::with_capacity(value.len() + 8);
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(c),
        }
    }
    Cow::Owned(escaped)
}

/// Escape text for a double-quoted Groovy string
///
/// `$` is escaped too, otherwise Groovy would treat it as interpolation.
#[must_use]
pub fn groovy_string(value: &str) -> Cow<'_, str> {
    if !value.contains(['\\', '"', '$', '\n', '\r']) {
        return Cow::Borrowed(value);
    }

    let mut escaped = String::with_capacity(value.len() + 8);
    for c in value.chars() {
        match c {
            '\\' => escaped.push_str("\\\\"),
            '"' => escaped.push_str("\\\""),
            '$' => escaped.push_str("\\$"),
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            _ => escaped.push(c),
        }
    }
    Cow::Owned(escaped)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text_is_borrowed() {
        assert!(matches!(xml_attribute("My Awesome App"), Cow::Borrowed(_)));
        assert!(matches!(groovy_string("1.0.0"), Cow::Borrowed(_)));
    }

    #[test]
    fn test_xml_attribute() {
        assert_eq!(
            xml_attribute(r#"Tom & Jerry's "<App>""#),
            "Tom &amp; Jerry&apos;s &quot;&lt;App&gt;&quot;"
        );
    }

    #[test]
    fn test_groovy_string() {
        assert_eq!(groovy_string(r#"1.0 "beta" $x \"#), r#"1.0 \"beta\" \$x \\"#);
        assert_eq!(groovy_string("a\nb"), "a\\nb");
    }
}
