//! Declarative line templates
//!
//! A template is an ordered list of lines. Each line is either fixed text,
//! text computed from the context, or a conditional line: a predicate paired
//! with the text emitted when it holds.
//!
//! An omitted conditional still occupies its line. Its indentation (and any
//! trailer, such as the `>` closing a tag) is kept, so the surrounding layout
//! does not shift when a flag changes.

use std::fmt;

type Produce<C> = Box<dyn Fn(&C) -> String>;
type Predicate<C> = Box<dyn Fn(&C) -> bool>;

enum Line<C> {
    Fixed(&'static str),
    Computed(Produce<C>),
    Conditional {
        indent: &'static str,
        when: Predicate<C>,
        text: String,
        trailer: &'static str,
    },
}

/// Ordered list of template lines rendered against a context `C`
pub struct LineTemplate<C> {
    lines: Vec<Line<C>>,
}

impl<C> Default for LineTemplate<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C> LineTemplate<C> {
    /// Create an empty template
    #[must_use]
    pub fn new() -> Self {
        Self { lines: Vec::new() }
    }

    /// Append a fixed line
    #[must_use]
    pub fn fixed(mut self, line: &'static str) -> Self {
        self.lines.push(Line::Fixed(line));
        self
    }

    /// Append an empty line
    #[must_use]
    pub fn blank(self) -> Self {
        self.fixed("")
    }

    /// Append a line computed from the context
    #[must_use]
    pub fn line(mut self, produce: impl Fn(&C) -> String + 'static) -> Self {
        self.lines.push(Line::Computed(Box::new(produce)));
        self
    }

    /// Append a line emitted only when `when` holds
    #[must_use]
    pub fn when(
        self,
        indent: &'static str,
        when: impl Fn(&C) -> bool + 'static,
        text: impl Into<String>,
    ) -> Self {
        self.when_with_trailer(indent, when, text, "")
    }

    /// Append a conditional line followed by fixed `trailer` text
    ///
    /// The trailer is written whether or not the condition holds.
    #[must_use]
    pub fn when_with_trailer(
        mut self,
        indent: &'static str,
        when: impl Fn(&C) -> bool + 'static,
        text: impl Into<String>,
        trailer: &'static str,
    ) -> Self {
        self.lines.push(Line::Conditional {
            indent,
            when: Box::new(when),
            text: text.into(),
            trailer,
        });
        self
    }

    /// Number of lines, conditional ones included
    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Whether the template has no lines
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Number of conditional lines
    #[must_use]
    pub fn conditional_count(&self) -> usize {
        self.lines
            .iter()
            .filter(|line| matches!(line, Line::Conditional { .. }))
            .count()
    }

    /// Render every line, joined with `\n`, without a trailing newline
    pub fn render(&self, ctx: &C) -> String {
        let mut out = String::new();
        for (i, line) in self.lines.iter().enumerate() {
            if i > 0 {
                out.push('\n');
            }
            match line {
                Line::Fixed(text) => out.push_str(text),
                Line::Computed(produce) => out.push_str(&produce(ctx)),
                Line::Conditional {
                    indent,
                    when,
                    text,
                    trailer,
                } => {
                    out.push_str(indent);
                    if when(ctx) {
                        out.push_str(text);
                    }
                    out.push_str(trailer);
                }
            }
        }
        out
    }
}

impl<C> fmt::Debug for LineTemplate<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LineTemplate")
            .field("lines", &self.len())
            .field("conditional", &self.conditional_count())
            .finish()
    }
}
