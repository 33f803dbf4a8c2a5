// SPDX-License-Identifier: Apache-2.0

//! Text sources and report-body composition.
//!
//! Descriptions and reopen comments may be supplied as plain strings or as
//! deferred producers evaluated at report time. A failing producer never
//! aborts the report; its error is rendered into an inline note instead.

use std::fmt;

/// A piece of report text: either available up front, or produced lazily
/// when the report is assembled.
pub enum TextSource {
    /// Text available up front.
    Plain(String),
    /// Producer invoked once at report time.
    Deferred(Box<dyn FnOnce() -> anyhow::Result<String> + Send>),
}

impl TextSource {
    /// Wraps a producer closure as a deferred text source.
    pub fn deferred<F>(producer: F) -> Self
    where
        F: FnOnce() -> anyhow::Result<String> + Send + 'static,
    {
        TextSource::Deferred(Box::new(producer))
    }

    /// Renders the text, evaluating a deferred producer at most once.
    ///
    /// Empty text is treated as absent. A producer failure is trapped and
    /// substituted with an inline note carrying the error chain, so a broken
    /// description callback can never abort a report. `what` names the text
    /// in the note (e.g. "issue description").
    #[must_use]
    pub fn render(self, what: &str) -> Option<String> {
        let text = match self {
            TextSource::Plain(text) => text,
            TextSource::Deferred(producer) => match producer() {
                Ok(text) => text,
                Err(err) => format!("`{err:#}` occurred while rendering the {what}"),
            },
        };

        if text.is_empty() { None } else { Some(text) }
    }
}

impl fmt::Debug for TextSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TextSource::Plain(text) => f.debug_tuple("Plain").field(text).finish(),
            TextSource::Deferred(_) => f.debug_tuple("Deferred").field(&"<producer>").finish(),
        }
    }
}

impl From<String> for TextSource {
    fn from(text: String) -> Self {
        TextSource::Plain(text)
    }
}

impl From<&str> for TextSource {
    fn from(text: &str) -> Self {
        TextSource::Plain(text.to_string())
    }
}

/// Composes an issue body or comment body from its parts.
///
/// The rendered description (if any) comes first, followed by a blank line
/// and a fenced `Traceback:` block (if a traceback was captured).
#[must_use]
pub fn compose_body(description: Option<&str>, traceback: Option<&str>) -> String {
    let mut chunks: Vec<String> = Vec::new();

    if let Some(description) = description {
        chunks.push(description.to_string());
    }

    if let Some(traceback) = traceback {
        if !chunks.is_empty() {
            chunks.push(String::new());
        }
        chunks.push("Traceback:".to_string());
        let newline = if traceback.ends_with('\n') { "" } else { "\n" };
        chunks.push(format!("```\n{traceback}{newline}```"));
    }

    chunks.join("\n")
}
