//! Append-only markdown body of an object.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The markdown body of an object.
///
/// Content is only ever appended, one line-terminated fragment at a time.
///
/// # Examples
///
/// ```
/// use anytype::domain::Body;
///
/// let mut body = Body::new();
/// body.push_heading(1, "Hi");
/// body.push_bullet("x");
/// assert_eq!(body.as_str(), "# Hi\n- x\n");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Body(String);

impl Body {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a heading. `level` is clamped to 1..=3.
    pub fn push_heading(&mut self, level: u8, text: &str) {
        let hashes = "#".repeat(usize::from(level.clamp(1, 3)));
        self.push_line(&format!("{hashes} {text}"));
    }

    /// Appends a paragraph line.
    pub fn push_text(&mut self, text: &str) {
        self.push_line(text);
    }

    /// Appends a fenced code block. An empty `language` leaves the info string blank.
    pub fn push_code_block(&mut self, code: &str, language: &str) {
        self.push_line(&format!("``` {language}"));
        self.push_line(code);
        self.push_line("```");
    }

    pub fn push_bullet(&mut self, text: &str) {
        self.push_line(&format!("- {text}"));
    }

    pub fn push_checkbox(&mut self, text: &str, checked: bool) {
        let mark = if checked { 'x' } else { ' ' };
        self.push_line(&format!("- [{mark}] {text}"));
    }

    /// Appends an image. The title is omitted when empty.
    pub fn push_image(&mut self, url: &str, alt: &str, title: &str) {
        if title.is_empty() {
            self.push_line(&format!("![{alt}]({url})"));
        } else {
            self.push_line(&format!("![{alt}]({url} \"{title}\")"));
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    fn push_line(&mut self, line: &str) {
        self.0.push_str(line);
        self.0.push('\n');
    }
}

impl fmt::Display for Body {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
