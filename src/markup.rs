use serde::{Deserialize, Serialize};
use unicode_width::UnicodeWidthStr;

const ANSI_START: &str = "\x1b[94m";
const ANSI_END: &str = "\x1b[0m";
const HTML_START: &str = "<font color=\"blue\">";
const HTML_END: &str = "</font>";

/// Highlight markers layered into calendar text.
///
/// Markers take no columns on screen; measure text with
/// [`Markup::visible_width`] rather than `str::len`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Markup {
    #[default]
    Ansi,
    Html,
}

impl Markup {
    pub fn start(self) -> &'static str {
        match self {
            Markup::Ansi => ANSI_START,
            Markup::Html => HTML_START,
        }
    }

    pub fn end(self) -> &'static str {
        match self {
            Markup::Ansi => ANSI_END,
            Markup::Html => HTML_END,
        }
    }

    /// `text` with every start and end marker removed.
    pub fn strip(self, text: &str) -> String {
        text.replace(self.start(), "").replace(self.end(), "")
    }

    /// Display width of `text` once markers are removed.
    pub fn visible_width(self, text: &str) -> usize {
        self.strip(text).width()
    }

    /// Escape free text so it survives inside this markup.
    pub fn escape(self, text: &str) -> String {
        match self {
            Markup::Ansi => text.to_string(),
            Markup::Html => text
                .replace('&', "&amp;")
                .replace('<', "&lt;")
                .replace('>', "&gt;"),
        }
    }
}
