//! Terminal colors and syntax highlighting for textmine.
//!
//! Provides highlighted rendering of TOML settings and JSON records, and styled helpers
//! for headers, status lines and warnings. Every helper has a plain fallback: styling is
//! skipped when `NO_COLOR` is set or stdout is not a terminal.

#![warn(missing_docs)]

use std::{
    env,
    io::{self, IsTerminal},
};

use syntect::{
    easy::HighlightLines,
    highlighting::Style,
    parsing::SyntaxSet,
    util::{LinesWithEndings, as_24_bit_terminal_escaped},
};
use two_face::{
    syntax::extra_newlines as extra_syntaxes,
    theme::{EmbeddedLazyThemeSet, EmbeddedThemeName, extra as extra_themes},
};

/// A syntax highlighter for terminal output.
pub struct Highlighter {
    /// Language definitions, including TOML and JSON.
    syntax_set: SyntaxSet,
    /// Embedded color themes.
    theme_set: EmbeddedLazyThemeSet,
    /// The theme to use.
    theme: EmbeddedThemeName,
}

impl Default for Highlighter {
    fn default() -> Self {
        Self::new()
    }
}

impl Highlighter {
    /// Creates a new highlighter with the default theme (Dracula).
    pub fn new() -> Self {
        Self {
            syntax_set: extra_syntaxes(),
            theme_set: extra_themes(),
            theme: EmbeddedThemeName::Dracula,
        }
    }

    /// Highlights TOML content for terminal output.
    pub fn highlight_toml(&self, content: &str) -> String {
        self.highlight(content, "toml")
    }

    /// Highlights JSON content for terminal output.
    pub fn highlight_json(&self, content: &str) -> String {
        self.highlight(content, "json")
    }

    /// Highlights content with the specified syntax for terminal output.
    ///
    /// If the syntax is not found, the content is treated as plain text.
    pub fn highlight(&self, content: &str, syntax_name: &str) -> String {
        let syntax = self
            .syntax_set
            .find_syntax_by_extension(syntax_name)
            .or_else(|| self.syntax_set.find_syntax_by_name(syntax_name))
            .unwrap_or_else(|| self.syntax_set.find_syntax_plain_text());

        let theme = self.theme_set.get(self.theme);
        let mut highlighter = HighlightLines::new(syntax, theme);

        let mut output = String::new();
        for line in LinesWithEndings::from(content) {
            let ranges: Vec<(Style, &str)> = highlighter
                .highlight_line(line, &self.syntax_set)
                .unwrap_or_else(|_| vec![(Style::default(), line)]);
            output.push_str(&as_24_bit_terminal_escaped(&ranges[..], false));
        }
        output.push_str(colors::RESET);
        output
    }
}

/// ANSI color codes for terminal output.
pub mod colors {
    /// Bold text.
    pub const BOLD: &str = "\x1b[1m";
    /// Cyan text (for headers).
    pub const CYAN: &str = "\x1b[36m";
    /// Green text (for success).
    pub const GREEN: &str = "\x1b[32m";
    /// Yellow text (for warnings).
    pub const YELLOW: &str = "\x1b[33m";
    /// Dim/gray text (for less important info).
    pub const DIM: &str = "\x1b[2m";
    /// Reset all formatting.
    pub const RESET: &str = "\x1b[0m";
}

/// Returns true if stdout should receive ANSI styling.
pub fn color_enabled() -> bool {
    env::var_os("NO_COLOR").is_none() && io::stdout().is_terminal()
}

/// Wraps text in the given codes when color is enabled.
fn paint(codes: &[&str], text: &str) -> String {
    if color_enabled() {
        styled(codes, text)
    } else {
        text.to_string()
    }
}

/// Wraps text in the given codes unconditionally.
fn styled(codes: &[&str], text: &str) -> String {
    format!("{}{}{}", codes.concat(), text, colors::RESET)
}

/// Formats a header with bold cyan styling.
pub fn header(text: &str) -> String {
    paint(&[colors::BOLD, colors::CYAN], text)
}

/// Formats text as a subheader (bold).
pub fn subheader(text: &str) -> String {
    paint(&[colors::BOLD], text)
}

/// Formats text as dimmed/less important.
pub fn dim(text: &str) -> String {
    paint(&[colors::DIM], text)
}

/// Formats text as a success message (green).
pub fn success(text: &str) -> String {
    paint(&[colors::GREEN], text)
}

/// Formats text as a warning (yellow).
pub fn warning(text: &str) -> String {
    paint(&[colors::YELLOW], text)
}

/// Highlights TOML when color is enabled, otherwise returns it unchanged.
pub fn toml_for_terminal(content: &str) -> String {
    if color_enabled() {
        Highlighter::new().highlight_toml(content)
    } else {
        content.to_string()
    }
}

/// Highlights JSON when color is enabled, otherwise returns it unchanged.
pub fn json_for_terminal(content: &str) -> String {
    if color_enabled() {
        Highlighter::new().highlight_json(content)
    } else {
        content.to_string()
    }
}
