//! Terminal rendering for markdown output
//!
//! Wraps termimad so command output can be shown with styled headers and
//! emphasis, or as plain text when `--no-color` is passed (scripts,
//! tests, dumb terminals).

use anyhow::Result;
use termimad::{crossterm::style::Color, MadSkin};

/// Renderer that switches between styled and plain text output
pub struct Renderer {
    styled: bool,
    skin: MadSkin,
}

impl Renderer {
    /// Create a renderer; `styled` enables terminal colors.
    pub fn new(styled: bool) -> Self {
        let mut skin = MadSkin::default();
        skin.set_headers_fg(Color::Cyan);
        skin.bold.set_fg(Color::Yellow);
        skin.inline_code.set_bg(Color::AnsiValue(238));

        Self { styled, skin }
    }

    /// Render markdown text to stdout.
    pub fn render(&self, markdown: &str) -> Result<()> {
        if self.styled {
            self.skin.print_text(markdown);
        } else {
            print!("{markdown}");
        }
        Ok(())
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new(true)
    }
}
