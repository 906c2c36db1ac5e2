//! Terminal rendering for markdown command output
//!
//! All command results are plain markdown strings produced by the core
//! display types. This module either prints them verbatim (`--no-color`) or
//! styles them with termimad. Header lines are printed manually so the
//! leading hashes stay visible; the todo IDs users copy back into commands
//! live in those lines.

use anyhow::Result;
use termimad::{crossterm::style::Color, MadSkin};

/// Renders markdown to the terminal, either styled or as plain text
pub struct TerminalRenderer {
    rich_enabled: bool,
    skin: MadSkin,
}

impl TerminalRenderer {
    /// Create a renderer; `rich_enabled = false` prints plain text
    pub fn new(rich_enabled: bool) -> Self {
        let mut skin = MadSkin::default();
        skin.set_headers_fg(Color::Blue);
        skin.bold.set_fg(Color::Cyan);
        skin.italic.set_fg(Color::AnsiValue(245));
        skin.inline_code.set_bg(Color::AnsiValue(236));

        Self { rich_enabled, skin }
    }

    /// Render a block of markdown to stdout
    pub fn render(&self, markdown: &str) -> Result<()> {
        if !self.rich_enabled {
            print!("{markdown}");
            return Ok(());
        }

        for line in markdown.lines() {
            self.render_line(line);
        }
        Ok(())
    }

    fn render_line(&self, line: &str) {
        if line.starts_with('#') {
            println!("\x1b[1;34m{line}\x1b[0m");
        } else {
            self.skin.print_inline(line);
            println!();
        }
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new(true)
    }
}
