use colored::*;
use snipdeck::clipboard::SystemClipboard;
use snipdeck::error::Result;
use snipdeck::shell::{Clipboard, Notify, Prompt, Renderer};
use snipdeck::view::{SectionLayout, SelectionList, View};
use std::io::{self, BufRead, Write};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const CAPTION_WIDTH: usize = 15;

/// Hosts the controller on a terminal: prompts go to stderr and read a line
/// from stdin, the deck is drawn on stdout.
pub struct TerminalShell {
    clipboard: SystemClipboard,
    draw: bool,
}

impl TerminalShell {
    pub fn new(draw: bool) -> Self {
        Self {
            clipboard: SystemClipboard,
            draw,
        }
    }

    /// Turns deck drawing on or off for subsequent renders.
    pub fn set_draw(&mut self, draw: bool) {
        self.draw = draw;
    }

    fn read_line(&self) -> Option<String> {
        let mut line = String::new();
        match io::stdin().lock().read_line(&mut line) {
            Ok(0) | Err(_) => None,
            Ok(_) => Some(line.trim_end_matches(['\r', '\n']).to_string()),
        }
    }
}

impl Prompt for TerminalShell {
    fn ask_string(&mut self, title: &str, message: &str) -> Option<String> {
        eprint!("{} {} ", title.bold(), message.dimmed());
        let _ = io::stderr().flush();
        self.read_line()
    }

    fn confirm(&mut self, title: &str, message: &str) -> bool {
        eprint!("{} {} [y/N] ", title.bold(), message);
        let _ = io::stderr().flush();
        self.read_line()
            .map(|answer| matches!(answer.trim().to_lowercase().as_str(), "y" | "yes"))
            .unwrap_or(false)
    }
}

impl Notify for TerminalShell {
    fn info(&mut self, _title: &str, message: &str) {
        println!("{}", message.green());
    }

    fn error(&mut self, title: &str, message: &str) {
        eprintln!("{} {}", format!("{}:", title).red().bold(), message.red());
    }
}

impl Clipboard for TerminalShell {
    fn copy(&mut self, text: &str) -> Result<()> {
        self.clipboard.copy(text)
    }
}

impl Renderer for TerminalShell {
    fn render(&mut self, view: &View) {
        if !self.draw {
            return;
        }
        for section in view.layout.sections() {
            print_section(section, view.selections.list(section.category));
        }
    }
}

fn print_section(section: &SectionLayout, selector: &SelectionList) {
    println!("{}", section.category.title().bold());
    if section.is_empty() {
        println!("  {}", "(no buttons)".dimmed());
    }
    for row in &section.rows {
        let captions: Vec<String> = row
            .iter()
            .map(|entry| format!("[{}]", caption(&entry.label)))
            .collect();
        println!("  {}", captions.join(" "));
    }
    if !selector.labels.is_empty() {
        println!(
            "  {} {}",
            "remove:".dimmed(),
            selector.labels.join(", ").dimmed()
        );
    }
    println!();
}

/// Fixed-width button caption: truncated with an ellipsis or padded.
fn caption(label: &str) -> String {
    let truncated = truncate_to_width(label, CAPTION_WIDTH);
    let padding = CAPTION_WIDTH.saturating_sub(truncated.width());
    format!("{}{}", truncated, " ".repeat(padding))
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;
    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            break;
        }
        result.push(c);
        current_width += char_width;
    }
    result.push('…');
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_caption_is_padded() {
        assert_eq!(caption("Basic"), "Basic          ");
        assert_eq!(caption("Basic").width(), CAPTION_WIDTH);
    }

    #[test]
    fn long_caption_is_truncated_with_ellipsis() {
        let c = caption("Black Friday mega bundle");
        assert!(c.ends_with('…'));
        assert_eq!(c.width(), CAPTION_WIDTH);
    }

    #[test]
    fn exact_width_caption_is_untouched() {
        let label = "a".repeat(CAPTION_WIDTH);
        assert_eq!(caption(&label), label);
    }
}
