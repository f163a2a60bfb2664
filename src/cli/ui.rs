//! Shared terminal primitives for notecmd.
//!
//! Conventions follow the rest of the CLI:
//! - Prompts: lowercase with colon and space: `search: `
//! - Single-key hints in brackets: `[e]dit [d]elete [q]uit`
//! - Feedback: one word when possible: `Saved.`

use anyhow::Result;
use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent},
    terminal::{disable_raw_mode, enable_raw_mode, Clear, ClearType},
    ExecutableCommand,
};
use inquire::{ui::RenderConfig, Confirm, Select, Text};
use std::io::{self, Write};

/// RAII guard that ensures raw mode is disabled on drop.
pub struct RawModeGuard;

impl RawModeGuard {
    pub fn new() -> Result<Self> {
        enable_raw_mode()?;
        Ok(Self)
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
    }
}

pub fn clear_screen() -> Result<()> {
    let mut stdout = io::stdout();
    stdout.execute(Clear(ClearType::All))?;
    stdout.execute(cursor::MoveTo(0, 0))?;
    stdout.flush()?;
    Ok(())
}

/// Terminal dimensions, defaulting to 80x24 for pipes and non-TTY.
pub fn term_size() -> (usize, usize) {
    crossterm::terminal::size()
        .map(|(w, h)| (w as usize, h as usize))
        .unwrap_or((80, 24))
}

/// Content lines available for scrollable lists (header and status
/// bar subtracted).
pub fn visible_lines() -> usize {
    let (_, height) = term_size();
    height.saturating_sub(4).max(5)
}

/// Truncate to `max_chars` characters, ellipsis included when truncated.
pub fn truncate(s: &str, max_chars: usize) -> String {
    if max_chars == 0 {
        return String::new();
    }
    let count = s.chars().count();
    if count <= max_chars {
        return s.to_string();
    }
    let kept: String = s.chars().take(max_chars.saturating_sub(1)).collect();
    format!("{}…", kept)
}

#[inline]
pub fn selection_prefix(selected: bool) -> &'static str {
    if selected {
        "> "
    } else {
        "  "
    }
}

/// Status line for browse mode: "3/12  [e]dit [d]elete [q]uit".
pub fn status_line(current: usize, total: usize, hints: &str) -> String {
    format!("{}/{}  {}", current, total, hints)
}

/// Print an error message to stderr.
#[inline]
pub fn error(msg: &str) {
    eprintln!("Error: {}", msg);
}

/// Minimal render config for inquire prompts (no decorative prefixes).
pub fn minimal_render_config() -> RenderConfig<'static> {
    RenderConfig::default_colored()
        .with_prompt_prefix(inquire::ui::Styled::new(""))
        .with_answered_prompt_prefix(inquire::ui::Styled::new(""))
}

/// Selection menu returning the chosen index, or None on Escape.
pub fn select<T: ToString + Clone>(prompt: &str, options: &[T]) -> Result<Option<usize>> {
    if options.is_empty() {
        return Ok(None);
    }

    let items: Vec<String> = options.iter().map(|o| o.to_string()).collect();

    let result = Select::new(prompt, items.clone())
        .with_render_config(minimal_render_config())
        .with_page_size(visible_lines())
        .with_vim_mode(true)
        .prompt_skippable()?;

    Ok(result.and_then(|chosen| items.iter().position(|item| *item == chosen)))
}

/// Text input with optional default. None means the user cancelled.
pub fn text_input(prompt: &str, default: Option<&str>) -> Result<Option<String>> {
    let mut builder = Text::new(prompt).with_render_config(minimal_render_config());

    if let Some(d) = default {
        if !d.is_empty() {
            builder = builder.with_default(d);
        }
    }

    Ok(builder.prompt_skippable()?)
}

/// Yes/no confirmation, defaulting to no.
pub fn confirm(prompt: &str) -> Result<bool> {
    let result = Confirm::new(prompt)
        .with_render_config(minimal_render_config())
        .with_default(false)
        .prompt()?;
    Ok(result)
}

/// Wait for Enter, q, or Esc.
pub fn wait_for_key() -> Result<()> {
    let _guard = RawModeGuard::new()?;
    loop {
        if let Event::Key(KeyEvent { code, .. }) = event::read()? {
            if matches!(code, KeyCode::Enter | KeyCode::Char('q') | KeyCode::Esc) {
                break;
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_short_string_unchanged() {
        assert_eq!(truncate("hello", 10), "hello");
        assert_eq!(truncate("hello", 5), "hello");
    }

    #[test]
    fn test_truncate_adds_ellipsis() {
        assert_eq!(truncate("hello world", 6), "hello…");
    }

    #[test]
    fn test_truncate_handles_multibyte() {
        assert_eq!(truncate("日本語のメモです", 4), "日本語…");
    }

    #[test]
    fn test_truncate_zero_width() {
        assert_eq!(truncate("hello", 0), "");
    }

    #[test]
    fn test_selection_prefix() {
        assert_eq!(selection_prefix(true), "> ");
        assert_eq!(selection_prefix(false), "  ");
    }

    #[test]
    fn test_status_line() {
        assert_eq!(status_line(3, 12, "[q]uit"), "3/12  [q]uit");
    }
}
