//! Shared UI primitives for expatcmd
//!
//! Conventions:
//! - Prompts: lowercase with colon and space: `name: `
//! - Feedback: single word when possible: `Saved.`

use anyhow::Result;
use crossterm::{
    cursor,
    terminal::{Clear, ClearType},
    ExecutableCommand,
};
use inquire::{ui::RenderConfig, Confirm, InquireError, Select, Text};
use std::io::{self, Write};

// ============================================================================
// Layout Primitives
// ============================================================================

/// Truncate a string to max_chars, adding ellipsis if needed.
/// Result will be at most max_chars characters (including ellipsis if truncated).
pub fn truncate(s: &str, max_chars: usize) -> String {
    if max_chars == 0 {
        return String::new();
    }
    if s.chars().count() <= max_chars {
        return s.to_string();
    }
    let kept: String = s.chars().take(max_chars - 1).collect();
    format!("{}…", kept)
}

/// Truncate then left-align `s` in exactly `width` characters
pub fn pad(s: &str, width: usize) -> String {
    let truncated = truncate(s, width);
    let len = truncated.chars().count();
    format!("{}{}", truncated, " ".repeat(width - len))
}

/// Placeholder for empty cells
#[inline]
pub fn or_dash(s: &str) -> &str {
    if s.trim().is_empty() {
        "-"
    } else {
        s
    }
}

// ============================================================================
// Message Functions
// ============================================================================

/// Print a status message to stdout
#[inline]
pub fn status(msg: &str) {
    println!("{}", msg);
}

/// Print a warning message to stderr
#[inline]
pub fn warning(msg: &str) {
    eprintln!("Warning: {}", msg);
}

// ============================================================================
// Terminal
// ============================================================================

/// Clear the terminal screen and move cursor to top-left
pub fn clear_screen() -> Result<()> {
    let mut stdout = io::stdout();
    stdout.execute(Clear(ClearType::All))?;
    stdout.execute(cursor::MoveTo(0, 0))?;
    stdout.flush()?;
    Ok(())
}

/// Get terminal dimensions, defaulting to 80x24 if unavailable
/// (pipes, non-TTY output).
pub fn term_size() -> (usize, usize) {
    crossterm::terminal::size()
        .map(|(w, h)| (w as usize, h as usize))
        .unwrap_or((80, 24))
}

/// Number of rows a select prompt can show without scrolling the header away
pub fn visible_lines() -> usize {
    let (_, height) = term_size();
    height.saturating_sub(4).max(5)
}

// ============================================================================
// Prompts
// ============================================================================

/// Get a minimal render config for inquire prompts
pub fn minimal_render_config() -> RenderConfig<'static> {
    RenderConfig::default_colored()
        .with_prompt_prefix(inquire::ui::Styled::new(""))
        .with_answered_prompt_prefix(inquire::ui::Styled::new(""))
}

/// Display a selection menu and return the chosen index
pub fn select<T: ToString>(prompt: &str, options: &[T]) -> Result<Option<usize>> {
    if options.is_empty() {
        return Ok(None);
    }

    let items: Vec<String> = options.iter().map(|o| o.to_string()).collect();

    let result = Select::new(prompt, items.clone())
        .with_render_config(minimal_render_config())
        .with_page_size(visible_lines())
        .with_vim_mode(true)
        .prompt_skippable()?;

    Ok(result.and_then(|selected| items.iter().position(|o| *o == selected)))
}

/// Prompt for yes/no confirmation (default: no)
pub fn confirm(prompt: &str) -> Result<bool> {
    let result = Confirm::new(prompt)
        .with_render_config(minimal_render_config())
        .with_default(false)
        .prompt_skippable()?;
    Ok(result.unwrap_or(false))
}

/// Prompt for text input, returning None on Escape.
/// The input is returned exactly as typed.
pub fn text_input(prompt: &str) -> Result<Option<String>> {
    let result = Text::new(prompt)
        .with_render_config(minimal_render_config())
        .prompt_skippable()?;
    Ok(result)
}

/// Wait for the user to press enter
pub fn wait_for_continue() {
    println!();
    let _ = Text::new("[enter]")
        .with_render_config(minimal_render_config())
        .prompt_skippable();
}

/// Result type for form inputs that can be cancelled
pub enum FormResult<T> {
    Value(T),
    Cancelled,
}

/// Interpret raw field input against the current value:
/// empty keeps the current value, `-` clears it.
pub fn resolve_field_input(input: &str, current: &str) -> String {
    let input = input.trim();
    if input == "-" {
        String::new()
    } else if input.is_empty() {
        current.to_string()
    } else {
        input.to_string()
    }
}

/// Prompt for a field with its current value.
/// Format: `field [current] (- clears): ` or `field: ` if no current value
pub fn prompt_field(field: &str, current: &str) -> Result<FormResult<String>> {
    let prompt = if current.is_empty() {
        format!("{}: ", field)
    } else {
        format!("{} [{}] (- clears): ", field, truncate(current, 30))
    };

    let result = Text::new(&prompt)
        .with_render_config(minimal_render_config())
        .prompt();

    match result {
        Ok(input) => Ok(FormResult::Value(resolve_field_input(&input, current))),
        Err(InquireError::OperationCanceled) | Err(InquireError::OperationInterrupted) => {
            Ok(FormResult::Cancelled)
        }
        Err(e) => Err(e.into()),
    }
}
