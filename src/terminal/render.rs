//! Text rendering of the display state.

use colored::Colorize;

use crate::application::services::{DisplayState, Notice, NoticeLevel};

/// Renders the submit trigger with its current label.
pub fn render_submit_trigger(display: &DisplayState) -> String {
    let label = format!("[ {} ]", display.submit_label());
    if display.is_submit_enabled() {
        label.bright_blue().bold().to_string()
    } else {
        label.bright_black().to_string()
    }
}

/// Renders the error slot and the short URL slot.
///
/// Returns an empty list when neither slot is set.
pub fn render_display(display: &DisplayState) -> Vec<String> {
    let mut lines = Vec::new();

    if let Some(error) = display.error() {
        lines.push(format!("✖ {}", error).red().bold().to_string());
    }

    if let Some(short_url) = display.short_url() {
        lines.push("Shortened URL:".bright_white().bold().to_string());
        lines.push(format!("  {}", short_url.link().bright_cyan().underline()));
    }

    lines
}

/// Renders a transient notification.
pub fn render_notice(notice: &Notice) -> String {
    match notice.level {
        NoticeLevel::Success => format!("✔ {}", notice.message).green().to_string(),
        NoticeLevel::Error => format!("⚠ {}", notice.message).yellow().to_string(),
    }
}
