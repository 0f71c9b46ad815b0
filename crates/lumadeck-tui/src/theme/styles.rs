//! Semantic style builders.

use lumadeck_app::Lifecycle;
use lumadeck_core::DeviceStatus;
use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders};

use super::palette;

// --- Text styles ---
pub fn text_primary() -> Style {
    Style::default().fg(palette::TEXT_PRIMARY)
}

pub fn text_secondary() -> Style {
    Style::default().fg(palette::TEXT_SECONDARY)
}

pub fn text_muted() -> Style {
    Style::default().fg(palette::TEXT_MUTED)
}

// --- Border styles ---
pub fn border_inactive() -> Style {
    Style::default().fg(palette::BORDER_DIM)
}

pub fn border_active() -> Style {
    Style::default().fg(palette::BORDER_ACTIVE)
}

// --- Accent styles ---
pub fn accent() -> Style {
    Style::default().fg(palette::ACCENT)
}

pub fn accent_bold() -> Style {
    Style::default()
        .fg(palette::ACCENT)
        .add_modifier(Modifier::BOLD)
}

// --- Status styles ---
pub fn status_green() -> Style {
    Style::default().fg(palette::STATUS_GREEN)
}

pub fn status_red() -> Style {
    Style::default().fg(palette::STATUS_RED)
}

pub fn status_yellow() -> Style {
    Style::default().fg(palette::STATUS_YELLOW)
}

// --- Keybinding hint style ---
pub fn keybinding() -> Style {
    Style::default().fg(palette::STATUS_YELLOW)
}

/// Style for the lifecycle column of a device row
pub fn lifecycle(lifecycle: &Lifecycle) -> Style {
    match lifecycle {
        Lifecycle::Idle => text_muted(),
        Lifecycle::Loading => status_yellow(),
        Lifecycle::Error(_) => status_red(),
        Lifecycle::Offline => text_muted(),
    }
}

// --- Block builders ---

/// Rounded panel block, highlighted when active
pub fn panel_block(active: bool) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(if active {
            border_active()
        } else {
            border_inactive()
        })
}

/// Rounded popup block on the popup background
pub fn popup_block() -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(border_active())
        .style(Style::default().bg(palette::POPUP_BG))
}

// --- Power indicator mapping ---

/// Power indicator for a device row.
///
/// Returns `(icon_char, Style)` for the last known status; `None` means
/// the status is unknown or the device is offline.
pub fn power_indicator(status: Option<&DeviceStatus>) -> (&'static str, Style) {
    match status {
        Some(status) if status.is_on => (
            "●",
            Style::default()
                .fg(palette::STATUS_GREEN)
                .add_modifier(Modifier::BOLD),
        ),
        Some(_) => ("○", text_secondary()),
        None => ("·", text_muted()),
    }
}
