//! Horizontal slider bar shared by the editor popups

use ratatui::style::Style;
use ratatui::text::Span;

use crate::theme::palette;

/// Spans for a `width`-column bar filled to `value / max`
pub fn slider_spans(value: u32, max: u32, width: usize) -> Vec<Span<'static>> {
    let filled = if max == 0 {
        0
    } else {
        ((value.min(max) as usize * width) + max as usize / 2) / max as usize
    };

    vec![
        Span::styled(
            "━".repeat(filled),
            Style::default().fg(palette::SLIDER_FILLED),
        ),
        Span::styled(
            "─".repeat(width - filled),
            Style::default().fg(palette::SLIDER_EMPTY),
        ),
    ]
}
