//! Confirmation dialog widget for quitting with requests in flight

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Clear, Paragraph, Widget},
};

// Re-export state from app layer
pub use lumadeck_app::ConfirmDialogState;

use super::modal_overlay::{centered_rect, render_shadow};
use crate::theme::styles;

/// Key shown for each option, in order
const OPTION_KEYS: [&str; 2] = ["y", "n"];

/// Confirmation dialog widget
pub struct ConfirmDialog<'a> {
    state: &'a ConfirmDialogState,
}

impl<'a> ConfirmDialog<'a> {
    pub fn new(state: &'a ConfirmDialogState) -> Self {
        Self { state }
    }

    fn option_line(&self) -> Line<'static> {
        let mut spans = Vec::new();
        for (i, ((label, _), key)) in self.state.options.iter().zip(OPTION_KEYS).enumerate() {
            if i > 0 {
                spans.push(Span::raw("  "));
            }
            let key_style = if i == 0 {
                styles::status_green()
            } else {
                styles::status_red()
            };
            spans.push(Span::styled("[", styles::text_muted()));
            spans.push(Span::styled(key, key_style.add_modifier(Modifier::BOLD)));
            spans.push(Span::styled(format!("] {}", label), styles::text_muted()));
        }
        Line::from(spans)
    }
}

impl Widget for ConfirmDialog<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let modal_area = centered_rect(50, 8, area);
        render_shadow(buf, modal_area);
        Clear.render(modal_area, buf);

        let block = styles::popup_block()
            .title(format!(" {} ", self.state.title))
            .title_alignment(Alignment::Center);
        let inner = block.inner(modal_area);
        block.render(modal_area, buf);

        let chunks = Layout::vertical([
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Message
            Constraint::Length(1), // Detail
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Buttons
            Constraint::Min(0),
        ])
        .split(inner);

        Paragraph::new(self.state.message.as_str())
            .alignment(Alignment::Center)
            .style(styles::status_yellow())
            .render(chunks[1], buf);

        Paragraph::new("Their results will be discarded.")
            .alignment(Alignment::Center)
            .style(styles::text_primary())
            .render(chunks[2], buf);

        Paragraph::new(self.option_line())
            .alignment(Alignment::Center)
            .render(chunks[4], buf);
    }
}
