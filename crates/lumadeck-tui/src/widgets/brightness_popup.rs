//! Brightness editor popup

use lumadeck_app::{BrightnessContent, EditorContent};
use lumadeck_core::BRIGHTNESS_MAX;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Clear, Paragraph, Widget},
};

use super::modal_overlay::{centered_rect, render_shadow};
use super::slider::slider_spans;
use crate::theme::styles;

const POPUP_WIDTH: u16 = 48;
const POPUP_HEIGHT: u16 = 8;

/// Slider popup for one device's brightness
pub struct BrightnessPopup<'a> {
    device_name: &'a str,
    content: &'a BrightnessContent,
}

impl<'a> BrightnessPopup<'a> {
    pub fn new(device_name: &'a str, content: &'a BrightnessContent) -> Self {
        Self {
            device_name,
            content,
        }
    }
}

impl Widget for BrightnessPopup<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let modal_area = centered_rect(POPUP_WIDTH, POPUP_HEIGHT, area);
        render_shadow(buf, modal_area);
        Clear.render(modal_area, buf);

        let block = styles::popup_block()
            .title(format!(" Brightness · {} ", self.device_name))
            .title_alignment(Alignment::Center);
        let inner = block.inner(modal_area);
        block.render(modal_area, buf);

        let chunks = Layout::vertical([
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Slider
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Hints
            Constraint::Length(1), // Hints
            Constraint::Min(0),
        ])
        .split(inner);

        let label = self.content.label();
        let bar_width = (inner.width as usize).saturating_sub(label.len() + 4);
        let mut slider = vec![Span::raw(" ")];
        slider.extend(slider_spans(
            u32::from(self.content.value()),
            u32::from(BRIGHTNESS_MAX),
            bar_width,
        ));
        slider.push(Span::styled(format!(" {:>4}", label), styles::accent_bold()));
        Paragraph::new(Line::from(slider)).render(chunks[1], buf);

        Paragraph::new(Line::from(vec![
            Span::styled("←/→", styles::keybinding()),
            Span::styled(" ±1  ", styles::text_muted()),
            Span::styled("PgUp/PgDn", styles::keybinding()),
            Span::styled(" step  ", styles::text_muted()),
            Span::styled("Home/End", styles::keybinding()),
            Span::styled(" min/max", styles::text_muted()),
        ]))
        .alignment(Alignment::Center)
        .render(chunks[3], buf);

        Paragraph::new(Line::from(vec![
            Span::styled("Enter", styles::keybinding()),
            Span::styled(" apply  ", styles::text_muted()),
            Span::styled("Esc", styles::keybinding()),
            Span::styled(" cancel", styles::text_muted()),
        ]))
        .alignment(Alignment::Center)
        .render(chunks[4], buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;

    #[test]
    fn test_renders_title_and_value() {
        let content = BrightnessContent::new(55);

        let mut term = TestTerminal::new();
        term.render_widget(BrightnessPopup::new("Desk Lamp", &content), term.area());

        assert!(term.buffer_contains("Brightness · Desk Lamp"));
        assert!(term.buffer_contains("55%"));
        assert!(term.buffer_contains("Enter"));
        assert!(term.buffer_contains("cancel"));
    }

    #[test]
    fn test_popup_is_centered() {
        let content = BrightnessContent::new(1);

        let mut term = TestTerminal::new();
        term.render_widget(BrightnessPopup::new("Desk", &content), term.area());

        // 48x8 centered in 80x24 has its top border on row 8
        assert!(!term.line_contains(7, "Brightness"));
        assert!(term.line_contains(8, "Brightness"));
    }

    #[test]
    fn test_renders_in_compact_terminal() {
        let content = BrightnessContent::new(100);

        let mut term = TestTerminal::compact();
        term.render_widget(BrightnessPopup::new("Desk", &content), term.area());

        assert!(term.buffer_contains("100%"));
    }
}
