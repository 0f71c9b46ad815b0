//! Color editor popup: tone slider or RGB channels, with a live preview

use lumadeck_app::{ColorContent, ColorTab, RgbChannel};
use lumadeck_core::TONE_MAX;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Clear, Paragraph, Widget},
};

use super::modal_overlay::{centered_rect, render_shadow};
use super::slider::slider_spans;
use crate::theme::styles;

const POPUP_WIDTH: u16 = 68;
const POPUP_HEIGHT: u16 = 12;

pub struct ColorPopup<'a> {
    device_name: &'a str,
    content: &'a ColorContent,
}

impl<'a> ColorPopup<'a> {
    pub fn new(device_name: &'a str, content: &'a ColorContent) -> Self {
        Self {
            device_name,
            content,
        }
    }

    fn tab_line(&self) -> Line<'static> {
        let tab = |label: &str, active: bool| {
            if active {
                Span::styled(
                    format!(" {} ", label),
                    styles::accent_bold().add_modifier(Modifier::REVERSED),
                )
            } else {
                Span::styled(format!(" {} ", label), styles::text_secondary())
            }
        };

        Line::from(vec![
            tab("Tone", self.content.tab() == ColorTab::Tone),
            Span::styled(" │ ", styles::text_muted()),
            tab(
                &format!("RGB {}", self.content.rgb().to_hex()),
                self.content.tab() == ColorTab::Rgb,
            ),
        ])
    }

    fn render_tone(&self, rows: &[Rect], buf: &mut Buffer) {
        let label = self.content.tone_label();
        let bar_width = (rows[0].width as usize).saturating_sub(label.len() + 4);

        let mut slider = vec![Span::raw(" ")];
        slider.extend(slider_spans(
            u32::from(self.content.tone()),
            u32::from(TONE_MAX),
            bar_width,
        ));
        slider.push(Span::styled(format!(" {}", label), styles::accent_bold()));
        Paragraph::new(Line::from(slider)).render(rows[0], buf);

        let legend_width = bar_width.saturating_sub(8);
        Paragraph::new(Line::from(vec![
            Span::raw(" "),
            Span::styled("warm", styles::text_muted()),
            Span::raw(" ".repeat(legend_width)),
            Span::styled("cool", styles::text_muted()),
        ]))
        .render(rows[1], buf);
    }

    fn render_rgb(&self, rows: &[Rect], buf: &mut Buffer) {
        let rgb = self.content.rgb();
        let bar_width = (rows[0].width as usize).saturating_sub(12);

        for (row, channel) in rows.iter().zip(RgbChannel::ALL) {
            let selected = channel == self.content.channel();
            let label_style = if selected {
                styles::accent_bold()
            } else {
                styles::text_secondary()
            };

            let mut spans = vec![
                Span::styled(if selected { "▶" } else { " " }, styles::accent()),
                Span::styled(format!("{} ", channel.label()), label_style),
            ];
            spans.extend(slider_spans(
                u32::from(channel.get(rgb)),
                u32::from(u8::MAX),
                bar_width,
            ));
            spans.push(Span::styled(format!(" {:>3}", channel.get(rgb)), label_style));
            Paragraph::new(Line::from(spans)).render(*row, buf);
        }
    }

    /// Hex field while typing, or why the last entry was rejected
    fn hex_line(&self) -> Option<Line<'static>> {
        let input = self.content.hex_input()?;
        let mut spans = vec![
            Span::styled("Hex ", styles::text_secondary()),
            Span::styled(format!("{}▏", input), styles::accent_bold()),
        ];
        if let Some(error) = self.content.hex_error() {
            spans.push(Span::styled(format!("  {}", error), styles::status_red()));
        }
        Some(Line::from(spans))
    }

    fn hint_line(&self) -> Line<'static> {
        if self.content.hex_input().is_some() {
            return Line::from(vec![
                Span::styled("0-9 a-f", styles::keybinding()),
                Span::styled(" type  ", styles::text_muted()),
                Span::styled("Backspace", styles::keybinding()),
                Span::styled(" erase  ", styles::text_muted()),
                Span::styled("Enter", styles::keybinding()),
                Span::styled(" set  ", styles::text_muted()),
                Span::styled("Esc", styles::keybinding()),
                Span::styled(" back", styles::text_muted()),
            ]);
        }

        let mut spans = Vec::new();
        if self.content.tab() == ColorTab::Rgb {
            spans.push(Span::styled("↑/↓", styles::keybinding()));
            spans.push(Span::styled(" channel  ", styles::text_muted()));
        }
        spans.extend([
            Span::styled("←/→", styles::keybinding()),
            Span::styled(" adjust  ", styles::text_muted()),
            Span::styled("#", styles::keybinding()),
            Span::styled(" hex  ", styles::text_muted()),
            Span::styled("Tab", styles::keybinding()),
            Span::styled(" mode  ", styles::text_muted()),
            Span::styled("Enter", styles::keybinding()),
            Span::styled(" apply  ", styles::text_muted()),
            Span::styled("Esc", styles::keybinding()),
            Span::styled(" cancel", styles::text_muted()),
        ]);
        Line::from(spans)
    }
}

impl Widget for ColorPopup<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let modal_area = centered_rect(POPUP_WIDTH, POPUP_HEIGHT, area);
        render_shadow(buf, modal_area);
        Clear.render(modal_area, buf);

        let block = styles::popup_block()
            .title(format!(" Color · {} ", self.device_name))
            .title_alignment(Alignment::Center);
        let inner = block.inner(modal_area);
        block.render(modal_area, buf);

        let chunks = Layout::vertical([
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Tabs
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Tone slider / R
            Constraint::Length(1), // Tone legend / G
            Constraint::Length(1), // B
            Constraint::Length(1), // Hex entry
            Constraint::Length(1), // Preview
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Hints
            Constraint::Min(0),
        ])
        .split(inner);

        Paragraph::new(self.tab_line())
            .alignment(Alignment::Center)
            .render(chunks[1], buf);

        match self.content.tab() {
            ColorTab::Tone => self.render_tone(&chunks[3..5], buf),
            ColorTab::Rgb => self.render_rgb(&chunks[3..6], buf),
        }

        if let Some(hex) = self.hex_line() {
            Paragraph::new(hex)
                .alignment(Alignment::Center)
                .render(chunks[6], buf);
        }

        let preview = self.content.preview_rgb();
        Paragraph::new(Line::from(vec![
            Span::styled("Preview ", styles::text_secondary()),
            Span::styled(
                "██████",
                Style::default().fg(Color::Rgb(preview.r, preview.g, preview.b)),
            ),
            Span::styled(format!(" {}", preview.to_hex()), styles::text_primary()),
        ]))
        .alignment(Alignment::Center)
        .render(chunks[7], buf);

        Paragraph::new(self.hint_line())
            .alignment(Alignment::Center)
            .render(chunks[9], buf);
    }
}
