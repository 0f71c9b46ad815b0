//! Header bar: app name and the light service address

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::theme::styles;

pub struct Header<'a> {
    service: &'a str,
}

impl<'a> Header<'a> {
    pub fn new(service: &'a str) -> Self {
        Self { service }
    }
}

impl Widget for Header<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Paragraph::new(Line::from(vec![
            Span::styled(" ◐ Lumadeck", styles::accent_bold()),
        ]))
        .render(area, buf);

        Paragraph::new(Line::from(vec![Span::styled(
            format!("{} ", self.service),
            styles::text_muted(),
        )]))
        .alignment(Alignment::Right)
        .render(area, buf);
    }
}
