//! Status bar widget
//!
//! Device counts on the left, key hints for the current mode on the right
//! when there is room for them.

use lumadeck_app::{AppState, RosterState, UiMode};
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::theme::styles;

/// Status bar widget showing device counts and key hints
pub struct StatusBar<'a> {
    state: &'a AppState,
}

impl<'a> StatusBar<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    fn build_segments(&self) -> Vec<Span<'static>> {
        let separator = Span::styled(" │ ", styles::text_muted());
        let counts = self.state.devices.counts();

        let mut segments = vec![
            Span::raw(" "),
            Span::styled(
                if counts.total == 1 {
                    "1 device".to_string()
                } else {
                    format!("{} devices", counts.total)
                },
                styles::text_secondary(),
            ),
        ];

        if counts.total > 0 {
            segments.push(separator.clone());
            segments.push(Span::styled(
                format!("● {} loaded", counts.loaded),
                styles::status_green(),
            ));
        }

        if counts.in_flight > 0 {
            segments.push(separator.clone());
            segments.push(Span::styled(
                format!("↻ {} busy", counts.in_flight),
                styles::status_yellow(),
            ));
        }

        if counts.offline > 0 {
            segments.push(separator.clone());
            segments.push(Span::styled(
                format!("○ {} offline", counts.offline),
                styles::text_muted(),
            ));
        }

        segments.push(separator);
        if counts.errors == 0 {
            segments.push(Span::styled("✓ No errors", styles::text_muted()));
        } else {
            let text = if counts.errors == 1 {
                "✗ 1 error".to_string()
            } else {
                format!("✗ {} errors", counts.errors)
            };
            segments.push(Span::styled(
                text,
                styles::status_red().add_modifier(Modifier::BOLD),
            ));
        }

        segments
    }

    fn hints(&self) -> Vec<(&'static str, &'static str)> {
        match self.state.ui_mode {
            UiMode::ConfirmDialog => vec![("y", "quit"), ("n", "cancel")],
            UiMode::Editor => vec![("Enter", "apply"), ("Esc", "cancel")],
            UiMode::Normal => match self.state.devices.roster() {
                RosterState::Failed(_) => vec![("r", "retry"), ("q", "quit")],
                _ => vec![
                    ("Space", "toggle"),
                    ("b", "bright"),
                    ("c", "color"),
                    ("r", "refresh"),
                    ("R", "all"),
                    ("q", "quit"),
                ],
            },
        }
    }

    fn hint_line(&self) -> Line<'static> {
        let mut spans = Vec::new();
        for (key, action) in self.hints() {
            spans.push(Span::styled(key, styles::keybinding()));
            spans.push(Span::styled(format!(" {}  ", action), styles::text_muted()));
        }
        Line::from(spans)
    }
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        // Top border doubles as a separator
        let block = Block::default()
            .borders(Borders::TOP)
            .border_style(styles::border_inactive());

        let inner = block.inner(area);
        block.render(area, buf);

        let segments = Line::from(self.build_segments());
        let hints = self.hint_line();

        // Hints are dropped when they would overlap the counts
        let fits = segments.width() + hints.width() < inner.width as usize;

        Paragraph::new(segments).render(inner, buf);
        if fits {
            Paragraph::new(hints)
                .alignment(Alignment::Right)
                .render(inner, buf);
        }
    }
}
