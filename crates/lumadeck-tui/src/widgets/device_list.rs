//! Device list widget
//!
//! One row per light: power state, name, brightness, color swatch and the
//! lifecycle of the device's view-model. A failed roster fetch replaces the
//! list with its error.

use lumadeck_app::{DeviceListController, DeviceViewModel, Lifecycle, RosterState};
use lumadeck_core::preview_rgb;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::theme::{palette, styles};

const SPINNER_FRAMES: [&str; 8] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧"];

/// Widest name column
const NAME_WIDTH: usize = 24;

/// Columns used by everything but the name and the lifecycle text
const FIXED_COLUMNS: usize = 24;

/// Spinner frame for a UI tick
pub fn spinner(tick: u64) -> &'static str {
    SPINNER_FRAMES[(tick / 2) as usize % SPINNER_FRAMES.len()]
}

/// Truncate or pad `text` to exactly `width` terminal columns
pub fn fit_width(text: &str, width: usize) -> String {
    if text.width() <= width {
        let padding = width - text.width();
        return format!("{}{}", text, " ".repeat(padding));
    }

    let mut out = String::new();
    let mut used = 0;
    let budget = width.saturating_sub(1);
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        out.push(c);
        used += w;
    }
    if width > 0 {
        out.push('…');
        used += 1;
    }
    out.push_str(&" ".repeat(width.saturating_sub(used)));
    out
}

/// Device list panel
pub struct DeviceList<'a> {
    devices: &'a DeviceListController,
    tick: u64,
    focused: bool,
}

impl<'a> DeviceList<'a> {
    pub fn new(devices: &'a DeviceListController, tick: u64) -> Self {
        Self {
            devices,
            tick,
            focused: true,
        }
    }

    /// Draw the panel border as unfocused (an overlay is open)
    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    fn render_message(lines: Vec<Line<'_>>, area: Rect, buf: &mut Buffer) {
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .render(area, buf);
    }

    fn lifecycle_text(&self, device: &DeviceViewModel) -> String {
        match device.lifecycle() {
            Lifecycle::Idle => String::new(),
            Lifecycle::Loading if device.in_flight() > 1 => {
                format!("{} working ({})", spinner(self.tick), device.in_flight())
            }
            Lifecycle::Loading => format!("{} working", spinner(self.tick)),
            Lifecycle::Error(message) => message.clone(),
            Lifecycle::Offline => "offline".to_string(),
        }
    }

    fn device_row(
        &self,
        device: &DeviceViewModel,
        selected: bool,
        name_width: usize,
    ) -> Line<'static> {
        let status = device.known_status();

        let text_style = if device.is_dimmed() {
            styles::text_muted()
        } else {
            styles::text_primary()
        };

        let (power_icon, power_style) = styles::power_indicator(status);

        let mut spans = vec![
            if selected {
                Span::styled("▶ ", styles::accent_bold())
            } else {
                Span::raw("  ")
            },
            Span::styled(format!("{} ", power_icon), power_style),
            Span::styled(fit_width(device.name(), name_width), text_style),
            Span::raw(" "),
        ];

        match status {
            Some(status) => {
                let rgb = preview_rgb(status);
                spans.push(Span::styled(
                    format!("{:>4} ", format!("{}%", status.brightness)),
                    text_style,
                ));
                spans.push(Span::styled(
                    "██",
                    Style::default().fg(Color::Rgb(rgb.r, rgb.g, rgb.b)),
                ));
                spans.push(Span::styled(
                    format!(" {}", rgb.to_hex()),
                    styles::text_secondary(),
                ));
            }
            None => {
                spans.push(Span::styled("  -- ", styles::text_muted()));
                spans.push(Span::styled("  ", styles::text_muted()));
                spans.push(Span::styled(" -------", styles::text_muted()));
            }
        }

        let lifecycle = self.lifecycle_text(device);
        if !lifecycle.is_empty() {
            spans.push(Span::raw("  "));
            spans.push(Span::styled(lifecycle, styles::lifecycle(device.lifecycle())));
        }

        Line::from(spans)
    }

    fn render_rows(&self, area: Rect, buf: &mut Buffer) {
        let visible = area.height as usize;
        if visible == 0 {
            return;
        }

        // Keep the selection on screen
        let selected = self.devices.selected_index();
        let offset = (selected + 1).saturating_sub(visible);

        let name_width = (area.width as usize)
            .saturating_sub(FIXED_COLUMNS)
            .clamp(4, NAME_WIDTH);

        for (row, (index, device)) in self
            .devices
            .devices()
            .iter()
            .enumerate()
            .skip(offset)
            .take(visible)
            .enumerate()
        {
            let row_area = Rect::new(area.x, area.y + row as u16, area.width, 1);
            let is_selected = index == selected;
            if is_selected {
                buf.set_style(row_area, Style::default().bg(palette::SELECTED_BG));
            }
            self.device_row(device, is_selected, name_width)
                .render(row_area, buf);
        }
    }
}

impl Widget for DeviceList<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let counts = self.devices.counts();
        let title = match self.devices.roster() {
            RosterState::Loaded => format!(" Devices ({}) ", counts.total),
            _ => " Devices ".to_string(),
        };

        let block =
            styles::panel_block(self.focused).title(Span::styled(title, styles::accent()));
        let inner = block.inner(area);
        block.render(area, buf);

        match self.devices.roster() {
            RosterState::Loading => Self::render_message(
                vec![
                    Line::from(""),
                    Line::from(Span::styled(
                        format!("{} Loading devices...", spinner(self.tick)),
                        styles::text_secondary(),
                    )),
                ],
                inner,
                buf,
            ),
            RosterState::Failed(message) => Self::render_message(
                vec![
                    Line::from(""),
                    Line::from(Span::styled(
                        "Could not load devices",
                        styles::status_red().add_modifier(Modifier::BOLD),
                    )),
                    Line::from(Span::styled(message.clone(), styles::status_red())),
                    Line::from(""),
                    Line::from(vec![
                        Span::styled("Press ", styles::text_muted()),
                        Span::styled("r", styles::keybinding()),
                        Span::styled(" to retry", styles::text_muted()),
                    ]),
                ],
                inner,
                buf,
            ),
            RosterState::Loaded if self.devices.is_empty() => Self::render_message(
                vec![
                    Line::from(""),
                    Line::from(Span::styled("No devices found", styles::text_muted())),
                ],
                inner,
                buf,
            ),
            RosterState::Loaded => self.render_rows(inner, buf),
        }
    }
}
