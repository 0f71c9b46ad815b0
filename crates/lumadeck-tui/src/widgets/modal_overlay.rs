//! Shared modal overlay utilities.
//!
//! Centering, background dimming and drop shadows for the editor popups
//! and the confirmation dialog.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;

use crate::theme::palette;

/// Center a fixed-size rect within an area.
///
/// If the requested size exceeds the area, clamps to the area dimensions.
///
/// # Examples
/// ```
/// use ratatui::layout::Rect;
/// use lumadeck_tui::widgets::modal_overlay::centered_rect;
///
/// let area = Rect::new(0, 0, 80, 24);
/// let modal = centered_rect(40, 10, area);
/// assert_eq!(modal, Rect::new(20, 7, 40, 10));
/// ```
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let w = width.min(area.width);
    let h = height.min(area.height);
    let x = area.x + (area.width.saturating_sub(w)) / 2;
    let y = area.y + (area.height.saturating_sub(h)) / 2;
    Rect::new(x, y, w, h)
}

/// Dim every cell in `area` so an overlay stands out
pub fn dim_background(buf: &mut Buffer, area: Rect) {
    let area = area.intersection(buf.area);
    buf.set_style(
        area,
        Style::default()
            .fg(palette::TEXT_MUTED)
            .bg(palette::DEEPEST_BG),
    );
}

/// Drop shadow one cell to the right of and below `modal`.
///
/// The parts falling outside the buffer are clipped.
pub fn render_shadow(buf: &mut Buffer, modal: Rect) {
    let right = Rect::new(modal.right(), modal.y.saturating_add(1), 1, modal.height);
    let bottom = Rect::new(modal.x.saturating_add(1), modal.bottom(), modal.width, 1);

    for strip in [right, bottom] {
        let strip = strip.intersection(buf.area);
        for position in strip.positions() {
            if let Some(cell) = buf.cell_mut(position) {
                cell.set_char(' ');
                cell.set_style(
                    Style::default()
                        .fg(palette::SHADOW)
                        .bg(palette::SHADOW),
                );
            }
        }
    }
}
