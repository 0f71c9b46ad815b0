//! Widget components for the TUI

mod brightness_popup;
mod color_popup;
mod confirm_dialog;
mod device_list;
mod header;
pub mod modal_overlay;
mod slider;
mod status_bar;

pub use brightness_popup::BrightnessPopup;
pub use color_popup::ColorPopup;
pub use confirm_dialog::{ConfirmDialog, ConfirmDialogState};
pub use device_list::{fit_width, spinner, DeviceList};
pub use header::Header;
pub use status_bar::StatusBar;
