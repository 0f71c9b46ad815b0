//! Confirm dialog state.
//!
//! Data model for confirmation dialogs. The rendering widget lives in
//! `lumadeck-tui`.

use crate::message::Message;

#[derive(Debug, Clone)]
pub struct ConfirmDialogState {
    pub title: String,
    pub message: String,
    pub options: Vec<(String, Message)>,
}

impl ConfirmDialogState {
    /// Quit confirmation while requests are still in flight
    pub fn quit_confirmation(in_flight: usize) -> Self {
        Self {
            title: "Quit Lumadeck?".to_string(),
            message: if in_flight == 1 {
                "1 request is still in flight.".to_string()
            } else {
                format!("{} requests are still in flight.", in_flight)
            },
            options: vec![
                ("Quit".to_string(), Message::ConfirmQuit),
                ("Cancel".to_string(), Message::CancelQuit),
            ],
        }
    }
}
