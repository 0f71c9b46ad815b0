//! lumadeck-tui - Terminal UI for Lumadeck
//!
//! This crate provides the ratatui-based terminal interface. It drives an
//! [`Engine`](lumadeck_app::Engine) from lumadeck-app and adds terminal
//! rendering, event polling and widget display.

pub mod event;
pub mod render;
pub mod runner;
pub mod terminal;
pub mod theme;
pub mod widgets;

#[cfg(test)]
pub mod test_utils;

pub use runner::run;
