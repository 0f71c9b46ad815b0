//! # lumadeck-app - Application State and Orchestration
//!
//! The TEA (The Elm Architecture) layer of Lumadeck. Owns per-device
//! view-models, the device list, modal editor sessions and the action
//! dispatch that talks to the light service.
//!
//! ## Public API
//!
//! - [`Engine`] - Owns state, message channel and gateway
//! - [`AppState`] - Complete application state (the Model)
//! - [`Message`] - All possible events (the Message type)
//! - [`handler::update()`] - State transition function (the Update)
//! - [`UpdateAction`] - Remote calls for the event loop to run
//! - [`DeviceViewModel`] - Per-device status and lifecycle
//! - [`DeviceListController`] - Roster, selection and aggregate state
//! - [`ModalSession`] - Editor session parameterized by its content
//!
//! ## Modules
//!
//! - `config` - Settings types and loading
//! - `actions` - Background task spawning for gateway calls
//! - `signals` - OS signal handling

pub mod actions;
pub mod config;
pub mod confirm_dialog;
pub mod device;
pub mod device_list;
pub mod editor;
pub mod engine;
pub mod handler;
pub mod input_key;
pub mod message;
pub mod process;
pub mod signals;
pub mod state;

pub use config::Settings;
pub use confirm_dialog::ConfirmDialogState;
pub use device::{DeviceOperation, DeviceViewModel, Lifecycle, STATUS_UNKNOWN};
pub use device_list::{DeviceCounts, DeviceListController, RosterState};
pub use editor::{
    ActiveEditor, BrightnessContent, ColorContent, ColorTab, ColorValue, EditorContent,
    ModalSession, RgbChannel,
};
pub use engine::Engine;
pub use handler::{UpdateAction, UpdateResult};
pub use input_key::InputKey;
pub use message::Message;
pub use state::{AppPhase, AppState, UiMode};
