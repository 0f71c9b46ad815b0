//! # lumadeck-core - Core Domain Types
//!
//! Foundation crate for Lumadeck. Provides the device domain types, the
//! color model, error handling and logging setup.
//!
//! This crate has **zero internal dependencies** -- it only depends on external
//! crates (serde, thiserror, tracing).
//!
//! ## Public API
//!
//! ### Domain Types (`types`)
//! - [`DeviceInfo`] - Id and name of a light, from the roster fetch
//! - [`DeviceStatus`] - Power, brightness and color state of a light
//! - [`DeviceEntry`] - Roster entry with an optional embedded status
//!
//! ### Color Model (`color`)
//! - [`Rgb`] - 8-bit color triple
//! - [`rgb_to_hex()`], [`hex_to_rgb()`] - `#rrggbb` conversions
//! - [`tone_to_color()`] - Tone scale to RGB interpolation
//! - [`preview_color()`] - Swatch color for a status
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Custom error enum with `fatal` vs `recoverable` classification
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//! - [`ResultExt`] - Extension trait for adding error context
//!
//! ## Prelude
//!
//! Import commonly used types with:
//! ```rust
//! use lumadeck_core::prelude::*;
//! ```

pub mod color;
pub mod error;
pub mod logging;
pub mod prelude;
pub mod types;

pub use color::{
    hex_to_rgb, preview_color, preview_rgb, rgb_to_hex, tone_to_color, Rgb, TONE_COOL, TONE_MAX,
    TONE_MID, TONE_WARM,
};
pub use error::{Error, Result, ResultExt, DEVICE_NOT_FOUND_MESSAGE};
pub use types::{
    clamp_brightness, clamp_tone, DeviceEntry, DeviceInfo, DeviceStatus, BRIGHTNESS_MAX,
    BRIGHTNESS_MIN,
};
