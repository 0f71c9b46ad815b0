//! Configuration types

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Settings from `config.toml`
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub gateway: GatewaySettings,

    #[serde(default)]
    pub ui: UiSettings,

    #[serde(default)]
    pub behavior: BehaviorSettings,
}

/// Light service connection settings
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GatewaySettings {
    /// Service root URL
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Password for HTTP basic auth
    #[serde(default)]
    pub password: Option<String>,

    /// Per-request timeout in milliseconds, at least [`MIN_TIMEOUT_MS`]
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,

    /// Fetch the roster and every status in one request instead of one
    /// status request per device
    #[serde(default)]
    pub combined_fetch: bool,
}

/// Floor for `timeout_ms`; a zero timeout would fail every request
pub const MIN_TIMEOUT_MS: u64 = 100;

impl GatewaySettings {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms.max(MIN_TIMEOUT_MS))
    }
}

impl Default for GatewaySettings {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            password: None,
            timeout_ms: default_timeout_ms(),
            combined_fetch: false,
        }
    }
}

/// Editor step sizes
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UiSettings {
    /// Coarse brightness step (PageUp/PageDown)
    #[serde(default = "default_brightness_step")]
    pub brightness_step: u8,

    /// Coarse tone step
    #[serde(default = "default_tone_step")]
    pub tone_step: u8,

    /// Coarse RGB channel step
    #[serde(default = "default_rgb_step")]
    pub rgb_step: u8,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            brightness_step: default_brightness_step(),
            tone_step: default_tone_step(),
            rgb_step: default_rgb_step(),
        }
    }
}

/// Behavior settings
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct BehaviorSettings {
    /// Ask before quitting while requests are in flight
    #[serde(default = "default_true")]
    pub confirm_quit: bool,
}

impl Default for BehaviorSettings {
    fn default() -> Self {
        Self { confirm_quit: true }
    }
}

fn default_base_url() -> String {
    "http://localhost:8080".to_string()
}

fn default_timeout_ms() -> u64 {
    10_000
}

fn default_brightness_step() -> u8 {
    10
}

fn default_tone_step() -> u8 {
    10
}

fn default_rgb_step() -> u8 {
    16
}

fn default_true() -> bool {
    true
}
