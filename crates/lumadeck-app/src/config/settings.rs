//! Settings loading and the default config file

use std::path::{Path, PathBuf};

use lumadeck_core::prelude::*;

use super::types::{Settings, MIN_TIMEOUT_MS};

const APP_DIR: &str = "lumadeck";
const CONFIG_FILENAME: &str = "config.toml";

/// Default config location: `<config_dir>/lumadeck/config.toml`
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR).join(CONFIG_FILENAME))
}

/// Load settings from `config_path`
///
/// Returns default settings if the file doesn't exist or can't be parsed.
pub fn load_settings(config_path: &Path) -> Settings {
    if !config_path.exists() {
        debug!("No config file at {:?}, using defaults", config_path);
        return Settings::default();
    }

    match std::fs::read_to_string(config_path) {
        Ok(content) => match toml::from_str(&content) {
            Ok(settings) => {
                debug!("Loaded settings from {:?}", config_path);
                warn_on_clamped(&settings);
                settings
            }
            Err(e) => {
                warn!("Failed to parse {:?}: {}", config_path, e);
                Settings::default()
            }
        },
        Err(e) => {
            warn!("Failed to read {:?}: {}", config_path, e);
            Settings::default()
        }
    }
}

fn warn_on_clamped(settings: &Settings) {
    let timeout_ms = settings.gateway.timeout_ms;
    if timeout_ms < MIN_TIMEOUT_MS {
        warn!(
            "gateway.timeout_ms = {} is below the minimum, using {}",
            timeout_ms, MIN_TIMEOUT_MS
        );
    }
}

/// Write a commented default config file if none exists
pub fn init_config_file(config_path: &Path) -> Result<()> {
    if config_path.exists() {
        return Ok(());
    }

    if let Some(parent) = config_path.parent() {
        std::fs::create_dir_all(parent)
            .map_err(|e| Error::config(format!("Failed to create {:?}: {}", parent, e)))?;
    }

    std::fs::write(config_path, DEFAULT_CONFIG)
        .map_err(|e| Error::config(format!("Failed to write {:?}: {}", config_path, e)))?;
    info!("Created default config at {:?}", config_path);

    Ok(())
}

const DEFAULT_CONFIG: &str = r#"# Lumadeck Configuration

[gateway]
base_url = "http://localhost:8080"
# password = "secret"   # Sent as HTTP basic auth
timeout_ms = 10000      # A request slower than this fails the operation (min 100)
combined_fetch = false  # Fetch roster and statuses in one request

[ui]
brightness_step = 10    # PageUp/PageDown step in the brightness editor
tone_step = 10          # PageUp/PageDown step for tone
rgb_step = 16           # PageUp/PageDown step for RGB channels

[behavior]
confirm_quit = true     # Ask before quitting while requests are in flight
"#;
