//! Configuration file parsing for Lumadeck
//!
//! Settings live in `<config_dir>/lumadeck/config.toml`.

pub mod settings;
pub mod types;

pub use settings::{default_config_path, init_config_file, load_settings};
pub use types::*;
