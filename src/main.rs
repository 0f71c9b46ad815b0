//! Lumadeck - A terminal controller for networked smart lights
//!
//! This is the binary entry point. All logic lives in the workspace crates.

mod list;

use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use lumadeck_app::config::{self, Settings};
use lumadeck_app::Engine;
use lumadeck_core::logging;
use lumadeck_core::prelude::*;
use lumadeck_gateway::{HttpGateway, HttpGatewayConfig};

/// Lumadeck - A terminal controller for networked smart lights
#[derive(Parser, Debug)]
#[command(name = "lumadeck")]
#[command(about = "A terminal controller for networked smart lights", long_about = None)]
struct Args {
    /// Path to the config file
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Light service address, e.g. http://192.168.1.20:8080
    #[arg(long, value_name = "URL")]
    addr: Option<String>,

    /// Light service password
    #[arg(long, value_name = "PW")]
    password: Option<String>,

    /// Print every device with its status as JSON lines, then exit
    #[arg(long)]
    list: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    color_eyre::install().map_err(|e| Error::terminal(e.to_string()))?;
    logging::init()?;

    let settings = resolve_settings(&args);
    info!(
        "Using light service at {} (timeout {}ms)",
        settings.gateway.base_url, settings.gateway.timeout_ms
    );

    let gateway = HttpGateway::new(HttpGatewayConfig {
        base_url: settings.gateway.base_url.clone(),
        password: settings.gateway.password.clone(),
        timeout: settings.gateway.timeout(),
    })?;

    if args.list {
        return list::run(&gateway).await;
    }

    let engine = Engine::new(settings, Arc::new(gateway));
    lumadeck_tui::run(engine).await
}

/// Load the config file and apply CLI overrides
fn resolve_settings(args: &Args) -> Settings {
    let mut settings = match args.config.clone().or_else(config::default_config_path) {
        Some(path) => {
            // Only seed the default location; an explicit path is used as given
            if args.config.is_none() {
                if let Err(e) = config::init_config_file(&path) {
                    warn!("Could not create {}: {}", path.display(), e);
                }
            }
            config::load_settings(&path)
        }
        None => {
            warn!("No config directory available, using default settings");
            Settings::default()
        }
    };

    if let Some(addr) = &args.addr {
        settings.gateway.base_url = addr.clone();
    }
    if let Some(password) = &args.password {
        settings.gateway.password = Some(password.clone());
    }

    settings
}
