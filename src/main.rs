//! Duty Rotation Engine HTTP server.
//!
//! Environment:
//! - `DUTY_ROTATION_CONFIG`: configuration directory holding `engine.yaml`
//!   and `holidays.yaml`. The built-in defaults apply when unset.
//! - `DUTY_ROTATION_ADDR`: bind address, `0.0.0.0:3000` by default.
//! - `RUST_LOG`: log filter, `info` by default.

use std::env;
use std::error::Error;

use tracing::info;

use duty_rotation::api::{AppState, create_router};
use duty_rotation::config::ConfigLoader;
use duty_rotation::logging;

const DEFAULT_ADDR: &str = "0.0.0.0:3000";

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    logging::init();

    let config = match env::var("DUTY_ROTATION_CONFIG") {
        Ok(dir) => {
            let loader = ConfigLoader::load(&dir)?;
            info!(config_dir = %dir, holidays = loader.calendar().len(), "Loaded configuration");
            loader
        }
        Err(_) => {
            info!("DUTY_ROTATION_CONFIG not set, using built-in defaults");
            ConfigLoader::builtin()
        }
    };

    let addr = env::var("DUTY_ROTATION_ADDR").unwrap_or_else(|_| DEFAULT_ADDR.to_string());
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!(addr = %addr, "Duty rotation server listening");

    axum::serve(listener, create_router(AppState::new(config))).await?;
    Ok(())
}
