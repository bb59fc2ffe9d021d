//! Service configuration.
//!
//! Ambient settings come from the environment, optionally seeded from a
//! `.env` file or a local `configuration` file. The inference endpoint itself
//! is addressed by compile-time constants, not configuration.

use crate::error::AppError;
use config::{Config, File};
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct ServiceConfig {
    /// Port the HTTP listener binds to; 0 selects a free port.
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_port() -> u16 {
    8080
}

impl ServiceConfig {
    pub fn load() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();

        let config = Config::builder()
            .add_source(File::with_name("configuration").required(false))
            .add_source(config::Environment::with_prefix("APP").separator("__"))
            .build()?;

        Ok(config.try_deserialize()?)
    }
}
