//! Server settings
//!
//! Defaults overridable via `FEEDWATCH_*` environment variables
//! (e.g. `FEEDWATCH_BIND_ADDR=127.0.0.1:9000`).

use config::{Config, ConfigError, Environment};
use serde::Deserialize;

/// API server settings
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// Address the server binds to
    pub bind_addr: String,
    /// Emit JSON-formatted logs instead of plain text
    pub json_logs: bool,
}

impl Settings {
    /// Load settings from defaults plus environment overrides
    pub fn load() -> Result<Self, ConfigError> {
        Config::builder()
            .set_default("bind_addr", "0.0.0.0:8080")?
            .set_default("json_logs", false)?
            .add_source(Environment::with_prefix("FEEDWATCH"))
            .build()?
            .try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::load().unwrap();
        assert_eq!(settings.bind_addr, "0.0.0.0:8080");
        assert!(!settings.json_logs);
    }
}
