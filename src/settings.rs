// src/settings.rs
use anyhow::{Context, Result};
use serde::Deserialize;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:5000";

/// Runtime configuration. Overridable through the environment, e.g.
/// `GUIDANCE_API_BASE_URL=http://screening.internal:5000`.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub api_base_url: String,
}

impl Settings {
    pub fn load() -> Result<Self> {
        let settings = config::Config::builder()
            .set_default("api_base_url", DEFAULT_API_BASE_URL)?
            .add_source(config::Environment::with_prefix("GUIDANCE"))
            .build()
            .context("failed to assemble configuration")?;
        settings
            .try_deserialize()
            .context("invalid configuration values")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_without_environment() {
        // Other tests do not set GUIDANCE_* vars, so the default shows
        // through here.
        let settings = Settings::load().unwrap();
        assert!(settings.api_base_url.starts_with("http"));
    }
}
