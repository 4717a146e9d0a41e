//! # CLI Configuration
//!
//! Optional TOML file with reader defaults, loaded once at startup.
//!
//! ```toml
//! token = "0-1-1-1-1"
//! coherent = true
//!
//! [audio]
//! mood = "dark"
//! speed = 0.6
//! volume = 0.4
//! ```

use std::path::Path;

use anyhow::Context;
use serde::Deserialize;

use babel_sonics::Settings;

/// Reader defaults.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Default share token to open when none is given.
    pub token: Option<String>,
    /// Default generation mode; `false` selects chaos mode.
    pub coherent: Option<bool>,
    /// Default listening settings.
    pub audio: Option<Settings>,
}

impl Config {
    /// Loads configuration from a TOML file.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("reading config file {}", path.display()))?;
        let config: Self = toml::from_str(&raw)
            .with_context(|| format!("parsing config file {}", path.display()))?;
        tracing::info!(path = %path.display(), "config loaded");
        Ok(config)
    }
}
