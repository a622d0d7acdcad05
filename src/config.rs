use std::fs;
use std::path::Path;

use serde::Deserialize;

pub const CONFIG_FILE: &str = "planet_images.toml";

/// What to do when an entry fails below the HTTP layer (transport or disk).
/// Non-200 responses are always skipped and never stop the run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ErrorPolicy {
    /// Record the failure and move on to the next entry.
    #[default]
    Continue,
    /// Stop at the first transport or filesystem failure.
    Abort,
}

#[derive(Debug, Deserialize, Clone, Default, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub on_error: ErrorPolicy,
}

impl Config {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref();
        match fs::read_to_string(path) {
            Ok(toml_str) => Self::parse(&toml_str).unwrap_or_else(|err| {
                tracing::warn!("failed to parse {}: {} - using defaults", path.display(), err);
                Config::default()
            }),
            Err(_) => {
                tracing::debug!("{} not found - using defaults", path.display());
                Config::default()
            }
        }
    }

    pub fn parse(toml_str: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(toml_str)
    }
}
