//! Settings for the command-line shell
//!
//! Sources, lowest precedence first: built-in defaults, an optional TOML file
//! passed with `--config` (parsed as TOML whatever its extension), then `TRAFFIC_WATCHER_*` environment variables.
//! Command-line flags are applied on top by the caller. The monitoring code
//! itself only ever sees the resolved values.

use std::path::Path;
use std::time::Duration;

use ::config::{Config, Environment, File, FileFormat};
use log::debug;
use serde::{Deserialize, Serialize};

use crate::collectors::traffic::TrafficError;

pub const ENV_PREFIX: &str = "TRAFFIC_WATCHER";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Seconds between samples in continuous mode
    pub interval_secs: u64,
    /// Stop continuous mode after this many status lines
    pub max_samples: Option<u64>,
    /// Print snapshots as JSON
    pub json: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            interval_secs: 1,
            max_samples: None,
            json: false,
        }
    }
}

impl Settings {
    /// Loads settings from the optional file and the environment
    pub fn load(path: Option<&Path>) -> Result<Self, TrafficError> {
        let mut builder = Config::builder();
        if let Some(path) = path {
            debug!("Loading settings from {}", path.display());
            builder = builder.add_source(
                File::from(path)
                    .format(FileFormat::Toml)
                    .required(true),
            );
        }
        builder = builder.add_source(Environment::with_prefix(ENV_PREFIX).try_parsing(true));

        let settings: Settings = builder.build()?.try_deserialize()?;
        settings.validate()?;
        Ok(settings)
    }

    /// Applies command-line overrides and re-validates
    pub fn with_overrides(
        mut self,
        interval_secs: Option<u64>,
        max_samples: Option<u64>,
        json: bool,
    ) -> Result<Self, TrafficError> {
        if let Some(interval_secs) = interval_secs {
            self.interval_secs = interval_secs;
        }
        if max_samples.is_some() {
            self.max_samples = max_samples;
        }
        self.json |= json;
        self.validate()?;
        Ok(self)
    }

    pub fn validate(&self) -> Result<(), TrafficError> {
        if self.interval_secs == 0 {
            return Err(TrafficError::InvalidInterval {
                interval_secs: self.interval_secs,
            });
        }
        Ok(())
    }

    pub fn interval(&self) -> Duration {
        Duration::from_secs(self.interval_secs)
    }
}
