//! Configuration loading and management.

use std::path::{Path, PathBuf};

use anyhow::bail;
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use sc_core::{FallAsleepBuffer, SleepCalculator};
use serde::{Deserialize, Serialize};

/// Upper bound on the configurable fall-asleep time.
pub const MAX_FALL_ASLEEP_MINUTES: u16 = 120;

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Minutes assumed to pass before falling asleep.
    pub fall_asleep_minutes: u16,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            fall_asleep_minutes: FallAsleepBuffer::DEFAULT.minutes(),
        }
    }
}

impl Config {
    /// Loads configuration, optionally from a specific file.
    #[expect(
        clippy::result_large_err,
        reason = "figment::Error is large but only returned at startup"
    )]
    pub fn load_from(config_path: Option<&Path>) -> Result<Self, figment::Error> {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Load from default config location
        if let Some(config_dir) = dirs_config_path() {
            figment = figment.merge(Toml::file(config_dir.join("config.toml")));
        }

        // Load from specified config file
        if let Some(path) = config_path {
            figment = figment.merge(Toml::file(path));
        }

        // Load from environment variables (SLEEPCALC_*)
        figment = figment.merge(Env::prefixed("SLEEPCALC_"));

        figment.extract()
    }

    /// Builds the calculator described by this configuration.
    pub fn calculator(&self) -> anyhow::Result<SleepCalculator> {
        if self.fall_asleep_minutes > MAX_FALL_ASLEEP_MINUTES {
            bail!(
                "fall_asleep_minutes must be at most {MAX_FALL_ASLEEP_MINUTES}, got {}",
                self.fall_asleep_minutes
            );
        }
        Ok(SleepCalculator::new(FallAsleepBuffer::from_minutes(
            self.fall_asleep_minutes,
        )))
    }
}

/// Returns the platform-specific config directory for sleepcalc.
///
/// On Linux: `~/.config/sleepcalc`
pub fn dirs_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("sleepcalc"))
}
