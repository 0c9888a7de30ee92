//! Configuration loading and management.

use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use sc_core::{ColorTable, DateWindow};
use serde::{Deserialize, Serialize};

/// Which month the hour and break totals cover.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WindowSource {
    /// The month being viewed (`--month`), falling back to the current one.
    #[default]
    Viewed,
    /// Always the real-world current month.
    Current,
}

impl WindowSource {
    /// Picks the totals window given the viewed month and today's date.
    pub fn resolve(self, viewed: Option<DateWindow>, today: NaiveDate) -> DateWindow {
        match self {
            Self::Viewed => viewed.unwrap_or_else(|| DateWindow::month_of(today)),
            Self::Current => DateWindow::month_of(today),
        }
    }
}

/// Application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Palette that records reference by colour id.
    pub theme_colors: ColorTable,

    /// Source of the totals window.
    pub window: WindowSource,
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

        // Load from environment variables (SC_*)
        figment = figment.merge(Env::prefixed("SC_"));

        figment.extract()
    }
}

/// Returns the platform-specific config directory for shiftcal.
///
/// On Linux: `~/.config/shiftcal`
fn dirs_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("shiftcal"))
}
