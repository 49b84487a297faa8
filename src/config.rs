use eyre::Context;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Settings from an optional multistack.toml in the working directory
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct Config {
    /// Output directory for synthesized templates
    pub out: Option<String>,

    /// Overrides the CDK_DEFAULT_ACCOUNT environment variable
    pub account: Option<String>,
}

impl Config {
    pub fn from_path(path: &Path) -> eyre::Result<Self> {
        let config_toml_path = path.join("multistack.toml");

        if let Ok(toml_string) = std::fs::read_to_string(&config_toml_path) {
            toml::from_str(&toml_string).wrap_err("Failed to parse multistack.toml")
        } else {
            // Just use a default config if multistack.toml is not found.
            Ok(Config::default())
        }
    }

    pub fn from_current_dir() -> eyre::Result<Self> {
        Self::from_path(&std::env::current_dir().wrap_err("Failed to get current dir")?)
    }

    /// Account ID for stack environments
    ///
    /// The config file wins over the environment variable; both are optional.
    pub fn account(&self) -> Option<String> {
        self.account
            .clone()
            .or_else(|| std::env::var("CDK_DEFAULT_ACCOUNT").ok())
    }

    /// Output directory: CLI flag first, then config file, then the default
    pub fn out_dir(&self, flag: Option<&str>) -> PathBuf {
        PathBuf::from(flag.or(self.out.as_deref()).unwrap_or("multistack.out"))
    }
}
