//! # gotype-config
//!
//! Layered configuration loading for gotype using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`GOTYPE_*` prefix, `__` as separator)
//! 2. Project-level `.gotype/config.toml`
//! 3. User-level `~/.config/gotype/config.toml`
//! 4. Built-in defaults
//!
//! Figment maps `GOTYPE_PARSER__VERBOSE` -> `parser.verbose` and
//! `GOTYPE_OUTPUT__FORMAT` -> `output.format`.
//!
//! # Usage
//!
//! ```no_run
//! use gotype_config::GotypeConfig;
//!
//! let config = GotypeConfig::load_with_dotenv().expect("config");
//! if config.parser.verbose {
//!     println!("format: {}", config.output.format);
//! }
//! ```

mod error;
mod output;
mod parser;

pub use error::ConfigError;
pub use output::{OutputConfig, OutputFormat};
pub use parser::ParserConfig;

use std::path::PathBuf;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct GotypeConfig {
    #[serde(default)]
    pub parser: ParserConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

/// Prefix of the environment variables figment reads.
const ENV_PREFIX: &str = "GOTYPE_";

/// Project-level config file, relative to the working directory.
const PROJECT_CONFIG: &str = ".gotype/config.toml";

impl GotypeConfig {
    /// Load configuration from TOML files and environment variables.
    ///
    /// Does not read `.env`; use [`Self::load_with_dotenv`] for that.
    ///
    /// # Errors
    /// Returns `ConfigError::Figment` when a source fails to parse or holds
    /// a value of the wrong shape, such as an unknown `output.format`.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_figment(&Self::figment())
    }

    /// Load configuration after applying `.env` from the working directory
    /// or the nearest ancestor that has one.
    ///
    /// Variables already set in the process win over the file.
    ///
    /// # Errors
    /// Same as [`Self::load`].
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        // No `.env` (or an unreadable one) leaves the environment untouched.
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Extract a config from an arbitrary figment.
    ///
    /// # Errors
    /// Same as [`Self::load`].
    pub fn from_figment(figment: &Figment) -> Result<Self, ConfigError> {
        Ok(figment.extract()?)
    }

    /// Build the figment provider chain: defaults, the config files from
    /// [`Self::config_files`], then `GOTYPE_*` variables.
    ///
    /// Public so tests can inspect it or layer more providers on top.
    #[must_use]
    pub fn figment() -> Figment {
        let defaults = Figment::from(Serialized::defaults(Self::default()));
        Self::config_files()
            .into_iter()
            .fold(defaults, |figment, path| figment.merge(Toml::file(path)))
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    /// Config files that exist, lowest priority first: the user-level file
    /// under the platform config dir, then the project-level file.
    #[must_use]
    pub fn config_files() -> Vec<PathBuf> {
        dirs::config_dir()
            .map(|dir| dir.join("gotype").join("config.toml"))
            .into_iter()
            .chain([PathBuf::from(PROJECT_CONFIG)])
            .filter(|path| path.is_file())
            .collect()
    }
}
