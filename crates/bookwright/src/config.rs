//! Layered configuration for the `bookwright` binary.
//!
//! Sources, later ones overriding earlier ones:
//! 1. Bundled defaults (`bookwright.toml` shipped with the crate)
//! 2. `~/.config/bookwright/bookwright.toml`, then `./bookwright.toml`,
//!    or only the file passed with `--config`
//! 3. Environment variables prefixed with `BOOKWRIGHT__`, using `__` between
//!    keys (`BOOKWRIGHT__GENERATOR__MODEL`, `BOOKWRIGHT__OUTPUT__DIR`)
//!
//! Secrets are never read from these files: `GROQ_API_KEY` and
//! `DATABASE_URL` come straight from the environment.

use bookwright_error::{BookwrightError, BookwrightResult, ConfigError};
use bookwright_models::GeneratorSettings;
use bookwright_notify::NotifySettings;
use config::{Config, ConfigBuilder, Environment, File, FileFormat, builder::DefaultState};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tracing::{debug, instrument};

/// Bundled default configuration.
pub const DEFAULT_CONFIG: &str = include_str!("../bookwright.toml");

/// Prefix for environment overrides.
pub const ENV_PREFIX: &str = "BOOKWRIGHT";

/// The `[output]` configuration table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputSettings {
    /// Directory receiving compiled manuscripts
    pub dir: PathBuf,
}

impl Default for OutputSettings {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("output"),
        }
    }
}

/// Top-level Bookwright configuration.
///
/// # Example
///
/// ```no_run
/// use bookwright::BookwrightConfig;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let config = BookwrightConfig::load(None)?;
/// println!("Drafting with {}", config.generator.model);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BookwrightConfig {
    /// Hosted model settings
    pub generator: GeneratorSettings,
    /// Notification delivery
    pub notify: NotifySettings,
    /// Manuscript output
    pub output: OutputSettings,
}

impl BookwrightConfig {
    /// Load configuration from bundled defaults, user files and the
    /// process environment.
    ///
    /// With `path` set, that file replaces the usual user file lookup and
    /// must exist.
    ///
    /// # Errors
    ///
    /// Returns a config error if a file cannot be read or a value has the
    /// wrong type.
    #[instrument]
    pub fn load(path: Option<&Path>) -> BookwrightResult<Self> {
        Self::build(path, environment())
    }

    /// Like [`load`](Self::load), but reads overrides from `vars` instead
    /// of the process environment.
    ///
    /// Keys keep their `BOOKWRIGHT__` prefix.
    ///
    /// # Examples
    ///
    /// ```
    /// use bookwright::BookwrightConfig;
    /// use std::collections::HashMap;
    ///
    /// let vars = HashMap::from([(
    ///     "BOOKWRIGHT__GENERATOR__MODEL".to_string(),
    ///     "llama-3.1-8b-instant".to_string(),
    /// )]);
    /// let config = BookwrightConfig::load_with_vars(None, vars).unwrap();
    /// assert_eq!(config.generator.model, "llama-3.1-8b-instant");
    /// ```
    pub fn load_with_vars(
        path: Option<&Path>,
        vars: HashMap<String, String>,
    ) -> BookwrightResult<Self> {
        Self::build(path, environment().source(Some(vars)))
    }

    fn build(path: Option<&Path>, environment: Environment) -> BookwrightResult<Self> {
        debug!("Loading configuration: environment > user file > bundled defaults");

        let builder =
            Config::builder().add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml));

        with_user_files(builder, path)
            .add_source(environment)
            .build()
            .map_err(|e| {
                BookwrightError::from(ConfigError::new(format!(
                    "Failed to build configuration: {}",
                    e
                )))
            })?
            .try_deserialize()
            .map_err(|e| {
                BookwrightError::from(ConfigError::new(format!(
                    "Failed to parse configuration: {}",
                    e
                )))
            })
    }
}

fn environment() -> Environment {
    Environment::with_prefix(ENV_PREFIX)
        .separator("__")
        .try_parsing(true)
}

fn with_user_files(
    builder: ConfigBuilder<DefaultState>,
    path: Option<&Path>,
) -> ConfigBuilder<DefaultState> {
    if let Some(path) = path {
        return builder.add_source(File::from(path).required(true));
    }

    let builder = match dirs::home_dir() {
        Some(home) => builder.add_source(
            File::from(home.join(".config/bookwright/bookwright.toml")).required(false),
        ),
        None => builder,
    };

    builder.add_source(File::with_name("bookwright").required(false))
}
