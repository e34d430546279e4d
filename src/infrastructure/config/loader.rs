use std::path::{Path, PathBuf};

use figment::providers::{Env, Format, Json, Serialized, Toml, Yaml};
use figment::Figment;
use thiserror::Error;
use tracing::{debug, warn};

use crate::domain::models::Config;

/// Prefix for configuration environment variables.
const ENV_PREFIX: &str = "COLUMUSE_";

/// Separator between nested key path segments in environment variable
/// names: `COLUMUSE_MODELS__FAST` addresses `models.fast`. A single
/// underscore stays inside a segment, so `COLUMUSE_API_KEY` addresses the
/// top-level `api_key`.
const ENV_NESTING_SEPARATOR: &str = "__";

/// Config file names probed in the search directory; the first hit wins.
const CONFIG_FILE_NAMES: [&str; 4] = ["config.yaml", "config.yml", "config.toml", "config.json"];

/// Extensions accepted by [`ConfigLoader::load_from_file`].
const SUPPORTED_EXTENSIONS: [&str; 4] = ["yaml", "yml", "toml", "json"];

/// Configuration error types
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Config file not found: {0}")]
    NotFound(PathBuf),

    #[error("Unsupported config format: {0}. Must be one of: yaml, yml, toml, json")]
    UnsupportedFormat(PathBuf),

    #[error("Failed to load config from {path}: {source}")]
    Load {
        path: PathBuf,
        #[source]
        source: Box<figment::Error>,
    },
}

/// Configuration loader with layered merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration with layered merging
    ///
    /// Precedence (lowest to highest):
    /// 1. Zero-value defaults (Serialized)
    /// 2. `config.{yaml,yml,toml,json}` in the working directory, if present
    /// 3. Environment variables (`COLUMUSE_*` prefix, highest priority)
    ///
    /// A missing, unreadable, or malformed config file is not an error: the
    /// loader logs it and continues from the environment alone, so a
    /// deployment can run without any file on disk. This function never
    /// fails; keys no source supplies keep their zero values.
    pub fn load() -> Config {
        Self::load_in(Path::new("."))
    }

    /// Load configuration with the file search rooted at `dir`.
    ///
    /// Same merging as [`load`](Self::load); the explicit directory keeps
    /// callers and tests off the process working directory.
    pub fn load_in(dir: &Path) -> Config {
        match Self::figment(dir).extract() {
            Ok(config) => config,
            Err(err) => {
                warn!(error = %err, "ignoring unusable config file");
                Self::env_figment().extract().unwrap_or_else(|err| {
                    warn!(error = %err, "ignoring unusable environment overrides");
                    Config::default()
                })
            }
        }
    }

    /// Load configuration from a specific file
    ///
    /// No environment merge and no swallowing: a missing file, an
    /// unrecognized extension, or unparseable content surfaces as an error.
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Config, ConfigError> {
        let path = path.as_ref();

        let supported = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| SUPPORTED_EXTENSIONS.contains(&ext));
        if !supported {
            return Err(ConfigError::UnsupportedFormat(path.to_path_buf()));
        }

        if !path.is_file() {
            return Err(ConfigError::NotFound(path.to_path_buf()));
        }

        let figment = Self::merge_file(
            Figment::from(Serialized::defaults(Config::default())),
            path,
        );
        figment.extract().map_err(|err| ConfigError::Load {
            path: path.to_path_buf(),
            source: Box::new(err),
        })
    }

    /// Full figment: defaults, then the first config file found in `dir`,
    /// then environment overrides on top.
    fn figment(dir: &Path) -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Config::default()));

        if let Some(path) = Self::find_config_file(dir) {
            debug!(path = %path.display(), "merging config file");
            figment = Self::merge_file(figment, &path);
        }

        figment.merge(Self::env_overrides())
    }

    /// Defaults plus environment overrides, no file source.
    fn env_figment() -> Figment {
        Figment::from(Serialized::defaults(Config::default())).merge(Self::env_overrides())
    }

    fn env_overrides() -> Env {
        Env::prefixed(ENV_PREFIX).split(ENV_NESTING_SEPARATOR)
    }

    fn find_config_file(dir: &Path) -> Option<PathBuf> {
        CONFIG_FILE_NAMES
            .iter()
            .map(|name| dir.join(name))
            .find(|path| path.is_file())
    }

    /// Merge `path` into `figment` with the provider matching its
    /// extension. Unrecognized extensions merge nothing.
    fn merge_file(figment: Figment, path: &Path) -> Figment {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("yaml" | "yml") => figment.merge(Yaml::file(path)),
            Some("toml") => figment.merge(Toml::file(path)),
            Some("json") => figment.merge(Json::file(path)),
            _ => figment,
        }
    }
}
