//! Columuse gateway configuration
//!
//! Loads the gateway's runtime configuration from an optional `config.*`
//! file in the working directory merged with `COLUMUSE_`-prefixed
//! environment variables, environment winning. Missing or unusable files
//! are not errors: a deployment can run purely from the environment, with
//! zero values filling anything left unset.
//!
//! # Architecture
//!
//! - **Domain Layer** (`domain`): the [`Config`] value object
//! - **Infrastructure Layer** (`infrastructure`): the figment-backed
//!   [`ConfigLoader`]
//!
//! # Example
//!
//! ```
//! use columuse_config::ConfigLoader;
//!
//! let config = ConfigLoader::load();
//! println!("provider={} port={}", config.provider, config.port);
//! ```

pub mod domain;
pub mod infrastructure;

// Re-export commonly used types for convenience
pub use domain::models::Config;
pub use infrastructure::config::{ConfigError, ConfigLoader};
