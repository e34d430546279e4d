//! Configuration management infrastructure
//!
//! Layered configuration using figment:
//! - Optional config file loading (YAML, TOML, or JSON)
//! - Environment variable overrides
//! - Zero-value fallbacks

pub mod loader;

pub use loader::{ConfigError, ConfigLoader};
