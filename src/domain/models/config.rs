use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Runtime configuration for the Columuse gateway.
///
/// Every field falls back to its zero value (`""`, `0`, empty map) when no
/// configuration source supplies it. Constructed once at startup by
/// [`ConfigLoader`](crate::ConfigLoader) and immutable thereafter.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", default)]
pub struct Config {
    /// Backend provider identifier, e.g. "anthropic".
    pub provider: String,

    /// API key for the selected provider.
    pub api_key: String,

    /// TCP port the gateway listens on.
    pub port: u16,

    /// Model alias to concrete model identifier mappings.
    pub models: HashMap<String, String>,
}
