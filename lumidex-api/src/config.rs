//! Client configuration.
//!
//! Configuration is an explicit value passed into [`Client::builder`](crate::Client::builder)
//! rather than read from ambient globals, so tests can point a client at a mock
//! server without touching process state.

use std::env;

/// Base URL of the public PokeAPI instance.
pub const DEFAULT_API_URL: &str = "https://pokeapi.co/api/v2";

/// Environment variable overriding the API base URL in [`Config::from_env`].
pub const POKEAPI_URL_VAR: &str = "POKEAPI_URL";

/// Settings for a [`Client`](crate::Client).
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL requests are issued against, without a trailing slash.
    pub api_url: String,
}

impl Config {
    /// Creates a new [`ConfigBuilder`]
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Builds a config from the environment.
    ///
    /// Reads `POKEAPI_URL`, falling back to the public PokeAPI instance when it
    /// is unset.
    pub fn from_env() -> Self {
        let api_url = match env::var(POKEAPI_URL_VAR) {
            Ok(url) => url.trim_end_matches('/').to_string(),
            Err(_) => DEFAULT_API_URL.to_string(),
        };

        Config { api_url }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            api_url: DEFAULT_API_URL.to_string(),
        }
    }
}

/// Builder for [`Config`].
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    api_url: Option<String>,
}

impl ConfigBuilder {
    /// Overrides the base URL requests are issued against.
    ///
    /// A trailing slash is stripped so endpoint paths can be joined uniformly.
    pub fn api_url(mut self, api_url: &str) -> Self {
        self.api_url = Some(api_url.trim_end_matches('/').to_string());
        self
    }

    /// Builds the [`Config`], defaulting to the public PokeAPI instance.
    pub fn build(self) -> Config {
        Config {
            api_url: self
                .api_url
                .unwrap_or_else(|| DEFAULT_API_URL.to_string()),
        }
    }
}
