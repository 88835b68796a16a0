//! Connection settings for the schema registry
//!
//! Everything comes from the environment and is read once per invocation:
//! - `SCHEMA_REGISTRY_URL` - base URL of the registry REST API
//! - `SCHEMA_REGISTRY_API_KEY` - basic-auth username
//! - `SCHEMA_REGISTRY_API_SECRET` - basic-auth password
//!
//! All three are required. A missing or empty variable is reported as
//! [`RegistryError::MissingEnv`] and propagated to the caller.

use crate::constants::{API_KEY_ENV, API_SECRET_ENV, REGISTRY_URL_ENV};
use crate::error::{RegistryError, Result};
use std::{env, fmt};

/// Registry location and credentials for one invocation
#[derive(Clone)]
pub struct RegistrySettings {
    pub url: String,
    pub api_key: String,
    pub api_secret: String,
}

impl RegistrySettings {
    pub fn new(
        url: impl Into<String>,
        api_key: impl Into<String>,
        api_secret: impl Into<String>,
    ) -> Self {
        RegistrySettings {
            url: url.into(),
            api_key: api_key.into(),
            api_secret: api_secret.into(),
        }
    }

    /// Load settings from the process environment
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Load settings through an arbitrary variable lookup
    ///
    /// Empty values are treated the same as unset ones.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let require = |var: &'static str| -> Result<String> {
            lookup(var)
                .filter(|v| !v.is_empty())
                .ok_or(RegistryError::MissingEnv { var })
        };

        Ok(RegistrySettings {
            url: require(REGISTRY_URL_ENV)?,
            api_key: require(API_KEY_ENV)?,
            api_secret: require(API_SECRET_ENV)?,
        })
    }
}

impl fmt::Debug for RegistrySettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegistrySettings")
            .field("url", &self.url)
            .field("api_key", &self.api_key)
            .field("api_secret", &"***")
            .finish()
    }
}
