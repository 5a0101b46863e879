//! Preview server configuration parsed from environment variables.
//!
//! Parsing takes a lookup closure instead of reading the process environment
//! directly, so tests can feed values without touching global state.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::path::PathBuf;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_SITE_DIR: &str = "site";
pub const DEFAULT_PKG_DIR: &str = "client/pkg";

/// Errors produced while reading configuration.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    /// `PORT` is set but is not a valid TCP port.
    #[error("invalid PORT {value:?}: expected an integer in 0..=65535")]
    InvalidPort { value: String },

    /// A directory that must exist at startup does not.
    #[error("{var} points to {path:?}, which is not a directory")]
    MissingDirectory { var: &'static str, path: PathBuf },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    /// Generated pages, served at `/`.
    pub site_dir: PathBuf,
    /// `wasm-bindgen` output for the client crate, served at `/pkg`.
    pub pkg_dir: PathBuf,
}

impl ServerConfig {
    /// Build config from the process environment.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `SITE_DIR`: default `site`, must exist
    /// - `PKG_DIR`: default `client/pkg`, may be missing
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Build config from `lookup`, which maps a variable name to its value.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let port = match lookup("PORT") {
            Some(value) => {
                let parsed = value.trim().parse::<u16>();
                parsed.map_err(|_| ConfigError::InvalidPort { value })?
            }
            None => DEFAULT_PORT,
        };

        let site_dir = PathBuf::from(lookup("SITE_DIR").unwrap_or_else(|| DEFAULT_SITE_DIR.to_owned()));
        if !site_dir.is_dir() {
            return Err(ConfigError::MissingDirectory { var: "SITE_DIR", path: site_dir });
        }

        let pkg_dir = PathBuf::from(lookup("PKG_DIR").unwrap_or_else(|| DEFAULT_PKG_DIR.to_owned()));
        if !pkg_dir.is_dir() {
            tracing::warn!(pkg_dir = %pkg_dir.display(), "client bundle missing; pages will load without behaviors");
        }

        Ok(Self { port, site_dir, pkg_dir })
    }
}
