// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 MuVeraAI Corporation

//! TOML and environment-variable loading of
//! [`TrustSubsystemConfig`][vellum_plugin_trust_core::config::TrustSubsystemConfig].
//!
//! Gated behind the `config-loader` feature, since it pulls in `toml` and
//! reads `std::env` — consumers that only need the in-memory subsystem
//! should not pay for either. Both loaders resolve `trust_store_path`
//! against the user's home directory via [`resolve_trust_store_path`],
//! since `vellum-plugin-trust-core` itself has no notion of "home" to draw
//! on (it is `no_std`).

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use vellum_plugin_trust_core::config::TrustSubsystemConfig;

/// Errors that can occur while loading configuration from a file or the
/// environment.
#[derive(Debug)]
pub enum ConfigError {
    /// The configuration file could not be read.
    FileRead(std::io::Error),
    /// The configuration file's contents are not valid TOML.
    TomlParse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::FileRead(err) => write!(f, "could not read config file: {err}"),
            ConfigError::TomlParse(err) => write!(f, "could not parse config TOML: {err}"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::FileRead(err) => Some(err),
            ConfigError::TomlParse(err) => Some(err),
        }
    }
}

/// The on-disk TOML shape. All fields are optional so a partial file only
/// overrides what it names; missing fields fall back to
/// [`TrustSubsystemConfig::default`].
#[derive(Debug, Deserialize, Default)]
struct TomlConfig {
    trust_store_path: Option<String>,
    search_roots: Option<Vec<String>>,
}

/// Load configuration from a TOML file at `path`, falling back to
/// [`TrustSubsystemConfig::default`] for any field the file omits.
///
/// `trust_store_path` is resolved against the user's home directory before
/// being returned; see [`resolve_trust_store_path`].
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<TrustSubsystemConfig, ConfigError> {
    let raw = fs::read_to_string(path).map_err(ConfigError::FileRead)?;
    let parsed: TomlConfig = toml::from_str(&raw).map_err(ConfigError::TomlParse)?;

    let mut config = TrustSubsystemConfig::default();
    if let Some(trust_store_path) = parsed.trust_store_path {
        config.trust_store_path = trust_store_path;
    }
    if let Some(search_roots) = parsed.search_roots {
        config.search_roots = search_roots;
    }
    config.trust_store_path = resolve_trust_store_path(&config.trust_store_path);
    Ok(config)
}

/// Load configuration overrides from `VELLUM_`-prefixed environment
/// variables, falling back to [`TrustSubsystemConfig::default`] for any
/// variable that is unset.
///
/// Recognised variables: `VELLUM_TRUST_STORE_PATH` (a path string),
/// `VELLUM_SEARCH_ROOTS` (a `:`-separated list of paths, matching the
/// platform `PATH`-style convention).
///
/// `trust_store_path` is resolved against the user's home directory before
/// being returned; see [`resolve_trust_store_path`].
pub fn load_config_from_env() -> Result<TrustSubsystemConfig, ConfigError> {
    let mut config = TrustSubsystemConfig::default();

    if let Ok(trust_store_path) = std::env::var("VELLUM_TRUST_STORE_PATH") {
        config.trust_store_path = trust_store_path;
    }
    if let Ok(search_roots) = std::env::var("VELLUM_SEARCH_ROOTS") {
        config.search_roots = search_roots.split(':').map(|s| s.to_string()).collect();
    }
    config.trust_store_path = resolve_trust_store_path(&config.trust_store_path);

    Ok(config)
}

/// Anchor a relative `trust_store_path` at the user's home directory,
/// yielding the `<home>/.vellum/trusted-plugins.json` default a host
/// actually wants. An already-absolute path is returned unchanged. If the
/// home directory cannot be determined (no `HOME`/`USERPROFILE` and no
/// platform fallback), the relative path is returned as-is, to resolve
/// against the process's working directory instead.
pub fn resolve_trust_store_path(path: &str) -> String {
    let path = Path::new(path);
    if path.is_absolute() {
        return path.to_string_lossy().into_owned();
    }
    match dirs::home_dir() {
        Some(home) => {
            let resolved: PathBuf = home.join(path);
            resolved.to_string_lossy().into_owned()
        }
        None => path.to_string_lossy().into_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_config_applies_only_named_fields() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("vellum.toml");
        std::fs::write(&path, r#"trust_store_path = "/custom/trust.json""#).unwrap();

        let config = load_config(&path).unwrap();
        assert_eq!(config.trust_store_path, "/custom/trust.json");
        assert!(config.search_roots.is_empty());
        assert!(config.strict_schema);
    }

    #[test]
    fn load_config_rejects_malformed_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("vellum.toml");
        std::fs::write(&path, "not valid toml {{{").unwrap();
        assert!(load_config(&path).is_err());
    }

    #[test]
    fn resolve_trust_store_path_leaves_absolute_paths_untouched() {
        assert_eq!(resolve_trust_store_path("/var/lib/vellum/trusted-plugins.json"), "/var/lib/vellum/trusted-plugins.json");
    }

    #[test]
    fn resolve_trust_store_path_anchors_relative_paths_at_home() {
        let home = dirs::home_dir().expect("test environment must have a home directory");
        let resolved = resolve_trust_store_path(".vellum/trusted-plugins.json");
        assert_eq!(resolved, home.join(".vellum/trusted-plugins.json").to_string_lossy());
    }

    #[test]
    fn load_config_default_trust_store_path_resolves_under_home() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("vellum.toml");
        std::fs::write(&path, "").unwrap();

        let config = load_config(&path).unwrap();
        let home = dirs::home_dir().expect("test environment must have a home directory");
        assert_eq!(config.trust_store_path, home.join(".vellum/trusted-plugins.json").to_string_lossy());
    }
}
