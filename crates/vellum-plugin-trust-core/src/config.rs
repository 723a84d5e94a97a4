// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 MuVeraAI Corporation

//! Subsystem-level configuration.
//!
//! [`TrustSubsystemConfig`] is the single data struct tuning every part of
//! the trust subsystem. It carries no I/O of its own — loading it from TOML
//! or environment variables is the sibling `vellum-plugin-trust-fs` crate's
//! `config_loader` module (gated behind the `config-loader` feature). This
//! crate only defines the shape and its defaults.

use alloc::string::String;
use alloc::vec::Vec;
use serde::{Deserialize, Serialize};

/// Top-level configuration for the trust subsystem.
///
/// # Examples
///
/// ```rust
/// use vellum_plugin_trust_core::config::TrustSubsystemConfig;
///
/// let config = TrustSubsystemConfig {
///     strict_schema: true,
///     ..TrustSubsystemConfig::default()
/// };
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrustSubsystemConfig {
    /// Path to the JSON Trust Store file, relative to the invoking process's
    /// working directory unless absolute. This type's own [`Default`] only
    /// carries the bare relative path shown below; resolving it against the
    /// user's home directory (the default a host actually wants) is done by
    /// the fs crate's config loader, which is the only place in this
    /// workspace that knows where "home" is.
    pub trust_store_path: String,

    /// Discovery roots, highest priority first. Each entry pairs a
    /// filesystem path with the [`PluginSource`][crate::types::PluginSource]
    /// tag it should be scanned as. Defaults to the empty list — callers
    /// are expected to populate this from their own project/user/global
    /// path conventions.
    pub search_roots: Vec<String>,

    /// When `true`, any schema violation anywhere in the Trust Store file
    /// (unknown capability string, out-of-range trust level, malformed
    /// fingerprint) invalidates the entire file rather than just the
    /// offending entry. Defaults to `true` — this subsystem never performs
    /// partial recovery of a corrupt file.
    pub strict_schema: bool,
}

impl Default for TrustSubsystemConfig {
    fn default() -> Self {
        Self {
            trust_store_path: String::from(".vellum/trusted-plugins.json"),
            search_roots: Vec::new(),
            strict_schema: true,
        }
    }
}
