// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 MuVeraAI Corporation

//! The plugin manifest, `<pluginRoot>/.vellum-plugin/plugin.json`.
//!
//! Parsing beyond `name`, `version`, and the requested `capabilities` list
//! is explicitly out of scope — that is a collaborator concern. This crate
//! additionally reads `files`, the declared fingerprint inputs Identity &
//! Hashing needs; nothing else is parsed.

use serde::{Deserialize, Serialize};

/// The manifest filename, relative to a plugin root, that marks a
/// directory as a plugin candidate.
pub const MANIFEST_RELATIVE_PATH: &str = ".vellum-plugin/plugin.json";

/// The minimal manifest shape this crate needs to drive discovery and
/// fingerprinting.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PluginManifest {
    pub name: String,
    pub version: String,
    /// Requested capability strings, as they appear in the manifest. Not
    /// validated against the closed enum here — that happens when a host
    /// turns a request into a [`TrustedPlugin`][vellum_plugin_trust_core::types::TrustedPlugin]
    /// via an out-of-scope approval flow.
    #[serde(default)]
    pub capabilities: Vec<String>,
    /// Relative, forward-slash paths (relative to the plugin root) that
    /// contribute to the content fingerprint: the manifest itself, skills,
    /// executable entry points, and any other declared resource file.
    #[serde(default)]
    pub files: Vec<String>,
}
