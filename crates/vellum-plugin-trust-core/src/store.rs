// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 MuVeraAI Corporation

//! In-memory Trust Store.
//!
//! [`TrustStore`] is the authoritative `pluginName -> TrustedPlugin` map.
//! This module only implements the in-memory half of the contract: `get`,
//! `set`, `delete`, `has`, `list`, `clear`, `size`, and the schema
//! validation that gates every mutation and every envelope import. Reading
//! and writing the on-disk JSON envelope — including corruption recovery
//! and the atomic tmp-rename — is the fs crate's `storage` module, which
//! composes with this type by calling [`TrustStore::from_envelope`] and
//! [`TrustStore::to_envelope`].

use alloc::string::{String, ToString};
use alloc::vec::Vec;
use hashbrown::HashMap;

use crate::error::TrustError;
use crate::types::{is_valid_fingerprint, TrustStoreFile, TrustedPlugin, CURRENT_SCHEMA_VERSION};

/// The in-memory authoritative trust map.
///
/// # Examples
///
/// ```rust
/// use vellum_plugin_trust_core::store::TrustStore;
/// use vellum_plugin_trust_core::types::{Capability, TrustLevel, TrustedPlugin};
///
/// let mut store = TrustStore::new();
/// store.set(TrustedPlugin {
///     plugin_name: "acme-linter".into(),
///     version: "1.0.0".into(),
///     trusted_at: "2025-01-02T12:00:00.000Z".into(),
///     capabilities: [Capability::ExecuteHooks].into_iter().collect(),
///     content_hash: "a".repeat(64),
///     trust_level: TrustLevel::Full,
/// }).unwrap();
/// assert_eq!(store.size(), 1);
/// assert!(store.has("acme-linter"));
/// ```
#[derive(Debug, Default, Clone)]
pub struct TrustStore {
    plugins: HashMap<String, TrustedPlugin>,
}

impl TrustStore {
    /// An empty store.
    pub fn new() -> Self {
        Self { plugins: HashMap::new() }
    }

    /// Look up a trusted plugin by name.
    pub fn get(&self, name: &str) -> Option<&TrustedPlugin> {
        self.plugins.get(name)
    }

    /// Insert or overwrite the entry for `entry.plugin_name` (upsert).
    /// Validates the entry's schema before inserting; a failing entry
    /// leaves the store unchanged and returns
    /// [`TrustError::InvalidArgument`].
    pub fn set(&mut self, entry: TrustedPlugin) -> Result<(), TrustError> {
        validate_entry(&entry)?;
        self.plugins.insert(entry.plugin_name.clone(), entry);
        Ok(())
    }

    /// Remove the entry for `name`, if any. Idempotent: deleting twice is
    /// equivalent to deleting once. Returns whether an entry existed.
    pub fn delete(&mut self, name: &str) -> bool {
        self.plugins.remove(name).is_some()
    }

    /// Whether an entry exists for `name`.
    pub fn has(&self, name: &str) -> bool {
        self.plugins.contains_key(name)
    }

    /// All entries, in unspecified order.
    pub fn list(&self) -> Vec<&TrustedPlugin> {
        self.plugins.values().collect()
    }

    /// Remove every entry.
    pub fn clear(&mut self) {
        self.plugins.clear();
    }

    /// The number of entries currently held.
    pub fn size(&self) -> usize {
        self.plugins.len()
    }

    /// Build a store from a parsed envelope, applying whole-file schema
    /// validation: the first invalid entry rejects the entire envelope
    /// rather than adopting the valid subset. Also rejects any schema
    /// version other than [`CURRENT_SCHEMA_VERSION`] — there is no
    /// migration path, callers should route that rejection through
    /// corruption recovery rather than surfacing it.
    pub fn from_envelope(file: TrustStoreFile) -> Result<Self, TrustError> {
        if file.version != CURRENT_SCHEMA_VERSION {
            return Err(TrustError::FileCorrupted(alloc::format!(
                "unsupported schema version {}",
                file.version
            )));
        }
        for entry in file.plugins.values() {
            validate_entry(entry).map_err(|_| {
                TrustError::FileCorrupted(alloc::format!(
                    "entry '{}' failed schema validation",
                    entry.plugin_name
                ))
            })?;
        }
        Ok(Self { plugins: file.plugins })
    }

    /// Serialize the current state into the on-disk envelope shape under
    /// the current schema version.
    pub fn to_envelope(&self) -> TrustStoreFile {
        TrustStoreFile {
            version: CURRENT_SCHEMA_VERSION,
            plugins: self.plugins.clone(),
        }
    }
}

/// Validate a single entry's schema: non-empty `plugin_name`/`version`,
/// ISO-8601 `trusted_at` with an explicit offset, and a well-formed
/// `content_hash`. The capability set needs no separate check — `Capability`
/// is already a closed enum by construction.
fn validate_entry(entry: &TrustedPlugin) -> Result<(), TrustError> {
    if entry.plugin_name.is_empty() {
        return Err(TrustError::InvalidArgument("plugin_name must not be empty".to_string()));
    }
    if entry.version.is_empty() {
        return Err(TrustError::InvalidArgument("version must not be empty".to_string()));
    }
    if !looks_like_iso8601_with_offset(&entry.trusted_at) {
        return Err(TrustError::InvalidArgument(alloc::format!(
            "trusted_at '{}' is not ISO-8601 with a timezone offset",
            entry.trusted_at
        )));
    }
    if !is_valid_fingerprint(&entry.content_hash) {
        return Err(TrustError::InvalidArgument(alloc::format!(
            "content_hash '{}' is not 64 lowercase hex characters",
            entry.content_hash
        )));
    }
    Ok(())
}

/// Minimal structural check for an ISO-8601 timestamp with a trailing `Z`
/// or a numeric `+HH:MM`/`-HH:MM` offset. Not a full calendar validator —
/// it only rejects the shapes the schema explicitly disallows (missing
/// offset, wrong length).
fn looks_like_iso8601_with_offset(value: &str) -> bool {
    if value.len() < 20 {
        return false;
    }
    let bytes = value.as_bytes();
    if bytes[4] != b'-' || bytes[7] != b'-' || bytes[10] != b'T' {
        return false;
    }
    value.ends_with('Z') || value[10..].contains('+') || value[11..].contains('-')
}
