// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 MuVeraAI Corporation

//! Shared data types for the plugin trust subsystem.
//!
//! All types implement [`Clone`], [`Debug`], [`serde::Serialize`], and
//! [`serde::Deserialize`] so they can be serialised to JSON, stored, and
//! passed across the discovery/trust/bridge boundary without additional
//! conversion steps.

use alloc::string::String;
use hashbrown::HashMap;
use hashbrown::HashSet;
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Capability
// ---------------------------------------------------------------------------

/// The closed enumeration of named permissions a plugin may request and a
/// host may grant. This set is fixed at build time and is the only
/// authoritative vocabulary — unknown capability strings fail schema
/// validation on load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Capability {
    ExecuteHooks,
    SpawnSubagent,
    AccessFilesystem,
    NetworkAccess,
    McpServers,
}

impl Capability {
    /// All members of the closed enumeration, in declaration order.
    pub const ALL: [Capability; 5] = [
        Capability::ExecuteHooks,
        Capability::SpawnSubagent,
        Capability::AccessFilesystem,
        Capability::NetworkAccess,
        Capability::McpServers,
    ];

    /// The wire-format string for this capability (kebab-case, matching the
    /// JSON envelope).
    pub fn as_str(self) -> &'static str {
        match self {
            Capability::ExecuteHooks => "execute-hooks",
            Capability::SpawnSubagent => "spawn-subagent",
            Capability::AccessFilesystem => "access-filesystem",
            Capability::NetworkAccess => "network-access",
            Capability::McpServers => "mcp-servers",
        }
    }

    /// Parse a capability from its wire-format string. Returns `None` for
    /// any string outside the closed enumeration.
    pub fn from_str(value: &str) -> Option<Self> {
        match value {
            "execute-hooks" => Some(Capability::ExecuteHooks),
            "spawn-subagent" => Some(Capability::SpawnSubagent),
            "access-filesystem" => Some(Capability::AccessFilesystem),
            "network-access" => Some(Capability::NetworkAccess),
            "mcp-servers" => Some(Capability::McpServers),
            _ => None,
        }
    }
}

/// A set of [`Capability`] values. A thin alias over `HashSet` so call sites
/// read `CapabilitySet` rather than the underlying collection type.
pub type CapabilitySet = HashSet<Capability>;

// ---------------------------------------------------------------------------
// TrustLevel
// ---------------------------------------------------------------------------

/// Coarse trust switch, orthogonal to the capability set.
///
/// `None` means the record is retained for audit but grants nothing,
/// regardless of what the `capabilities` list contains.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrustLevel {
    Full,
    Limited,
    None,
}

impl TrustLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            TrustLevel::Full => "full",
            TrustLevel::Limited => "limited",
            TrustLevel::None => "none",
        }
    }

    pub fn from_str(value: &str) -> Option<Self> {
        match value {
            "full" => Some(TrustLevel::Full),
            "limited" => Some(TrustLevel::Limited),
            "none" => Some(TrustLevel::None),
            _ => None,
        }
    }
}

// ---------------------------------------------------------------------------
// ContentFingerprint
// ---------------------------------------------------------------------------

/// A 64-character lowercase hexadecimal SHA-256 digest.
///
/// This is a plain `String` alias rather than a newtype with private
/// internals: the store and bridge both need to read and write the raw hex
/// form directly (JSON field, regex check, equality comparison), and a
/// newtype would only add conversion noise at every one of those call
/// sites. [`is_valid_fingerprint`] is the single place the format
/// (`^[a-f0-9]{64}$`) is enforced.
pub type ContentFingerprint = String;

/// Check a string against the fingerprint format: exactly 64 lowercase hex
/// characters.
pub fn is_valid_fingerprint(value: &str) -> bool {
    value.len() == 64 && value.bytes().all(|b| b.is_ascii_digit() || (b'a'..=b'f').contains(&b))
}

// ---------------------------------------------------------------------------
// TrustedPlugin / TrustStoreFile
// ---------------------------------------------------------------------------

/// The only entity the Trust Store persists, keyed uniquely by
/// `plugin_name`.
///
/// `deny_unknown_fields` turns an unrecognized field on a stored entry into
/// a hard parse failure instead of a silently-dropped extra, so a typo'd or
/// forward-incompatible entry is caught by corruption recovery rather than
/// loaded with the field quietly discarded.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TrustedPlugin {
    pub plugin_name: String,
    pub version: String,
    /// ISO-8601 timestamp with a timezone offset, e.g.
    /// `2025-01-02T12:00:00.000Z` or `2025-01-02T12:00:00+09:00`.
    pub trusted_at: String,
    pub capabilities: CapabilitySet,
    pub content_hash: ContentFingerprint,
    pub trust_level: TrustLevel,
}

impl TrustedPlugin {
    /// The effective capability set: a `none` trust level grants nothing,
    /// regardless of what `capabilities` holds.
    pub fn effective_capabilities(&self) -> CapabilitySet {
        match self.trust_level {
            TrustLevel::None => CapabilitySet::new(),
            TrustLevel::Full | TrustLevel::Limited => self.capabilities.clone(),
        }
    }
}

/// The on-disk envelope: `{ "version": 1, "plugins": { name: entry } }`.
///
/// Unlike [`TrustedPlugin`], this top-level shape tolerates unknown fields:
/// forward-compatible metadata added alongside `version`/`plugins` should
/// not invalidate the whole file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrustStoreFile {
    pub version: u32,
    pub plugins: HashMap<String, TrustedPlugin>,
}

/// Schema version this crate reads and writes. Readers reject any other
/// value via the corruption-recovery path rather than attempting
/// best-effort migration.
pub const CURRENT_SCHEMA_VERSION: u32 = 1;

// ---------------------------------------------------------------------------
// Discovery
// ---------------------------------------------------------------------------

/// Discovery origin tag. On a name collision across roots, the caller's
/// root ordering decides the winner; this tag only records provenance for
/// audit, it does not itself rank anything.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PluginSource {
    Project,
    User,
    Global,
    Builtin,
}

/// An ephemeral, pre-trust discovery result. Never persisted — lives only
/// between discovery and trust evaluation.
///
/// `root_path` and `manifest_path` are plain `String`s rather than
/// `std::path::PathBuf` so this type stays available in the `no_std` core;
/// the fs crate is the one place paths get constructed from `Path`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiscoveredPlugin {
    pub name: String,
    pub root_path: String,
    pub manifest_path: String,
    pub source: PluginSource,
}

// ---------------------------------------------------------------------------
// Permission Bridge input
// ---------------------------------------------------------------------------

/// A privileged operation a plugin is attempting, as presented to the
/// Permission Bridge. Each variant maps to exactly one [`Capability`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum PluginOperation {
    ExecuteHook,
    SpawnSubagent,
    ReadFile { path: String },
    WriteFile { path: String },
    NetworkRequest { host: String },
    StartMcpServer,
}

impl PluginOperation {
    /// The exhaustive operation → capability mapping.
    pub fn required_capability(&self) -> Capability {
        match self {
            PluginOperation::ExecuteHook => Capability::ExecuteHooks,
            PluginOperation::SpawnSubagent => Capability::SpawnSubagent,
            PluginOperation::ReadFile { .. } | PluginOperation::WriteFile { .. } => {
                Capability::AccessFilesystem
            }
            PluginOperation::NetworkRequest { .. } => Capability::NetworkAccess,
            PluginOperation::StartMcpServer => Capability::McpServers,
        }
    }
}
