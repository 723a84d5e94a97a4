// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 MuVeraAI Corporation

//! # vellum-plugin-trust-core
//!
//! Capability vocabulary, in-memory Trust Store logic, and the Permission
//! Bridge for the Vellum plugin trust subsystem.
//!
//! This crate is `no_std`-compatible (requires `alloc`). Enable the `std`
//! feature (on by default) for standard-library conveniences such as
//! `std::error::Error` impls.
//!
//! ## Architecture
//!
//! ```text
//! TrustStore                    — in-memory map: pluginName -> TrustedPlugin
//!   ├── validated by store.rs on every set() / from_envelope()
//!   └── consulted by PermissionBridge::check()
//!
//! PermissionBridge<'a>           — pure: (store, plugin, operation) -> Decision
//!
//! fingerprint::fingerprint_stream — pure SHA-256 framing per the content
//!                                    fingerprint contract (no I/O)
//!
//! artifacts::SkillRegistry       — plugin-owned artifact registry, priority
//!                                   tagging, first-wins dedup
//! ```
//!
//! Filesystem I/O (directory scanning, reading plugin bytes, the on-disk
//! envelope with atomic write-rename) lives in the sibling
//! `vellum-plugin-trust-fs` crate, which depends on this one. Keeping this
//! crate free of I/O is a structural guarantee that the Permission Bridge
//! can never observe or cause a suspension point.
//!
//! ## Quick Start
//!
//! ```rust
//! use vellum_plugin_trust_core::{
//!     store::TrustStore,
//!     bridge::PermissionBridge,
//!     types::{Capability, PluginOperation, TrustLevel, TrustedPlugin},
//! };
//!
//! let mut store = TrustStore::new();
//! store.set(TrustedPlugin {
//!     plugin_name: "acme-linter".into(),
//!     version: "1.0.0".into(),
//!     trusted_at: "2025-01-02T12:00:00.000Z".into(),
//!     capabilities: [Capability::ExecuteHooks].into_iter().collect(),
//!     content_hash: "a".repeat(64),
//!     trust_level: TrustLevel::Full,
//! }).unwrap();
//!
//! let bridge = PermissionBridge::new(&store);
//! let decision = bridge.check("acme-linter", &"a".repeat(64), &PluginOperation::ExecuteHook);
//! assert!(decision.is_allowed());
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod artifacts;
pub mod bridge;
pub mod config;
pub mod error;
pub mod fingerprint;
pub mod store;
pub mod types;

pub use bridge::{BridgeDecision, PermissionBridge};
pub use error::TrustError;
pub use store::TrustStore;
pub use types::{
    Capability, ContentFingerprint, DiscoveredPlugin, PluginOperation, PluginSource, TrustLevel,
    TrustStoreFile, TrustedPlugin,
};
