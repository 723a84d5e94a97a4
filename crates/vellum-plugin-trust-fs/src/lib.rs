// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 MuVeraAI Corporation

//! # vellum-plugin-trust-fs
//!
//! `std`-only filesystem I/O for the Vellum plugin trust subsystem:
//! content hashing, the discovery scanner, and the file-backed Trust Store
//! envelope (`load`/`save`).
//!
//! The pure domain logic — capability vocabulary, in-memory Trust Store
//! validation, and the Permission Bridge — lives in the sibling
//! `vellum_plugin_trust_core` crate, which this crate depends on.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use vellum_plugin_trust_fs::discovery;
//! use vellum_plugin_trust_fs::identity;
//! use vellum_plugin_trust_fs::storage::FileTrustStore;
//! use vellum_plugin_trust_core::bridge::PermissionBridge;
//! use vellum_plugin_trust_core::types::{PluginOperation, PluginSource};
//! use std::path::PathBuf;
//!
//! let roots = vec![(PathBuf::from(".vellum/plugins"), PluginSource::Project)];
//! let candidates = discovery::discover(&roots);
//!
//! let file_store = FileTrustStore::load("/var/lib/vellum/trusted-plugins.json")
//!     .expect("failed to load trust store");
//!
//! for plugin in &candidates {
//!     let observed = identity::fingerprint(std::path::Path::new(&plugin.root_path), &[]).ok();
//!     if let Some(observed) = observed {
//!         let bridge = PermissionBridge::new(file_store.store());
//!         let _decision = bridge.check(&plugin.name, &observed, &PluginOperation::ExecuteHook);
//!     }
//! }
//! ```

pub mod discovery;
pub mod error;
pub mod identity;
pub mod manifest;
pub mod storage;

#[cfg(feature = "config-loader")]
pub mod config_loader;

#[cfg(feature = "async")]
pub mod async_ops;

pub use error::FsError;
pub use manifest::PluginManifest;
pub use storage::FileTrustStore;
