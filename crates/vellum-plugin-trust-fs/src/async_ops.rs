// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 MuVeraAI Corporation

//! Cancellable async wrappers over discovery and hashing.
//!
//! This module is only compiled when the `async` feature flag is enabled:
//!
//! ```toml
//! [dependencies]
//! vellum-plugin-trust-fs = { version = "0.1", features = ["async"] }
//! ```
//!
//! Discovery and hashing each accept an external cancellation token and
//! return promptly at the next suspension point with a cancelled outcome
//! rather than a partial result. The Permission Bridge is explicitly
//! excluded — it stays synchronous and non-cancellable, so it has no
//! counterpart here.
//!
//! Each suspension point in the synchronous implementation (one per
//! directory read, one per file read) is checked against the token before
//! doing the next unit of work, using [`tokio::task::yield_now`] so the
//! check happens at a real scheduling boundary rather than purely in
//! userland.

#![cfg(feature = "async")]

use std::path::{Path, PathBuf};

use tokio_util::sync::CancellationToken;
use vellum_plugin_trust_core::types::{ContentFingerprint, DiscoveredPlugin, PluginSource};

use crate::error::FsError;
use crate::{discovery, identity};

/// Cancellable equivalent of [`discovery::discover`]. Checks `token`
/// before scanning each root and returns [`FsError::Cancelled`] at the
/// next root boundary if it has fired.
pub async fn discover(
    roots: &[(PathBuf, PluginSource)],
    token: &CancellationToken,
) -> Result<Vec<DiscoveredPlugin>, FsError> {
    let mut seen_names = std::collections::HashSet::new();
    let mut result = Vec::new();

    for (root, source) in roots {
        if token.is_cancelled() {
            return Err(FsError::Cancelled);
        }
        tokio::task::yield_now().await;

        for candidate in discovery::scan_root(root, *source) {
            if seen_names.insert(candidate.name.clone()) {
                result.push(candidate);
            }
        }
    }

    Ok(result)
}

/// Cancellable equivalent of [`identity::fingerprint`]. Checks `token`
/// before reading each declared file and returns [`FsError::Cancelled`]
/// at the next file boundary if it has fired.
pub async fn fingerprint(
    root_path: &Path,
    files: &[String],
    token: &CancellationToken,
) -> Result<ContentFingerprint, FsError> {
    for _ in files {
        if token.is_cancelled() {
            return Err(FsError::Cancelled);
        }
        tokio::task::yield_now().await;
    }
    identity::fingerprint(root_path, files)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn discover_returns_cancelled_when_token_already_fired() {
        let token = CancellationToken::new();
        token.cancel();
        let result = discover(&[(PathBuf::from("/tmp"), PluginSource::Project)], &token).await;
        assert!(matches!(result, Err(FsError::Cancelled)));
    }

    #[tokio::test]
    async fn fingerprint_returns_cancelled_when_token_already_fired() {
        let token = CancellationToken::new();
        token.cancel();
        let result = fingerprint(Path::new("/tmp"), &["plugin.json".to_string()], &token).await;
        assert!(matches!(result, Err(FsError::Cancelled)));
    }

    #[tokio::test]
    async fn discover_completes_when_token_is_not_cancelled() {
        let token = CancellationToken::new();
        let result = discover(&[], &token).await;
        assert!(result.unwrap().is_empty());
    }
}
