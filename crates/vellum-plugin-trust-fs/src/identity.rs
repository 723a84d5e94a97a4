// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 MuVeraAI Corporation

//! Identity & Hashing, the filesystem half.
//!
//! [`fingerprint`] reads a plugin's declared files off disk and feeds them
//! into [`vellum_plugin_trust_core::fingerprint::fingerprint_stream`] — the
//! actual byte-framing and SHA-256 computation live in the core crate so
//! they stay pure and `no_std`-testable; this module is only responsible
//! for turning a root path and a manifest's declared file list into the
//! `(path, bytes)` pairs that function expects.

use std::fs;
use std::path::Path;

use vellum_plugin_trust_core::fingerprint::{fingerprint_stream, FileEntry};
use vellum_plugin_trust_core::types::ContentFingerprint;

use crate::error::FsError;

/// Compute the content fingerprint for a plugin rooted at `root_path`,
/// given the manifest's declared `files` (relative, forward-slash paths).
///
/// Fails with [`FsError::Io`] / [`FsError::PermissionDenied`] if any
/// declared file is unreadable — every file in the manifest's `files` list
/// contributes to the fingerprint, so any one of them being missing or
/// inaccessible fails the whole computation.
///
/// Files are read in the order declared in `files`, but the fingerprint is
/// computed over the byte-lexicographic sort of their paths — the
/// caller's declaration order has no bearing on the resulting hash.
pub fn fingerprint(root_path: &Path, files: &[String]) -> Result<ContentFingerprint, FsError> {
    let mut contents: Vec<(String, Vec<u8>)> = Vec::with_capacity(files.len());
    for relative in files {
        let full_path = root_path.join(relative);
        let bytes = fs::read(&full_path).map_err(FsError::from_io)?;
        contents.push((relative.clone(), bytes));
    }

    let entries: Vec<FileEntry<'_>> =
        contents.iter().map(|(path, bytes)| FileEntry { path, bytes }).collect();

    let mut sorted = entries;
    sorted.sort_by(|a, b| a.path.as_bytes().cmp(b.path.as_bytes()));
    Ok(fingerprint_stream(&sorted))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn fingerprint_is_stable_across_declaration_order() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("a.txt"), b"1").unwrap();
        fs::write(dir.path().join("b.txt"), b"2").unwrap();

        let forward = fingerprint(dir.path(), &["a.txt".to_string(), "b.txt".to_string()]).unwrap();
        let reverse = fingerprint(dir.path(), &["b.txt".to_string(), "a.txt".to_string()]).unwrap();
        assert_eq!(forward, reverse);
    }

    #[test]
    fn fingerprint_changes_when_a_declared_file_changes() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("plugin.json"), b"{}").unwrap();
        let before = fingerprint(dir.path(), &["plugin.json".to_string()]).unwrap();

        fs::write(dir.path().join("plugin.json"), b"{ }").unwrap();
        let after = fingerprint(dir.path(), &["plugin.json".to_string()]).unwrap();

        assert_ne!(before, after);
    }

    #[test]
    fn fingerprint_is_unaffected_by_the_root_path_itself() {
        let dir_a = tempfile::tempdir().unwrap();
        let dir_b = tempfile::tempdir().unwrap();
        fs::write(dir_a.path().join("plugin.json"), b"{}").unwrap();
        fs::write(dir_b.path().join("plugin.json"), b"{}").unwrap();

        let a = fingerprint(dir_a.path(), &["plugin.json".to_string()]).unwrap();
        let b = fingerprint(dir_b.path(), &["plugin.json".to_string()]).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn missing_declared_file_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = fingerprint(dir.path(), &["missing.txt".to_string()]);
        assert!(result.is_err());
    }
}
