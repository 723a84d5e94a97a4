// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 MuVeraAI Corporation

//! File-backed Trust Store persistence.
//!
//! [`FileTrustStore`] owns a path and an in-memory
//! [`TrustStore`][vellum_plugin_trust_core::store::TrustStore], and is the
//! only place that reads or writes the on-disk JSON envelope. Every
//! mutation happens against the in-memory store via [`FileTrustStore::store`]
//! / [`FileTrustStore::store_mut`]; nothing is durable until [`save`][FileTrustStore::save]
//! is called.
//!
//! ## Corruption recovery
//!
//! If the file exists but is unparseable or schema-invalid — malformed
//! JSON, unknown schema version, an invalid capability string, a
//! malformed content hash — `load` attempts to copy the existing bytes to
//! a sibling `<path>.backup`, resets the in-memory state to empty, and
//! returns successfully either way. The backup copy is best-effort: even a
//! failure to write it (a vanished source file, a permission error on the
//! directory) does not turn recovery into an error — the degraded state is
//! expected to trigger a host-side re-approval flow, not a crash.
//!
//! ## Atomic write
//!
//! `save` serializes to a sibling `<path>.tmp` and renames it over `path`
//! — a single `rename` syscall is the atomic commit point. A crash before
//! the rename leaves the prior file (or no file) untouched; a crash after
//! leaves the new file complete. There is no state where `load` can
//! observe a torn write.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::{info, warn};
use vellum_plugin_trust_core::store::TrustStore;
use vellum_plugin_trust_core::types::TrustStoreFile;

use crate::error::FsError;

/// A [`TrustStore`] paired with the on-disk path it persists to.
///
/// # Examples
///
/// ```rust,no_run
/// use vellum_plugin_trust_fs::storage::FileTrustStore;
///
/// let mut file_store = FileTrustStore::load("/var/lib/vellum/trusted-plugins.json")
///     .expect("failed to load trust store");
/// file_store.save().expect("failed to persist trust store");
/// ```
pub struct FileTrustStore {
    path: PathBuf,
    store: TrustStore,
}

impl FileTrustStore {
    /// Read `path`, validate the envelope and schema, and populate the
    /// in-memory store.
    ///
    /// A missing file initializes to an empty store (not an error). A
    /// file unreadable due to OS permissions fails with
    /// [`FsError::PermissionDenied`]. A present-but-invalid file (bad
    /// JSON, unknown schema version, or any schema-invalid entry)
    /// triggers corruption recovery rather than returning an error.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, FsError> {
        let path = path.as_ref().to_path_buf();

        let raw = match fs::read_to_string(&path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                return Ok(Self { path, store: TrustStore::new() });
            }
            Err(err) => return Err(FsError::from_io(err)),
        };

        let parsed: Result<TrustStoreFile, _> = serde_json::from_str(&raw);
        let store = match parsed.map_err(|e| e.to_string()).and_then(|file| {
            TrustStore::from_envelope(file).map_err(|e| e.to_string())
        }) {
            Ok(store) => store,
            Err(reason) => {
                warn!(path = %path.display(), %reason, "trust store corrupted, recovering to empty state");
                if let Err(backup_err) = backup_corrupted_file(&path) {
                    warn!(path = %path.display(), error = %backup_err, "could not back up corrupted trust store");
                }
                TrustStore::new()
            }
        };

        Ok(Self { path, store })
    }

    /// Serialize the in-memory store under the current schema version,
    /// creating parent directories as needed, then commit via
    /// write-temp-then-rename.
    pub fn save(&self) -> Result<(), FsError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(FsError::from_io)?;
            }
        }

        let envelope = self.store.to_envelope();
        let json = serde_json::to_string_pretty(&envelope)
            .map_err(|e| FsError::InvalidArgument(e.to_string()))?;

        let tmp_path = self.path.with_extension("tmp");
        fs::write(&tmp_path, json).map_err(FsError::from_io)?;
        fs::rename(&tmp_path, &self.path).map_err(FsError::from_io)?;

        info!(path = %self.path.display(), "trust store saved");
        Ok(())
    }

    /// Borrow the underlying in-memory store.
    pub fn store(&self) -> &TrustStore {
        &self.store
    }

    /// Mutably borrow the underlying in-memory store, for `set`/`delete`/
    /// `clear` calls. Mutations are not durable until [`save`][Self::save]
    /// is called.
    pub fn store_mut(&mut self) -> &mut TrustStore {
        &mut self.store
    }

    /// The path this instance persists to.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Copy `path`'s existing bytes to `<path>.backup`. The caller treats any
/// error this returns as advisory only — a failed backup never blocks
/// corruption recovery from completing.
fn backup_corrupted_file(path: &Path) -> Result<(), FsError> {
    let backup_path = path.with_extension(backup_extension(path));
    match fs::copy(path, &backup_path) {
        Ok(_) => Ok(()),
        Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(()),
        Err(err) => Err(FsError::from_io(err)),
    }
}

fn backup_extension(path: &Path) -> String {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some(ext) => format!("{ext}.backup"),
        None => "backup".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vellum_plugin_trust_core::types::{Capability, TrustLevel, TrustedPlugin};

    fn sample() -> TrustedPlugin {
        TrustedPlugin {
            plugin_name: "acme-linter".to_string(),
            version: "1.0.0".to_string(),
            trusted_at: "2025-01-02T12:00:00.000Z".to_string(),
            capabilities: [Capability::ExecuteHooks].into_iter().collect(),
            content_hash: "a".repeat(64),
            trust_level: TrustLevel::Full,
        }
    }

    #[test]
    fn missing_file_loads_as_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("trust-store.json");
        let file_store = FileTrustStore::load(&path).unwrap();
        assert_eq!(file_store.store().size(), 0);
    }

    #[test]
    fn save_then_load_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("trust-store.json");

        let mut file_store = FileTrustStore::load(&path).unwrap();
        file_store.store_mut().set(sample()).unwrap();
        file_store.save().unwrap();

        let reloaded = FileTrustStore::load(&path).unwrap();
        assert_eq!(reloaded.store().size(), 1);
        assert_eq!(reloaded.store().get("acme-linter").unwrap().version, "1.0.0");
    }

    #[test]
    fn corrupted_file_recovers_to_empty_and_leaves_a_backup() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("trust-store.json");
        fs::write(&path, b"{ corrupted").unwrap();

        let file_store = FileTrustStore::load(&path).unwrap();
        assert_eq!(file_store.store().size(), 0);

        let backup_path = path.with_extension("json.backup");
        let backup_contents = fs::read_to_string(&backup_path).unwrap();
        assert_eq!(backup_contents, "{ corrupted");
    }

    #[test]
    fn after_recovery_a_fresh_save_and_load_contains_only_the_new_entry() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("trust-store.json");
        fs::write(&path, b"{ corrupted").unwrap();

        let mut file_store = FileTrustStore::load(&path).unwrap();
        file_store.store_mut().set(sample()).unwrap();
        file_store.save().unwrap();

        let reloaded = FileTrustStore::load(&path).unwrap();
        assert_eq!(reloaded.store().size(), 1);
        assert!(reloaded.store().has("acme-linter"));
    }

    #[test]
    fn unknown_schema_version_is_treated_as_corruption() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("trust-store.json");
        fs::write(&path, br#"{"version":99,"plugins":{}}"#).unwrap();

        let file_store = FileTrustStore::load(&path).unwrap();
        assert_eq!(file_store.store().size(), 0);
        assert!(path.with_extension("json.backup").exists());
    }

    #[test]
    fn save_creates_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("dir").join("trust-store.json");

        let mut file_store = FileTrustStore::load(&path).unwrap();
        file_store.store_mut().set(sample()).unwrap();
        file_store.save().unwrap();

        assert!(path.exists());
    }

    #[cfg(unix)]
    #[test]
    fn load_recovers_to_empty_even_when_the_backup_copy_cannot_be_written() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("trust-store.json");
        fs::write(&path, b"{ corrupted").unwrap();

        let mut perms = fs::metadata(dir.path()).unwrap().permissions();
        perms.set_mode(0o500);
        fs::set_permissions(dir.path(), perms.clone()).unwrap();

        let result = FileTrustStore::load(&path);

        perms.set_mode(0o700);
        fs::set_permissions(dir.path(), perms).unwrap();

        let file_store = result.unwrap();
        assert_eq!(file_store.store().size(), 0);
    }
}
