// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 MuVeraAI Corporation

//! The Discovery Scanner.
//!
//! Walks caller-supplied search roots and produces the deduplicated,
//! priority-ordered list of candidate plugins. A directory is a candidate
//! iff it contains a readable manifest at
//! [`MANIFEST_RELATIVE_PATH`][crate::manifest::MANIFEST_RELATIVE_PATH].

use std::fs;
use std::path::Path;

use tracing::warn;
use vellum_plugin_trust_core::types::{DiscoveredPlugin, PluginSource};

use crate::manifest::MANIFEST_RELATIVE_PATH;

/// Scan the direct children of `root` for plugin candidates tagged with
/// `source`. Returns candidates in unspecified order (the caller's
/// [`discover`] imposes the first-wins dedup and ordering).
///
/// A missing root is treated as empty, not an error. A root that exists
/// but cannot be read due to permissions emits a single `warn!`
/// diagnostic and is treated as empty. Permission errors on individual
/// children, and broken symlinks, are silently skipped.
pub fn scan_root(root: &Path, source: PluginSource) -> Vec<DiscoveredPlugin> {
    let entries = match fs::read_dir(root) {
        Ok(entries) => entries,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Vec::new(),
        Err(err) => {
            warn!(root = %root.display(), error = %err, "could not read discovery root, treating as empty");
            return Vec::new();
        }
    };

    let mut candidates = Vec::new();
    for entry in entries {
        let entry = match entry {
            Ok(entry) => entry,
            Err(_) => continue,
        };

        let child_path = entry.path();
        let is_dir = match fs::metadata(&child_path) {
            Ok(meta) => meta.is_dir(),
            Err(_) => continue, // broken symlink or permission error on this child: skip
        };
        if !is_dir {
            continue;
        }

        let manifest_path = child_path.join(MANIFEST_RELATIVE_PATH);
        if fs::metadata(&manifest_path).map(|m| m.is_file()).unwrap_or(false) {
            let name = match child_path.file_name().and_then(|n| n.to_str()) {
                Some(name) => name.to_string(),
                None => continue,
            };
            candidates.push(DiscoveredPlugin {
                name,
                root_path: child_path.to_string_lossy().into_owned(),
                manifest_path: manifest_path.to_string_lossy().into_owned(),
                source,
            });
        }
    }
    candidates
}

/// Scan every root in `roots`, in order, and return the first-wins
/// deduplicated candidate list: a candidate is emitted iff no earlier
/// candidate with the same `name` has already been emitted. Root order is
/// the only priority signal — callers rank roots by listing them in the
/// order they want to win collisions in. Result order preserves
/// first-occurrence order across all roots.
pub fn discover(roots: &[(std::path::PathBuf, PluginSource)]) -> Vec<DiscoveredPlugin> {
    let mut seen_names = std::collections::HashSet::new();
    let mut result = Vec::new();
    for (root, source) in roots {
        for candidate in scan_root(root, *source) {
            if seen_names.insert(candidate.name.clone()) {
                result.push(candidate);
            }
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn make_plugin(root: &Path, name: &str) {
        let plugin_dir = root.join(name).join(".vellum-plugin");
        fs::create_dir_all(&plugin_dir).unwrap();
        fs::write(plugin_dir.join("plugin.json"), format!(r#"{{"name":"{name}","version":"1.0.0"}}"#))
            .unwrap();
    }

    #[test]
    fn missing_root_is_treated_as_empty() {
        let candidates = scan_root(Path::new("/nonexistent/vellum/plugins"), PluginSource::Project);
        assert!(candidates.is_empty());
    }

    #[test]
    fn directory_without_manifest_is_not_a_candidate() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("not-a-plugin")).unwrap();
        let candidates = scan_root(dir.path(), PluginSource::Project);
        assert!(candidates.is_empty());
    }

    #[test]
    fn directory_with_manifest_is_a_candidate() {
        let dir = tempfile::tempdir().unwrap();
        make_plugin(dir.path(), "acme-linter");
        let candidates = scan_root(dir.path(), PluginSource::Project);
        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].name, "acme-linter");
    }

    #[test]
    fn discover_dedups_first_wins_by_root_priority() {
        let root_a = tempfile::tempdir().unwrap();
        let root_b = tempfile::tempdir().unwrap();
        make_plugin(root_a.path(), "shared");
        make_plugin(root_b.path(), "shared");

        let roots = vec![
            (root_a.path().to_path_buf(), PluginSource::Project),
            (root_b.path().to_path_buf(), PluginSource::User),
        ];
        let found = discover(&roots);

        assert_eq!(found.len(), 1);
        assert_eq!(found[0].source, PluginSource::Project);
        assert!(found[0].root_path.starts_with(&root_a.path().to_string_lossy().into_owned()));
    }

    #[test]
    fn discover_preserves_first_occurrence_order_across_roots() {
        let root_a = tempfile::tempdir().unwrap();
        let root_b = tempfile::tempdir().unwrap();
        make_plugin(root_a.path(), "from-a");
        make_plugin(root_b.path(), "from-b");

        let roots = vec![
            (root_a.path().to_path_buf(), PluginSource::Project),
            (root_b.path().to_path_buf(), PluginSource::User),
        ];
        let found = discover(&roots);

        assert_eq!(found.iter().map(|p| p.name.as_str()).collect::<Vec<_>>(), vec!["from-a", "from-b"]);
    }
}
