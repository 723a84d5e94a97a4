// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 MuVeraAI Corporation

//! The Skill/Artifact Adapter.
//!
//! Surfaces plugin-contributed artifacts — chiefly "skills", named text
//! documents — in a host-wide registry. Every artifact is tagged with its
//! originating plugin for provenance, assigned a fixed source/priority,
//! and deduplicated first-wins by the order the caller composes the
//! registry in.

use alloc::string::{String, ToString};
use alloc::vec::Vec;
use hashbrown::HashMap;

/// The fixed priority assigned to every plugin-sourced artifact. Workspace
/// entries are conventionally assigned priority 100 by the host, so they
/// always outrank a plugin artifact of the same name; this adapter does
/// not know about workspace entries, it only guarantees its own entries
/// carry this losing priority.
pub const PLUGIN_ARTIFACT_PRIORITY: u8 = 50;

/// A single plugin-contributed artifact, already tagged with provenance
/// and priority.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactDescriptor {
    pub name: String,
    pub content: String,
    /// `plugin:<pluginName>`, assigned by [`SkillRegistry::from_plugins`].
    pub source_tag: String,
    pub priority: u8,
}

/// An artifact as contributed by a plugin, before provenance tagging.
#[derive(Debug, Clone)]
pub struct PluginArtifact {
    pub name: String,
    pub content: String,
}

/// A host-wide, deduplicated view over plugin-contributed artifacts.
///
/// # Examples
///
/// ```rust
/// use vellum_plugin_trust_core::artifacts::{PluginArtifact, SkillRegistry};
///
/// let registry = SkillRegistry::from_plugins([
///     ("acme-linter".to_string(), vec![
///         PluginArtifact { name: "lint-rules".to_string(), content: "...".to_string() },
///     ]),
/// ]);
///
/// assert_eq!(registry.size(), 1);
/// assert!(registry.has("lint-rules"));
/// assert_eq!(registry.get("lint-rules").unwrap().source_tag, "plugin:acme-linter");
/// ```
#[derive(Debug, Default, Clone)]
pub struct SkillRegistry {
    artifacts: HashMap<String, ArtifactDescriptor>,
    order: Vec<String>,
}

impl SkillRegistry {
    /// Build a registry from an iterator of `(plugin_name, artifacts)`
    /// pairs, in the order the caller supplies them. First-wins: once a
    /// name has been inserted, later artifacts of the same name (from the
    /// same or a different plugin) are dropped.
    pub fn from_plugins<I>(plugins: I) -> Self
    where
        I: IntoIterator<Item = (String, Vec<PluginArtifact>)>,
    {
        let mut registry = Self::default();
        for (plugin_name, artifacts) in plugins {
            for artifact in artifacts {
                registry.insert_first_wins(&plugin_name, artifact);
            }
        }
        registry
    }

    fn insert_first_wins(&mut self, plugin_name: &str, artifact: PluginArtifact) {
        if self.artifacts.contains_key(&artifact.name) {
            return;
        }
        let descriptor = ArtifactDescriptor {
            name: artifact.name.clone(),
            content: artifact.content,
            source_tag: alloc::format!("plugin:{plugin_name}"),
            priority: PLUGIN_ARTIFACT_PRIORITY,
        };
        self.order.push(descriptor.name.clone());
        self.artifacts.insert(descriptor.name.clone(), descriptor);
    }

    /// The number of distinct artifacts held.
    pub fn size(&self) -> usize {
        self.artifacts.len()
    }

    /// Whether an artifact with this name exists.
    pub fn has(&self, name: &str) -> bool {
        self.artifacts.contains_key(name)
    }

    /// Look up an artifact by name.
    pub fn get(&self, name: &str) -> Option<&ArtifactDescriptor> {
        self.artifacts.get(name)
    }

    /// All artifact names, in registration (first-wins composition) order.
    pub fn names(&self) -> &[String] {
        &self.order
    }

    /// All artifacts, in registration order.
    pub fn all(&self) -> Vec<&ArtifactDescriptor> {
        self.order.iter().filter_map(|name| self.artifacts.get(name)).collect()
    }
}
