// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 MuVeraAI Corporation

//! The Permission Bridge.
//!
//! [`PermissionBridge`] is a pure, synchronous function wrapped in a
//! struct: `(store, plugin_name, observed_fingerprint, operation) ->
//! BridgeDecision`. It never performs I/O — denial is returned as data,
//! never raised as an error, so hosts can branch on it and drive a
//! re-approval prompt.

use crate::store::TrustStore;
use crate::types::{Capability, PluginOperation, TrustLevel};

#[cfg(feature = "std")]
use tracing::debug;

/// The outcome of a Permission Bridge check. Never an error — a denial is
/// exactly as valid a result as an allowance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BridgeDecision {
    Allowed,
    DeniedUntrusted,
    DeniedCapability { required: Capability },
    DeniedFingerprintMismatch { expected: alloc::string::String, observed: alloc::string::String },
}

impl BridgeDecision {
    /// `true` iff this decision is [`BridgeDecision::Allowed`].
    pub fn is_allowed(&self) -> bool {
        matches!(self, BridgeDecision::Allowed)
    }
}

/// A pure view over a [`TrustStore`] that answers capability checks.
///
/// # Examples
///
/// ```rust
/// use vellum_plugin_trust_core::bridge::{BridgeDecision, PermissionBridge};
/// use vellum_plugin_trust_core::store::TrustStore;
/// use vellum_plugin_trust_core::types::{Capability, PluginOperation, TrustLevel, TrustedPlugin};
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
///
/// let bridge = PermissionBridge::new(&store);
/// let decision = bridge.check("acme-linter", &"a".repeat(64), &PluginOperation::ExecuteHook);
/// assert_eq!(decision, BridgeDecision::Allowed);
/// ```
pub struct PermissionBridge<'a> {
    store: &'a TrustStore,
}

impl<'a> PermissionBridge<'a> {
    /// Construct a bridge over the given store. Borrows the store for the
    /// bridge's lifetime — the bridge never mutates it.
    pub fn new(store: &'a TrustStore) -> Self {
        Self { store }
    }

    /// Decide whether `plugin_name` may perform `operation` right now,
    /// given `observed_fingerprint` (the plugin bundle's currently
    /// computed content fingerprint). Four checks run in order, the first
    /// to fail wins:
    ///
    /// 1. Missing entry → [`BridgeDecision::DeniedUntrusted`].
    /// 2. Fingerprint mismatch → [`BridgeDecision::DeniedFingerprintMismatch`].
    /// 3. `trust_level == None` → [`BridgeDecision::DeniedCapability`].
    /// 4. Capability absent → [`BridgeDecision::DeniedCapability`]; else
    ///    [`BridgeDecision::Allowed`].
    pub fn check(
        &self,
        plugin_name: &str,
        observed_fingerprint: &str,
        operation: &PluginOperation,
    ) -> BridgeDecision {
        let decision = self.check_inner(plugin_name, observed_fingerprint, operation);
        #[cfg(feature = "std")]
        debug!(plugin = plugin_name, ?decision, "permission bridge decision");
        decision
    }

    fn check_inner(
        &self,
        plugin_name: &str,
        observed_fingerprint: &str,
        operation: &PluginOperation,
    ) -> BridgeDecision {
        let entry = match self.store.get(plugin_name) {
            Some(entry) => entry,
            None => return BridgeDecision::DeniedUntrusted,
        };

        if entry.content_hash != observed_fingerprint {
            return BridgeDecision::DeniedFingerprintMismatch {
                expected: entry.content_hash.clone(),
                observed: observed_fingerprint.into(),
            };
        }

        if entry.trust_level == TrustLevel::None {
            return BridgeDecision::DeniedCapability { required: operation.required_capability() };
        }

        let required = operation.required_capability();
        if entry.effective_capabilities().contains(&required) {
            BridgeDecision::Allowed
        } else {
            BridgeDecision::DeniedCapability { required }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::TrustedPlugin;
    use alloc::string::ToString;

    fn store_with(trust_level: TrustLevel, capabilities: &[Capability], hash: &str) -> TrustStore {
        let mut store = TrustStore::new();
        store
            .set(TrustedPlugin {
                plugin_name: "acme-linter".to_string(),
                version: "1.0.0".to_string(),
                trusted_at: "2025-01-02T12:00:00.000Z".to_string(),
                capabilities: capabilities.iter().copied().collect(),
                content_hash: hash.to_string(),
                trust_level,
            })
            .unwrap();
        store
    }

    #[test]
    fn unknown_plugin_is_denied_untrusted() {
        let store = TrustStore::new();
        let bridge = PermissionBridge::new(&store);
        let decision = bridge.check("nope", &"a".repeat(64), &PluginOperation::ExecuteHook);
        assert_eq!(decision, BridgeDecision::DeniedUntrusted);
    }

    #[test]
    fn fingerprint_mismatch_is_denied_before_capability_check() {
        let store = store_with(TrustLevel::Full, &[Capability::ExecuteHooks], &"a".repeat(64));
        let bridge = PermissionBridge::new(&store);
        let decision = bridge.check("acme-linter", &"b".repeat(64), &PluginOperation::ExecuteHook);
        assert_eq!(
            decision,
            BridgeDecision::DeniedFingerprintMismatch {
                expected: "a".repeat(64),
                observed: "b".repeat(64),
            }
        );
    }

    #[test]
    fn trust_level_none_denies_even_with_matching_capability() {
        let store = store_with(TrustLevel::None, &[Capability::ExecuteHooks], &"a".repeat(64));
        let bridge = PermissionBridge::new(&store);
        let decision = bridge.check("acme-linter", &"a".repeat(64), &PluginOperation::ExecuteHook);
        assert_eq!(decision, BridgeDecision::DeniedCapability { required: Capability::ExecuteHooks });
    }

    #[test]
    fn missing_capability_is_denied() {
        let store = store_with(TrustLevel::Full, &[Capability::ExecuteHooks], &"a".repeat(64));
        let bridge = PermissionBridge::new(&store);
        let decision = bridge.check(
            "acme-linter",
            &"a".repeat(64),
            &PluginOperation::NetworkRequest { host: "example.com".to_string() },
        );
        assert_eq!(decision, BridgeDecision::DeniedCapability { required: Capability::NetworkAccess });
    }

    #[test]
    fn matching_capability_and_fingerprint_is_allowed() {
        let store = store_with(TrustLevel::Limited, &[Capability::AccessFilesystem], &"a".repeat(64));
        let bridge = PermissionBridge::new(&store);
        let decision = bridge.check(
            "acme-linter",
            &"a".repeat(64),
            &PluginOperation::ReadFile { path: "notes.txt".to_string() },
        );
        assert_eq!(decision, BridgeDecision::Allowed);
    }
}
