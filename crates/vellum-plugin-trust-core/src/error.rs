// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 MuVeraAI Corporation

//! The error taxonomy shared across the trust subsystem.
//!
//! `TrustError` is a plain enum, not a `thiserror`-derived type, matching
//! the teacher's `ConfigError` idiom: a hand-written `Display` and a
//! `std::error::Error` impl gated behind the `std` feature. `FileCorrupted`
//! is part of the taxonomy but is never returned from a public
//! `TrustStore::load` — it is consumed internally by corruption recovery
//! and only appears here so the fs crate has a name for the condition it
//! swallows.

use core::fmt;

/// Errors surfaced by the trust subsystem.
///
/// `PermissionDenied` and `IoError` are surfaced verbatim by the store;
/// `InvalidArgument` is raised synchronously by in-memory mutators given
/// malformed input; `Cancelled` is raised by cooperative cancellation in
/// discovery, hashing, and store I/O. `FileCorrupted` is retained for
/// completeness and for internal use by corruption recovery, but callers
/// should never observe it escape `load()`.
#[derive(Debug)]
pub enum TrustError {
    /// Generic filesystem failure other than permission or not-found.
    IoError(alloc::string::String),
    /// The OS rejected access on a path this process is entitled to use.
    PermissionDenied(alloc::string::String),
    /// Malformed JSON, schema violation, or unknown schema version.
    /// Never surfaced from `load()` — consumed by corruption recovery.
    FileCorrupted(alloc::string::String),
    /// Caller passed an unknown capability string or otherwise malformed
    /// argument to a mutator.
    InvalidArgument(alloc::string::String),
    /// Cooperative cancellation fired at a suspension point.
    Cancelled,
}

impl fmt::Display for TrustError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TrustError::IoError(msg) => write!(f, "I/O error: {msg}"),
            TrustError::PermissionDenied(msg) => write!(f, "permission denied: {msg}"),
            TrustError::FileCorrupted(msg) => write!(f, "file corrupted: {msg}"),
            TrustError::InvalidArgument(msg) => write!(f, "invalid argument: {msg}"),
            TrustError::Cancelled => write!(f, "operation cancelled"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for TrustError {}
