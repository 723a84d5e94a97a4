// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 MuVeraAI Corporation

//! Filesystem-facing error type.
//!
//! [`FsError`] wraps [`std::io::Error`] values with the same kind
//! taxonomy as [`vellum_plugin_trust_core::error::TrustError`], so that the
//! boundary between "the core rejected this data" and "the OS rejected
//! this access" stays visible to callers while still composing cleanly
//! with `?`.

use std::fmt;
use std::io;

use vellum_plugin_trust_core::error::TrustError;

/// Errors surfaced by discovery, hashing, and the file-backed Trust Store.
#[derive(Debug)]
pub enum FsError {
    /// Generic filesystem failure other than permission or not-found.
    Io(io::Error),
    /// The OS rejected access on a path this process is entitled to use.
    PermissionDenied(io::Error),
    /// Caller passed malformed input (delegates to the core's own check).
    InvalidArgument(String),
    /// Cooperative cancellation fired at a suspension point.
    Cancelled,
}

impl FsError {
    /// Classify a raw [`io::Error`] into [`FsError::PermissionDenied`] or
    /// [`FsError::Io`] based on its [`io::ErrorKind`].
    pub fn from_io(error: io::Error) -> Self {
        match error.kind() {
            io::ErrorKind::PermissionDenied => FsError::PermissionDenied(error),
            _ => FsError::Io(error),
        }
    }
}

impl fmt::Display for FsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FsError::Io(err) => write!(f, "I/O error: {err}"),
            FsError::PermissionDenied(err) => write!(f, "permission denied: {err}"),
            FsError::InvalidArgument(msg) => write!(f, "invalid argument: {msg}"),
            FsError::Cancelled => write!(f, "operation cancelled"),
        }
    }
}

impl std::error::Error for FsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FsError::Io(err) | FsError::PermissionDenied(err) => Some(err),
            FsError::InvalidArgument(_) | FsError::Cancelled => None,
        }
    }
}

impl From<io::Error> for FsError {
    fn from(error: io::Error) -> Self {
        FsError::from_io(error)
    }
}

impl From<TrustError> for FsError {
    fn from(error: TrustError) -> Self {
        match error {
            TrustError::IoError(msg) => FsError::Io(io::Error::new(io::ErrorKind::Other, msg)),
            TrustError::PermissionDenied(msg) => {
                FsError::PermissionDenied(io::Error::new(io::ErrorKind::PermissionDenied, msg))
            }
            TrustError::FileCorrupted(msg) => {
                // Never expected to cross this boundary (corruption is
                // consumed internally by `TrustStore::load`), but kept
                // total rather than panicking if it ever does.
                FsError::Io(io::Error::new(io::ErrorKind::InvalidData, msg))
            }
            TrustError::InvalidArgument(msg) => FsError::InvalidArgument(msg),
            TrustError::Cancelled => FsError::Cancelled,
        }
    }
}
