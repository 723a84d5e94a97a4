// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 MuVeraAI Corporation

//! Pure content fingerprinting.
//!
//! [`fingerprint_stream`] takes already-read `(path, bytes)` pairs rather
//! than touching the filesystem itself — reading the declared files is the
//! fs crate's job (`identity::fingerprint`). Keeping this function pure
//! means it can run in `no_std`, is trivially fuzzable, and has no
//! suspension points of its own.

use alloc::string::String;
use alloc::vec::Vec;
use sha2::{Digest, Sha256};

/// One file's declared relative path (forward-slash separated) and its raw
/// bytes, as read by the caller.
pub struct FileEntry<'a> {
    pub path: &'a str,
    pub bytes: &'a [u8],
}

/// Compute the content fingerprint for a plugin's declared files.
///
/// `entries` must already be sorted by `path` using byte-lexicographic
/// ordering — this function does not sort, so callers that want a
/// fingerprint independent of input order must sort before calling, or
/// call [`fingerprint_files`] which sorts for them.
///
/// For each entry, in order: feeds the UTF-8 path, a `0x00` separator, the
/// byte length as 8-byte big-endian, another `0x00` separator, then the
/// raw bytes into a single SHA-256 stream. No trailing separator follows
/// the last entry. Returns the lowercase hex digest.
pub fn fingerprint_stream(entries: &[FileEntry<'_>]) -> String {
    let mut hasher = Sha256::new();
    for entry in entries {
        hasher.update(entry.path.as_bytes());
        hasher.update([0u8]);
        hasher.update((entry.bytes.len() as u64).to_be_bytes());
        hasher.update([0u8]);
        hasher.update(entry.bytes);
    }
    let digest = hasher.finalize();
    hex_lower(&digest)
}

/// Convenience wrapper that sorts `entries` by path (byte-lexicographic,
/// forward slashes treated as plain bytes) before fingerprinting, so the
/// result is independent of the order the caller collected them in.
pub fn fingerprint_files(mut entries: Vec<FileEntry<'_>>) -> String {
    entries.sort_by(|a, b| a.path.as_bytes().cmp(b.path.as_bytes()));
    fingerprint_stream(&entries)
}

fn hex_lower(bytes: &[u8]) -> String {
    const HEX: &[u8; 16] = b"0123456789abcdef";
    let mut out = String::with_capacity(bytes.len() * 2);
    for b in bytes {
        out.push(HEX[(b >> 4) as usize] as char);
        out.push(HEX[(b & 0x0f) as usize] as char);
    }
    out
}
