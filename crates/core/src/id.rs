// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Commit fingerprint generation

use rand::Rng;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Length of a commit fingerprint.
pub const FINGERPRINT_LEN: usize = 7;

const ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789";

/// Define a newtype ID wrapper around `String`.
///
/// Generates `new()`, `as_str()`, `Display`, `From<String>`, `From<&str>`,
/// `PartialEq<str>`, `PartialEq<&str>`, and `Borrow<str>` implementations.
/// The wrapper serializes as a bare string.
///
/// ```ignore
/// define_id! {
///     /// Doc comment for the ID type.
///     pub struct CommitId;
/// }
/// ```
#[macro_export]
macro_rules! define_id {
    (
        $(#[$meta:meta])*
        pub struct $name:ident;
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub String);

        impl $name {
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self(s)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self(s.to_string())
            }
        }

        impl PartialEq<str> for $name {
            fn eq(&self, other: &str) -> bool {
                self.0 == other
            }
        }

        impl PartialEq<&str> for $name {
            fn eq(&self, other: &&str) -> bool {
                self.0 == *other
            }
        }

        impl std::borrow::Borrow<str> for $name {
            fn borrow(&self) -> &str {
                &self.0
            }
        }
    };
}

/// Returns true if `s` has the shape of a commit fingerprint: seven
/// characters from `[a-z0-9]`.
pub fn is_fingerprint(s: &str) -> bool {
    s.len() == FINGERPRINT_LEN && s.bytes().all(|b| ALPHABET.contains(&b))
}

/// Generates commit fingerprints.
///
/// Implementations only promise well-formed values; uniqueness within a
/// repository is enforced by the caller, which retries on collision.
pub trait IdGen: Send + Sync {
    fn next(&self) -> String;
}

/// Random fingerprint generator for interactive use
#[derive(Clone, Default)]
pub struct FingerprintIdGen;

impl IdGen for FingerprintIdGen {
    fn next(&self) -> String {
        let mut rng = rand::rng();
        (0..FINGERPRINT_LEN)
            .map(|_| ALPHABET[rng.random_range(0..ALPHABET.len())] as char)
            .collect()
    }
}

/// Sequential fingerprint generator for tests and deterministic sessions.
///
/// Produces `c000001`, `c000002`, ... (prefix letter plus six digits).
#[derive(Clone)]
pub struct SequentialIdGen {
    prefix: char,
    counter: Arc<AtomicU64>,
}

impl SequentialIdGen {
    /// `prefix` must be a lowercase ASCII letter or digit; anything else
    /// falls back to `c`.
    pub fn new(prefix: char) -> Self {
        let prefix = if prefix.is_ascii_lowercase() || prefix.is_ascii_digit() {
            prefix
        } else {
            'c'
        };
        Self {
            prefix,
            counter: Arc::new(AtomicU64::new(1)),
        }
    }
}

impl Default for SequentialIdGen {
    fn default() -> Self {
        Self::new('c')
    }
}

impl IdGen for SequentialIdGen {
    fn next(&self) -> String {
        let n = self.counter.fetch_add(1, Ordering::SeqCst) % 1_000_000;
        format!("{}{:06}", self.prefix, n)
    }
}

#[cfg(test)]
#[path = "id_tests.rs"]
mod tests;
