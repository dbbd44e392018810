//! HMAC signing key for access tokens.
//!
//! The key is built once from configuration at startup and then only shared by
//! reference (inside `TokenCodec`). Nothing mutates it afterwards.
use std::fmt;

use sha2::{Digest, Sha256};

/// Minimum key length for HS256 (bytes).
pub const MIN_KEY_BYTES: usize = 32;

/// Used only when `JWT_SECRET` is unset outside production.
pub const DEVELOPMENT_SECRET: &str = "gamesup-development-secret-must-be-changed-for-production";

#[derive(Clone, PartialEq, Eq)]
pub struct SigningKey {
    bytes: Vec<u8>,
}

impl SigningKey {
    /// Build the key from the configured secret.
    ///
    /// Secrets shorter than [`MIN_KEY_BYTES`] are stretched to exactly 32 bytes
    /// with SHA-256; longer secrets are used as-is.
    pub fn derive(secret: &str) -> Self {
        let raw = secret.as_bytes();
        let bytes = if raw.len() < MIN_KEY_BYTES {
            Sha256::digest(raw).to_vec()
        } else {
            raw.to_vec()
        };

        Self { bytes }
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }
}

impl fmt::Debug for SigningKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Do not print key material
        f.debug_struct("SigningKey")
            .field("len", &self.bytes.len())
            .finish()
    }
}
