//! Password hashing.
//!
//! Argon2id, PHC string format. Verification goes through the password-hash
//! verifier, which compares digests in constant time.

use std::sync::LazyLock;

use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};

pub const MIN_PASSWORD_LEN: usize = 8;

// Verified against when the account does not exist, so an unknown identifier
// costs the same argon2 run as a wrong password.
static DECOY_HASH: LazyLock<Option<String>> =
    LazyLock::new(|| hash_password("decoy-credential-that-never-matches").ok());

#[derive(Debug, thiserror::Error)]
pub enum PasswordError {
    #[error("password hashing failed")]
    HashingFailed,
    #[error("password mismatch")]
    Mismatch,
    #[error("stored hash is not a valid PHC string")]
    InvalidHashFormat,
}

pub fn hash_password(password: &str) -> Result<String, PasswordError> {
    let salt = SaltString::generate(&mut OsRng);

    let hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|_| PasswordError::HashingFailed)?;

    Ok(hash.to_string())
}

pub fn verify_password(password: &str, hash: &str) -> Result<(), PasswordError> {
    let parsed_hash = PasswordHash::new(hash).map_err(|_| PasswordError::InvalidHashFormat)?;

    Argon2::default()
        .verify_password(password.as_bytes(), &parsed_hash)
        .map_err(|_| PasswordError::Mismatch)
}

/// PHC hash standing in for a missing account. Computed once per process.
pub fn decoy_hash() -> &'static str {
    DECOY_HASH.as_deref().unwrap_or_default()
}

/// Signup rule: non-blank, at least [`MIN_PASSWORD_LEN`] characters.
pub fn validate_password_strength(password: &str) -> Result<(), &'static str> {
    if password.trim().is_empty() {
        return Err("password cannot be blank");
    }
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err("password must be at least 8 characters");
    }
    Ok(())
}
