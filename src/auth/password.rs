use argon2::{
    Algorithm, Argon2, Params, Version,
    password_hash::{PasswordHash, PasswordHasher as _, PasswordVerifier, SaltString},
};
use rand::rngs::OsRng;

use crate::error::{Error, Result};
use crate::types::Credential;

const ARGON2_MEMORY: u32 = 19 * 1024; // 19MB
const ARGON2_ITERATIONS: u32 = 2;
const ARGON2_PARALLELISM: u32 = 1;
const ARGON2_OUTPUT_LEN: usize = 32;

/// Salted one-way hashing for client credentials.
pub struct PasswordHasher {
    argon2: Argon2<'static>,
}

impl Default for PasswordHasher {
    fn default() -> Self {
        Self::new()
    }
}

impl PasswordHasher {
    #[must_use]
    pub fn new() -> Self {
        let params = Params::new(
            ARGON2_MEMORY,
            ARGON2_ITERATIONS,
            ARGON2_PARALLELISM,
            Some(ARGON2_OUTPUT_LEN),
        )
        .unwrap_or_default();

        Self {
            argon2: Argon2::new(Algorithm::Argon2id, Version::V0x13, params),
        }
    }

    /// Hashes a password using Argon2id with a fresh random salt.
    pub fn hash(&self, password: &str) -> Result<String> {
        let salt = SaltString::generate(&mut OsRng);
        let hash = self
            .argon2
            .hash_password(password.as_bytes(), &salt)
            .map_err(|e| Error::Hash(e.to_string()))?;
        Ok(hash.to_string())
    }

    /// Builds the stored credential pair: the hash plus the plaintext copy
    /// kept in `original_password`.
    pub fn credential(&self, password: &str) -> Result<Credential> {
        Ok(Credential {
            hash: self.hash(password)?,
            plaintext: password.to_string(),
        })
    }

    /// Verifies a plaintext password against a stored hash
    pub fn verify(&self, password: &str, hash: &str) -> Result<bool> {
        let parsed_hash =
            PasswordHash::new(hash).map_err(|e| Error::Hash(format!("invalid hash format: {e}")))?;

        match self.argon2.verify_password(password.as_bytes(), &parsed_hash) {
            Ok(()) => Ok(true),
            Err(argon2::password_hash::Error::Password) => Ok(false),
            Err(e) => Err(Error::Hash(format!("failed to verify password: {e}"))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_is_phc_format() {
        let hasher = PasswordHasher::new();
        let hash = hasher.hash("s3cret").unwrap();

        assert!(hash.starts_with("$argon2id$"));
        assert_ne!(hash, "s3cret");
    }

    #[test]
    fn test_same_password_gets_different_salts() {
        let hasher = PasswordHasher::new();
        let first = hasher.hash("s3cret").unwrap();
        let second = hasher.hash("s3cret").unwrap();

        assert_ne!(first, second);
    }

    #[test]
    fn test_verification_correct() {
        let hasher = PasswordHasher::new();
        let hash = hasher.hash("s3cret").unwrap();

        assert!(hasher.verify("s3cret", &hash).unwrap());
    }

    #[test]
    fn test_verification_wrong_password() {
        let hasher = PasswordHasher::new();
        let hash = hasher.hash("s3cret").unwrap();

        assert!(!hasher.verify("s3cret!", &hash).unwrap());
    }

    #[test]
    fn test_verify_rejects_malformed_hash() {
        let hasher = PasswordHasher::new();
        assert!(hasher.verify("s3cret", "not-a-hash").is_err());
    }

    #[test]
    fn test_credential_keeps_plaintext() {
        let hasher = PasswordHasher::new();
        let credential = hasher.credential("s3cret").unwrap();

        assert_eq!(credential.plaintext, "s3cret");
        assert!(hasher.verify("s3cret", &credential.hash).unwrap());
    }
}
