use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Algorithm, Argon2, Params, Version,
};
use std::fmt;

use crate::error::AuthConfigError;

/// Argon2 memory cost in KiB. Low-cost profile: these hashes protect
/// at-rest team configuration, not a login path.
pub const HASH_MEMORY_KIB: u32 = 4096;

/// Argon2 iteration count.
pub const HASH_ITERATIONS: u32 = 3;

/// Argon2 lane count.
pub const HASH_PARALLELISM: u32 = 1;

/// Newtype for password to prevent accidental logging
#[derive(Clone)]
pub struct Password(String);

impl Password {
    pub fn new(password: String) -> Self {
        Self(password)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Password(<redacted>)")
    }
}

/// Newtype for password hash
#[derive(Debug, Clone)]
pub struct PasswordHashString(String);

impl PasswordHashString {
    pub fn new(hash: String) -> Self {
        Self(hash)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

fn hasher() -> Result<Argon2<'static>, AuthConfigError> {
    let params = Params::new(HASH_MEMORY_KIB, HASH_ITERATIONS, HASH_PARALLELISM, None)
        .map_err(|e| AuthConfigError::HashingError(anyhow::anyhow!("Invalid hash parameters: {}", e)))?;

    Ok(Argon2::new(Algorithm::Argon2id, Version::V0x13, params))
}

/// Hash a password using Argon2
///
/// Uses the Argon2id variant with the module's tuning constants.
/// Salt is generated per call and included in the hash.
pub fn hash_password(password: &Password) -> Result<PasswordHashString, AuthConfigError> {
    let argon2 = hasher()?;
    let salt = SaltString::generate(&mut OsRng);

    let password_hash = argon2
        .hash_password(password.as_str().as_bytes(), &salt)
        .map_err(|e| AuthConfigError::HashingError(anyhow::anyhow!("Failed to hash password: {}", e)))?
        .to_string();

    Ok(PasswordHashString::new(password_hash))
}

/// Verify a password against a hash using constant-time comparison
///
/// Returns false for a mismatch or a malformed hash string.
pub fn verify_password(password: &Password, password_hash: &PasswordHashString) -> bool {
    let parsed_hash = match PasswordHash::new(password_hash.as_str()) {
        Ok(h) => h,
        Err(_) => return false,
    };

    let argon2 = match hasher() {
        Ok(a) => a,
        Err(_) => return false,
    };

    argon2
        .verify_password(password.as_str().as_bytes(), &parsed_hash)
        .is_ok()
}
