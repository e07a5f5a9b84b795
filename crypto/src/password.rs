//! Argon2id password hashing.
//!
//! Every call draws a fresh 16-byte salt from the OS random source. The output
//! is a PHC string (`$argon2id$v=19$m=..,t=..,p=..$<salt>$<hash>`) that carries
//! algorithm, version and parameters, so verification needs no configuration.

use argon2::password_hash::{Error as PhcError, SaltString};
use argon2::{Algorithm, Argon2, Params, PasswordHasher as _, PasswordVerifier as _, Version};
use onboard_types::{PasswordHash, PlaintextPassword};
use rand::rngs::OsRng;
use rand::RngCore;
use serde::{Deserialize, Serialize};

use crate::CryptoError;

/// Salt length in bytes.
pub const SALT_LEN: usize = 16;

/// Argon2id cost parameters.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HashingParams {
    /// Memory cost in KiB.
    #[serde(default = "default_memory_kib")]
    pub memory_kib: u32,
    #[serde(default = "default_iterations")]
    pub iterations: u32,
    #[serde(default = "default_parallelism")]
    pub parallelism: u32,
    /// Derived key length in bytes.
    #[serde(default = "default_output_len")]
    pub output_len: usize,
}

fn default_memory_kib() -> u32 {
    65536 // 64 MiB
}

fn default_iterations() -> u32 {
    3
}

fn default_parallelism() -> u32 {
    4
}

fn default_output_len() -> usize {
    32
}

impl HashingParams {
    /// Whether every cost parameter meets the production baseline.
    pub fn meets_baseline(&self) -> bool {
        let baseline = Self::default();
        self.memory_kib >= baseline.memory_kib
            && self.iterations >= baseline.iterations
            && self.parallelism >= baseline.parallelism
            && self.output_len >= baseline.output_len
    }
}

impl Default for HashingParams {
    fn default() -> Self {
        Self {
            memory_kib: default_memory_kib(),
            iterations: default_iterations(),
            parallelism: default_parallelism(),
            output_len: default_output_len(),
        }
    }
}

/// Derives salted Argon2id hashes for storage.
#[derive(Clone, Debug)]
pub struct PasswordHasher {
    params: Params,
}

impl PasswordHasher {
    /// Build a hasher, rejecting parameters Argon2 cannot run with.
    pub fn new(params: HashingParams) -> Result<Self, CryptoError> {
        let params = Params::new(
            params.memory_kib,
            params.iterations,
            params.parallelism,
            Some(params.output_len),
        )
        .map_err(|e| CryptoError::InvalidParams(e.to_string()))?;
        Ok(Self { params })
    }

    /// Hash a password with a fresh random salt.
    pub fn hash(&self, password: &PlaintextPassword) -> Result<PasswordHash, CryptoError> {
        let mut salt_bytes = [0u8; SALT_LEN];
        OsRng
            .try_fill_bytes(&mut salt_bytes)
            .map_err(|e| CryptoError::Randomness(e.to_string()))?;
        let salt = SaltString::encode_b64(&salt_bytes)
            .map_err(|e| CryptoError::Hashing(e.to_string()))?;

        let argon2 = Argon2::new(Algorithm::Argon2id, Version::V0x13, self.params.clone());
        let hash = argon2
            .hash_password(password.expose().as_bytes(), &salt)
            .map_err(|e| CryptoError::Hashing(e.to_string()))?;

        Ok(PasswordHash::new(hash.to_string()))
    }
}

/// Check a plaintext password against an encoded hash.
///
/// Parameters are read from the encoded string itself. Returns `Ok(false)` on
/// a mismatch and an error only when the encoding cannot be parsed.
pub fn verify_password(encoded: &PasswordHash, password: &str) -> Result<bool, CryptoError> {
    let parsed = argon2::PasswordHash::new(encoded.as_str())
        .map_err(|e| CryptoError::MalformedHash(e.to_string()))?;
    match Argon2::default().verify_password(password.as_bytes(), &parsed) {
        Ok(()) => Ok(true),
        Err(PhcError::Password) => Ok(false),
        Err(e) => Err(CryptoError::MalformedHash(e.to_string())),
    }
}
