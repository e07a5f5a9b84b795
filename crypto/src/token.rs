//! Verification token issuance and SHA-256 fingerprinting.

use onboard_types::{RawToken, TokenFingerprint};
use rand::rngs::OsRng;
use rand::RngCore;
use sha2::{Digest, Sha256};
use subtle::ConstantTimeEq;

use crate::CryptoError;

/// Entropy of a verification token, in bytes.
pub const TOKEN_BYTES: usize = 32;

/// Mint a fresh verification token and its fingerprint.
///
/// The raw token is 32 bytes from the OS random source, hex-encoded. A failing
/// random source is reported, not retried.
pub fn issue_token() -> Result<(RawToken, TokenFingerprint), CryptoError> {
    let mut bytes = [0u8; TOKEN_BYTES];
    OsRng
        .try_fill_bytes(&mut bytes)
        .map_err(|e| CryptoError::Randomness(e.to_string()))?;
    let raw = RawToken::new(hex::encode(bytes));
    let fp = fingerprint(raw.expose());
    Ok((raw, fp))
}

/// Compute the SHA-256 fingerprint of a presented token.
pub fn fingerprint(raw_token: &str) -> TokenFingerprint {
    let mut hasher = Sha256::new();
    hasher.update(raw_token.as_bytes());
    let result = hasher.finalize();
    let mut output = [0u8; 32];
    output.copy_from_slice(&result);
    TokenFingerprint::new(output)
}

/// Whether `raw_token` fingerprints to `stored`. Compares in constant time.
pub fn verify_token(raw_token: &str, stored: &TokenFingerprint) -> bool {
    let presented = fingerprint(raw_token);
    presented.as_bytes().ct_eq(stored.as_bytes()).into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn issued_token_is_64_hex_chars() {
        let (raw, _) = issue_token().unwrap();
        assert_eq!(raw.expose().len(), TOKEN_BYTES * 2);
        assert!(raw.expose().chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn issued_fingerprint_matches_recomputation() {
        let (raw, fp) = issue_token().unwrap();
        assert_eq!(fingerprint(raw.expose()), fp);
        assert!(verify_token(raw.expose(), &fp));
    }

    #[test]
    fn fingerprint_is_not_the_token() {
        let (raw, fp) = issue_token().unwrap();
        assert_ne!(fp.to_hex(), raw.expose());
    }

    #[test]
    fn fingerprint_known_vector() {
        assert_eq!(
            fingerprint("abc").to_hex(),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }

    #[test]
    fn fingerprint_deterministic() {
        assert_eq!(fingerprint("token"), fingerprint("token"));
        assert_ne!(fingerprint("token"), fingerprint("token2"));
    }

    #[test]
    fn wrong_token_fails_verification() {
        let (_, fp) = issue_token().unwrap();
        assert!(!verify_token("not-the-token", &fp));
    }

    #[test]
    fn single_differing_byte_fails_verification() {
        let (raw, fp) = issue_token().unwrap();
        for i in [0, 15, 31] {
            let mut bytes = *fp.as_bytes();
            bytes[i] ^= 0x01;
            assert!(!verify_token(raw.expose(), &TokenFingerprint::new(bytes)));
        }
        assert!(verify_token(raw.expose(), &fp));
    }

    #[test]
    fn issued_fingerprints_do_not_repeat() {
        let mut seen = std::collections::HashSet::new();
        for _ in 0..1_000 {
            let (_, fp) = issue_token().unwrap();
            assert!(seen.insert(fp));
        }
    }
}
