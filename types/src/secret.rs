//! Secret-bearing newtypes.
//!
//! None of these implement `Serialize`, and their `Debug` output is redacted.
//! Raw tokens and plaintext passwords are zeroized on drop.

use std::fmt;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// A raw verification token: the hex string placed in the outbound link.
///
/// Only its fingerprint is ever persisted. Intentionally not `Clone`.
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct RawToken(String);

impl RawToken {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// Borrow the secret value.
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for RawToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("RawToken(<redacted>)")
    }
}

/// A plaintext password on its way into the hasher.
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct PlaintextPassword(String);

impl PlaintextPassword {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for PlaintextPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("PlaintextPassword(<redacted>)")
    }
}

/// A self-describing encoded password hash (PHC string format).
#[derive(Clone, PartialEq, Eq)]
pub struct PasswordHash(String);

impl PasswordHash {
    pub fn new(encoded: impl Into<String>) -> Self {
        Self(encoded.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for PasswordHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("PasswordHash(<redacted>)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_output_never_contains_the_secret() {
        let token = RawToken::new("deadbeef");
        let password = PlaintextPassword::new("Secr3t!pass");
        let hash = PasswordHash::new("$argon2id$v=19$m=8,t=1,p=1$c2FsdA$aGFzaA");

        assert!(!format!("{token:?}").contains("deadbeef"));
        assert!(!format!("{password:?}").contains("Secr3t"));
        assert!(!format!("{hash:?}").contains("argon2id"));
    }

    #[test]
    fn expose_returns_the_value() {
        assert_eq!(RawToken::new("abc").expose(), "abc");
        assert_eq!(PlaintextPassword::new("xyz").expose(), "xyz");
    }
}
