use thiserror::Error;

#[derive(Debug, Error)]
pub enum CryptoError {
    #[error("secure random source failed: {0}")]
    Randomness(String),

    #[error("invalid password hashing parameters: {0}")]
    InvalidParams(String),

    #[error("password hashing failed: {0}")]
    Hashing(String),

    #[error("malformed encoded password hash: {0}")]
    MalformedHash(String),
}
