//! Stateless input validation.
//!
//! Both validators are pure and total: any input string yields a verdict,
//! nothing panics, nothing is logged.

pub mod document;
pub mod password;

pub use document::{is_valid_document, normalize_document, DOCUMENT_DIGITS};
pub use password::{
    is_acceptable_password, MAX_PASSWORD_LEN, MIN_PASSWORD_LEN, SPECIAL_CHARACTERS,
};
