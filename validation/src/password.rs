//! Password complexity policy.

/// Minimum password length, in characters.
pub const MIN_PASSWORD_LEN: usize = 8;

/// Maximum password length, in characters.
pub const MAX_PASSWORD_LEN: usize = 64;

/// The only non-alphanumeric characters a password may contain.
pub const SPECIAL_CHARACTERS: &str = "!@#$%^&*()-_=+";

/// Whether `password` satisfies the complexity policy.
///
/// Requires 8 to 64 characters with at least one ASCII lowercase letter, one
/// ASCII uppercase letter, one digit and one [`SPECIAL_CHARACTERS`] member.
/// Any character outside those classes (whitespace, accented letters, other
/// punctuation) rejects the password.
pub fn is_acceptable_password(password: &str) -> bool {
    let len = password.chars().count();
    if !(MIN_PASSWORD_LEN..=MAX_PASSWORD_LEN).contains(&len) {
        return false;
    }

    let mut lower = false;
    let mut upper = false;
    let mut digit = false;
    let mut special = false;

    for c in password.chars() {
        if c.is_ascii_lowercase() {
            lower = true;
        } else if c.is_ascii_uppercase() {
            upper = true;
        } else if c.is_ascii_digit() {
            digit = true;
        } else if SPECIAL_CHARACTERS.contains(c) {
            special = true;
        } else {
            return false;
        }
    }

    lower && upper && digit && special
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_compliant_passwords() {
        assert!(is_acceptable_password("Password1!"));
        assert!(is_acceptable_password("aB3-aB3-"));
        assert!(is_acceptable_password(&format!("Aa1+{}", "x".repeat(60))));
    }

    #[test]
    fn rejects_by_length() {
        assert!(!is_acceptable_password("Pass1!a"));
        assert!(!is_acceptable_password(&format!("Aa1+{}", "x".repeat(61))));
        assert!(!is_acceptable_password(""));
    }

    #[test]
    fn rejects_missing_classes() {
        assert!(!is_acceptable_password("abcdefghij"));
        assert!(!is_acceptable_password("password1!"));
        assert!(!is_acceptable_password("PASSWORD1!"));
        assert!(!is_acceptable_password("Password!!"));
        assert!(!is_acceptable_password("Password11"));
    }

    #[test]
    fn rejects_characters_outside_the_allowed_set() {
        assert!(!is_acceptable_password("Password 1!"));
        assert!(!is_acceptable_password("Password1!?"));
        assert!(!is_acceptable_password("Pássword1!"));
        assert!(!is_acceptable_password("Password1!\n"));
        assert!(!is_acceptable_password("Password1.,"));
    }

    #[test]
    fn every_special_character_counts() {
        for c in SPECIAL_CHARACTERS.chars() {
            let pw = format!("Passw0rd{c}");
            assert!(is_acceptable_password(&pw), "{pw} should be accepted");
        }
    }
}
