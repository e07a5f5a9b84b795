//! National identification number (CPF) validation.

/// Number of digits in a national ID.
pub const DOCUMENT_DIGITS: usize = 11;

/// Strip every non-digit character.
pub fn normalize_document(document: &str) -> String {
    document.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Validate a national ID by its two check digits.
///
/// Formatting characters are ignored ("529.982.247-25" and "52998224725" are
/// equivalent). Numbers made of a single repeated digit pass the checksum but
/// are known-invalid and rejected.
pub fn is_valid_document(document: &str) -> bool {
    let digits: Vec<u32> = document.chars().filter_map(|c| c.to_digit(10)).collect();

    if digits.len() != DOCUMENT_DIGITS {
        return false;
    }
    if digits.iter().all(|&d| d == digits[0]) {
        return false;
    }

    check_digit(&digits[..9]) == digits[9] && check_digit(&digits[..10]) == digits[10]
}

/// Weighted mod-11 check digit over `digits`, weights descending to 2.
fn check_digit(digits: &[u32]) -> u32 {
    let top_weight = digits.len() as u32 + 1;
    let sum: u32 = digits
        .iter()
        .enumerate()
        .map(|(i, &d)| d * (top_weight - i as u32))
        .sum();
    match sum % 11 {
        0 | 1 => 0,
        remainder => 11 - remainder,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_known_valid_numbers() {
        for doc in ["52998224725", "12345678909", "68219090081", "11144477735"] {
            assert!(is_valid_document(doc), "{doc} should be valid");
        }
    }

    #[test]
    fn accepts_formatted_numbers() {
        assert!(is_valid_document("529.982.247-25"));
        assert!(is_valid_document("123.456.789-09"));
        assert!(is_valid_document(" 111 444 777 35 "));
    }

    #[test]
    fn rejects_wrong_check_digits() {
        assert!(!is_valid_document("52998224726"));
        assert!(!is_valid_document("52998224715"));
        assert!(!is_valid_document("12345678900"));
    }

    #[test]
    fn rejects_wrong_length() {
        assert!(!is_valid_document(""));
        assert!(!is_valid_document("123"));
        assert!(!is_valid_document("5299822472"));
        assert!(!is_valid_document("529982247250"));
    }

    #[test]
    fn rejects_repeated_digits() {
        for d in 0..=9 {
            let doc = d.to_string().repeat(11);
            assert!(!is_valid_document(&doc), "{doc} should be rejected");
        }
    }

    #[test]
    fn rejects_non_ascii_digits() {
        // Arabic-Indic digits are not formatting characters; they are dropped
        // and leave too few digits.
        assert!(!is_valid_document("٥٢٩٩٨٢٢٤٧٢٥"));
    }

    #[test]
    fn normalize_keeps_only_digits() {
        assert_eq!(normalize_document("529.982.247-25"), "52998224725");
        assert_eq!(normalize_document("abc"), "");
    }

    #[test]
    fn check_digit_values() {
        assert_eq!(check_digit(&[0, 0, 0, 0, 0, 0, 0, 0, 0]), 0);
        // 10 + 2 = 12, remainder 1
        assert_eq!(check_digit(&[1, 0, 0, 0, 0, 0, 0, 0, 1]), 0);
        assert_eq!(check_digit(&[1, 1, 1, 4, 4, 4, 7, 7, 7]), 3);
    }
}
