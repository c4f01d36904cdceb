#[cfg(test)]
mod tests {
    use crate::luhn::{is_valid_luhn, strip_separators};

    #[test]
    fn test_accepts_known_test_cards() {
        assert!(is_valid_luhn("4111111111111111"), "Visa test number");
        assert!(is_valid_luhn("5500000000000004"), "Mastercard test number");
        assert!(is_valid_luhn("378282246310005"), "Amex test number");
    }

    #[test]
    fn test_tolerates_spaces_and_dashes() {
        assert!(is_valid_luhn("4111 1111 1111 1111"));
        assert!(is_valid_luhn("4111-1111-1111-1111"));
        assert!(is_valid_luhn("4111 1111-1111 1111"));
    }

    #[test]
    fn test_rejects_bad_checksum() {
        assert!(!is_valid_luhn("4111111111111112"));
    }

    #[test]
    fn test_rejects_non_numeric_input() {
        assert!(!is_valid_luhn("abcd1234efgh5678"));
        assert!(!is_valid_luhn("41xx 1111 1111 1111"));
        // Non-ASCII digits do not count as digits
        assert!(!is_valid_luhn("٤١١١١١١١١١١١١١١١"));
    }

    #[test]
    fn test_empty_and_whitespace_are_invalid() {
        assert!(!is_valid_luhn(""));
        assert!(!is_valid_luhn("   "));
        assert!(!is_valid_luhn(" - - "));
    }

    #[test]
    fn test_single_zero_is_valid() {
        assert!(is_valid_luhn("0"));
    }

    #[test]
    fn test_doubled_digits_above_nine_subtract_nine() {
        // 5 doubled is 10 -> 1, plus check digit 9 -> 10
        assert!(is_valid_luhn("59"));
        assert!(!is_valid_luhn("58"));
    }

    #[test]
    fn test_strip_separators() {
        assert_eq!(strip_separators("4111 1111-1111\t1111"), "4111111111111111");
        assert_eq!(strip_separators("12/25"), "12/25");
        assert_eq!(strip_separators(""), "");
    }
}
