// --- File: crates/booking_forms/src/luhn.rs ---

/// Removes whitespace and dashes, the separators people type into card numbers.
pub fn strip_separators(value: &str) -> String {
    value
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '-')
        .collect()
}

/// Validates a card number using the Luhn (mod 10) algorithm.
///
/// Spaces and dashes are stripped first. Anything else that is not an ASCII
/// digit, or nothing left after stripping, makes the number invalid.
///
/// # Examples
///
/// ```
/// use booking_forms::is_valid_luhn;
///
/// assert!(is_valid_luhn("4111 1111 1111 1111"));
/// assert!(!is_valid_luhn("4111111111111112"));
/// assert!(!is_valid_luhn("   "));
/// ```
pub fn is_valid_luhn(value: &str) -> bool {
    let digits = strip_separators(value);

    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return false;
    }

    let sum: u32 = digits
        .bytes()
        .rev()
        .enumerate()
        .map(|(i, b)| {
            let digit = u32::from(b - b'0');
            if i % 2 == 1 {
                let doubled = digit * 2;
                if doubled > 9 {
                    doubled - 9
                } else {
                    doubled
                }
            } else {
                digit
            }
        })
        .sum();

    sum % 10 == 0
}
