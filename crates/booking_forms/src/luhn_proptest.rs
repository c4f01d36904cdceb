#[cfg(test)]
mod tests {
    use crate::luhn::{is_valid_luhn, strip_separators};
    use proptest::prelude::*;

    // Digits with single spaces or dashes between some of them
    fn separated_digits() -> impl Strategy<Value = String> {
        prop::collection::vec(
            ("[0-9]", prop::option::of(prop_oneof![Just(' '), Just('-')])),
            1..24,
        )
        .prop_map(|parts| {
            let mut out = String::new();
            let last = parts.len() - 1;
            for (i, (digit, sep)) in parts.into_iter().enumerate() {
                out.push_str(&digit);
                if let Some(sep) = sep {
                    if i < last {
                        out.push(sep);
                    }
                }
            }
            out
        })
    }

    // Appends the check digit that makes `body` pass
    fn with_check_digit(body: &str) -> String {
        (0..10u8)
            .map(|d| format!("{}{}", body, d))
            .find(|candidate| is_valid_luhn(candidate))
            .expect("one of ten check digits always works")
    }

    proptest! {
        #[test]
        fn test_invariant_under_separator_stripping(s in separated_digits()) {
            prop_assert_eq!(is_valid_luhn(&s), is_valid_luhn(&strip_separators(&s)));
        }

        #[test]
        fn test_exactly_one_check_digit_is_valid(body in "[0-9]{1,18}") {
            let valid = (0..10u8)
                .filter(|d| is_valid_luhn(&format!("{}{}", body, d)))
                .count();
            prop_assert_eq!(valid, 1);
        }

        #[test]
        fn test_single_digit_change_is_detected(body in "[0-9]{12,18}", pos in 0usize..18, bump in 1u8..10) {
            let card = with_check_digit(&body);
            let pos = pos % card.len();
            let mut bytes = card.clone().into_bytes();
            bytes[pos] = b'0' + (bytes[pos] - b'0' + bump) % 10;
            let altered = String::from_utf8(bytes).expect("ascii digits");
            prop_assert!(is_valid_luhn(&card));
            prop_assert!(!is_valid_luhn(&altered), "{} -> {}", card, altered);
        }

        #[test]
        fn test_never_panics(s in ".*") {
            let _ = is_valid_luhn(&s);
        }
    }
}
