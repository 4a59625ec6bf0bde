use crate::consts::BENGALI_NUMERALS;

/// Renders an integer with Bengali numeral glyphs (U+09E6..=U+09EF).
///
/// A leading `-` sign passes through unchanged; every decimal digit maps to
/// its Bengali counterpart. Infallible for any integer input.
pub fn to_bengali_numerals(n: i64) -> String {
    map_digits(&n.to_string())
}

/// Maps the ASCII digits of an already-rendered number to Bengali glyphs,
/// passing signs and any other character through unchanged.
pub fn map_digits(s: &str) -> String {
    s.chars()
        .map(|ch| match ch.to_digit(10) {
            Some(digit) => BENGALI_NUMERALS[digit as usize],
            None => ch,
        })
        .collect()
}

/// Decimal string, in Bengali numerals when `use_bengali` is set.
pub fn format_number(n: i64, use_bengali: bool) -> String {
    if use_bengali {
        to_bengali_numerals(n)
    } else {
        n.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero() {
        assert_eq!(to_bengali_numerals(0), "০");
    }

    #[test]
    fn test_all_digits() {
        assert_eq!(to_bengali_numerals(1_234_567_890), "১২৩৪৫৬৭৮৯০");
    }

    #[test]
    fn test_only_bengali_glyphs_for_non_negative() {
        for n in [0i64, 1, 9, 10, 42, 1431, 999_999] {
            let s = to_bengali_numerals(n);
            assert!(
                s.chars().all(|c| BENGALI_NUMERALS.contains(&c)),
                "unexpected character in {s}"
            );
        }
    }

    #[test]
    fn test_negative_keeps_sign() {
        let s = to_bengali_numerals(-123);
        assert!(s.starts_with('-'));
        assert_eq!(s, "-১২৩");
        assert!(s[1..].chars().all(|c| BENGALI_NUMERALS.contains(&c)));
    }

    #[test]
    fn test_map_digits_passthrough() {
        assert_eq!(map_digits("+42"), "+৪২");
        assert_eq!(map_digits("12/3"), "১২/৩");
        assert_eq!(map_digits("abc"), "abc");
    }

    #[test]
    fn test_format_number_plain() {
        for n in [-45i64, 0, 7, 1431] {
            assert_eq!(format_number(n, false), n.to_string());
        }
    }

    #[test]
    fn test_format_number_bengali() {
        assert_eq!(format_number(42, true), "৪২");
        assert_eq!(format_number(42, false), "42");
    }
}
