/// Read free-form MIC text as a number.
///
/// Surrounding whitespace is ignored. A single underscore between two digits
/// groups them (`"1_000"`). Anything else `f64` parsing rejects (empty text,
/// words, `"1.2.3"`, units such as `"8 mg/L"`) yields `None`. `"nan"` and
/// `"inf"` parse; NaN then matches no range.
pub fn parse_mic(raw: &str) -> Option<f64> {
    let text = raw.trim();
    if text.contains('_') {
        return strip_digit_separators(text)?.parse::<f64>().ok();
    }
    text.parse::<f64>().ok()
}

/// Drop underscores that sit between two ASCII digits; any other underscore
/// makes the text invalid.
fn strip_digit_separators(text: &str) -> Option<String> {
    let bytes = text.as_bytes();
    let mut digits = String::with_capacity(text.len());

    for (i, c) in text.char_indices() {
        if c != '_' {
            digits.push(c);
            continue;
        }

        let after_digit = i > 0 && bytes[i - 1].is_ascii_digit();
        let before_digit = bytes.get(i + 1).is_some_and(u8::is_ascii_digit);
        if !(after_digit && before_digit) {
            return None;
        }
    }

    Some(digits)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_numbers() {
        assert_eq!(parse_mic("8"), Some(8.0));
        assert_eq!(parse_mic("0.25"), Some(0.25));
        assert_eq!(parse_mic(".5"), Some(0.5));
        assert_eq!(parse_mic("+4"), Some(4.0));
        assert_eq!(parse_mic("1e2"), Some(100.0));
        assert_eq!(parse_mic("-1"), Some(-1.0));
    }

    #[test]
    fn test_whitespace_is_trimmed() {
        assert_eq!(parse_mic("  16\n"), Some(16.0));
        assert_eq!(parse_mic("\t2.5 "), Some(2.5));
    }

    #[test]
    fn test_rejects_non_numbers() {
        assert_eq!(parse_mic(""), None);
        assert_eq!(parse_mic("   "), None);
        assert_eq!(parse_mic("abc"), None);
        assert_eq!(parse_mic("1.2.3"), None);
        assert_eq!(parse_mic("8 mg/L"), None);
        assert_eq!(parse_mic("<=0.5"), None);
        assert_eq!(parse_mic("1,5"), None);
    }

    #[test]
    fn test_digit_group_underscores() {
        assert_eq!(parse_mic("1_000"), Some(1000.0));
        assert_eq!(parse_mic(" 1_000.5 "), Some(1000.5));
        assert_eq!(parse_mic("1e1_0"), Some(1e10));
        assert_eq!(parse_mic("_1"), None);
        assert_eq!(parse_mic("1_"), None);
        assert_eq!(parse_mic("1__0"), None);
        assert_eq!(parse_mic("1_.5"), None);
    }

    #[test]
    fn test_special_values() {
        assert!(parse_mic("nan").unwrap().is_nan());
        assert_eq!(parse_mic("inf"), Some(f64::INFINITY));
    }
}
