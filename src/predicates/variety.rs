//! Character variety predicates - digits, special chars, letter case.

/// Satisfied when the password contains an ASCII digit `0-9`.
pub fn has_digit() -> impl Fn(&str) -> bool + Send + Sync + 'static {
    |password: &str| password.chars().any(|c| c.is_ascii_digit())
}

/// Satisfied when the password contains a character that is neither an
/// ASCII letter nor an ASCII digit. Spaces and non-ASCII letters count.
pub fn has_special() -> impl Fn(&str) -> bool + Send + Sync + 'static {
    |password: &str| password.chars().any(|c| !c.is_ascii_alphanumeric())
}

pub fn has_uppercase() -> impl Fn(&str) -> bool + Send + Sync + 'static {
    |password: &str| password.chars().any(char::is_uppercase)
}

pub fn has_lowercase() -> impl Fn(&str) -> bool + Send + Sync + 'static {
    |password: &str| password.chars().any(char::is_lowercase)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_has_digit() {
        assert!(has_digit()("abc1"));
        assert!(!has_digit()("abcdef"));
        assert!(!has_digit()(""));
    }

    #[test]
    fn test_has_digit_ignores_non_ascii_digits() {
        // Arabic-Indic digit three
        assert!(!has_digit()("abc\u{0663}"));
    }

    #[test]
    fn test_has_special_symbols() {
        assert!(has_special()("abc!"));
        assert!(has_special()("with space"));
        assert!(!has_special()("Abc123"));
        assert!(!has_special()(""));
    }

    #[test]
    fn test_has_special_counts_non_ascii_letters() {
        assert!(has_special()("café"));
    }

    #[test]
    fn test_has_uppercase() {
        assert!(has_uppercase()("lowerUpper"));
        assert!(!has_uppercase()("lowercase123!"));
    }

    #[test]
    fn test_has_lowercase() {
        assert!(has_lowercase()("UPPERlower"));
        assert!(!has_lowercase()("UPPERCASE123!"));
    }
}
