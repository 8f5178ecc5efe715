//! Character variety sections - lowercase, uppercase, digits, special chars.

use super::SectionOutcome;

/// Characters that satisfy the special-character criterion.
pub const SPECIAL_CHARS: [char; 7] = ['@', '$', '!', '%', '*', '?', '&'];

fn require(holds: bool, suggestion: &'static str) -> SectionOutcome {
    if holds {
        SectionOutcome::Passed
    } else {
        SectionOutcome::Failed(suggestion)
    }
}

pub fn lowercase_section(password: &str) -> SectionOutcome {
    require(
        password.chars().any(|c| c.is_ascii_lowercase()),
        "Add lowercase letters",
    )
}

pub fn uppercase_section(password: &str) -> SectionOutcome {
    require(
        password.chars().any(|c| c.is_ascii_uppercase()),
        "Add uppercase letters",
    )
}

pub fn digit_section(password: &str) -> SectionOutcome {
    require(password.chars().any(|c| c.is_ascii_digit()), "Add numbers")
}

/// Only the fixed set in `SPECIAL_CHARS` counts; other punctuation does not.
pub fn special_section(password: &str) -> SectionOutcome {
    require(
        password.chars().any(|c| SPECIAL_CHARS.contains(&c)),
        "Add special characters (@$!%*?&)",
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lowercase_section() {
        assert_eq!(lowercase_section("abc"), SectionOutcome::Passed);
        assert_eq!(
            lowercase_section("ABC123"),
            SectionOutcome::Failed("Add lowercase letters")
        );
    }

    #[test]
    fn test_uppercase_section() {
        assert_eq!(uppercase_section("aBc"), SectionOutcome::Passed);
        assert!(matches!(uppercase_section("abc!"), SectionOutcome::Failed(_)));
    }

    #[test]
    fn test_digit_section() {
        assert_eq!(digit_section("pass9"), SectionOutcome::Passed);
        assert_eq!(digit_section("pass"), SectionOutcome::Failed("Add numbers"));
    }

    #[test]
    fn test_special_section_uses_fixed_set() {
        for c in SPECIAL_CHARS {
            assert_eq!(special_section(&format!("abc{}", c)), SectionOutcome::Passed);
        }
        assert!(matches!(special_section("abc#^-_"), SectionOutcome::Failed(_)));
    }

    #[test]
    fn test_non_ascii_letters_do_not_count() {
        assert!(matches!(lowercase_section("éèà"), SectionOutcome::Failed(_)));
        assert!(matches!(uppercase_section("ÉÈÀ"), SectionOutcome::Failed(_)));
        assert!(matches!(digit_section("٣٤٥"), SectionOutcome::Failed(_)));
    }
}
