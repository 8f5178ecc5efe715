//! Length sections - minimum and extended password length.

use super::{SectionOutcome, char_count};

pub const MIN_LENGTH: usize = 8;
pub const EXTENDED_LENGTH: usize = 12;

/// Checks if the password meets the minimum length.
pub fn min_length_section(password: &str) -> SectionOutcome {
    if char_count(password) < MIN_LENGTH {
        return SectionOutcome::Failed("Use at least 8 characters");
    }
    SectionOutcome::Passed
}

/// Awards the extended-length bonus.
///
/// The 12+ suggestion is only given once the minimum length is met, so a
/// short password never gets two length hints.
pub fn extended_length_section(password: &str) -> SectionOutcome {
    let len = char_count(password);
    if len >= EXTENDED_LENGTH {
        SectionOutcome::Passed
    } else if len >= MIN_LENGTH {
        SectionOutcome::Failed("Use 12+ characters for better security")
    } else {
        SectionOutcome::Skipped
    }
}
