//! Pattern penalties - short inputs and single-character repetition.

use crate::assessment::PenaltyKind;
use super::char_count;

/// Passwords shorter than this are penalized.
pub const SHORT_LENGTH: usize = 6;

pub fn short_length_penalty(password: &str) -> Option<PenaltyKind> {
    (char_count(password) < SHORT_LENGTH).then_some(PenaltyKind::TooShort)
}

/// Detects a password that is one character repeated over its full length
/// (e.g. "aaaa"). A single character is not a repetition.
pub fn repeated_character_penalty(password: &str) -> Option<PenaltyKind> {
    let mut chars = password.chars();
    let first = chars.next()?;
    let mut rest = chars.peekable();
    rest.peek()?;

    rest.all(|c| c == first).then_some(PenaltyKind::RepeatedCharacter)
}
