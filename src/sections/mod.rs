//! Password evaluation sections
//!
//! Positive sections award a point or emit a suggestion; penalty sections
//! detect a weakness pattern.

mod common;
mod length;
mod pattern;
mod variety;

pub use common::common_pattern_penalty;
pub use length::{extended_length_section, min_length_section};
pub use pattern::{repeated_character_penalty, short_length_penalty};
pub use variety::{digit_section, lowercase_section, special_section, uppercase_section};

/// Outcome of a positive section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionOutcome {
    /// Criterion holds, worth one point.
    Passed,
    /// Criterion failed, with the remediation to show.
    Failed(&'static str),
    /// Neither a point nor a suggestion.
    Skipped,
}

/// Signature shared by the positive sections.
pub type Section = fn(&str) -> SectionOutcome;

pub(crate) fn char_count(password: &str) -> usize {
    password.chars().count()
}
