//! Assessment types produced by the evaluator.

use std::fmt;

/// Highest score an assessment can carry.
pub const MAX_SCORE: u8 = 5;

/// Number of suggestions shown next to the strength meter.
pub const DISPLAYED_SUGGESTIONS: usize = 3;

/// Strength score, always within `0..=MAX_SCORE`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Score(u8);

impl Score {
    /// Builds a score from a running total, clamping it into range.
    pub fn new(raw: i64) -> Self {
        Score(raw.clamp(0, MAX_SCORE as i64) as u8)
    }

    pub fn value(&self) -> u8 {
        self.0
    }
}

/// Qualitative strength classification.
///
/// Ordered from weakest to strongest. `NotEvaluated` is only used for the
/// empty-input sentinel and sorts below every computed label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum StrengthLabel {
    NotEvaluated,
    VeryWeak,
    Weak,
    Fair,
    Good,
    VeryStrong,
}

impl StrengthLabel {
    /// Maps a computed score onto its label.
    pub fn from_score(score: Score) -> Self {
        match score.value() {
            0..=1 => StrengthLabel::VeryWeak,
            2 => StrengthLabel::Weak,
            3 => StrengthLabel::Fair,
            4 => StrengthLabel::Good,
            _ => StrengthLabel::VeryStrong,
        }
    }

    /// False only for the empty-input prompt label.
    pub fn is_computed(&self) -> bool {
        *self != StrengthLabel::NotEvaluated
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            StrengthLabel::NotEvaluated => "enter a password",
            StrengthLabel::VeryWeak => "very weak",
            StrengthLabel::Weak => "weak",
            StrengthLabel::Fair => "fair",
            StrengthLabel::Good => "good",
            StrengthLabel::VeryStrong => "very strong",
        }
    }

    /// CSS class used by the dashboard meter bar.
    pub fn color_class(&self) -> &'static str {
        match self {
            StrengthLabel::NotEvaluated => "bg-gray-300",
            StrengthLabel::VeryWeak => "bg-red-500",
            StrengthLabel::Weak => "bg-orange-500",
            StrengthLabel::Fair => "bg-yellow-500",
            StrengthLabel::Good => "bg-blue-500",
            StrengthLabel::VeryStrong => "bg-green-500",
        }
    }
}

impl fmt::Display for StrengthLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A weakness deduction that was applied during scoring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PenaltyKind {
    /// Fewer than six characters.
    TooShort,
    /// The whole password is one character repeated.
    RepeatedCharacter,
    /// Contains a common weak pattern such as `qwerty`.
    CommonPattern,
}

/// Result of evaluating one candidate password.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StrengthAssessment {
    pub score: Score,
    pub label: StrengthLabel,
    /// Remediation messages in the order the criteria were checked.
    pub suggestions: Vec<String>,
    pub penalties: Vec<PenaltyKind>,
}

impl StrengthAssessment {
    /// Assessment returned for an empty input.
    pub fn empty() -> Self {
        StrengthAssessment {
            score: Score::default(),
            label: StrengthLabel::NotEvaluated,
            suggestions: vec!["Enter a password to check its strength".to_string()],
            penalties: Vec::new(),
        }
    }

    pub fn is_empty_input(&self) -> bool {
        self.label == StrengthLabel::NotEvaluated
    }

    pub fn color_class(&self) -> &'static str {
        self.label.color_class()
    }

    /// The suggestions shown to the user, at most `DISPLAYED_SUGGESTIONS`.
    pub fn top_suggestions(&self) -> &[String] {
        let end = self.suggestions.len().min(DISPLAYED_SUGGESTIONS);
        &self.suggestions[..end]
    }
}
