//! Password strength evaluator - main evaluation logic.

use secrecy::{ExposeSecret, SecretString};

#[cfg(feature = "async")]
use std::sync::Arc;

#[cfg(feature = "async")]
use tokio::sync::mpsc;

#[cfg(feature = "async")]
use tokio_util::sync::CancellationToken;

use crate::assessment::{Score, StrengthAssessment, StrengthLabel};
use crate::sections::{
    Section, SectionOutcome, common_pattern_penalty, digit_section, extended_length_section,
    lowercase_section, min_length_section, repeated_character_penalty, short_length_penalty,
    special_section, uppercase_section,
};
use crate::weak_patterns::WeakPatterns;

#[cfg(feature = "async")]
use crate::debounce::Debouncer;

/// Points removed by each applicable penalty.
const PENALTY: i64 = 2;

/// Scores passwords against a fixed weak pattern denylist.
///
/// Build one at startup and share it; evaluation never mutates it.
#[derive(Debug, Clone, Default)]
pub struct Evaluator {
    weak_patterns: WeakPatterns,
}

impl Evaluator {
    pub fn new(weak_patterns: WeakPatterns) -> Self {
        Evaluator { weak_patterns }
    }

    pub fn weak_patterns(&self) -> &WeakPatterns {
        &self.weak_patterns
    }

    /// Evaluates password strength and returns the assessment.
    ///
    /// Total over every input: an empty password yields the sentinel
    /// assessment instead of an error.
    pub fn evaluate(&self, password: &SecretString) -> StrengthAssessment {
        let pwd = password.expose_secret();
        if pwd.is_empty() {
            return StrengthAssessment::empty();
        }

        let mut score: i64 = 0;
        let mut suggestions = Vec::new();
        let mut penalties = Vec::new();

        // Order fixes the order of the suggestions
        let sections: [(&str, Section); 6] = [
            ("lowercase", lowercase_section),
            ("uppercase", uppercase_section),
            ("digit", digit_section),
            ("special", special_section),
            ("min_length", min_length_section),
            ("extended_length", extended_length_section),
        ];

        for (_section_name, section_fn) in sections {
            match section_fn(pwd) {
                SectionOutcome::Passed => score += 1,
                SectionOutcome::Failed(suggestion) => {
                    #[cfg(feature = "tracing")]
                    tracing::trace!("section {} failed", _section_name);
                    suggestions.push(suggestion.to_string());
                }
                SectionOutcome::Skipped => {}
            }
        }

        // Clamp to zero after every deduction, not once at the end
        let detected = [
            short_length_penalty(pwd),
            repeated_character_penalty(pwd),
            common_pattern_penalty(pwd, &self.weak_patterns),
        ];
        for penalty in detected.into_iter().flatten() {
            score = (score - PENALTY).max(0);
            penalties.push(penalty);
        }

        let score = Score::new(score);
        StrengthAssessment {
            score,
            label: StrengthLabel::from_score(score),
            suggestions,
            penalties,
        }
    }
}

/// Evaluates a password against the built-in weak pattern denylist.
pub fn evaluate_password_strength(password: &SecretString) -> StrengthAssessment {
    Evaluator::default().evaluate(password)
}

/// Waits out the debounce delay, then sends the evaluation via channel.
///
/// Nothing is sent when `token` is cancelled before the delay elapses.
#[cfg(feature = "async")]
pub async fn evaluate_password_strength_tx(
    evaluator: &Evaluator,
    password: &SecretString,
    delay: std::time::Duration,
    token: CancellationToken,
    tx: mpsc::Sender<StrengthAssessment>,
) {
    #[cfg(feature = "tracing")]
    tracing::debug!("evaluation is about to start...");

    tokio::select! {
        _ = token.cancelled() => {
            #[cfg(feature = "tracing")]
            tracing::debug!("evaluation superseded before it started");
            return;
        }
        _ = tokio::time::sleep(delay) => {}
    }

    let evaluation = evaluator.evaluate(password);

    if let Err(_e) = tx.send(evaluation).await {
        #[cfg(feature = "tracing")]
        tracing::error!("Failed to send password evaluation result: {}", _e);
    }
}

/// Live meter for a password input field.
///
/// Every keystroke supersedes the pending evaluation; only input that stays
/// unchanged for the debounce delay is evaluated and published.
#[cfg(feature = "async")]
pub struct StrengthMeter {
    evaluator: Arc<Evaluator>,
    debouncer: Debouncer,
    tx: mpsc::Sender<StrengthAssessment>,
}

#[cfg(feature = "async")]
impl StrengthMeter {
    pub fn new(
        evaluator: Arc<Evaluator>,
        delay: std::time::Duration,
        tx: mpsc::Sender<StrengthAssessment>,
    ) -> Self {
        StrengthMeter {
            evaluator,
            debouncer: Debouncer::new(delay),
            tx,
        }
    }

    /// Schedules evaluation of the latest input.
    ///
    /// Must be called from within a tokio runtime.
    pub fn on_input(&mut self, password: SecretString) -> tokio::task::JoinHandle<bool> {
        let evaluator = Arc::clone(&self.evaluator);
        let tx = self.tx.clone();
        self.debouncer.schedule(move || async move {
            let evaluation = evaluator.evaluate(&password);
            if let Err(_e) = tx.send(evaluation).await {
                #[cfg(feature = "tracing")]
                tracing::error!("Failed to send password evaluation result: {}", _e);
            }
        })
    }

    /// Drops any pending evaluation, e.g. when the field loses focus.
    pub fn cancel(&mut self) {
        self.debouncer.cancel();
    }
}
