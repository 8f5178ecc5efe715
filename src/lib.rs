//! Password strength evaluation for the clinic dashboard
//!
//! Scores a candidate password from 0 to 5, labels it, and lists what would
//! make it stronger. Used by the sign-up and password-reset forms before a new
//! credential is handed to the hosted authentication provider.
//!
//! # Features
//!
//! - `async` (default): debounced live evaluation and fetch-on-change helpers
//! - `tracing`: Enables logging via tracing crate
//!
//! # Environment Variables
//!
//! - `PWD_WEAK_PATTERNS_PATH`: file with extra weak patterns, one per line
//! - `CLINIC_PROVIDER_URL`, `CLINIC_PROVIDER_KEY`: provider connection settings
//!
//! # Example
//!
//! ```rust
//! use clinic_pwd_strength::{evaluate_password_strength, StrengthLabel};
//! use secrecy::SecretString;
//!
//! let password = SecretString::new("Abc123!@XYZ9".to_string().into());
//! let evaluation = evaluate_password_strength(&password);
//!
//! assert_eq!(evaluation.score.value(), 5);
//! assert_eq!(evaluation.label, StrengthLabel::VeryStrong);
//! ```

mod assessment;
mod evaluator;
mod sections;
mod weak_patterns;

pub mod provider;

#[cfg(feature = "async")]
mod debounce;
#[cfg(feature = "async")]
mod fetch;

// Public API
pub use assessment::{
    DISPLAYED_SUGGESTIONS, MAX_SCORE, PenaltyKind, Score, StrengthAssessment, StrengthLabel,
};
pub use evaluator::{Evaluator, evaluate_password_strength};
pub use weak_patterns::{
    BUILTIN_WEAK_PATTERNS, WEAK_PATTERNS_PATH_ENV, WeakPatterns, WeakPatternsError,
};

#[cfg(feature = "async")]
pub use debounce::{DEFAULT_DEBOUNCE, Debouncer};
#[cfg(feature = "async")]
pub use evaluator::{StrengthMeter, evaluate_password_strength_tx};
#[cfg(feature = "async")]
pub use fetch::{FetchOnChange, FetchState};
