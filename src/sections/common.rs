//! Common pattern penalty - checks the weak pattern denylist.

use crate::assessment::PenaltyKind;
use crate::weak_patterns::WeakPatterns;

pub fn common_pattern_penalty(password: &str, patterns: &WeakPatterns) -> Option<PenaltyKind> {
    let _pattern = patterns.matches(password)?;

    #[cfg(feature = "tracing")]
    tracing::debug!("password contains common pattern {:?}", _pattern);

    Some(PenaltyKind::CommonPattern)
}
