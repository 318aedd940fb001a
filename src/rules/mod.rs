//! Preference rules: strategies, scorer and catalog.
//!
//! Each [`RuleType`] has exactly one stateless [`RuleStrategy`] that scores
//! a complete combination of sections. The [`RuleScorer`] combines them,
//! weighting each user rule by its priority.
//!
//! # Usage
//!
//! ```
//! use u_timetable::models::{ClockTime, RuleType, Section, UserRule};
//! use u_timetable::rules::{strategy_for, RuleScorer, RuleStrategy};
//!
//! let at = |h| ClockTime::from_hm(h, 0).unwrap();
//! let monday = Section::new("a", "math", at(9), at(11)).with_day_ids(&[1]);
//! let friday = Section::new("b", "art", at(9), at(11)).with_day_ids(&[5]);
//!
//! // two days used: 1 - 0.17
//! let compact = strategy_for(RuleType::CompactDays).evaluate(&[&monday, &friday], None);
//! assert!((compact - 0.83).abs() < 1e-9);
//!
//! let rules = vec![UserRule::new(RuleType::CompactDays, 2)];
//! let score = RuleScorer::new().calculate(&[&monday, &friday], &rules);
//! assert!((score - 41.5).abs() < 1e-9);
//! ```
//!
//! # Score Convention
//! **Higher score = more desirable.** Strategies return values in `[0, 1]`,
//! except `COMPACT_DAYS` on an empty combination (1.17).

pub mod catalog;
mod scorer;
pub mod strategies;

pub use catalog::{ParameterSpec, RuleCatalogEntry};
pub use scorer::{RuleContribution, RuleScorer};

use crate::models::{RuleParameter, RuleType, Section};
use std::fmt::Debug;

/// Score returned by a rule strategy.
pub type RuleScore = f64;

/// A scoring function for one rule type over a full combination.
///
/// # Parameter Handling
/// Implementations must read `parameter` through its typed accessors and
/// fall back to their default or neutral behavior when the payload is
/// absent or of another kind. They never fail.
pub trait RuleStrategy: Send + Sync + Debug {
    /// The rule type this strategy evaluates.
    fn rule_type(&self) -> RuleType;

    /// Scores a combination (one section per subject).
    fn evaluate(&self, combination: &[&Section], parameter: Option<&RuleParameter>) -> RuleScore;
}

/// Returns the strategy for a rule type.
pub fn strategy_for(rule_type: RuleType) -> &'static dyn RuleStrategy {
    use strategies::*;

    match rule_type {
        RuleType::NoGaps => &NoGaps,
        RuleType::NoEarlyMornings => &NoEarlyMornings,
        RuleType::NoLateEvenings => &NoLateEvenings,
        RuleType::PreferMorning => &PreferMorning,
        RuleType::PreferAfternoon => &PreferAfternoon,
        RuleType::CompactDays => &CompactDays,
        RuleType::BalancedLoad => &BalancedLoad,
        RuleType::MinFreeDay => &MinFreeDay,
        RuleType::MaxConsecutiveHours => &MaxConsecutiveHours,
        RuleType::LunchBreakProtected => &LunchBreakProtected,
        RuleType::AvoidProfessor => &AvoidProfessor,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_is_consistent() {
        for t in RuleType::ALL {
            assert_eq!(strategy_for(t).rule_type(), t);
        }
    }
}
