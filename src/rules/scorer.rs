//! Weighted multi-rule scoring.
//!
//! Combines every user rule into one scalar per combination:
//!
//! ```text
//! score = Σ (100 / priority_order) × strategy.evaluate(combination, parameter)
//! ```
//!
//! Priority 1 carries weight 100, priority 2 weight 50, and so on.
//! Duplicated rule types are all applied. The sum is not normalized.

use serde::Serialize;

use super::{strategy_for, RuleScore};
use crate::models::{RuleType, Section, UserRule};

/// Full weight, given to a priority-1 rule.
const BASE_WEIGHT: f64 = 100.0;

/// One rule's share of a combination's score.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RuleContribution {
    /// Rule type.
    pub rule_type: RuleType,
    /// Priority order the weight was derived from.
    pub priority_order: u32,
    /// Priority weight (`100 / priority_order`).
    pub weight: f64,
    /// Raw strategy output.
    pub value: RuleScore,
}

impl RuleContribution {
    /// Weighted contribution (`weight × value`).
    #[inline]
    pub fn weighted(&self) -> f64 {
        self.weight * self.value
    }
}

/// Aggregates rule strategies into a single score per combination.
///
/// # Example
/// ```
/// use u_timetable::models::{ClockTime, RuleType, Section, UserRule};
/// use u_timetable::rules::RuleScorer;
///
/// let nine = ClockTime::from_hm(9, 0).unwrap();
/// let eleven = ClockTime::from_hm(11, 0).unwrap();
/// let section = Section::new("s1", "math", nine, eleven).with_day_ids(&[1]);
///
/// let rules = vec![UserRule::new(RuleType::PreferMorning, 2)];
/// let score = RuleScorer::new().calculate(&[&section], &rules);
/// assert!((score - 50.0).abs() < 1e-9);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct RuleScorer;

impl RuleScorer {
    /// Creates a scorer.
    pub fn new() -> Self {
        Self
    }

    /// Priority weight for a rule.
    ///
    /// Not clamped: callers must reject `priority_order == 0` beforehand
    /// (see [`validate_input`](crate::validation::validate_input)).
    #[inline]
    pub fn weight(priority_order: u32) -> f64 {
        BASE_WEIGHT / f64::from(priority_order)
    }

    /// Total weighted score. An empty rule list scores 0.
    pub fn calculate(&self, combination: &[&Section], rules: &[UserRule]) -> f64 {
        rules
            .iter()
            .map(|rule| {
                let value = strategy_for(rule.rule_type).evaluate(combination, rule.parameter());
                Self::weight(rule.priority_order) * value
            })
            .sum()
    }

    /// Per-rule breakdown, in rule order.
    ///
    /// The weighted contributions sum to [`calculate`](Self::calculate).
    pub fn breakdown(&self, combination: &[&Section], rules: &[UserRule]) -> Vec<RuleContribution> {
        rules
            .iter()
            .map(|rule| RuleContribution {
                rule_type: rule.rule_type,
                priority_order: rule.priority_order,
                weight: Self::weight(rule.priority_order),
                value: strategy_for(rule.rule_type).evaluate(combination, rule.parameter()),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ClockTime, RuleParameter};

    fn make_section(id: &str, start: u32, end: u32, days: &[u8]) -> Section {
        Section::new(
            id,
            "S",
            ClockTime::from_hm(start, 0).unwrap(),
            ClockTime::from_hm(end, 0).unwrap(),
        )
        .with_day_ids(days)
    }

    #[test]
    fn test_empty_rules_score_zero() {
        let s = make_section("a", 8, 10, &[1]);
        assert_eq!(RuleScorer::new().calculate(&[&s], &[]), 0.0);
    }

    #[test]
    fn test_priority_weighting() {
        let s = make_section("a", 8, 10, &[1]);
        let scorer = RuleScorer::new();

        let high = scorer.calculate(&[&s], &[UserRule::new(RuleType::PreferMorning, 1)]);
        let low = scorer.calculate(&[&s], &[UserRule::new(RuleType::PreferMorning, 5)]);
        assert!((high - 100.0).abs() < 1e-9);
        assert!((low - 20.0).abs() < 1e-9);
        assert!(high > low);
    }

    #[test]
    fn test_sums_all_rules_including_duplicates() {
        let s = make_section("a", 7, 9, &[1]);
        let rules = vec![
            UserRule::new(RuleType::PreferMorning, 1),  // 100 * 1
            UserRule::new(RuleType::NoEarlyMornings, 2), // 50 * 0.67
            UserRule::new(RuleType::PreferMorning, 4),  // 25 * 1
        ];
        let score = RuleScorer::new().calculate(&[&s], &rules);
        assert!((score - (100.0 + 33.5 + 25.0)).abs() < 1e-9);
    }

    #[test]
    fn test_mismatched_parameter_is_neutral() {
        let s = make_section("a", 8, 10, &[1]).with_professor("p1");
        let rules = vec![
            UserRule::new(RuleType::AvoidProfessor, 1).with_parameter(RuleParameter::Number(3.0)),
        ];
        assert!((RuleScorer::new().calculate(&[&s], &rules) - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_breakdown_matches_total() {
        let a = make_section("a", 8, 10, &[1]);
        let b = make_section("b", 13, 15, &[1]);
        let rules = vec![
            UserRule::new(RuleType::NoGaps, 1),
            UserRule::new(RuleType::LunchBreakProtected, 3),
        ];
        let scorer = RuleScorer::new();
        let parts = scorer.breakdown(&[&a, &b], &rules);
        assert_eq!(parts.len(), 2);
        assert_eq!(parts[0].rule_type, RuleType::NoGaps);
        assert!((parts[0].value - 0.25).abs() < 1e-9); // 3h gap
        let total: f64 = parts.iter().map(RuleContribution::weighted).sum();
        assert!((total - scorer.calculate(&[&a, &b], &rules)).abs() < 1e-9);
    }
}
