//! Section pruning ahead of search.
//!
//! Some rules can disqualify a section on its own, without looking at the
//! rest of the combination. Applying them first shrinks every subject's
//! candidate list and therefore the search tree.
//!
//! Only two rule types prune:
//! - `AVOID_PROFESSOR` drops sections taught by the avoided professor
//!   (a `null` target drops sections without a professor).
//! - `LUNCH_BREAK_PROTECTED` drops sections overlapping the protected
//!   window, when a well-formed `TimeRange` parameter is present.
//!
//! Rules are applied in the given order, each narrowing the survivors of
//! the previous one. Rules with an absent or mismatched parameter have no
//! effect.

use crate::models::{RuleType, Section, TimeWindow, UserRule};

/// Filters candidate sections by per-section hard exclusions.
#[derive(Debug, Clone, Copy, Default)]
pub struct SectionPruner;

impl SectionPruner {
    /// Creates a pruner.
    pub fn new() -> Self {
        Self
    }

    /// Returns the sections that survive every pruning rule, in input order.
    ///
    /// The input is never modified.
    pub fn prune<'a>(&self, sections: &'a [Section], rules: &[UserRule]) -> Vec<&'a Section> {
        let mut survivors: Vec<&Section> = sections.iter().collect();

        for rule in rules {
            match rule.rule_type {
                RuleType::AvoidProfessor => {
                    if let Some(avoided) = rule.parameter().and_then(|p| p.as_professor()) {
                        survivors.retain(|s| s.professor_id.as_deref() != avoided);
                    }
                }
                RuleType::LunchBreakProtected => {
                    if let Some(window) = rule.parameter().and_then(|p| p.as_time_window()) {
                        survivors.retain(|s| !overlaps_window(s, &window));
                    }
                }
                _ => {}
            }
        }

        survivors
    }
}

fn overlaps_window(section: &Section, window: &TimeWindow) -> bool {
    section.window().overlaps(window)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{parameter_from_value, ClockTime, RuleParameter, TimeRange};
    use serde_json::json;

    fn at(hour: u32, minute: u32) -> ClockTime {
        ClockTime::from_hm(hour, minute).unwrap()
    }

    fn make_section(
        id: &str,
        start: (u32, u32),
        end: (u32, u32),
        professor: Option<&str>,
    ) -> Section {
        let s = Section::new(id, "S", at(start.0, start.1), at(end.0, end.1)).with_day_ids(&[1]);
        match professor {
            Some(p) => s.with_professor(p),
            None => s,
        }
    }

    fn ids(sections: &[&Section]) -> Vec<String> {
        sections.iter().map(|s| s.id.clone()).collect()
    }

    fn avoid(professor: Option<&str>) -> UserRule {
        UserRule::new(RuleType::AvoidProfessor, 1)
            .with_parameter(RuleParameter::ProfessorSelect(professor.map(str::to_string)))
    }

    fn lunch(start: &str, end: &str) -> UserRule {
        UserRule::new(RuleType::LunchBreakProtected, 1)
            .with_parameter(RuleParameter::TimeRange(TimeRange::new(start, end)))
    }

    fn sample() -> Vec<Section> {
        vec![
            make_section("s1", (8, 0), (10, 0), Some("p1")),
            make_section("s2", (10, 0), (12, 0), Some("p2")),
            make_section("s3", (12, 0), (14, 0), None),
            make_section("s4", (14, 0), (16, 0), Some("p1")),
        ]
    }

    #[test]
    fn test_no_rules_keeps_everything_in_order() {
        let sections = sample();
        let pruned = SectionPruner::new().prune(&sections, &[]);
        assert_eq!(ids(&pruned), ["s1", "s2", "s3", "s4"]);
    }

    #[test]
    fn test_avoid_professor_exact() {
        let sections = sample();
        let pruned = SectionPruner::new().prune(&sections, &[avoid(Some("p1"))]);
        assert_eq!(ids(&pruned), ["s2", "s3"]);
    }

    #[test]
    fn test_avoid_null_professor_drops_unassigned() {
        let sections = sample();
        let pruned = SectionPruner::new().prune(&sections, &[avoid(None)]);
        assert_eq!(ids(&pruned), ["s1", "s2", "s4"]);
    }

    #[test]
    fn test_avoid_professor_without_value_keeps_unassigned() {
        let sections = sample();
        let rule = |payload: serde_json::Value| UserRule {
            parameters: parameter_from_value(payload),
            ..UserRule::new(RuleType::AvoidProfessor, 1)
        };

        let missing = rule(json!({"type": "professorSelect"}));
        let pruned = SectionPruner::new().prune(&sections, &[missing]);
        assert_eq!(ids(&pruned), ["s1", "s2", "s3", "s4"]);

        let explicit_null = rule(json!({"type": "professorSelect", "value": null}));
        let pruned = SectionPruner::new().prune(&sections, &[explicit_null]);
        assert_eq!(ids(&pruned), ["s1", "s2", "s4"]);
    }

    #[test]
    fn test_lunch_break_boundaries() {
        let sections = vec![
            make_section("ends_at_start", (10, 0), (12, 0), None),
            make_section("starts_at_end", (14, 0), (15, 0), None),
            make_section("one_minute_in", (13, 59), (15, 0), None),
            make_section("inside", (12, 30), (13, 0), None),
        ];
        let pruned = SectionPruner::new().prune(&sections, &[lunch("12:00", "14:00")]);
        assert_eq!(ids(&pruned), ["ends_at_start", "starts_at_end"]);
    }

    #[test]
    fn test_rules_are_cumulative() {
        let sections = sample();
        let rules = [avoid(Some("p2")), lunch("12:00", "14:00")];
        let pruned = SectionPruner::new().prune(&sections, &rules);
        assert_eq!(ids(&pruned), ["s1", "s4"]);
    }

    #[test]
    fn test_absent_or_mismatched_parameters_have_no_effect() {
        let sections = sample();
        let rules = vec![
            UserRule::new(RuleType::AvoidProfessor, 1),
            UserRule::new(RuleType::LunchBreakProtected, 2),
            UserRule::new(RuleType::AvoidProfessor, 3).with_parameter(RuleParameter::DaySelect(1)),
            UserRule::new(RuleType::LunchBreakProtected, 4)
                .with_parameter(RuleParameter::ProfessorSelect(Some("p1".into()))),
            lunch("noon", "14:00"),
            UserRule::new(RuleType::NoGaps, 5),
        ];
        let pruned = SectionPruner::new().prune(&sections, &rules);
        assert_eq!(pruned.len(), sections.len());
    }
}
