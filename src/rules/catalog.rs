//! Rule catalog: display metadata and parameter shapes per rule type.
//!
//! Reference data for rule configuration surfaces. Scoring and pruning do
//! not consult it; evaluators carry their own defaults.

use serde::Serialize;

use crate::models::{ParameterKind, RuleType};

/// Describes the parameter a rule accepts.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParameterSpec {
    /// Expected payload kind.
    #[serde(rename = "type")]
    pub kind: ParameterKind,
    /// Prompt shown when configuring the rule.
    pub label: &'static str,
    /// Whether the rule is meaningful only with a parameter.
    pub required: bool,
    /// Lower bound for numeric parameters.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,
    /// Upper bound for numeric parameters.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
}

/// One catalog entry.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RuleCatalogEntry {
    /// Rule type.
    #[serde(rename = "type")]
    pub rule_type: RuleType,
    /// Display name.
    pub name: &'static str,
    /// One-line description.
    pub description: &'static str,
    /// Accepted parameter, if any.
    pub parameter: Option<ParameterSpec>,
}

impl RuleCatalogEntry {
    /// Whether a parameter of `kind` is the one this rule expects.
    pub fn accepts(&self, kind: ParameterKind) -> bool {
        self.parameter.is_some_and(|p| p.kind == kind)
    }
}

const fn no_parameter(
    rule_type: RuleType,
    name: &'static str,
    description: &'static str,
) -> RuleCatalogEntry {
    RuleCatalogEntry {
        rule_type,
        name,
        description,
        parameter: None,
    }
}

static CATALOG: [RuleCatalogEntry; 11] = [
    no_parameter(
        RuleType::NoGaps,
        "No gaps",
        "Avoids idle time between classes on the same day",
    ),
    no_parameter(
        RuleType::NoEarlyMornings,
        "No early mornings",
        "Avoids classes in the first hours of the morning",
    ),
    no_parameter(
        RuleType::NoLateEvenings,
        "No late evenings",
        "Avoids classes in the last hours of the evening",
    ),
    no_parameter(
        RuleType::PreferMorning,
        "Prefer mornings",
        "Rewards schedules concentrated in the morning",
    ),
    no_parameter(
        RuleType::PreferAfternoon,
        "Prefer afternoons",
        "Rewards schedules concentrated in the afternoon",
    ),
    no_parameter(
        RuleType::CompactDays,
        "Compact days",
        "Rewards having classes on as few days as possible",
    ),
    no_parameter(
        RuleType::BalancedLoad,
        "Balanced load",
        "Spreads class hours evenly across the days",
    ),
    RuleCatalogEntry {
        rule_type: RuleType::MinFreeDay,
        name: "Free day",
        description: "Keeps at least one day without classes",
        parameter: Some(ParameterSpec {
            kind: ParameterKind::DaySelect,
            label: "Which day would you like free?",
            required: false,
            min: None,
            max: None,
        }),
    },
    RuleCatalogEntry {
        rule_type: RuleType::MaxConsecutiveHours,
        name: "Consecutive hours limit",
        description: "Penalizes back-to-back blocks longer than the limit",
        parameter: Some(ParameterSpec {
            kind: ParameterKind::Number,
            label: "How many consecutive hours at most?",
            required: true,
            min: Some(1.0),
            max: Some(8.0),
        }),
    },
    RuleCatalogEntry {
        rule_type: RuleType::LunchBreakProtected,
        name: "Lunch break",
        description: "Protects a time range so no classes fall in it",
        parameter: Some(ParameterSpec {
            kind: ParameterKind::TimeRange,
            label: "Which range should stay free?",
            required: true,
            min: None,
            max: None,
        }),
    },
    RuleCatalogEntry {
        rule_type: RuleType::AvoidProfessor,
        name: "Avoid professor",
        description: "Excludes sections taught by a professor you do not want",
        parameter: Some(ParameterSpec {
            kind: ParameterKind::ProfessorSelect,
            label: "Which professor do you want to avoid?",
            required: true,
            min: None,
            max: None,
        }),
    },
];

/// All catalog entries, in `RuleType::ALL` order.
pub fn entries() -> &'static [RuleCatalogEntry] {
    &CATALOG
}

/// Catalog entry for a rule type.
pub fn lookup(rule_type: RuleType) -> &'static RuleCatalogEntry {
    // CATALOG is laid out in RuleType::ALL order
    &CATALOG[rule_type as usize]
}

/// Catalog entry for a wire name such as `"NO_GAPS"`.
pub fn lookup_name(name: &str) -> Option<&'static RuleCatalogEntry> {
    name.parse().ok().map(lookup)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_covers_every_rule_type() {
        assert_eq!(entries().len(), RuleType::ALL.len());
        for t in RuleType::ALL {
            assert_eq!(lookup(t).rule_type, t);
        }
    }

    #[test]
    fn test_lookup_name() {
        let entry = lookup_name("MAX_CONSECUTIVE_HOURS").unwrap();
        let spec = entry.parameter.unwrap();
        assert_eq!(spec.kind, ParameterKind::Number);
        assert!(spec.required);
        assert_eq!(spec.min, Some(1.0));
        assert_eq!(spec.max, Some(8.0));
        assert!(lookup_name("EARLY_BIRD").is_none());
    }

    #[test]
    fn test_parameter_shapes() {
        assert!(lookup(RuleType::NoGaps).parameter.is_none());
        assert!(lookup(RuleType::MinFreeDay).accepts(ParameterKind::DaySelect));
        assert!(!lookup(RuleType::MinFreeDay).parameter.unwrap().required);
        assert!(lookup(RuleType::LunchBreakProtected).accepts(ParameterKind::TimeRange));
        assert!(lookup(RuleType::AvoidProfessor).accepts(ParameterKind::ProfessorSelect));
        assert!(!lookup(RuleType::AvoidProfessor).accepts(ParameterKind::Number));
    }

    #[test]
    fn test_entry_serializes_for_clients() {
        let json = serde_json::to_value(lookup(RuleType::MaxConsecutiveHours)).unwrap();
        assert_eq!(json["type"], "MAX_CONSECUTIVE_HOURS");
        assert_eq!(json["parameter"]["type"], "number");
        assert_eq!(json["parameter"]["max"], 8.0);

        let json = serde_json::to_value(lookup(RuleType::NoGaps)).unwrap();
        assert!(json["parameter"].is_null());
    }
}
