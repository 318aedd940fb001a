//! Request façade: raw records in, ranked results out.
//!
//! Mirrors what a request handler does around the engine:
//! 1. Resolve rule records into [`UserRule`]s, skipping unknown types.
//! 2. Sort rules by ascending priority (stable).
//! 3. Group the flat section list under each requested subject.
//! 4. Run the engine and rank the results.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use tracing::warn;

use super::{ScheduleResult, SchedulingEngine};
use crate::error::{SchedulingError, SchedulingResult};
use crate::models::{parameter_from_value, RuleType, Section, SubjectSections, UserRule};
use crate::validation::{ValidationError, ValidationErrorKind};

/// A stored rule as supplied by the rule store, before type resolution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RuleRecord {
    /// Rule type name (e.g. "NO_GAPS").
    #[serde(rename = "type")]
    pub rule_type: String,
    /// Priority order (1 = highest).
    pub priority_order: i64,
    /// Raw parameter payload.
    #[serde(default)]
    pub parameters: Option<serde_json::Value>,
}

impl RuleRecord {
    /// Creates a record without a parameter.
    pub fn new(rule_type: impl Into<String>, priority_order: i64) -> Self {
        Self {
            rule_type: rule_type.into(),
            priority_order,
            parameters: None,
        }
    }

    /// Sets the raw parameter payload.
    pub fn with_parameters(mut self, parameters: serde_json::Value) -> Self {
        self.parameters = Some(parameters);
        self
    }
}

impl From<&UserRule> for RuleRecord {
    fn from(rule: &UserRule) -> Self {
        Self {
            rule_type: rule.rule_type.as_str().to_string(),
            priority_order: i64::from(rule.priority_order),
            parameters: rule
                .parameters
                .as_ref()
                .and_then(|p| serde_json::to_value(p).ok()),
        }
    }
}

/// Input container for timetable generation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleRequest {
    /// Requested subjects, in request order.
    pub subject_ids: Vec<String>,
    /// Sections of the requested subjects (other subjects' sections are ignored).
    pub sections: Vec<Section>,
    /// The user's rules, in any order.
    #[serde(default)]
    pub rules: Vec<RuleRecord>,
}

impl ScheduleRequest {
    /// Creates a request without rules.
    pub fn new(subject_ids: Vec<String>, sections: Vec<Section>) -> Self {
        Self {
            subject_ids,
            sections,
            rules: Vec::new(),
        }
    }

    /// Adds a rule record.
    pub fn with_rule(mut self, rule: RuleRecord) -> Self {
        self.rules.push(rule);
        self
    }

    /// Resolves rule records into typed rules sorted by priority.
    ///
    /// Unknown rule types are skipped. Ill-shaped parameters become absent.
    ///
    /// # Errors
    /// [`SchedulingError::InvalidInput`] if any priority is outside `1..=u32::MAX`.
    pub fn resolve_rules(&self) -> SchedulingResult<Vec<UserRule>> {
        let mut rules = Vec::with_capacity(self.rules.len());
        let mut errors = Vec::new();

        for record in &self.rules {
            let rule_type: RuleType = match record.rule_type.parse() {
                Ok(t) => t,
                Err(err) => {
                    warn!(%err, "skipping rule with unknown type");
                    continue;
                }
            };

            let priority_order = match u32::try_from(record.priority_order) {
                Ok(p) if p >= 1 => p,
                _ => {
                    errors.push(ValidationError::new(
                        ValidationErrorKind::InvalidPriority,
                        format!(
                            "Rule {} has priority order {}; priorities start at 1",
                            record.rule_type, record.priority_order
                        ),
                    ));
                    continue;
                }
            };

            rules.push(UserRule {
                rule_type,
                priority_order,
                parameters: record.parameters.clone().and_then(parameter_from_value),
            });
        }

        if !errors.is_empty() {
            return Err(SchedulingError::InvalidInput(errors));
        }

        rules.sort_by_key(|r| r.priority_order);
        Ok(rules)
    }

    /// Groups sections under each requested subject, in request order.
    ///
    /// A subject id requested more than once is grouped once, at its first
    /// position.
    ///
    /// # Errors
    /// [`SchedulingError::NoSectionsForSubject`] for the first requested
    /// subject without any section.
    pub fn group_sections(&self) -> SchedulingResult<Vec<SubjectSections>> {
        let mut seen = HashSet::new();
        self.subject_ids
            .iter()
            .filter(|subject_id| seen.insert(subject_id.as_str()))
            .map(|subject_id| {
                let sections: Vec<Section> = self
                    .sections
                    .iter()
                    .filter(|s| &s.subject_id == subject_id)
                    .cloned()
                    .collect();
                if sections.is_empty() {
                    Err(SchedulingError::NoSectionsForSubject {
                        subject_id: subject_id.clone(),
                    })
                } else {
                    Ok(SubjectSections::new(subject_id.clone(), sections))
                }
            })
            .collect()
    }
}

impl SchedulingEngine {
    /// Runs a full request and returns ranked results.
    ///
    /// # Example
    ///
    /// ```
    /// use u_timetable::models::{ClockTime, Section};
    /// use u_timetable::scheduler::{RuleRecord, ScheduleRequest, SchedulingEngine};
    ///
    /// let at = |h| ClockTime::from_hm(h, 0).unwrap();
    /// let request = ScheduleRequest::new(
    ///     vec!["math".into()],
    ///     vec![
    ///         Section::new("m1", "math", at(7), at(9)).with_day_ids(&[1]),
    ///         Section::new("m2", "math", at(10), at(12)).with_day_ids(&[1]),
    ///     ],
    /// )
    /// .with_rule(RuleRecord::new("NO_EARLY_MORNINGS", 1));
    ///
    /// let ranked = SchedulingEngine::new().schedule_request(&request).unwrap();
    /// assert_eq!(ranked[0].rank, 1);
    /// assert_eq!(ranked[0].sections[0].section_id, "m2");
    /// assert_eq!(ranked[0].score, 100.0);
    /// ```
    pub fn schedule_request(
        &self,
        request: &ScheduleRequest,
    ) -> SchedulingResult<Vec<ScheduleResult>> {
        let rules = request.resolve_rules()?;
        let subjects = request.group_sections()?;
        let combinations = self.generate(&subjects, &rules)?;
        Ok(ScheduleResult::rank_all(&combinations))
    }
}
