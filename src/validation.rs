//! Input validation for timetable generation.
//!
//! Checks structural integrity of the requested subjects, their sections
//! and the user's rules before any search happens. Detects:
//! - An empty subject list
//! - Duplicate subject or section IDs
//! - Sections listed under a subject they do not belong to
//! - Empty or inverted time ranges, sections without weekdays, weekday ids outside 1..=7
//! - Rule priorities below 1
//!
//! Rule parameters are not checked: an ill-shaped parameter makes its rule
//! inert rather than invalid.

use crate::models::{SubjectSections, UserRule};
use std::collections::HashSet;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// No subjects were requested.
    NoSubjects,
    /// Two entities share the same ID.
    DuplicateId,
    /// A section's `subject_id` differs from the subject it is listed under.
    SubjectMismatch,
    /// A section's start is not before its end.
    InvalidTimeRange,
    /// A section meets on no weekday.
    NoWeekdays,
    /// A weekday id is outside 1..=7.
    InvalidWeekday,
    /// A rule's priority order is below 1.
    InvalidPriority,
}

impl ValidationError {
    pub(crate) fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates the input of a generation request.
///
/// Checks:
/// 1. At least one subject
/// 2. No duplicate subject IDs
/// 3. No duplicate section IDs (across all subjects)
/// 4. Each section belongs to the subject it is listed under
/// 5. Each section has `start < end`
/// 6. Each section meets on at least one weekday, all with ids in 1..=7
/// 7. Every rule has `priority_order >= 1`
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_input(subjects: &[SubjectSections], rules: &[UserRule]) -> ValidationResult {
    let mut errors = Vec::new();

    if subjects.is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::NoSubjects,
            "No subjects requested",
        ));
    }

    let mut subject_ids = HashSet::new();
    let mut section_ids = HashSet::new();

    for subject in subjects {
        if !subject_ids.insert(subject.subject_id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate subject ID: {}", subject.subject_id),
            ));
        }

        for section in &subject.sections {
            if !section_ids.insert(section.id.as_str()) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::DuplicateId,
                    format!("Duplicate section ID: {}", section.id),
                ));
            }

            if section.subject_id != subject.subject_id {
                errors.push(ValidationError::new(
                    ValidationErrorKind::SubjectMismatch,
                    format!(
                        "Section '{}' belongs to subject '{}' but is listed under '{}'",
                        section.id, section.subject_id, subject.subject_id
                    ),
                ));
            }

            if section.start_time >= section.end_time {
                errors.push(ValidationError::new(
                    ValidationErrorKind::InvalidTimeRange,
                    format!(
                        "Section '{}' starts at {} but ends at {}",
                        section.id, section.start_time, section.end_time
                    ),
                ));
            }

            if section.days.is_empty() {
                errors.push(ValidationError::new(
                    ValidationErrorKind::NoWeekdays,
                    format!("Section '{}' has no weekdays", section.id),
                ));
            }

            for day in section.days.iter().filter(|d| !d.is_valid_id()) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::InvalidWeekday,
                    format!(
                        "Section '{}' references weekday id {} ('{}')",
                        section.id, day.id, day.name
                    ),
                ));
            }
        }
    }

    for (index, rule) in rules.iter().enumerate() {
        if rule.priority_order == 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidPriority,
                format!(
                    "Rule #{} ({}) has priority order 0; priorities start at 1",
                    index + 1,
                    rule.rule_type
                ),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ClockTime, RuleParameter, RuleType, Section, Weekday};

    fn at(hour: u32) -> ClockTime {
        ClockTime::from_hm(hour, 0).unwrap()
    }

    fn make_section(id: &str, subject: &str) -> Section {
        Section::new(id, subject, at(8), at(10)).with_day_ids(&[1])
    }

    fn sample_subjects() -> Vec<SubjectSections> {
        vec![
            SubjectSections::new(
                "math",
                vec![make_section("m1", "math"), make_section("m2", "math")],
            ),
            SubjectSections::new("physics", vec![make_section("p1", "physics")]),
        ]
    }

    fn has_kind(errors: &[ValidationError], kind: ValidationErrorKind) -> bool {
        errors.iter().any(|e| e.kind == kind)
    }

    #[test]
    fn test_valid_input() {
        let rules = vec![UserRule::new(RuleType::NoGaps, 1)];
        assert!(validate_input(&sample_subjects(), &rules).is_ok());
    }

    #[test]
    fn test_no_subjects() {
        let errors = validate_input(&[], &[]).unwrap_err();
        assert!(has_kind(&errors, ValidationErrorKind::NoSubjects));
    }

    #[test]
    fn test_duplicate_ids() {
        let mut subjects = sample_subjects();
        subjects.push(SubjectSections::new("math", vec![make_section("m1", "math")]));

        let errors = validate_input(&subjects, &[]).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::DuplicateId && e.message.contains("subject")));
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::DuplicateId && e.message.contains("section")));
    }

    #[test]
    fn test_subject_mismatch() {
        let subjects = vec![SubjectSections::new("math", vec![make_section("p1", "physics")])];
        let errors = validate_input(&subjects, &[]).unwrap_err();
        assert!(has_kind(&errors, ValidationErrorKind::SubjectMismatch));
    }

    #[test]
    fn test_invalid_time_range() {
        let inverted = Section::new("m1", "math", at(10), at(8)).with_day_ids(&[1]);
        let empty = Section::new("m2", "math", at(9), at(9)).with_day_ids(&[1]);
        let subjects = vec![SubjectSections::new("math", vec![inverted, empty])];

        let errors = validate_input(&subjects, &[]).unwrap_err();
        assert_eq!(
            errors
                .iter()
                .filter(|e| e.kind == ValidationErrorKind::InvalidTimeRange)
                .count(),
            2
        );
    }

    #[test]
    fn test_weekday_checks() {
        let no_days = Section::new("m1", "math", at(8), at(10));
        let bad_day =
            Section::new("m2", "math", at(8), at(10)).with_day(Weekday::new(8, "someday"));
        let subjects = vec![SubjectSections::new("math", vec![no_days, bad_day])];

        let errors = validate_input(&subjects, &[]).unwrap_err();
        assert!(has_kind(&errors, ValidationErrorKind::NoWeekdays));
        assert!(has_kind(&errors, ValidationErrorKind::InvalidWeekday));
    }

    #[test]
    fn test_zero_priority() {
        let rules = vec![
            UserRule::new(RuleType::NoGaps, 1),
            UserRule::new(RuleType::CompactDays, 0),
        ];
        let errors = validate_input(&sample_subjects(), &rules).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, ValidationErrorKind::InvalidPriority);
        assert!(errors[0].message.contains("COMPACT_DAYS"));
    }

    #[test]
    fn test_parameters_are_not_validated() {
        let rules = vec![UserRule::new(RuleType::MaxConsecutiveHours, 1)
            .with_parameter(RuleParameter::ProfessorSelect(None))];
        assert!(validate_input(&sample_subjects(), &rules).is_ok());
    }

    #[test]
    fn test_multiple_errors() {
        let subjects = vec![SubjectSections::new(
            "math",
            vec![Section::new("m1", "physics", at(10), at(8))],
        )];
        let errors = validate_input(&subjects, &[UserRule::new(RuleType::NoGaps, 0)]).unwrap_err();
        assert!(errors.len() >= 4);
    }
}
