//! Scheduling errors.
//!
//! Every variant describes a condition the requester can fix (drop a
//! rule, pick other subjects, correct input), never a system fault.
//! Ill-shaped rule parameters are deliberately not errors.

use thiserror::Error;

use crate::validation::ValidationError;

/// Result alias for scheduling operations.
pub type SchedulingResult<T> = Result<T, SchedulingError>;

/// Errors returned by the scheduling engine and request façade.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SchedulingError {
    /// Pruning removed every candidate section of a subject.
    #[error(
        "no available sections for subject {subject_id} after applying rules; \
         consider removing or adjusting some rules"
    )]
    EmptyCandidateSet { subject_id: String },

    /// Every complete assignment contains a time conflict.
    #[error(
        "no valid schedule combinations found; \
         there may be too many conflicts between sections"
    )]
    NoValidCombination,

    /// A requested subject has no sections at all.
    #[error("no sections found for subject {subject_id}")]
    NoSectionsForSubject { subject_id: String },

    /// The input failed structural validation.
    #[error("invalid scheduling input: {}", summarize(.0))]
    InvalidInput(Vec<ValidationError>),
}

impl SchedulingError {
    /// Whether the error should be reported as a client-side (4xx-style) failure.
    ///
    /// All current variants are.
    pub fn is_user_error(&self) -> bool {
        match self {
            SchedulingError::EmptyCandidateSet { .. }
            | SchedulingError::NoValidCombination
            | SchedulingError::NoSectionsForSubject { .. }
            | SchedulingError::InvalidInput(_) => true,
        }
    }

    /// Subject the error refers to, if any.
    pub fn subject_id(&self) -> Option<&str> {
        match self {
            SchedulingError::EmptyCandidateSet { subject_id }
            | SchedulingError::NoSectionsForSubject { subject_id } => Some(subject_id),
            _ => None,
        }
    }
}

fn summarize(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::ValidationErrorKind;

    #[test]
    fn test_messages_name_the_subject() {
        let err = SchedulingError::EmptyCandidateSet {
            subject_id: "math".into(),
        };
        assert!(err.to_string().contains("math"));
        assert_eq!(err.subject_id(), Some("math"));
        assert!(err.is_user_error());
        assert!(SchedulingError::NoValidCombination.subject_id().is_none());
    }

    #[test]
    fn test_invalid_input_lists_every_problem() {
        let err = SchedulingError::InvalidInput(vec![
            ValidationError::new(ValidationErrorKind::NoSubjects, "no subjects requested"),
            ValidationError::new(ValidationErrorKind::InvalidPriority, "rule 0 has priority 0"),
        ]);
        let msg = err.to_string();
        assert!(msg.contains("no subjects requested"));
        assert!(msg.contains("priority 0"));
    }
}
