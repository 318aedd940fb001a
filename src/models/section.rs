//! Section (offered time slot) model.
//!
//! A section is one way of taking a subject: a weekly-recurring time
//! range on one or more weekdays, optionally taught by a professor.
//! A valid timetable picks exactly one section per requested subject.

use serde::{Deserialize, Serialize};

use super::{ClockTime, TimeWindow};

/// Canonical weekday names, indexed by `id - 1`.
const WEEKDAY_NAMES: [&str; 7] = [
    "monday",
    "tuesday",
    "wednesday",
    "thursday",
    "friday",
    "saturday",
    "sunday",
];

/// Number of days in a week.
pub const DAYS_PER_WEEK: usize = 7;

/// A weekday occurrence.
///
/// Identified by a stable id (1 = Monday .. 7 = Sunday) and a name.
/// Grouping and conflict checks compare names; free-day checks compare ids.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Weekday {
    /// Stable day id (1..=7).
    pub id: u8,
    /// Day name (e.g. "monday").
    pub name: String,
}

impl Weekday {
    /// Creates a weekday with an explicit id and name.
    pub fn new(id: u8, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }

    /// Creates the canonical weekday for an id (1 = Monday .. 7 = Sunday).
    pub fn from_id(id: u8) -> Option<Self> {
        let name = WEEKDAY_NAMES.get(usize::from(id).checked_sub(1)?)?;
        Some(Self::new(id, *name))
    }

    /// Whether the id lies in 1..=7.
    #[inline]
    pub fn is_valid_id(&self) -> bool {
        (1..=DAYS_PER_WEEK as u8).contains(&self.id)
    }
}

/// A schedulable time slot for one subject.
///
/// # Invariants
/// - `start < end`
/// - at least one weekday
///
/// Both are checked by [`validate_input`](crate::validation::validate_input),
/// not by the constructor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Section {
    /// Unique section identifier.
    pub id: String,
    /// Owning subject identifier.
    pub subject_id: String,
    /// Owning subject display name.
    #[serde(default)]
    pub subject_name: String,
    /// Assigned professor, if any.
    #[serde(default)]
    pub professor_id: Option<String>,
    /// Professor display name, if any.
    #[serde(default)]
    pub professor_name: Option<String>,
    /// Start time of day (inclusive).
    pub start_time: ClockTime,
    /// End time of day (exclusive).
    pub end_time: ClockTime,
    /// Weekdays on which the section meets.
    pub days: Vec<Weekday>,
}

impl Section {
    /// Creates a section with no professor and no weekdays.
    pub fn new(
        id: impl Into<String>,
        subject_id: impl Into<String>,
        start_time: ClockTime,
        end_time: ClockTime,
    ) -> Self {
        Self {
            id: id.into(),
            subject_id: subject_id.into(),
            subject_name: String::new(),
            professor_id: None,
            professor_name: None,
            start_time,
            end_time,
            days: Vec::new(),
        }
    }

    /// Sets the subject display name.
    pub fn with_subject_name(mut self, name: impl Into<String>) -> Self {
        self.subject_name = name.into();
        self
    }

    /// Sets the professor id.
    pub fn with_professor(mut self, professor_id: impl Into<String>) -> Self {
        self.professor_id = Some(professor_id.into());
        self
    }

    /// Sets the professor display name.
    pub fn with_professor_name(mut self, name: impl Into<String>) -> Self {
        self.professor_name = Some(name.into());
        self
    }

    /// Adds a weekday occurrence.
    pub fn with_day(mut self, day: Weekday) -> Self {
        self.days.push(day);
        self
    }

    /// Adds canonical weekdays by id. Ids outside 1..=7 are ignored.
    pub fn with_day_ids(mut self, ids: &[u8]) -> Self {
        self.days.extend(ids.iter().filter_map(|&id| Weekday::from_id(id)));
        self
    }

    /// The section's time range as a half-open window.
    #[inline]
    pub fn window(&self) -> TimeWindow {
        TimeWindow::new(self.start_time, self.end_time)
    }

    /// Duration in minutes.
    #[inline]
    pub fn duration_minutes(&self) -> u32 {
        self.window().duration_minutes()
    }

    /// Duration in (fractional) hours.
    #[inline]
    pub fn duration_hours(&self) -> f64 {
        f64::from(self.duration_minutes()) / 60.0
    }

    /// Whether this section meets on a day with the given name.
    pub fn meets_on(&self, day_name: &str) -> bool {
        self.days.iter().any(|d| d.name == day_name)
    }

    /// Whether the two sections share at least one weekday (by name).
    pub fn shares_day_with(&self, other: &Section) -> bool {
        self.days.iter().any(|d| other.meets_on(&d.name))
    }

    /// Whether the two sections cannot both be taken.
    ///
    /// True iff they share a weekday and their time ranges overlap.
    pub fn conflicts_with(&self, other: &Section) -> bool {
        self.shares_day_with(other) && self.window().overlaps(&other.window())
    }
}

/// The candidate sections offered for one subject.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubjectSections {
    /// Subject identifier.
    pub subject_id: String,
    /// Candidate sections.
    pub sections: Vec<Section>,
}

impl SubjectSections {
    /// Creates a subject entry.
    pub fn new(subject_id: impl Into<String>, sections: Vec<Section>) -> Self {
        Self {
            subject_id: subject_id.into(),
            sections,
        }
    }
}
