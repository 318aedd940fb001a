//! Timetable domain models.
//!
//! Provides the data types the engine consumes: sections with their
//! weekly time slots, and the user's prioritized rules.
//!
//! # Domain Mappings
//!
//! | u-timetable | University | Training Center | Gym |
//! |-------------|-----------|-----------------|-----|
//! | Subject | Course | Module | Class Type |
//! | Section | Lecture Group | Session Slot | Class Slot |
//! | Professor | Lecturer | Trainer | Instructor |
//! | UserRule | Student Preference | Trainee Preference | Member Preference |

mod rule;
mod section;
mod time;

pub use rule::{ParameterKind, RuleParameter, RuleType, TimeRange, UnknownRuleType, UserRule};
pub(crate) use rule::parameter_from_value;
pub use section::{Section, SubjectSections, Weekday, DAYS_PER_WEEK};
pub use time::{ClockTime, ParseClockTimeError, TimeWindow, MINUTES_PER_DAY};
