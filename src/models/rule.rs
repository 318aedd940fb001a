//! User rule and rule parameter models.
//!
//! A [`UserRule`] is one configured preference: a [`RuleType`], a
//! priority (1 = most influential) and an optional typed
//! [`RuleParameter`].
//!
//! # Leniency
//! A parameter whose kind does not match what the rule expects is never
//! an error. Evaluators read parameters through the typed accessors
//! (`as_number`, `as_time_window`, ...) which return `None` on a kind
//! mismatch, and fall back to their neutral behavior.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

use super::{ClockTime, TimeWindow};

/// The closed set of rule types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RuleType {
    /// Avoid idle time between classes on the same day.
    NoGaps,
    /// Avoid classes starting before 08:00.
    NoEarlyMornings,
    /// Avoid classes ending after 18:00.
    NoLateEvenings,
    /// Favor classes starting in [06:00, 14:00).
    PreferMorning,
    /// Favor classes starting in [14:00, 22:00).
    PreferAfternoon,
    /// Favor using as few weekdays as possible.
    CompactDays,
    /// Favor an even spread of hours across used weekdays.
    BalancedLoad,
    /// Favor keeping at least one (optionally a specific) day free.
    MinFreeDay,
    /// Penalize back-to-back blocks longer than a bound.
    MaxConsecutiveHours,
    /// Keep a time window (default lunch 12:00-14:00) free.
    LunchBreakProtected,
    /// Exclude a professor.
    AvoidProfessor,
}

impl RuleType {
    /// Every rule type, in catalog order.
    pub const ALL: [RuleType; 11] = [
        RuleType::NoGaps,
        RuleType::NoEarlyMornings,
        RuleType::NoLateEvenings,
        RuleType::PreferMorning,
        RuleType::PreferAfternoon,
        RuleType::CompactDays,
        RuleType::BalancedLoad,
        RuleType::MinFreeDay,
        RuleType::MaxConsecutiveHours,
        RuleType::LunchBreakProtected,
        RuleType::AvoidProfessor,
    ];

    /// Wire name (e.g. "NO_GAPS").
    pub fn as_str(self) -> &'static str {
        match self {
            RuleType::NoGaps => "NO_GAPS",
            RuleType::NoEarlyMornings => "NO_EARLY_MORNINGS",
            RuleType::NoLateEvenings => "NO_LATE_EVENINGS",
            RuleType::PreferMorning => "PREFER_MORNING",
            RuleType::PreferAfternoon => "PREFER_AFTERNOON",
            RuleType::CompactDays => "COMPACT_DAYS",
            RuleType::BalancedLoad => "BALANCED_LOAD",
            RuleType::MinFreeDay => "MIN_FREE_DAY",
            RuleType::MaxConsecutiveHours => "MAX_CONSECUTIVE_HOURS",
            RuleType::LunchBreakProtected => "LUNCH_BREAK_PROTECTED",
            RuleType::AvoidProfessor => "AVOID_PROFESSOR",
        }
    }
}

impl fmt::Display for RuleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned for an unrecognised rule type name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown rule type '{0}'")]
pub struct UnknownRuleType(pub String);

impl FromStr for RuleType {
    type Err = UnknownRuleType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RuleType::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| UnknownRuleType(s.to_string()))
    }
}

/// Shape of a rule parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ParameterKind {
    /// A numeric bound.
    Number,
    /// A protected `{start, end}` clock interval.
    TimeRange,
    /// A preferred weekday id.
    DaySelect,
    /// A professor to avoid.
    ProfessorSelect,
}

/// A `{start, end}` pair of `HH:MM` strings, kept as supplied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeRange {
    /// Window start, `HH:MM`.
    pub start: String,
    /// Window end, `HH:MM`.
    pub end: String,
}

impl TimeRange {
    /// Creates a time range from two `HH:MM` strings.
    pub fn new(start: impl Into<String>, end: impl Into<String>) -> Self {
        Self {
            start: start.into(),
            end: end.into(),
        }
    }

    /// Parses both ends. `None` if either is malformed.
    pub fn window(&self) -> Option<TimeWindow> {
        let start: ClockTime = self.start.parse().ok()?;
        let end: ClockTime = self.end.parse().ok()?;
        Some(TimeWindow::new(start, end))
    }
}

/// A typed rule parameter payload.
///
/// Wire shape: `{"type": "<kind>", "value": ...}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "camelCase")]
pub enum RuleParameter {
    /// A numeric bound (e.g. max consecutive hours).
    Number(f64),
    /// A protected time interval.
    TimeRange(TimeRange),
    /// A preferred weekday id (1..=7). Whole-number floats such as `5.0`
    /// are accepted.
    #[serde(deserialize_with = "whole_number")]
    DaySelect(i64),
    /// A professor id to avoid. `None` targets sections without a professor.
    ProfessorSelect(Option<String>),
}

impl RuleParameter {
    /// Parameter kind tag.
    pub fn kind(&self) -> ParameterKind {
        match self {
            RuleParameter::Number(_) => ParameterKind::Number,
            RuleParameter::TimeRange(_) => ParameterKind::TimeRange,
            RuleParameter::DaySelect(_) => ParameterKind::DaySelect,
            RuleParameter::ProfessorSelect(_) => ParameterKind::ProfessorSelect,
        }
    }

    /// Numeric value, if this is a `Number`.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            RuleParameter::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Parsed window, if this is a well-formed `TimeRange`.
    pub fn as_time_window(&self) -> Option<TimeWindow> {
        match self {
            RuleParameter::TimeRange(range) => range.window(),
            _ => None,
        }
    }

    /// Day id, if this is a `DaySelect`.
    pub fn as_day(&self) -> Option<i64> {
        match self {
            RuleParameter::DaySelect(day) => Some(*day),
            _ => None,
        }
    }

    /// Avoided professor, if this is a `ProfessorSelect`.
    ///
    /// The inner `None` is an explicit "no professor" target.
    pub fn as_professor(&self) -> Option<Option<&str>> {
        match self {
            RuleParameter::ProfessorSelect(p) => Some(p.as_deref()),
            _ => None,
        }
    }
}

/// A user's configured rule instance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRule {
    /// Rule type.
    #[serde(rename = "type")]
    pub rule_type: RuleType,
    /// Priority order (1 = highest). Must be at least 1.
    pub priority_order: u32,
    /// Optional parameter. Ill-shaped payloads deserialize as `None`.
    #[serde(default, deserialize_with = "lenient_parameter")]
    pub parameters: Option<RuleParameter>,
}

impl UserRule {
    /// Creates a rule without a parameter.
    pub fn new(rule_type: RuleType, priority_order: u32) -> Self {
        Self {
            rule_type,
            priority_order,
            parameters: None,
        }
    }

    /// Sets the parameter.
    pub fn with_parameter(mut self, parameter: RuleParameter) -> Self {
        self.parameters = Some(parameter);
        self
    }

    /// Borrowed parameter, if any.
    #[inline]
    pub fn parameter(&self) -> Option<&RuleParameter> {
        self.parameters.as_ref()
    }
}

/// Deserializes a parameter, mapping any ill-shaped payload to `None`.
pub(crate) fn lenient_parameter<'de, D>(deserializer: D) -> Result<Option<RuleParameter>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(raw.and_then(parameter_from_value))
}

/// Reads an integer, also taking floats with no fractional part.
fn whole_number<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Int(i64),
        Float(f64),
    }

    match Raw::deserialize(deserializer)? {
        Raw::Int(n) => Ok(n),
        Raw::Float(f) if f.is_finite() && f.fract() == 0.0 => Ok(f as i64),
        Raw::Float(f) => Err(D::Error::custom(format!("{f} is not a whole number"))),
    }
}

/// Converts a raw JSON payload into a parameter, or `None` if ill-shaped.
///
/// The `value` key is required even when its content may be `null`:
/// `{"type": "professorSelect"}` is ill-shaped, while
/// `{"type": "professorSelect", "value": null}` targets unassigned sections.
pub(crate) fn parameter_from_value(value: serde_json::Value) -> Option<RuleParameter> {
    if value.is_null() {
        return None;
    }
    if value.get("value").is_none() {
        tracing::debug!("ignoring rule parameter without a value");
        return None;
    }
    match serde_json::from_value(value) {
        Ok(parameter) => Some(parameter),
        Err(err) => {
            tracing::debug!(error = %err, "ignoring ill-shaped rule parameter");
            None
        }
    }
}
