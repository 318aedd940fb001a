//! Built-in rule strategies.
//!
//! # Categories
//!
//! - **Compactness**: NO_GAPS, COMPACT_DAYS, MAX_CONSECUTIVE_HOURS
//! - **Time of day**: NO_EARLY_MORNINGS, NO_LATE_EVENINGS, PREFER_MORNING,
//!   PREFER_AFTERNOON, LUNCH_BREAK_PROTECTED
//! - **Weekly spread**: BALANCED_LOAD, MIN_FREE_DAY
//! - **People**: AVOID_PROFESSOR
//!
//! # Score Convention
//! All strategies return higher scores for more desirable combinations.
//! Penalty-style rules start at 1 and subtract a fixed step per violation,
//! floored at 0.

use std::collections::{BTreeMap, BTreeSet};

use super::{RuleScore, RuleStrategy};
use crate::models::{ClockTime, RuleParameter, RuleType, Section, TimeWindow, DAYS_PER_WEEK};

/// 1 minus `count * step`, floored at 0. Zero violations score exactly 1.
fn penalty(count: usize, step: f64) -> RuleScore {
    if count == 0 {
        1.0
    } else {
        (1.0 - count as f64 * step).max(0.0)
    }
}

/// Groups sections by weekday name, each group sorted by start time.
fn sections_by_day<'a>(combination: &[&'a Section]) -> BTreeMap<&'a str, Vec<&'a Section>> {
    let mut by_day: BTreeMap<&str, Vec<&Section>> = BTreeMap::new();
    for &section in combination {
        for day in &section.days {
            by_day.entry(day.name.as_str()).or_default().push(section);
        }
    }
    for sections in by_day.values_mut() {
        sections.sort_by_key(|s| s.start_time);
    }
    by_day
}

/// Fraction of sections whose start lies in `window`. Empty → 0.
fn start_fraction(combination: &[&Section], window: TimeWindow) -> RuleScore {
    if combination.is_empty() {
        return 0.0;
    }
    let hits = combination
        .iter()
        .filter(|s| window.contains(s.start_time))
        .count();
    hits as f64 / combination.len() as f64
}

fn hm(hour: u32) -> ClockTime {
    ClockTime::from_hm(hour, 0).unwrap_or(ClockTime::MIDNIGHT)
}

// ======================== Compactness rules ========================

/// No idle gaps between classes on the same day.
///
/// Sums every positive gap between consecutive sections of a day, each
/// rounded up to whole hours. Score = `max(0, 1 - gap_hours * 0.25)`.
#[derive(Debug, Clone, Copy)]
pub struct NoGaps;

impl RuleStrategy for NoGaps {
    fn rule_type(&self) -> RuleType {
        RuleType::NoGaps
    }

    fn evaluate(&self, combination: &[&Section], _parameter: Option<&RuleParameter>) -> RuleScore {
        let gap_hours: usize = sections_by_day(combination)
            .values()
            .flat_map(|day| day.windows(2))
            .map(|pair| {
                let (end, next_start) = (pair[0].end_time.minutes(), pair[1].start_time.minutes());
                next_start.saturating_sub(end).div_ceil(60) as usize
            })
            .sum();

        penalty(gap_hours, 0.25)
    }
}

/// Fewest distinct weekdays.
///
/// Score = `max(0, 1 - (days_used - 1) * 0.17)`. Not clamped above:
/// an empty combination scores 1.17.
#[derive(Debug, Clone, Copy)]
pub struct CompactDays;

impl RuleStrategy for CompactDays {
    fn rule_type(&self) -> RuleType {
        RuleType::CompactDays
    }

    fn evaluate(&self, combination: &[&Section], _parameter: Option<&RuleParameter>) -> RuleScore {
        let days: BTreeSet<&str> = combination
            .iter()
            .flat_map(|s| s.days.iter().map(|d| d.name.as_str()))
            .collect();

        (1.0 - (days.len() as f64 - 1.0) * 0.17).max(0.0)
    }
}

/// Cap on back-to-back teaching blocks.
///
/// Sections on the same day that touch exactly (zero-minute gap) merge
/// into one block. Each block longer than the bound (default 4 hours,
/// overridable with a `Number` parameter) is a violation.
/// Score = `max(0, 1 - violations * 0.33)`.
#[derive(Debug, Clone, Copy)]
pub struct MaxConsecutiveHours;

impl MaxConsecutiveHours {
    /// Bound used when no `Number` parameter is given.
    pub const DEFAULT_MAX_HOURS: f64 = 4.0;
}

impl RuleStrategy for MaxConsecutiveHours {
    fn rule_type(&self) -> RuleType {
        RuleType::MaxConsecutiveHours
    }

    fn evaluate(&self, combination: &[&Section], parameter: Option<&RuleParameter>) -> RuleScore {
        let max_hours = parameter
            .and_then(RuleParameter::as_number)
            .unwrap_or(Self::DEFAULT_MAX_HOURS);

        let mut violations = 0;
        for sections in sections_by_day(combination).values() {
            let mut block_hours = 0.0;
            let mut previous_end: Option<ClockTime> = None;

            for section in sections {
                match previous_end {
                    Some(end) if end == section.start_time => {
                        block_hours += section.duration_hours()
                    }
                    Some(_) => {
                        if block_hours > max_hours {
                            violations += 1;
                        }
                        block_hours = section.duration_hours();
                    }
                    None => block_hours = section.duration_hours(),
                }
                previous_end = Some(section.end_time);
            }

            if block_hours > max_hours {
                violations += 1;
            }
        }

        penalty(violations, 0.33)
    }
}

// ======================== Time-of-day rules ========================

/// No classes starting before 08:00.
///
/// A section starting exactly at 08:00 is fine.
#[derive(Debug, Clone, Copy)]
pub struct NoEarlyMornings;

impl RuleStrategy for NoEarlyMornings {
    fn rule_type(&self) -> RuleType {
        RuleType::NoEarlyMornings
    }

    fn evaluate(&self, combination: &[&Section], _parameter: Option<&RuleParameter>) -> RuleScore {
        let cutoff = hm(8);
        let early = combination.iter().filter(|s| s.start_time < cutoff).count();
        penalty(early, 0.33)
    }
}

/// No classes ending after 18:00.
///
/// A section ending exactly at 18:00 is fine.
#[derive(Debug, Clone, Copy)]
pub struct NoLateEvenings;

impl RuleStrategy for NoLateEvenings {
    fn rule_type(&self) -> RuleType {
        RuleType::NoLateEvenings
    }

    fn evaluate(&self, combination: &[&Section], _parameter: Option<&RuleParameter>) -> RuleScore {
        let cutoff = hm(18);
        let late = combination.iter().filter(|s| s.end_time > cutoff).count();
        penalty(late, 0.33)
    }
}

/// Fraction of sections starting in [06:00, 14:00).
#[derive(Debug, Clone, Copy)]
pub struct PreferMorning;

impl RuleStrategy for PreferMorning {
    fn rule_type(&self) -> RuleType {
        RuleType::PreferMorning
    }

    fn evaluate(&self, combination: &[&Section], _parameter: Option<&RuleParameter>) -> RuleScore {
        start_fraction(combination, TimeWindow::new(hm(6), hm(14)))
    }
}

/// Fraction of sections starting in [14:00, 22:00).
#[derive(Debug, Clone, Copy)]
pub struct PreferAfternoon;

impl RuleStrategy for PreferAfternoon {
    fn rule_type(&self) -> RuleType {
        RuleType::PreferAfternoon
    }

    fn evaluate(&self, combination: &[&Section], _parameter: Option<&RuleParameter>) -> RuleScore {
        start_fraction(combination, TimeWindow::new(hm(14), hm(22)))
    }
}

/// Keeps a protected window free of classes.
///
/// The window defaults to 12:00-14:00 and can be replaced by a
/// well-formed `TimeRange` parameter. Each section overlapping it
/// (half-open test) is a violation. Score = `max(0, 1 - violations * 0.5)`.
#[derive(Debug, Clone, Copy)]
pub struct LunchBreakProtected;

impl LunchBreakProtected {
    /// Window used when no `TimeRange` parameter is given.
    pub fn default_window() -> TimeWindow {
        TimeWindow::new(hm(12), hm(14))
    }
}

impl RuleStrategy for LunchBreakProtected {
    fn rule_type(&self) -> RuleType {
        RuleType::LunchBreakProtected
    }

    fn evaluate(&self, combination: &[&Section], parameter: Option<&RuleParameter>) -> RuleScore {
        let protected = match parameter {
            Some(p @ RuleParameter::TimeRange(_)) => match p.as_time_window() {
                Some(window) => window,
                // Unparseable range never matches anything.
                None => return 1.0,
            },
            _ => Self::default_window(),
        };

        let violations = combination
            .iter()
            .filter(|s| s.window().overlaps(&protected))
            .count();
        penalty(violations, 0.5)
    }
}

// ======================== Weekly spread rules ========================

/// Even distribution of class hours across the days in use.
///
/// Score = `max(0, 1 - stddev * 0.2)` where stddev is the population
/// standard deviation of per-day hour totals. No days used → 1.
#[derive(Debug, Clone, Copy)]
pub struct BalancedLoad;

impl RuleStrategy for BalancedLoad {
    fn rule_type(&self) -> RuleType {
        RuleType::BalancedLoad
    }

    fn evaluate(&self, combination: &[&Section], _parameter: Option<&RuleParameter>) -> RuleScore {
        let mut hours_by_day: BTreeMap<&str, f64> = BTreeMap::new();
        for section in combination {
            for day in &section.days {
                *hours_by_day.entry(day.name.as_str()).or_insert(0.0) += section.duration_hours();
            }
        }

        if hours_by_day.is_empty() {
            return 1.0;
        }

        let n = hours_by_day.len() as f64;
        let mean = hours_by_day.values().sum::<f64>() / n;
        let variance = hours_by_day
            .values()
            .map(|h| (h - mean).powi(2))
            .sum::<f64>()
            / n;

        (1.0 - variance.sqrt() * 0.2).max(0.0)
    }
}

/// At least one weekday without classes.
///
/// Without a parameter: `min(1, free_days * 0.33)`. With a `DaySelect`
/// parameter: 1 if that day is free, otherwise `min(0.7, free_days * 0.2)`.
/// No free day at all → 0 either way.
#[derive(Debug, Clone, Copy)]
pub struct MinFreeDay;

impl RuleStrategy for MinFreeDay {
    fn rule_type(&self) -> RuleType {
        RuleType::MinFreeDay
    }

    fn evaluate(&self, combination: &[&Section], parameter: Option<&RuleParameter>) -> RuleScore {
        let used: BTreeSet<i64> = combination
            .iter()
            .flat_map(|s| s.days.iter().map(|d| i64::from(d.id)))
            .collect();
        let free_days = DAYS_PER_WEEK.saturating_sub(used.len());

        if free_days == 0 {
            return 0.0;
        }

        match parameter.and_then(RuleParameter::as_day) {
            Some(preferred) if !used.contains(&preferred) => 1.0,
            Some(_) => (free_days as f64 * 0.2).min(0.7),
            None => (free_days as f64 * 0.33).min(1.0),
        }
    }
}

// ======================== People rules ========================

/// Avoid a given professor.
///
/// 0 if any section is taught by the avoided professor (a `null` target
/// matches sections without a professor), otherwise 1. Without a
/// `ProfessorSelect` parameter the rule is inert and scores 1.
#[derive(Debug, Clone, Copy)]
pub struct AvoidProfessor;

impl RuleStrategy for AvoidProfessor {
    fn rule_type(&self) -> RuleType {
        RuleType::AvoidProfessor
    }

    fn evaluate(&self, combination: &[&Section], parameter: Option<&RuleParameter>) -> RuleScore {
        let Some(avoided) = parameter.and_then(RuleParameter::as_professor) else {
            return 1.0;
        };

        if combination.iter().any(|s| s.professor_id.as_deref() == avoided) {
            0.0
        } else {
            1.0
        }
    }
}
