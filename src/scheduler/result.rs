//! Ranked, client-facing schedule results.

use serde::Serialize;

use super::ScoredCombination;
use crate::models::{ClockTime, Section};

/// One ranked schedule, ready for serialization.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleResult {
    /// 1-based rank.
    pub rank: usize,
    /// Score rounded to two decimals.
    pub score: f64,
    /// Chosen sections, in search order.
    pub sections: Vec<ScheduledSection>,
}

/// A chosen section as presented to clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduledSection {
    /// Section id.
    pub section_id: String,
    /// Subject display name.
    pub subject: String,
    /// Professor display name, if any.
    pub professor: Option<String>,
    /// Start time (`HH:MM`).
    pub start_time: ClockTime,
    /// End time (`HH:MM`).
    pub end_time: ClockTime,
    /// Weekday names.
    pub days: Vec<String>,
}

impl From<&Section> for ScheduledSection {
    fn from(section: &Section) -> Self {
        Self {
            section_id: section.id.clone(),
            subject: section.subject_name.clone(),
            professor: section.professor_name.clone(),
            start_time: section.start_time,
            end_time: section.end_time,
            days: section.days.iter().map(|d| d.name.clone()).collect(),
        }
    }
}

impl ScheduleResult {
    /// Builds the result for the combination ranked `rank` (1-based).
    pub fn from_combination(combination: &ScoredCombination<'_>, rank: usize) -> Self {
        Self {
            rank,
            score: round_score(combination.score),
            sections: combination
                .sections
                .iter()
                .map(|s| ScheduledSection::from(*s))
                .collect(),
        }
    }

    /// Ranks combinations already sorted best first.
    pub fn rank_all(combinations: &[ScoredCombination<'_>]) -> Vec<Self> {
        combinations
            .iter()
            .enumerate()
            .map(|(i, c)| Self::from_combination(c, i + 1))
            .collect()
    }
}

/// Rounds to two decimal places.
pub fn round_score(score: f64) -> f64 {
    (score * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Weekday;

    fn sample_section() -> Section {
        Section::new(
            "m1",
            "math",
            ClockTime::from_hm(7, 0).unwrap(),
            ClockTime::from_hm(9, 30).unwrap(),
        )
        .with_subject_name("Calculus I")
        .with_professor("prof1")
        .with_professor_name("Ada Lovelace")
        .with_day(Weekday::new(1, "monday"))
        .with_day(Weekday::new(3, "wednesday"))
    }

    #[test]
    fn test_round_score() {
        assert_eq!(round_score(183.3333), 183.33);
        assert_eq!(round_score(66.666), 66.67);
        assert_eq!(round_score(0.0), 0.0);
    }

    #[test]
    fn test_rank_all() {
        let s = sample_section();
        let combos = vec![
            ScoredCombination {
                sections: vec![&s],
                score: 150.0 + 1.0 / 3.0,
            },
            ScoredCombination {
                sections: vec![&s],
                score: 20.0,
            },
        ];
        let ranked = ScheduleResult::rank_all(&combos);
        assert_eq!(ranked[0].rank, 1);
        assert_eq!(ranked[0].score, 150.33);
        assert_eq!(ranked[1].rank, 2);
    }

    #[test]
    fn test_serialized_shape() {
        let s = sample_section();
        let combo = ScoredCombination {
            sections: vec![&s],
            score: 100.0,
        };
        let json = serde_json::to_value(ScheduleResult::from_combination(&combo, 1)).unwrap();
        let section = &json["sections"][0];
        assert_eq!(json["rank"], 1);
        assert_eq!(section["subject"], "Calculus I");
        assert_eq!(section["professor"], "Ada Lovelace");
        assert_eq!(section["startTime"], "07:00");
        assert_eq!(section["endTime"], "09:30");
        assert_eq!(section["days"], serde_json::json!(["monday", "wednesday"]));
    }

    #[test]
    fn test_missing_professor_serializes_null() {
        let s = Section::new(
            "x",
            "art",
            ClockTime::from_hm(10, 0).unwrap(),
            ClockTime::from_hm(11, 0).unwrap(),
        );
        let json = serde_json::to_value(ScheduledSection::from(&s)).unwrap();
        assert!(json["professor"].is_null());
    }
}
