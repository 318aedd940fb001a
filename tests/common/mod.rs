//! Shared fixtures for integration tests.

#![allow(dead_code)]

use u_timetable::models::{ClockTime, Section, SubjectSections};

/// Routes `tracing` output through the test harness. Safe to call repeatedly.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new("u_timetable=debug"))
        .with_test_writer()
        .try_init();
}

pub fn at(hour: u32) -> ClockTime {
    ClockTime::from_hm(hour, 0).unwrap()
}

pub fn section(id: &str, subject: &str, start: u32, end: u32, days: &[u8]) -> Section {
    Section::new(id, subject, at(start), at(end))
        .with_subject_name(subject.to_uppercase())
        .with_day_ids(days)
}

pub fn subject(id: &str, sections: Vec<Section>) -> SubjectSections {
    SubjectSections::new(id, sections)
}

/// Every one-section-per-subject combination, conflicting or not.
pub fn all_combinations(subjects: &[SubjectSections]) -> Vec<Vec<&Section>> {
    subjects.iter().fold(vec![Vec::new()], |acc, subject| {
        acc.iter()
            .flat_map(|prefix| {
                subject.sections.iter().map(move |s| {
                    let mut next = prefix.clone();
                    next.push(s);
                    next
                })
            })
            .collect()
    })
}

pub fn is_conflict_free(combination: &[&Section]) -> bool {
    combination
        .iter()
        .enumerate()
        .all(|(i, a)| combination[i + 1..].iter().all(|b| !a.conflicts_with(b)))
}
