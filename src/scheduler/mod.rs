//! Timetable generation: backtracking search, ranking and request handling.
//!
//! # Algorithm
//!
//! `SchedulingEngine` prunes each subject's sections, orders subjects by
//! how few candidates remain, then runs an exhaustive depth-first search
//! over one-section-per-subject assignments, skipping any partial
//! assignment with a time conflict. Every complete assignment is scored by
//! the [`RuleScorer`](crate::rules::RuleScorer) and the best K are kept.
//!
//! # Request Handling
//!
//! `ScheduleRequest` accepts raw rule records and a flat section list and
//! produces ranked [`ScheduleResult`]s, the shape handed back to clients.
//!
//! # References
//!
//! - Golomb & Baumert (1965), "Backtrack Programming"
//! - Haralick & Elliott (1980), "Increasing Tree Search Efficiency for
//!   Constraint Satisfaction Problems" (fail-first variable ordering)

mod config;
mod engine;
mod request;
mod result;
mod top_k;

pub use config::SchedulerConfig;
pub use engine::SchedulingEngine;
pub use request::{RuleRecord, ScheduleRequest};
pub use result::{round_score, ScheduleResult, ScheduledSection};
pub use top_k::ScoredCombination;
