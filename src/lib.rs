//! Rule-driven course timetable generation for the U-Engine ecosystem.
//!
//! Given the candidate sections of each requested subject and a user's
//! prioritized preference rules, finds the best conflict-free choice of
//! one section per subject.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `Section`, `Weekday`, `ClockTime`,
//!   `TimeWindow`, `UserRule`, `RuleParameter`
//! - **`rules`**: The 11 rule strategies, the weighted `RuleScorer`, and
//!   the rule catalog
//! - **`pruning`**: Per-section hard exclusions applied before search
//! - **`scheduler`**: Backtracking `SchedulingEngine`, top-K ranking,
//!   request façade
//! - **`validation`**: Input integrity checks (duplicate IDs, time ranges,
//!   priorities)
//!
//! # Architecture
//!
//! Pure, synchronous computation: no I/O, no shared state between calls.
//! Persistence, authentication and transport belong to the caller, which
//! supplies sections and rules and maps `SchedulingError` to its own
//! client-error responses.
//!
//! # References
//!
//! - Schaerf (1999), "A Survey of Automated Timetabling"
//! - Russell & Norvig (2020), "Artificial Intelligence: A Modern Approach",
//!   Ch. 6 (Constraint Satisfaction Problems)

pub mod error;
pub mod models;
pub mod pruning;
pub mod rules;
pub mod scheduler;
pub mod validation;

pub use error::{SchedulingError, SchedulingResult};
