//! Exhaustive conflict-aware backtracking search.
//!
//! # Algorithm
//!
//! 1. Validate the input (see [`validate_input`]).
//! 2. Prune each subject's sections; a subject left with none fails the run.
//! 3. Order subjects by remaining candidate count, fewest first.
//! 4. Depth-first over subjects: try each candidate that does not conflict
//!    with the sections already chosen, recurse, then undo the choice.
//! 5. Score every complete combination and keep the best K.
//!
//! # Complexity
//! O(Π cᵢ · (n + r)) in the worst case, where cᵢ are the pruned candidate
//! counts, n the number of subjects and r the number of rules. Conflicts
//! cut whole subtrees; there is no bound-based pruning by score.
//!
//! # Determinism
//! Same input, same output: subject ordering is a stable sort and score
//! ties rank in discovery order.

use tracing::{debug, debug_span, info};

use super::top_k::{ScoredCombination, TopK};
use super::SchedulerConfig;
use crate::error::{SchedulingError, SchedulingResult};
use crate::models::{Section, SubjectSections, UserRule};
use crate::pruning::SectionPruner;
use crate::rules::RuleScorer;
use crate::validation::validate_input;

/// Generates the best conflict-free section combinations.
///
/// # Example
///
/// ```
/// use u_timetable::models::{ClockTime, RuleType, Section, SubjectSections, UserRule};
/// use u_timetable::scheduler::SchedulingEngine;
///
/// let at = |h| ClockTime::from_hm(h, 0).unwrap();
/// let subjects = vec![
///     SubjectSections::new("math", vec![
///         Section::new("m1", "math", at(8), at(10)).with_day_ids(&[1, 3]),
///         Section::new("m2", "math", at(15), at(17)).with_day_ids(&[1, 3]),
///     ]),
///     SubjectSections::new("physics", vec![
///         Section::new("p1", "physics", at(10), at(12)).with_day_ids(&[1, 3]),
///     ]),
/// ];
/// let rules = vec![UserRule::new(RuleType::NoGaps, 1)];
///
/// let results = SchedulingEngine::new().generate(&subjects, &rules).unwrap();
/// assert_eq!(results[0].section_ids(), ["p1", "m1"]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct SchedulingEngine {
    config: SchedulerConfig,
    scorer: RuleScorer,
    pruner: SectionPruner,
}

impl SchedulingEngine {
    /// Creates an engine with the default configuration (top 3).
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an engine with the given configuration.
    pub fn with_config(config: SchedulerConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Active configuration.
    pub fn config(&self) -> &SchedulerConfig {
        &self.config
    }

    /// Returns the best combinations, highest score first.
    ///
    /// `rules` are applied in the given order; callers normally pass them
    /// sorted by ascending priority.
    ///
    /// # Errors
    /// - [`SchedulingError::InvalidInput`] if validation fails
    /// - [`SchedulingError::EmptyCandidateSet`] if pruning empties a subject
    /// - [`SchedulingError::NoValidCombination`] if every combination conflicts
    pub fn generate<'a>(
        &self,
        subjects: &'a [SubjectSections],
        rules: &[UserRule],
    ) -> SchedulingResult<Vec<ScoredCombination<'a>>> {
        let _span =
            debug_span!("generate", subjects = subjects.len(), rules = rules.len()).entered();

        validate_input(subjects, rules).map_err(SchedulingError::InvalidInput)?;

        // Pruning phase
        let mut candidates: Vec<Vec<&'a Section>> = Vec::with_capacity(subjects.len());
        for subject in subjects {
            let pruned = self.pruner.prune(&subject.sections, rules);
            debug!(
                subject = %subject.subject_id,
                offered = subject.sections.len(),
                kept = pruned.len(),
                "pruned sections"
            );
            if pruned.is_empty() {
                return Err(SchedulingError::EmptyCandidateSet {
                    subject_id: subject.subject_id.clone(),
                });
            }
            candidates.push(pruned);
        }

        // Ordering phase: fewest options first
        candidates.sort_by_key(Vec::len);
        debug!(
            order = ?candidates
                .iter()
                .filter_map(|c| c.first().map(|s| s.subject_id.as_str()))
                .collect::<Vec<_>>(),
            "subject search order"
        );

        // Search phase
        let mut search = Search {
            candidates: &candidates,
            rules,
            scorer: &self.scorer,
            current: Vec::with_capacity(candidates.len()),
            top: TopK::new(self.config.effective_top_k()),
            leaves: 0,
        };
        search.backtrack(0);

        let leaves = search.leaves;
        if search.top.is_empty() {
            debug!("search space exhausted without a conflict-free combination");
            return Err(SchedulingError::NoValidCombination);
        }

        let results = search.top.into_sorted_vec();
        info!(
            leaves,
            returned = results.len(),
            best = results.first().map(|r| r.score),
            "schedule generation complete"
        );
        Ok(results)
    }
}

/// Per-invocation search state.
struct Search<'s, 'a> {
    candidates: &'s [Vec<&'a Section>],
    rules: &'s [UserRule],
    scorer: &'s RuleScorer,
    /// Sections chosen for subjects `0..current.len()`.
    current: Vec<&'a Section>,
    top: TopK<'a>,
    /// Complete combinations scored so far.
    leaves: usize,
}

impl<'a> Search<'_, 'a> {
    fn backtrack(&mut self, depth: usize) {
        let Some(options) = self.candidates.get(depth) else {
            self.score_leaf();
            return;
        };

        for &section in options {
            if has_conflict(section, &self.current) {
                continue;
            }
            self.current.push(section);
            self.backtrack(depth + 1);
            self.current.pop();
        }
    }

    fn score_leaf(&mut self) {
        self.leaves += 1;
        let score = self.scorer.calculate(&self.current, self.rules);
        let current = &self.current;
        self.top.offer(score, || current.clone());
    }
}

/// Whether `section` conflicts with any already chosen section.
fn has_conflict(section: &Section, chosen: &[&Section]) -> bool {
    chosen.iter().any(|other| section.conflicts_with(other))
}
