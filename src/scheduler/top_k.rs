//! Bounded best-K retention.

use crate::models::Section;

/// A complete, conflict-free combination and its score.
///
/// Sections borrow from the caller's input and appear in search order
/// (subjects with fewer candidates first).
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredCombination<'a> {
    /// One section per requested subject.
    pub sections: Vec<&'a Section>,
    /// Weighted rule score.
    pub score: f64,
}

impl ScoredCombination<'_> {
    /// Section chosen for a subject, if present.
    pub fn section_for(&self, subject_id: &str) -> Option<&Section> {
        self.sections
            .iter()
            .copied()
            .find(|s| s.subject_id == subject_id)
    }

    /// Chosen section ids, in search order.
    pub fn section_ids(&self) -> Vec<&str> {
        self.sections.iter().map(|s| s.id.as_str()).collect()
    }
}

/// Keeps the `capacity` highest-scoring combinations, best first.
///
/// Ties keep discovery order: a newcomer ranks after every retained entry
/// with an equal score.
#[derive(Debug, Clone)]
pub(crate) struct TopK<'a> {
    capacity: usize,
    entries: Vec<ScoredCombination<'a>>,
}

impl<'a> TopK<'a> {
    pub(crate) fn new(capacity: usize) -> Self {
        Self {
            capacity,
            entries: Vec::with_capacity(capacity + 1),
        }
    }

    /// Rank a score would take, or `None` if it would be evicted at once.
    fn slot_for(&self, score: f64) -> Option<usize> {
        let slot = self.entries.partition_point(|e| e.score >= score);
        (slot < self.capacity).then_some(slot)
    }

    /// Offers a candidate; `sections` is only materialized when it is kept.
    pub(crate) fn offer(
        &mut self,
        score: f64,
        sections: impl FnOnce() -> Vec<&'a Section>,
    ) -> bool {
        let Some(slot) = self.slot_for(score) else {
            return false;
        };
        self.entries.insert(
            slot,
            ScoredCombination {
                sections: sections(),
                score,
            },
        );
        self.entries.truncate(self.capacity);
        true
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub(crate) fn into_sorted_vec(self) -> Vec<ScoredCombination<'a>> {
        self.entries
    }
}
