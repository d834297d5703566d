use crate::strategy::Strategy;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::sync::OnceLock;

/// One generated variant and the strategy that produced it first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Candidate {
    pub strategy: Strategy,
    pub value: String,
}

/// Insertion-ordered accumulator keyed on `value`; later duplicates are
/// dropped.
#[derive(Debug, Default)]
pub(crate) struct CandidateSet {
    candidates: Vec<Candidate>,
    seen: HashSet<String>,
}

impl CandidateSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `false` when `value` was already recorded.
    pub fn push(&mut self, strategy: Strategy, value: String) -> bool {
        if self.seen.contains(&value) {
            return false;
        }
        self.seen.insert(value.clone());
        self.candidates.push(Candidate { strategy, value });
        true
    }

    /// Pushes every value, returning how many were new.
    pub fn extend<I>(&mut self, strategy: Strategy, values: I) -> usize
    where
        I: IntoIterator<Item = String>,
    {
        let mut added = 0;
        for value in values {
            if self.push(strategy, value) {
                added += 1;
            }
        }
        added
    }

    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    pub fn finish(self) -> FuzzResult {
        FuzzResult::from_candidates(self.candidates)
    }
}

/// Deduplicated output of a generation pass.
#[derive(Debug, Default)]
pub struct FuzzResult {
    candidates: Vec<Candidate>,
    values: Vec<String>,
    set: OnceLock<HashSet<String>>,
}

impl FuzzResult {
    /// Callers must hand in candidates that are already unique by value.
    pub(crate) fn from_candidates(candidates: Vec<Candidate>) -> Self {
        let values = candidates.iter().map(|c| c.value.clone()).collect();
        Self {
            candidates,
            values,
            set: OnceLock::new(),
        }
    }

    pub fn candidates(&self) -> &[Candidate] {
        &self.candidates
    }

    /// Distinct values in generation order.
    pub fn as_list(&self) -> &[String] {
        &self.values
    }

    /// Set view over the values, built on first use.
    pub fn as_set(&self) -> &HashSet<String> {
        self.set
            .get_or_init(|| self.values.iter().cloned().collect())
    }

    pub fn contains(&self, value: &str) -> bool {
        self.as_set().contains(value)
    }

    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    /// Values produced by `strategy`, in order.
    pub fn by_strategy(&self, strategy: Strategy) -> impl Iterator<Item = &str> {
        self.candidates
            .iter()
            .filter(move |c| c.strategy == strategy)
            .map(|c| c.value.as_str())
    }

    pub fn into_candidates(self) -> Vec<Candidate> {
        self.candidates
    }
}

impl Clone for FuzzResult {
    fn clone(&self) -> Self {
        Self::from_candidates(self.candidates.clone())
    }
}

impl PartialEq for FuzzResult {
    fn eq(&self, other: &Self) -> bool {
        self.candidates == other.candidates
    }
}

impl Eq for FuzzResult {}

impl Serialize for FuzzResult {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.candidates.serialize(serializer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_provenance_wins() {
        let mut set = CandidateSet::new();
        assert!(set.push(Strategy::Omission, "gogle".into()));
        assert!(!set.push(Strategy::Transposition, "gogle".into()));
        assert!(set.push(Strategy::Transposition, "ogogle".into()));

        let result = set.finish();
        assert_eq!(result.as_list(), ["gogle", "ogogle"]);
        assert_eq!(result.candidates()[0].strategy, Strategy::Omission);
    }

    #[test]
    fn extend_counts_new_values() {
        let mut set = CandidateSet::new();
        let added = set.extend(
            Strategy::Addition,
            ["a", "b", "a"].into_iter().map(String::from),
        );
        assert_eq!(added, 2);
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn set_view_matches_list() {
        let mut set = CandidateSet::new();
        set.extend(Strategy::Addition, ["x", "y"].into_iter().map(String::from));
        let result = set.finish();

        assert!(result.contains("x"));
        assert!(!result.contains("z"));
        assert_eq!(result.as_set().len(), result.as_list().len());
    }

    #[test]
    fn serializes_candidates_in_order() {
        let mut set = CandidateSet::new();
        set.push(Strategy::VowelSwap, "gaogle".into());
        let json = serde_json::to_string(&set.finish()).unwrap();
        assert_eq!(json, r#"[{"strategy":"vowel_swap","value":"gaogle"}]"#);
    }
}
