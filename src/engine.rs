use crate::config::FuzzConfig;
use crate::result::{CandidateSet, FuzzResult};
use tracing::{debug, info};

/// Runs the enabled label-level strategies against a plain word.
///
/// ```
/// use squatgen::{FuzzConfig, Fuzzer, Strategy};
///
/// let mut fuzzer = Fuzzer::new("ab", FuzzConfig::only(&[Strategy::Hyphenation]));
/// assert_eq!(fuzzer.generate().as_list(), ["a-b"]);
/// ```
#[derive(Debug, Clone)]
pub struct Fuzzer {
    word: String,
    config: FuzzConfig,
    result: Option<FuzzResult>,
}

impl Fuzzer {
    pub fn new(word: impl Into<String>, config: FuzzConfig) -> Self {
        Self {
            word: word.into(),
            config,
            result: None,
        }
    }

    pub fn word(&self) -> &str {
        &self.word
    }

    pub fn config(&self) -> &FuzzConfig {
        &self.config
    }

    /// Generates on the first call; later calls return the same result.
    pub fn generate(&mut self) -> &FuzzResult {
        if self.result.is_none() {
            self.result = Some(self.run());
        }
        self.result.get_or_insert_with(FuzzResult::default)
    }

    /// The generated result, if [`generate`](Self::generate) has run.
    pub fn result(&self) -> Option<&FuzzResult> {
        self.result.as_ref()
    }

    pub fn into_result(mut self) -> FuzzResult {
        self.generate();
        self.result.unwrap_or_default()
    }

    fn run(&self) -> FuzzResult {
        let mut candidates = CandidateSet::new();

        for strategy in self.config.strategies() {
            let fuzzed = strategy.mutate(&self.word);
            let produced = fuzzed.len();
            let added = candidates.extend(strategy, fuzzed);
            debug!(%strategy, produced, added, "strategy finished");
        }

        info!(word = %self.word, total = candidates.len(), "generated candidates");
        candidates.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::strategy::Strategy;
    use std::collections::HashSet;

    #[test]
    fn generate_is_deterministic() {
        let first = Fuzzer::new("paypal", FuzzConfig::default()).into_result();
        let second = Fuzzer::new("paypal", FuzzConfig::default()).into_result();
        assert_eq!(first, second);
    }

    #[test]
    fn generate_is_idempotent() {
        let mut fuzzer = Fuzzer::new("paypal", FuzzConfig::default());
        let first = fuzzer.generate().clone();
        let second = fuzzer.generate();
        assert_eq!(&first, second);
    }

    #[test]
    fn values_are_unique() {
        let result = Fuzzer::new("google", FuzzConfig::default()).into_result();
        let distinct: HashSet<_> = result.as_list().iter().collect();
        assert_eq!(distinct.len(), result.len());
        assert_eq!(result.as_set().len(), result.len());
    }

    #[test]
    fn earlier_strategy_keeps_provenance() {
        // "gogle" comes from omission and never reaches transposition
        let config = FuzzConfig::only(&[Strategy::Omission, Strategy::Transposition]);
        let result = Fuzzer::new("google", config).into_result();
        let gogle = result
            .candidates()
            .iter()
            .find(|c| c.value == "gogle")
            .unwrap();
        assert_eq!(gogle.strategy, Strategy::Omission);
    }

    #[test]
    fn strategies_run_in_fixed_order() {
        let config = FuzzConfig::only(&[Strategy::VowelSwap, Strategy::Addition]);
        let result = Fuzzer::new("ab", config).into_result();
        assert_eq!(result.candidates()[0].strategy, Strategy::Addition);
        assert_eq!(result.candidates().last().unwrap().strategy, Strategy::VowelSwap);
    }

    #[test]
    fn vowel_swap_keeps_the_word() {
        let config = FuzzConfig::only(&[Strategy::VowelSwap]);
        let result = Fuzzer::new("google", config).into_result();
        assert!(result.contains("google"));
    }

    #[test]
    fn empty_word_only_gets_additions() {
        let result = Fuzzer::new("", FuzzConfig::default()).into_result();
        assert_eq!(result.len(), 26);
        assert!(result.by_strategy(Strategy::Addition).all(|v| v.len() == 1));
    }

    #[test]
    fn disabled_config_generates_nothing() {
        let result = Fuzzer::new("google", FuzzConfig::none()).into_result();
        assert!(result.is_empty());
    }
}
