//! Domain-aware generation: label mutations reassembled into hostnames, plus
//! the structural strategies that recombine them with subdomain and TLD.

use crate::config::DomainFuzzConfig;
use crate::domain::{join_labels, DomainParser, ParsedDomain, SuffixListParser};
use crate::error::Result;
use crate::filter;
use crate::pool::PermutablePool;
use crate::result::{CandidateSet, FuzzResult};
use crate::strategy::Strategy;
use tracing::{debug, info};

const APPEND_SEPARATORS: [&str; 3] = ["-", ".", ""];

/// Fuzzes a hostname. Parsing happens at construction, so an invalid input
/// never reaches generation.
///
/// ```
/// use squatgen::{DomainFuzzConfig, DomainFuzzer};
///
/// let mut fuzzer = DomainFuzzer::new("http://google.com", DomainFuzzConfig::default()).unwrap();
/// assert!(fuzzer.generate().contains("goog1e.com"));
/// ```
#[derive(Debug, Clone)]
pub struct DomainFuzzer {
    parsed: ParsedDomain,
    config: DomainFuzzConfig,
    result: Option<FuzzResult>,
}

impl DomainFuzzer {
    /// Parses `raw` with [`SuffixListParser`], accepting a missing scheme.
    pub fn new(raw: &str, config: DomainFuzzConfig) -> Result<Self> {
        Self::with_parser(raw, config, &SuffixListParser)
    }

    pub fn with_parser<P>(raw: &str, config: DomainFuzzConfig, parser: &P) -> Result<Self>
    where
        P: DomainParser + ?Sized,
    {
        let parsed = parser.parse(raw, true)?;
        Ok(Self::from_parsed(parsed, config))
    }

    pub fn from_parsed(parsed: ParsedDomain, config: DomainFuzzConfig) -> Self {
        Self {
            parsed,
            config,
            result: None,
        }
    }

    pub fn parsed(&self) -> &ParsedDomain {
        &self.parsed
    }

    pub fn config(&self) -> &DomainFuzzConfig {
        &self.config
    }

    /// Generates on the first call; later calls return the same result.
    pub fn generate(&mut self) -> &FuzzResult {
        if self.result.is_none() {
            self.result = Some(self.run());
        }
        self.result.get_or_insert_with(FuzzResult::default)
    }

    pub fn result(&self) -> Option<&FuzzResult> {
        self.result.as_ref()
    }

    pub fn into_result(mut self) -> FuzzResult {
        self.generate();
        self.result.unwrap_or_default()
    }

    fn run(&self) -> FuzzResult {
        let ParsedDomain {
            subdomain,
            domain: label,
            tld,
        } = &self.parsed;

        let mut candidates = CandidateSet::new();
        let mut pool = PermutablePool::seeded(label);

        for strategy in self.config.base().strategies() {
            let fuzzed = strategy.mutate(label);
            let produced = fuzzed.len();
            let added = candidates.extend(
                strategy,
                fuzzed
                    .iter()
                    .map(|f| join_labels([subdomain.as_str(), f.as_str(), tld.as_str()])),
            );
            debug!(%strategy, produced, added, "strategy finished");

            if self.config.feeds_pool(strategy) {
                pool.extend(fuzzed);
            }
        }

        if self.config.subdomain() {
            let added = candidates.extend(
                Strategy::Subdomain,
                subdomain_split(label)
                    .iter()
                    .map(|f| join_labels([f.as_str(), tld.as_str()])),
            );
            debug!(strategy = %Strategy::Subdomain, added, "strategy finished");
        }

        if self.config.append_word() {
            let joined = self.append_words(&pool, &mut candidates);
            if self.config.tld() {
                pool.extend(joined);
            }
        }

        if self.config.tld() {
            self.swap_tlds(&pool, &mut candidates);
        }

        let result = candidates.finish();
        let result = if self.config.filter_invalid() {
            filter::retain_valid(result)
        } else {
            result
        };

        info!(
            input = %self.parsed.hostname(),
            pool = pool.len(),
            total = result.len(),
            "generated candidates"
        );
        result
    }

    /// Emits the combosquats and returns every joined label, in order, so they
    /// can be fed back into the pool.
    fn append_words(&self, pool: &PermutablePool, candidates: &mut CandidateSet) -> Vec<String> {
        let ParsedDomain { subdomain, tld, .. } = &self.parsed;
        let mut all_joined = Vec::new();
        let before = candidates.len();

        for separator in APPEND_SEPARATORS {
            let joined = join_words(pool.entries(), self.config.append_words(), separator);

            for value in &joined {
                // A `.` separator already introduces its own subdomain split.
                if separator != "." {
                    candidates.push(
                        Strategy::AppendWord,
                        join_labels([subdomain.as_str(), value.as_str(), tld.as_str()]),
                    );
                }
                candidates.push(
                    Strategy::AppendWord,
                    join_labels([value.as_str(), tld.as_str()]),
                );
            }

            all_joined.extend(joined);
        }

        debug!(
            strategy = %Strategy::AppendWord,
            added = candidates.len() - before,
            "strategy finished"
        );
        all_joined
    }

    fn swap_tlds(&self, pool: &PermutablePool, candidates: &mut CandidateSet) {
        let ParsedDomain { subdomain, tld, .. } = &self.parsed;
        let before = candidates.len();

        let swaps: Vec<&str> = self
            .config
            .tld_swap_list()
            .iter()
            .map(String::as_str)
            .filter(|swap| swap != tld)
            .collect();

        for entry in pool.entries() {
            for swap in &swaps {
                let value = format!("{entry}.{swap}");
                candidates.push(
                    Strategy::Tld,
                    join_labels([subdomain.as_str(), value.as_str()]),
                );
                candidates.push(Strategy::Tld, value);
            }
        }

        debug!(strategy = %Strategy::Tld, added = candidates.len() - before, "strategy finished");
    }
}

/// Splits `label` with a `.` at every inner position that does not touch an
/// existing `-` or `.`.
pub fn subdomain_split(label: &str) -> Vec<String> {
    let chars: Vec<char> = label.chars().collect();
    let is_separator = |c: char| c == '-' || c == '.';

    (1..chars.len().saturating_sub(1))
        .filter(|&i| !is_separator(chars[i]) && !is_separator(chars[i - 1]))
        .map(|i| {
            let (head, tail) = chars.split_at(i);
            format!(
                "{}.{}",
                head.iter().collect::<String>(),
                tail.iter().collect::<String>()
            )
        })
        .collect()
}

/// Every `entry + separator + word` and `word + separator + entry`, first
/// occurrence kept.
pub fn join_words(entries: &[String], words: &[String], separator: &str) -> Vec<String> {
    let mut joined = Vec::with_capacity(entries.len() * words.len() * 2);
    for entry in entries {
        for word in words {
            joined.push(format!("{entry}{separator}{word}"));
            joined.push(format!("{word}{separator}{entry}"));
        }
    }
    crate::mutation::dedup(joined)
}
