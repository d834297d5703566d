use serde::{Deserialize, Serialize};
use std::fmt;

/// Provenance tag recorded next to every candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    Addition,
    Bitsquatting,
    Homoglyph,
    Hyphenation,
    Insertion,
    Omission,
    Repetition,
    Replacement,
    Transposition,
    VowelSwap,
    Subdomain,
    AppendWord,
    Tld,
}

impl Strategy {
    /// Label-level strategies in execution order.
    pub const BASE: [Strategy; 10] = [
        Strategy::Addition,
        Strategy::Bitsquatting,
        Strategy::Homoglyph,
        Strategy::Hyphenation,
        Strategy::Insertion,
        Strategy::Omission,
        Strategy::Repetition,
        Strategy::Replacement,
        Strategy::Transposition,
        Strategy::VowelSwap,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Strategy::Addition => "addition",
            Strategy::Bitsquatting => "bitsquatting",
            Strategy::Homoglyph => "homoglyph",
            Strategy::Hyphenation => "hyphenation",
            Strategy::Insertion => "insertion",
            Strategy::Omission => "omission",
            Strategy::Repetition => "repetition",
            Strategy::Replacement => "replacement",
            Strategy::Transposition => "transposition",
            Strategy::VowelSwap => "vowel_swap",
            Strategy::Subdomain => "subdomain",
            Strategy::AppendWord => "append_word",
            Strategy::Tld => "tld",
        }
    }

    /// Runs a label-level strategy. Structural strategies need domain context
    /// and yield nothing here.
    pub fn mutate(self, word: &str) -> Vec<String> {
        use crate::mutation::*;

        match self {
            Strategy::Addition => addition(word),
            Strategy::Bitsquatting => bitsquatting(word),
            Strategy::Homoglyph => homoglyph(word),
            Strategy::Hyphenation => hyphenation(word),
            Strategy::Insertion => insertion(word),
            Strategy::Omission => omission(word),
            Strategy::Repetition => repetition(word),
            Strategy::Replacement => replacement(word),
            Strategy::Transposition => transposition(word),
            Strategy::VowelSwap => vowel_swap(word),
            Strategy::Subdomain | Strategy::AppendWord | Strategy::Tld => Vec::new(),
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_as_snake_case() {
        let json = serde_json::to_string(&Strategy::VowelSwap).unwrap();
        assert_eq!(json, "\"vowel_swap\"");
        assert_eq!(Strategy::AppendWord.to_string(), "append_word");
    }

    #[test]
    fn structural_strategies_do_not_mutate_words() {
        assert!(Strategy::Subdomain.mutate("google").is_empty());
        assert!(Strategy::Tld.mutate("google").is_empty());
    }
}
