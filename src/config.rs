use crate::error::ConfigError;
use crate::strategy::Strategy;
use serde::{Deserialize, Serialize};

/// Combosquatting words used when no dictionary is supplied.
pub const DEFAULT_APPEND_WORDS: &[&str] = &[
    "support", "secure", "login", "pay", "help", "service", "account", "portal", "center", "app",
    "online", "store", "shop", "mail", "cloud", "data", "mobile", "web", "digital", "tech",
    "pro", "plus", "premium", "official", "admin", "manage", "bank", "finance", "crypto",
];

/// TLD swap targets used when no list is supplied.
pub const DEFAULT_TLD_SWAP_LIST: &[&str] = &[
    "com", "net", "org", "info", "biz", "us", "co", "io", "me",
    "app", "dev", "tech", "online", "site", "store", "shop",
    "uk", "ca", "de", "fr", "ru", "cn", "jp", "au", "br",
    "tk", "ml", "ga", "cf",
];

/// Which label-level strategies run. Everything is on by default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FuzzConfig {
    pub addition: bool,
    pub bitsquatting: bool,
    pub homoglyph: bool,
    pub hyphenation: bool,
    pub insertion: bool,
    pub omission: bool,
    pub repetition: bool,
    pub replacement: bool,
    pub transposition: bool,
    pub vowel_swap: bool,
}

impl Default for FuzzConfig {
    fn default() -> Self {
        Self {
            addition: true,
            bitsquatting: true,
            homoglyph: true,
            hyphenation: true,
            insertion: true,
            omission: true,
            repetition: true,
            replacement: true,
            transposition: true,
            vowel_swap: true,
        }
    }
}

impl FuzzConfig {
    /// Every strategy off; flip on the ones you want.
    pub fn none() -> Self {
        Self {
            addition: false,
            bitsquatting: false,
            homoglyph: false,
            hyphenation: false,
            insertion: false,
            omission: false,
            repetition: false,
            replacement: false,
            transposition: false,
            vowel_swap: false,
        }
    }

    pub fn only(strategies: &[Strategy]) -> Self {
        let mut config = Self::none();
        for &strategy in strategies {
            config.set(strategy, true);
        }
        config
    }

    pub fn enabled(&self, strategy: Strategy) -> bool {
        match strategy {
            Strategy::Addition => self.addition,
            Strategy::Bitsquatting => self.bitsquatting,
            Strategy::Homoglyph => self.homoglyph,
            Strategy::Hyphenation => self.hyphenation,
            Strategy::Insertion => self.insertion,
            Strategy::Omission => self.omission,
            Strategy::Repetition => self.repetition,
            Strategy::Replacement => self.replacement,
            Strategy::Transposition => self.transposition,
            Strategy::VowelSwap => self.vowel_swap,
            Strategy::Subdomain | Strategy::AppendWord | Strategy::Tld => false,
        }
    }

    /// Structural strategies are ignored here; they live on
    /// [`DomainFuzzConfig`].
    pub fn set(&mut self, strategy: Strategy, on: bool) {
        let slot = match strategy {
            Strategy::Addition => &mut self.addition,
            Strategy::Bitsquatting => &mut self.bitsquatting,
            Strategy::Homoglyph => &mut self.homoglyph,
            Strategy::Hyphenation => &mut self.hyphenation,
            Strategy::Insertion => &mut self.insertion,
            Strategy::Omission => &mut self.omission,
            Strategy::Repetition => &mut self.repetition,
            Strategy::Replacement => &mut self.replacement,
            Strategy::Transposition => &mut self.transposition,
            Strategy::VowelSwap => &mut self.vowel_swap,
            Strategy::Subdomain | Strategy::AppendWord | Strategy::Tld => return,
        };
        *slot = on;
    }

    /// Enabled strategies in execution order.
    pub fn strategies(&self) -> impl Iterator<Item = Strategy> + '_ {
        Strategy::BASE.into_iter().filter(|s| self.enabled(*s))
    }
}

/// Which label-level strategies feed the permutable pool. Bitsquatting,
/// homoglyph and hyphenation never do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PermutableConfig {
    pub addition: bool,
    pub insertion: bool,
    pub omission: bool,
    pub repetition: bool,
    pub replacement: bool,
    pub transposition: bool,
    pub vowel_swap: bool,
}

impl Default for PermutableConfig {
    fn default() -> Self {
        Self {
            addition: true,
            insertion: true,
            omission: true,
            repetition: true,
            replacement: true,
            transposition: true,
            vowel_swap: true,
        }
    }
}

impl PermutableConfig {
    pub fn none() -> Self {
        Self {
            addition: false,
            insertion: false,
            omission: false,
            repetition: false,
            replacement: false,
            transposition: false,
            vowel_swap: false,
        }
    }

    pub fn is_permutable(&self, strategy: Strategy) -> bool {
        match strategy {
            Strategy::Addition => self.addition,
            Strategy::Insertion => self.insertion,
            Strategy::Omission => self.omission,
            Strategy::Repetition => self.repetition,
            Strategy::Replacement => self.replacement,
            Strategy::Transposition => self.transposition,
            Strategy::VowelSwap => self.vowel_swap,
            _ => false,
        }
    }
}

/// Domain-mode configuration: the label strategies plus the structural ones
/// and the lists they consume.
///
/// Only reachable through [`DomainFuzzConfig::builder`], `Default` or serde,
/// all of which enforce that `append_word`/`tld` are enabled exactly when
/// their lists are non-empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "DomainFuzzConfigBuilder")]
pub struct DomainFuzzConfig {
    base: FuzzConfig,
    subdomain: bool,
    append_word: bool,
    tld: bool,
    permutable: PermutableConfig,
    append_words: Vec<String>,
    tld_swap_list: Vec<String>,
    filter_invalid: bool,
}

impl Default for DomainFuzzConfig {
    fn default() -> Self {
        Self {
            base: FuzzConfig::default(),
            subdomain: true,
            append_word: false,
            tld: false,
            permutable: PermutableConfig::default(),
            append_words: Vec::new(),
            tld_swap_list: Vec::new(),
            filter_invalid: false,
        }
    }
}

impl DomainFuzzConfig {
    pub fn builder() -> DomainFuzzConfigBuilder {
        DomainFuzzConfigBuilder::default()
    }

    pub fn base(&self) -> &FuzzConfig {
        &self.base
    }

    pub fn subdomain(&self) -> bool {
        self.subdomain
    }

    pub fn append_word(&self) -> bool {
        self.append_word
    }

    pub fn tld(&self) -> bool {
        self.tld
    }

    pub fn permutable(&self) -> &PermutableConfig {
        &self.permutable
    }

    pub fn append_words(&self) -> &[String] {
        &self.append_words
    }

    pub fn tld_swap_list(&self) -> &[String] {
        &self.tld_swap_list
    }

    pub fn filter_invalid(&self) -> bool {
        self.filter_invalid
    }

    /// Whether anything consumes the permutable pool.
    pub fn uses_pool(&self) -> bool {
        self.append_word || self.tld
    }

    /// Whether `strategy`'s label outputs should be fed into the pool.
    pub fn feeds_pool(&self, strategy: Strategy) -> bool {
        self.uses_pool() && self.permutable.is_permutable(strategy)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DomainFuzzConfigBuilder {
    base: FuzzConfig,
    subdomain: bool,
    append_word: bool,
    tld: bool,
    permutable: PermutableConfig,
    append_words: Vec<String>,
    tld_swap_list: Vec<String>,
    filter_invalid: bool,
}

impl Default for DomainFuzzConfigBuilder {
    fn default() -> Self {
        let defaults = DomainFuzzConfig::default();
        Self {
            base: defaults.base,
            subdomain: defaults.subdomain,
            append_word: defaults.append_word,
            tld: defaults.tld,
            permutable: defaults.permutable,
            append_words: defaults.append_words,
            tld_swap_list: defaults.tld_swap_list,
            filter_invalid: defaults.filter_invalid,
        }
    }
}

fn normalize_list(items: Vec<String>) -> Vec<String> {
    items
        .iter()
        .map(|s| s.trim().trim_start_matches('.').to_lowercase())
        .filter(|s| !s.is_empty())
        .collect()
}

impl DomainFuzzConfigBuilder {
    pub fn base(mut self, base: FuzzConfig) -> Self {
        self.base = base;
        self
    }

    pub fn subdomain(mut self, on: bool) -> Self {
        self.subdomain = on;
        self
    }

    pub fn append_word(mut self, on: bool) -> Self {
        self.append_word = on;
        self
    }

    pub fn tld(mut self, on: bool) -> Self {
        self.tld = on;
        self
    }

    pub fn permutable(mut self, permutable: PermutableConfig) -> Self {
        self.permutable = permutable;
        self
    }

    pub fn append_words<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.append_words = words.into_iter().map(Into::into).collect();
        self
    }

    pub fn tld_swap_list<I, S>(mut self, tlds: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tld_swap_list = tlds.into_iter().map(Into::into).collect();
        self
    }

    pub fn filter_invalid(mut self, on: bool) -> Self {
        self.filter_invalid = on;
        self
    }

    /// Trims entries (and a leading `.` on TLDs), drops blanks, then checks
    /// every list against its toggle.
    pub fn build(self) -> Result<DomainFuzzConfig, ConfigError> {
        let append_words = normalize_list(self.append_words);
        let tld_swap_list = normalize_list(self.tld_swap_list);

        match (self.append_word, append_words.is_empty()) {
            (true, true) => return Err(ConfigError::AppendWordsRequired),
            (false, false) => return Err(ConfigError::AppendWordsUnused),
            _ => {}
        }
        match (self.tld, tld_swap_list.is_empty()) {
            (true, true) => return Err(ConfigError::TldSwapListRequired),
            (false, false) => return Err(ConfigError::TldSwapListUnused),
            _ => {}
        }

        Ok(DomainFuzzConfig {
            base: self.base,
            subdomain: self.subdomain,
            append_word: self.append_word,
            tld: self.tld,
            permutable: self.permutable,
            append_words,
            tld_swap_list,
            filter_invalid: self.filter_invalid,
        })
    }
}

impl TryFrom<DomainFuzzConfigBuilder> for DomainFuzzConfig {
    type Error = ConfigError;

    fn try_from(builder: DomainFuzzConfigBuilder) -> Result<Self, Self::Error> {
        builder.build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use claims::{assert_err_eq, assert_ok};

    #[test]
    fn default_is_consistent() {
        let built = assert_ok!(DomainFuzzConfig::builder().build());
        assert_eq!(built, DomainFuzzConfig::default());
        assert!(!built.uses_pool());
        assert!(built.subdomain());
    }

    #[test]
    fn append_word_without_words_is_rejected() {
        let result = DomainFuzzConfig::builder().append_word(true).build();
        assert_err_eq!(result, ConfigError::AppendWordsRequired);
    }

    #[test]
    fn words_without_append_word_are_rejected() {
        let result = DomainFuzzConfig::builder()
            .append_words(["home", "support"])
            .build();
        assert_err_eq!(result, ConfigError::AppendWordsUnused);
    }

    #[test]
    fn tld_list_must_match_toggle() {
        let result = DomainFuzzConfig::builder().tld(true).build();
        assert_err_eq!(result, ConfigError::TldSwapListRequired);

        let result = DomainFuzzConfig::builder().tld_swap_list(["net"]).build();
        assert_err_eq!(result, ConfigError::TldSwapListUnused);
    }

    #[test]
    fn blank_entries_do_not_count_as_a_list() {
        let result = DomainFuzzConfig::builder()
            .append_word(true)
            .append_words(["  ", ""])
            .build();
        assert_err_eq!(result, ConfigError::AppendWordsRequired);
    }

    #[test]
    fn tld_entries_are_normalized() {
        let config = assert_ok!(DomainFuzzConfig::builder()
            .tld(true)
            .tld_swap_list([".NET", " org "])
            .build());
        assert_eq!(config.tld_swap_list(), ["net", "org"]);
    }

    #[test]
    fn feeds_pool_requires_a_consumer() {
        let config = DomainFuzzConfig::default();
        assert!(!config.feeds_pool(Strategy::Addition));

        let config = assert_ok!(DomainFuzzConfig::builder()
            .tld(true)
            .tld_swap_list(["net"])
            .build());
        assert!(config.feeds_pool(Strategy::Addition));
        assert!(!config.feeds_pool(Strategy::Homoglyph));
    }

    #[test]
    fn deserialization_validates() {
        let json = r#"{"append_word": true}"#;
        assert!(serde_json::from_str::<DomainFuzzConfig>(json).is_err());

        let json = r#"{"append_word": true, "append_words": ["login"], "base": {"homoglyph": false}}"#;
        let config: DomainFuzzConfig = serde_json::from_str(json).unwrap();
        assert!(!config.base().homoglyph);
        assert!(config.base().addition);
        assert_eq!(config.append_words(), ["login"]);
    }

    #[test]
    fn only_enables_the_named_strategies() {
        let config = FuzzConfig::only(&[Strategy::Omission, Strategy::Tld]);
        let enabled: Vec<_> = config.strategies().collect();
        assert_eq!(enabled, vec![Strategy::Omission]);
    }
}
