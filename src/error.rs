/// Raised while building a [`DomainFuzzConfig`](crate::DomainFuzzConfig) when a
/// structural strategy and the list it consumes disagree.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("append_word is enabled but no append words were supplied")]
    AppendWordsRequired,
    #[error("append words were supplied but append_word is disabled")]
    AppendWordsUnused,
    #[error("tld is enabled but the TLD swap list is empty")]
    TldSwapListRequired,
    #[error("a TLD swap list was supplied but tld is disabled")]
    TldSwapListUnused,
}

/// Raised when an input cannot be split into subdomain, domain and TLD.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomainParseError {
    #[error("empty input")]
    Empty,
    #[error("malformed host: {0:?}")]
    Malformed(String),
    #[error("no known public suffix in {0:?}")]
    UnknownSuffix(String),
    #[error("{0:?} has no registrable label in front of its suffix")]
    NotRegistrable(String),
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),
    #[error("invalid domain: {0}")]
    DomainParse(#[from] DomainParseError),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
