//! Splitting raw hostnames into subdomain, registrable label and public suffix.

use crate::error::DomainParseError;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use url::{Host, Url};

const EMBEDDED_PUBLIC_SUFFIXES: &str = include_str!("../data/public_suffix_list.dat");

lazy_static! {
    static ref PUBLIC_SUFFIXES: SuffixRules = SuffixRules::parse(EMBEDDED_PUBLIC_SUFFIXES);

    static ref HOST_SHAPE: Regex = Regex::new(
        r"^(?:https?://)?[\w%.-]+(?:\.[\w.-]+)+[\w%\-._~:/?#\[\]@!$&'()*+,;=]+$"
    )
    .expect("host shape regex is valid");
}

/// Rules of a public suffix list, ICANN and private sections alike.
#[derive(Debug, Default)]
struct SuffixRules {
    exact: HashSet<&'static str>,
    /// `*.ck` is stored as `ck`.
    wildcard: HashSet<&'static str>,
    /// `!www.ck` is stored as `www.ck`.
    exception: HashSet<&'static str>,
}

impl SuffixRules {
    fn parse(list: &'static str) -> Self {
        let mut rules = Self::default();
        // A rule is the first whitespace-separated token of a line.
        for rule in list.lines().filter_map(|line| line.split_whitespace().next()) {
            if rule.starts_with("//") {
                continue;
            }
            if let Some(exception) = rule.strip_prefix('!') {
                rules.exception.insert(exception);
            } else if let Some(parent) = rule.strip_prefix("*.") {
                rules.wildcard.insert(parent);
            } else {
                rules.exact.insert(rule);
            }
        }
        rules
    }

    /// Index of the first label of the public suffix, if any rule matches.
    /// Scanning from the left finds the longest match; an exception rule is
    /// longer than the wildcard it overrides, so it is seen first.
    fn suffix_start(&self, labels: &[&str]) -> Option<usize> {
        (0..labels.len()).find_map(|i| {
            let candidate = labels[i..].join(".");
            if self.exception.contains(candidate.as_str()) {
                Some(i + 1)
            } else if i > 0 && self.wildcard.contains(candidate.as_str()) {
                Some(i - 1)
            } else if self.exact.contains(candidate.as_str()) {
                Some(i)
            } else {
                None
            }
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ParsedDomain {
    /// Labels in front of the registrable one, possibly empty.
    pub subdomain: String,
    /// The registrable label, never empty.
    pub domain: String,
    /// The public suffix, e.g. `com` or `co.uk`.
    pub tld: String,
}

impl ParsedDomain {
    pub fn hostname(&self) -> String {
        join_labels([self.subdomain.as_str(), self.domain.as_str(), self.tld.as_str()])
    }
}

/// Joins the non-empty parts with `.`.
pub fn join_labels<'a>(parts: impl IntoIterator<Item = &'a str>) -> String {
    parts
        .into_iter()
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(".")
}

/// Turns a raw input into its [`ParsedDomain`].
pub trait DomainParser {
    /// With `fix_protocol`, inputs lacking `http://`/`https://` are accepted
    /// as if `http://` were present; without it they are rejected.
    fn parse(&self, raw: &str, fix_protocol: bool) -> Result<ParsedDomain, DomainParseError>;
}

/// Default parser backed by the embedded public suffix list.
#[derive(Debug, Clone, Copy, Default)]
pub struct SuffixListParser;

impl SuffixListParser {
    fn host(raw: &str, fix_protocol: bool) -> Result<String, DomainParseError> {
        let has_scheme = raw.starts_with("http://") || raw.starts_with("https://");
        let with_scheme = match (has_scheme, fix_protocol) {
            (true, _) => raw.to_string(),
            (false, true) => format!("http://{raw}"),
            (false, false) => return Err(DomainParseError::Malformed(raw.to_string())),
        };

        let url = Url::parse(&with_scheme)
            .map_err(|_| DomainParseError::Malformed(raw.to_string()))?;

        let ascii = match url.host() {
            Some(Host::Domain(host)) => host.trim_end_matches('.').to_string(),
            _ => return Err(DomainParseError::Malformed(raw.to_string())),
        };

        // Strategies work on the label as written, not on its punycode.
        let (host, decoded) = idna::domain_to_unicode(&ascii);
        decoded.map_err(|_| DomainParseError::Malformed(raw.to_string()))?;
        Ok(host)
    }
}

impl DomainParser for SuffixListParser {
    fn parse(&self, raw: &str, fix_protocol: bool) -> Result<ParsedDomain, DomainParseError> {
        let raw = raw.trim();
        if raw.is_empty() {
            return Err(DomainParseError::Empty);
        }
        if !HOST_SHAPE.is_match(raw) {
            return Err(DomainParseError::Malformed(raw.to_string()));
        }

        let host = Self::host(raw, fix_protocol)?;
        let labels: Vec<&str> = host.split('.').collect();
        if labels.iter().any(|label| label.is_empty()) {
            return Err(DomainParseError::Malformed(raw.to_string()));
        }

        let suffix_start = PUBLIC_SUFFIXES
            .suffix_start(&labels)
            .ok_or_else(|| DomainParseError::UnknownSuffix(host.clone()))?;

        if suffix_start == 0 {
            return Err(DomainParseError::NotRegistrable(host));
        }

        Ok(ParsedDomain {
            subdomain: labels[..suffix_start - 1].join("."),
            domain: labels[suffix_start - 1].to_string(),
            tld: labels[suffix_start..].join("."),
        })
    }
}

/// Parses with [`SuffixListParser`], accepting inputs without a scheme.
pub fn parse_domain(raw: &str) -> Result<ParsedDomain, DomainParseError> {
    SuffixListParser.parse(raw, true)
}
