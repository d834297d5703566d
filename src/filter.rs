//! Structural validity post-pass for domain candidates.

use crate::result::{Candidate, FuzzResult};
use std::collections::HashSet;
use tracing::debug;
use url::Host;

/// IDNA (punycode) form of `value`, or `None` when it cannot be encoded as a
/// domain name.
pub fn to_ascii_hostname(value: &str) -> Option<String> {
    match Host::parse(value) {
        Ok(Host::Domain(domain)) => Some(domain),
        _ => None,
    }
}

fn is_valid_label(label: &str) -> bool {
    (1..=63).contains(&label.len())
        && !label.starts_with('-')
        && !label.ends_with('-')
        && label
            .bytes()
            .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'-')
}

/// Whether an ASCII hostname is syntactically registrable: 4 to 253
/// characters, at least two labels, letters/digits/hyphens only with no
/// hyphen at a label edge, and an alphabetic final label of 2 to 63.
pub fn is_valid_hostname(ascii: &str) -> bool {
    if !(4..=253).contains(&ascii.len()) {
        return false;
    }

    let trimmed = ascii.strip_suffix('.').unwrap_or(ascii);
    let labels: Vec<&str> = trimmed.split('.').collect();
    let Some((last, rest)) = labels.split_last() else {
        return false;
    };

    !rest.is_empty()
        && rest.iter().all(|label| is_valid_label(label))
        && (2..=63).contains(&last.len())
        && last.bytes().all(|b| b.is_ascii_lowercase())
}

/// Drops candidates that are not valid hostnames once IDNA-encoded, and
/// candidates whose encoded form was already seen. Order is preserved.
pub fn retain_valid(result: FuzzResult) -> FuzzResult {
    let before = result.len();
    let mut seen = HashSet::new();

    let kept: Vec<Candidate> = result
        .into_candidates()
        .into_iter()
        .filter(|candidate| match to_ascii_hostname(&candidate.value) {
            Some(ascii) => is_valid_hostname(&ascii) && seen.insert(ascii),
            None => false,
        })
        .collect();

    debug!(before, after = kept.len(), "filtered invalid candidates");
    FuzzResult::from_candidates(kept)
}
