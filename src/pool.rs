use std::collections::HashSet;
use tracing::trace;

/// Label variants that the structural strategies combine with words and
/// TLDs. Lives for one generation pass only; seeded with the original label.
///
/// Repeated entries are kept once: they could only reproduce candidates the
/// result has already recorded.
#[derive(Debug, Clone)]
pub(crate) struct PermutablePool {
    entries: Vec<String>,
    seen: HashSet<String>,
}

impl PermutablePool {
    pub fn seeded(label: &str) -> Self {
        Self {
            entries: vec![label.to_string()],
            seen: HashSet::from([label.to_string()]),
        }
    }

    pub fn extend<I>(&mut self, values: I)
    where
        I: IntoIterator<Item = String>,
    {
        let before = self.entries.len();
        for value in values {
            if self.seen.insert(value.clone()) {
                self.entries.push(value);
            }
        }
        trace!(added = self.entries.len() - before, size = self.entries.len(), "pool grew");
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}
