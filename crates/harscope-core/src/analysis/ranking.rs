use super::{Analyzer, RequestRow};
use crate::Result;
use crate::har::{Entry, Har};
use std::cmp::Ordering;

/// Value an entry is ranked by
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RankKey {
    /// Total time in milliseconds
    Duration,
    /// Response body size in bytes
    ResponseSize,
}

impl RankKey {
    fn value(self, entry: &Entry) -> f64 {
        match self {
            RankKey::Duration => entry.time(),
            RankKey::ResponseSize => entry.content_size(),
        }
    }
}

/// Ranks every entry by a key, largest first, and keeps the top `top_n`.
///
/// The sort is stable: entries with equal keys stay in recording order.
pub struct RankingAnalyzer {
    key: RankKey,
    top_n: usize,
}

impl RankingAnalyzer {
    pub fn new(key: RankKey, top_n: usize) -> Self {
        Self { key, top_n }
    }

    pub fn rank<'a>(&self, entries: &'a [Entry]) -> Vec<&'a Entry> {
        let mut ranked: Vec<(f64, &Entry)> = entries
            .iter()
            .map(|entry| (self.key.value(entry), entry))
            .collect();

        // slice::sort_by is stable; JSON numbers are never NaN
        ranked.sort_by(|(a, _), (b, _)| b.partial_cmp(a).unwrap_or(Ordering::Equal));
        ranked.truncate(self.top_n);

        ranked.into_iter().map(|(_, entry)| entry).collect()
    }
}

impl Analyzer for RankingAnalyzer {
    type Output = Vec<RequestRow>;

    fn analyze(&self, har: &Har) -> Result<Self::Output> {
        tracing::debug!("Ranking {} entries by {:?}", har.entries().len(), self.key);

        Ok(self
            .rank(har.entries())
            .into_iter()
            .map(RequestRow::from)
            .collect())
    }
}
