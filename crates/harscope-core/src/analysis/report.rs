use super::{
    Analyzer, BREAKDOWN_LIMIT, HarReport, LARGEST_LIMIT, RankKey, RankingAnalyzer, SLOWEST_LIMIT,
};
use crate::Result;
use crate::har::Har;

/// Builds the full report: count, slowest, largest and the timing
/// breakdown of the slowest requests.
pub struct ReportAnalyzer {
    slowest: RankingAnalyzer,
    largest: RankingAnalyzer,
    breakdown_limit: usize,
}

impl Default for ReportAnalyzer {
    fn default() -> Self {
        Self {
            slowest: RankingAnalyzer::new(RankKey::Duration, SLOWEST_LIMIT),
            largest: RankingAnalyzer::new(RankKey::ResponseSize, LARGEST_LIMIT),
            breakdown_limit: BREAKDOWN_LIMIT,
        }
    }
}

impl Analyzer for ReportAnalyzer {
    type Output = HarReport;

    fn analyze(&self, har: &Har) -> Result<Self::Output> {
        tracing::debug!("Building HAR report");

        let total_requests = har.entries().len();
        let slowest = self.slowest.analyze(har)?;
        let largest = self.largest.analyze(har)?;

        // The breakdown reuses the slowest ranking rather than sorting again
        let timing_breakdown = slowest
            .iter()
            .take(self.breakdown_limit)
            .cloned()
            .collect();

        tracing::info!(
            "Report complete: {} requests, slowest={:.2}ms",
            total_requests,
            slowest.first().map_or(0.0, |row| row.time)
        );

        Ok(HarReport {
            total_requests,
            slowest,
            largest,
            timing_breakdown,
        })
    }
}
