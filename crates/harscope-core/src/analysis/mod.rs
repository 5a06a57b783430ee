mod ranking;
mod report;

pub use ranking::{RankKey, RankingAnalyzer};
pub use report::ReportAnalyzer;

use crate::har::{Entry, Har, PhaseTimings, Status};

/// Rows kept in the slowest-requests ranking
pub const SLOWEST_LIMIT: usize = 15;
/// Rows kept in the largest-requests ranking
pub const LARGEST_LIMIT: usize = 15;
/// Rows of the slowest ranking repeated in the timing breakdown
pub const BREAKDOWN_LIMIT: usize = 10;

/// Ranked views over one capture
#[derive(Debug, Clone, PartialEq)]
pub struct HarReport {
    pub total_requests: usize,
    pub slowest: Vec<RequestRow>,
    pub largest: Vec<RequestRow>,
    /// Leading rows of `slowest`, in the same order
    pub timing_breakdown: Vec<RequestRow>,
}

/// One entry with every default applied
#[derive(Debug, Clone, PartialEq)]
pub struct RequestRow {
    pub url: String,
    pub time: f64,
    pub status: Status,
    /// Response body size in bytes
    pub size: f64,
    pub timings: PhaseTimings,
}

impl RequestRow {
    pub fn size_kb(&self) -> f64 {
        self.size / 1024.0
    }
}

impl From<&Entry> for RequestRow {
    fn from(entry: &Entry) -> Self {
        Self {
            url: entry.url().to_string(),
            time: entry.time(),
            status: entry.status(),
            size: entry.content_size(),
            timings: entry.timings(),
        }
    }
}

pub trait Analyzer {
    type Output;

    fn analyze(&self, har: &Har) -> crate::Result<Self::Output>;
}
