use super::lenient;
use serde::Deserialize;
use std::fmt;

/// URL shown for entries that carry no request URL
pub const MISSING_URL: &str = "N/A";

/// Top-level HAR object
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Har {
    #[serde(default, deserialize_with = "lenient::object")]
    pub log: Option<Log>,
}

impl Har {
    /// Entries in recording order; empty when the log is missing
    pub fn entries(&self) -> &[Entry] {
        self.log
            .as_ref()
            .map(|log| log.entries.as_slice())
            .unwrap_or_default()
    }
}

/// Main HAR log object
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Log {
    #[serde(default, deserialize_with = "lenient::records")]
    pub entries: Vec<Entry>,
}

/// Individual HTTP transaction entry
///
/// Every field is optional. Use the accessors to read values with their
/// defaults applied.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Entry {
    #[serde(default, deserialize_with = "lenient::scalar")]
    pub time: Option<f64>,
    #[serde(default, deserialize_with = "lenient::object")]
    pub request: Option<Request>,
    #[serde(default, deserialize_with = "lenient::object")]
    pub response: Option<Response>,
    #[serde(default, deserialize_with = "lenient::object")]
    pub timings: Option<Timings>,
}

/// HTTP request
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Request {
    #[serde(default, deserialize_with = "lenient::scalar")]
    pub url: Option<String>,
}

/// HTTP response
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Response {
    #[serde(default, deserialize_with = "lenient::scalar")]
    pub status: Option<i64>,
    #[serde(default, deserialize_with = "lenient::object")]
    pub content: Option<Content>,
}

/// Response content
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Content {
    #[serde(default, deserialize_with = "lenient::scalar")]
    pub size: Option<f64>,
}

/// Timing information
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Timings {
    #[serde(default, deserialize_with = "lenient::scalar")]
    pub connect: Option<f64>,
    #[serde(default, deserialize_with = "lenient::scalar")]
    pub wait: Option<f64>,
    #[serde(default, deserialize_with = "lenient::scalar")]
    pub receive: Option<f64>,
}

/// HTTP status as recorded, or `Missing` when the entry has none
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Code(i64),
    Missing,
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Status::Code(code) => fmt::Display::fmt(code, f),
            Status::Missing => f.pad("N/A"),
        }
    }
}

/// Phase durations in milliseconds with defaults applied
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PhaseTimings {
    pub wait: f64,
    pub receive: f64,
    pub connect: f64,
}

impl Entry {
    /// Total duration in milliseconds, 0 when absent
    pub fn time(&self) -> f64 {
        self.time.unwrap_or(0.0)
    }

    pub fn url(&self) -> &str {
        self.request
            .as_ref()
            .and_then(|request| request.url.as_deref())
            .unwrap_or(MISSING_URL)
    }

    pub fn status(&self) -> Status {
        self.response
            .as_ref()
            .and_then(|response| response.status)
            .map_or(Status::Missing, Status::Code)
    }

    /// Response body size in bytes, 0 when absent
    pub fn content_size(&self) -> f64 {
        self.response
            .as_ref()
            .and_then(|response| response.content.as_ref())
            .and_then(|content| content.size)
            .unwrap_or(0.0)
    }

    pub fn timings(&self) -> PhaseTimings {
        let Some(timings) = &self.timings else {
            return PhaseTimings::default();
        };

        PhaseTimings {
            wait: timings.wait.unwrap_or(0.0),
            receive: timings.receive.unwrap_or(0.0),
            connect: timings.connect.unwrap_or(0.0),
        }
    }
}
