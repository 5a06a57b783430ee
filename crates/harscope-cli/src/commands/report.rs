use anyhow::{Context, Result};
use harscope_core::analysis::{Analyzer, HarReport, RequestRow, ReportAnalyzer};
use harscope_core::har::HarReader;
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// URLs are cut to this many characters in every table
pub const URL_DISPLAY_CHARS: usize = 100;

const SEPARATOR_WIDTH: usize = 80;

/// Load a HAR file and build its report
pub fn build_report(file: &Path) -> Result<HarReport> {
    tracing::debug!("Reading HAR file: {}", file.display());

    let har = HarReader::from_file(file).context("Error reading file")?;
    let report = ReportAnalyzer::default().analyze(&har)?;

    Ok(report)
}

pub fn execute(file: &Path) -> Result<()> {
    tracing::info!("Reporting on HAR file: {}", file.display());

    let report = build_report(file)?;

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    render(&report, &mut out)?;
    out.flush()?;

    Ok(())
}

/// Write the text report: request count, then the slowest, largest and
/// timing breakdown tables.
pub fn render<W: Write>(report: &HarReport, out: &mut W) -> io::Result<()> {
    writeln!(out, "Total Requests: {}", report.total_requests)?;

    section(
        out,
        "TOP 15 SLOWEST REQUESTS",
        &format!("{:<10} | {:<6} | {:<10} | URL", "Time (ms)", "Status", "Size (KB)"),
    )?;
    for row in &report.slowest {
        writeln!(
            out,
            "{:<10.2} | {:<6} | {:<10.2} | {}",
            row.time,
            row.status,
            row.size_kb(),
            display_url(row)
        )?;
    }

    section(
        out,
        "TOP 15 LARGEST REQUESTS",
        &format!("{:<10} | {:<10} | URL", "Size (KB)", "Time (ms)"),
    )?;
    for row in &report.largest {
        writeln!(
            out,
            "{:<10.2} | {:<10.2} | {}",
            row.size_kb(),
            row.time,
            display_url(row)
        )?;
    }

    section(
        out,
        "TIMING BREAKDOWN (Slowest)",
        &format!("{:<8} | {:<8} | {:<8} | URL", "Wait", "Receive", "Connect"),
    )?;
    for row in &report.timing_breakdown {
        writeln!(
            out,
            "{:<8.1} | {:<8.1} | {:<8.1} | {}",
            row.timings.wait,
            row.timings.receive,
            row.timings.connect,
            display_url(row)
        )?;
    }

    Ok(())
}

fn section<W: Write>(out: &mut W, title: &str, columns: &str) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "--- {} ---", title)?;
    writeln!(out, "{}", columns)?;
    writeln!(out, "{}", "-".repeat(SEPARATOR_WIDTH))
}

/// First `URL_DISPLAY_CHARS` characters of the row's URL
fn display_url(row: &RequestRow) -> &str {
    truncate_chars(&row.url, URL_DISPLAY_CHARS)
}

fn truncate_chars(s: &str, max: usize) -> &str {
    match s.char_indices().nth(max) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}
