//! Reporting sinks
//!
//! The step hands each finished report to a caller-provided sink; it never
//! interprets or persists reports itself.

use crate::models::{CurationReport, CurationStatus};

/// Destination for per-object curation reports
pub trait ReportSink: Send {
    fn submit(&mut self, report: &CurationReport);
}

/// Sink that logs each report through `tracing`
#[derive(Debug, Default)]
pub struct TracingReportSink;

impl ReportSink for TracingReportSink {
    fn submit(&mut self, report: &CurationReport) {
        match report.status {
            CurationStatus::Failure => tracing::error!(
                object = %report.object,
                status = report.status.as_str(),
                "{}",
                report.summary.trim_end()
            ),
            _ => tracing::info!(
                object = %report.object,
                status = report.status.as_str(),
                "{}",
                report.summary.trim_end()
            ),
        }
    }
}

/// Sink that buffers reports for later inspection or output
#[derive(Debug, Default)]
pub struct CollectingReportSink {
    pub reports: Vec<CurationReport>,
}

impl CollectingReportSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count reports with the given status
    pub fn count(&self, status: CurationStatus) -> usize {
        self.reports.iter().filter(|r| r.status == status).count()
    }
}

impl ReportSink for CollectingReportSink {
    fn submit(&mut self, report: &CurationReport) {
        self.reports.push(report.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tracing_sink_accepts_every_status() {
        let mut sink = TracingReportSink;
        sink.submit(&CurationReport::success("123456789/2", "done\n".to_string()));
        sink.submit(&CurationReport::failure("123456789/2", "broke\n".to_string()));
    }

    #[test]
    fn collecting_sink_counts_by_status() {
        let mut sink = CollectingReportSink::new();
        sink.submit(&CurationReport::skip("a", "skipped\n".to_string()));
        sink.submit(&CurationReport::success("b", "done\n".to_string()));
        sink.submit(&CurationReport::success("c", "done\n".to_string()));

        assert_eq!(sink.count(CurationStatus::Skip), 1);
        assert_eq!(sink.count(CurationStatus::Success), 2);
        assert_eq!(sink.count(CurationStatus::Failure), 0);
    }
}
