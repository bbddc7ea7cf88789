use super::types::{ReportMetrics, TaskTimings};
use crate::backend::types::ImportSummary;
use crate::reports::ReportKind;

/// Text rendering for the dashboard cards and import summary.
pub struct MetricsReporter;

impl MetricsReporter {
    /// One dashboard card: the per-report counts, averages, and completion.
    pub fn format_report_card(kind: ReportKind, metrics: &ReportMetrics) -> String {
        let mut out = String::new();
        out.push_str(&format!("📋 {}\n", kind.display_name()));
        out.push_str(&format!("   Total Tasks:          {}\n", metrics.total));
        out.push_str(&format!("   Open:                 {}\n", metrics.open));
        out.push_str(&format!("   In Progress:          {}\n", metrics.in_progress));
        out.push_str(&format!("   Resolved by Import:   {}\n", metrics.auto_resolved));
        out.push_str(&format!(
            "   Resolved by Assignee: {}\n",
            metrics.manually_resolved
        ));
        out.push_str(&format!(
            "   Avg Time to Assign:   {}\n",
            metrics.avg_time_to_assign
        ));
        out.push_str(&format!(
            "   Avg Time to Resolve:  {}\n",
            metrics.avg_time_to_resolve
        ));
        out.push_str(&format!(
            "   Completion:           {}%\n",
            metrics.completion_percent
        ));
        out
    }

    /// Card body for a report whose fetch failed. The failure is isolated to
    /// this card; the caller keeps rendering the others.
    pub fn format_unavailable_card(kind: ReportKind, error: &str) -> String {
        format!(
            "📋 {}\n   ⚠️  No data for {} ({})\n",
            kind.display_name(),
            kind.display_name(),
            error
        )
    }

    pub fn format_import_summary(summary: &ImportSummary) -> String {
        let mut out = String::new();
        if let Some(last_import) = summary.last_import {
            out.push_str(&format!(
                "Last import successful at {}\n",
                last_import.format("%Y-%m-%d %H:%M:%S UTC")
            ));
        }
        if !summary.results.is_empty() {
            out.push_str("Import Summary:\n");
            for result in &summary.results {
                let label = ReportKind::from_import_file(&result.file)
                    .map(|kind| kind.display_name().to_string())
                    .unwrap_or_else(|| result.file.clone());
                out.push_str(&format!(
                    "   {}: {} new, {} auto-resolved\n",
                    label, result.imported_rows, result.auto_resolved
                ));
            }
        }
        out
    }

    pub fn format_task_timings(timings: &TaskTimings) -> String {
        let fmt = |days: Option<f64>| match days {
            Some(d) => format!("{d:.1} days"),
            None => "—".to_string(),
        };
        format!(
            "⏱ Time Metrics\n   Time Open:             {}\n   Time Assigned:         {}\n   Total Time to Resolve: {}\n",
            fmt(timings.time_open),
            fmt(timings.time_assigned),
            fmt(timings.time_to_resolve)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::types::ImportFileResult;
    use crate::metrics::types::DurationAverage;

    #[test]
    fn card_shows_na_averages_verbatim() {
        let metrics = ReportMetrics {
            total: 0,
            open: 0,
            in_progress: 0,
            auto_resolved: 0,
            manually_resolved: 0,
            avg_time_to_assign: DurationAverage::NotAvailable,
            avg_time_to_resolve: DurationAverage::NotAvailable,
            completion_percent: 0,
        };
        let card = MetricsReporter::format_report_card(ReportKind::MultiTrade, &metrics);
        assert!(card.contains("Multi Trade"));
        assert!(card.contains("Avg Time to Assign:   N/A"));
        assert!(card.contains("Completion:           0%"));
    }

    #[test]
    fn import_summary_lines_use_friendly_report_names() {
        let summary = ImportSummary {
            results: vec![
                ImportFileResult {
                    file: "deal_sums_mismatch_2024-06-03.xlsx".to_string(),
                    imported_rows: 12,
                    auto_resolved: 3,
                },
                ImportFileResult {
                    file: "something_unexpected.xlsx".to_string(),
                    imported_rows: 1,
                    auto_resolved: 0,
                },
            ],
            last_import: None,
        };
        let text = MetricsReporter::format_import_summary(&summary);
        assert!(text.contains("Multi Trade: 12 new, 3 auto-resolved"));
        // Unknown files fall back to the raw file name.
        assert!(text.contains("something_unexpected.xlsx: 1 new, 0 auto-resolved"));
    }
}
