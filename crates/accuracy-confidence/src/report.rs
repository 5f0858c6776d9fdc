//! Intervals at several confidence levels for one measurement

use crate::{
    api::estimate_confidence_interval,
    chart::IntervalChart,
    config::ReportConfig,
    method::{Method, Task},
    registry::AccuracyInput,
    types::ConfidenceInterval,
};
use accuracy_core::Result;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// One confidence level and its interval
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ReportRow {
    pub confidence_level: f64,
    pub interval: ConfidenceInterval,
}

impl ReportRow {
    /// Text line such as `90.0% CI: 0.75 - 0.85`
    pub fn line(&self, precision: usize) -> String {
        format!(
            "{:.1}% CI: {:.prec$} - {:.prec$}",
            self.confidence_level * 100.0,
            self.interval.lower,
            self.interval.upper,
            prec = precision
        )
    }
}

/// Intervals of one method at the requested level followed by the
/// additional levels of a [`ReportConfig`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IntervalReport {
    pub method: Method,
    pub rows: Vec<ReportRow>,
}

impl IntervalReport {
    /// Row of the requested confidence level
    pub fn requested(&self) -> Option<&ReportRow> {
        self.rows.first()
    }

    /// One text line per row
    pub fn lines(&self, precision: usize) -> Vec<String> {
        self.rows.iter().map(|row| row.line(precision)).collect()
    }

    /// Chart of the rows using the palette and precision of `config`
    pub fn chart(&self, config: &ReportConfig) -> IntervalChart {
        IntervalChart::from_report(self, config.palette(), config.precision())
    }
}

/// Evaluate one interval method at several confidence levels
///
/// The first row always belongs to `confidence_level`. Arguments are the
/// same as for [`estimate_confidence_interval`]; the first failing level
/// aborts the report.
#[instrument(skip(accuracy, config), fields(levels = config.additional_levels().len() + 1))]
pub fn estimate_interval_report<'a>(
    sample_size: Option<usize>,
    accuracy: impl Into<AccuracyInput<'a>>,
    confidence_level: f64,
    method: &str,
    fold_count: Option<usize>,
    config: &ReportConfig,
) -> Result<IntervalReport> {
    let resolved = Task::ConfidenceInterval.resolve(method)?;
    let accuracy = accuracy.into();

    let levels = std::iter::once(confidence_level)
        .chain(config.additional_levels().iter().map(|level| level.value()));
    let rows = levels
        .map(|level| -> Result<ReportRow> {
            let interval =
                estimate_confidence_interval(sample_size, accuracy, level, method, fold_count)?;
            Ok(ReportRow {
                confidence_level: level,
                interval,
            })
        })
        .collect::<Result<Vec<_>>>()?;
    debug!(method = %resolved, rows = rows.len(), "interval report");

    Ok(IntervalReport {
        method: resolved,
        rows,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use accuracy_core::Error;

    #[test]
    fn test_report_rows_follow_levels() {
        let report = estimate_interval_report(
            Some(555),
            0.80,
            0.85,
            "holdout_langford",
            None,
            &ReportConfig::default(),
        )
        .unwrap();

        let levels: Vec<f64> = report.rows.iter().map(|row| row.confidence_level).collect();
        assert_eq!(levels, vec![0.85, 0.90, 0.95, 0.98, 0.99]);
        assert_eq!(report.method, Method::HoldoutLangford);
        assert_eq!(report.requested().unwrap().confidence_level, 0.85);

        // widths grow with the level
        for pair in report.rows.windows(2) {
            assert!(pair[1].interval.width() > pair[0].interval.width());
        }
    }

    #[test]
    fn test_report_lines() {
        let config = ReportConfig::default().with_additional_levels(&[]).unwrap();
        let report =
            estimate_interval_report(Some(555), 0.80, 0.90, "holdout_langford", None, &config)
                .unwrap();
        assert_eq!(report.lines(2), vec!["90.0% CI: 0.75 - 0.85".to_string()]);
        assert_eq!(report.lines(4), vec!["90.0% CI: 0.7480 - 0.8520".to_string()]);
    }

    #[test]
    fn test_bootstrap_report() {
        let accuracies = vec![0.70, 0.77, 0.80, 0.87, 0.90];
        let report = estimate_interval_report(
            None,
            &accuracies,
            0.90,
            "bootstrap",
            None,
            &ReportConfig::default(),
        )
        .unwrap();
        assert_eq!(report.rows.len(), 5);
    }

    #[test]
    fn test_report_fails_on_first_error() {
        assert!(matches!(
            estimate_interval_report(Some(0), 0.8, 0.9, "holdout_z_test", None, &ReportConfig::default()),
            Err(Error::InvalidSampleSize { .. })
        ));
        assert!(matches!(
            estimate_interval_report(Some(10), 0.8, 0.9, "random_method", None, &ReportConfig::default()),
            Err(Error::UnknownMethod { .. })
        ));
    }
}
