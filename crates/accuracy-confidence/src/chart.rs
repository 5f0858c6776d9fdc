//! Chart-ready view of an interval report
//!
//! Each confidence level becomes one series: a horizontal segment from the
//! lower to the upper bound drawn at height `level`. The structure carries
//! no rendering backend; it serializes to JSON for whichever plotting
//! frontend consumes it.

use crate::report::IntervalReport;
use accuracy_core::{Error, Result};
use serde::{Deserialize, Serialize};

/// Colours assigned to the series in order, cycling when exhausted
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Palette(Vec<String>);

impl Palette {
    pub fn new<S: Into<String>>(colors: impl IntoIterator<Item = S>) -> Self {
        Self(colors.into_iter().map(Into::into).collect())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Colour of the series at `index`
    pub fn color(&self, index: usize) -> Option<&str> {
        if self.0.is_empty() {
            return None;
        }
        Some(&self.0[index % self.0.len()])
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::new(["#cc6677", "#f6cf71", "#0f8554", "#1d6996", "#ff9900"])
    }
}

/// Margin kept below the first confidence level on the y axis
const Y_AXIS_MARGIN: f64 = 0.05;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartPoint {
    pub x: f64,
    pub y: f64,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSeries {
    pub name: String,
    pub color: Option<String>,
    pub points: Vec<ChartPoint>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartAxis {
    pub title: String,
    pub range: Option<[f64; 2]>,
}

/// One error bar per confidence level
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IntervalChart {
    pub series: Vec<ChartSeries>,
    pub x_axis: ChartAxis,
    pub y_axis: ChartAxis,
}

impl IntervalChart {
    /// Build the chart of `report`
    ///
    /// Series take colours from `palette` in row order; point labels are
    /// rounded to `precision` decimals. The y axis spans from just below the
    /// first level up to 1.
    pub fn from_report(report: &IntervalReport, palette: &Palette, precision: usize) -> Self {
        let series = report
            .rows
            .iter()
            .enumerate()
            .map(|(index, row)| {
                let level = row.confidence_level;
                let points = row
                    .interval
                    .as_pair()
                    .into_iter()
                    .map(|x| ChartPoint {
                        x,
                        y: level,
                        label: format!("{x:.precision$}"),
                    })
                    .collect();
                ChartSeries {
                    name: level.to_string(),
                    color: palette.color(index).map(str::to_owned),
                    points,
                }
            })
            .collect();

        let y_range = report
            .requested()
            .map(|row| [(row.confidence_level - Y_AXIS_MARGIN).max(0.0), 1.0]);

        Self {
            series,
            x_axis: ChartAxis {
                title: "Accuracy".to_string(),
                range: None,
            },
            y_axis: ChartAxis {
                title: "Confidence level".to_string(),
                range: y_range,
            },
        }
    }

    /// Render as a JSON document
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| Error::Computation(format!("Failed to render chart: {e}")))
    }
}
