//! Resampled accuracies for the bootstrap estimators

use accuracy_core::{
    utils::{median_sorted, percentile_rank_sorted, percentile_sorted, sorted},
    validation, Error, Result,
};
use std::{io, str::FromStr};
use tracing::trace;

/// Non-empty collection of bootstrap accuracies, kept in ascending order
///
/// Every element is checked to lie in [0, 1] on construction. Input that is
/// already sorted is taken as is.
#[derive(Debug, Clone, PartialEq)]
pub struct AccuracySample {
    values: Vec<f64>,
}

impl AccuracySample {
    /// Validate and sort a slice of accuracies
    pub fn new(accuracies: &[f64]) -> Result<Self> {
        validation::check_accuracies(accuracies)?;
        Ok(Self {
            values: sorted(accuracies),
        })
    }

    /// Read one accuracy per record from the first CSV column
    ///
    /// A header row is skipped when its first field is not a number.
    pub fn from_csv_reader<R: io::Read>(reader: R) -> Result<Self> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(reader);

        let mut values = Vec::new();
        for (row, record) in reader.records().enumerate() {
            let record = record.map_err(|e| {
                Error::InvalidAccuracy(format!("could not read accuracy record {row}: {e}"))
            })?;
            let Some(field) = record.get(0) else {
                continue;
            };
            if field.is_empty() {
                continue;
            }
            match field.parse::<f64>() {
                Ok(value) => values.push(value),
                Err(_) if row == 0 => trace!(header = field, "skipping accuracy header"),
                Err(_) => {
                    return Err(Error::InvalidAccuracy(format!(
                        "'{field}' on record {row} is not a number"
                    )))
                }
            }
        }
        Self::new(&values)
    }

    /// Number of resampled accuracies
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Always false; kept for API symmetry with slices
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Accuracies in ascending order
    pub fn as_slice(&self) -> &[f64] {
        &self.values
    }

    pub fn min(&self) -> f64 {
        self.values[0]
    }

    pub fn max(&self) -> f64 {
        self.values[self.values.len() - 1]
    }

    /// Median accuracy
    pub fn median(&self) -> f64 {
        median_sorted(&self.values)
    }

    /// Linearly interpolated percentile, `q` on the [0, 100] scale
    pub fn percentile(&self, q: f64) -> f64 {
        percentile_sorted(&self.values, q)
    }

    /// Percentile rank of `score`, on the [0, 100] scale
    pub fn percentile_rank(&self, score: f64) -> f64 {
        percentile_rank_sorted(&self.values, score)
    }
}

impl FromStr for AccuracySample {
    type Err = Error;

    /// Parse a comma-separated list such as `"0.70, 0.77, 0.80"`
    fn from_str(s: &str) -> Result<Self> {
        let values = s
            .split(',')
            .map(str::trim)
            .map(|item| {
                item.parse::<f64>().map_err(|_| {
                    Error::InvalidAccuracy(format!("'{item}' is not a number"))
                })
            })
            .collect::<Result<Vec<_>>>()?;
        Self::new(&values)
    }
}

impl TryFrom<Vec<f64>> for AccuracySample {
    type Error = Error;

    fn try_from(values: Vec<f64>) -> Result<Self> {
        Self::new(&values)
    }
}
