//! Static lookup table from [`Method`] to estimator implementations
//!
//! Each entry holds one function per supported task. Every function takes
//! the raw caller arguments, validates them by building the value types of
//! [`crate::types`], and only then runs the estimator.

use crate::{
    asymptotic::{NormalApproximation, StudentTApproximation},
    binomial::{ClopperPearson, WilsonScore},
    bootstrap::PercentileBootstrap,
    hoeffding::{CrossValidation, Langford, ProgressiveValidation},
    method::{Method, Task},
    sample::AccuracySample,
    traits::{ConfidenceLevelEstimator, IntervalEstimator, ResampleIntervalEstimator, SampleSizeEstimator},
    types::{
        Accuracy, ConfidenceInterval, ConfidenceLevel, FoldCount, IntervalRadius, SampleSize,
    },
};
use accuracy_core::{Error, Result};

/// Observed accuracy: a single value, or one value per resample
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AccuracyInput<'a> {
    Point(f64),
    Resamples(&'a [f64]),
}

impl From<f64> for AccuracyInput<'_> {
    fn from(accuracy: f64) -> Self {
        AccuracyInput::Point(accuracy)
    }
}

impl<'a> From<&'a [f64]> for AccuracyInput<'a> {
    fn from(accuracies: &'a [f64]) -> Self {
        AccuracyInput::Resamples(accuracies)
    }
}

impl<'a> From<&'a Vec<f64>> for AccuracyInput<'a> {
    fn from(accuracies: &'a Vec<f64>) -> Self {
        AccuracyInput::Resamples(accuracies)
    }
}

impl<'a, const N: usize> From<&'a [f64; N]> for AccuracyInput<'a> {
    fn from(accuracies: &'a [f64; N]) -> Self {
        AccuracyInput::Resamples(accuracies)
    }
}

/// Unvalidated arguments of an interval request
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntervalQuery<'a> {
    pub sample_size: Option<usize>,
    pub accuracy: AccuracyInput<'a>,
    pub confidence_level: f64,
    pub fold_count: Option<usize>,
}

/// Unvalidated arguments of a sample size request
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SampleSizeQuery {
    pub interval_radius: f64,
    pub confidence_level: f64,
    pub fold_count: Option<usize>,
}

/// Unvalidated arguments of a confidence level request
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConfidenceLevelQuery<'a> {
    pub sample_size: Option<usize>,
    pub interval_radius: f64,
    pub fold_count: Option<usize>,
    pub accuracies: Option<&'a [f64]>,
}

pub type IntervalFn = fn(&IntervalQuery<'_>) -> Result<ConfidenceInterval>;
pub type SampleSizeFn = fn(&SampleSizeQuery) -> Result<SampleSize>;
pub type ConfidenceLevelFn = fn(&ConfidenceLevelQuery<'_>) -> Result<f64>;

/// Implementations behind one method
#[derive(Debug, Clone, Copy)]
pub struct MethodEntry {
    pub method: Method,
    interval: IntervalFn,
    sample_size: Option<SampleSizeFn>,
    confidence_level: Option<ConfidenceLevelFn>,
}

impl MethodEntry {
    pub fn supports(&self, task: Task) -> bool {
        match task {
            Task::ConfidenceInterval => true,
            Task::SampleSize => self.sample_size.is_some(),
            Task::ConfidenceLevel => self.confidence_level.is_some(),
        }
    }

    pub fn confidence_interval(&self, query: &IntervalQuery<'_>) -> Result<ConfidenceInterval> {
        (self.interval)(query)
    }

    pub fn sample_size(&self, query: &SampleSizeQuery) -> Result<SampleSize> {
        let solve = self.sample_size.ok_or_else(|| self.unsupported(Task::SampleSize))?;
        solve(query)
    }

    pub fn confidence_level(&self, query: &ConfidenceLevelQuery<'_>) -> Result<f64> {
        let solve = self
            .confidence_level
            .ok_or_else(|| self.unsupported(Task::ConfidenceLevel))?;
        solve(query)
    }

    fn unsupported(&self, task: Task) -> Error {
        let expected: Vec<&str> = task.methods().iter().map(Method::name).collect();
        Error::unknown_method(self.method.name(), task.as_str(), &expected)
    }
}

static REGISTRY: [MethodEntry; 8] = [
    MethodEntry {
        method: Method::HoldoutWilson,
        interval: wilson_interval,
        sample_size: None,
        confidence_level: None,
    },
    MethodEntry {
        method: Method::HoldoutClopperPearson,
        interval: clopper_pearson_interval,
        sample_size: None,
        confidence_level: None,
    },
    MethodEntry {
        method: Method::HoldoutLangford,
        interval: langford_interval,
        sample_size: Some(langford_sample_size),
        confidence_level: Some(langford_confidence_level),
    },
    MethodEntry {
        method: Method::HoldoutZTest,
        interval: z_test_interval,
        sample_size: Some(z_test_sample_size),
        confidence_level: Some(z_test_confidence_level),
    },
    MethodEntry {
        method: Method::HoldoutTTest,
        interval: t_test_interval,
        sample_size: None,
        confidence_level: Some(t_test_confidence_level),
    },
    MethodEntry {
        method: Method::CrossValidation,
        interval: cv_interval,
        sample_size: Some(cv_sample_size),
        confidence_level: Some(cv_confidence_level),
    },
    MethodEntry {
        method: Method::Progressive,
        interval: progressive_interval,
        // the progressive radius is Langford's, so is its inverse
        sample_size: Some(langford_sample_size),
        confidence_level: Some(progressive_confidence_level),
    },
    MethodEntry {
        method: Method::Bootstrap,
        interval: bootstrap_interval,
        sample_size: Some(z_test_sample_size),
        confidence_level: Some(bootstrap_confidence_level),
    },
];

/// Registry entry of a method
pub fn entry(method: Method) -> &'static MethodEntry {
    // Table order follows `Method::ALL`
    &REGISTRY[method as usize]
}

/// All registry entries
pub fn entries() -> &'static [MethodEntry] {
    &REGISTRY
}

// Argument validation

fn required_sample_size(value: Option<usize>, method: Method, minimum: usize) -> Result<SampleSize> {
    let value = value.ok_or_else(|| Error::missing("sample_size", method.name()))?;
    SampleSize::at_least(value, minimum)
}

fn required_folds(value: Option<usize>, method: Method) -> Result<FoldCount> {
    let value = value.ok_or_else(|| Error::missing("fold_count", method.name()))?;
    FoldCount::new(value)
}

fn point_accuracy(input: AccuracyInput<'_>, method: Method) -> Result<Accuracy> {
    match input {
        AccuracyInput::Point(value) => Accuracy::new(value),
        AccuracyInput::Resamples(_) => Err(Error::InvalidAccuracy(format!(
            "method '{method}' takes a single accuracy, not a list"
        ))),
    }
}

fn resampled_accuracies(input: AccuracyInput<'_>, method: Method) -> Result<AccuracySample> {
    match input {
        AccuracyInput::Resamples(values) => AccuracySample::new(values),
        AccuracyInput::Point(value) => Err(Error::InvalidAccuracy(format!(
            "method '{method}' takes a list of resampled accuracies, not the single value {value}"
        ))),
    }
}

fn point_interval<E: IntervalEstimator>(
    estimator: &E,
    method: Method,
    query: &IntervalQuery<'_>,
) -> Result<ConfidenceInterval> {
    let sample_size =
        required_sample_size(query.sample_size, method, estimator.minimum_sample_size())?;
    let accuracy = point_accuracy(query.accuracy, method)?;
    let confidence_level = ConfidenceLevel::new(query.confidence_level)?;
    estimator.confidence_interval(sample_size, accuracy, confidence_level)
}

fn solve_sample_size<E: SampleSizeEstimator>(
    estimator: &E,
    query: &SampleSizeQuery,
) -> Result<SampleSize> {
    let radius = IntervalRadius::positive(query.interval_radius)?;
    let confidence_level = ConfidenceLevel::new(query.confidence_level)?;
    estimator.sample_size(radius, confidence_level)
}

fn solve_confidence_level<E: ConfidenceLevelEstimator>(
    estimator: &E,
    method: Method,
    minimum: usize,
    query: &ConfidenceLevelQuery<'_>,
) -> Result<f64> {
    let sample_size = required_sample_size(query.sample_size, method, minimum)?;
    let radius = IntervalRadius::new(query.interval_radius)?;
    estimator.confidence_level(sample_size, radius)
}

// Interval estimation

fn wilson_interval(query: &IntervalQuery<'_>) -> Result<ConfidenceInterval> {
    point_interval(&WilsonScore, Method::HoldoutWilson, query)
}

fn clopper_pearson_interval(query: &IntervalQuery<'_>) -> Result<ConfidenceInterval> {
    point_interval(&ClopperPearson, Method::HoldoutClopperPearson, query)
}

fn langford_interval(query: &IntervalQuery<'_>) -> Result<ConfidenceInterval> {
    point_interval(&Langford, Method::HoldoutLangford, query)
}

fn z_test_interval(query: &IntervalQuery<'_>) -> Result<ConfidenceInterval> {
    point_interval(&NormalApproximation, Method::HoldoutZTest, query)
}

fn t_test_interval(query: &IntervalQuery<'_>) -> Result<ConfidenceInterval> {
    point_interval(&StudentTApproximation, Method::HoldoutTTest, query)
}

fn cv_interval(query: &IntervalQuery<'_>) -> Result<ConfidenceInterval> {
    let method = Method::CrossValidation;
    let sample_size = required_sample_size(query.sample_size, method, 1)?;
    let accuracy = point_accuracy(query.accuracy, method)?;
    let confidence_level = ConfidenceLevel::new(query.confidence_level)?;
    let folds = required_folds(query.fold_count, method)?;
    CrossValidation::new(folds).confidence_interval(sample_size, accuracy, confidence_level)
}

fn progressive_interval(query: &IntervalQuery<'_>) -> Result<ConfidenceInterval> {
    point_interval(&ProgressiveValidation, Method::Progressive, query)
}

fn bootstrap_interval(query: &IntervalQuery<'_>) -> Result<ConfidenceInterval> {
    let accuracies = resampled_accuracies(query.accuracy, Method::Bootstrap)?;
    let confidence_level = ConfidenceLevel::new(query.confidence_level)?;
    PercentileBootstrap.confidence_interval(&accuracies, confidence_level)
}

// Sample size estimation

fn langford_sample_size(query: &SampleSizeQuery) -> Result<SampleSize> {
    solve_sample_size(&Langford, query)
}

fn z_test_sample_size(query: &SampleSizeQuery) -> Result<SampleSize> {
    solve_sample_size(&NormalApproximation, query)
}

fn cv_sample_size(query: &SampleSizeQuery) -> Result<SampleSize> {
    let radius = IntervalRadius::positive(query.interval_radius)?;
    let confidence_level = ConfidenceLevel::new(query.confidence_level)?;
    let folds = required_folds(query.fold_count, Method::CrossValidation)?;
    CrossValidation::new(folds).sample_size(radius, confidence_level)
}

// Confidence level estimation

fn langford_confidence_level(query: &ConfidenceLevelQuery<'_>) -> Result<f64> {
    solve_confidence_level(&Langford, Method::HoldoutLangford, 1, query)
}

fn z_test_confidence_level(query: &ConfidenceLevelQuery<'_>) -> Result<f64> {
    solve_confidence_level(&NormalApproximation, Method::HoldoutZTest, 1, query)
}

fn t_test_confidence_level(query: &ConfidenceLevelQuery<'_>) -> Result<f64> {
    solve_confidence_level(&StudentTApproximation, Method::HoldoutTTest, 2, query)
}

fn cv_confidence_level(query: &ConfidenceLevelQuery<'_>) -> Result<f64> {
    let method = Method::CrossValidation;
    let sample_size = required_sample_size(query.sample_size, method, 1)?;
    let radius = IntervalRadius::new(query.interval_radius)?;
    let folds = required_folds(query.fold_count, method)?;
    CrossValidation::new(folds).confidence_level(sample_size, radius)
}

fn progressive_confidence_level(query: &ConfidenceLevelQuery<'_>) -> Result<f64> {
    solve_confidence_level(&ProgressiveValidation, Method::Progressive, 1, query)
}

fn bootstrap_confidence_level(query: &ConfidenceLevelQuery<'_>) -> Result<f64> {
    let values = query
        .accuracies
        .ok_or_else(|| Error::missing("accuracies", Method::Bootstrap.name()))?;
    let accuracies = AccuracySample::new(values)?;
    let radius = IntervalRadius::new(query.interval_radius)?;
    Ok(PercentileBootstrap.confidence_level(&accuracies, radius))
}
