//! Estimation methods and the tasks they support
//!
//! A [`Method`] names one evaluation protocol and the estimator family behind
//! it. Not every method can answer every [`Task`]: the binomial intervals
//! have no closed-form inverse, so they only support interval estimation.
//! Capabilities are read from the table in [`crate::registry`].

use crate::registry;
use accuracy_core::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Direction of an estimation request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Task {
    /// Accuracy and sample size to an interval
    ConfidenceInterval,
    /// Interval radius and confidence level to a required sample size
    SampleSize,
    /// Sample size and interval radius to an achieved confidence level
    ConfidenceLevel,
}

impl Task {
    pub const ALL: [Task; 3] = [Task::ConfidenceInterval, Task::SampleSize, Task::ConfidenceLevel];

    /// Human-readable task name used in error messages
    pub fn as_str(&self) -> &'static str {
        match self {
            Task::ConfidenceInterval => "confidence interval",
            Task::SampleSize => "sample size",
            Task::ConfidenceLevel => "confidence level",
        }
    }

    /// Methods supporting this task, in menu order
    pub fn methods(&self) -> Vec<Method> {
        Method::ALL
            .into_iter()
            .filter(|method| method.supports(*self))
            .collect()
    }

    /// Resolve a method name for this task
    ///
    /// Fails with [`Error::UnknownMethod`] when the name is unknown or the
    /// method does not support the task. The error lists the valid names.
    pub fn resolve(&self, name: &str) -> Result<Method> {
        let methods = self.methods();
        methods
            .iter()
            .copied()
            .find(|method| method.name() == name)
            .ok_or_else(|| {
                let expected: Vec<&str> = methods.iter().map(Method::name).collect();
                Error::unknown_method(name, self.as_str(), &expected)
            })
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Evaluation protocol and estimator family
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Method {
    #[serde(rename = "holdout_wilson")]
    HoldoutWilson,
    #[serde(rename = "holdout_clopper_pearson")]
    HoldoutClopperPearson,
    #[serde(rename = "holdout_langford")]
    HoldoutLangford,
    #[serde(rename = "holdout_z_test")]
    HoldoutZTest,
    #[serde(rename = "holdout_t_test")]
    HoldoutTTest,
    #[serde(rename = "cv")]
    CrossValidation,
    #[serde(rename = "progressive")]
    Progressive,
    #[serde(rename = "bootstrap")]
    Bootstrap,
}

impl Method {
    pub const ALL: [Method; 8] = [
        Method::HoldoutWilson,
        Method::HoldoutClopperPearson,
        Method::HoldoutLangford,
        Method::HoldoutZTest,
        Method::HoldoutTTest,
        Method::CrossValidation,
        Method::Progressive,
        Method::Bootstrap,
    ];

    /// Discriminator accepted by the dispatch functions
    pub fn name(&self) -> &'static str {
        match self {
            Method::HoldoutWilson => "holdout_wilson",
            Method::HoldoutClopperPearson => "holdout_clopper_pearson",
            Method::HoldoutLangford => "holdout_langford",
            Method::HoldoutZTest => "holdout_z_test",
            Method::HoldoutTTest => "holdout_t_test",
            Method::CrossValidation => "cv",
            Method::Progressive => "progressive",
            Method::Bootstrap => "bootstrap",
        }
    }

    /// Label for menus and reports
    pub fn label(&self) -> &'static str {
        match self {
            Method::HoldoutWilson => "Holdout: Wilson score",
            Method::HoldoutClopperPearson => "Holdout: Clopper-Pearson",
            Method::HoldoutLangford => "Holdout: Langford",
            Method::HoldoutZTest => "Holdout: Z-test approximation",
            Method::HoldoutTTest => "Holdout: t-test approximation",
            Method::CrossValidation => "Cross-validation",
            Method::Progressive => "Progressive validation",
            Method::Bootstrap => "Bootstrap",
        }
    }

    /// Tasks this method can answer
    pub fn tasks(&self) -> Vec<Task> {
        Task::ALL
            .into_iter()
            .filter(|task| self.supports(*task))
            .collect()
    }

    pub fn supports(&self, task: Task) -> bool {
        registry::entry(*self).supports(task)
    }

    /// Whether the accuracy argument is a list of resampled accuracies
    pub fn uses_resamples(&self) -> bool {
        matches!(self, Method::Bootstrap)
    }

    /// Whether the method takes a fold count
    pub fn uses_folds(&self) -> bool {
        matches!(self, Method::CrossValidation)
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_round_trip() {
        for method in Method::ALL {
            assert!(method.supports(Task::ConfidenceInterval));
            assert_eq!(Task::ConfidenceInterval.resolve(method.name()), Ok(method));
            assert_eq!(method.to_string(), method.name());
        }
    }

    #[test]
    fn test_capabilities() {
        assert_eq!(Method::HoldoutWilson.tasks(), vec![Task::ConfidenceInterval]);
        assert_eq!(Method::HoldoutClopperPearson.tasks(), vec![Task::ConfidenceInterval]);
        assert_eq!(
            Method::HoldoutTTest.tasks(),
            vec![Task::ConfidenceInterval, Task::ConfidenceLevel]
        );
        assert_eq!(Method::HoldoutLangford.tasks(), Task::ALL.to_vec());
        assert_eq!(Method::Bootstrap.tasks(), Task::ALL.to_vec());
        assert_eq!(Task::SampleSize.methods().len(), 5);
        assert_eq!(Task::ConfidenceLevel.methods().len(), 6);
    }

    #[test]
    fn test_resolve_unknown() {
        let err = Task::ConfidenceInterval.resolve("random_method").unwrap_err();
        match err {
            Error::UnknownMethod { method, task, expected } => {
                assert_eq!(method, "random_method");
                assert_eq!(task, "confidence interval");
                assert!(expected.contains("'holdout_wilson'"));
                assert!(expected.contains("'bootstrap'"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_resolve_unsupported_task() {
        assert!(matches!(
            Task::SampleSize.resolve("holdout_wilson"),
            Err(Error::UnknownMethod { .. })
        ));
        assert!(matches!(
            Task::SampleSize.resolve("holdout_t_test"),
            Err(Error::UnknownMethod { .. })
        ));
        assert_eq!(Task::ConfidenceLevel.resolve("cv"), Ok(Method::CrossValidation));
    }

    #[test]
    fn test_serde_uses_discriminator() {
        let json = serde_json::to_string(&Method::CrossValidation).unwrap();
        assert_eq!(json, "\"cv\"");
        let method: Method = serde_json::from_str("\"holdout_z_test\"").unwrap();
        assert_eq!(method, Method::HoldoutZTest);
    }
}
