//! Validation and routing through the three entry points

mod common;

use accuracy_confidence::{
    estimate_confidence_interval, estimate_confidence_level, estimate_sample_size, Error,
    Method, Task,
};
use common::*;

#[test]
fn test_zero_sample_size_rejected() {
    assert_eq!(
        estimate_confidence_interval(Some(0), 0.78, 0.9, "holdout_z_test", None),
        Err(Error::InvalidSampleSize { value: 0, minimum: 1 })
    );
    for method in POINT_METHODS {
        assert!(
            matches!(
                estimate_confidence_interval(Some(0), 0.78, 0.9, method, folds_for(method)),
                Err(Error::InvalidSampleSize { .. })
            ),
            "{method} accepted a zero sample size"
        );
    }
}

#[test]
fn test_t_test_needs_two_samples() {
    assert_eq!(
        estimate_confidence_interval(Some(1), 0.5, 0.9, "holdout_t_test", None),
        Err(Error::InvalidSampleSize { value: 1, minimum: 2 })
    );
    assert_eq!(
        estimate_confidence_level(Some(1), 0.1, "holdout_t_test", None, None),
        Err(Error::InvalidSampleSize { value: 1, minimum: 2 })
    );
    assert!(estimate_confidence_interval(Some(2), 0.5, 0.9, "holdout_t_test", None).is_ok());
}

#[test]
fn test_accuracy_out_of_range_rejected() {
    for method in POINT_METHODS {
        for accuracy in [1.0034, -0.0004, f64::NAN] {
            assert!(
                matches!(
                    estimate_confidence_interval(Some(300), accuracy, 0.9, method, folds_for(method)),
                    Err(Error::InvalidAccuracy(_))
                ),
                "{method} accepted accuracy {accuracy}"
            );
        }
    }

    let accuracies = [0.88, 1.08, 0.68, 0.79];
    assert!(matches!(
        estimate_confidence_interval(None, &accuracies, 0.9, "bootstrap", None),
        Err(Error::InvalidAccuracy(_))
    ));
    let empty: [f64; 0] = [];
    assert!(matches!(
        estimate_confidence_interval(None, &empty, 0.9, "bootstrap", None),
        Err(Error::InvalidAccuracy(_))
    ));
}

#[test]
fn test_confidence_level_bounds_rejected() {
    for level in [0.0, 1.0, -0.5, 1.5] {
        assert_eq!(
            estimate_confidence_interval(Some(300), 0.78, level, "holdout_wilson", None),
            Err(Error::InvalidConfidenceLevel { level })
        );
        assert_eq!(
            estimate_sample_size(0.05, level, "holdout_langford", None),
            Err(Error::InvalidConfidenceLevel { level })
        );
    }
    let accuracies = reference_resamples();
    assert!(matches!(
        estimate_confidence_interval(None, &accuracies, 1.0, "bootstrap", None),
        Err(Error::InvalidConfidenceLevel { .. })
    ));
}

#[test]
fn test_fold_count_validation() {
    assert_eq!(
        estimate_confidence_interval(Some(300), 0.78, 0.9, "cv", Some(1)),
        Err(Error::InvalidFoldCount { value: 1 })
    );
    assert_eq!(
        estimate_sample_size(0.05, 0.9, "cv", Some(0)),
        Err(Error::InvalidFoldCount { value: 0 })
    );
    assert_eq!(
        estimate_sample_size(0.05, 0.9, "cv", None),
        Err(Error::MissingParameter { parameter: "fold_count", method: "cv" })
    );
    assert_eq!(
        estimate_confidence_level(Some(300), 0.05, "cv", None, None),
        Err(Error::MissingParameter { parameter: "fold_count", method: "cv" })
    );
}

#[test]
fn test_radius_validation() {
    for radius in [-0.01, 0.51, f64::NAN] {
        assert!(matches!(
            estimate_sample_size(radius, 0.9, "holdout_z_test", None),
            Err(Error::InvalidRadius { .. })
        ));
        assert!(matches!(
            estimate_confidence_level(Some(300), radius, "holdout_z_test", None, None),
            Err(Error::InvalidRadius { .. })
        ));
    }
    assert!(matches!(
        estimate_sample_size(0.0, 0.9, "holdout_langford", None),
        Err(Error::InvalidRadius { .. })
    ));
    assert_eq!(
        estimate_confidence_level(Some(300), 0.0, "holdout_langford", None, None),
        Ok(0.0)
    );
}

#[test]
fn test_unknown_method_rejected() {
    let err = estimate_confidence_interval(Some(300), 0.75, 0.9, "random_method", None).unwrap_err();
    assert!(matches!(err, Error::UnknownMethod { .. }));
    let message = err.to_string();
    for method in Method::ALL {
        assert!(message.contains(method.name()), "{message}");
    }

    assert!(matches!(
        estimate_sample_size(0.05, 0.9, "random_method", None),
        Err(Error::UnknownMethod { .. })
    ));
    assert!(matches!(
        estimate_confidence_level(Some(100), 0.05, "random_method", None, None),
        Err(Error::UnknownMethod { .. })
    ));
}

#[test]
fn test_unknown_method_checked_before_arguments() {
    assert!(matches!(
        estimate_confidence_interval(Some(0), 7.0, 3.0, "random_method", None),
        Err(Error::UnknownMethod { .. })
    ));
}

#[test]
fn test_direction_support_matches_task_lists() {
    for method in Method::ALL {
        let name = method.name();
        let sample_size = estimate_sample_size(0.05, 0.9, name, folds_for(name));
        assert_eq!(
            sample_size.is_ok(),
            method.supports(Task::SampleSize),
            "{name}: {sample_size:?}"
        );

        let accuracies = reference_resamples();
        let level = estimate_confidence_level(Some(300), 0.05, name, folds_for(name), Some(&accuracies));
        assert_eq!(level.is_ok(), method.supports(Task::ConfidenceLevel), "{name}: {level:?}");
    }
}

#[test]
fn test_shape_mismatch_rejected() {
    let accuracies = reference_resamples();
    assert!(matches!(
        estimate_confidence_interval(Some(300), &accuracies, 0.9, "holdout_langford", None),
        Err(Error::InvalidAccuracy(_))
    ));
    assert!(matches!(
        estimate_confidence_interval(Some(300), 0.8, 0.9, "bootstrap", None),
        Err(Error::InvalidAccuracy(_))
    ));
}

#[test]
fn test_bootstrap_ignores_sample_size() {
    let accuracies = reference_resamples();
    let with = estimate_confidence_interval(Some(12), &accuracies, 0.9, "bootstrap", None).unwrap();
    let without = estimate_confidence_interval(None, &accuracies, 0.9, "bootstrap", None).unwrap();
    assert_eq!(with, without);

    let with = estimate_confidence_level(Some(12), 0.1, "bootstrap", None, Some(&accuracies)).unwrap();
    let without = estimate_confidence_level(None, 0.1, "bootstrap", None, Some(&accuracies)).unwrap();
    assert_eq!(with, without);
}
