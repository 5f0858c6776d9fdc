//! Plan and report the confidence of a measured accuracy
//!
//! Run with `RUST_LOG=accuracy_confidence=debug` to see the dispatch events.

use accuracy_confidence::{
    estimate_confidence_level, estimate_interval_report, estimate_sample_size, AccuracySample,
    Method, ReportConfig, Task,
};
use anyhow::Result;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let config = ReportConfig::default();

    println!("Holdout (n = 555, accuracy = 0.80)");
    for method in ["holdout_wilson", "holdout_clopper_pearson", "holdout_langford"] {
        let report = estimate_interval_report(Some(555), 0.80, 0.85, method, None, &config)?;
        println!("  {}", report.method.label());
        for line in report.lines(config.precision()) {
            println!("    {line}");
        }
    }

    let resamples: AccuracySample = "0.70, 0.77, 0.80, 0.87, 0.90, 0.81, 0.79, 0.83".parse()?;
    let report = estimate_interval_report(None, resamples.as_slice(), 0.90, "bootstrap", None, &config)?;
    println!("\nBootstrap over {} resamples", resamples.len());
    for line in report.lines(config.precision()) {
        println!("  {line}");
    }
    println!("{}", report.chart(&config).to_json()?);

    println!("\nSample size for a ±0.05 interval at 95%");
    for method in Task::SampleSize.methods() {
        let folds = method.uses_folds().then_some(10);
        let n = estimate_sample_size(0.05, 0.95, method.name(), folds)?;
        println!("  {:<28} {n}", method.label());
    }

    println!("\nConfidence of ±0.03 on 1000 examples");
    for method in Task::ConfidenceLevel.methods() {
        if method == Method::Bootstrap {
            continue;
        }
        let folds = method.uses_folds().then_some(10);
        let level = estimate_confidence_level(Some(1000), 0.03, method.name(), folds, None)?;
        println!("  {:<28} {:.1}%", method.label(), level * 100.0);
    }

    Ok(())
}
