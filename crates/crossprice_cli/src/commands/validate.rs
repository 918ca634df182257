//! Validate command implementation.
//!
//! Runs the known-value regression checks and the cross-model comparison
//! on the reference contract, then reports every outcome.

use anyhow::{bail, Context};
use tracing::info;

use crossprice_core::types::PricingParameters;
use crossprice_validation::{
    compare_models, known_value_checks, CheckOutcome, Fidelity, ValidationReport,
};

/// Run the validate command.
pub fn run(n_steps: usize, n_simulations: usize, format: &str) -> anyhow::Result<()> {
    let fidelity = Fidelity {
        n_steps,
        n_simulations,
        ..Fidelity::default()
    };

    info!(?fidelity, "running validation suite");

    let mut report = ValidationReport::new();
    for outcome in known_value_checks() {
        report.record(outcome);
    }

    let params = PricingParameters::new(100.0, 100.0, 1.0, 0.05, 0.2)
        .context("reference contract parameters")?;
    let comparison = compare_models(params, fidelity)?;
    for row in &comparison.rows {
        report.record(CheckOutcome::new(
            format!("cross_model_{}", row.model),
            row.call_pct_error.abs() <= 1.0 && row.put_pct_error.abs() <= 1.0,
            format!(
                "call {:.4} ({:+.3}%), put {:.4} ({:+.3}%) vs analytic {:.4}/{:.4}",
                row.call_price,
                row.call_pct_error,
                row.put_price,
                row.put_pct_error,
                comparison.benchmark_call,
                comparison.benchmark_put
            ),
        ));
    }

    match format {
        "json" => println!("{}", serde_json::to_string_pretty(&report)?),
        "table" => println!("{report}"),
        other => bail!("unknown format: {other}. Supported: json, table"),
    }

    if !report.all_passed() {
        bail!("{} validation check(s) failed", report.failures().len());
    }
    Ok(())
}
