use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{info, warn};

use crate::domain::parameters::{
    InvalidParameterError, MAX_MONTE_CARLO_TRIALS, ParameterSet, check_maximum,
};
use crate::services::breakeven::find_breakeven;
use crate::services::perturbation_sampler::{NormalPerturbationSampler, PerturbationSampler};
use crate::services::projection::project;
use crate::services::simulation_types::MonteCarloSummary;

/// Runs `trials` perturbed projections of `base` and summarizes their breakeven months.
///
/// A `seed` makes the whole draw sequence reproducible; without one the
/// generator is seeded from the operating system.
pub fn run_monte_carlo(
    base: &ParameterSet,
    trials: usize,
    discounted: bool,
    seed: Option<u64>,
) -> Result<MonteCarloSummary, InvalidParameterError> {
    let rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let mut sampler = NormalPerturbationSampler::new(rng);
    run_monte_carlo_with_sampler(base, trials, discounted, &mut sampler)
}

pub fn run_monte_carlo_with_sampler<S: PerturbationSampler + ?Sized>(
    base: &ParameterSet,
    trials: usize,
    discounted: bool,
    sampler: &mut S,
) -> Result<MonteCarloSummary, InvalidParameterError> {
    if trials == 0 {
        return Err(InvalidParameterError::BelowMinimum {
            field: "monte_carlo_trials",
            value: trials,
            min: 1,
        });
    }
    check_maximum("monte_carlo_trials", trials, MAX_MONTE_CARLO_TRIALS)?;
    base.validate()?;

    let mut trial_breakevens = Vec::with_capacity(trials);
    let mut non_converged_count = 0;
    for _ in 0..trials {
        let params = perturb(base, sampler)?;
        let series = project(&params)?;
        match find_breakeven(&series, discounted).month {
            Some(month) => trial_breakevens.push(month),
            None => non_converged_count += 1,
        }
    }

    let summary = MonteCarloSummary::from_trials(trial_breakevens, non_converged_count);
    if summary.converged_count() == 0 {
        warn!(
            trials,
            horizon = base.horizon_months,
            "no Monte Carlo trial reached breakeven"
        );
    } else {
        info!(
            trials,
            converged = summary.converged_count(),
            median = ?summary.median,
            p5 = ?summary.p5,
            p95 = ?summary.p95,
            "Monte Carlo breakeven analysis finished"
        );
    }
    Ok(summary)
}

fn perturb<S: PerturbationSampler + ?Sized>(
    base: &ParameterSet,
    sampler: &mut S,
) -> Result<ParameterSet, InvalidParameterError> {
    Ok(ParameterSet {
        utilization_rate: sampler.sample_utilization(base.utilization_rate)?,
        baseline_monthly_billing: sampler.sample_billing(base.baseline_monthly_billing)?,
        ..base.clone()
    })
}
