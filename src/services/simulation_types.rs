use chrono::NaiveDate;
use serde::Serialize;

use crate::domain::cash_flow::{BreakevenResult, CashFlowSeries};
use crate::domain::parameters::ParameterSet;
use crate::services::percentiles::{sorted_months, value_sorted};

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct MonteCarloSummary {
    pub trials: usize,
    /// Breakeven month of every converged trial, in trial order.
    pub trial_breakevens: Vec<usize>,
    pub non_converged_count: usize,
    pub median: Option<f64>,
    pub p5: Option<f64>,
    pub p95: Option<f64>,
}

impl MonteCarloSummary {
    pub fn from_trials(trial_breakevens: Vec<usize>, non_converged_count: usize) -> Self {
        let sorted = sorted_months(&trial_breakevens);
        Self {
            trials: trial_breakevens.len() + non_converged_count,
            median: value_sorted(&sorted, 50.0),
            p5: value_sorted(&sorted, 5.0),
            p95: value_sorted(&sorted, 95.0),
            trial_breakevens,
            non_converged_count,
        }
    }

    pub fn converged_count(&self) -> usize {
        self.trial_breakevens.len()
    }
}

#[derive(Serialize, Debug, Clone)]
pub struct ProjectionReport {
    pub hire_date: NaiveDate,
    pub parameters: ParameterSet,
    pub initial_investment: f64,
    /// Whether the breakeven was taken from the cumulative present value.
    pub discounted: bool,
    pub breakeven: BreakevenResult,
    pub series: CashFlowSeries,
}

#[derive(Serialize, Debug, Clone)]
pub struct MonteCarloReport {
    pub parameters: ParameterSet,
    pub seed: Option<u64>,
    pub discounted: bool,
    /// Breakeven of the unperturbed parameters.
    pub baseline_breakeven: BreakevenResult,
    pub summary: MonteCarloSummary,
}
