use crate::domain::parameters::{InvalidParameterError, ParameterSet};
use crate::services::perturbation_sampler::PerturbationSampler;

// A PerturbationSampler that always returns the base values
pub struct FixedSampler;
impl PerturbationSampler for FixedSampler {
    fn sample_utilization(&mut self, base: f64) -> Result<f64, InvalidParameterError> {
        Ok(base)
    }

    fn sample_billing(&mut self, base: f64) -> Result<f64, InvalidParameterError> {
        Ok(base)
    }
}

// A PerturbationSampler that cycles through scripted values, ignoring the base
pub struct SequenceSampler {
    utilization: Vec<f64>,
    billing: Vec<f64>,
    utilization_draws: usize,
    billing_draws: usize,
}

impl SequenceSampler {
    pub fn new(utilization: Vec<f64>, billing: Vec<f64>) -> Self {
        Self {
            utilization,
            billing,
            utilization_draws: 0,
            billing_draws: 0,
        }
    }
}

impl PerturbationSampler for SequenceSampler {
    fn sample_utilization(&mut self, _base: f64) -> Result<f64, InvalidParameterError> {
        let value = self.utilization[self.utilization_draws % self.utilization.len()];
        self.utilization_draws += 1;
        Ok(value)
    }

    fn sample_billing(&mut self, _base: f64) -> Result<f64, InvalidParameterError> {
        let value = self.billing[self.billing_draws % self.billing.len()];
        self.billing_draws += 1;
        Ok(value)
    }
}

/// Default hire: pays back in month 24, or month 25 discounted at 3%.
pub fn default_parameters() -> ParameterSet {
    ParameterSet::default()
}

/// Bills 500k at 80% utilization, which never covers the fixed monthly cost.
pub fn underbilled_parameters() -> ParameterSet {
    ParameterSet {
        baseline_monthly_billing: 500_000.0,
        ..ParameterSet::default()
    }
}

pub fn zero_revenue_parameters() -> ParameterSet {
    ParameterSet {
        utilization_rate: 0.0,
        baseline_monthly_billing: 0.0,
        ..ParameterSet::default()
    }
}
