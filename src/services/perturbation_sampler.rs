use rand::Rng;
use rand_distr::{Distribution, Normal};

use crate::domain::parameters::InvalidParameterError;

/// Standard deviation of the sampled utilization rate.
pub const UTILIZATION_STD_DEV: f64 = 0.05;
/// Standard deviation of the sampled billing, relative to the base billing.
pub const BILLING_RELATIVE_STD_DEV: f64 = 0.10;

/// Draws perturbed values for the uncertain revenue drivers of a hire.
pub trait PerturbationSampler {
    /// A utilization rate in `[0, 1]` around `base`.
    fn sample_utilization(&mut self, base: f64) -> Result<f64, InvalidParameterError>;
    /// A non-negative monthly billing around `base`.
    fn sample_billing(&mut self, base: f64) -> Result<f64, InvalidParameterError>;
}

pub struct NormalPerturbationSampler<R: Rng> {
    rng: R,
}

impl<R: Rng> NormalPerturbationSampler<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    fn sample_normal(
        &mut self,
        field: &'static str,
        mean: f64,
        std_dev: f64,
    ) -> Result<f64, InvalidParameterError> {
        let normal = Normal::new(mean, std_dev).map_err(|_| {
            InvalidParameterError::InvalidDistribution {
                field,
                mean,
                std_dev,
            }
        })?;
        Ok(normal.sample(&mut self.rng))
    }
}

impl<R: Rng> PerturbationSampler for NormalPerturbationSampler<R> {
    fn sample_utilization(&mut self, base: f64) -> Result<f64, InvalidParameterError> {
        let value = self.sample_normal("utilization_rate", base, UTILIZATION_STD_DEV)?;
        Ok(value.clamp(0.0, 1.0))
    }

    fn sample_billing(&mut self, base: f64) -> Result<f64, InvalidParameterError> {
        let std_dev = base * BILLING_RELATIVE_STD_DEV;
        let value = self.sample_normal("baseline_monthly_billing", base, std_dev)?;
        Ok(value.max(0.0))
    }
}
