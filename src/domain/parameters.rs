use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Months the linear ramp needs to reach full production.
pub const LINEAR_RAMP_MONTHS: f64 = 3.0;

/// Ramp coefficient used when the exponential profile is picked without one.
pub const DEFAULT_RAMP_ALPHA: f64 = 0.35;

/// Longest projection accepted, one hundred years.
pub const MAX_HORIZON_MONTHS: usize = 1200;

/// Most Monte Carlo trials accepted in one run.
pub const MAX_MONTE_CARLO_TRIALS: usize = 1_000_000;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum InvalidParameterError {
    #[error("{field} must be a finite number (got {value})")]
    NotFinite { field: &'static str, value: f64 },
    #[error("{field} must not be negative (got {value})")]
    Negative { field: &'static str, value: f64 },
    #[error("{field} must be greater than zero (got {value})")]
    NotPositive { field: &'static str, value: f64 },
    #[error("{field} must be within [{min}, {max}] (got {value})")]
    OutOfRange {
        field: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },
    #[error("{field} must be at least {min} (got {value})")]
    BelowMinimum {
        field: &'static str,
        value: usize,
        min: usize,
    },
    #[error("{field} must be at most {max} (got {value})")]
    AboveMaximum {
        field: &'static str,
        value: usize,
        max: usize,
    },
    #[error("{field} cannot be sampled around {mean} with standard deviation {std_dev}")]
    InvalidDistribution {
        field: &'static str,
        mean: f64,
        std_dev: f64,
    },
    #[error("{field} of {value} months exceeds the horizon of {horizon} months")]
    ExceedsHorizon {
        field: &'static str,
        value: usize,
        horizon: usize,
    },
}

/// How fast a new hire reaches full billable production once assigned.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum RampProfile {
    /// Reaches full production three months after the assignment start.
    #[default]
    Linear,
    /// Approaches full production asymptotically: `1 - exp(-alpha * t)`.
    Exponential { alpha: f64 },
}

impl RampProfile {
    /// Fraction of full revenue capacity realized in `month`.
    ///
    /// Always 0 before `assignment_start`. Non-decreasing afterwards.
    pub fn production_factor(&self, month: usize, assignment_start: usize) -> f64 {
        if month < assignment_start {
            return 0.0;
        }
        let months_assigned = (month - assignment_start + 1) as f64;
        match self {
            RampProfile::Linear => (months_assigned / LINEAR_RAMP_MONTHS).min(1.0),
            RampProfile::Exponential { alpha } => 1.0 - (-alpha * months_assigned).exp(),
        }
    }
}

/// Every input of a single hire simulation.
///
/// Money values are in one currency unit throughout; months are zero-based with
/// month 0 being the hiring month.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParameterSet {
    pub hiring_cost: f64,
    pub training_cost: f64,
    pub training_months: usize,
    pub ojt_cost: f64,
    pub ojt_months: usize,
    pub annual_salary: f64,
    pub annual_support_cost: f64,
    pub monthly_overhead: f64,
    pub assignment_start_month: usize,
    pub baseline_monthly_billing: f64,
    pub utilization_rate: f64,
    pub annual_discount_rate: f64,
    pub horizon_months: usize,
    pub monte_carlo_trials: usize,
    pub ramp: RampProfile,
}

impl Default for ParameterSet {
    fn default() -> Self {
        Self {
            hiring_cost: 500_000.0,
            training_cost: 300_000.0,
            training_months: 3,
            ojt_cost: 600_000.0,
            ojt_months: 6,
            annual_salary: 6_000_000.0,
            annual_support_cost: 100_000.0,
            monthly_overhead: 200_000.0,
            assignment_start_month: 4,
            baseline_monthly_billing: 1_200_000.0,
            utilization_rate: 0.8,
            annual_discount_rate: 0.03,
            horizon_months: 60,
            monte_carlo_trials: 1000,
            ramp: RampProfile::Linear,
        }
    }
}

impl ParameterSet {
    pub fn monthly_salary(&self) -> f64 {
        self.annual_salary / 12.0
    }

    pub fn monthly_support_cost(&self) -> f64 {
        self.annual_support_cost / 12.0
    }

    /// Salary, support and overhead charged every month of the horizon.
    pub fn fixed_monthly_cost(&self) -> f64 {
        self.monthly_salary() + self.monthly_support_cost() + self.monthly_overhead
    }

    /// Up-front investment in the hire: recruiting plus both onboarding blocks.
    pub fn initial_investment(&self) -> f64 {
        self.hiring_cost + self.training_cost + self.ojt_cost
    }

    pub fn is_discounted(&self) -> bool {
        self.annual_discount_rate > 0.0
    }

    /// Monthly rate equivalent to the annual discount rate under monthly compounding.
    pub fn monthly_discount_rate(&self) -> f64 {
        (1.0 + self.annual_discount_rate).powf(1.0 / 12.0) - 1.0
    }

    pub fn validate(&self) -> Result<(), InvalidParameterError> {
        let non_negative = [
            ("hiring_cost", self.hiring_cost),
            ("training_cost", self.training_cost),
            ("ojt_cost", self.ojt_cost),
            ("annual_salary", self.annual_salary),
            ("annual_support_cost", self.annual_support_cost),
            ("monthly_overhead", self.monthly_overhead),
            ("baseline_monthly_billing", self.baseline_monthly_billing),
            ("annual_discount_rate", self.annual_discount_rate),
        ];
        for (field, value) in non_negative {
            check_non_negative(field, value)?;
        }
        check_range("utilization_rate", self.utilization_rate, 0.0, 1.0)?;

        check_minimum("horizon_months", self.horizon_months, 1)?;
        check_minimum("assignment_start_month", self.assignment_start_month, 1)?;
        check_minimum("monte_carlo_trials", self.monte_carlo_trials, 1)?;
        check_maximum("horizon_months", self.horizon_months, MAX_HORIZON_MONTHS)?;
        check_maximum(
            "monte_carlo_trials",
            self.monte_carlo_trials,
            MAX_MONTE_CARLO_TRIALS,
        )?;
        check_within_horizon("training_months", self.training_months, self.horizon_months)?;
        check_within_horizon("ojt_months", self.ojt_months, self.horizon_months)?;

        if let RampProfile::Exponential { alpha } = self.ramp {
            check_finite("ramp.alpha", alpha)?;
            if alpha <= 0.0 {
                return Err(InvalidParameterError::NotPositive {
                    field: "ramp.alpha",
                    value: alpha,
                });
            }
        }
        Ok(())
    }
}

fn check_finite(field: &'static str, value: f64) -> Result<(), InvalidParameterError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(InvalidParameterError::NotFinite { field, value })
    }
}

fn check_non_negative(field: &'static str, value: f64) -> Result<(), InvalidParameterError> {
    check_finite(field, value)?;
    if value < 0.0 {
        return Err(InvalidParameterError::Negative { field, value });
    }
    Ok(())
}

fn check_range(
    field: &'static str,
    value: f64,
    min: f64,
    max: f64,
) -> Result<(), InvalidParameterError> {
    check_finite(field, value)?;
    if value < min || value > max {
        return Err(InvalidParameterError::OutOfRange {
            field,
            value,
            min,
            max,
        });
    }
    Ok(())
}

fn check_minimum(field: &'static str, value: usize, min: usize) -> Result<(), InvalidParameterError> {
    if value < min {
        return Err(InvalidParameterError::BelowMinimum { field, value, min });
    }
    Ok(())
}

pub(crate) fn check_maximum(
    field: &'static str,
    value: usize,
    max: usize,
) -> Result<(), InvalidParameterError> {
    if value > max {
        return Err(InvalidParameterError::AboveMaximum { field, value, max });
    }
    Ok(())
}

fn check_within_horizon(
    field: &'static str,
    value: usize,
    horizon: usize,
) -> Result<(), InvalidParameterError> {
    if value > horizon {
        return Err(InvalidParameterError::ExceedsHorizon {
            field,
            value,
            horizon,
        });
    }
    Ok(())
}
