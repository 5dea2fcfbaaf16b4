use std::io::{self, Write};
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::domain::parameters::{ParameterSet, RampProfile};

#[derive(Error, Debug)]
pub enum ParametersYamlError {
    #[error("failed to read parameter file {path}: {source}")]
    Read { path: PathBuf, source: io::Error },
    #[error("failed to parse parameter yaml: {0}")]
    Parse(#[from] serde_yaml::Error),
}

/// Partial parameter set as written by users; absent keys keep their base value.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ParametersRecord {
    hiring_cost: Option<f64>,
    training_cost: Option<f64>,
    training_months: Option<usize>,
    ojt_cost: Option<f64>,
    ojt_months: Option<usize>,
    annual_salary: Option<f64>,
    annual_support_cost: Option<f64>,
    monthly_overhead: Option<f64>,
    assignment_start_month: Option<usize>,
    baseline_monthly_billing: Option<f64>,
    utilization_rate: Option<f64>,
    annual_discount_rate: Option<f64>,
    horizon_months: Option<usize>,
    monte_carlo_trials: Option<usize>,
    ramp: Option<RampProfile>,
}

impl ParametersRecord {
    fn apply_to(self, base: ParameterSet) -> ParameterSet {
        ParameterSet {
            hiring_cost: self.hiring_cost.unwrap_or(base.hiring_cost),
            training_cost: self.training_cost.unwrap_or(base.training_cost),
            training_months: self.training_months.unwrap_or(base.training_months),
            ojt_cost: self.ojt_cost.unwrap_or(base.ojt_cost),
            ojt_months: self.ojt_months.unwrap_or(base.ojt_months),
            annual_salary: self.annual_salary.unwrap_or(base.annual_salary),
            annual_support_cost: self.annual_support_cost.unwrap_or(base.annual_support_cost),
            monthly_overhead: self.monthly_overhead.unwrap_or(base.monthly_overhead),
            assignment_start_month: self
                .assignment_start_month
                .unwrap_or(base.assignment_start_month),
            baseline_monthly_billing: self
                .baseline_monthly_billing
                .unwrap_or(base.baseline_monthly_billing),
            utilization_rate: self.utilization_rate.unwrap_or(base.utilization_rate),
            annual_discount_rate: self.annual_discount_rate.unwrap_or(base.annual_discount_rate),
            horizon_months: self.horizon_months.unwrap_or(base.horizon_months),
            monte_carlo_trials: self.monte_carlo_trials.unwrap_or(base.monte_carlo_trials),
            ramp: self.ramp.unwrap_or(base.ramp),
        }
    }
}

/// Reads a YAML parameter file and overlays it on `base`.
///
/// The result is not validated; validation runs once all overrides are merged.
pub fn load_parameters_from_yaml_file<P: AsRef<Path>>(
    path: P,
    base: ParameterSet,
) -> Result<ParameterSet, ParametersYamlError> {
    let path = path.as_ref();
    let contents = std::fs::read_to_string(path).map_err(|source| ParametersYamlError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    deserialize_parameters_from_yaml_str(&contents, base)
}

pub fn deserialize_parameters_from_yaml_str(
    input: &str,
    base: ParameterSet,
) -> Result<ParameterSet, ParametersYamlError> {
    if input.trim().is_empty() {
        return Ok(base);
    }
    let record: ParametersRecord = serde_yaml::from_str(input)?;
    Ok(record.apply_to(base))
}

pub fn serialize_parameters_to_yaml<W: Write>(
    writer: &mut W,
    params: &ParameterSet,
) -> io::Result<()> {
    let yaml = serde_yaml::to_string(params).map_err(io::Error::other)?;
    writer.write_all(yaml.as_bytes())
}
