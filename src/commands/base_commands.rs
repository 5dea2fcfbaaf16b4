use chrono::{Local, NaiveDate};
use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

use crate::commands::output::{CommandError, OutputFormat};
use crate::domain::parameters::{DEFAULT_RAMP_ALPHA, ParameterSet, RampProfile};
use crate::services::parameters_yaml::load_parameters_from_yaml_file;

#[derive(Parser)]
#[command(author, version, about)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Project the monthly cash flow of a hire and find its payback month
    Project {
        #[command(flatten)]
        parameters: ParameterArgs,
        /// Output file for the projected series
        #[arg(short, long)]
        output: Option<String>,
        /// Format of the output file
        #[arg(long, value_enum, default_value_t = OutputFormat::Yaml)]
        format: OutputFormat,
        /// Hiring date used to label the months (YYYY-MM-DD)
        #[arg(long, default_value_t = default_hire_date())]
        hire_date: String,
        /// Take the breakeven from plain cumulative cash flow even when discounting
        #[arg(long)]
        undiscounted: bool,
    },
    /// Run a Monte Carlo analysis of the payback month
    MonteCarlo {
        #[command(flatten)]
        parameters: ParameterArgs,
        /// Output file for the simulation summary
        #[arg(short, long)]
        output: Option<String>,
        /// Format of the output file
        #[arg(long, value_enum, default_value_t = OutputFormat::Yaml)]
        format: OutputFormat,
        /// Seed for reproducible draws
        #[arg(long)]
        seed: Option<u64>,
        /// Output PNG file for the breakeven histogram
        #[arg(long)]
        histogram: Option<String>,
        /// Take the breakeven from plain cumulative cash flow even when discounting
        #[arg(long)]
        undiscounted: bool,
    },
    /// Plot cumulative cash flow with the payback month into a PNG chart
    Plot {
        #[command(flatten)]
        parameters: ParameterArgs,
        /// Output PNG file
        #[arg(short, long)]
        output: String,
        /// Take the breakeven from plain cumulative cash flow even when discounting
        #[arg(long)]
        undiscounted: bool,
    },
    /// Print the effective parameter set as YAML
    Params {
        #[command(flatten)]
        parameters: ParameterArgs,
        /// Output YAML file instead of stdout
        #[arg(short, long)]
        output: Option<String>,
    },
    /// Generate shell completion scripts
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum RampKind {
    Linear,
    Exponential,
}

/// Parameter overrides shared by every simulation command.
///
/// Values are merged in order: built-in defaults, the `--params` file, then flags.
#[derive(Args, Debug, Clone, Default)]
pub struct ParameterArgs {
    /// YAML file with parameter overrides
    #[arg(short, long)]
    pub params: Option<String>,
    /// One-time recruiting cost charged in the hiring month
    #[arg(long)]
    pub hiring_cost: Option<f64>,
    /// Total off-the-job training cost
    #[arg(long)]
    pub training_cost: Option<f64>,
    /// Months over which training is amortized
    #[arg(long)]
    pub training_months: Option<usize>,
    /// Total on-the-job training cost
    #[arg(long)]
    pub ojt_cost: Option<f64>,
    /// Months over which on-the-job training is amortized
    #[arg(long)]
    pub ojt_months: Option<usize>,
    #[arg(long)]
    pub annual_salary: Option<f64>,
    #[arg(long)]
    pub annual_support_cost: Option<f64>,
    #[arg(long)]
    pub monthly_overhead: Option<f64>,
    /// First month the hire can bill
    #[arg(long)]
    pub assignment_start_month: Option<usize>,
    /// Monthly billing at full production and full utilization
    #[arg(long)]
    pub baseline_monthly_billing: Option<f64>,
    /// Billable fraction of time, between 0 and 1
    #[arg(long)]
    pub utilization_rate: Option<f64>,
    /// Annual discount rate; 0 disables discounting
    #[arg(long)]
    pub annual_discount_rate: Option<f64>,
    /// Months to simulate after the hiring month
    #[arg(long)]
    pub horizon_months: Option<usize>,
    /// Number of Monte Carlo trials
    #[arg(short = 'n', long = "trials")]
    pub monte_carlo_trials: Option<usize>,
    /// Ramp-up profile of the production factor
    #[arg(long, value_enum)]
    pub ramp: Option<RampKind>,
    /// Coefficient of the exponential ramp
    #[arg(long)]
    pub ramp_alpha: Option<f64>,
}

impl ParameterArgs {
    /// Builds the validated parameter set from defaults, the parameter file and flags.
    pub fn resolve(&self) -> Result<ParameterSet, CommandError> {
        let base = match &self.params {
            Some(path) => load_parameters_from_yaml_file(path, ParameterSet::default())?,
            None => ParameterSet::default(),
        };
        let params = self.apply_to(base);
        params.validate()?;
        Ok(params)
    }

    fn apply_to(&self, base: ParameterSet) -> ParameterSet {
        let ramp = self.resolve_ramp(base.ramp);
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
            ramp,
        }
    }

    // An alpha on its own implies the exponential profile.
    fn resolve_ramp(&self, base: RampProfile) -> RampProfile {
        let base_alpha = match base {
            RampProfile::Exponential { alpha } => Some(alpha),
            RampProfile::Linear => None,
        };
        match (self.ramp, self.ramp_alpha) {
            (Some(RampKind::Linear), _) => RampProfile::Linear,
            (Some(RampKind::Exponential), alpha) => RampProfile::Exponential {
                alpha: alpha.or(base_alpha).unwrap_or(DEFAULT_RAMP_ALPHA),
            },
            (None, Some(alpha)) => RampProfile::Exponential { alpha },
            (None, None) => base,
        }
    }
}

pub fn default_hire_date() -> String {
    Local::now().date_naive().format("%Y-%m-%d").to_string()
}

pub fn parse_hire_date(value: &str) -> Result<NaiveDate, CommandError> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map_err(|_| CommandError::InvalidHireDate(value.to_string()))
}
