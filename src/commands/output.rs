use clap::ValueEnum;
use serde::Serialize;
use thiserror::Error;

use crate::domain::parameters::InvalidParameterError;
use crate::services::cash_flow_plot::CashFlowPlotError;
use crate::services::histogram::HistogramError;
use crate::services::parameters_yaml::ParametersYamlError;

#[derive(Error, Debug)]
pub enum CommandError {
    #[error("failed to load parameters: {0}")]
    Parameters(#[from] ParametersYamlError),
    #[error("invalid parameters: {0}")]
    InvalidParameters(#[from] InvalidParameterError),
    #[error("invalid hire date: {0} (expected YYYY-MM-DD)")]
    InvalidHireDate(String),
    #[error("failed to serialize output: {0}")]
    Serialize(String),
    #[error("failed to write {path}: {source}")]
    Write {
        path: String,
        source: std::io::Error,
    },
    #[error("failed to write histogram: {0}")]
    Histogram(#[from] HistogramError),
    #[error("failed to write cash flow plot: {0}")]
    Plot(#[from] CashFlowPlotError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Yaml,
    Json,
}

pub fn render_output<T: Serialize>(value: &T, format: OutputFormat) -> Result<String, CommandError> {
    match format {
        OutputFormat::Yaml => {
            serde_yaml::to_string(value).map_err(|e| CommandError::Serialize(e.to_string()))
        }
        OutputFormat::Json => serde_json::to_string_pretty(value)
            .map_err(|e| CommandError::Serialize(e.to_string())),
    }
}

pub fn write_output<T: Serialize>(
    path: &str,
    value: &T,
    format: OutputFormat,
) -> Result<(), CommandError> {
    let contents = render_output(value, format)?;
    std::fs::write(path, contents).map_err(|source| CommandError::Write {
        path: path.to_string(),
        source,
    })
}
