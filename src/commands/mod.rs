pub mod base_commands;
pub mod monte_carlo_cmd;
pub mod output;
pub mod params_cmd;
pub mod plot_cmd;
pub mod project_cmd;
pub mod report_format;
