pub mod amortization;
pub mod breakeven;
pub mod cash_flow_plot;
pub mod histogram;
pub mod monte_carlo;
pub mod parameters_yaml;
pub mod percentiles;
pub mod perturbation_sampler;
pub mod projection;
pub mod simulation_types;
