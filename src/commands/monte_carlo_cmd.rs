use crate::commands::base_commands::Commands;
use crate::commands::output::{CommandError, write_output};
use crate::commands::report_format::format_monte_carlo_report;
use crate::services::breakeven::find_breakeven;
use crate::services::histogram::write_histogram_png;
use crate::services::monte_carlo::run_monte_carlo;
use crate::services::projection::project;
use crate::services::simulation_types::MonteCarloReport;

pub fn monte_carlo_command(cmd: Commands) -> Result<(), CommandError> {
    if let Commands::MonteCarlo {
        parameters,
        output,
        format,
        seed,
        histogram,
        undiscounted,
    } = cmd
    {
        let params = parameters.resolve()?;
        let discounted = !undiscounted && params.is_discounted();
        let baseline_breakeven = find_breakeven(&project(&params)?, discounted);
        let summary = run_monte_carlo(&params, params.monte_carlo_trials, discounted, seed)?;

        let report = MonteCarloReport {
            parameters: params,
            seed,
            discounted,
            baseline_breakeven,
            summary,
        };
        println!("{}", format_monte_carlo_report(&report));

        if let Some(output) = output {
            write_output(&output, &report, format)?;
            println!("Simulation result written to {output}");
        }
        if let Some(histogram) = histogram {
            if report.summary.trial_breakevens.is_empty() {
                println!("No converged trials, histogram not written");
            } else {
                write_histogram_png(&histogram, &report.summary.trial_breakevens)?;
                println!("Simulation histogram written to {histogram}");
            }
        }
    }
    Ok(())
}
