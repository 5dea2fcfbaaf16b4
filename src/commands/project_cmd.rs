use tracing::{info, warn};

use crate::commands::base_commands::{Commands, parse_hire_date};
use crate::commands::output::{CommandError, write_output};
use crate::commands::report_format::format_projection_report;
use crate::services::breakeven::find_breakeven;
use crate::services::projection::project;
use crate::services::simulation_types::ProjectionReport;

pub fn project_command(cmd: Commands) -> Result<(), CommandError> {
    if let Commands::Project {
        parameters,
        output,
        format,
        hire_date,
        undiscounted,
    } = cmd
    {
        let hire_date = parse_hire_date(&hire_date)?;
        let params = parameters.resolve()?;
        let series = project(&params)?;
        let discounted = !undiscounted && series.is_discounted();
        let breakeven = find_breakeven(&series, discounted);
        if breakeven.is_reached() {
            info!(breakeven = ?breakeven.month, discounted, "projection finished");
        } else {
            warn!(
                months = series.len(),
                discounted,
                "hire does not pay back within the horizon"
            );
        }

        let report = ProjectionReport {
            hire_date,
            initial_investment: params.initial_investment(),
            discounted,
            breakeven,
            series,
            parameters: params,
        };
        println!("{}", format_projection_report(&report));

        if let Some(output) = output {
            write_output(&output, &report, format)?;
            println!("Projection written to {output}");
        }
    }
    Ok(())
}
