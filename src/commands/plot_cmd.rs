use crate::commands::base_commands::Commands;
use crate::commands::output::CommandError;
use crate::services::breakeven::find_breakeven;
use crate::services::cash_flow_plot::write_cash_flow_plot_png;
use crate::services::projection::project;

pub fn plot_command(cmd: Commands) -> Result<(), CommandError> {
    if let Commands::Plot {
        parameters,
        output,
        undiscounted,
    } = cmd
    {
        let params = parameters.resolve()?;
        let series = project(&params)?;
        let breakeven = find_breakeven(&series, !undiscounted);
        write_cash_flow_plot_png(&output, &series, breakeven)?;
        println!("Cash flow plot written to {output}");
    }
    Ok(())
}
