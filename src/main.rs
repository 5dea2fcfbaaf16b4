mod commands;
mod domain;
mod logging;
mod services;
#[cfg(test)]
mod test_support;

use std::process::ExitCode;

use crate::commands::base_commands::{CliArgs, Commands};
use crate::commands::monte_carlo_cmd::monte_carlo_command;
use crate::commands::params_cmd::params_command;
use crate::commands::plot_cmd::plot_command;
use crate::commands::project_cmd::project_command;
use crate::logging::init_logging;
use clap::{CommandFactory, Parser};

fn main() -> ExitCode {
    init_logging();
    let args = CliArgs::parse();
    let result = match args.command {
        cmd @ Commands::Project { .. } => project_command(cmd),
        cmd @ Commands::MonteCarlo { .. } => monte_carlo_command(cmd),
        cmd @ Commands::Plot { .. } => plot_command(cmd),
        cmd @ Commands::Params { .. } => params_command(cmd),
        Commands::Completions { shell } => {
            let mut command = CliArgs::command();
            let name = command.get_name().to_string();
            clap_complete::generate(shell, &mut command, name, &mut std::io::stdout());
            Ok(())
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}
