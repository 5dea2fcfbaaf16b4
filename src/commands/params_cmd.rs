use crate::commands::base_commands::Commands;
use crate::commands::output::CommandError;
use crate::services::parameters_yaml::serialize_parameters_to_yaml;

pub fn params_command(cmd: Commands) -> Result<(), CommandError> {
    if let Commands::Params { parameters, output } = cmd {
        let params = parameters.resolve()?;
        let mut buffer = Vec::new();
        serialize_parameters_to_yaml(&mut buffer, &params)
            .map_err(|e| CommandError::Serialize(e.to_string()))?;

        match output {
            Some(output) => {
                std::fs::write(&output, buffer).map_err(|source| CommandError::Write {
                    path: output.clone(),
                    source,
                })?;
                println!("Parameters written to {output}");
            }
            None => print!("{}", String::from_utf8_lossy(&buffer)),
        }
    }
    Ok(())
}
