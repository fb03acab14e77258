use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages;

/// View the configuration.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Config { print_config } = cmd {
        if *print_config {
            cfg.print()?;
        } else {
            messages::info(format!(
                "Config file: {} (use --print to show it)",
                Config::config_file().display()
            ));
        }
    }
    Ok(())
}
