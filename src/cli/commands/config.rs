use crate::cli::parser::Commands;
use crate::config::Config;
use crate::config::migrate::fill_missing_fields;
use crate::core::config::ConfigLogic;
use crate::errors::AppResult;
use crate::ui::messages::{info, success, warning};

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        check,
        edit_config,
        editor,
    } = cmd
    {
        let path = Config::config_file();

        if *print_config {
            println!("📄 Current configuration:\n");
            println!("{}", serde_yaml::to_string(cfg)?);
        }

        if *check {
            if !path.exists() {
                warning(format!(
                    "No config file at {}; run `gymattend init` first.",
                    path.display()
                ));
            } else {
                let added = fill_missing_fields(&path)?;
                if added.is_empty() {
                    success("Configuration is complete.");
                } else {
                    info(format!("Added missing field(s): {}", added.join(", ")));
                }
            }
        }

        if *edit_config {
            let used = ConfigLogic::edit(&path, editor)?;
            success(format!("Configuration file edited using '{}'", used));
        }
    }

    Ok(())
}
