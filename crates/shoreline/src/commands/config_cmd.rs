//! Config command handlers (no portal connection needed).

use shoreline_config::{config_path, load_config_or_default, save_config, Config};

use crate::cli::{ConfigArgs, ConfigCommand, GlobalOpts};
use crate::error::CliError;
use crate::output::Renderer;

pub fn handle(args: ConfigArgs, global: &GlobalOpts) -> Result<(), CliError> {
    let out = Renderer::new(global);
    match args.command {
        ConfigCommand::Init { portal } => {
            let cfg = Config {
                portal: Some(portal),
                ..Config::default()
            };
            save_config(&cfg)?;
            out.note(&format!("Wrote {}", config_path().display()));
            Ok(())
        }

        ConfigCommand::Show => {
            let cfg = load_config_or_default();
            let rendered = toml::to_string_pretty(&cfg).map_err(|e| CliError::Config {
                message: e.to_string(),
            })?;
            print!("{rendered}");
            Ok(())
        }

        ConfigCommand::Path => {
            println!("{}", config_path().display());
            Ok(())
        }
    }
}
