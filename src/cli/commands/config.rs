use crate::cli::parser::Commands;
use crate::core::config::ConfigLogic;
use crate::core::context::AppContext;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{info, success, warning};

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, ctx: &AppContext) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        check,
        create,
        edit_config,
        editor,
    } = cmd
    {
        let path = &ctx.config_path;

        if *create {
            let created = Config::create_files(path)?;
            if created.is_empty() {
                info("Configuration files already exist; nothing created.");
            }
            for p in created {
                success(format!("Created {}", p.display()));
            }
        }

        if *print_config {
            println!("📄 Current configuration ({}):\n", path.display());
            ConfigLogic::print(path)?;
        }

        if *check {
            let missing = Config::missing_fields(path)?;
            if missing.is_empty() {
                success("Configuration file is complete.");
            } else {
                for field in missing {
                    warning(format!("Missing field '{}' (default is used)", field));
                }
            }
        }

        if *edit_config {
            ConfigLogic::edit(path, editor.as_deref())?;
        }
    }

    Ok(())
}
