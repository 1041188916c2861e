use crate::core::context::AppContext;
use crate::errors::AppResult;
use crate::ui::messages::header;
use crate::ui::render::diagnostic_line;

/// Handle the `status` command
///
/// Prints where configuration and secrets come from and what they resolve
/// to. Never touches the network; a broken secret store is returned as an
/// error after the paths have been printed.
pub fn handle(ctx: &AppContext) -> AppResult<()> {
    header("abxlog status");

    let config_path = ctx.config_path.to_string_lossy();
    let secrets_path = ctx.config.secrets_path();
    let secrets_path = secrets_path.to_string_lossy();

    println!("{}", diagnostic_line("Config file", Some(&*config_path)));
    println!("{}", diagnostic_line("Secrets file", Some(&*secrets_path)));
    println!("{}", diagnostic_line("Worksheet", Some(ctx.config.worksheet.as_str())));
    println!("{}", diagnostic_line("API base", Some(ctx.config.api_base_url.as_str())));

    let creds = ctx.credentials()?;
    let sheet_id = creds.sheet_id()?;

    println!("{}", diagnostic_line("Sheet ID", Some(sheet_id.as_str())));
    println!(
        "{}",
        diagnostic_line("Service account", Some(creds.service_identity()))
    );
    println!(
        "{}",
        diagnostic_line("Project", creds.service_account.project_id.as_deref())
    );

    Ok(())
}
