use crate::core::context::AppContext;
use crate::errors::AppResult;
use crate::ui::messages::success;

/// Handle the `test-connection` command: authenticate, then read once.
pub fn handle(ctx: &AppContext) -> AppResult<()> {
    let session = ctx.session()?;
    let facade = session.facade()?;

    facade.test_connection(&session.sheet_id, &session.worksheet)?;

    success(format!(
        "Connected to spreadsheet {} (worksheet '{}') as {}",
        session.sheet_id,
        session.worksheet,
        session.service_identity()
    ));
    Ok(())
}
