use crate::core::context::AppContext;
use crate::errors::AppResult;
use crate::models::record::HEADERS;
use crate::ui::messages::{info, success};

/// Handle the `init` command
///
/// Writes the canonical header row into the worksheet, but only when the
/// worksheet is completely empty.
pub fn handle(ctx: &AppContext) -> AppResult<()> {
    let session = ctx.session()?;
    let facade = session.facade()?;

    println!("⚙️  Initializing worksheet '{}'…", session.worksheet);

    if facade.initialize_if_empty(&session.sheet_id, &session.worksheet)? {
        success(format!("Header row written: {}", HEADERS.join(", ")));
    } else {
        info("Worksheet already has content; nothing written.");
    }

    Ok(())
}
