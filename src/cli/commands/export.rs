use crate::cli::parser::Commands;
use crate::core::context::AppContext;
use crate::core::list::ListLogic;
use crate::errors::AppResult;
use crate::export::ExportLogic;

pub fn handle(cmd: &Commands, ctx: &AppContext) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        patient,
        force,
    } = cmd
    {
        let session = ctx.session()?;
        let facade = session.facade()?;

        let records = facade.read_all(&session.sheet_id, &session.worksheet)?;
        let records = ListLogic::filter_by_patient(records, patient.as_deref());

        ExportLogic::export(&records, *format, file, *force)?;
    }
    Ok(())
}
