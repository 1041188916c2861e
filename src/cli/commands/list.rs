use crate::cli::parser::Commands;
use crate::core::context::AppContext;
use crate::core::list::ListLogic;
use crate::errors::AppResult;
use crate::models::summary::Summary;
use crate::ui::messages::info;
use crate::ui::render::{print_records, print_summary};

pub fn handle(cmd: &Commands, ctx: &AppContext) -> AppResult<()> {
    if let Commands::List {
        patient,
        no_summary,
    } = cmd
    {
        let session = ctx.session()?;
        let facade = session.facade()?;

        let records = facade.read_all(&session.sheet_id, &session.worksheet)?;
        let records = ListLogic::filter_by_patient(records, patient.as_deref());

        if records.is_empty() {
            info(format!("No records in worksheet '{}'.", session.worksheet));
            return Ok(());
        }

        if ctx.config.show_summary && !*no_summary {
            print_summary(&Summary::from_records(&records));
            println!();
        }

        print_records(&records);
    }
    Ok(())
}
