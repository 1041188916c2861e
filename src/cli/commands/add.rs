use crate::cli::parser::Commands;
use crate::core::add::{AddLogic, EntryForm};
use crate::core::context::AppContext;
use crate::errors::AppResult;
use crate::ui::messages::success;
use crate::ui::render::print_records;
use crate::utils::date;

/// Add one administration record, then show the reloaded table.
pub fn handle(cmd: &Commands, ctx: &AppContext) -> AppResult<()> {
    if let Commands::Add {
        patient_id,
        antibiotic,
        dosage,
        date: entry_date,
        time,
        added_by,
    } = cmd
    {
        //
        // 1. Validate the form before any network traffic
        //
        let form = EntryForm {
            patient_id,
            antibiotic,
            dosage,
            date: entry_date.as_deref(),
            time: time.as_deref(),
            added_by: added_by.as_deref(),
        };
        let record = form.validate(date::today())?;

        //
        // 2. Append and reload
        //
        let session = ctx.session()?;
        let facade = session.facade()?;
        let records = AddLogic::apply(&facade, &session.sheet_id, &session.worksheet, &record)?;

        success(format!(
            "Entry added: {} / {} / {} on {}",
            record.patient_id,
            record.antibiotic,
            record.dosage,
            record.date_str()
        ));

        println!();
        print_records(&records);
    }

    Ok(())
}
