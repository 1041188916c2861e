use crate::errors::{AppError, AppResult};
use crate::models::record::Record;
use crate::sheets::{SheetFacade, SpreadsheetService};
use crate::utils::date::parse_date;
use crate::utils::time::parse_optional_time;
use chrono::NaiveDate;

/// Raw values of the "add entry" form, as typed by the operator.
#[derive(Debug, Default, Clone)]
pub struct EntryForm<'a> {
    pub patient_id: &'a str,
    pub antibiotic: &'a str,
    pub dosage: &'a str,
    pub date: Option<&'a str>,
    pub time: Option<&'a str>,
    pub added_by: Option<&'a str>,
}

impl EntryForm<'_> {
    /// Check required fields and parse the form into a record.
    ///
    /// A missing date means `today`; a blank author becomes "Unknown".
    pub fn validate(&self, today: NaiveDate) -> AppResult<Record> {
        let required = [
            ("PatientId", self.patient_id),
            ("Antibiotic", self.antibiotic),
            ("Dosage", self.dosage),
        ];
        if let Some((name, _)) = required.iter().find(|(_, v)| v.trim().is_empty()) {
            return Err(AppError::MissingField(*name));
        }

        let date = match self.date.map(str::trim) {
            None | Some("") => today,
            Some(d) => parse_date(d).ok_or_else(|| AppError::InvalidDate(d.to_string()))?,
        };

        let time = parse_optional_time(self.time)?;

        Ok(Record::new(
            self.patient_id,
            self.antibiotic,
            self.dosage,
            date,
            time,
            self.added_by,
        ))
    }
}

/// High-level business logic for the `add` command.
pub struct AddLogic;

impl AddLogic {
    /// Append `record`, then reload the whole worksheet so the caller can show
    /// the table as it now stands.
    pub fn apply<S: SpreadsheetService + ?Sized>(
        facade: &SheetFacade<'_, S>,
        sheet_id: &str,
        worksheet: &str,
        record: &Record,
    ) -> AppResult<Vec<Record>> {
        facade.append_row(sheet_id, worksheet, record)?;
        facade.read_all(sheet_id, worksheet)
    }
}
