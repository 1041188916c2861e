//! Domain-level access to the records worksheet.

use super::service::SpreadsheetService;
use crate::errors::{AppError, AppResult};
use crate::models::record::{Record, find_header, header_row, records_from_grid, validate_header};
use tracing::{debug, info};

/// Read/append façade over one spreadsheet service handle.
pub struct SheetFacade<'a, S: SpreadsheetService + ?Sized> {
    service: &'a S,
}

impl<'a, S: SpreadsheetService + ?Sized> SheetFacade<'a, S> {
    pub fn new(service: &'a S) -> Self {
        Self { service }
    }

    /// Every record in the worksheet, in row order.
    ///
    /// A worksheet with no data rows (empty, or header only) yields an empty
    /// vector rather than an error.
    pub fn read_all(&self, sheet_id: &str, worksheet: &str) -> AppResult<Vec<Record>> {
        let grid = self.grid(sheet_id, worksheet)?;
        let records = records_from_grid(&grid)?;
        debug!(%worksheet, rows = records.len(), "records loaded");
        Ok(records)
    }

    /// Append `record` as a new trailing row. Calling it twice appends twice.
    ///
    /// The worksheet's header must be the canonical one; nothing is written
    /// otherwise. An empty worksheet gets the header first.
    pub fn append_row(&self, sheet_id: &str, worksheet: &str, record: &Record) -> AppResult<()> {
        let grid = self.grid(sheet_id, worksheet)?;

        match find_header(&grid) {
            Some((_, header)) => validate_header(header)?,
            None => {
                self.service
                    .append_row(sheet_id, worksheet, &header_row())?;
                info!(%sheet_id, %worksheet, "header row written before first record");
            }
        }

        self.service
            .append_row(sheet_id, worksheet, &record.to_row())
    }

    /// Write the header row if the worksheet is completely empty.
    ///
    /// Returns `true` when the header was written, `false` when the worksheet
    /// already had content (nothing is written in that case).
    pub fn initialize_if_empty(&self, sheet_id: &str, worksheet: &str) -> AppResult<bool> {
        let grid = self.grid(sheet_id, worksheet)?;

        if find_header(&grid).is_some() {
            return Ok(false);
        }

        self.service
            .append_row(sheet_id, worksheet, &header_row())?;
        info!(%sheet_id, %worksheet, "header row initialized");
        Ok(true)
    }

    /// Full read whose result is discarded; surfaces any error on the path.
    pub fn test_connection(&self, sheet_id: &str, worksheet: &str) -> AppResult<()> {
        self.read_all(sheet_id, worksheet).map(|_| ())
    }

    fn grid(&self, sheet_id: &str, worksheet: &str) -> AppResult<Vec<Vec<String>>> {
        self.ensure_worksheet(sheet_id, worksheet)?;
        self.service.get_all_values(sheet_id, worksheet)
    }

    fn ensure_worksheet(&self, sheet_id: &str, worksheet: &str) -> AppResult<()> {
        let available = self.service.worksheet_titles(sheet_id)?;

        if available.iter().any(|t| t == worksheet) {
            Ok(())
        } else {
            Err(AppError::WorksheetNotFound {
                name: worksheet.to_string(),
                available,
            })
        }
    }
}
