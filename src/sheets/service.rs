use crate::errors::AppResult;

/// Raw operations consumed from the remote spreadsheet service.
///
/// The façade only ever talks to this trait, so any backend that can list
/// worksheet titles, return a value grid and append a row can stand in for
/// the HTTP client.
pub trait SpreadsheetService {
    /// Titles of every worksheet in the spreadsheet, in tab order.
    fn worksheet_titles(&self, sheet_id: &str) -> AppResult<Vec<String>>;

    /// Every non-empty row of the worksheet as raw strings.
    /// Rows may be shorter than the header when trailing cells are empty.
    fn get_all_values(&self, sheet_id: &str, worksheet: &str) -> AppResult<Vec<Vec<String>>>;

    /// Append one row after the last non-empty row.
    fn append_row(&self, sheet_id: &str, worksheet: &str, cells: &[String]) -> AppResult<()>;
}
