use crate::errors::{AppError, AppResult};
use chrono::{NaiveDate, NaiveTime};
use serde::Serialize;

/// Canonical header row of the worksheet, in column order.
pub const HEADERS: [&str; 6] = ["PatientId", "Antibiotic", "Dosage", "Date", "Time", "AddedBy"];

/// Value stored in `AddedBy` when the operator leaves it blank.
pub const UNKNOWN_AUTHOR: &str = "Unknown";

const DATE_FMT: &str = "%Y-%m-%d";
const TIME_FMT: &str = "%H:%M";

/// One antibiotic administration event (one worksheet row).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Record {
    pub patient_id: String,     // ⇔ PatientId
    pub antibiotic: String,     // ⇔ Antibiotic
    pub dosage: String,         // ⇔ Dosage
    pub date: NaiveDate,        // ⇔ Date ("YYYY-MM-DD")
    pub time: Option<NaiveTime>, // ⇔ Time ("HH:MM" or empty)
    pub added_by: String,       // ⇔ AddedBy (defaults to "Unknown")
}

impl Record {
    pub fn new(
        patient_id: &str,
        antibiotic: &str,
        dosage: &str,
        date: NaiveDate,
        time: Option<NaiveTime>,
        added_by: Option<&str>,
    ) -> Self {
        let added_by = match added_by.map(str::trim) {
            Some(by) if !by.is_empty() => by.to_string(),
            _ => UNKNOWN_AUTHOR.to_string(),
        };

        Self {
            patient_id: patient_id.trim().to_string(),
            antibiotic: antibiotic.trim().to_string(),
            dosage: dosage.trim().to_string(),
            date,
            time,
            added_by,
        }
    }

    pub fn date_str(&self) -> String {
        self.date.format(DATE_FMT).to_string()
    }

    pub fn time_str(&self) -> String {
        self.time
            .map(|t| t.format(TIME_FMT).to_string())
            .unwrap_or_default()
    }

    /// Cells in header order, ready to be appended to the worksheet.
    pub fn to_row(&self) -> Vec<String> {
        vec![
            self.patient_id.clone(),
            self.antibiotic.clone(),
            self.dosage.clone(),
            self.date_str(),
            self.time_str(),
            self.added_by.clone(),
        ]
    }

    /// Build a record from a data row. `sheet_row` is the 1-based row number
    /// in the worksheet, used only for error reporting.
    pub fn from_row(cells: &[String], sheet_row: usize) -> AppResult<Self> {
        let cell = |i: usize| cells.get(i).map(|s| s.trim()).unwrap_or("");

        let invalid = |reason: String| AppError::InvalidRow {
            row: sheet_row,
            reason,
        };

        if cells.len() > HEADERS.len() && cells[HEADERS.len()..].iter().any(|c| !c.trim().is_empty()) {
            return Err(invalid(format!(
                "found {} cells, the sheet has only {} columns",
                cells.len(),
                HEADERS.len()
            )));
        }

        for (i, name) in HEADERS.iter().enumerate().take(3) {
            if cell(i).is_empty() {
                return Err(invalid(format!("{name} is empty")));
            }
        }

        let date = NaiveDate::parse_from_str(cell(3), DATE_FMT)
            .map_err(|_| invalid(format!("invalid Date '{}'", cell(3))))?;

        let time = match cell(4) {
            "" => None,
            t => Some(parse_sheet_time(t).ok_or_else(|| invalid(format!("invalid Time '{t}'")))?),
        };

        Ok(Record::new(
            cell(0),
            cell(1),
            cell(2),
            date,
            time,
            Some(cell(5)),
        ))
    }
}

/// Accept "HH:MM" and the "HH:MM:SS" rendering some spreadsheet locales use.
fn parse_sheet_time(s: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(s, TIME_FMT)
        .or_else(|_| NaiveTime::parse_from_str(s, "%H:%M:%S"))
        .ok()
}

/// The canonical header row as owned strings.
pub fn header_row() -> Vec<String> {
    HEADERS.iter().map(|h| h.to_string()).collect()
}

/// Reject a header row that does not match the canonical one exactly
/// (trailing empty cells are tolerated).
pub fn validate_header(found: &[String]) -> AppResult<()> {
    let mut trimmed: Vec<String> = found.iter().map(|c| c.trim().to_string()).collect();
    while trimmed.last().is_some_and(|c| c.is_empty()) {
        trimmed.pop();
    }

    if trimmed.iter().map(String::as_str).eq(HEADERS.iter().copied()) {
        Ok(())
    } else {
        Err(AppError::HeaderMismatch {
            expected: header_row(),
            found: trimmed,
        })
    }
}

fn is_blank(row: &[String]) -> bool {
    row.iter().all(|c| c.trim().is_empty())
}

/// The header row of `grid`: its first row with any content, together with
/// its 0-based index. `None` when every cell is empty.
pub fn find_header(grid: &[Vec<String>]) -> Option<(usize, &[String])> {
    grid.iter()
        .position(|row| !is_blank(row))
        .map(|i| (i, grid[i].as_slice()))
}

/// Convert a raw value grid (header + data rows) into records.
///
/// An empty grid and a header-only grid both yield an empty vector.
/// Fully blank rows are skipped.
pub fn records_from_grid(grid: &[Vec<String>]) -> AppResult<Vec<Record>> {
    let Some((header_idx, header)) = find_header(grid) else {
        return Ok(Vec::new());
    };

    validate_header(header)?;

    grid.iter()
        .enumerate()
        .skip(header_idx + 1)
        .filter(|(_, row)| !is_blank(row))
        .map(|(i, row)| Record::from_row(row, i + 1))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cells(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn blank_author_defaults_to_unknown() {
        let d = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let r = Record::new("ICU-001", "Ceftriaxone", "1g IV", d, None, Some("   "));
        assert_eq!(r.added_by, UNKNOWN_AUTHOR);

        let r = Record::new("ICU-001", "Ceftriaxone", "1g IV", d, None, None);
        assert_eq!(r.added_by, UNKNOWN_AUTHOR);
    }

    #[test]
    fn to_row_follows_header_order() {
        let r = Record::new(
            "ICU-001",
            "Ceftriaxone",
            "1g IV",
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            NaiveTime::from_hms_opt(8, 0, 0),
            Some("Dr. A"),
        );
        assert_eq!(
            r.to_row(),
            cells(&["ICU-001", "Ceftriaxone", "1g IV", "2024-01-01", "08:00", "Dr. A"])
        );
    }

    #[test]
    fn from_row_pads_missing_trailing_cells() {
        // The service omits trailing empty cells.
        let r = Record::from_row(&cells(&["ICU-002", "Vancomycin", "1g", "2024-02-03"]), 2).unwrap();
        assert_eq!(r.time, None);
        assert_eq!(r.added_by, UNKNOWN_AUTHOR);
    }

    #[test]
    fn from_row_reports_sheet_row_on_bad_date() {
        let err = Record::from_row(&cells(&["ICU-002", "Vancomycin", "1g", "03/02/2024"]), 7)
            .unwrap_err();
        match err {
            AppError::InvalidRow { row, reason } => {
                assert_eq!(row, 7);
                assert!(reason.contains("03/02/2024"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn from_row_rejects_blank_required_cells() {
        let err = Record::from_row(&cells(&["ICU-002", "  ", "1g", "2024-02-03"]), 4).unwrap_err();
        match err {
            AppError::InvalidRow { row, reason } => {
                assert_eq!(row, 4);
                assert!(reason.contains("Antibiotic"));
            }
            other => panic!("unexpected error: {other}"),
        }

        let err = Record::from_row(&cells(&["", "Vancomycin", "1g", "2024-02-03"]), 5).unwrap_err();
        assert!(matches!(err, AppError::InvalidRow { row: 5, .. }));
    }

    #[test]
    fn from_row_accepts_seconds_in_time() {
        let r = Record::from_row(
            &cells(&["ICU-002", "Vancomycin", "1g", "2024-02-03", "08:30:00", "RN"]),
            2,
        )
        .unwrap();
        assert_eq!(r.time, NaiveTime::from_hms_opt(8, 30, 0));
    }

    #[test]
    fn header_mismatch_is_rejected() {
        let err = validate_header(&cells(&["Patient ID", "Antibiotic", "Dosage", "Date"])).unwrap_err();
        assert!(matches!(err, AppError::HeaderMismatch { .. }));

        let err = validate_header(&cells(&[
            "Antibiotic", "PatientId", "Dosage", "Date", "Time", "AddedBy",
        ]))
        .unwrap_err();
        assert!(matches!(err, AppError::HeaderMismatch { .. }));
    }

    #[test]
    fn header_tolerates_trailing_blank_cells() {
        let mut h = header_row();
        h.push(String::new());
        assert!(validate_header(&h).is_ok());
    }

    #[test]
    fn grid_skips_blank_rows_and_keeps_order() {
        let grid = vec![
            header_row(),
            cells(&["A", "Meropenem", "1g", "2024-01-02", "06:00", "RN"]),
            cells(&["", "", ""]),
            cells(&["B", "Cefazolin", "2g", "2024-01-01"]),
        ];
        let records = records_from_grid(&grid).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].patient_id, "A");
        assert_eq!(records[1].patient_id, "B");
    }

    #[test]
    fn leading_blank_rows_before_header_are_skipped() {
        let grid = vec![
            cells(&["", " "]),
            header_row(),
            cells(&["A", "Meropenem", "1g", "2024-01-02"]),
            cells(&["B", "Cefazolin", "2g", "bad"]),
        ];
        assert_eq!(find_header(&grid).map(|(i, _)| i), Some(1));

        match records_from_grid(&grid).unwrap_err() {
            AppError::InvalidRow { row, .. } => assert_eq!(row, 4),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn empty_and_header_only_grids_yield_no_records() {
        assert!(records_from_grid(&[]).unwrap().is_empty());
        assert!(records_from_grid(&[header_row()]).unwrap().is_empty());
    }
}
