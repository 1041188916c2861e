// src/export/logic.rs

use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::model::RecordExport;
use crate::export::xlsx::export_xlsx;
use crate::models::record::Record;
use crate::ui::messages::warning;
use std::path::Path;

/// High-level export of the records currently in the worksheet.
pub struct ExportLogic;

impl ExportLogic {
    /// Write `records` to `file` in the chosen format.
    ///
    /// `file` must be an absolute path; an existing file is only replaced
    /// with `force` or after confirmation.
    pub fn export(
        records: &[Record],
        format: ExportFormat,
        file: &str,
        force: bool,
    ) -> AppResult<()> {
        let path = Path::new(file);

        if !path.is_absolute() {
            return Err(AppError::Export(format!(
                "output file path must be absolute: {file}"
            )));
        }

        if records.is_empty() {
            warning("No records to export.");
            return Ok(());
        }

        ensure_writable(path, force)?;

        let rows: Vec<RecordExport> = records.iter().map(RecordExport::from).collect();

        match format {
            ExportFormat::Csv => export_csv(&rows, path),
            ExportFormat::Json => export_json(&rows, path),
            ExportFormat::Xlsx => export_xlsx(&rows, path),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveTime};
    use std::fs;

    fn records() -> Vec<Record> {
        vec![
            Record::new(
                "ICU-001",
                "Ceftriaxone",
                "1g IV",
                NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
                NaiveTime::from_hms_opt(8, 0, 0),
                Some("Dr. A"),
            ),
            Record::new(
                "ICU-002",
                "Vancomycin",
                "1.5g",
                NaiveDate::from_ymd_opt(2024, 1, 2).unwrap(),
                None,
                None,
            ),
        ]
    }

    #[test]
    fn relative_path_is_rejected() {
        let err = ExportLogic::export(&records(), ExportFormat::Csv, "out.csv", true).unwrap_err();
        assert!(matches!(err, AppError::Export(_)));
    }

    #[test]
    fn csv_uses_sheet_header() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("abx.csv");
        let out_str = out.to_string_lossy().to_string();

        ExportLogic::export(&records(), ExportFormat::Csv, &out_str, true).unwrap();

        let content = fs::read_to_string(&out).unwrap();
        let mut lines = content.lines();
        assert_eq!(lines.next(), Some("PatientId,Antibiotic,Dosage,Date,Time,AddedBy"));
        assert_eq!(lines.next(), Some("ICU-001,Ceftriaxone,1g IV,2024-01-01,08:00,Dr. A"));
        assert_eq!(lines.next(), Some("ICU-002,Vancomycin,1.5g,2024-01-02,,Unknown"));
    }

    #[test]
    fn json_contains_every_record() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("abx.json");
        let out_str = out.to_string_lossy().to_string();

        ExportLogic::export(&records(), ExportFormat::Json, &out_str, true).unwrap();

        let parsed: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&out).unwrap()).unwrap();
        let arr = parsed.as_array().unwrap();
        assert_eq!(arr.len(), 2);
        assert_eq!(arr[0]["PatientId"], "ICU-001");
        assert_eq!(arr[1]["AddedBy"], "Unknown");
    }

    #[test]
    fn xlsx_file_is_written() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("abx.xlsx");
        let out_str = out.to_string_lossy().to_string();

        ExportLogic::export(&records(), ExportFormat::Xlsx, &out_str, true).unwrap();
        assert!(fs::metadata(&out).unwrap().len() > 0);
    }

    #[test]
    fn empty_table_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("none.csv");
        let out_str = out.to_string_lossy().to_string();

        ExportLogic::export(&[], ExportFormat::Csv, &out_str, true).unwrap();
        assert!(!out.exists());
    }
}
