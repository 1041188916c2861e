// src/export/model.rs

use crate::models::record::{HEADERS, Record};
use serde::Serialize;

/// Flat, string-only view of a record; field names match the sheet header.
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct RecordExport {
    #[serde(rename = "PatientId")]
    pub patient_id: String,
    #[serde(rename = "Antibiotic")]
    pub antibiotic: String,
    #[serde(rename = "Dosage")]
    pub dosage: String,
    #[serde(rename = "Date")]
    pub date: String,
    #[serde(rename = "Time")]
    pub time: String,
    #[serde(rename = "AddedBy")]
    pub added_by: String,
}

impl From<&Record> for RecordExport {
    fn from(r: &Record) -> Self {
        Self {
            patient_id: r.patient_id.clone(),
            antibiotic: r.antibiotic.clone(),
            dosage: r.dosage.clone(),
            date: r.date_str(),
            time: r.time_str(),
            added_by: r.added_by.clone(),
        }
    }
}

/// Header for CSV / XLSX
pub(crate) fn get_headers() -> Vec<&'static str> {
    HEADERS.to_vec()
}

pub(crate) fn record_to_row(r: &RecordExport) -> Vec<String> {
    vec![
        r.patient_id.clone(),
        r.antibiotic.clone(),
        r.dosage.clone(),
        r.date.clone(),
        r.time.clone(),
        r.added_by.clone(),
    ]
}
