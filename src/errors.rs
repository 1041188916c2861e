//! Unified application error type.
//! All modules (credentials, sheets, core, cli) return AppError so every
//! failure reaches the terminal through the same rendering path.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Configuration / secrets
    // ---------------------------
    #[error("Missing configuration: {0}")]
    ConfigMissing(String),

    #[error("Invalid format: {0}")]
    InvalidFormat(String),

    #[error("Configuration error: {0}")]
    Config(String),

    // ---------------------------
    // Remote spreadsheet service
    // ---------------------------
    #[error("Authentication failed: {0}")]
    Auth(String),

    #[error("Spreadsheet not found: {0}")]
    SpreadsheetNotFound(String),

    #[error("Worksheet '{name}' not found (available: {})", available.join(", "))]
    WorksheetNotFound { name: String, available: Vec<String> },

    #[error("Spreadsheet service error: {0}")]
    RemoteService(String),

    #[error("Unexpected error: {0}")]
    Unknown(String),

    // ---------------------------
    // Worksheet content
    // ---------------------------
    #[error("Header row mismatch: expected [{}], found [{}]", expected.join(", "), found.join(", "))]
    HeaderMismatch {
        expected: Vec<String>,
        found: Vec<String>,
    },

    #[error("Invalid data in sheet row {row}: {reason}")]
    InvalidRow { row: usize, reason: String },

    // ---------------------------
    // Form / parsing errors
    // ---------------------------
    #[error("Invalid date format: {0} (expected YYYY-MM-DD)")]
    InvalidDate(String),

    #[error("Invalid time format: {0} (expected HH:MM)")]
    InvalidTime(String),

    #[error("Required field is empty: {0}")]
    MissingField(&'static str),

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),
}

impl AppError {
    /// Remediation hint printed below the error message, if any.
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            AppError::ConfigMissing(_) => Some(
                "Add `gcp_service_account` and `sheets.url` to the secrets file (see `abxlog config --create`).",
            ),
            AppError::InvalidFormat(_) => Some(
                "Use a URL like https://docs.google.com/spreadsheets/d/<ID>/edit or the bare spreadsheet ID.",
            ),
            AppError::Auth(_) => Some(
                "Check the service account key: it may be malformed, revoked, or the network may be unreachable.",
            ),
            AppError::SpreadsheetNotFound(_) => Some(
                "Verify the spreadsheet ID and share the sheet with the service account email (`abxlog status`).",
            ),
            AppError::WorksheetNotFound { .. } => {
                Some("Rename the worksheet tab or pass --worksheet with one of the available names.")
            }
            AppError::RemoteService(_) => {
                Some("The spreadsheet service reported a transient fault; try again in a moment.")
            }
            AppError::HeaderMismatch { .. } => Some(
                "The first row must be exactly: PatientId, Antibiotic, Dosage, Date, Time, AddedBy.",
            ),
            AppError::MissingField(_) => Some("Fields PatientId, Antibiotic and Dosage are required."),
            _ => None,
        }
    }
}

pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn worksheet_not_found_lists_available_names() {
        let err = AppError::WorksheetNotFound {
            name: "Antibiotics".into(),
            available: vec!["Sheet1".into(), "Archive".into()],
        };
        assert_eq!(
            err.to_string(),
            "Worksheet 'Antibiotics' not found (available: Sheet1, Archive)"
        );
        assert!(err.hint().is_some());
    }

    #[test]
    fn unknown_error_keeps_raw_message_and_has_no_hint() {
        let err = AppError::Unknown("teapot".into());
        assert_eq!(err.to_string(), "Unexpected error: teapot");
        assert!(err.hint().is_none());
    }
}
