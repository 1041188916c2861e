//! Terminal rendering of records, summary metrics and diagnostics.

use crate::models::record::{HEADERS, Record};
use crate::models::summary::Summary;
use crate::utils::colors::{CYAN, GREY, RESET, YELLOW, colorize_optional};
use crate::utils::table::Table;

/// Records as an aligned text table, in worksheet order.
pub fn records_table(records: &[Record]) -> String {
    let mut table = Table::with_headers(&HEADERS);

    for r in records {
        table.add_row(vec![
            r.patient_id.clone(),
            r.antibiotic.clone(),
            r.dosage.clone(),
            r.date_str(),
            colorize_optional(&r.time_str()),
            r.added_by.clone(),
        ]);
    }

    table.render()
}

pub fn summary_block(summary: &Summary) -> String {
    let latest = summary
        .latest_date
        .map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_else(|| format!("{GREY}--{RESET}"));

    format!(
        "{CYAN}• Total entries:{RESET} {}\n\
         {CYAN}• Antibiotics:{RESET} {}\n\
         {CYAN}• Patients:{RESET} {}\n\
         {CYAN}• Most recent:{RESET} {}\n",
        summary.count, summary.distinct_antibiotics, summary.distinct_patients, latest
    )
}

/// One `label: value` diagnostic line; missing values are shown in grey.
pub fn diagnostic_line(label: &str, value: Option<&str>) -> String {
    match value {
        Some(v) => format!("{CYAN}• {label}:{RESET} {YELLOW}{v}{RESET}"),
        None => format!("{CYAN}• {label}:{RESET} {GREY}--{RESET}"),
    }
}

pub fn print_records(records: &[Record]) {
    print!("{}", records_table(records));
}

pub fn print_summary(summary: &Summary) {
    print!("{}", summary_block(summary));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::formatting::strip_ansi;
    use chrono::{NaiveDate, NaiveTime};

    #[test]
    fn table_lists_records_under_canonical_headers() {
        let r = Record::new(
            "ICU-001",
            "Ceftriaxone",
            "1g IV",
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            NaiveTime::from_hms_opt(8, 0, 0),
            Some("Dr. A"),
        );
        let out = strip_ansi(&records_table(&[r]));
        let lines: Vec<&str> = out.lines().collect();

        assert!(lines[0].starts_with("PatientId"));
        assert!(lines[0].ends_with("AddedBy"));
        assert!(lines[2].contains("ICU-001"));
        assert!(lines[2].contains("2024-01-01"));
        assert!(lines[2].contains("08:00"));
        assert!(lines[2].ends_with("Dr. A"));
    }

    #[test]
    fn empty_summary_shows_placeholder_date() {
        let out = strip_ansi(&summary_block(&Summary::default()));
        assert!(out.contains("Total entries: 0"));
        assert!(out.contains("Most recent: --"));
    }
}
