use super::record::Record;
use chrono::NaiveDate;
use std::collections::HashSet;

/// Headline metrics shown above the records table.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Summary {
    pub count: usize,
    pub distinct_antibiotics: usize,
    pub distinct_patients: usize,
    pub latest_date: Option<NaiveDate>,
}

impl Summary {
    pub fn from_records(records: &[Record]) -> Self {
        let antibiotics: HashSet<&str> = records.iter().map(|r| r.antibiotic.trim()).collect();
        let patients: HashSet<&str> = records.iter().map(|r| r.patient_id.trim()).collect();

        Self {
            count: records.len(),
            distinct_antibiotics: antibiotics.len(),
            distinct_patients: patients.len(),
            latest_date: records.iter().map(|r| r.date).max(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rec(patient: &str, abx: &str, ymd: (i32, u32, u32)) -> Record {
        let d = NaiveDate::from_ymd_opt(ymd.0, ymd.1, ymd.2).unwrap();
        Record::new(patient, abx, "1g", d, None, None)
    }

    #[test]
    fn empty_table_has_no_latest_date() {
        let s = Summary::from_records(&[]);
        assert_eq!(s, Summary::default());
    }

    #[test]
    fn counts_distinct_values_and_latest_date() {
        let records = vec![
            rec("ICU-001", "Ceftriaxone", (2024, 1, 1)),
            rec("ICU-001", "Vancomycin", (2024, 1, 3)),
            rec("ICU-002", "Ceftriaxone", (2024, 1, 2)),
            rec("ICU-002", "Ceftriaxone", (2024, 1, 2)),
        ];
        let s = Summary::from_records(&records);
        assert_eq!(s.count, 4);
        assert_eq!(s.distinct_antibiotics, 2);
        assert_eq!(s.distinct_patients, 2);
        assert_eq!(s.latest_date, NaiveDate::from_ymd_opt(2024, 1, 3));
    }
}
