use crate::models::record::Record;

pub struct ListLogic;

impl ListLogic {
    /// Keep only the records of `patient` (exact match after trimming).
    pub fn filter_by_patient(records: Vec<Record>, patient: Option<&str>) -> Vec<Record> {
        match patient.map(str::trim).filter(|p| !p.is_empty()) {
            Some(p) => records.into_iter().filter(|r| r.patient_id == p).collect(),
            None => records,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn filter_keeps_matching_patient_in_order() {
        let d = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let records = vec![
            Record::new("A", "Meropenem", "1g", d, None, None),
            Record::new("B", "Cefazolin", "2g", d, None, None),
            Record::new("A", "Vancomycin", "1g", d, None, None),
        ];

        let only_a = ListLogic::filter_by_patient(records.clone(), Some(" A "));
        assert_eq!(only_a.len(), 2);
        assert_eq!(only_a[1].antibiotic, "Vancomycin");

        assert_eq!(ListLogic::filter_by_patient(records, None).len(), 3);
    }
}
