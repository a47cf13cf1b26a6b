//! Wire format for calendar dates accepted on input.
//!
//! Input is always `MM/DD/YYYY`; output uses chrono's ISO form (`YYYY-MM-DD`).

use chrono::NaiveDate;

use crate::errors::ModelError;

pub const INPUT_FORMAT: &str = "%m/%d/%Y";

pub fn parse_date(raw: &str) -> Result<NaiveDate, ModelError> {
    NaiveDate::parse_from_str(raw.trim(), INPUT_FORMAT).map_err(|_| ModelError::InvalidDate(raw.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_month_first() {
        let d = parse_date("01/05/2023").unwrap();
        assert_eq!(d, NaiveDate::from_ymd_opt(2023, 1, 5).unwrap());
    }

    #[test]
    fn accepts_unpadded_fields() {
        let d = parse_date("2/3/2024").unwrap();
        assert_eq!(d, NaiveDate::from_ymd_opt(2024, 2, 3).unwrap());
    }

    #[test]
    fn rejects_iso_and_impossible_dates() {
        assert!(matches!(parse_date("2023-01-05"), Err(ModelError::InvalidDate(_))));
        assert!(matches!(parse_date("13/01/2023"), Err(ModelError::InvalidDate(_))));
        assert!(matches!(parse_date("02/30/2023"), Err(ModelError::InvalidDate(_))));
        assert!(matches!(parse_date(""), Err(ModelError::InvalidDate(_))));
    }
}
