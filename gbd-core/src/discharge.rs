use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// One synthetic daily discharge reading at a gauge station.
///
/// Discharge is in cubic meters per second (m³/s).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DischargeReading {
    pub station_code: String,
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub discharge: f64,
}

impl DischargeReading {
    pub fn new(station_code: &str, date: NaiveDate, discharge: f64) -> Self {
        Self {
            station_code: station_code.to_string(),
            year: date.year(),
            month: date.month(),
            day: date.day(),
            discharge,
        }
    }

    /// Calendar date of the reading, `None` if the parts do not form a date.
    pub fn date(&self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, self.day)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reading_keeps_calendar_parts() {
        let date = NaiveDate::from_ymd_opt(2020, 2, 29).unwrap();
        let reading = DischargeReading::new("AG000C3", date, 12.5);
        assert_eq!(reading.year, 2020);
        assert_eq!(reading.month, 2);
        assert_eq!(reading.day, 29);
        assert_eq!(reading.date(), Some(date));
    }

    #[test]
    fn invalid_parts_have_no_date() {
        let reading = DischargeReading {
            station_code: "AG000C3".to_string(),
            year: 2021,
            month: 2,
            day: 29,
            discharge: 10.0,
        };
        assert!(reading.date().is_none());
    }
}
