use chrono::NaiveDate;

/// A date range iterator that yields each date from the start date
/// through the end date (inclusive).
#[derive(Clone, Eq, PartialEq, Copy, Debug)]
pub struct DateRange(pub NaiveDate, pub NaiveDate);

impl DateRange {
    /// Jan 1 through Dec 31 of `year`.
    pub fn calendar_year(year: i32) -> Option<DateRange> {
        Some(DateRange(
            NaiveDate::from_ymd_opt(year, 1, 1)?,
            NaiveDate::from_ymd_opt(year, 12, 31)?,
        ))
    }
}

impl Iterator for DateRange {
    type Item = NaiveDate;
    fn next(&mut self) -> Option<Self::Item> {
        if self.0 > self.1 {
            return None;
        }
        let current = self.0;
        match current.succ_opt() {
            Some(next) => self.0 = next,
            // NaiveDate::MAX has no successor; close the range behind it.
            None => {
                if let Some(prev) = current.pred_opt() {
                    self.1 = prev;
                }
            }
        }
        Some(current)
    }
}

#[cfg(test)]
mod tests {
    use super::DateRange;
    use chrono::NaiveDate;

    #[test]
    fn test_date_range_iteration() {
        let start = NaiveDate::from_ymd_opt(2022, 1, 1).unwrap();
        let end = NaiveDate::from_ymd_opt(2022, 1, 5).unwrap();
        let dates: Vec<NaiveDate> = DateRange(start, end).collect();
        assert_eq!(dates.len(), 5);
        assert_eq!(dates[0], start);
        assert_eq!(dates[4], end);
    }

    #[test]
    fn test_date_range_empty() {
        let start = NaiveDate::from_ymd_opt(2022, 3, 15).unwrap();
        let end = NaiveDate::from_ymd_opt(2022, 3, 14).unwrap();
        assert_eq!(DateRange(start, end).count(), 0);
    }

    #[test]
    fn calendar_year_lengths() {
        assert_eq!(DateRange::calendar_year(2019).unwrap().count(), 365);
        assert_eq!(DateRange::calendar_year(2020).unwrap().count(), 366);
    }

    #[test]
    fn range_ending_at_max_date_terminates() {
        let dates: Vec<NaiveDate> = DateRange(NaiveDate::MAX, NaiveDate::MAX).collect();
        assert_eq!(dates, vec![NaiveDate::MAX]);
    }
}
