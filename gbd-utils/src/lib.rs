//! Shared utility functions for GBD crates.

/// Date utility functions
pub mod dates {
    use chrono::NaiveDate;

    /// Format a NaiveDate as "YYYY-MM-DD"
    pub fn format_date(date: &NaiveDate) -> String {
        date.format("%Y-%m-%d").to_string()
    }

    /// Number of days in a calendar year.
    pub fn days_in_year(year: i32) -> u32 {
        if NaiveDate::from_ymd_opt(year, 2, 29).is_some() {
            366
        } else {
            365
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn test_format_date_pads_month_and_day() {
            let date = NaiveDate::from_ymd_opt(2020, 6, 5).unwrap();
            assert_eq!(format_date(&date), "2020-06-05");
        }

        #[test]
        fn test_days_in_year() {
            assert_eq!(days_in_year(2015), 365);
            assert_eq!(days_in_year(2016), 366);
            assert_eq!(days_in_year(2000), 366);
            assert_eq!(days_in_year(2100), 365);
        }
    }
}

/// Number formatting for metric cards and info panels
pub mod numbers {
    /// Format with a fixed number of decimals and comma thousands
    /// separators, e.g. `1234.567` -> `"1,234.57"`.
    pub fn format_thousands(value: f64, decimals: usize) -> String {
        if !value.is_finite() {
            return value.to_string();
        }
        let fixed = format!("{:.*}", decimals, value.abs());
        let (int_part, frac_part) = match fixed.split_once('.') {
            Some((i, f)) => (i, Some(f)),
            None => (fixed.as_str(), None),
        };
        let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
        for (i, ch) in int_part.chars().enumerate() {
            if i > 0 && (int_part.len() - i) % 3 == 0 {
                grouped.push(',');
            }
            grouped.push(ch);
        }
        let negative = value < 0.0 && fixed.chars().any(|c| c != '0' && c != '.');
        let sign = if negative { "-" } else { "" };
        match frac_part {
            Some(f) => format!("{}{}.{}", sign, grouped, f),
            None => format!("{}{}", sign, grouped),
        }
    }

    /// Coordinates are displayed with five decimals.
    pub fn format_coordinate(value: f64) -> String {
        format!("{:.5}", value)
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn test_format_thousands() {
            assert_eq!(format_thousands(1234.567, 2), "1,234.57");
            assert_eq!(format_thousands(12.0, 2), "12.00");
            assert_eq!(format_thousands(999.999, 2), "1,000.00");
            assert_eq!(format_thousands(1234567.0, 0), "1,234,567");
            assert_eq!(format_thousands(-4521.5, 1), "-4,521.5");
            assert_eq!(format_thousands(-0.001, 2), "0.00");
        }

        #[test]
        fn test_format_coordinate() {
            assert_eq!(format_coordinate(17.25167), "17.25167");
            assert_eq!(format_coordinate(81.3), "81.30000");
        }
    }
}

/// Series colors for charts
pub mod colors {
    /// Plotly's default qualitative palette; series cycle through it.
    pub const QUALITATIVE: [&str; 10] = [
        "#636EFA", "#EF553B", "#00CC96", "#AB63FA", "#FFA15A", "#19D3F3", "#FF6692", "#B6E880",
        "#FF97FF", "#FECB52",
    ];

    /// Marker color of the selected station on the map
    pub const SELECTED_MARKER: &str = "red";
    /// Marker color of every other station on the map
    pub const DEFAULT_MARKER: &str = "blue";

    pub fn series_color(index: usize) -> &'static str {
        QUALITATIVE[index % QUALITATIVE.len()]
    }

    /// Convert `#RRGGBB` to `rgba(r,g,b,alpha)`.
    pub fn hex_to_rgba(hex: &str, alpha: f64) -> Option<String> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if digits.len() != 6 || !digits.is_ascii() {
            return None;
        }
        let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).ok();
        Some(format!(
            "rgba({},{},{},{})",
            channel(0)?,
            channel(2)?,
            channel(4)?,
            alpha
        ))
    }

}
