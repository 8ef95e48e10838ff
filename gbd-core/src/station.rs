use crate::error::{DashboardError, Result};
use crate::STATIONS_CSV;
use csv::ReaderBuilder;
use serde::{Deserialize, Serialize};

/// Separator between code and name in selector labels ("AG000C3 - POLAVARAM").
pub const LABEL_SEPARATOR: &str = " - ";

/// Represents a discharge gauge station in the Godavari basin.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct Station {
    /// CWC station code (e.g., "AG000C3" for Polavaram)
    pub code: String,
    /// Display name of the station
    pub name: String,
    /// Latitude in decimal degrees
    pub latitude: f64,
    /// Longitude in decimal degrees
    pub longitude: f64,
}

impl Station {
    /// Get the full station catalog from the embedded CSV, in catalog order.
    pub fn get_station_vector() -> Vec<Station> {
        if let Ok(s) = Station::parse_station_csv(STATIONS_CSV) {
            s
        } else {
            panic!("failed to parse embedded station catalog")
        }
    }

    /// Parse a CSV string of station data into a vector of Stations.
    ///
    /// Expected CSV columns: STATION_CO, NAME, LAT, LONG
    pub fn parse_station_csv(csv_object: &str) -> Result<Vec<Station>> {
        let mut station_list: Vec<Station> = Vec::new();
        let mut rdr = ReaderBuilder::new()
            .delimiter(b',')
            .has_headers(true)
            .from_reader(csv_object.as_bytes());
        for row in rdr.records() {
            let record = row?;
            let code = field(&record, 0, "STATION_CO")?.to_string();
            let name = field(&record, 1, "NAME")?.to_string();
            let latitude = parse_coordinate(field(&record, 2, "LAT")?)?;
            let longitude = parse_coordinate(field(&record, 3, "LONG")?)?;
            station_list.push(Station {
                code,
                name,
                latitude,
                longitude,
            });
        }
        Ok(station_list)
    }

    /// Look up a station by code.
    pub fn find<'a>(stations: &'a [Station], code: &str) -> Result<&'a Station> {
        stations
            .iter()
            .find(|s| s.code == code)
            .ok_or_else(|| DashboardError::UnknownStation(code.to_string()))
    }

    /// Selector and popup label, e.g. "AG000C3 - POLAVARAM".
    pub fn label(&self) -> String {
        format!("{}{}{}", self.code, LABEL_SEPARATOR, self.name)
    }

    /// Recover the station code from a selector label.
    pub fn code_from_label(label: &str) -> &str {
        label
            .split(LABEL_SEPARATOR)
            .next()
            .unwrap_or(label)
            .trim()
    }
}

pub(crate) fn field<'r>(record: &'r csv::StringRecord, idx: usize, name: &str) -> Result<&'r str> {
    record
        .get(idx)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .ok_or_else(|| DashboardError::InvalidFormat(format!("missing {} in row {:?}", name, record)))
}

pub(crate) fn parse_coordinate(ess: &str) -> Result<f64> {
    ess.parse::<f64>()
        .map_err(|e| DashboardError::InvalidFormat(format!("bad number {:?}: {}", ess, e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_station_vector() {
        let stations = Station::get_station_vector();
        assert_eq!(stations.len(), 20);
        assert_eq!(stations[0].code, "AGH40A4");
        assert_eq!(stations[0].name, "ASHTI");
        assert_eq!(stations[19].code, "AGR10C6");
    }

    #[test]
    fn station_codes_are_unique() {
        let stations = Station::get_station_vector();
        let mut codes: Vec<&str> = stations.iter().map(|s| s.code.as_str()).collect();
        codes.sort();
        codes.dedup();
        assert_eq!(codes.len(), stations.len());
    }

    #[test]
    fn find_polavaram() {
        let stations = Station::get_station_vector();
        let polavaram = Station::find(&stations, "AG000C3").unwrap();
        assert_eq!(polavaram.name, "POLAVARAM");
        assert!((polavaram.latitude - 17.25167).abs() < f64::EPSILON);
        assert!((polavaram.longitude - 81.6525).abs() < f64::EPSILON);
    }

    #[test]
    fn find_unknown_station() {
        let stations = Station::get_station_vector();
        let err = Station::find(&stations, "NOPE").unwrap_err();
        assert!(matches!(err, DashboardError::UnknownStation(code) if code == "NOPE"));
    }

    #[test]
    fn label_round_trip() {
        let stations = Station::get_station_vector();
        let label = stations[13].label();
        assert_eq!(label, "AG000C3 - POLAVARAM");
        assert_eq!(Station::code_from_label(&label), "AG000C3");
        assert_eq!(Station::code_from_label("AG000C3"), "AG000C3");
    }

    #[test]
    fn test_parse_station_csv_rejects_bad_latitude() {
        let csv_data = "STATION_CO,NAME,LAT,LONG\nX1,Somewhere,north,79.0\n";
        let err = Station::parse_station_csv(csv_data).unwrap_err();
        assert!(matches!(err, DashboardError::InvalidFormat(_)));
    }

    #[test]
    fn test_parse_empty_csv() {
        let stations = Station::parse_station_csv("STATION_CO,NAME,LAT,LONG\n").unwrap();
        assert!(stations.is_empty());
    }
}
