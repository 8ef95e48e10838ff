use crate::error::{DashboardError, Result};
use crate::station::{field, parse_coordinate};
use crate::{CROSS_SECTION_CSV, CROSS_SECTION_SITES_CSV};
use csv::ReaderBuilder;
use serde::{Deserialize, Serialize};

/// A single surveyed point on a river cross-section transect.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CrossSectionPoint {
    /// Site name, e.g. "Polavaram"
    pub site: String,
    /// Survey year
    pub year: i32,
    /// Horizontal offset along the transect in meters (may be negative)
    pub reduced_distance: f64,
    /// Bed/bank elevation in meters above the reference datum
    pub elevation: f64,
}

/// Location of a cross-section survey site.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CrossSectionSite {
    pub name: String,
    /// Latitude in decimal degrees
    pub latitude: f64,
    /// Longitude in decimal degrees
    pub longitude: f64,
}

impl CrossSectionPoint {
    /// Get every surveyed point from the embedded CSV.
    pub fn get_cross_section_vector() -> Vec<CrossSectionPoint> {
        if let Ok(p) = CrossSectionPoint::parse_cross_section_csv(CROSS_SECTION_CSV) {
            p
        } else {
            panic!("failed to parse embedded cross-section survey")
        }
    }

    /// Parse a CSV string of survey points.
    ///
    /// Expected CSV columns: SITE, YEAR, REDUCED_DISTANCE, ELEVATION_CGL
    pub fn parse_cross_section_csv(csv_object: &str) -> Result<Vec<CrossSectionPoint>> {
        let mut points = Vec::new();
        let mut rdr = ReaderBuilder::new()
            .has_headers(true)
            .from_reader(csv_object.as_bytes());
        for row in rdr.records() {
            let record = row?;
            let site = field(&record, 0, "SITE")?.to_string();
            let year_str = field(&record, 1, "YEAR")?;
            let year = year_str.parse::<i32>().map_err(|e| {
                DashboardError::InvalidFormat(format!("bad year {:?}: {}", year_str, e))
            })?;
            let reduced_distance = parse_coordinate(field(&record, 2, "REDUCED_DISTANCE")?)?;
            let elevation = parse_coordinate(field(&record, 3, "ELEVATION_CGL")?)?;
            points.push(CrossSectionPoint {
                site,
                year,
                reduced_distance,
                elevation,
            });
        }
        Ok(points)
    }

    /// Points of one (site, year) profile, ordered by reduced distance.
    pub fn lookup(points: &[CrossSectionPoint], site: &str, year: i32) -> Vec<CrossSectionPoint> {
        let mut profile: Vec<CrossSectionPoint> = points
            .iter()
            .filter(|p| p.site == site && p.year == year)
            .cloned()
            .collect();
        profile.sort_by(|a, b| a.reduced_distance.total_cmp(&b.reduced_distance));
        profile
    }

    /// Survey years available for a site, most recent first.
    pub fn survey_years(points: &[CrossSectionPoint], site: &str) -> Vec<i32> {
        let mut years: Vec<i32> = points
            .iter()
            .filter(|p| p.site == site)
            .map(|p| p.year)
            .collect();
        years.sort_unstable_by(|a, b| b.cmp(a));
        years.dedup();
        years
    }
}

impl CrossSectionSite {
    /// Get all survey site locations from the embedded CSV.
    pub fn get_site_vector() -> Vec<CrossSectionSite> {
        if let Ok(s) = CrossSectionSite::parse_site_csv(CROSS_SECTION_SITES_CSV) {
            s
        } else {
            panic!("failed to parse embedded cross-section sites")
        }
    }

    /// Expected CSV columns: SITE, LAT, LONG
    pub fn parse_site_csv(csv_object: &str) -> Result<Vec<CrossSectionSite>> {
        let mut sites = Vec::new();
        let mut rdr = ReaderBuilder::new()
            .has_headers(true)
            .from_reader(csv_object.as_bytes());
        for row in rdr.records() {
            let record = row?;
            sites.push(CrossSectionSite {
                name: field(&record, 0, "SITE")?.to_string(),
                latitude: parse_coordinate(field(&record, 1, "LAT")?)?,
                longitude: parse_coordinate(field(&record, 2, "LONG")?)?,
            });
        }
        Ok(sites)
    }

    pub fn find<'a>(sites: &'a [CrossSectionSite], name: &str) -> Result<&'a CrossSectionSite> {
        sites
            .iter()
            .find(|s| s.name == name)
            .ok_or_else(|| DashboardError::UnknownSite(name.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn is_sorted_by_distance(profile: &[CrossSectionPoint]) -> bool {
        profile
            .windows(2)
            .all(|w| w[0].reduced_distance <= w[1].reduced_distance)
    }

    #[test]
    fn polavaram_2012_profile() {
        let points = CrossSectionPoint::get_cross_section_vector();
        let profile = CrossSectionPoint::lookup(&points, "Polavaram", 2012);
        assert_eq!(profile.len(), 71);
        assert!(is_sorted_by_distance(&profile));
        assert_eq!(profile.first().unwrap().reduced_distance, 0.0);
        assert_eq!(profile.last().unwrap().reduced_distance, 1500.0);
        assert!((profile[0].elevation - 24.985).abs() < 1e-9);
    }

    #[test]
    fn polavaram_2022_profile() {
        let points = CrossSectionPoint::get_cross_section_vector();
        let profile = CrossSectionPoint::lookup(&points, "Polavaram", 2022);
        assert_eq!(profile.len(), 48);
        assert!(is_sorted_by_distance(&profile));
        assert_eq!(profile.first().unwrap().reduced_distance, -166.0);
        assert_eq!(profile.last().unwrap().reduced_distance, 1424.5);
    }

    #[test]
    fn lookup_sorts_unordered_input() {
        let points = vec![
            CrossSectionPoint {
                site: "S".to_string(),
                year: 2000,
                reduced_distance: 30.0,
                elevation: 3.0,
            },
            CrossSectionPoint {
                site: "S".to_string(),
                year: 2000,
                reduced_distance: -10.0,
                elevation: 1.0,
            },
            CrossSectionPoint {
                site: "S".to_string(),
                year: 2001,
                reduced_distance: 0.0,
                elevation: 2.0,
            },
        ];
        let profile = CrossSectionPoint::lookup(&points, "S", 2000);
        let distances: Vec<f64> = profile.iter().map(|p| p.reduced_distance).collect();
        assert_eq!(distances, vec![-10.0, 30.0]);
    }

    #[test]
    fn lookup_missing_year_is_empty() {
        let points = CrossSectionPoint::get_cross_section_vector();
        assert!(CrossSectionPoint::lookup(&points, "Polavaram", 1999).is_empty());
        assert!(CrossSectionPoint::lookup(&points, "Nowhere", 2012).is_empty());
    }

    #[test]
    fn survey_years_most_recent_first() {
        let points = CrossSectionPoint::get_cross_section_vector();
        assert_eq!(
            CrossSectionPoint::survey_years(&points, "Polavaram"),
            vec![2022, 2012]
        );
    }

    #[test]
    fn site_catalog() {
        let sites = CrossSectionSite::get_site_vector();
        assert_eq!(sites.len(), 1);
        let site = CrossSectionSite::find(&sites, "Polavaram").unwrap();
        assert!((site.latitude - 17.25167).abs() < f64::EPSILON);
        assert!(CrossSectionSite::find(&sites, "Nowhere").is_err());
    }
}
