//! Synthetic daily discharge series.
//!
//! Each (station, year) series is a yearly sinusoid around a random base
//! flow with Gaussian day-to-day noise, clipped to a plausible band.

use gbd_core::date_range::DateRange;
use gbd_core::discharge::DischargeReading;
use gbd_core::error::{DashboardError, Result};
use gbd_core::station::Station;
use gbd_utils::dates::days_in_year;
use log::info;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rand_distr::StandardNormal;
use std::f64::consts::TAU;
use std::ops::RangeInclusive;

/// Model constants for the discharge signal.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratorParams {
    /// Lower bound of the per-series base flow draw (inclusive)
    pub base_flow_min: f64,
    /// Upper bound of the per-series base flow draw (exclusive)
    pub base_flow_max: f64,
    pub seasonal_amplitude: f64,
    /// Length of one seasonal cycle in days
    pub seasonal_period_days: f64,
    pub noise_std_dev: f64,
    pub min_discharge: f64,
    pub max_discharge: f64,
}

impl Default for GeneratorParams {
    fn default() -> Self {
        Self {
            base_flow_min: 10.0,
            base_flow_max: 20.0,
            seasonal_amplitude: 15.0,
            seasonal_period_days: 365.0,
            noise_std_dev: 3.0,
            min_discharge: 5.0,
            max_discharge: 50.0,
        }
    }
}

/// Random source for generation: seeded when `seed` is given, otherwise
/// drawn from OS entropy.
pub fn seeded_rng(seed: Option<u64>) -> ChaCha8Rng {
    match seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_entropy(),
    }
}

#[derive(Debug, Clone, Default)]
pub struct DischargeGenerator {
    params: GeneratorParams,
}

impl DischargeGenerator {
    pub fn new(params: GeneratorParams) -> Result<Self> {
        let invalid = |msg: String| Err(DashboardError::InvalidFormat(msg));
        if !(params.base_flow_min < params.base_flow_max) {
            return invalid(format!(
                "base flow range {}..{} is empty",
                params.base_flow_min, params.base_flow_max
            ));
        }
        if !(params.min_discharge <= params.max_discharge) {
            return invalid(format!(
                "discharge band {}..{} is empty",
                params.min_discharge, params.max_discharge
            ));
        }
        if !(params.seasonal_period_days > 0.0) || !(params.noise_std_dev >= 0.0) {
            return invalid("seasonal period must be positive and noise non-negative".into());
        }
        Ok(Self { params })
    }

    /// One reading per calendar day of `year`.
    ///
    /// Draws, in order: base flow, phase, then one noise value per day.
    pub fn generate_year<R: Rng>(
        &self,
        station_code: &str,
        year: i32,
        rng: &mut R,
    ) -> Vec<DischargeReading> {
        let Some(days) = DateRange::calendar_year(year) else {
            return Vec::new();
        };
        let p = &self.params;
        let base_flow = rng.gen_range(p.base_flow_min..p.base_flow_max);
        let phase = rng.gen_range(0.0..TAU);

        days.enumerate()
            .map(|(i, date)| {
                let seasonal =
                    p.seasonal_amplitude * (TAU * i as f64 / p.seasonal_period_days + phase).sin();
                let noise: f64 = rng.sample(StandardNormal);
                let discharge = (base_flow + seasonal + noise * p.noise_std_dev)
                    .clamp(p.min_discharge, p.max_discharge);
                DischargeReading::new(station_code, date, discharge)
            })
            .collect()
    }

    /// Readings for every station (catalog order) and every year (ascending).
    pub fn generate_all<R: Rng>(
        &self,
        stations: &[Station],
        years: RangeInclusive<i32>,
        rng: &mut R,
    ) -> Vec<DischargeReading> {
        let days: u32 = years.clone().map(days_in_year).sum();
        let mut readings = Vec::with_capacity(stations.len() * days as usize);
        for station in stations {
            for year in years.clone() {
                readings.extend(self.generate_year(&station.code, year, rng));
            }
        }
        info!(
            "[GBD] generator: {} readings for {} stations, years {}..={}",
            readings.len(),
            stations.len(),
            years.start(),
            years.end()
        );
        readings
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn polavaram() -> Vec<Station> {
        vec![Station {
            code: "AG000C3".to_string(),
            name: "POLAVARAM".to_string(),
            latitude: 17.25167,
            longitude: 81.6525,
        }]
    }

    #[test]
    fn values_stay_in_band() {
        let generator = DischargeGenerator::default();
        let mut rng = seeded_rng(Some(42));
        let stations = Station::get_station_vector();
        let readings = generator.generate_all(&stations, 2015..=2022, &mut rng);
        assert!(readings
            .iter()
            .all(|r| (5.0..=50.0).contains(&r.discharge)));
    }

    #[test]
    fn one_reading_per_calendar_day() {
        let generator = DischargeGenerator::default();
        let mut rng = seeded_rng(Some(1));
        let readings = generator.generate_all(&polavaram(), 2019..=2020, &mut rng);
        let count = |year| readings.iter().filter(|r| r.year == year).count();
        assert_eq!(count(2019), 365);
        assert_eq!(count(2020), 366);

        let dates: Vec<NaiveDate> = readings
            .iter()
            .filter(|r| r.year == 2020)
            .filter_map(|r| r.date())
            .collect();
        assert_eq!(dates.first(), NaiveDate::from_ymd_opt(2020, 1, 1).as_ref());
        assert_eq!(dates.last(), NaiveDate::from_ymd_opt(2020, 12, 31).as_ref());
        assert!(dates.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn full_catalog_row_count() {
        let generator = DischargeGenerator::default();
        let mut rng = seeded_rng(Some(7));
        let stations = Station::get_station_vector();
        let readings = generator.generate_all(&stations, 2015..=2022, &mut rng);
        // 2016 and 2020 are leap years
        assert_eq!(readings.len(), 20 * (6 * 365 + 2 * 366));
    }

    #[test]
    fn every_year_matches_its_calendar_length() {
        let generator = DischargeGenerator::default();
        let mut rng = seeded_rng(Some(11));
        let readings = generator.generate_all(&polavaram(), 2015..=2022, &mut rng);
        for year in 2015..=2022 {
            let count = readings.iter().filter(|r| r.year == year).count();
            assert_eq!(count, days_in_year(year) as usize, "year {}", year);
        }
    }

    #[test]
    fn same_seed_reproduces_series() {
        let generator = DischargeGenerator::default();
        let a = generator.generate_year("AG000C3", 2020, &mut seeded_rng(Some(99)));
        let b = generator.generate_year("AG000C3", 2020, &mut seeded_rng(Some(99)));
        let c = generator.generate_year("AG000C3", 2020, &mut seeded_rng(Some(100)));
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn noiseless_series_follows_sinusoid() {
        let params = GeneratorParams {
            base_flow_min: 25.0,
            base_flow_max: 25.000001,
            noise_std_dev: 0.0,
            ..GeneratorParams::default()
        };
        let generator = DischargeGenerator::new(params).unwrap();
        let readings = generator.generate_year("X", 2021, &mut seeded_rng(Some(3)));
        let max = readings.iter().map(|r| r.discharge).fold(f64::MIN, f64::max);
        let min = readings.iter().map(|r| r.discharge).fold(f64::MAX, f64::min);
        assert!((max - 40.0).abs() < 0.01);
        assert!((min - 10.0).abs() < 0.01);
    }

    #[test]
    fn rejects_empty_ranges() {
        let params = GeneratorParams {
            base_flow_min: 20.0,
            base_flow_max: 10.0,
            ..GeneratorParams::default()
        };
        assert!(DischargeGenerator::new(params).is_err());
        let params = GeneratorParams {
            min_discharge: 60.0,
            ..GeneratorParams::default()
        };
        assert!(DischargeGenerator::new(params).is_err());
    }
}
