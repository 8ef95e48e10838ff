//! SQL schema for the in-memory tables.
//!
//! Applied as a single batch when the database is created.

/// Returns the full SQL schema as a single batch string.
///
/// - `stations` - gauge station catalog; `position` keeps catalog order
/// - `discharge` - one generated reading per (station, calendar date)
/// - `cross_section_sites` - survey site locations
/// - `cross_section_points` - surveyed (distance, elevation) pairs; `id`
///   keeps survey table order
pub fn create_schema() -> &'static str {
    r#"
    CREATE TABLE IF NOT EXISTS stations (
        code TEXT PRIMARY KEY,
        name TEXT NOT NULL,
        latitude REAL NOT NULL,
        longitude REAL NOT NULL,
        position INTEGER NOT NULL
    );

    CREATE TABLE IF NOT EXISTS discharge (
        station_code TEXT NOT NULL,
        year INTEGER NOT NULL,
        month INTEGER NOT NULL,
        day INTEGER NOT NULL,
        discharge REAL NOT NULL,
        PRIMARY KEY (station_code, year, month, day)
    );
    CREATE INDEX IF NOT EXISTS idx_discharge_year ON discharge(year);

    CREATE TABLE IF NOT EXISTS cross_section_sites (
        name TEXT PRIMARY KEY,
        latitude REAL NOT NULL,
        longitude REAL NOT NULL
    );

    CREATE TABLE IF NOT EXISTS cross_section_points (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        site TEXT NOT NULL,
        year INTEGER NOT NULL,
        reduced_distance REAL NOT NULL,
        elevation REAL NOT NULL
    );
    CREATE INDEX IF NOT EXISTS idx_xs_site_year ON cross_section_points(site, year);
    "#
}
