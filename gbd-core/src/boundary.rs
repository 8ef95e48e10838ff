//! Basin boundary overlay loading.
//!
//! The boundary is an optional GeoJSON FeatureCollection of Polygon or
//! MultiPolygon features. A missing or unreadable file never stops the
//! dashboard; it yields [`BoundaryStatus::Unavailable`] with a warning and
//! the map is drawn without the overlay.

use crate::error::{DashboardError, Result};
use log::{info, warn};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Default boundary file name, resolved against the working directory.
pub const DEFAULT_BOUNDARY_FILE: &str = "Godavari_Geojon.geojson";

/// Polygon geometry of a boundary feature.
///
/// Positions are kept as `Vec<f64>` so that 3D positions (with altitude)
/// are accepted as well.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "coordinates")]
pub enum BoundaryGeometry {
    Polygon(Vec<Vec<Vec<f64>>>),
    MultiPolygon(Vec<Vec<Vec<Vec<f64>>>>),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoundaryFeature {
    pub geometry: Option<BoundaryGeometry>,
    #[serde(default)]
    pub properties: Option<serde_json::Map<String, serde_json::Value>>,
}

#[derive(Deserialize)]
struct FeatureCollection {
    #[serde(rename = "type")]
    kind: String,
    features: Vec<BoundaryFeature>,
}

/// A parsed basin boundary together with its original GeoJSON text.
#[derive(Debug, Clone, PartialEq)]
pub struct BasinBoundary {
    pub features: Vec<BoundaryFeature>,
    raw: String,
}

impl BasinBoundary {
    /// The GeoJSON text as read, for handing to the map engine.
    pub fn raw_json(&self) -> &str {
        &self.raw
    }

    pub fn feature_count(&self) -> usize {
        self.features.len()
    }

    /// Bounding box as `(min_lon, min_lat, max_lon, max_lat)`.
    pub fn bounds(&self) -> Option<(f64, f64, f64, f64)> {
        let mut bounds: Option<(f64, f64, f64, f64)> = None;
        let mut extend = |position: &Vec<f64>| {
            if let [lon, lat, ..] = position.as_slice() {
                bounds = Some(match bounds {
                    None => (*lon, *lat, *lon, *lat),
                    Some((x0, y0, x1, y1)) => (x0.min(*lon), y0.min(*lat), x1.max(*lon), y1.max(*lat)),
                });
            }
        };
        for geometry in self.features.iter().filter_map(|f| f.geometry.as_ref()) {
            match geometry {
                BoundaryGeometry::Polygon(rings) => rings.iter().flatten().for_each(&mut extend),
                BoundaryGeometry::MultiPolygon(polygons) => {
                    polygons.iter().flatten().flatten().for_each(&mut extend)
                }
            }
        }
        bounds
    }
}

/// Outcome of loading the boundary resource.
#[derive(Debug, Clone, PartialEq)]
pub enum BoundaryStatus {
    Available(BasinBoundary),
    /// The overlay is omitted; `warning` is shown to the user.
    Unavailable { warning: String },
}

impl BoundaryStatus {
    pub fn boundary(&self) -> Option<&BasinBoundary> {
        match self {
            BoundaryStatus::Available(b) => Some(b),
            BoundaryStatus::Unavailable { .. } => None,
        }
    }

    pub fn warning(&self) -> Option<&str> {
        match self {
            BoundaryStatus::Available(_) => None,
            BoundaryStatus::Unavailable { warning } => Some(warning),
        }
    }
}

impl From<Result<BasinBoundary>> for BoundaryStatus {
    fn from(result: Result<BasinBoundary>) -> Self {
        match result {
            Ok(boundary) => BoundaryStatus::Available(boundary),
            Err(e) => {
                warn!("[GBD] boundary: {}", e);
                BoundaryStatus::Unavailable {
                    warning: e.to_string(),
                }
            }
        }
    }
}

/// Parse GeoJSON text into a boundary. `source` is only used in errors.
pub fn parse_boundary(text: &str, source: &Path) -> Result<BasinBoundary> {
    let malformed = |reason: String| DashboardError::MalformedResource {
        path: source.to_path_buf(),
        reason,
    };
    let collection: FeatureCollection =
        serde_json::from_str(text).map_err(|e| malformed(e.to_string()))?;
    if collection.kind != "FeatureCollection" {
        return Err(malformed(format!(
            "expected a FeatureCollection, found {}",
            collection.kind
        )));
    }
    Ok(BasinBoundary {
        features: collection.features,
        raw: text.to_string(),
    })
}

/// Read and parse the boundary file, reporting absence as `MissingResource`.
pub fn try_load_boundary(path: impl AsRef<Path>) -> Result<BasinBoundary> {
    let path = path.as_ref();
    let text = match std::fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(DashboardError::MissingResource {
                path: path.to_path_buf(),
            })
        }
        Err(e) => {
            return Err(DashboardError::MalformedResource {
                path: path.to_path_buf(),
                reason: e.to_string(),
            })
        }
    };
    let boundary = parse_boundary(&text, path)?;
    info!(
        "[GBD] boundary: Loaded {} features from {}",
        boundary.feature_count(),
        path.display()
    );
    Ok(boundary)
}

/// Load the boundary file; any failure degrades to `Unavailable`.
pub fn load_boundary(path: impl AsRef<Path>) -> BoundaryStatus {
    try_load_boundary(path).into()
}

/// Boundary text embedded at build time; empty text means the file was
/// absent when the binary was built.
pub fn boundary_from_embedded(text: &str, name: &str) -> BoundaryStatus {
    if text.trim().is_empty() {
        let missing: Result<BasinBoundary> = Err(DashboardError::MissingResource { path: name.into() });
        return missing.into();
    }
    parse_boundary(text, Path::new(name)).into()
}
