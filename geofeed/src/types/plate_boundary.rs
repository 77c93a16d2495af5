use walkers::Position;

use crate::geojson::{Feature, FeatureCollection, Geometry};

/// One tectonic plate boundary from the PB2002 dataset, reduced to the
/// polylines the map draws. Properties are not consumed.
#[derive(Debug, Clone, PartialEq)]
pub struct PlateBoundary {
    pub polylines: Vec<Vec<Position>>,
}

impl PlateBoundary {
    /// Builds a boundary from one feed feature. Point features carry no
    /// drawable outline and are skipped; polygons contribute their rings.
    pub fn from_feature(feature: &Feature) -> Option<Self> {
        let polylines = match feature.geometry.as_ref()? {
            Geometry::Point { .. } => return None,
            Geometry::LineString { coordinates } => vec![to_polyline(coordinates)],
            Geometry::MultiLineString { coordinates } | Geometry::Polygon { coordinates } => {
                coordinates.iter().map(|line| to_polyline(line)).collect()
            }
        };

        Some(Self { polylines })
    }

    pub fn from_collection(collection: &FeatureCollection) -> Vec<Self> {
        collection
            .features
            .iter()
            .filter_map(Self::from_feature)
            .collect()
    }
}

fn to_polyline(coordinates: &[[f64; 2]]) -> Vec<Position> {
    coordinates
        .iter()
        .map(|&[lon, lat]| Position::from_lat_lon(lat, lon))
        .collect()
}
