use walkers::Position;

use crate::geojson::{Feature, FeatureCollection, Geometry};

/// A single earthquake event from the USGS summary feed.
///
/// Depth is in kilometers as reported by the feed; a negative depth means the
/// hypocenter was resolved above sea level.
#[derive(Debug, Clone, PartialEq)]
pub struct Earthquake {
    pub title: String,
    pub magnitude: f64,
    pub depth_km: f64,
    pub position: Position,
    /// Event time in milliseconds since the Unix epoch, when reported.
    pub time_ms: Option<i64>,
}

impl Earthquake {
    /// Builds an event from one feed feature. Features without point
    /// geometry are not earthquakes in this feed and are skipped.
    pub fn from_feature(feature: &Feature) -> Option<Self> {
        let [lon, lat, depth_km] = match feature.geometry.as_ref()? {
            Geometry::Point { coordinates } => *coordinates,
            _ => return None,
        };

        let properties = feature.properties.clone().unwrap_or_default();

        Some(Self {
            title: properties.title.unwrap_or_default(),
            magnitude: properties.mag.unwrap_or_default(),
            depth_km,
            position: Position::from_lat_lon(lat, lon),
            time_ms: properties.time,
        })
    }

    pub fn from_collection(collection: &FeatureCollection) -> Vec<Self> {
        collection
            .features
            .iter()
            .filter_map(Self::from_feature)
            .collect()
    }
}

/// Minimum and maximum depth over a set of events, or `None` when empty.
pub fn depth_extent(earthquakes: &[Earthquake]) -> Option<(f64, f64)> {
    earthquakes.iter().map(|quake| quake.depth_km).fold(
        None,
        |extent, depth| match extent {
            None => Some((depth, depth)),
            Some((min, max)) => Some((min.min(depth), max.max(depth))),
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geojson::Properties;

    fn point_feature(title: &str, mag: Option<f64>, depth: f64) -> Feature {
        Feature {
            properties: Some(Properties {
                title: Some(title.to_string()),
                mag,
                time: Some(1_724_300_000_000),
            }),
            geometry: Some(Geometry::Point {
                coordinates: [142.3, 38.2, depth],
            }),
        }
    }

    #[test]
    fn test_from_feature_reads_depth_from_third_coordinate() {
        let quake = Earthquake::from_feature(&point_feature("M 5.0", Some(5.0), 33.4)).unwrap();
        assert_eq!(quake.depth_km, 33.4);
        assert_eq!(quake.magnitude, 5.0);
        assert_eq!(quake.position, Position::from_lat_lon(38.2, 142.3));
        assert_eq!(quake.time_ms, Some(1_724_300_000_000));
    }

    #[test]
    fn test_missing_magnitude_defaults_to_zero() {
        let quake = Earthquake::from_feature(&point_feature("M ?", None, 10.0)).unwrap();
        assert_eq!(quake.magnitude, 0.0);
    }

    #[test]
    fn test_non_point_features_are_skipped() {
        let feature = Feature {
            properties: None,
            geometry: Some(Geometry::LineString {
                coordinates: vec![[0.0, 0.0], [1.0, 1.0]],
            }),
        };
        assert!(Earthquake::from_feature(&feature).is_none());

        let no_geometry = Feature {
            properties: None,
            geometry: None,
        };
        assert!(Earthquake::from_feature(&no_geometry).is_none());
    }

    #[test]
    fn test_depth_extent() {
        let quakes: Vec<Earthquake> = [-1.0, 25.0, 105.0]
            .iter()
            .map(|&depth| {
                Earthquake::from_feature(&point_feature("q", Some(1.0), depth)).unwrap()
            })
            .collect();
        assert_eq!(depth_extent(&quakes), Some((-1.0, 105.0)));
        assert_eq!(depth_extent(&[]), None);
    }
}
