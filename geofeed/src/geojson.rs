//! Minimal serde model for the slices of GeoJSON the two feeds actually use.

use serde::Deserialize;

/// A GeoJSON feature collection.
#[derive(Debug, Clone, Deserialize)]
pub struct FeatureCollection {
    #[serde(default)]
    pub features: Vec<Feature>,
}

/// A single GeoJSON feature. `properties` and `geometry` may be null.
#[derive(Debug, Clone, Deserialize)]
pub struct Feature {
    #[serde(default)]
    pub properties: Option<Properties>,
    #[serde(default)]
    pub geometry: Option<Geometry>,
}

/// The feature properties consumed by the map; everything else is ignored.
/// The USGS feed occasionally serves null magnitudes and titles.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Properties {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub mag: Option<f64>,
    /// Event time in milliseconds since the Unix epoch.
    #[serde(default)]
    pub time: Option<i64>,
}

/// The geometry kinds appearing in the two feeds. Earthquake points carry
/// `[lon, lat, depth_km]`; plate boundaries are lines of `[lon, lat]`.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type")]
pub enum Geometry {
    Point { coordinates: [f64; 3] },
    LineString { coordinates: Vec<[f64; 2]> },
    MultiLineString { coordinates: Vec<Vec<[f64; 2]>> },
    Polygon { coordinates: Vec<Vec<[f64; 2]>> },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_usgs_shaped_collection() {
        let raw = r#"{
            "type": "FeatureCollection",
            "features": [
                {
                    "type": "Feature",
                    "properties": {"title": "M 5.0 - somewhere", "mag": 5.0, "time": 1724300000000},
                    "geometry": {"type": "Point", "coordinates": [142.3, 38.2, 10.0]}
                }
            ]
        }"#;

        let collection: FeatureCollection = serde_json::from_str(raw).unwrap();
        assert_eq!(collection.features.len(), 1);

        let feature = &collection.features[0];
        let properties = feature.properties.as_ref().unwrap();
        assert_eq!(properties.mag, Some(5.0));
        assert_eq!(properties.title.as_deref(), Some("M 5.0 - somewhere"));
        match feature.geometry.as_ref().unwrap() {
            Geometry::Point { coordinates } => assert_eq!(coordinates[2], 10.0),
            other => panic!("expected a point, got {:?}", other),
        }
    }

    #[test]
    fn test_parses_plate_boundary_collection() {
        let raw = r#"{
            "type": "FeatureCollection",
            "features": [
                {
                    "type": "Feature",
                    "properties": null,
                    "geometry": {
                        "type": "LineString",
                        "coordinates": [[-30.0, 10.0], [-29.5, 10.5], [-29.0, 11.0]]
                    }
                }
            ]
        }"#;

        let collection: FeatureCollection = serde_json::from_str(raw).unwrap();
        assert!(collection.features[0].properties.is_none());
        match collection.features[0].geometry.as_ref().unwrap() {
            Geometry::LineString { coordinates } => assert_eq!(coordinates.len(), 3),
            other => panic!("expected a line string, got {:?}", other),
        }
    }

    #[test]
    fn test_tolerates_missing_properties_fields() {
        let raw = r#"{
            "features": [
                {"properties": {}, "geometry": {"type": "Point", "coordinates": [0.0, 0.0, 0.0]}}
            ]
        }"#;

        let collection: FeatureCollection = serde_json::from_str(raw).unwrap();
        let properties = collection.features[0].properties.as_ref().unwrap();
        assert!(properties.title.is_none());
        assert!(properties.mag.is_none());
        assert!(properties.time.is_none());
    }

    #[test]
    fn test_malformed_payload_is_an_error() {
        assert!(serde_json::from_str::<FeatureCollection>("{not json").is_err());
    }
}
