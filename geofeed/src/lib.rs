//! Loading and decoding of the public GeoJSON feeds shown on the map:
//! the USGS earthquake summary feed and the PB2002 tectonic plate
//! boundaries.

mod client;
pub mod config;
mod geojson;
mod types;

pub use client::{
    fetch_earthquakes, fetch_feature_collection, fetch_plate_boundaries, load_datasets,
    DatasetBundle, FeedError,
};
pub use config::{FeedConfig, FeedWindow};
pub use geojson::{Feature, FeatureCollection, Geometry, Properties};
pub use types::{depth_extent, Earthquake, PlateBoundary};
