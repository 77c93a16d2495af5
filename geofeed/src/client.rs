use std::fmt;
use std::thread::{self, JoinHandle};

use reqwest::StatusCode;

use crate::config::FeedConfig;
use crate::geojson::FeatureCollection;
use crate::types::{Earthquake, PlateBoundary};

/// Failure while loading one feed. There is no retry: a failed feed surfaces
/// here and the corresponding overlay stays empty.
#[derive(Debug)]
pub enum FeedError {
    Http(reqwest::Error),
    Status(StatusCode),
    Malformed(serde_json::Error),
    Worker(&'static str),
}

impl fmt::Display for FeedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FeedError::Http(e) => write!(f, "HTTP error: {}", e),
            FeedError::Status(status) => write!(f, "unexpected HTTP status: {}", status),
            FeedError::Malformed(e) => write!(f, "malformed feed payload: {}", e),
            FeedError::Worker(msg) => write!(f, "fetch worker failed: {}", msg),
        }
    }
}

impl std::error::Error for FeedError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FeedError::Http(e) => Some(e),
            FeedError::Malformed(e) => Some(e),
            FeedError::Status(_) | FeedError::Worker(_) => None,
        }
    }
}

impl From<reqwest::Error> for FeedError {
    fn from(err: reqwest::Error) -> Self {
        FeedError::Http(err)
    }
}

impl From<serde_json::Error> for FeedError {
    fn from(err: serde_json::Error) -> Self {
        FeedError::Malformed(err)
    }
}

/// Performs a blocking GET of a GeoJSON document and parses it.
pub fn fetch_feature_collection(url: &str) -> Result<FeatureCollection, FeedError> {
    let response = reqwest::blocking::get(url)?;
    if !response.status().is_success() {
        return Err(FeedError::Status(response.status()));
    }
    let body = response.text()?;
    let collection = serde_json::from_str(&body)?;
    Ok(collection)
}

pub fn fetch_earthquakes(url: &str) -> Result<Vec<Earthquake>, FeedError> {
    let collection = fetch_feature_collection(url)?;
    Ok(Earthquake::from_collection(&collection))
}

pub fn fetch_plate_boundaries(url: &str) -> Result<Vec<PlateBoundary>, FeedError> {
    let collection = fetch_feature_collection(url)?;
    Ok(PlateBoundary::from_collection(&collection))
}

/// Both feeds as loaded at startup. Each side carries its own result so a
/// single failed feed degrades to an empty overlay instead of blocking the
/// map from mounting.
#[derive(Debug)]
pub struct DatasetBundle {
    pub earthquakes: Result<Vec<Earthquake>, FeedError>,
    pub plates: Result<Vec<PlateBoundary>, FeedError>,
}

/// Fetches the earthquake and plate boundary feeds on independent worker
/// threads and joins both before returning. The two feeds have no data
/// dependency on each other, so the round-trips run concurrently.
pub fn load_datasets(config: &FeedConfig) -> DatasetBundle {
    let earthquakes_url = config.earthquakes_url.clone();
    let plates_url = config.plates_url.clone();

    let earthquakes = thread::spawn(move || fetch_earthquakes(&earthquakes_url));
    let plates = thread::spawn(move || fetch_plate_boundaries(&plates_url));

    DatasetBundle {
        earthquakes: join_fetch(earthquakes),
        plates: join_fetch(plates),
    }
}

fn join_fetch<T>(handle: JoinHandle<Result<Vec<T>, FeedError>>) -> Result<Vec<T>, FeedError> {
    handle
        .join()
        .unwrap_or(Err(FeedError::Worker("fetch thread panicked")))
}
