use std::env;
use std::path::PathBuf;

use geofeed::{depth_extent, load_datasets, FeedConfig, FeedWindow};
use logger::{Color, Logger};

/// Main entry point for the earthquake map viewer.
///
/// Loads the earthquake and plate boundary feeds (both requests in flight
/// concurrently), logs the outcome of each, and then mounts the map window.
/// A failed feed is logged and leaves its overlay empty; it never prevents
/// the map from opening.
///
/// # Usage
///
/// ```sh
/// cargo run -- [day|week|month] [log_dir]
/// ```
///
/// The feed window defaults to `week` and the log directory to the system
/// temp directory.
fn main() -> Result<(), String> {
    let args: Vec<String> = env::args().collect();
    if args.len() > 3 {
        return Err("Usage: program [day|week|month] [log_dir]".to_string());
    }

    let window = match args.get(1) {
        Some(arg) => arg.parse::<FeedWindow>()?,
        None => FeedWindow::Week,
    };

    let log_dir = args.get(2).map(PathBuf::from).unwrap_or_else(env::temp_dir);
    let logger = Logger::new(&log_dir, "quake_map").map_err(|e| e.to_string())?;

    let config = FeedConfig::with_window(window);
    logger
        .info(
            &format!("Fetching earthquake feed: {}", config.earthquakes_url),
            Color::Cyan,
            true,
        )
        .map_err(|e| e.to_string())?;
    logger
        .info(
            &format!("Fetching plate boundaries: {}", config.plates_url),
            Color::Cyan,
            true,
        )
        .map_err(|e| e.to_string())?;

    let bundle = load_datasets(&config);

    match &bundle.earthquakes {
        Ok(quakes) => {
            let _ = logger.info(
                &format!("Loaded {} earthquake events", quakes.len()),
                Color::Green,
                true,
            );
            if let Some((min, max)) = depth_extent(quakes) {
                let _ = logger.info(
                    &format!("Depth extent: min {} km, max {} km", min, max),
                    Color::Blue,
                    true,
                );
            }
        }
        Err(e) => {
            let _ = logger.warn(
                &format!("Earthquake feed unavailable, overlay will be empty: {}", e),
                true,
            );
        }
    }

    match &bundle.plates {
        Ok(plates) => {
            let _ = logger.info(
                &format!("Loaded {} plate boundaries", plates.len()),
                Color::Green,
                true,
            );
        }
        Err(e) => {
            let _ = logger.warn(
                &format!(
                    "Plate boundary feed unavailable, overlay will be empty: {}",
                    e
                ),
                true,
            );
        }
    }

    map_ui::run(bundle).map_err(|e| e.to_string())
}
