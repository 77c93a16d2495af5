use std::str::FromStr;

const USGS_ALL_DAY: &str =
    "https://earthquake.usgs.gov/earthquakes/feed/v1.0/summary/all_day.geojson";
const USGS_ALL_WEEK: &str =
    "https://earthquake.usgs.gov/earthquakes/feed/v1.0/summary/all_week.geojson";
const USGS_ALL_MONTH: &str =
    "https://earthquake.usgs.gov/earthquakes/feed/v1.0/summary/all_month.geojson";

const PLATE_BOUNDARIES: &str =
    "https://raw.githubusercontent.com/fraxen/tectonicplates/master/GeoJSON/PB2002_boundaries.json";

/// Which USGS summary window to display: the past day, week or month.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedWindow {
    Day,
    Week,
    Month,
}

impl FeedWindow {
    pub fn summary_url(self) -> &'static str {
        match self {
            FeedWindow::Day => USGS_ALL_DAY,
            FeedWindow::Week => USGS_ALL_WEEK,
            FeedWindow::Month => USGS_ALL_MONTH,
        }
    }
}

impl FromStr for FeedWindow {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "day" => Ok(FeedWindow::Day),
            "week" => Ok(FeedWindow::Week),
            "month" => Ok(FeedWindow::Month),
            other => Err(format!(
                "unknown feed window '{}', expected day, week or month",
                other
            )),
        }
    }
}

/// The feed endpoints the application loads at startup.
///
/// Passed explicitly into the launcher so an alternate window (or an entirely
/// different feed) can be substituted without touching the loading logic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedConfig {
    pub earthquakes_url: String,
    pub plates_url: String,
}

impl FeedConfig {
    pub fn with_window(window: FeedWindow) -> Self {
        Self {
            earthquakes_url: window.summary_url().to_string(),
            plates_url: PLATE_BOUNDARIES.to_string(),
        }
    }
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self::with_window(FeedWindow::Week)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_window_parsing() {
        assert_eq!("day".parse(), Ok(FeedWindow::Day));
        assert_eq!("WEEK".parse(), Ok(FeedWindow::Week));
        assert_eq!("month".parse(), Ok(FeedWindow::Month));
        assert!("year".parse::<FeedWindow>().is_err());
    }

    #[test]
    fn test_default_config_uses_weekly_feed() {
        let config = FeedConfig::default();
        assert!(config.earthquakes_url.ends_with("all_week.geojson"));
        assert!(config.plates_url.ends_with("PB2002_boundaries.json"));
    }
}
