//! Depth-to-color classification for earthquake markers.
//!
//! Hypocenter depths are bucketed into an ordered list of bands, each mapped
//! to one display color. Bands are evaluated in declaration order and the
//! first match wins; depths covered by no band take the fallback color.

/// An RGB display color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

const SURFACE_GREEN: Rgb = Rgb(0x4C, 0xAF, 0x50);
const LIGHT_GREEN: Rgb = Rgb(0x8B, 0xC3, 0x4A);
const AMBER: Rgb = Rgb(0xFF, 0xC1, 0x07);
const DEEP_ORANGE: Rgb = Rgb(0xFF, 0x57, 0x22);
const ORANGE: Rgb = Rgb(0xFF, 0x98, 0x00);
const TOMATO: Rgb = Rgb(0xFF, 0x57, 0x33);
const DARK_RED: Rgb = Rgb(0xD3, 0x2F, 0x2F);
const FALLBACK: Rgb = Rgb(0x8B, 0x00, 0x00);

/// How a single band decides whether a depth belongs to it.
#[derive(Debug, Clone, Copy, PartialEq)]
enum BandRule {
    /// Matches one exact depth value.
    Exactly(f64),
    /// Matches depths in an inclusive range.
    Between(f64, f64),
    /// Matches depths at or above a lower bound.
    AtLeast(f64),
}

/// One depth band: a matching rule paired with its display color.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Band {
    rule: BandRule,
    color: Rgb,
}

impl Band {
    fn matches(&self, depth: f64) -> bool {
        match self.rule {
            BandRule::Exactly(value) => depth == value,
            BandRule::Between(min, max) => depth >= min && depth <= max,
            BandRule::AtLeast(min) => depth >= min,
        }
    }
}

/// A label/color pair as shown in the map legend.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LegendEntry {
    pub label: &'static str,
    pub color: Rgb,
}

static LEGEND: [LegendEntry; 7] = [
    LegendEntry { label: "Less than 0", color: SURFACE_GREEN },
    LegendEntry { label: "0-19", color: LIGHT_GREEN },
    LegendEntry { label: "20-39", color: AMBER },
    LegendEntry { label: "40-59", color: DEEP_ORANGE },
    LegendEntry { label: "60-79", color: ORANGE },
    LegendEntry { label: "80-99", color: TOMATO },
    LegendEntry { label: "100+", color: DARK_RED },
];

/// The ordered set of depth bands used to color earthquake markers.
///
/// Depths in (-1, 0), below -1, and in the unit gaps between integer bands
/// (for example 19.5) intentionally fall through to the fallback color; the
/// band boundaries reproduce the published depth chart as-is.
#[derive(Debug, Clone, PartialEq)]
pub struct DepthScale {
    bands: Vec<Band>,
    fallback: Rgb,
}

impl Default for DepthScale {
    fn default() -> Self {
        Self {
            bands: vec![
                Band { rule: BandRule::Exactly(-1.0), color: SURFACE_GREEN },
                Band { rule: BandRule::Between(0.0, 19.0), color: LIGHT_GREEN },
                Band { rule: BandRule::Between(20.0, 39.0), color: AMBER },
                Band { rule: BandRule::Between(40.0, 59.0), color: DEEP_ORANGE },
                Band { rule: BandRule::Between(60.0, 79.0), color: ORANGE },
                Band { rule: BandRule::Between(80.0, 99.0), color: TOMATO },
                Band { rule: BandRule::AtLeast(100.0), color: DARK_RED },
            ],
            fallback: FALLBACK,
        }
    }
}

impl DepthScale {
    /// Returns the display color for a depth in kilometers.
    ///
    /// Total over all finite depths: the first matching band wins, and depths
    /// matched by no band return the fallback color.
    pub fn classify(&self, depth: f64) -> Rgb {
        self.bands
            .iter()
            .find(|band| band.matches(depth))
            .map(|band| band.color)
            .unwrap_or(self.fallback)
    }

    /// The legend rows, in the order they are displayed.
    ///
    /// The legend is static; it does not track the loaded dataset.
    pub fn legend(&self) -> &'static [LegendEntry] {
        &LEGEND
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_documented_band_colors() {
        let scale = DepthScale::default();
        let cases = [
            (-1.0, SURFACE_GREEN),
            (0.0, LIGHT_GREEN),
            (19.0, LIGHT_GREEN),
            (20.0, AMBER),
            (39.0, AMBER),
            (40.0, DEEP_ORANGE),
            (59.0, DEEP_ORANGE),
            (60.0, ORANGE),
            (79.0, ORANGE),
            (80.0, TOMATO),
            (99.0, TOMATO),
            (100.0, DARK_RED),
            (150.0, DARK_RED),
        ];
        for (depth, expected) in cases {
            assert_eq!(scale.classify(depth), expected, "depth {}", depth);
        }
    }

    #[test]
    fn test_unmatched_depths_take_fallback() {
        let scale = DepthScale::default();
        assert_eq!(scale.classify(-0.5), FALLBACK);
        assert_eq!(scale.classify(-2.0), FALLBACK);
        assert_eq!(scale.classify(19.5), FALLBACK);
    }

    #[test]
    fn test_classify_is_pure() {
        let scale = DepthScale::default();
        assert_eq!(scale.classify(42.0), scale.classify(42.0));
        assert_eq!(scale.classify(-1.0), scale.classify(-1.0));
    }

    #[test]
    fn test_legend_has_seven_entries_in_order() {
        let scale = DepthScale::default();
        let legend = scale.legend();
        assert_eq!(legend.len(), 7);
        assert_eq!(legend[0].label, "Less than 0");
        assert_eq!(legend[6].label, "100+");
        assert_eq!(legend[0].color, SURFACE_GREEN);
        assert_eq!(legend[6].color, DARK_RED);
    }
}
