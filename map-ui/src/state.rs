use depth_scale::DepthScale;
use geofeed::{DatasetBundle, Earthquake, PlateBoundary};

use crate::tiles::BaseLayer;
use crate::types::MarkerDescriptor;

/// The two toggleable overlays drawn above the base tiles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Overlay {
    Earthquakes,
    PlateBoundaries,
}

impl Overlay {
    pub const ALL: [Overlay; 2] = [Overlay::Earthquakes, Overlay::PlateBoundaries];

    pub fn label(self) -> &'static str {
        match self {
            Overlay::Earthquakes => "Earthquakes",
            Overlay::PlateBoundaries => "Tectonic Plates",
        }
    }
}

/// Tracks which earthquake the detail window is open for.
pub struct SelectionState {
    pub earthquake: Option<Earthquake>,
}

impl SelectionState {
    pub fn new() -> SelectionState {
        Self { earthquake: None }
    }

    /// If the provided earthquake is already selected, it will be deselected.
    /// Otherwise, it will be selected.
    pub fn toggle_earthquake_selection(&mut self, earthquake: &Earthquake) {
        if self.earthquake.as_ref() == Some(earthquake) {
            self.earthquake = None;
        } else {
            self.earthquake = Some(earthquake.clone());
        }
    }
}

impl Default for SelectionState {
    fn default() -> Self {
        Self::new()
    }
}

/// The adapted datasets and layer toggles behind the map view.
///
/// Built once after both feed loads have been joined. A failed feed leaves
/// its overlay empty; it never prevents the view from being constructed.
pub struct ViewState {
    pub earthquakes: Vec<Earthquake>,
    /// One descriptor per earthquake, same order.
    pub markers: Vec<MarkerDescriptor>,
    pub plates: Vec<PlateBoundary>,
    pub base_layer: BaseLayer,
    pub show_earthquakes: bool,
    pub show_plates: bool,
}

impl ViewState {
    pub fn from_bundle(bundle: DatasetBundle, scale: &DepthScale) -> Self {
        let earthquakes = bundle.earthquakes.unwrap_or_default();
        let plates = bundle.plates.unwrap_or_default();
        let markers = earthquakes
            .iter()
            .map(|quake| MarkerDescriptor::adapt(quake, scale))
            .collect();

        Self {
            earthquakes,
            markers,
            plates,
            base_layer: BaseLayer::Street,
            show_earthquakes: true,
            show_plates: false,
        }
    }
}
